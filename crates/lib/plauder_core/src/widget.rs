//! The chat widget: one submission cycle from input to rendered reply.

use std::cell::Cell;

use tracing::{debug, warn};

use crate::error::ChatErrorKind;
use crate::models::{OutgoingMessage, Sender};
use crate::transport::ChatTransport;
use crate::view::ChatView;

/// Shown as the `ai` entry whenever a cycle fails, whatever the cause.
pub const FALLBACK_MESSAGE: &str = "Entschuldigung, es ist ein Fehler aufgetreten.";

/// Trims the way a browser trims form input: Unicode whitespace plus
/// U+FEFF, which `str::trim` keeps.
pub fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// What a call to [`ChatWidget::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; nothing happened.
    Ignored,
    /// Another submission was in flight; nothing happened.
    Busy,
    /// The reply was rendered.
    Replied,
    /// The fallback message was rendered.
    Failed(ChatErrorKind),
}

/// Bridges one text input to one chat endpoint.
///
/// The widget owns its view and transport; share it between event handlers
/// with `Rc`. While a request is in flight the submit control is disabled
/// and further submissions return [`SubmitOutcome::Busy`].
pub struct ChatWidget<V, T> {
    view: V,
    transport: T,
    sending: Cell<bool>,
}

impl<V, T> ChatWidget<V, T>
where
    V: ChatView,
    T: ChatTransport,
{
    pub fn new(view: V, transport: T) -> Self {
        Self {
            view,
            transport,
            sending: Cell::new(false),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn is_sending(&self) -> bool {
        self.sending.get()
    }

    /// Runs one submission cycle for `raw_text`.
    ///
    /// Suspends only while awaiting the transport. Every accepted submission
    /// renders exactly one `user` entry before the request and exactly one
    /// `ai` entry after it, and always leaves the control enabled with the
    /// input focused.
    pub async fn submit(&self, raw_text: &str) -> SubmitOutcome {
        let text = trim_input(raw_text);
        if text.is_empty() {
            return SubmitOutcome::Ignored;
        }
        if self.sending.get() {
            debug!("submission rejected, request already in flight");
            return SubmitOutcome::Busy;
        }

        self.view.append_message(text, Sender::User);
        self.view.clear_input();
        self.sending.set(true);
        self.view.set_sending(true);

        let outcome = match self.transport.send(&OutgoingMessage::new(text)).await {
            Ok(reply) => {
                self.view.append_message(&reply.reply, Sender::Ai);
                SubmitOutcome::Replied
            }
            Err(e) => {
                warn!(kind = %e.kind(), error = %e, "chat request failed");
                self.view.append_message(FALLBACK_MESSAGE, Sender::Ai);
                SubmitOutcome::Failed(e.kind())
            }
        };

        self.sending.set(false);
        self.view.set_sending(false);
        self.view.focus_input();

        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::*;
    use crate::error::ChatError;
    use crate::models::{DisplayedMessage, IncomingReply};
    use crate::view::{MemoryView, ViewEvent};

    /// Replays scripted results and records every request.
    #[derive(Default)]
    struct ScriptedTransport {
        responses: RefCell<VecDeque<Result<IncomingReply, ChatError>>>,
        requests: RefCell<Vec<OutgoingMessage>>,
    }

    impl ScriptedTransport {
        fn replying(replies: &[&str]) -> Self {
            let transport = Self::default();
            for reply in replies {
                transport.push(Ok(IncomingReply {
                    reply: reply.to_string(),
                }));
            }
            transport
        }

        fn failing(error: ChatError) -> Self {
            let transport = Self::default();
            transport.push(Err(error));
            transport
        }

        fn push(&self, result: Result<IncomingReply, ChatError>) {
            self.responses.borrow_mut().push_back(result);
        }
    }

    #[async_trait(?Send)]
    impl ChatTransport for ScriptedTransport {
        async fn send(&self, message: &OutgoingMessage) -> Result<IncomingReply, ChatError> {
            self.requests.borrow_mut().push(message.clone());
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ChatError::Network("no scripted response".into())))
        }
    }

    /// Holds every request until released, then echoes it.
    #[derive(Default)]
    struct GatedTransport {
        gate: Notify,
    }

    #[async_trait(?Send)]
    impl ChatTransport for GatedTransport {
        async fn send(&self, message: &OutgoingMessage) -> Result<IncomingReply, ChatError> {
            self.gate.notified().await;
            Ok(IncomingReply {
                reply: format!("echo: {}", message.message),
            })
        }
    }

    fn user(text: &str) -> DisplayedMessage {
        DisplayedMessage::new(text, Sender::User)
    }

    fn ai(text: &str) -> DisplayedMessage {
        DisplayedMessage::new(text, Sender::Ai)
    }

    #[tokio::test]
    async fn successful_reply_is_rendered_as_ai() {
        let widget = ChatWidget::new(MemoryView::new(), ScriptedTransport::replying(&["hello"]));
        widget.view().set_input("  Hallo Welt  ");

        let outcome = widget.submit(&widget.view().input()).await;

        assert_eq!(outcome, SubmitOutcome::Replied);
        assert_eq!(widget.view().transcript(), vec![user("Hallo Welt"), ai("hello")]);
        assert_eq!(
            widget.transport().requests.borrow().as_slice(),
            &[OutgoingMessage::new("Hallo Welt")]
        );
        assert_eq!(widget.view().input(), "");
    }

    #[tokio::test]
    async fn effects_happen_in_order() {
        let widget = ChatWidget::new(MemoryView::new(), ScriptedTransport::replying(&["hello"]));
        widget.submit("Hallo").await;

        assert_eq!(
            widget.view().events(),
            vec![
                ViewEvent::Append(user("Hallo")),
                ViewEvent::ClearInput,
                ViewEvent::SetSending(true),
                ViewEvent::Append(ai("hello")),
                ViewEvent::SetSending(false),
                ViewEvent::FocusInput,
            ]
        );
    }

    #[test]
    fn trim_input_strips_byte_order_mark() {
        assert_eq!(trim_input("\u{FEFF} Hallo \u{FEFF}"), "Hallo");
        assert_eq!(trim_input(" \u{FEFF} "), "");
        assert_eq!(trim_input("a\u{FEFF}b"), "a\u{FEFF}b");
    }

    #[tokio::test]
    async fn blank_input_has_no_effect() {
        for raw in ["", "   ", "\n\t  ", "\u{FEFF}", " \u{FEFF} ", "\u{00A0}\u{2003}"] {
            let widget = ChatWidget::new(MemoryView::new(), ScriptedTransport::replying(&["x"]));
            widget.view().set_input(raw);

            let outcome = widget.submit(raw).await;

            assert_eq!(outcome, SubmitOutcome::Ignored);
            assert!(widget.view().events().is_empty());
            assert!(widget.transport().requests.borrow().is_empty());
            assert_eq!(widget.view().input(), raw, "input must be left untouched");
        }
    }

    #[tokio::test]
    async fn http_status_failure_renders_fallback() {
        let widget = ChatWidget::new(
            MemoryView::new(),
            ScriptedTransport::failing(ChatError::HttpStatus(500)),
        );

        let outcome = widget.submit("Hallo").await;

        assert_eq!(outcome, SubmitOutcome::Failed(ChatErrorKind::HttpStatus));
        assert_eq!(
            widget.view().transcript(),
            vec![user("Hallo"), ai(FALLBACK_MESSAGE)]
        );
        assert!(!widget.view().is_sending());
        assert!(widget.view().is_focused());
    }

    #[tokio::test]
    async fn network_failure_matches_http_failure() {
        let http = ChatWidget::new(
            MemoryView::new(),
            ScriptedTransport::failing(ChatError::HttpStatus(500)),
        );
        let network = ChatWidget::new(
            MemoryView::new(),
            ScriptedTransport::failing(ChatError::Network("connection refused".into())),
        );

        http.submit("Hallo").await;
        let outcome = network.submit("Hallo").await;

        assert_eq!(outcome, SubmitOutcome::Failed(ChatErrorKind::Network));
        assert_eq!(network.view().events(), http.view().events());
    }

    #[tokio::test]
    async fn decode_failure_does_not_leak_error_text() {
        let widget = ChatWidget::new(
            MemoryView::new(),
            ScriptedTransport::failing(ChatError::Decode("expected value at line 1".into())),
        );

        widget.submit("Hallo").await;

        let transcript = widget.view().transcript();
        assert_eq!(transcript.last(), Some(&ai(FALLBACK_MESSAGE)));
        assert!(transcript.iter().all(|m| !m.text.contains("expected value")));
    }

    #[tokio::test]
    async fn sequential_submissions_produce_ordered_pairs() {
        let widget = ChatWidget::new(
            MemoryView::new(),
            ScriptedTransport::replying(&["erste", "zweite"]),
        );

        widget.submit("gleich").await;
        widget.submit("gleich").await;

        assert_eq!(
            widget.view().transcript(),
            vec![user("gleich"), ai("erste"), user("gleich"), ai("zweite")]
        );
        assert_eq!(widget.transport().requests.borrow().len(), 2);
    }

    #[tokio::test]
    async fn user_entry_precedes_reply_and_control_is_disabled_while_in_flight() {
        let widget = ChatWidget::new(MemoryView::new(), GatedTransport::default());

        let mut first = Box::pin(widget.submit("eins"));
        assert!(futures::poll!(first.as_mut()).is_pending());

        assert_eq!(widget.view().transcript(), vec![user("eins")]);
        assert!(widget.is_sending());
        assert!(widget.view().is_sending());

        widget.transport().gate.notify_one();
        assert_eq!(first.await, SubmitOutcome::Replied);

        assert_eq!(
            widget.view().transcript(),
            vec![user("eins"), ai("echo: eins")]
        );
        assert!(!widget.is_sending());
        assert!(widget.view().is_focused());
    }

    #[tokio::test]
    async fn concurrent_submission_is_rejected() {
        let widget = ChatWidget::new(MemoryView::new(), GatedTransport::default());

        let mut first = Box::pin(widget.submit("eins"));
        assert!(futures::poll!(first.as_mut()).is_pending());

        assert_eq!(widget.submit("zwei").await, SubmitOutcome::Busy);
        assert_eq!(widget.view().transcript(), vec![user("eins")]);

        widget.transport().gate.notify_one();
        first.await;

        // Back to idle: the next submission goes through.
        widget.transport().gate.notify_one();
        assert_eq!(widget.submit("zwei").await, SubmitOutcome::Replied);
        assert_eq!(
            widget.view().transcript(),
            vec![user("eins"), ai("echo: eins"), user("zwei"), ai("echo: zwei")]
        );
    }
}
