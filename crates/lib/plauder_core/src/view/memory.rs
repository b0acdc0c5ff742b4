//! Headless view that keeps the transcript and control state in memory.

use std::cell::{Cell, RefCell};

use crate::models::{DisplayedMessage, Sender};

use super::ChatView;

/// A single call made on a [`MemoryView`], in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Append(DisplayedMessage),
    ClearInput,
    SetSending(bool),
    FocusInput,
}

#[derive(Debug, Default)]
pub struct MemoryView {
    events: RefCell<Vec<ViewEvent>>,
    input: RefCell<String>,
    sending: Cell<bool>,
    focused: Cell<bool>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text input value, as a user typing would.
    pub fn set_input(&self, value: &str) {
        *self.input.borrow_mut() = value.to_string();
        self.focused.set(true);
    }

    pub fn input(&self) -> String {
        self.input.borrow().clone()
    }

    pub fn is_sending(&self) -> bool {
        self.sending.get()
    }

    pub fn is_focused(&self) -> bool {
        self.focused.get()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    /// The transcript in display order.
    pub fn transcript(&self) -> Vec<DisplayedMessage> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Append(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl ChatView for MemoryView {
    fn append_message(&self, text: &str, sender: Sender) {
        self.events
            .borrow_mut()
            .push(ViewEvent::Append(DisplayedMessage::new(text, sender)));
    }

    fn clear_input(&self) {
        self.input.borrow_mut().clear();
        self.events.borrow_mut().push(ViewEvent::ClearInput);
    }

    fn set_sending(&self, sending: bool) {
        self.sending.set(sending);
        // A disabled control takes focus away from the form.
        if sending {
            self.focused.set(false);
        }
        self.events.borrow_mut().push(ViewEvent::SetSending(sending));
    }

    fn focus_input(&self) {
        self.focused.set(true);
        self.events.borrow_mut().push(ViewEvent::FocusInput);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_keeps_append_order() {
        let view = MemoryView::new();
        view.append_message("eins", Sender::User);
        view.set_sending(true);
        view.append_message("zwei", Sender::Ai);

        assert_eq!(
            view.transcript(),
            vec![
                DisplayedMessage::new("eins", Sender::User),
                DisplayedMessage::new("zwei", Sender::Ai),
            ]
        );
        assert_eq!(view.events().len(), 3);
    }

    #[test]
    fn clear_input_empties_value() {
        let view = MemoryView::new();
        view.set_input("draft");
        view.clear_input();
        assert_eq!(view.input(), "");
    }

    #[test]
    fn sending_flag_tracks_last_call() {
        let view = MemoryView::new();
        view.set_sending(true);
        assert!(view.is_sending());
        assert!(!view.is_focused());
        view.set_sending(false);
        view.focus_input();
        assert!(!view.is_sending());
        assert!(view.is_focused());
    }
}
