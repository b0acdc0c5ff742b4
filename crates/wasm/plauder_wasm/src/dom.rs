//! DOM-backed [`ChatView`].

use plauder_core::models::Sender;
use plauder_core::view::ChatView;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement};

/// Looks up `#id` and casts it to the expected element type.
pub(crate) fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{id} not found")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} has an unexpected type")))
}

/// Renders the transcript into a container element and drives the input
/// and submit button of the host page.
pub struct DomView {
    document: Document,
    input: HtmlInputElement,
    button: HtmlButtonElement,
    container: Element,
}

impl DomView {
    pub fn new(
        document: Document,
        input: HtmlInputElement,
        button: HtmlButtonElement,
        container: Element,
    ) -> Self {
        Self {
            document,
            input,
            button,
            container,
        }
    }

    /// Current value of the text input.
    pub fn input_value(&self) -> String {
        self.input.value()
    }
}

impl ChatView for DomView {
    fn append_message(&self, text: &str, sender: Sender) {
        let element = match self.document.create_element("div") {
            Ok(element) => element,
            Err(e) => {
                warn!(?e, "failed to create message element");
                return;
            }
        };
        let [base, by_sender] = sender.class_names();
        if let Err(e) = element.class_list().add_2(base, by_sender) {
            warn!(?e, "failed to set message classes");
        }
        // Text content, never markup: replies are untrusted.
        element.set_text_content(Some(text));

        if let Err(e) = self.container.append_child(&element) {
            warn!(?e, "failed to append message element");
            return;
        }
        self.container.set_scroll_top(self.container.scroll_height());
    }

    fn clear_input(&self) {
        self.input.set_value("");
    }

    fn set_sending(&self, sending: bool) {
        self.button.set_disabled(sending);
    }

    fn focus_input(&self) {
        if let Err(e) = self.input.focus() {
            warn!(?e, "failed to focus input");
        }
    }
}
