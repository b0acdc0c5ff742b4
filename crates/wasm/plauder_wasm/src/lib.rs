//! # plauder_wasm
//!
//! Browser bindings for the Plauder chat widget.
//!
//! ```js
//! import init, { mount_default } from "./pkg/plauder_wasm.js";
//! await init();
//! const chat = mount_default();
//! ```

pub mod dom;

use std::rc::Rc;

use plauder_core::transport::{DEFAULT_ENDPOINT, HttpTransport, resolve_endpoint};
use plauder_core::widget::ChatWidget;
use tracing::info;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlFormElement};

use crate::dom::{DomView, element_by_id};

/// Element ids used by [`mount_default`].
pub const FORM_ID: &str = "chat-form";
pub const INPUT_ID: &str = "message-input";
pub const BUTTON_ID: &str = "send-button";
pub const CONTAINER_ID: &str = "chat-container";

/// Runs once when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

/// Returns the version of the plauder-wasm package.
#[wasm_bindgen]
pub fn version() -> String {
    plauder_core::version().to_string()
}

/// A widget attached to a form. Call `unmount()` to detach it.
///
/// Once freed (explicitly or by the JS garbage collector) the listener's
/// closure is gone, so the handle must outlive the page's use of the widget.
#[wasm_bindgen]
pub struct ChatMount {
    form: HtmlFormElement,
    on_submit: Closure<dyn FnMut(Event)>,
}

#[wasm_bindgen]
impl ChatMount {
    /// Removes the submit listener. Requests already in flight still settle.
    pub fn unmount(self) -> Result<(), JsValue> {
        self.form
            .remove_event_listener_with_callback("submit", self.on_submit.as_ref().unchecked_ref())
    }
}

/// Attaches a chat widget to the four host elements.
///
/// `endpoint` defaults to `chat` and is resolved against the document's base URI.
/// The returned handle owns the submit listener; keep it alive for as long
/// as the widget should respond.
#[wasm_bindgen]
pub fn mount(
    form_id: &str,
    input_id: &str,
    button_id: &str,
    container_id: &str,
    endpoint: Option<String>,
) -> Result<ChatMount, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    let form: HtmlFormElement = element_by_id(&document, form_id)?;
    let view = DomView::new(
        document.clone(),
        element_by_id(&document, input_id)?,
        element_by_id(&document, button_id)?,
        element_by_id(&document, container_id)?,
    );

    let base = document
        .base_uri()?
        .ok_or_else(|| JsValue::from_str("document has no base URI"))?;
    let endpoint = resolve_endpoint(&base, endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))
        .map_err(|e| JsValue::from_str(&format!("invalid chat endpoint: {e}")))?;

    info!(%endpoint, form_id, "mounting chat widget");

    let widget = Rc::new(ChatWidget::new(view, HttpTransport::new(endpoint)));

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let widget = Rc::clone(&widget);
        let raw = widget.view().input_value();
        wasm_bindgen_futures::spawn_local(async move {
            widget.submit(&raw).await;
        });
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;

    Ok(ChatMount { form, on_submit })
}

/// [`mount`] with the default element ids and endpoint.
#[wasm_bindgen]
pub fn mount_default() -> Result<ChatMount, JsValue> {
    mount(FORM_ID, INPUT_ID, BUTTON_ID, CONTAINER_ID, None)
}
