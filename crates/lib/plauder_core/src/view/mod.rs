//! Rendering interface for the chat widget.
//!
//! The widget never touches a document directly; it drives a [`ChatView`].
//! The browser binding renders into the DOM, [`memory::MemoryView`] records
//! everything in memory.

pub mod memory;

use crate::models::Sender;

pub use memory::{MemoryView, ViewEvent};

/// The four UI effects a submission cycle produces.
///
/// Methods take `&self`: views wrap handles with interior mutability
/// (DOM nodes, `RefCell`s) and are shared with in-flight submissions.
pub trait ChatView {
    /// Appends one transcript entry and scrolls the transcript to the bottom.
    fn append_message(&self, text: &str, sender: Sender);

    /// Clears the text input.
    fn clear_input(&self);

    /// Disables (`true`) or re-enables (`false`) the submit control.
    fn set_sending(&self, sending: bool);

    /// Returns focus to the text input.
    fn focus_input(&self);
}
