//! # plauder_core
//!
//! Core logic for the Plauder chat widget: the wire types, the rendering
//! interface, the transport seam, and the [`widget::ChatWidget`] that ties
//! them into one submission cycle.

pub mod error;
pub mod models;
pub mod transport;
pub mod view;
pub mod widget;

pub use error::{ChatError, ChatErrorKind};
pub use models::{DisplayedMessage, IncomingReply, OutgoingMessage, Sender};
pub use transport::{ChatTransport, HttpTransport};
pub use view::ChatView;
pub use widget::{ChatWidget, FALLBACK_MESSAGE, SubmitOutcome, trim_input};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
