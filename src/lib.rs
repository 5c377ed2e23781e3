//! Folioterm page model: the state machines behind the terminal portfolio viewer.
//!
//! Everything in here is pure and synchronous. The binary owns the terminal;
//! this crate owns the page — sections, the navigation overlay, scroll
//! animation, reveal markers, and the contact flow — so all of it can be
//! exercised headlessly in tests.

pub mod contact;
pub mod deferred;
mod logging;
pub mod motion;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod scroll;
mod telemetry;
pub mod viewport;

pub use logging::{init_logging, log_debug, log_file_path};
pub use telemetry::init_tracing;
