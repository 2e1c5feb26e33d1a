//! Intent routing

pub mod dispatcher;

pub use dispatcher::{IntentDispatcher, handle_event};
