//! Request and session models for the HTTP surface.

pub mod handoff;
pub mod session;

pub use handoff::CartHandoff;
pub use session::keys as session_keys;
