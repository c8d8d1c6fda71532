//! Session state and session construction.
//!
//! - `store`: `SessionStore`, the request-fenced result/loading/error container
//! - `factory`: `SessionFactory`, which wires lookup strategies and platform
//!   backends into an `InteractionSession`

mod factory;
mod store;

pub use factory::SessionFactory;
pub use store::{LookupKind, LookupOutcome, SessionStore};
