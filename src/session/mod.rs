mod store;
pub mod token;

pub use store::{AiTicket, SessionKey, SessionStore, UiSession};
