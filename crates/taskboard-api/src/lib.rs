pub mod api;
pub mod client;
pub mod session;

pub use api::Api;
pub use client::ApiClient;
pub use session::{InMemorySessionStore, SessionStore, TOKEN_KEY, USER_KEY};
