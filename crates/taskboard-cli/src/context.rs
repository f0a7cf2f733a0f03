use std::sync::Arc;

use taskboard_api::{ApiClient, InMemorySessionStore, SessionStore, TOKEN_KEY};
use taskboard_core::AppConfig;
use taskboard_state::AppState;

use crate::output::{ConsoleNotifier, LoginHintNavigator};

pub struct CliContext {
    pub state: AppState,
    session: Arc<InMemorySessionStore>,
}

impl CliContext {
    /// Wire up the container bundle for one invocation. The session lives as
    /// long as the process; a token passed in seeds it so authenticated
    /// commands work without a fresh login.
    pub fn new(api_url: Option<String>, token: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| AppConfig::load().api_url);
        tracing::debug!(%api_url, "connecting");

        let session = Arc::new(match token.as_deref() {
            Some(token) => InMemorySessionStore::with_token(token),
            None => InMemorySessionStore::new(),
        });
        let notifier = Arc::new(ConsoleNotifier);
        let navigator = Arc::new(LoginHintNavigator);
        let api = Arc::new(ApiClient::new(
            api_url,
            session.clone(),
            notifier.clone(),
            navigator.clone(),
        ));

        Self {
            state: AppState::new(api, session.clone(), notifier, navigator),
            session,
        }
    }

    /// The session token issued by the last login/register, if any.
    pub fn session_token(&self) -> Option<String> {
        self.session.get(TOKEN_KEY)
    }
}
