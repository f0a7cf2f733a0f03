//! Authenticated-session state.

use std::sync::{Arc, Mutex, PoisonError};

use taskboard_api::{Api, SessionStore, TOKEN_KEY, USER_KEY};
use taskboard_core::{ApiResult, Navigator, Notify};
use taskboard_domain::{AuthResponse, LoginPayload, RegisterPayload, User};

use crate::collection::report_local_failure;

/// Holds the current authenticated user and owns the session store keys.
///
/// The token itself is only ever read by the transport; this container
/// writes it on login/register and removes it on logout.
pub struct AuthState {
    api: Arc<dyn Api>,
    session: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notify>,
    navigator: Arc<dyn Navigator>,
    current_user: Mutex<Option<User>>,
}

impl AuthState {
    /// Create the auth container and restore any persisted session.
    pub fn new(
        api: Arc<dyn Api>,
        session: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notify>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let state = Self {
            api,
            session,
            notifier,
            navigator,
            current_user: Mutex::new(None),
        };
        state.restore();
        state
    }

    pub fn current_user(&self) -> Option<User> {
        self.current_user
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    pub async fn login(&self, payload: LoginPayload) -> ApiResult<User> {
        match self.api.login(&payload).await {
            Ok(auth) => {
                self.store_session(&auth);
                self.notifier.success("Signed in successfully");
                Ok(auth.user)
            }
            Err(err) => {
                report_local_failure(
                    &*self.notifier,
                    &err,
                    "Sign-in failed: check your email and password",
                );
                Err(err)
            }
        }
    }

    pub async fn register(&self, payload: RegisterPayload) -> ApiResult<User> {
        match self.api.register(&payload).await {
            Ok(auth) => {
                self.store_session(&auth);
                self.notifier.success("Welcome aboard, your account is ready");
                Ok(auth.user)
            }
            Err(err) => {
                report_local_failure(
                    &*self.notifier,
                    &err,
                    "Registration failed (is the email already registered?)",
                );
                Err(err)
            }
        }
    }

    pub fn logout(&self) {
        self.session.remove(TOKEN_KEY);
        self.session.remove(USER_KEY);
        *self
            .current_user
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = None;
        self.navigator.redirect_to_login();
        self.notifier.success("Signed out");
    }

    fn store_session(&self, auth: &AuthResponse) {
        self.session.put(TOKEN_KEY, &auth.token);
        match serde_json::to_string(&auth.user) {
            Ok(json) => self.session.put(USER_KEY, &json),
            Err(err) => tracing::error!(error = %err, "could not serialize the user record"),
        }
        *self
            .current_user
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(auth.user.clone());
    }

    /// Pick up a session left in the store by a previous login. A corrupt
    /// user record tears the whole session down.
    fn restore(&self) {
        let token = self.session.get(TOKEN_KEY);
        let user_json = self.session.get(USER_KEY);
        if let (Some(_), Some(json)) = (token, user_json) {
            match serde_json::from_str::<User>(&json) {
                Ok(user) => {
                    *self
                        .current_user
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner) = Some(user);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "stored user record is corrupt, discarding session");
                    self.logout();
                }
            }
        }
    }
}
