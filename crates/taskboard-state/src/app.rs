//! Application-wide container bundle.
//!
//! Containers are constructed once here and passed by reference to whichever
//! component needs them; nothing in this crate is an ambient singleton.

use std::sync::Arc;

use taskboard_api::{Api, SessionStore};
use taskboard_core::{Navigator, Notify};

use crate::auth::AuthState;
use crate::comments::CommentsStore;
use crate::projects::ProjectsStore;
use crate::tasks::TasksStore;
use crate::teams::TeamsStore;

pub struct AppState {
    pub auth: Arc<AuthState>,
    pub teams: Arc<TeamsStore>,
    pub projects: Arc<ProjectsStore>,
    pub tasks: Arc<TasksStore>,
    pub comments: Arc<CommentsStore>,
}

impl AppState {
    pub fn new(
        api: Arc<dyn Api>,
        session: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notify>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let auth = Arc::new(AuthState::new(
            api.clone(),
            session,
            notifier.clone(),
            navigator,
        ));
        Self {
            teams: Arc::new(TeamsStore::new(api.clone(), notifier.clone())),
            projects: Arc::new(ProjectsStore::new(api.clone(), notifier.clone())),
            tasks: Arc::new(TasksStore::new(api.clone(), notifier.clone(), auth.clone())),
            comments: Arc::new(CommentsStore::new(api, notifier)),
            auth,
        }
    }
}
