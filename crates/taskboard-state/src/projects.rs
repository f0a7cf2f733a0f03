//! Projects container.

use std::sync::{Arc, Mutex};

use taskboard_api::Api;
use taskboard_core::{ApiResult, Notify};
use taskboard_domain::{CreateProjectPayload, Project, ProjectId};

use crate::collection::{lock, report_local_failure, run_load, Collection, LoadingGuard};

pub struct ProjectsStore {
    api: Arc<dyn Api>,
    notifier: Arc<dyn Notify>,
    projects: Mutex<Collection<Project>>,
}

impl ProjectsStore {
    pub fn new(api: Arc<dyn Api>, notifier: Arc<dyn Notify>) -> Self {
        Self {
            api,
            notifier,
            projects: Mutex::new(Collection::default()),
        }
    }

    pub fn projects(&self) -> Vec<Project> {
        lock(&self.projects).items.clone()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.projects).loading
    }

    pub fn error(&self) -> Option<String> {
        lock(&self.projects).error.clone()
    }

    pub async fn load_projects(&self) -> ApiResult<()> {
        run_load(
            &self.projects,
            &*self.notifier,
            "Could not load projects",
            self.api.list_projects(),
        )
        .await
    }

    pub async fn create_project(&self, payload: CreateProjectPayload) -> ApiResult<Project> {
        let _guard = LoadingGuard::begin(&self.projects);
        match self.api.create_project(&payload).await {
            Ok(project) => {
                lock(&self.projects).items.push(project.clone());
                self.notifier
                    .success(&format!("Project \"{}\" created", project.name));
                Ok(project)
            }
            Err(err) => {
                report_local_failure(&*self.notifier, &err, "Could not create the project");
                Err(err)
            }
        }
    }

    pub async fn delete_project(&self, id: ProjectId) -> ApiResult<()> {
        let _guard = LoadingGuard::begin(&self.projects);
        match self.api.delete_project(id).await {
            Ok(()) => {
                lock(&self.projects).items.retain(|p| p.id != id);
                self.notifier.success("Project deleted");
                Ok(())
            }
            Err(err) => {
                report_local_failure(&*self.notifier, &err, "Could not delete the project");
                Err(err)
            }
        }
    }
}
