//! Teams container: the team list plus its two auxiliary collections, the
//! user directory and the currently-open team's member list.

use std::sync::{Arc, Mutex};

use taskboard_api::Api;
use taskboard_core::{ApiResult, Notify};
use taskboard_domain::{AddMemberPayload, CreateTeamPayload, Team, TeamId, TeamMember, User};

use crate::collection::{lock, report_local_failure, run_load, Collection, LoadingGuard};

pub struct TeamsStore {
    api: Arc<dyn Api>,
    notifier: Arc<dyn Notify>,
    teams: Mutex<Collection<Team>>,
    users: Mutex<Collection<User>>,
    members: Mutex<Collection<TeamMember>>,
}

impl TeamsStore {
    pub fn new(api: Arc<dyn Api>, notifier: Arc<dyn Notify>) -> Self {
        Self {
            api,
            notifier,
            teams: Mutex::new(Collection::default()),
            users: Mutex::new(Collection::default()),
            members: Mutex::new(Collection::default()),
        }
    }

    pub fn teams(&self) -> Vec<Team> {
        lock(&self.teams).items.clone()
    }

    pub fn users(&self) -> Vec<User> {
        lock(&self.users).items.clone()
    }

    pub fn members(&self) -> Vec<TeamMember> {
        lock(&self.members).items.clone()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.teams).loading
    }

    pub fn error(&self) -> Option<String> {
        lock(&self.teams).error.clone()
    }

    pub async fn load_teams(&self) -> ApiResult<()> {
        run_load(
            &self.teams,
            &*self.notifier,
            "Could not load your teams",
            self.api.list_teams(),
        )
        .await
    }

    pub async fn create_team(&self, name: impl Into<String>) -> ApiResult<Team> {
        let _guard = LoadingGuard::begin(&self.teams);
        let payload = CreateTeamPayload { name: name.into() };
        match self.api.create_team(&payload).await {
            Ok(team) => {
                lock(&self.teams).items.push(team.clone());
                self.notifier
                    .success(&format!("Team \"{}\" created", team.name));
                Ok(team)
            }
            Err(err) => {
                report_local_failure(&*self.notifier, &err, "Could not create the team");
                Err(err)
            }
        }
    }

    pub async fn delete_team(&self, id: TeamId) -> ApiResult<()> {
        let _guard = LoadingGuard::begin(&self.teams);
        match self.api.delete_team(id).await {
            Ok(()) => {
                lock(&self.teams).items.retain(|t| t.id != id);
                self.notifier.success("Team deleted");
                Ok(())
            }
            Err(err) => {
                report_local_failure(
                    &*self.notifier,
                    &err,
                    "Could not delete the team, try again later",
                );
                Err(err)
            }
        }
    }

    pub async fn load_users(&self) -> ApiResult<()> {
        run_load(
            &self.users,
            &*self.notifier,
            "Could not load the user directory",
            self.api.list_users(),
        )
        .await
    }

    pub async fn load_members(&self, team_id: TeamId) -> ApiResult<()> {
        run_load(
            &self.members,
            &*self.notifier,
            "Could not load the team's members",
            self.api.list_members(team_id),
        )
        .await
    }

    /// Add a user to a team, then refresh the member list and the team list;
    /// the member count shown on the team card is maintained server-side.
    pub async fn add_member(&self, team_id: TeamId, payload: AddMemberPayload) -> ApiResult<()> {
        match self.api.add_member(team_id, &payload).await {
            Ok(()) => {
                self.notifier.success("Member added to the team");
                // refresh failures notify on their own
                let _ = self.load_members(team_id).await;
                let _ = self.load_teams().await;
                Ok(())
            }
            Err(err) => {
                report_local_failure(
                    &*self.notifier,
                    &err,
                    "That user is already a member of the team",
                );
                Err(err)
            }
        }
    }

    /// Called when the member dialog closes.
    pub fn clear_members(&self) {
        lock(&self.members).items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{team, user, MockScriptedApi};
    use taskboard_core::{ApiError, NotificationLevel, RecordingNotifier};

    fn store(api: MockScriptedApi) -> (TeamsStore, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        (TeamsStore::new(Arc::new(api), notifier.clone()), notifier)
    }

    #[tokio::test]
    async fn test_load_replaces_collection() {
        let mut api = MockScriptedApi::new();
        api.expect_list_teams()
            .returning(|| Ok(vec![team(1, "Alpha"), team(2, "Beta")]));
        let (store, notifier) = store(api);

        store.load_teams().await.unwrap();

        assert_eq!(store.teams().len(), 2);
        assert!(!store.is_loading());
        assert!(store.error().is_none());
        assert!(notifier.entries().is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_keeps_stale_teams() {
        let mut api = MockScriptedApi::new();
        api.expect_list_teams()
            .times(1)
            .returning(|| Ok(vec![team(1, "Alpha")]));
        api.expect_list_teams().times(1).returning(|| {
            Err(ApiError::Unknown {
                status: 500,
                message: "boom".into(),
            })
        });
        let (store, notifier) = store(api);

        store.load_teams().await.unwrap();
        let result = store.load_teams().await;

        assert!(result.is_err());
        assert_eq!(store.teams().len(), 1, "stale data stays visible");
        assert_eq!(store.error().as_deref(), Some("Could not load your teams"));
        assert_eq!(notifier.entries().len(), 1);
    }

    #[tokio::test]
    async fn test_create_appends_server_entity_once() {
        let mut api = MockScriptedApi::new();
        api.expect_create_team()
            .withf(|payload| payload.name == "Gamma")
            .returning(|_| Ok(team(3, "Gamma")));
        let (store, notifier) = store(api);

        let created = store.create_team("Gamma").await.unwrap();

        assert_eq!(created.id, 3);
        let teams = store.teams();
        assert_eq!(teams.iter().filter(|t| t.id == 3).count(), 1);
        assert!(!store.is_loading());
        assert_eq!(notifier.messages(), vec!["Team \"Gamma\" created".to_string()]);
    }

    #[tokio::test]
    async fn test_create_failure_leaves_collection_untouched() {
        let mut api = MockScriptedApi::new();
        api.expect_create_team().returning(|_| {
            Err(ApiError::Unknown {
                status: 500,
                message: String::new(),
            })
        });
        let (store, notifier) = store(api);

        let result = store.create_team("Gamma").await;

        assert!(result.is_err());
        assert!(store.teams().is_empty());
        assert!(!store.is_loading(), "loading cleared on the failure branch too");
        assert_eq!(notifier.messages(), vec!["Could not create the team".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_removes_by_identity() {
        let mut api = MockScriptedApi::new();
        api.expect_list_teams()
            .returning(|| Ok(vec![team(1, "Alpha"), team(2, "Beta")]));
        api.expect_delete_team().returning(|_| Ok(()));
        let (store, _) = store(api);
        store.load_teams().await.unwrap();

        store.delete_team(1).await.unwrap();

        let teams = store.teams();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].id, 2);
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_entity() {
        let mut api = MockScriptedApi::new();
        api.expect_list_teams()
            .returning(|| Ok(vec![team(1, "Alpha")]));
        api.expect_delete_team()
            .returning(|_| Err(ApiError::Forbidden("owners only".into())));
        let (store, notifier) = store(api);
        store.load_teams().await.unwrap();

        let result = store.delete_team(1).await;

        assert!(result.is_err());
        assert_eq!(store.teams().len(), 1);
        // 403 was already reported centrally; the container stays quiet
        assert!(notifier.entries().is_empty());
    }

    #[tokio::test]
    async fn test_add_member_refreshes_members_and_teams() {
        let mut api = MockScriptedApi::new();
        api.expect_add_member()
            .withf(|team_id, payload| *team_id == 1 && payload.user_id == 9)
            .returning(|_, _| Ok(()));
        api.expect_list_members().times(1).returning(|_| Ok(vec![]));
        api.expect_list_teams().times(1).returning(|| Ok(vec![team(1, "Alpha")]));
        let (store, notifier) = store(api);

        store
            .add_member(1, AddMemberPayload::new(9))
            .await
            .unwrap();

        assert_eq!(store.teams().len(), 1);
        let levels: Vec<_> = notifier.entries().iter().map(|n| n.level).collect();
        assert_eq!(levels, vec![NotificationLevel::Success]);
    }

    #[tokio::test]
    async fn test_add_member_duplicate_surfaces_server_message() {
        let mut api = MockScriptedApi::new();
        api.expect_add_member().returning(|_, _| {
            Err(ApiError::Validation {
                message: Some("user is already on this team".into()),
            })
        });
        let (store, notifier) = store(api);

        let result = store.add_member(1, AddMemberPayload::new(9)).await;

        assert!(result.is_err());
        assert_eq!(
            notifier.messages(),
            vec!["user is already on this team".to_string()]
        );
    }

    #[tokio::test]
    async fn test_clear_members() {
        let mut api = MockScriptedApi::new();
        api.expect_list_members().returning(|_| {
            Ok(vec![TeamMember {
                id: 1,
                team_id: 1,
                user_id: user(9, "Noa").id,
                role: taskboard_domain::MemberRole::Member,
                joined_at: chrono::Utc::now(),
                user_name: None,
                user_email: None,
            }])
        });
        let (store, _) = store(api);
        store.load_members(1).await.unwrap();
        assert_eq!(store.members().len(), 1);

        store.clear_members();
        assert!(store.members().is_empty());
    }
}
