//! Derived views over container snapshots.
//!
//! Every view here is a pure function: it takes the current collections and
//! the filter parameters as explicit arguments and recomputes its result on
//! each call. Nothing is cached and nothing is mutated.

use crate::filter::{StatusFilter, TaskFilter, TextSearch};
use crate::project::{Project, ProjectId};
use crate::task::{Task, TaskStatus};
use crate::team::{Team, TeamId};

/// Teams whose name contains the query, case-insensitively.
pub fn filter_teams(teams: &[Team], query: &str) -> Vec<Team> {
    let query = query.trim().to_lowercase();
    teams
        .iter()
        .filter(|t| query.is_empty() || t.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Projects whose name contains the query and, when a team filter is given,
/// belong to that team. Both conditions must pass; an absent team filter
/// passes all.
pub fn filter_projects(projects: &[Project], query: &str, team: Option<TeamId>) -> Vec<Project> {
    let query = query.trim().to_lowercase();
    projects
        .iter()
        .filter(|p| query.is_empty() || p.name.to_lowercase().contains(&query))
        .filter(|p| team.is_none_or(|id| p.team_id == id))
        .cloned()
        .collect()
}

/// One board column: tasks with exactly this status that also match the
/// search text (title or description, case-insensitive; empty query matches
/// everything).
pub fn board_column(tasks: &[Task], status: TaskStatus, query: &str) -> Vec<Task> {
    let status = StatusFilter::new(status);
    let search = TextSearch::new(query);
    tasks
        .iter()
        .filter(|t| status.matches(t) && search.matches(t))
        .cloned()
        .collect()
}

/// The name of the team a project belongs to, for the board header.
///
/// `None` while the project list has not caught up yet (the caller shows a
/// loading placeholder); a project whose team is missing from the team list
/// resolves to a generic fallback label.
pub fn project_team_name(
    projects: &[Project],
    teams: &[Team],
    project_id: ProjectId,
) -> Option<String> {
    let project = projects.iter().find(|p| p.id == project_id)?;
    Some(
        teams
            .iter()
            .find(|t| t.id == project.team_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| "General team".to_string()),
    )
}
