use crate::cli::ProjectAction;
use crate::context::CliContext;
use crate::output;
use serde::Serialize;
use taskboard_domain::views::{filter_projects, project_team_name};
use taskboard_domain::{CreateProjectPayload, Project};

#[derive(Serialize)]
struct ProjectRow {
    #[serde(flatten)]
    project: Project,
    team_name: Option<String>,
}

pub async fn handle(ctx: &CliContext, action: ProjectAction) -> anyhow::Result<()> {
    match action {
        ProjectAction::List { search, team } => {
            // both lists feed the view, load them together
            let (projects, teams) = futures::join!(
                ctx.state.projects.load_projects(),
                ctx.state.teams.load_teams()
            );
            projects?;
            teams?;

            let teams = ctx.state.teams.teams();
            let projects = ctx.state.projects.projects();
            let rows: Vec<ProjectRow> = filter_projects(&projects, &search, team)
                .into_iter()
                .map(|project| ProjectRow {
                    team_name: project_team_name(&projects, &teams, project.id),
                    project,
                })
                .collect();
            output::output_list(rows);
        }
        ProjectAction::Create {
            team,
            name,
            description,
        } => {
            let project = ctx
                .state
                .projects
                .create_project(CreateProjectPayload {
                    team_id: team,
                    name,
                    description,
                })
                .await?;
            output::output_success(&project);
        }
        ProjectAction::Delete { id } => {
            ctx.state.projects.delete_project(id).await?;
            output::output_success(serde_json::json!({ "deleted": id }));
        }
    }
    Ok(())
}
