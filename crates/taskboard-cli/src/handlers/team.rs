use crate::cli::TeamAction;
use crate::context::CliContext;
use crate::output;
use taskboard_domain::views::filter_teams;
use taskboard_domain::AddMemberPayload;

pub async fn handle(ctx: &CliContext, action: TeamAction) -> anyhow::Result<()> {
    match action {
        TeamAction::List { search } => {
            ctx.state.teams.load_teams().await?;
            let teams = filter_teams(&ctx.state.teams.teams(), &search);
            output::output_list(teams);
        }
        TeamAction::Create { name } => {
            let team = ctx.state.teams.create_team(name).await?;
            output::output_success(&team);
        }
        TeamAction::Delete { id } => {
            ctx.state.teams.delete_team(id).await?;
            output::output_success(serde_json::json!({ "deleted": id }));
        }
        TeamAction::Members { id } => {
            ctx.state.teams.load_members(id).await?;
            output::output_list(ctx.state.teams.members());
        }
        TeamAction::AddMember { id, user } => {
            ctx.state
                .teams
                .add_member(id, AddMemberPayload::new(user))
                .await?;
            output::output_list(ctx.state.teams.members());
        }
        TeamAction::Users => {
            ctx.state.teams.load_users().await?;
            output::output_list(ctx.state.teams.users());
        }
    }
    Ok(())
}
