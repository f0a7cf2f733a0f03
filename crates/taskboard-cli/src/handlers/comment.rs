use crate::cli::CommentAction;
use crate::context::CliContext;
use crate::output;

pub async fn handle(ctx: &CliContext, action: CommentAction) -> anyhow::Result<()> {
    match action {
        CommentAction::List { task } => {
            ctx.state.comments.load_comments(task).await?;
            output::output_list(ctx.state.comments.comments());
        }
        CommentAction::Add { task, body } => {
            let comment = ctx.state.comments.add_comment(task, &body).await?;
            output::output_success(&comment);
        }
    }
    Ok(())
}
