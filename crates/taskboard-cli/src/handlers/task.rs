use crate::cli::TaskAction;
use crate::context::CliContext;
use crate::output;
use taskboard_domain::{CreateTaskPayload, DragDrop, TaskStatus};
use taskboard_state::BoardFlow;

pub async fn handle(ctx: &CliContext, action: TaskAction) -> anyhow::Result<()> {
    match action {
        TaskAction::Board { project, search } => {
            ctx.state.tasks.load_tasks(project).await?;
            let board = BoardFlow::new(ctx.state.tasks.clone());
            board.set_search(search);

            let columns: Vec<_> = TaskStatus::ALL
                .into_iter()
                .map(|status| {
                    serde_json::json!({
                        "status": status,
                        "tasks": board.column(status),
                    })
                })
                .collect();
            output::output_success(serde_json::json!({ "columns": columns }));
        }
        TaskAction::Create {
            project,
            title,
            description,
            priority,
            assignee,
        } => {
            let mut payload = CreateTaskPayload::new(project, title);
            payload.description = description;
            payload.priority = priority;
            payload.assignee_id = assignee;
            let task = ctx.state.tasks.create_task(payload).await?;
            output::output_success(&task);
        }
        TaskAction::Move { project, id, to } => {
            ctx.state.tasks.load_tasks(project).await?;
            let board = BoardFlow::new(ctx.state.tasks.clone());
            board.refresh();

            let from = ctx
                .state
                .tasks
                .tasks()
                .iter()
                .find(|t| t.id == id)
                .map(|t| t.status)
                .ok_or_else(|| anyhow::anyhow!("Task not found in project {project}: {id}"))?;
            let from_index = board
                .column(from)
                .iter()
                .position(|t| t.id == id)
                .ok_or_else(|| anyhow::anyhow!("Task not on the board: {id}"))?;

            board
                .drop(DragDrop {
                    from,
                    to,
                    from_index,
                    to_index: 0,
                })
                .await?;
            output::output_success(serde_json::json!({ "moved": id, "to": to }));
        }
        TaskAction::Priority {
            project,
            id,
            priority,
        } => {
            ctx.state.tasks.load_tasks(project).await?;
            let task = ctx.state.tasks.set_priority(id, priority).await?;
            output::output_success(&task);
        }
        TaskAction::Delete { id } => {
            ctx.state.tasks.delete_task(id).await?;
            output::output_success(serde_json::json!({ "deleted": id }));
        }
    }
    Ok(())
}
