use clap::{Args, Parser, Subcommand};
use taskboard_domain::{TaskPriority, TaskStatus};

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "A command-line client for the taskboard API", long_about = None)]
#[command(version, arg_required_else_help = true)]
pub struct Cli {
    /// API base URL (or set TASKBOARD_API_URL)
    #[arg(long, global = true, env = "TASKBOARD_API_URL")]
    pub api_url: Option<String>,

    /// Session token from a previous login (or set TASKBOARD_TOKEN)
    #[arg(long, global = true, env = "TASKBOARD_TOKEN")]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and print the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and print the session token
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Team operations
    Team(TeamCommand),
    /// Project operations
    Project(ProjectCommand),
    /// Task operations
    Task(TaskCommand),
    /// Comment operations
    Comment(CommentCommand),
}

// Team commands
#[derive(Args)]
pub struct TeamCommand {
    #[command(subcommand)]
    pub action: TeamAction,
}

#[derive(Subcommand)]
pub enum TeamAction {
    /// List your teams
    List {
        /// Filter by name
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Create a new team
    Create {
        #[arg(long)]
        name: String,
    },
    /// Delete a team
    Delete {
        #[arg(long)]
        id: i64,
    },
    /// List a team's members
    Members {
        #[arg(long)]
        id: i64,
    },
    /// Add a user to a team
    AddMember {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        user: i64,
    },
    /// List the user directory
    Users,
}

// Project commands
#[derive(Args)]
pub struct ProjectCommand {
    #[command(subcommand)]
    pub action: ProjectAction,
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// List projects
    List {
        /// Filter by name
        #[arg(long, default_value = "")]
        search: String,
        /// Only projects of this team
        #[arg(long)]
        team: Option<i64>,
    },
    /// Create a new project
    Create {
        #[arg(long)]
        team: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a project
    Delete {
        #[arg(long)]
        id: i64,
    },
}

// Task commands
#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Show a project's board, one column per status
    Board {
        #[arg(long)]
        project: i64,
        /// Filter by title or description
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Create a task
    Create {
        #[arg(long)]
        project: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<TaskPriority>,
        #[arg(long)]
        assignee: Option<i64>,
    },
    /// Move a task to another board column
    Move {
        #[arg(long)]
        project: i64,
        #[arg(long)]
        id: i64,
        #[arg(long)]
        to: TaskStatus,
    },
    /// Change a task's priority
    Priority {
        #[arg(long)]
        project: i64,
        #[arg(long)]
        id: i64,
        #[arg(long)]
        priority: TaskPriority,
    },
    /// Delete a task
    Delete {
        #[arg(long)]
        id: i64,
    },
}

// Comment commands
#[derive(Args)]
pub struct CommentCommand {
    #[command(subcommand)]
    pub action: CommentAction,
}

#[derive(Subcommand)]
pub enum CommentAction {
    /// List a task's comments
    List {
        #[arg(long)]
        task: i64,
    },
    /// Add a comment to a task
    Add {
        #[arg(long)]
        task: i64,
        #[arg(long)]
        body: String,
    },
}
