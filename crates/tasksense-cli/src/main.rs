use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tasksense", version, about = "Tasksense CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Scheduling, deadline, and reminder suggestions
    Suggest {
        #[command(subcommand)]
        action: commands::suggest::SuggestAction,
    },
    /// Reminder management
    Remind {
        #[command(subcommand)]
        action: commands::remind::RemindAction,
    },
    /// Productivity insights
    Insights,
    /// Task statistics
    Stats,
    /// Break a task into subtasks
    Breakdown {
        /// Task title
        title: String,
        /// Task description
        #[arg(long)]
        description: Option<String>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action),
        Commands::Suggest { action } => commands::suggest::run(action),
        Commands::Remind { action } => commands::remind::run(action),
        Commands::Insights => commands::insights::run(),
        Commands::Stats => commands::insights::run_stats(),
        Commands::Breakdown { title, description } => {
            commands::breakdown::run(&title, description.as_deref())
        }
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
