pub mod create;
pub mod delete;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};

use crate::application::StepOutcome;
use crate::domain::{Action, ServerKind, VirtualHostRequest};
use crate::infrastructure::config::{DEFAULT_CONFIG_PATH, Settings};
use crate::infrastructure::privileges;
use crate::infrastructure::tracing::init_tracing;

#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    /// Settings file
    #[arg(long, global = true, env = "VHOST_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Provision a virtual host
    Create {
        /// Domain name (letters, digits, '.' and '-')
        domain: String,

        /// Document root; relative paths resolve under the web root
        root_dir: Option<PathBuf>,
    },

    /// Tear down a virtual host
    Delete {
        /// Domain name to remove
        domain: String,

        /// Document root used when the site was created
        root_dir: Option<PathBuf>,

        /// Delete the document root without asking
        #[arg(short, long, conflicts_with = "keep_root")]
        yes: bool,

        /// Keep the document root without asking
        #[arg(long)]
        keep_root: bool,
    },
}

impl Commands {
    fn action(&self) -> Action {
        match self {
            Self::Create { .. } => Action::Create,
            Self::Delete { .. } => Action::Delete,
        }
    }
}

fn about(kind: ServerKind) -> &'static str {
    match kind {
        ServerKind::Nginx => "Create or delete an nginx virtual host",
        ServerKind::Apache => "Create or delete an Apache virtual host",
    }
}

/// Entry point shared by both binaries.
///
/// Usage errors exit with 2 (clap); everything else propagates to `main`.
pub fn run(kind: ServerKind) -> Result<()> {
    let matches = Cli::command()
        .name(kind.tool_name())
        .bin_name(kind.tool_name())
        .about(about(kind))
        .get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.verbose);

    privileges::ensure_root(kind.tool_name())?;

    let action = cli.command.action();
    let (domain, root_dir, answer) = match cli.command {
        Commands::Create { domain, root_dir } => (domain, root_dir, None),
        Commands::Delete {
            domain,
            root_dir,
            yes,
            keep_root,
        } => {
            let answer = match (yes, keep_root) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            (domain, root_dir, answer)
        }
    };

    let request = VirtualHostRequest::new(action, &domain, root_dir)?;
    let settings = Settings::load(&cli.config)?;

    match request.action {
        Action::Create => create::execute(kind, &request, &settings),
        Action::Delete => delete::execute(kind, &request, &settings, answer),
    }
}

fn print_steps(steps: &[(String, StepOutcome)]) {
    for (label, outcome) in steps {
        match outcome {
            StepOutcome::Success(msg) => println!("  {}: {}", label, msg),
            StepOutcome::Skipped(_) => println!("  {}: {}", label, outcome),
            StepOutcome::Warning(_) | StepOutcome::Missing(_) => {
                eprintln!("  {}: {}", label, outcome)
            }
        }
    }
}
