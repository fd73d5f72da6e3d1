use clap::{ArgAction, Parser};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub enum Command {
    Fetch {
        project_root: Option<String>,
        reserved_keys: Vec<String>,
        show_progress: bool,
    },
    Plan {
        project_root: Option<String>,
        reserved_keys: Vec<String>,
        json: bool,
    },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "assetprep",
    version,
    author = "Nick Guletskii",
    about = "Fetch the model files listed in assets-config.yml into an application source tree before it is built"
)]
struct Cli {
    #[arg(
        value_name = "PROJECT_ROOT",
        help = "Directory containing assets-config.yml; asset paths are resolved relative to it (default: current directory)"
    )]
    project_root: Option<String>,

    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count
    )]
    verbose: u8,

    #[arg(
        short = 'r',
        long = "reserved-key",
        value_name = "KEY",
        help = "Additional metadata key that must never be downloaded (repeat or use comma-separated values)",
        action = ArgAction::Append,
        value_delimiter = ','
    )]
    reserved_keys: Vec<String>,

    #[arg(long = "no-progress", help = "Disables the per-file progress bars")]
    no_progress: bool,

    #[arg(
        long = "dry-run",
        help = "Lists the assets that would be downloaded without touching the network or the disk"
    )]
    dry_run: bool,

    #[arg(
        long = "json",
        help = "Prints the dry-run plan as JSON on stdout",
        requires = "dry_run"
    )]
    json: bool,
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let mut env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();
    if let Ok(directive) = "hyper_util=warn".parse() {
        env_filter = env_filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Args {
        command: command_from_cli(cli),
        log_level,
    }
}

fn command_from_cli(cli: Cli) -> Command {
    let Cli {
        project_root,
        reserved_keys,
        no_progress,
        dry_run,
        json,
        ..
    } = cli;

    if dry_run {
        Command::Plan {
            project_root,
            reserved_keys,
            json,
        }
    } else {
        Command::Fetch {
            project_root,
            reserved_keys,
            show_progress: !no_progress,
        }
    }
}
