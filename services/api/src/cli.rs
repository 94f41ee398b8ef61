use crate::demo::{run_ask, run_assess, run_demo, AskArgs, AssessArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use nura::config::AppConfig;
use nura::error::AppError;
use nura::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Nura Companion",
    about = "Run the Nura memory companion service or try its engines from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Ask the assistant a question about the demo profile
    Ask(AskArgs),
    /// Score cognitive assessment answers given in question order
    Assess(AssessArgs),
    /// Walk through the assistant, assessment, training, timeline, and fact features
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Ask(args) => {
            cli_config()?;
            run_ask(args)
        }
        Command::Assess(args) => {
            cli_config()?;
            run_assess(args)
        }
        Command::Demo => run_demo(&cli_config()?.companion),
    }
}

/// Loads configuration for a one-shot command and sends its logs to stderr.
fn cli_config() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init_for_cli(&config.telemetry)?;
    Ok(config)
}
