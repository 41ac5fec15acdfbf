use crate::commands::{run_vet, run_warmup, VetArgs, WarmupArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use warmup_vet::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "warmup-vet",
    about = "Vet sending domains and plan their warm-up from the command line",
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
    /// Print warm-up plans for a target daily volume
    Warmup(WarmupArgs),
    /// Vet a domain from a JSON file of collected signals
    Vet(VetArgs),
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
        Command::Warmup(args) => run_warmup(args),
        Command::Vet(args) => run_vet(args),
    }
}
