mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use warmup_vet::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
