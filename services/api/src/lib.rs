mod cli;
mod infra;
mod routes;
mod search;
mod server;

use villa_map::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
