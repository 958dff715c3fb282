//! `migration` CLI: `cargo run -p migration -- up|down|status|fresh`
//!
//! Reads `DATABASE_URL` like every other binary in the workspace.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
