use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config, run_migrations};
use domain_users::{PgUserRepository, User, UserFilter, UserService};
use migration::Migrator;
use tracing::{error, info};

mod config;

use config::{Config, Environment};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    init_tracing(&Environment::from_env());

    // Failures are reported, not propagated: the demo always exits cleanly
    if let Err(e) = run().await {
        error!("Error: {:?}", e);
    }

    Ok(())
}

async fn run() -> eyre::Result<()> {
    let config = Config::from_env()?;
    info!(environment = ?config.environment, "Starting users demo");

    let db = connect_from_config(config.database)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    run_migrations::<Migrator>(&db, "users_demo").await?;

    let service = UserService::new(PgUserRepository::new(db.clone()));
    let outcome = demo(&service).await;

    db.close().await?;
    info!("Database connection closed");

    outcome
}

async fn demo(service: &UserService<PgUserRepository>) -> eyre::Result<()> {
    let john = service.create_user("John Doe", "john@example.com").await?;
    let jane = service.create_user("Jane Smith", "jane@example.com").await?;
    info!("Created users: {}, {}", describe(&john), describe(&jane));

    let all = service.get_all_users().await?;
    info!(count = all.len(), "All users: {}", describe_all(&all));

    let johns = service
        .filter_users(UserFilter::name_containing("John"))
        .await?;
    info!(count = johns.len(), "Users with 'John' in name: {}", describe_all(&johns));

    Ok(())
}

fn describe(user: &User) -> String {
    format!("#{} {} <{}>", user.id, user.name, user.email)
}

fn describe_all(users: &[User]) -> String {
    users.iter().map(describe).collect::<Vec<_>>().join(", ")
}
