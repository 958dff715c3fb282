use core_config::FromEnv;
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Demo configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub database: PostgresConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        // DATABASE_URL, or DB_HOST/DB_PORT/... with local defaults
        let database = PostgresConfig::from_env()?;

        Ok(Self {
            database,
            environment,
        })
    }
}
