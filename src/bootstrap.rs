use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::{
    application::usecases::{
        account_factory::AccountFactory, accounts::AccountUseCase,
        subscription_plans::SubscriptionPlanUseCase,
    },
    config::{config_loader, config_model::DotEnvyConfig},
    infrastructure::{
        argon2_hasher::Argon2Hasher,
        postgres::{
            postgres_connection::{self, PgPoolSquad},
            repositories::{accounts::AccountPostgres, subscription_plans::SubscriptionPlanPostgres},
        },
    },
    observability,
};

pub type PostgresAccountFactory = AccountFactory<AccountPostgres, Argon2Hasher>;
pub type PostgresAccountUseCase =
    AccountUseCase<AccountPostgres, SubscriptionPlanPostgres, Argon2Hasher>;
pub type PostgresSubscriptionPlanUseCase = SubscriptionPlanUseCase<SubscriptionPlanPostgres>;

/// Use cases wired to Postgres and Argon2, sharing one connection pool.
pub struct AccountServices {
    pub account_factory: PostgresAccountFactory,
    pub accounts: PostgresAccountUseCase,
    pub subscription_plans: PostgresSubscriptionPlanUseCase,
}

impl AccountServices {
    pub fn from_pool(db_pool: Arc<PgPoolSquad>) -> Self {
        let account_repository = Arc::new(AccountPostgres::new(Arc::clone(&db_pool)));
        let subscription_plan_repository =
            Arc::new(SubscriptionPlanPostgres::new(Arc::clone(&db_pool)));
        let credential_hasher = Arc::new(Argon2Hasher::default());

        Self {
            account_factory: AccountFactory::new(
                Arc::clone(&account_repository),
                Arc::clone(&credential_hasher),
            ),
            accounts: AccountUseCase::new(
                account_repository,
                Arc::clone(&subscription_plan_repository),
                credential_hasher,
            ),
            subscription_plans: SubscriptionPlanUseCase::new(subscription_plan_repository),
        }
    }

    pub fn from_config(config: &DotEnvyConfig) -> Result<Self> {
        let postgres_pool = postgres_connection::establish_connection(&config.database)?;
        info!(
            max_connections = config.database.max_connections,
            "Postgres connection has been established"
        );
        Ok(Self::from_pool(Arc::new(postgres_pool)))
    }
}

/// Loads the environment, installs logging and connects to Postgres.
pub fn init(component: &str) -> Result<AccountServices> {
    dotenvy::dotenv().ok();
    observability::init_observability(component)?;

    let dotenvy_env = config_loader::load()?;
    info!("ENV has been loaded");

    AccountServices::from_config(&dotenvy_env)
}
