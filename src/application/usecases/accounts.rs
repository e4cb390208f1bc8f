use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::{
    application::interfaces::credentials::{CredentialHasher, stored_credential},
    domain::{
        entities::accounts::AccountEntity,
        repositories::{
            accounts::AccountRepository, errors::StorageError,
            subscription_plans::SubscriptionPlanRepository,
        },
        value_objects::{
            accounts::{AccountModel, EditAccountModel, UpdateAccountModel},
            email::normalize_email,
            passwords::is_usable_password,
        },
    },
};

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unique constraint violated: {0}")]
    UniquenessViolation(String),
    #[error("referenced record does not exist: {0}")]
    ReferenceViolation(String),
    #[error("account not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StorageError> for AccountError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::UniquenessViolation(constraint) => {
                AccountError::UniquenessViolation(constraint)
            }
            StorageError::ReferenceViolation(constraint) => {
                AccountError::ReferenceViolation(constraint)
            }
            StorageError::NotFound => AccountError::NotFound,
            StorageError::Internal(err) => AccountError::Internal(err),
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, AccountError>;

pub struct AccountUseCase<A, P, H>
where
    A: AccountRepository + Send + Sync + 'static,
    P: SubscriptionPlanRepository + Send + Sync + 'static,
    H: CredentialHasher + 'static,
{
    account_repository: Arc<A>,
    subscription_plan_repository: Arc<P>,
    credential_hasher: Arc<H>,
}

impl<A, P, H> AccountUseCase<A, P, H>
where
    A: AccountRepository + Send + Sync + 'static,
    P: SubscriptionPlanRepository + Send + Sync + 'static,
    H: CredentialHasher + 'static,
{
    pub fn new(
        account_repository: Arc<A>,
        subscription_plan_repository: Arc<P>,
        credential_hasher: Arc<H>,
    ) -> Self {
        Self {
            account_repository,
            subscription_plan_repository,
            credential_hasher,
        }
    }

    pub async fn find_by_id(&self, account_id: Uuid) -> UseCaseResult<AccountModel> {
        let account = self.load(account_id).await?;
        to_model(account)
    }

    pub async fn find_by_email(&self, email: &str) -> UseCaseResult<AccountModel> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(AccountError::InvalidInput("email is required".to_string()));
        }

        let account = self
            .account_repository
            .find_by_email(&email)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "accounts: failed to look up account by email");
                AccountError::from(err)
            })?
            .ok_or_else(|| {
                debug!("accounts: no account for email");
                AccountError::NotFound
            })?;

        to_model(account)
    }

    pub async fn list(&self) -> UseCaseResult<Vec<AccountModel>> {
        let accounts = self.account_repository.list().await.map_err(|err| {
            error!(db_error = ?err, "accounts: failed to list accounts");
            AccountError::from(err)
        })?;
        info!(account_count = accounts.len(), "accounts: accounts loaded");

        accounts.into_iter().map(to_model).collect()
    }

    pub async fn update(
        &self,
        account_id: Uuid,
        update_account_model: UpdateAccountModel,
    ) -> UseCaseResult<AccountModel> {
        let mut edit_account_model = EditAccountModel::from(update_account_model);
        if let Some(email) = edit_account_model.email.take() {
            let email = normalize_email(&email);
            if email.is_empty() {
                warn!(%account_id, "accounts: rejected update clearing the email");
                return Err(AccountError::InvalidInput(
                    "email must not be empty".to_string(),
                ));
            }
            edit_account_model.email = Some(email);
        }

        let account = self.write(account_id, edit_account_model).await?;
        info!(%account_id, "accounts: account updated");
        to_model(account)
    }

    /// Replaces the stored credential. `None` leaves the account without a
    /// usable password.
    pub async fn set_password(&self, account_id: Uuid, password: Option<&str>) -> UseCaseResult<()> {
        let password = stored_credential(self.credential_hasher.as_ref(), password).map_err(
            |err| {
                error!(%account_id, error = ?err, "accounts: failed to hash password");
                AccountError::Internal(err)
            },
        )?;

        let edit_account_model = EditAccountModel {
            password: Some(password),
            ..Default::default()
        };
        self.write(account_id, edit_account_model).await?;
        info!(%account_id, "accounts: password replaced");
        Ok(())
    }

    pub async fn check_password(&self, account_id: Uuid, plain: &str) -> UseCaseResult<bool> {
        let account = self.load(account_id).await?;
        if !is_usable_password(&account.password) {
            debug!(%account_id, "accounts: account has no usable password");
            return Ok(false);
        }

        self.credential_hasher
            .verify_password(plain, &account.password)
            .map_err(|err| {
                error!(%account_id, error = ?err, "accounts: stored password hash is malformed");
                AccountError::Internal(err)
            })
    }

    /// Points the account at `plan_id` with a window of the plan's `day`
    /// count starting at `starts_at`.
    pub async fn assign_plan(
        &self,
        account_id: Uuid,
        plan_id: i32,
        starts_at: DateTime<Utc>,
    ) -> UseCaseResult<AccountModel> {
        let plan = self
            .subscription_plan_repository
            .find_by_id(plan_id)
            .await
            .map_err(|err| {
                error!(plan_id, db_error = ?err, "accounts: failed to load subscription plan");
                AccountError::from(err)
            })?
            .ok_or_else(|| {
                warn!(%account_id, plan_id, "accounts: subscription plan does not exist");
                AccountError::ReferenceViolation(format!(
                    "subscription plan {plan_id} does not exist"
                ))
            })?;

        let ends_at = starts_at
            .checked_add_signed(Duration::days(i64::from(plan.day)))
            .ok_or_else(|| {
                AccountError::InvalidInput(format!(
                    "subscription window of {} days is out of range",
                    plan.day
                ))
            })?;

        let edit_account_model = EditAccountModel {
            subscription_id: Some(Some(plan.id)),
            subscription_start_date: Some(Some(starts_at)),
            subscription_end_date: Some(Some(ends_at)),
            ..Default::default()
        };
        let account = self.write(account_id, edit_account_model).await?;

        info!(
            %account_id,
            plan_id,
            %starts_at,
            %ends_at,
            "accounts: subscription plan assigned"
        );
        to_model(account)
    }

    /// Detaches the plan. The subscription window is kept as it was.
    pub async fn clear_plan(&self, account_id: Uuid) -> UseCaseResult<AccountModel> {
        let edit_account_model = EditAccountModel {
            subscription_id: Some(None),
            ..Default::default()
        };
        let account = self.write(account_id, edit_account_model).await?;
        info!(%account_id, "accounts: subscription plan cleared");
        to_model(account)
    }

    pub async fn delete(&self, account_id: Uuid) -> UseCaseResult<()> {
        self.account_repository
            .delete(account_id)
            .await
            .map_err(|err| {
                log_storage_error(account_id, &err, "accounts: failed to delete account");
                AccountError::from(err)
            })?;
        info!(%account_id, "accounts: account deleted");
        Ok(())
    }

    pub async fn soft_delete(&self, account_id: Uuid) -> UseCaseResult<AccountModel> {
        let account = self
            .account_repository
            .soft_delete(account_id)
            .await
            .map_err(|err| {
                log_storage_error(account_id, &err, "accounts: failed to soft delete account");
                AccountError::from(err)
            })?;
        info!(%account_id, "accounts: account soft deleted");
        to_model(account)
    }

    async fn load(&self, account_id: Uuid) -> UseCaseResult<AccountEntity> {
        self.account_repository
            .find_by_id(account_id)
            .await
            .map_err(|err| {
                error!(%account_id, db_error = ?err, "accounts: failed to load account");
                AccountError::from(err)
            })?
            .ok_or_else(|| {
                debug!(%account_id, "accounts: account not found");
                AccountError::NotFound
            })
    }

    async fn write(
        &self,
        account_id: Uuid,
        edit_account_model: EditAccountModel,
    ) -> UseCaseResult<AccountEntity> {
        self.account_repository
            .update(account_id, edit_account_model)
            .await
            .map_err(|err| {
                log_storage_error(account_id, &err, "accounts: failed to update account");
                AccountError::from(err)
            })
    }
}

fn log_storage_error(account_id: Uuid, err: &StorageError, message: &'static str) {
    match err {
        StorageError::NotFound => debug!(%account_id, "accounts: account not found"),
        StorageError::UniquenessViolation(_) | StorageError::ReferenceViolation(_) => {
            warn!(%account_id, error = %err, "{}", message)
        }
        StorageError::Internal(_) => error!(%account_id, db_error = ?err, "{}", message),
    }
}

fn to_model(account: AccountEntity) -> UseCaseResult<AccountModel> {
    let account_id = account.id;
    AccountModel::try_from(account).map_err(|err| {
        error!(%account_id, error = %err, "accounts: stored account has an invalid role");
        AccountError::Internal(err.into())
    })
}
