use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    application::{
        interfaces::credentials::{CredentialHasher, stored_credential},
        usecases::accounts::{AccountError, UseCaseResult},
    },
    domain::{
        entities::accounts::AccountEntity,
        repositories::{accounts::AccountRepository, errors::StorageError},
        value_objects::{accounts::CreateAccountModel, email::normalize_email},
    },
};

/// The only way new accounts are created, so a plaintext password can never
/// reach the `password` column.
pub struct AccountFactory<A, H>
where
    A: AccountRepository + Send + Sync + 'static,
    H: CredentialHasher + 'static,
{
    account_repository: Arc<A>,
    credential_hasher: Arc<H>,
}

impl<A, H> AccountFactory<A, H>
where
    A: AccountRepository + Send + Sync + 'static,
    H: CredentialHasher + 'static,
{
    pub fn new(account_repository: Arc<A>, credential_hasher: Arc<H>) -> Self {
        Self {
            account_repository,
            credential_hasher,
        }
    }

    pub async fn create(
        &self,
        create_account_model: CreateAccountModel,
    ) -> UseCaseResult<AccountEntity> {
        let email = normalize_email(&create_account_model.email);
        if email.is_empty() {
            warn!("account_factory: rejected account without email");
            return Err(AccountError::InvalidInput("email is required".to_string()));
        }

        let password = stored_credential(
            self.credential_hasher.as_ref(),
            create_account_model.password.as_deref(),
        )
        .map_err(|err| {
            error!(error = ?err, "account_factory: failed to hash password");
            AccountError::Internal(err)
        })?;

        let account_id = Uuid::new_v4();
        let new_account = create_account_model.into_new_account(account_id, email, password);

        let account = self
            .account_repository
            .create(new_account)
            .await
            .map_err(|err| {
                match &err {
                    StorageError::UniquenessViolation(constraint) => warn!(
                        %account_id,
                        constraint = %constraint,
                        "account_factory: email already registered"
                    ),
                    _ => error!(
                        %account_id,
                        db_error = ?err,
                        "account_factory: failed to persist account"
                    ),
                }
                AccountError::from(err)
            })?;

        info!(
            account_id = %account.id,
            role = account.role,
            "account_factory: account created"
        );
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::interfaces::credentials::MockCredentialHasher,
        domain::{
            repositories::accounts::MockAccountRepository,
            value_objects::{
                accounts::NewAccountModel, enums::roles::Role, passwords::is_usable_password,
            },
        },
        infrastructure::argon2_hasher::Argon2Hasher,
    };
    use chrono::Utc;

    fn persisted(new_account: NewAccountModel) -> AccountEntity {
        let now = Utc::now();
        AccountEntity {
            id: new_account.id,
            first_name: new_account.first_name,
            last_name: new_account.last_name,
            date_of_birth: new_account.date_of_birth,
            email: new_account.email,
            phone_number: new_account.phone_number,
            role: new_account.role.into(),
            subscription_id: new_account.subscription_id,
            subscription_start_date: new_account.subscription_start_date,
            subscription_end_date: new_account.subscription_end_date,
            status: new_account.status,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            password: new_account.password,
        }
    }

    fn echo_repository() -> MockAccountRepository {
        let mut account_repository = MockAccountRepository::new();
        account_repository
            .expect_create()
            .returning(|new_account| Ok(persisted(new_account)));
        account_repository
    }

    #[tokio::test]
    async fn creates_account_with_normalized_email_and_defaults() {
        let hasher = Arc::new(Argon2Hasher::default());
        let factory = AccountFactory::new(Arc::new(echo_repository()), Arc::clone(&hasher));

        let account = factory
            .create(CreateAccountModel {
                password: Some("hunter2".to_string()),
                first_name: Some("Ada".to_string()),
                ..CreateAccountModel::new("A@Test.com")
            })
            .await
            .unwrap();

        assert_eq!(account.email, "a@test.com");
        assert_eq!(account.first_name, "Ada");
        assert_eq!(account.role, i16::from(Role::User));
        assert!(account.status);
        assert_ne!(account.password, "hunter2");
        assert!(hasher.verify_password("hunter2", &account.password).unwrap());
        assert!(!hasher.verify_password("hunter3", &account.password).unwrap());
    }

    #[tokio::test]
    async fn empty_email_is_rejected_without_writing() {
        let mut account_repository = MockAccountRepository::new();
        account_repository.expect_create().never();
        let mut hasher = MockCredentialHasher::new();
        hasher.expect_hash_password().never();

        let factory = AccountFactory::new(Arc::new(account_repository), Arc::new(hasher));

        for email in ["", "   "] {
            let err = factory
                .create(CreateAccountModel {
                    password: Some("x".to_string()),
                    ..CreateAccountModel::new(email)
                })
                .await
                .unwrap_err();
            assert!(matches!(err, AccountError::InvalidInput(_)), "got: {err}");
        }
    }

    #[tokio::test]
    async fn password_is_hashed_before_it_reaches_the_repository() {
        let mut hasher = MockCredentialHasher::new();
        hasher
            .expect_hash_password()
            .withf(|plain| plain == "s3cret")
            .times(1)
            .returning(|_| Ok("$argon2id$v=19$hashed".to_string()));

        let mut account_repository = MockAccountRepository::new();
        account_repository
            .expect_create()
            .withf(|new_account| new_account.password == "$argon2id$v=19$hashed")
            .times(1)
            .returning(|new_account| Ok(persisted(new_account)));

        let factory = AccountFactory::new(Arc::new(account_repository), Arc::new(hasher));
        let account = factory
            .create(CreateAccountModel {
                password: Some("s3cret".to_string()),
                ..CreateAccountModel::new("grace@example.com")
            })
            .await
            .unwrap();

        assert_eq!(account.password, "$argon2id$v=19$hashed");
    }

    #[tokio::test]
    async fn missing_password_stores_an_unusable_credential() {
        let mut hasher = MockCredentialHasher::new();
        hasher.expect_hash_password().never();

        let factory = AccountFactory::new(Arc::new(echo_repository()), Arc::new(hasher));
        let account = factory
            .create(CreateAccountModel::new("nopass@example.com"))
            .await
            .unwrap();

        assert!(!is_usable_password(&account.password));
    }

    #[tokio::test]
    async fn every_account_gets_a_fresh_id() {
        let factory = AccountFactory::new(
            Arc::new(echo_repository()),
            Arc::new(Argon2Hasher::default()),
        );

        let first = factory
            .create(CreateAccountModel::new("one@example.com"))
            .await
            .unwrap();
        let second = factory
            .create(CreateAccountModel::new("two@example.com"))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn duplicate_email_surfaces_as_uniqueness_violation() {
        let mut account_repository = MockAccountRepository::new();
        account_repository
            .expect_create()
            .returning(|_| Err(StorageError::UniquenessViolation("user_email_key".to_string())));

        let factory = AccountFactory::new(
            Arc::new(account_repository),
            Arc::new(Argon2Hasher::default()),
        );
        let err = factory
            .create(CreateAccountModel::new("a@test.com"))
            .await
            .unwrap_err();

        assert!(
            matches!(err, AccountError::UniquenessViolation(ref constraint) if constraint == "user_email_key"),
            "got: {err}"
        );
    }

    #[tokio::test]
    async fn unknown_plan_surfaces_as_reference_violation() {
        let mut account_repository = MockAccountRepository::new();
        account_repository
            .expect_create()
            .withf(|new_account| new_account.subscription_id == Some(404))
            .returning(|_| {
                Err(StorageError::ReferenceViolation(
                    "user_subscription_id_fkey".to_string(),
                ))
            });

        let factory = AccountFactory::new(
            Arc::new(account_repository),
            Arc::new(Argon2Hasher::default()),
        );
        let err = factory
            .create(CreateAccountModel {
                subscription_id: Some(404),
                ..CreateAccountModel::new("ref@example.com")
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AccountError::ReferenceViolation(_)), "got: {err}");
    }
}
