use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::{
    entities::accounts::AccountEntity,
    repositories::errors::StorageResult,
    value_objects::accounts::{EditAccountModel, NewAccountModel},
};

/// Soft-deleted accounts are invisible to every lookup and to `update`.
#[automock]
#[async_trait]
pub trait AccountRepository {
    async fn create(&self, new_account: NewAccountModel) -> StorageResult<AccountEntity>;
    async fn find_by_id(&self, account_id: Uuid) -> StorageResult<Option<AccountEntity>>;
    async fn find_by_email(&self, email: &str) -> StorageResult<Option<AccountEntity>>;
    async fn list(&self) -> StorageResult<Vec<AccountEntity>>;
    async fn update(
        &self,
        account_id: Uuid,
        edit_account_model: EditAccountModel,
    ) -> StorageResult<AccountEntity>;
    async fn delete(&self, account_id: Uuid) -> StorageResult<()>;
    async fn soft_delete(&self, account_id: Uuid) -> StorageResult<AccountEntity>;
}
