use async_trait::async_trait;
use chrono::Utc;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::accounts::AccountEntity,
        repositories::{
            accounts::AccountRepository,
            errors::{StorageError, StorageResult},
        },
        value_objects::accounts::{EditAccountModel, NewAccountModel},
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::accounts},
};

pub struct AccountPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl AccountPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl AccountRepository for AccountPostgres {
    async fn create(&self, new_account: NewAccountModel) -> StorageResult<AccountEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let insert_account_entity = new_account.to_entity(Utc::now());
        let account = insert_into(accounts::table)
            .values(&insert_account_entity)
            .returning(AccountEntity::as_returning())
            .get_result::<AccountEntity>(&mut conn)?;

        Ok(account)
    }

    async fn find_by_id(&self, account_id: Uuid) -> StorageResult<Option<AccountEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let account = accounts::table
            .filter(accounts::id.eq(account_id))
            .filter(accounts::deleted_at.is_null())
            .select(AccountEntity::as_select())
            .first::<AccountEntity>(&mut conn)
            .optional()?;

        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> StorageResult<Option<AccountEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let account = accounts::table
            .filter(accounts::email.eq(email))
            .filter(accounts::deleted_at.is_null())
            .select(AccountEntity::as_select())
            .first::<AccountEntity>(&mut conn)
            .optional()?;

        Ok(account)
    }

    async fn list(&self) -> StorageResult<Vec<AccountEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let accounts = accounts::table
            .filter(accounts::deleted_at.is_null())
            .order(accounts::created_at.desc())
            .select(AccountEntity::as_select())
            .load::<AccountEntity>(&mut conn)?;

        Ok(accounts)
    }

    async fn update(
        &self,
        account_id: Uuid,
        edit_account_model: EditAccountModel,
    ) -> StorageResult<AccountEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let edit_account_entity = edit_account_model.to_entity(Utc::now());
        let account = update(accounts::table)
            .filter(accounts::id.eq(account_id))
            .filter(accounts::deleted_at.is_null())
            .set(&edit_account_entity)
            .returning(AccountEntity::as_returning())
            .get_result::<AccountEntity>(&mut conn)?;

        Ok(account)
    }

    async fn delete(&self, account_id: Uuid) -> StorageResult<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(accounts::table)
            .filter(accounts::id.eq(account_id))
            .execute(&mut conn)?;

        if deleted == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    async fn soft_delete(&self, account_id: Uuid) -> StorageResult<AccountEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let now = Utc::now();
        let account = update(accounts::table)
            .filter(accounts::id.eq(account_id))
            .filter(accounts::deleted_at.is_null())
            .set((
                accounts::deleted_at.eq(Some(now)),
                accounts::updated_at.eq(now),
            ))
            .returning(AccountEntity::as_returning())
            .get_result::<AccountEntity>(&mut conn)?;

        Ok(account)
    }
}
