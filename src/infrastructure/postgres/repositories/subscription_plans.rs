use async_trait::async_trait;
use chrono::Utc;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*, update};
use std::sync::Arc;

use crate::{
    domain::{
        entities::subscription_plans::SubscriptionPlanEntity,
        repositories::{
            errors::{StorageError, StorageResult},
            subscription_plans::SubscriptionPlanRepository,
        },
        value_objects::subscription_plans::{
            InsertSubscriptionPlanModel, UpdateSubscriptionPlanModel,
        },
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::subscription_plans},
};

pub struct SubscriptionPlanPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl SubscriptionPlanPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SubscriptionPlanRepository for SubscriptionPlanPostgres {
    async fn create(
        &self,
        insert_subscription_plan_model: InsertSubscriptionPlanModel,
    ) -> StorageResult<SubscriptionPlanEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let insert_subscription_plan_entity = insert_subscription_plan_model.to_entity(Utc::now());
        let plan = insert_into(subscription_plans::table)
            .values(&insert_subscription_plan_entity)
            .returning(SubscriptionPlanEntity::as_returning())
            .get_result::<SubscriptionPlanEntity>(&mut conn)?;

        Ok(plan)
    }

    async fn find_by_id(&self, plan_id: i32) -> StorageResult<Option<SubscriptionPlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let plan = subscription_plans::table
            .filter(subscription_plans::id.eq(plan_id))
            .select(SubscriptionPlanEntity::as_select())
            .first::<SubscriptionPlanEntity>(&mut conn)
            .optional()?;

        Ok(plan)
    }

    async fn list(&self) -> StorageResult<Vec<SubscriptionPlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let plans = subscription_plans::table
            .order(subscription_plans::created_at.desc())
            .select(SubscriptionPlanEntity::as_select())
            .load::<SubscriptionPlanEntity>(&mut conn)?;

        Ok(plans)
    }

    async fn update(
        &self,
        plan_id: i32,
        update_subscription_plan_model: UpdateSubscriptionPlanModel,
    ) -> StorageResult<SubscriptionPlanEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let edit_subscription_plan_entity = update_subscription_plan_model.to_entity(Utc::now());
        let plan = update(subscription_plans::table)
            .filter(subscription_plans::id.eq(plan_id))
            .set(&edit_subscription_plan_entity)
            .returning(SubscriptionPlanEntity::as_returning())
            .get_result::<SubscriptionPlanEntity>(&mut conn)?;

        Ok(plan)
    }

    async fn delete(&self, plan_id: i32) -> StorageResult<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(subscription_plans::table)
            .filter(subscription_plans::id.eq(plan_id))
            .execute(&mut conn)?;

        if deleted == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}
