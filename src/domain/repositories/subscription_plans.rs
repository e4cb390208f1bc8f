use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    entities::subscription_plans::SubscriptionPlanEntity,
    repositories::errors::StorageResult,
    value_objects::subscription_plans::{InsertSubscriptionPlanModel, UpdateSubscriptionPlanModel},
};

#[automock]
#[async_trait]
pub trait SubscriptionPlanRepository {
    async fn create(
        &self,
        insert_subscription_plan_model: InsertSubscriptionPlanModel,
    ) -> StorageResult<SubscriptionPlanEntity>;
    async fn find_by_id(&self, plan_id: i32) -> StorageResult<Option<SubscriptionPlanEntity>>;
    async fn list(&self) -> StorageResult<Vec<SubscriptionPlanEntity>>;
    async fn update(
        &self,
        plan_id: i32,
        update_subscription_plan_model: UpdateSubscriptionPlanModel,
    ) -> StorageResult<SubscriptionPlanEntity>;
    /// Accounts referencing the plan are removed with it.
    async fn delete(&self, plan_id: i32) -> StorageResult<()>;
}
