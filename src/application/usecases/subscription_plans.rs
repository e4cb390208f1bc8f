use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::{
    repositories::{errors::StorageError, subscription_plans::SubscriptionPlanRepository},
    value_objects::subscription_plans::{
        InsertSubscriptionPlanModel, SubscriptionPlanModel, UpdateSubscriptionPlanModel,
    },
};

#[derive(Debug, Error)]
pub enum SubscriptionPlanError {
    #[error("subscription plan not found")]
    PlanNotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StorageError> for SubscriptionPlanError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound => SubscriptionPlanError::PlanNotFound,
            StorageError::Internal(err) => SubscriptionPlanError::Internal(err),
            other => SubscriptionPlanError::Internal(anyhow::Error::new(other)),
        }
    }
}

pub type PlanUseCaseResult<T> = std::result::Result<T, SubscriptionPlanError>;

pub struct SubscriptionPlanUseCase<P>
where
    P: SubscriptionPlanRepository + Send + Sync + 'static,
{
    subscription_plan_repository: Arc<P>,
}

impl<P> SubscriptionPlanUseCase<P>
where
    P: SubscriptionPlanRepository + Send + Sync + 'static,
{
    pub fn new(subscription_plan_repository: Arc<P>) -> Self {
        Self {
            subscription_plan_repository,
        }
    }

    pub async fn create(
        &self,
        insert_subscription_plan_model: InsertSubscriptionPlanModel,
    ) -> PlanUseCaseResult<SubscriptionPlanModel> {
        let plan = self
            .subscription_plan_repository
            .create(insert_subscription_plan_model)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "subscription_plans: failed to create plan");
                SubscriptionPlanError::from(err)
            })?;

        info!(
            plan_id = plan.id,
            plan_type = %plan.plan_type,
            "subscription_plans: plan created"
        );
        Ok(plan.into())
    }

    pub async fn find_by_id(&self, plan_id: i32) -> PlanUseCaseResult<SubscriptionPlanModel> {
        let plan = self
            .subscription_plan_repository
            .find_by_id(plan_id)
            .await
            .map_err(|err| {
                error!(plan_id, db_error = ?err, "subscription_plans: failed to load plan");
                SubscriptionPlanError::from(err)
            })?
            .ok_or(SubscriptionPlanError::PlanNotFound)?;

        Ok(plan.into())
    }

    /// Newest plans first.
    pub async fn list(&self) -> PlanUseCaseResult<Vec<SubscriptionPlanModel>> {
        let plans = self
            .subscription_plan_repository
            .list()
            .await
            .map_err(|err| {
                error!(db_error = ?err, "subscription_plans: failed to list plans");
                SubscriptionPlanError::from(err)
            })?;
        info!(plan_count = plans.len(), "subscription_plans: plans loaded");

        Ok(plans.into_iter().map(SubscriptionPlanModel::from).collect())
    }

    pub async fn update(
        &self,
        plan_id: i32,
        update_subscription_plan_model: UpdateSubscriptionPlanModel,
    ) -> PlanUseCaseResult<SubscriptionPlanModel> {
        let plan = self
            .subscription_plan_repository
            .update(plan_id, update_subscription_plan_model)
            .await
            .map_err(|err| {
                if matches!(err, StorageError::NotFound) {
                    warn!(plan_id, "subscription_plans: plan to update not found");
                } else {
                    error!(plan_id, db_error = ?err, "subscription_plans: failed to update plan");
                }
                SubscriptionPlanError::from(err)
            })?;

        info!(plan_id, "subscription_plans: plan updated");
        Ok(plan.into())
    }

    /// Accounts subscribed to the plan are deleted along with it.
    pub async fn delete(&self, plan_id: i32) -> PlanUseCaseResult<()> {
        self.subscription_plan_repository
            .delete(plan_id)
            .await
            .map_err(|err| {
                if matches!(err, StorageError::NotFound) {
                    warn!(plan_id, "subscription_plans: plan to delete not found");
                } else {
                    error!(plan_id, db_error = ?err, "subscription_plans: failed to delete plan");
                }
                SubscriptionPlanError::from(err)
            })?;

        info!(plan_id, "subscription_plans: plan deleted");
        Ok(())
    }
}
