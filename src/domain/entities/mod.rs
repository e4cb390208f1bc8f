pub mod accounts;
pub mod subscription_plans;
