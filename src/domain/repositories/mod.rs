pub mod accounts;
pub mod errors;
pub mod subscription_plans;
