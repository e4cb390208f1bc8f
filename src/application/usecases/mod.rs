pub mod account_factory;
pub mod accounts;
pub mod subscription_plans;
