pub mod accounts;
pub mod email;
pub mod enums;
pub mod passwords;
pub mod subscription_plans;
