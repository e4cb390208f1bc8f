use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::subscription_plans;

#[derive(Debug, Clone, PartialEq, Identifiable, Selectable, Queryable)]
#[diesel(table_name = subscription_plans)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SubscriptionPlanEntity {
    pub id: i32,
    #[diesel(column_name = type_)]
    pub plan_type: String,
    pub price: i32,
    pub description: String,
    /// Validity of the plan in days.
    pub day: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = subscription_plans)]
pub struct InsertSubscriptionPlanEntity {
    #[diesel(column_name = type_)]
    pub plan_type: String,
    pub price: i32,
    pub description: String,
    pub day: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = subscription_plans)]
pub struct EditSubscriptionPlanEntity {
    #[diesel(column_name = type_)]
    pub plan_type: Option<String>,
    pub price: Option<i32>,
    pub description: Option<String>,
    pub day: Option<i32>,
    pub updated_at: DateTime<Utc>,
}
