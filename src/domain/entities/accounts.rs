use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::accounts;

#[derive(Debug, Clone, PartialEq, Identifiable, Selectable, Queryable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AccountEntity {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub email: String,
    pub phone_number: Option<String>,
    pub role: i16,
    pub subscription_id: Option<i32>,
    pub subscription_start_date: Option<DateTime<Utc>>,
    pub subscription_end_date: Option<DateTime<Utc>>,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    /// Argon2 PHC string, or an unusable marker starting with `!`.
    pub password: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accounts)]
pub struct InsertAccountEntity {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub email: String,
    pub phone_number: Option<String>,
    pub role: i16,
    pub subscription_id: Option<i32>,
    pub subscription_start_date: Option<DateTime<Utc>>,
    pub subscription_end_date: Option<DateTime<Utc>>,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub password: String,
}

/// `None` leaves a column untouched, `Some(None)` writes NULL.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = accounts)]
pub struct EditAccountEntity {
    pub first_name: Option<String>,
    pub last_name: Option<Option<String>>,
    pub date_of_birth: Option<Option<NaiveDate>>,
    pub email: Option<String>,
    pub phone_number: Option<Option<String>>,
    pub role: Option<i16>,
    pub subscription_id: Option<Option<i32>>,
    pub subscription_start_date: Option<Option<DateTime<Utc>>>,
    pub subscription_end_date: Option<Option<DateTime<Utc>>>,
    pub status: Option<bool>,
    pub password: Option<String>,
    pub updated_at: DateTime<Utc>,
}
