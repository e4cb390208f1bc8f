use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::accounts::{AccountEntity, EditAccountEntity, InsertAccountEntity},
    value_objects::{
        enums::roles::{InvalidRole, Role},
        passwords::is_usable_password,
    },
};

/// Account as handed to callers. The credential itself never leaves the
/// repository layer, only whether one is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountModel {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub email: String,
    pub phone_number: Option<String>,
    pub role: Role,
    pub subscription_id: Option<i32>,
    pub subscription_start_date: Option<DateTime<Utc>>,
    pub subscription_end_date: Option<DateTime<Utc>>,
    pub status: bool,
    pub has_usable_password: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<AccountEntity> for AccountModel {
    type Error = InvalidRole;

    fn try_from(value: AccountEntity) -> Result<Self, Self::Error> {
        let role = Role::try_from(value.role)?;
        let has_usable_password = is_usable_password(&value.password);

        Ok(Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            date_of_birth: value.date_of_birth,
            email: value.email,
            phone_number: value.phone_number,
            role,
            subscription_id: value.subscription_id,
            subscription_start_date: value.subscription_start_date,
            subscription_end_date: value.subscription_end_date,
            status: value.status,
            has_usable_password,
            created_at: value.created_at,
            updated_at: value.updated_at,
            deleted_at: value.deleted_at,
        })
    }
}

/// Input of the account factory. `email` is the only required field; every
/// other field falls back to its default when omitted.
#[derive(Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CreateAccountModel {
    pub email: String,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub role: Option<Role>,
    pub subscription_id: Option<i32>,
    pub subscription_start_date: Option<DateTime<Utc>>,
    pub subscription_end_date: Option<DateTime<Utc>>,
    pub status: Option<bool>,
}

impl std::fmt::Debug for CreateAccountModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateAccountModel")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("date_of_birth", &self.date_of_birth)
            .field("phone_number", &self.phone_number)
            .field("role", &self.role)
            .field("subscription_id", &self.subscription_id)
            .field("subscription_start_date", &self.subscription_start_date)
            .field("subscription_end_date", &self.subscription_end_date)
            .field("status", &self.status)
            .finish()
    }
}

impl CreateAccountModel {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    /// Applies the defaults (role USER, status active, empty first name) and
    /// attaches the generated id, the canonical email and the stored credential.
    pub fn into_new_account(self, id: Uuid, email: String, password: String) -> NewAccountModel {
        NewAccountModel {
            id,
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            email,
            phone_number: self.phone_number,
            role: self.role.unwrap_or_default(),
            subscription_id: self.subscription_id,
            subscription_start_date: self.subscription_start_date,
            subscription_end_date: self.subscription_end_date,
            status: self.status.unwrap_or(true),
            password,
        }
    }
}

/// Fully resolved account ready to be inserted. Timestamps are added by the
/// repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccountModel {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub email: String,
    pub phone_number: Option<String>,
    pub role: Role,
    pub subscription_id: Option<i32>,
    pub subscription_start_date: Option<DateTime<Utc>>,
    pub subscription_end_date: Option<DateTime<Utc>>,
    pub status: bool,
    pub password: String,
}

impl NewAccountModel {
    pub fn to_entity(&self, now: DateTime<Utc>) -> InsertAccountEntity {
        InsertAccountEntity {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_birth: self.date_of_birth,
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            role: self.role.into(),
            subscription_id: self.subscription_id,
            subscription_start_date: self.subscription_start_date,
            subscription_end_date: self.subscription_end_date,
            status: self.status,
            created_at: now,
            updated_at: now,
            password: self.password.clone(),
        }
    }
}

/// Profile changes requested by a caller. Plan assignment and credentials go
/// through their own operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateAccountModel {
    pub first_name: Option<String>,
    pub last_name: Option<Option<String>>,
    pub date_of_birth: Option<Option<NaiveDate>>,
    pub email: Option<String>,
    pub phone_number: Option<Option<String>>,
    pub role: Option<Role>,
    pub subscription_start_date: Option<Option<DateTime<Utc>>>,
    pub subscription_end_date: Option<Option<DateTime<Utc>>>,
    pub status: Option<bool>,
}

/// Column changes written by the repository. `None` leaves a column as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditAccountModel {
    pub first_name: Option<String>,
    pub last_name: Option<Option<String>>,
    pub date_of_birth: Option<Option<NaiveDate>>,
    pub email: Option<String>,
    pub phone_number: Option<Option<String>>,
    pub role: Option<Role>,
    pub subscription_id: Option<Option<i32>>,
    pub subscription_start_date: Option<Option<DateTime<Utc>>>,
    pub subscription_end_date: Option<Option<DateTime<Utc>>>,
    pub status: Option<bool>,
    pub password: Option<String>,
}

impl From<UpdateAccountModel> for EditAccountModel {
    fn from(value: UpdateAccountModel) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            date_of_birth: value.date_of_birth,
            email: value.email,
            phone_number: value.phone_number,
            role: value.role,
            subscription_start_date: value.subscription_start_date,
            subscription_end_date: value.subscription_end_date,
            status: value.status,
            ..Default::default()
        }
    }
}

impl EditAccountModel {
    pub fn to_entity(&self, now: DateTime<Utc>) -> EditAccountEntity {
        EditAccountEntity {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_birth: self.date_of_birth,
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            role: self.role.map(i16::from),
            subscription_id: self.subscription_id,
            subscription_start_date: self.subscription_start_date,
            subscription_end_date: self.subscription_end_date,
            status: self.status,
            password: self.password.clone(),
            updated_at: now,
        }
    }
}
