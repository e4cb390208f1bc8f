use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::subscription_plans::{
    EditSubscriptionPlanEntity, InsertSubscriptionPlanEntity, SubscriptionPlanEntity,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionPlanModel {
    pub id: i32,
    #[serde(rename = "type")]
    pub plan_type: String,
    pub price: i32,
    pub description: String,
    pub day: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SubscriptionPlanEntity> for SubscriptionPlanModel {
    fn from(value: SubscriptionPlanEntity) -> Self {
        Self {
            id: value.id,
            plan_type: value.plan_type,
            price: value.price,
            description: value.description,
            day: value.day,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InsertSubscriptionPlanModel {
    #[serde(rename = "type")]
    pub plan_type: String,
    pub price: i32,
    pub description: String,
    pub day: i32,
}

impl InsertSubscriptionPlanModel {
    pub fn to_entity(&self, now: DateTime<Utc>) -> InsertSubscriptionPlanEntity {
        InsertSubscriptionPlanEntity {
            plan_type: self.plan_type.clone(),
            price: self.price,
            description: self.description.clone(),
            day: self.day,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct UpdateSubscriptionPlanModel {
    #[serde(rename = "type")]
    pub plan_type: Option<String>,
    pub price: Option<i32>,
    pub description: Option<String>,
    pub day: Option<i32>,
}

impl UpdateSubscriptionPlanModel {
    pub fn to_entity(&self, now: DateTime<Utc>) -> EditSubscriptionPlanEntity {
        EditSubscriptionPlanEntity {
            plan_type: self.plan_type.clone(),
            price: self.price,
            description: self.description.clone(),
            day: self.day,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_type_is_exposed_as_type() {
        let insert: InsertSubscriptionPlanModel = serde_json::from_str(
            r#"{"type": "Gold", "price": 999, "description": "Gold tier", "day": 30}"#,
        )
        .unwrap();
        assert_eq!(insert.plan_type, "Gold");

        let now = Utc::now();
        let entity = insert.to_entity(now);
        assert_eq!(entity.created_at, now);
        assert_eq!(entity.updated_at, now);
        assert_eq!(entity.day, 30);
    }

    #[test]
    fn partial_update_only_carries_supplied_fields() {
        let update: UpdateSubscriptionPlanModel =
            serde_json::from_str(r#"{"price": 1299}"#).unwrap();
        let entity = update.to_entity(Utc::now());

        assert_eq!(entity.price, Some(1299));
        assert_eq!(entity.plan_type, None);
        assert_eq!(entity.day, None);
    }
}
