//! Pool records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A declared member's pre-pool balance, as submitted by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberBalance {
    pub ship_id: String,
    /// Compliance balance brought into the pool, grams CO2eq
    pub cb_before: f64,
}

/// A member's position after allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolMember {
    pub ship_id: String,
    pub cb_before: f64,
    pub cb_after: f64,
}

/// An immutable historical pooling record.
///
/// Appended to the registry's history on creation and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pub id: Uuid,
    pub year: i32,
    /// Sum of the members' pre-pool balances
    pub total_cb: f64,
    /// Members in their declared order
    pub members: Vec<PoolMember>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_wire_field_names() {
        let member: MemberBalance = serde_json::from_str(
            r#"{"shipId": "R001", "cbBefore": -100.0}"#,
        )
        .unwrap();
        assert_eq!(member.ship_id, "R001");
        assert_eq!(member.cb_before, -100.0);
    }

    #[test]
    fn test_pool_wire_field_names() {
        let pool = Pool {
            id: Uuid::new_v4(),
            year: 2024,
            total_cb: 40.0,
            members: vec![PoolMember {
                ship_id: "R001".into(),
                cb_before: 40.0,
                cb_after: 40.0,
            }],
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&pool).unwrap();
        assert_eq!(json["totalCb"], 40.0);
        assert_eq!(json["members"][0]["cbAfter"], 40.0);
        assert!(json.get("createdAt").is_some());
    }
}
