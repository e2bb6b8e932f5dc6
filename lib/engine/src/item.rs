//! Item records shared by the lost and found sides.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contact details of the user who reported an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Read-only snapshot of an item report.
///
/// Lost and found reports share this shape; only the store distinguishes
/// which side a record belongs to. `occurred_at` is the event timestamp
/// (when the item was lost or found), `created_at` is when the report was
/// filed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: i64,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub occurred_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reported_by: Option<Contact>,
}

impl ItemRecord {
    /// Create a record with the required fields; the rest default to `None`.
    pub fn new(id: i64, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            description: None,
            location: None,
            occurred_at: None,
            image_path: None,
            created_at: None,
            reported_by: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_serde_camel_case_wire_names() {
        let mut item = ItemRecord::new(7, "Wallet", "accessories");
        item.description = Some("black leather wallet".to_string());
        item.occurred_at = Some(Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap());
        item.reported_by = Some(Contact {
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            phone: None,
        });

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 7);
        assert!(json.get("occurredAt").is_some());
        assert!(json.get("reportedBy").is_some());
        // absent phone is skipped entirely
        assert!(json["reportedBy"].get("phone").is_none());
    }

    #[test]
    fn test_deserialize_with_optional_fields_missing() {
        let item: ItemRecord = serde_json::from_str(
            r#"{"id": 3, "title": "Keys", "category": "keys"}"#,
        )
        .unwrap();
        assert_eq!(item.id, 3);
        assert!(item.description.is_none());
        assert!(item.occurred_at.is_none());
    }
}
