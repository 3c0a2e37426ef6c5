use anyhow::Result;
use chrono::{Duration, Utc};
use serde_json::{json, Value};

use crate::api::dto::envelope::Record;

/// In-memory item catalog backing the demo API.
#[derive(Clone, Default)]
pub struct ItemService {
    items: Vec<Record>,
}

impl ItemService {
    pub fn new(items: Vec<Record>) -> Self {
        Self { items }
    }

    pub fn with_sample_data() -> Self {
        let now = Utc::now();
        let raw = json!([
            {"id": 3, "name": "gamma", "price": 3.75, "created_at": (now - Duration::days(2)).to_rfc3339()},
            {"id": 1, "name": "alpha", "price": 9.50, "created_at": (now - Duration::days(30)).to_rfc3339()},
            {"id": 5, "name": "epsilon", "price": 1.25, "created_at": now.to_rfc3339()},
            {"id": 2, "name": "beta", "price": 7.00, "created_at": (now - Duration::days(14)).to_rfc3339()},
            {"id": 4, "name": "delta", "price": 4.20, "created_at": (now - Duration::days(7)).to_rfc3339()},
        ]);

        let items = raw
            .as_array()
            .map(|rows| {
                rows.iter()
                    .filter_map(|row| row.as_object().cloned())
                    .collect()
            })
            .unwrap_or_default();

        Self::new(items)
    }

    pub fn list(&self, limit: Option<usize>) -> Result<Vec<Record>> {
        let limit = limit.unwrap_or(self.items.len());
        Ok(self.items.iter().take(limit).cloned().collect())
    }

    pub fn find(&self, id: u64) -> Option<Record> {
        self.items
            .iter()
            .find(|record| record.get("id").and_then(Value::as_u64) == Some(id))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_data_is_homogeneous() {
        let service = ItemService::with_sample_data();
        let items = service.list(None).unwrap();
        assert_eq!(items.len(), 5);

        for item in &items {
            for key in ["id", "name", "price", "created_at"] {
                assert!(item.contains_key(key), "missing {key}");
            }
        }
    }

    #[test]
    fn list_respects_limit() {
        let service = ItemService::with_sample_data();
        assert_eq!(service.list(Some(2)).unwrap().len(), 2);
        assert_eq!(service.list(Some(100)).unwrap().len(), 5);
        assert_eq!(service.list(Some(0)).unwrap().len(), 0);
    }

    #[test]
    fn find_returns_matching_item_or_none() {
        let service = ItemService::with_sample_data();

        let item = service.find(3).unwrap();
        assert_eq!(item["name"], "gamma");

        assert!(service.find(99).is_none());
    }
}
