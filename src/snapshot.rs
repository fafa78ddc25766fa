// src/snapshot.rs
//
// Canonical snapshot model: normalization of raw cards into entries, and
// the keyed, insertion-ordered snapshot the detector diffs.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::catalog::RawCard;
use crate::categories::CategoryContext;
use crate::config::consts::SALE_URL;

/// One catalog item in canonical form. `name`, `status` and the two prices
/// are independently optional: a missing source field stays missing, never
/// zero or "", so an unknown price can never fake a price drop.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotEntry {
    pub name: Option<String>,
    pub status: Option<String>,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub category_id: u32,
    pub category_name: String,
    pub url: String,
}

impl SnapshotEntry {
    /// Normalize one raw card under its category context.
    /// Returns the snapshot key `"{categoryId}:{saleId}"` and the entry.
    pub fn from_card(card: &RawCard, ctx: &CategoryContext) -> (String, SnapshotEntry) {
        let sale_id = match card.sale_id {
            Some(id) => id.to_string(),
            None => s!("unknown"),
        };
        let (price, original_price) = match &card.price {
            Some(p) => (p.sale_price, p.original_price),
            None => (None, None),
        };
        let entry = SnapshotEntry {
            name: card.name.clone(),
            status: card.status.clone(),
            price,
            original_price,
            category_id: ctx.id,
            category_name: ctx.label.clone(),
            url: format!("{SALE_URL}/{sale_id}"),
        };
        (format!("{}:{}", ctx.id, sale_id), entry)
    }
}

/// Keyed view of everything currently listed, in first-seen order.
///
/// Re-inserting an existing key replaces the value but keeps the key's
/// original position (last write wins). Both the diff order and the
/// serialized form depend on this order being stable.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    order: Vec<String>,
    entries: HashMap<String, SnapshotEntry>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, entry: SnapshotEntry) {
        if self.entries.insert(key.clone(), entry).is_none() {
            self.order.push(key);
        }
    }

    pub fn get(&self, key: &str) -> Option<&SnapshotEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SnapshotEntry)> {
        self.order.iter().map(|key| (key.as_str(), &self.entries[key]))
    }

    /// Build a snapshot from normalized (card, category) pairs, in order.
    /// No entry is ever dropped for having absent fields.
    pub fn from_cards<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a RawCard, &'a CategoryContext)>,
    {
        let mut snapshot = Snapshot::new();
        for (card, ctx) in pairs {
            let (key, entry) = SnapshotEntry::from_card(card, ctx);
            snapshot.insert(key, entry);
        }
        snapshot
    }
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.entries == other.entries
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for (key, entry) in self.iter() {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SnapshotVisitor;

        impl<'de> Visitor<'de> for SnapshotVisitor {
            type Value = Snapshot;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of snapshot entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Snapshot, A::Error> {
                let mut snapshot = Snapshot::new();
                while let Some((key, entry)) = access.next_entry::<String, SnapshotEntry>()? {
                    snapshot.insert(key, entry);
                }
                Ok(snapshot)
            }
        }

        deserializer.deserialize_map(SnapshotVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PriceInfo;

    fn ctx() -> CategoryContext {
        CategoryContext { id: 6, label: s!("MERCH") }
    }

    fn card(sale_id: u64, status: &str, price: f64) -> RawCard {
        RawCard {
            sale_id: Some(sale_id),
            name: Some(format!("Item {sale_id}")),
            status: Some(s!(status)),
            price: Some(PriceInfo { sale_price: Some(price), original_price: Some(price) }),
        }
    }

    #[test]
    fn from_card_builds_key_url_and_fields() {
        let (key, entry) = SnapshotEntry::from_card(&card(100, "IN_STOCK", 20.0), &ctx());
        assert_eq!(key, "6:100");
        assert_eq!(entry.name.as_deref(), Some("Item 100"));
        assert_eq!(entry.price, Some(20.0));
        assert_eq!(entry.category_id, 6);
        assert_eq!(entry.category_name, "MERCH");
        assert!(entry.url.ends_with("/sales/100"));
    }

    #[test]
    fn from_card_keeps_missing_fields_missing() {
        let bare = RawCard { sale_id: Some(7), ..Default::default() };
        let (key, entry) = SnapshotEntry::from_card(&bare, &ctx());
        assert_eq!(key, "6:7");
        assert!(entry.name.is_none());
        assert!(entry.status.is_none());
        assert!(entry.price.is_none());
        assert!(entry.original_price.is_none());
    }

    #[test]
    fn missing_price_field_inside_structure_stays_missing() {
        let partial = RawCard {
            sale_id: Some(8),
            price: Some(PriceInfo { sale_price: None, original_price: Some(30.0) }),
            ..Default::default()
        };
        let (_, entry) = SnapshotEntry::from_card(&partial, &ctx());
        assert!(entry.price.is_none());
        assert_eq!(entry.original_price, Some(30.0));
    }

    #[test]
    fn collision_keeps_position_and_takes_last_value() {
        let c = ctx();
        let cards = [card(100, "SOLD_OUT", 20.0), card(101, "IN_STOCK", 10.0), card(100, "IN_STOCK", 15.0)];
        let snapshot = Snapshot::from_cards(cards.iter().map(|cd| (cd, &c)));

        assert_eq!(snapshot.len(), 2);
        let keys: Vec<_> = snapshot.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["6:100", "6:101"]);
        // Last write won.
        assert_eq!(snapshot.get("6:100").unwrap().status.as_deref(), Some("IN_STOCK"));
        assert_eq!(snapshot.get("6:100").unwrap().price, Some(15.0));
    }

    #[test]
    fn serde_round_trip_preserves_order_and_values() {
        let c = ctx();
        let cards = [card(102, "IN_STOCK", 12.5), card(100, "SOLD_OUT", 20.0), card(101, "IN_STOCK", 10.0)];
        let snapshot = Snapshot::from_cards(cards.iter().map(|cd| (cd, &c)));

        let text = serde_json::to_string_pretty(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&text).unwrap();
        assert_eq!(back, snapshot);

        let keys: Vec<_> = back.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, ["6:102", "6:100", "6:101"]);
    }

    #[test]
    fn absent_fields_serialize_as_null_not_zero() {
        let mut snapshot = Snapshot::new();
        snapshot.insert(s!("6:7"), SnapshotEntry {
            category_id: 6,
            category_name: s!("MERCH"),
            url: s!("https://example.com/7"),
            ..Default::default()
        });
        let text = serde_json::to_string(&snapshot).unwrap();
        assert!(text.contains(r#""price":null"#));
        assert!(!text.contains(r#""price":0"#));
    }
}
