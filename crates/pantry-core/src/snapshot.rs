//! # Snapshot Encoding
//!
//! An inventory snapshot is persisted as one JSON array of
//! [`InventoryItem`]s. Decoding is pure, so it lives here rather than in the
//! storage crate; a payload that does not decode is reported as
//! [`CoreError::SnapshotUnreadable`] and the engine turns that into a
//! `failed` outcome.

use crate::error::{CoreError, CoreResult};
use crate::types::InventoryItem;

/// Decodes a stored snapshot payload.
///
/// Stored `status` tags are not trusted: every item's status is re-derived
/// from its quantity.
pub fn decode_snapshot(payload: &str) -> CoreResult<Vec<InventoryItem>> {
    let mut items: Vec<InventoryItem> =
        serde_json::from_str(payload).map_err(|e| CoreError::SnapshotUnreadable(e.to_string()))?;
    normalize_snapshot(&mut items);
    Ok(items)
}

/// Re-derives every item's status from its quantity.
pub fn normalize_snapshot(items: &mut [InventoryItem]) {
    for item in items.iter_mut() {
        item.derive_status();
    }
}

/// Encodes a snapshot for whole-payload storage.
pub fn encode_snapshot(items: &[InventoryItem]) -> CoreResult<String> {
    serde_json::to_string(items).map_err(|e| CoreError::SnapshotEncoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemStatus;

    #[test]
    fn test_decode_legacy_payload() {
        let payload = r#"[
            {"name": "Cà chua", "quantity": 1, "status": "normal"},
            {"name": "Sữa", "quantity": "0.5 lít"},
            {"name": "Bơ", "quantity": 0, "status": "used_up"}
        ]"#;

        let items = decode_snapshot(payload).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].quantity, 1.0);
        assert_eq!(items[1].quantity, 0.5);
        assert_eq!(items[2].status, ItemStatus::UsedUp);
    }

    #[test]
    fn test_decode_rederives_status() {
        let payload = r#"[
            {"name": "Gạo", "quantity": 5, "status": "used_up"},
            {"name": "Muối", "quantity": 0, "status": "normal"},
            {"name": "Đường", "quantity": 0}
        ]"#;

        let items = decode_snapshot(payload).unwrap();
        assert_eq!(items[0].status, ItemStatus::Normal);
        assert_eq!(items[1].status, ItemStatus::UsedUp);
        assert_eq!(items[2].status, ItemStatus::UsedUp);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_snapshot("not json"),
            Err(CoreError::SnapshotUnreadable(_))
        ));
        assert!(matches!(
            decode_snapshot(r#"{"name": "Cà chua"}"#),
            Err(CoreError::SnapshotUnreadable(_))
        ));
    }

    #[test]
    fn test_encode_then_decode_preserves_items() {
        let items = vec![InventoryItem::new("Gạo", 2.5).with_unit("kg")];
        let payload = encode_snapshot(&items).unwrap();
        assert_eq!(decode_snapshot(&payload).unwrap(), items);
    }
}
