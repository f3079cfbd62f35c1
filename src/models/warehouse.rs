use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct WarehouseItemModel {
    pub id: i64,
    pub item_id: i64,
    pub quantity: i64,
}

/// Client-facing view of a stock row. The item reference stays internal.
#[derive(Debug, Clone, Serialize)]
pub struct WarehouseItemPublic {
    pub id: i64,
    pub quantity: i64,
}

impl From<&WarehouseItemModel> for WarehouseItemPublic {
    fn from(row: &WarehouseItemModel) -> Self {
        WarehouseItemPublic {
            id: row.id,
            quantity: row.quantity,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WarehouseItemCreate {
    #[serde(default)]
    pub quantity: i64,
}

/// Partial update. `id` is accepted on the wire but never re-targets the
/// row; the `wh_id` query parameter stays authoritative.
#[derive(Debug, Default, Deserialize)]
pub struct WarehouseItemUpdate {
    pub id: Option<i64>,
    pub quantity: Option<i64>,
}

impl WarehouseItemUpdate {
    pub fn apply(&self, row: &mut WarehouseItemModel) {
        if let Some(quantity) = self.quantity {
            row.quantity = quantity;
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WarehouseItemsPublic {
    pub data: Vec<WarehouseItemPublic>,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_row() -> WarehouseItemModel {
        WarehouseItemModel {
            id: 7,
            item_id: 3,
            quantity: 1,
        }
    }

    #[test]
    fn create_body_defaults_quantity_to_zero() {
        let body: WarehouseItemCreate = serde_json::from_str("{}").unwrap();
        assert_eq!(body.quantity, 0);
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let mut row = stored_row();
        let patch: WarehouseItemUpdate = serde_json::from_str(r#"{"quantity": 10}"#).unwrap();
        patch.apply(&mut row);
        assert_eq!(row.quantity, 10);
        assert_eq!(row.item_id, 3);
        assert_eq!(row.id, 7);
    }

    #[test]
    fn empty_patch_leaves_the_row_unchanged() {
        let mut row = stored_row();
        let patch: WarehouseItemUpdate = serde_json::from_str("{}").unwrap();
        patch.apply(&mut row);
        assert_eq!(row.quantity, 1);
        assert_eq!(row.item_id, 3);
    }

    #[test]
    fn patch_id_does_not_rekey_the_row() {
        let mut row = stored_row();
        let patch: WarehouseItemUpdate =
            serde_json::from_str(r#"{"id": 99, "quantity": 2}"#).unwrap();
        patch.apply(&mut row);
        assert_eq!(row.id, 7);
        assert_eq!(row.quantity, 2);
    }

    #[test]
    fn full_patch_is_idempotent() {
        let mut row = stored_row();
        let patch: WarehouseItemUpdate =
            serde_json::from_str(r#"{"id": 7, "quantity": 4}"#).unwrap();
        patch.apply(&mut row);
        let once = row.clone();
        patch.apply(&mut row);
        assert_eq!(row.id, once.id);
        assert_eq!(row.item_id, once.item_id);
        assert_eq!(row.quantity, once.quantity);
    }

    #[test]
    fn public_shape_hides_the_item_reference() {
        let value = serde_json::to_value(WarehouseItemPublic::from(&stored_row())).unwrap();
        assert!(value.get("item_id").is_none());
        assert_eq!(value["id"], 7);
        assert_eq!(value["quantity"], 1);
    }
}
