use serde::{Deserialize, Serialize};

use super::lookup::TypeRef;

/// A stock item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub inventory_type: Option<TypeRef>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryPayload {
    pub name: String,
    pub quantity: u32,
    pub unit: Option<String>,
    pub inventory_type_id: String,
    pub description: Option<String>,
}
