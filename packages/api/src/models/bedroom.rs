use serde::{Deserialize, Serialize};

use super::lookup::TypeRef;

/// A bedroom children are assigned to.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedRoom {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub occupied: u32,
    #[serde(default)]
    pub bed_room_type: Option<TypeRef>,
    #[serde(default)]
    pub note: Option<String>,
}

impl BedRoom {
    pub fn available(&self) -> u32 {
        self.capacity.saturating_sub(self.occupied)
    }

    pub fn is_full(&self) -> bool {
        self.capacity > 0 && self.occupied >= self.capacity
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedRoomPayload {
    pub name: String,
    pub capacity: u32,
    pub bed_room_type_id: Option<String>,
    pub note: Option<String>,
}
