use serde::{Deserialize, Serialize};

/// Reference to a "type" lookup entity (document type, donation type, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    pub id: String,
    pub name: String,
}

/// Body for creating a lookup entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypePayload {
    pub name: String,
}
