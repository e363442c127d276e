use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::lookup::TypeRef;

/// A document on file (birth certificate, family card, school report, ...).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub document_type: Option<TypeRef>,
    /// Owner, when the document belongs to a user.
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<NaiveDate>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPayload {
    pub name: String,
    pub url: String,
    pub document_type_id: String,
    pub user_id: Option<String>,
}
