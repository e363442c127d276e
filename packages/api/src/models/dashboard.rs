use serde::{Deserialize, Serialize};

/// Entity counts shown on the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default)]
    pub children: u64,
    #[serde(default)]
    pub caretakers: u64,
    #[serde(default)]
    pub bed_rooms: u64,
    #[serde(default)]
    pub donations: u64,
    #[serde(default)]
    pub events: u64,
    #[serde(default)]
    pub inventories: u64,
}
