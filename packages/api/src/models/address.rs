use serde::{Deserialize, Serialize};

/// An administrative region reference (id + display name).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
}

/// The four levels of the administrative hierarchy, top-down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionLevel {
    Province,
    Regency,
    District,
    Village,
}

impl RegionLevel {
    pub const ALL: [RegionLevel; 4] = [
        RegionLevel::Province,
        RegionLevel::Regency,
        RegionLevel::District,
        RegionLevel::Village,
    ];

    /// The level whose options depend on a selection at this level.
    pub fn child(self) -> Option<RegionLevel> {
        match self {
            RegionLevel::Province => Some(RegionLevel::Regency),
            RegionLevel::Regency => Some(RegionLevel::District),
            RegionLevel::District => Some(RegionLevel::Village),
            RegionLevel::Village => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            RegionLevel::Province => "Province",
            RegionLevel::Regency => "Regency",
            RegionLevel::District => "District",
            RegionLevel::Village => "Village",
        }
    }
}

/// A postal address: free-text street plus four hierarchical regions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub province: Option<Region>,
    #[serde(default)]
    pub regency: Option<Region>,
    #[serde(default)]
    pub district: Option<Region>,
    #[serde(default)]
    pub village: Option<Region>,
}

impl Address {
    /// Region selected at `level`, if any.
    pub fn region(&self, level: RegionLevel) -> Option<&Region> {
        match level {
            RegionLevel::Province => self.province.as_ref(),
            RegionLevel::Regency => self.regency.as_ref(),
            RegionLevel::District => self.district.as_ref(),
            RegionLevel::Village => self.village.as_ref(),
        }
    }

    /// One-line rendering, most specific part first.
    pub fn summary(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if !self.street.trim().is_empty() {
            parts.push(self.street.trim());
        }
        for level in RegionLevel::ALL.iter().rev() {
            if let Some(region) = self.region(*level) {
                parts.push(&region.name);
            }
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(id: &str, name: &str) -> Option<Region> {
        Some(Region {
            id: id.to_string(),
            name: name.to_string(),
        })
    }

    #[test]
    fn test_level_children() {
        assert_eq!(RegionLevel::Province.child(), Some(RegionLevel::Regency));
        assert_eq!(RegionLevel::District.child(), Some(RegionLevel::Village));
        assert_eq!(RegionLevel::Village.child(), None);
    }

    #[test]
    fn test_summary_skips_missing_parts() {
        let address = Address {
            street: "Jl. Melati 4".to_string(),
            province: region("32", "Jawa Barat"),
            regency: region("3273", "Kota Bandung"),
            district: None,
            village: None,
        };
        assert_eq!(address.summary(), "Jl. Melati 4, Kota Bandung, Jawa Barat");
        assert_eq!(Address::default().summary(), "");
    }

    #[test]
    fn test_deserialize_partial_address() {
        let address: Address =
            serde_json::from_str(r#"{"street":"Gg. Mawar","province":{"id":"11","name":"Aceh"}}"#)
                .unwrap();
        assert_eq!(address.province, region("11", "Aceh"));
        assert!(address.village.is_none());
    }
}
