//! # Cascading address selector
//!
//! Province → regency → district → village. Each level's options come from an
//! endpoint scoped to the parent's selected id, so choosing at one level clears
//! everything beneath it and starts loading the next level.
//!
//! Each level has its own [`Sequencer`]: a late answer for a province the user
//! already moved away from is dropped instead of overwriting the current
//! options.
//!
//! [`AddressPair`] holds two selectors (a child's and a guardian's address)
//! plus a mirror toggle. While mirrored, the secondary selector is a copy of
//! the primary and refuses input of its own.

use api::models::{Address, Region, RegionLevel};
use api::ApiError;

use crate::sequence::{Completion, Sequencer, Ticket};

/// One entry of a `<select>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionOption {
    pub value: String,
    pub label: String,
}

impl From<&Region> for RegionOption {
    fn from(region: &Region) -> Self {
        Self {
            value: region.id.clone(),
            label: region.name.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LevelState {
    pub selected: Option<Region>,
    pub options: Vec<Region>,
    pub loading: bool,
    sequencer: Sequencer,
}

impl LevelState {
    pub fn options(&self) -> Vec<RegionOption> {
        self.options.iter().map(RegionOption::from).collect()
    }

    /// Look an option up by id among the loaded options.
    pub fn find(&self, id: &str) -> Option<Region> {
        self.options.iter().find(|r| r.id == id).cloned()
    }

    fn reset(&mut self) {
        self.selected = None;
        self.options.clear();
        self.loading = false;
        self.sequencer.invalidate();
    }
}

/// Options to load for one level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelFetch {
    pub level: RegionLevel,
    /// Selected id of the parent level, `None` for provinces.
    pub parent_id: Option<String>,
    pub ticket: Ticket,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddressSelector {
    levels: [LevelState; 4],
}

impl AddressSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self, level: RegionLevel) -> &LevelState {
        &self.levels[level.index()]
    }

    pub fn selected(&self, level: RegionLevel) -> Option<&Region> {
        self.level(level).selected.as_ref()
    }

    pub fn is_level_loading(&self, level: RegionLevel) -> bool {
        self.level(level).loading
    }

    /// A level can be chosen once its parent has a selection.
    pub fn is_enabled(&self, level: RegionLevel) -> bool {
        match parent(level) {
            None => true,
            Some(parent) => self.selected(parent).is_some(),
        }
    }

    pub fn load_provinces(&mut self) -> LevelFetch {
        self.begin(RegionLevel::Province, None)
    }

    /// Choose (or clear) the region at `level`.
    ///
    /// Every lower level is reset. Returns the fetch for the next level's
    /// options when there is one to load.
    pub fn select(&mut self, level: RegionLevel, region: Option<Region>) -> Option<LevelFetch> {
        for lower in RegionLevel::ALL.iter().filter(|l| **l > level) {
            self.levels[lower.index()].reset();
        }
        let id = region.as_ref().map(|r| r.id.clone());
        self.levels[level.index()].selected = region;

        let child = level.child()?;
        let id = id?;
        Some(self.begin(child, Some(id)))
    }

    /// Apply the options returned for `fetch`.
    pub fn complete(&mut self, fetch: &LevelFetch, result: Result<Vec<Region>, ApiError>) -> Completion {
        let state = &mut self.levels[fetch.level.index()];
        if !state.sequencer.is_current(fetch.ticket) {
            tracing::debug!("dropping stale {} options", fetch.level.label());
            return Completion::Stale;
        }
        state.loading = false;
        match result {
            Ok(options) => {
                state.options = options;
                Completion::Applied
            }
            Err(err) => {
                state.options.clear();
                Completion::Failed(err)
            }
        }
    }

    /// Restore a saved address (edit forms).
    ///
    /// Sets every resolved selection and returns the fetches that load option
    /// lists for the province list and each level under a selection.
    pub fn prefill(&mut self, address: &Address) -> Vec<LevelFetch> {
        for level in RegionLevel::ALL {
            let state = &mut self.levels[level.index()];
            state.reset();
            state.selected = address.region(level).cloned();
        }

        let mut fetches = vec![self.load_provinces()];
        for level in RegionLevel::ALL {
            let Some(child) = level.child() else { break };
            let Some(id) = self.selected(level).map(|r| r.id.clone()) else {
                break;
            };
            fetches.push(self.begin(child, Some(id)));
        }
        fetches
    }

    pub fn to_address(&self, street: &str) -> Address {
        Address {
            street: street.trim().to_string(),
            province: self.selected(RegionLevel::Province).cloned(),
            regency: self.selected(RegionLevel::Regency).cloned(),
            district: self.selected(RegionLevel::District).cloned(),
            village: self.selected(RegionLevel::Village).cloned(),
        }
    }

    fn loading_levels(&self) -> Vec<RegionLevel> {
        RegionLevel::ALL
            .into_iter()
            .filter(|l| self.is_level_loading(*l))
            .collect()
    }

    fn begin(&mut self, level: RegionLevel, parent_id: Option<String>) -> LevelFetch {
        let state = &mut self.levels[level.index()];
        state.loading = true;
        LevelFetch {
            level,
            parent_id,
            ticket: state.sequencer.issue(),
        }
    }

    fn parent_id(&self, level: RegionLevel) -> Option<String> {
        parent(level).and_then(|p| self.selected(p).map(|r| r.id.clone()))
    }
}

fn parent(level: RegionLevel) -> Option<RegionLevel> {
    RegionLevel::ALL.into_iter().find(|l| l.child() == Some(level))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Primary,
    Secondary,
}

/// Two address selectors where the second can mirror the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddressPair {
    pub primary: AddressSelector,
    pub secondary: AddressSelector,
    mirror: bool,
}

impl AddressPair {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn side(&self, side: Side) -> &AddressSelector {
        match side {
            Side::Primary => &self.primary,
            Side::Secondary => &self.secondary,
        }
    }

    pub fn is_mirrored(&self) -> bool {
        self.mirror
    }

    /// Whether the inputs of `side` accept user changes.
    pub fn is_editable(&self, side: Side) -> bool {
        side == Side::Primary || !self.mirror
    }

    /// Turn mirroring on or off.
    ///
    /// Enabling copies the primary immediately. Disabling keeps the mirrored
    /// values and re-issues the secondary's in-flight loads, whose answers
    /// were only ever going to the primary.
    pub fn set_mirror(&mut self, on: bool) -> Vec<LevelFetch> {
        if on == self.mirror {
            return Vec::new();
        }
        self.mirror = on;
        if on {
            self.sync();
            return Vec::new();
        }
        let pending = self.secondary.loading_levels();
        pending
            .into_iter()
            .map(|level| {
                let parent_id = self.secondary.parent_id(level);
                self.secondary.begin(level, parent_id)
            })
            .collect()
    }

    pub fn load_provinces(&mut self) -> Vec<(Side, LevelFetch)> {
        let mut fetches = vec![(Side::Primary, self.primary.load_provinces())];
        if self.mirror {
            self.sync();
        } else {
            fetches.push((Side::Secondary, self.secondary.load_provinces()));
        }
        fetches
    }

    pub fn select(&mut self, side: Side, level: RegionLevel, region: Option<Region>) -> Option<LevelFetch> {
        match side {
            Side::Primary => {
                let fetch = self.primary.select(level, region);
                self.sync();
                fetch
            }
            Side::Secondary if self.mirror => {
                tracing::debug!("ignoring {} change on mirrored address", level.label());
                None
            }
            Side::Secondary => self.secondary.select(level, region),
        }
    }

    pub fn complete(&mut self, side: Side, fetch: &LevelFetch, result: Result<Vec<Region>, ApiError>) -> Completion {
        match side {
            Side::Primary => {
                let completion = self.primary.complete(fetch, result);
                self.sync();
                completion
            }
            // The copy already receives the primary's answers.
            Side::Secondary if self.mirror => Completion::Stale,
            Side::Secondary => self.secondary.complete(fetch, result),
        }
    }

    pub fn prefill(&mut self, side: Side, address: &Address) -> Vec<LevelFetch> {
        match side {
            Side::Primary => {
                let fetches = self.primary.prefill(address);
                self.sync();
                fetches
            }
            Side::Secondary => self.secondary.prefill(address),
        }
    }

    /// Both addresses, the secondary taking the primary's street while mirrored.
    pub fn addresses(&self, primary_street: &str, secondary_street: &str) -> (Address, Address) {
        let primary = self.primary.to_address(primary_street);
        let secondary = if self.mirror {
            primary.clone()
        } else {
            self.secondary.to_address(secondary_street)
        };
        (primary, secondary)
    }

    fn sync(&mut self) {
        if self.mirror {
            self.secondary = self.primary.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiClient, MemoryTokenStore, Method, MockTransport};
    use serde_json::json;

    fn region(id: &str, name: &str) -> Region {
        Region {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn client() -> (ApiClient<MockTransport, MemoryTokenStore>, MockTransport) {
        let transport = MockTransport::new();
        transport
            .respond_json(
                Method::Get,
                "/address/provinces",
                json!({"data": [{"id": "32", "name": "Jawa Barat"}, {"id": "33", "name": "Jawa Tengah"}]}),
            )
            .respond_json(
                Method::Get,
                "/address/provinces/32/regencies",
                json!({"data": [{"id": "3273", "name": "Kota Bandung"}]}),
            )
            .respond_json(
                Method::Get,
                "/address/provinces/33/regencies",
                json!({"data": [{"id": "3374", "name": "Kota Semarang"}]}),
            );
        (ApiClient::new(transport.clone(), MemoryTokenStore::new()), transport)
    }

    #[tokio::test]
    async fn test_province_selection_loads_scoped_regencies() {
        let (client, transport) = client();
        let mut selector = AddressSelector::new();

        let fetch = selector.load_provinces();
        let result = client.regions(fetch.level, fetch.parent_id.as_deref()).await;
        selector.complete(&fetch, result);
        assert_eq!(selector.level(RegionLevel::Province).options.len(), 2);

        // Pretend a deeper selection existed before the province changes
        selector.levels[RegionLevel::District.index()].selected = Some(region("x", "old"));

        let province = selector.level(RegionLevel::Province).find("32");
        let fetch = selector.select(RegionLevel::Province, province).unwrap();
        assert_eq!(fetch.level, RegionLevel::Regency);
        assert!(selector.is_level_loading(RegionLevel::Regency));
        assert!(selector.selected(RegionLevel::District).is_none());

        let result = client.regions(fetch.level, fetch.parent_id.as_deref()).await;
        assert_eq!(selector.complete(&fetch, result), Completion::Applied);

        assert_eq!(
            transport.last_request().unwrap().path,
            "/address/provinces/32/regencies"
        );
        assert_eq!(
            selector.level(RegionLevel::Regency).options(),
            vec![RegionOption {
                value: "3273".to_string(),
                label: "Kota Bandung".to_string()
            }]
        );
        assert!(!selector.is_level_loading(RegionLevel::Regency));
        assert!(selector.selected(RegionLevel::Regency).is_none());
    }

    #[test]
    fn test_late_answer_for_previous_province_is_dropped() {
        let mut selector = AddressSelector::new();
        let old = selector
            .select(RegionLevel::Province, Some(region("32", "Jawa Barat")))
            .unwrap();
        let new = selector
            .select(RegionLevel::Province, Some(region("33", "Jawa Tengah")))
            .unwrap();

        selector.complete(&new, Ok(vec![region("3374", "Kota Semarang")]));
        assert_eq!(
            selector.complete(&old, Ok(vec![region("3273", "Kota Bandung")])),
            Completion::Stale
        );
        assert_eq!(selector.level(RegionLevel::Regency).options[0].id, "3374");
    }

    #[test]
    fn test_failure_keeps_parents_and_empties_level() {
        let mut selector = AddressSelector::new();
        let fetch = selector
            .select(RegionLevel::Province, Some(region("32", "Jawa Barat")))
            .unwrap();
        let err = ApiError::Network("offline".to_string());

        assert_eq!(selector.complete(&fetch, Err(err.clone())), Completion::Failed(err));
        assert!(selector.level(RegionLevel::Regency).options.is_empty());
        assert!(!selector.is_level_loading(RegionLevel::Regency));
        assert_eq!(selector.selected(RegionLevel::Province).unwrap().id, "32");
    }

    #[test]
    fn test_clearing_selection_does_not_fetch() {
        let mut selector = AddressSelector::new();
        selector.select(RegionLevel::Province, Some(region("32", "Jawa Barat")));
        assert!(selector.select(RegionLevel::Province, None).is_none());
        assert!(!selector.is_enabled(RegionLevel::Regency));
        assert!(!selector.is_level_loading(RegionLevel::Regency));
        assert!(selector.select(RegionLevel::Village, Some(region("v", "Desa"))).is_none());
    }

    #[test]
    fn test_prefill_requests_every_resolved_level() {
        let mut selector = AddressSelector::new();
        let address = Address {
            street: "Jl. Melati 3".to_string(),
            province: Some(region("32", "Jawa Barat")),
            regency: Some(region("3273", "Kota Bandung")),
            district: None,
            village: None,
        };
        let fetches = selector.prefill(&address);
        let scopes: Vec<(RegionLevel, Option<&str>)> = fetches
            .iter()
            .map(|f| (f.level, f.parent_id.as_deref()))
            .collect();
        assert_eq!(
            scopes,
            vec![
                (RegionLevel::Province, None),
                (RegionLevel::Regency, Some("32")),
                (RegionLevel::District, Some("3273")),
            ]
        );
        assert_eq!(selector.to_address(" Jl. Melati 3 "), address);
    }

    #[tokio::test]
    async fn test_mirror_replicates_primary_province_change() {
        let (client, _) = client();
        let mut pair = AddressPair::new();
        assert!(pair.set_mirror(true).is_empty());

        let fetch = pair
            .select(Side::Primary, RegionLevel::Province, Some(region("33", "Jawa Tengah")))
            .unwrap();
        assert_eq!(pair.secondary, pair.primary);

        let result = client.regions(fetch.level, fetch.parent_id.as_deref()).await;
        pair.complete(Side::Primary, &fetch, result);

        assert_eq!(pair.secondary.selected(RegionLevel::Province).unwrap().id, "33");
        assert_eq!(pair.secondary.level(RegionLevel::Regency).options[0].id, "3374");
        assert_eq!(pair.secondary, pair.primary);
    }

    #[test]
    fn test_mirrored_secondary_rejects_input() {
        let mut pair = AddressPair::new();
        pair.set_mirror(true);
        assert!(!pair.is_editable(Side::Secondary));
        assert!(pair
            .select(Side::Secondary, RegionLevel::Province, Some(region("32", "Jawa Barat")))
            .is_none());
        assert!(pair.secondary.selected(RegionLevel::Province).is_none());
    }

    #[test]
    fn test_enabling_mirror_copies_primary() {
        let mut pair = AddressPair::new();
        pair.select(Side::Primary, RegionLevel::Province, Some(region("32", "Jawa Barat")));
        pair.select(Side::Secondary, RegionLevel::Province, Some(region("33", "Jawa Tengah")));
        pair.set_mirror(true);

        let (primary, secondary) = pair.addresses("Jl. Anggrek", "ignored");
        assert_eq!(primary, secondary);
        assert_eq!(secondary.street, "Jl. Anggrek");
    }

    #[test]
    fn test_disabling_mirror_keeps_values_and_reissues_loads() {
        let mut pair = AddressPair::new();
        pair.set_mirror(true);
        let fetch = pair
            .select(Side::Primary, RegionLevel::Province, Some(region("32", "Jawa Barat")))
            .unwrap();

        let reissued = pair.set_mirror(false);
        assert_eq!(reissued.len(), 1);
        assert_eq!(reissued[0].level, RegionLevel::Regency);
        assert_eq!(reissued[0].parent_id.as_deref(), Some("32"));
        assert_eq!(pair.secondary.selected(RegionLevel::Province).unwrap().id, "32");

        // The primary's answer no longer reaches the secondary
        pair.complete(Side::Primary, &fetch, Ok(vec![region("3273", "Kota Bandung")]));
        assert!(pair.secondary.is_level_loading(RegionLevel::Regency));
        pair.complete(Side::Secondary, &reissued[0], Ok(vec![region("3273", "Kota Bandung")]));
        assert!(!pair.secondary.is_level_loading(RegionLevel::Regency));
    }
}
