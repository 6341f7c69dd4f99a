use crate::filter::{apply_filter, FilterSelection};
use crate::host::MapHost;
use crate::owners::OwnerIndex;
use crate::record::PropertyRecord;
use crate::render::{MarkerRenderer, RenderSummary};
use crate::view::FilterPanel;

/// Owns everything the map page needs between user events: the loaded records,
/// the owner index built from them, the current selection and the markers.
pub struct MapController<H: MapHost> {
    host: H,
    records: Vec<PropertyRecord>,
    owners: OwnerIndex,
    selection: FilterSelection,
    renderer: MarkerRenderer<H::Marker>,
    last_render: RenderSummary,
}

impl<H: MapHost> MapController<H> {
    pub fn new(host: H) -> Self {
        Self::with_renderer(host, MarkerRenderer::default())
    }

    pub fn with_renderer(host: H, renderer: MarkerRenderer<H::Marker>) -> Self {
        Self {
            host,
            records: Vec::new(),
            owners: OwnerIndex::default(),
            selection: FilterSelection::new(),
            renderer,
            last_render: RenderSummary::default(),
        }
    }

    /// Installs the record set, rebuilds the owner index and draws everything.
    pub fn load(&mut self, records: Vec<PropertyRecord>) -> RenderSummary {
        self.owners = OwnerIndex::from_records(&records);
        self.records = records;
        self.selection.clear();
        log::debug!(
            "loaded {} records with {} owners",
            self.records.len(),
            self.owners.len()
        );
        self.refresh()
    }

    /// Checks or unchecks one owner and redraws.
    pub fn set_owner(&mut self, label: &str, checked: bool) -> RenderSummary {
        if self.owners.contains(label) {
            self.selection.set(label, checked);
        } else {
            log::debug!("ignoring unknown owner label {label:?}");
        }
        self.refresh()
    }

    pub fn toggle_owner(&mut self, label: &str) -> RenderSummary {
        let checked = !self.selection.contains(label);
        self.set_owner(label, checked)
    }

    /// Unchecks every owner, which shows every record again.
    pub fn clear_filter(&mut self) -> RenderSummary {
        self.selection.clear();
        self.refresh()
    }

    pub fn refresh(&mut self) -> RenderSummary {
        let visible = apply_filter(&self.records, &self.selection);
        self.last_render = self.renderer.render(&mut self.host, visible);
        self.last_render
    }

    pub fn visible_records(&self) -> Vec<&PropertyRecord> {
        apply_filter(&self.records, &self.selection)
    }

    pub fn filter_panel(&self) -> FilterPanel {
        FilterPanel::build(&self.owners, &self.selection)
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub const fn owners(&self) -> &OwnerIndex {
        &self.owners
    }

    pub const fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn marker_count(&self) -> usize {
        self.renderer.marker_count()
    }

    pub const fn last_render(&self) -> RenderSummary {
        self.last_render
    }

    pub const fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::RecordingHost;
    use crate::host::LatLng;
    use crate::loader::parse_records;

    const SCENARIO: &str = r#"[
        {"owner": "Acme", "lat": 30, "lng": -90},
        {"owner": "", "lat": 31, "lng": -91},
        {"owner": "Acme", "lat": 0, "lng": 0}
    ]"#;

    fn loaded() -> Result<MapController<RecordingHost>, Box<dyn std::error::Error>> {
        let mut controller = MapController::new(RecordingHost::default());
        controller.load(parse_records(SCENARIO)?);
        Ok(controller)
    }

    #[test]
    fn test_new_controller_draws_nothing() {
        let controller = MapController::new(RecordingHost::default());
        assert_eq!(controller.marker_count(), 0);
        assert!(controller.filter_panel().is_empty());
    }

    #[test]
    fn test_scenario_owner_filtering() -> Result<(), Box<dyn std::error::Error>> {
        let mut controller = loaded()?;

        assert_eq!(controller.owners().labels(), ["Acme", "Unknown"]);
        assert_eq!(controller.marker_count(), 2);
        assert_eq!(controller.last_render().skipped, 1);

        controller.set_owner("Unknown", true);
        assert_eq!(controller.host().positions(), [LatLng::new(31.0, -91.0)]);

        controller.clear_filter();
        assert_eq!(controller.marker_count(), 2);
        assert_eq!(controller.host().live.len(), 2);
        assert_eq!(controller.filter_panel().selected_count(), 0);

        Ok(())
    }

    #[test]
    fn test_selecting_every_owner_matches_no_selection() -> Result<(), Box<dyn std::error::Error>> {
        let mut controller = loaded()?;
        let unfiltered = controller.host().positions();

        controller.toggle_owner("Acme");
        controller.toggle_owner("Unknown");

        assert_eq!(controller.host().positions(), unfiltered);
        assert_eq!(controller.visible_records().len(), 3);
        Ok(())
    }

    #[test]
    fn test_toggle_twice_restores_previous_markers() -> Result<(), Box<dyn std::error::Error>> {
        let mut controller = loaded()?;

        controller.toggle_owner("Acme");
        assert_eq!(controller.host().positions(), [LatLng::new(30.0, -90.0)]);
        controller.toggle_owner("Acme");

        assert!(controller.selection().is_empty());
        assert_eq!(controller.marker_count(), 2);
        Ok(())
    }

    #[test]
    fn test_unknown_label_does_not_change_selection() -> Result<(), Box<dyn std::error::Error>> {
        let mut controller = loaded()?;

        controller.set_owner("Nobody", true);

        assert!(controller.selection().is_empty());
        assert_eq!(controller.marker_count(), 2);
        Ok(())
    }

    #[test]
    fn test_refresh_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
        let mut controller = loaded()?;
        let before = controller.host().positions();

        controller.refresh();
        controller.refresh();

        assert_eq!(controller.host().positions(), before);
        assert_eq!(controller.host().live.len(), controller.marker_count());
        Ok(())
    }
}
