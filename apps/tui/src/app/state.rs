use std::collections::VecDeque;
use std::path::PathBuf;

use property_map_core::{MapController, MapOptions, RenderSummary};

use crate::app::input::{wrap_decrement, wrap_increment};
use crate::config::AppConfig;
use crate::host::{CanvasHost, CanvasMarker};
use crate::loader::load_records;

pub struct App {
    pub running: bool,
    pub controller: MapController<CanvasHost>,
    pub data_path: PathBuf,
    /// Row of the owner panel the cursor is on.
    pub owner_cursor: usize,
    /// Index into the host's current markers.
    pub focused_marker: Option<usize>,
    pub show_popup: bool,
    pub status_message: String,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            running: true,
            controller: MapController::new(CanvasHost::new(MapOptions::default())),
            data_path: config.data_path.clone(),
            owner_cursor: 0,
            focused_marker: None,
            show_popup: false,
            status_message: "Loading property data...".to_string(),
        }
    }

    /// Single load attempt. A failure leaves the map empty.
    pub async fn load(&mut self) {
        match load_records(&self.data_path).await {
            Ok(records) => {
                let total = records.len();
                let summary = self.controller.load(records);
                self.after_render(summary);
                self.status_message = format!(
                    "Loaded {total} properties from {}",
                    self.data_path.display()
                );
            }
            Err(e) => {
                log::error!(
                    "Failed to load property data from {}: {e}",
                    self.data_path.display()
                );
                self.status_message = "No property data".to_string();
            }
        }
    }

    pub fn owner_count(&self) -> usize {
        self.controller.owners().len()
    }

    pub fn move_owner_cursor_up(&mut self) {
        self.owner_cursor = wrap_decrement(self.owner_cursor, self.owner_count());
    }

    pub fn move_owner_cursor_down(&mut self) {
        self.owner_cursor = wrap_increment(self.owner_cursor, self.owner_count());
    }

    pub fn toggle_owner_under_cursor(&mut self) {
        let Some(label) = self.controller.owners().labels().get(self.owner_cursor).cloned() else {
            return;
        };
        let summary = self.controller.toggle_owner(&label);
        self.after_render(summary);
    }

    pub fn clear_filter(&mut self) {
        let summary = self.controller.clear_filter();
        self.after_render(summary);
    }

    pub fn focus_next_marker(&mut self) {
        let count = self.markers().len();
        if count == 0 {
            return;
        }
        self.focused_marker = Some(
            self.focused_marker
                .map_or(0, |index| wrap_increment(index, count)),
        );
    }

    pub fn focus_previous_marker(&mut self) {
        let count = self.markers().len();
        if count == 0 {
            return;
        }
        self.focused_marker = Some(
            self.focused_marker
                .map_or(count - 1, |index| wrap_decrement(index, count)),
        );
    }

    pub fn open_popup(&mut self) {
        self.show_popup = self.focused().is_some();
    }

    pub const fn markers(&self) -> &VecDeque<CanvasMarker> {
        self.controller.host().markers()
    }

    pub fn focused(&self) -> Option<&CanvasMarker> {
        self.focused_marker.and_then(|index| self.markers().get(index))
    }

    // Markers are rebuilt on every render, so any focus on the old set is stale.
    fn after_render(&mut self, summary: RenderSummary) {
        self.focused_marker = None;
        self.show_popup = false;
        log::debug!("{summary:?}");
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use property_map_core::{parse_records, LatLng};

    const SCENARIO: &str = r#"[
        {"name": "Oak Court", "owner": "Acme", "lat": 30, "lng": -90},
        {"name": "Pine Row", "owner": "", "lat": 31, "lng": -91},
        {"name": "Elm Yard", "owner": "Acme", "lat": 0, "lng": 0}
    ]"#;

    pub fn loaded_app() -> App {
        let config = AppConfig {
            data_path: PathBuf::from("unused.json"),
            debug: false,
        };
        let mut app = App::new(&config);
        let records = parse_records(SCENARIO).unwrap_or_default();
        let summary = app.controller.load(records);
        app.after_render(summary);
        app
    }

    #[test]
    fn test_cursor_wraps_over_owners() {
        let mut app = loaded_app();

        app.move_owner_cursor_up();
        assert_eq!(app.owner_cursor, 1);
        app.move_owner_cursor_down();
        assert_eq!(app.owner_cursor, 0);
    }

    #[test]
    fn test_focus_cycles_and_resets_on_filter_change() {
        let mut app = loaded_app();

        app.focus_previous_marker();
        assert_eq!(app.focused().map(|m| m.position), Some(LatLng::new(31.0, -91.0)));
        app.focus_next_marker();
        assert_eq!(app.focused().map(|m| m.popup.name.as_str()), Some("Oak Court"));

        app.open_popup();
        app.toggle_owner_under_cursor();

        assert_eq!(app.focused_marker, None);
        assert!(!app.show_popup);
        assert_eq!(app.markers().len(), 1);
    }

    #[test]
    fn test_toggle_with_no_owners_is_a_no_op() {
        let config = AppConfig {
            data_path: PathBuf::from("unused.json"),
            debug: false,
        };
        let mut app = App::new(&config);

        app.toggle_owner_under_cursor();
        app.focus_next_marker();

        assert!(app.controller.selection().is_empty());
        assert_eq!(app.focused_marker, None);
    }

    #[tokio::test]
    async fn test_failed_load_leaves_map_empty() {
        let config = AppConfig {
            data_path: PathBuf::from("/nonexistent/property_map/data.json"),
            debug: false,
        };
        let mut app = App::new(&config);

        app.load().await;

        assert!(app.markers().is_empty());
        assert_eq!(app.owner_count(), 0);
        assert_eq!(app.status_message, "No property data");
    }
}
