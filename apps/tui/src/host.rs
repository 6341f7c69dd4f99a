use property_map_core::{HostError, LatLng, MapHost, MapOptions, MarkerStyle, PopupContent};
use ratatui::style::Color;
use std::collections::VecDeque;

/// A marker as the terminal map draws it.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasMarker {
    pub id: usize,
    pub position: LatLng,
    pub color: Color,
    pub popup: PopupContent,
}

/// Keeps the markers the canvas should paint, in the order they were added.
///
/// Ids grow with insertion, so the queue stays sorted by id and the renderer's
/// oldest-first clear pops from the front.
#[derive(Debug)]
pub struct CanvasHost {
    options: MapOptions,
    markers: VecDeque<CanvasMarker>,
    next_id: usize,
}

impl CanvasHost {
    pub const fn new(options: MapOptions) -> Self {
        Self {
            options,
            markers: VecDeque::new(),
            next_id: 0,
        }
    }

    pub const fn options(&self) -> &MapOptions {
        &self.options
    }

    pub const fn markers(&self) -> &VecDeque<CanvasMarker> {
        &self.markers
    }
}

/// Hex colours from the marker style; anything ratatui can't read falls back to blue.
fn marker_color(style: &MarkerStyle) -> Color {
    style.fill_color.parse().unwrap_or(Color::Blue)
}

impl MapHost for CanvasHost {
    type Marker = usize;

    fn add_marker(
        &mut self,
        position: LatLng,
        style: &MarkerStyle,
        popup: &PopupContent,
    ) -> Result<usize, HostError> {
        let id = self.next_id;
        self.next_id += 1;
        self.markers.push_back(CanvasMarker {
            id,
            position,
            color: marker_color(style),
            popup: popup.clone(),
        });
        Ok(id)
    }

    fn remove_marker(&mut self, marker: usize) {
        if self.markers.front().is_some_and(|placed| placed.id == marker) {
            self.markers.pop_front();
        } else if let Ok(index) = self.markers.binary_search_by_key(&marker, |placed| placed.id) {
            self.markers.remove(index);
        }
    }
}
