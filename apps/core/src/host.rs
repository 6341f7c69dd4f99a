//! The map surface the renderer draws on, and the options used to create it.
//!
//! Tiles and projection belong to the host. This crate only asks it to add and
//! remove point markers.

use serde::Serialize;
use thiserror::Error;

use crate::view::PopupContent;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// South-west and north-east corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub const fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    pub fn contains(&self, point: LatLng) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&point.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&point.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: u8,
    pub max_bounds: LatLngBounds,
    /// 1.0 makes the bounds solid; 0.0 lets the user drag past them freely.
    pub max_bounds_viscosity: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: LatLng::new(32.8, -86.6),
            zoom: 6,
            max_bounds: LatLngBounds::new(
                LatLng::new(24.396_308, -125.0),
                LatLng::new(49.384_358, -66.934_57),
            ),
            max_bounds_viscosity: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileLayerOptions {
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".to_string(),
            max_zoom: 19,
        }
    }
}

/// Circle marker appearance. Every marker uses the same style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill_color: String,
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 8.0,
            fill_color: "#007BFF".to_string(),
            color: "#000".to_string(),
            weight: 1.0,
            opacity: 1.0,
            fill_opacity: 0.8,
        }
    }
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("map surface is not available: {0}")]
    Unavailable(String),
    #[error("failed to create marker at ({lat}, {lng}): {reason}")]
    Marker { lat: f64, lng: f64, reason: String },
}

/// Marker lifecycle primitives of an external map surface.
///
/// A host is expected to have created its map and base tile layer before it is
/// handed to a controller.
pub trait MapHost {
    type Marker;

    /// Creates a styled point marker with a popup bound to it and adds it to the map.
    fn add_marker(
        &mut self,
        position: LatLng,
        style: &MarkerStyle,
        popup: &PopupContent,
    ) -> Result<Self::Marker, HostError>;

    fn remove_marker(&mut self, marker: Self::Marker);
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq)]
    pub struct PlacedMarker {
        pub id: usize,
        pub position: LatLng,
        pub popup: PopupContent,
    }

    /// Records what a real map would show.
    #[derive(Debug, Default)]
    pub struct RecordingHost {
        next_id: usize,
        /// Ascending by id, since ids are handed out in insertion order.
        pub live: VecDeque<PlacedMarker>,
        pub removed: usize,
        pub fail_at: Option<LatLng>,
    }

    impl RecordingHost {
        /// A host that refuses to place a marker at `position`.
        pub fn failing_at(position: LatLng) -> Self {
            Self {
                fail_at: Some(position),
                ..Self::default()
            }
        }

        pub fn positions(&self) -> Vec<LatLng> {
            self.live.iter().map(|marker| marker.position).collect()
        }
    }

    impl MapHost for RecordingHost {
        type Marker = usize;

        fn add_marker(
            &mut self,
            position: LatLng,
            _style: &MarkerStyle,
            popup: &PopupContent,
        ) -> Result<usize, HostError> {
            if self.fail_at == Some(position) {
                return Err(HostError::Marker {
                    lat: position.lat,
                    lng: position.lng,
                    reason: "rejected by test host".to_string(),
                });
            }
            let id = self.next_id;
            self.next_id += 1;
            self.live.push_back(PlacedMarker {
                id,
                position,
                popup: popup.clone(),
            });
            Ok(id)
        }

        fn remove_marker(&mut self, marker: usize) {
            if self.live.front().is_some_and(|placed| placed.id == marker) {
                self.live.pop_front();
            } else if let Ok(index) = self.live.binary_search_by_key(&marker, |placed| placed.id) {
                self.live.remove(index);
            }
            self.removed += 1;
        }
    }
}
