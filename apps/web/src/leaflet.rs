use property_map_core::{
    HostError, LatLng, MapHost, MapOptions, MarkerStyle, PopupContent, TileLayerOptions,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L)]
    pub type Map;

    #[wasm_bindgen(js_namespace = L)]
    pub type Layer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(element_id: &str, options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> Result<Layer, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = circleMarker)]
    fn circle_marker(lat_lng: &JsValue, options: &JsValue) -> Result<Layer, JsValue>;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, content: &str) -> Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &Map) -> Layer;

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &Map, layer: &Layer) -> Map;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LeafletMapOptions {
    center: [f64; 2],
    zoom: u8,
    max_bounds: [[f64; 2]; 2],
    max_bounds_viscosity: f64,
}

impl From<&MapOptions> for LeafletMapOptions {
    fn from(options: &MapOptions) -> Self {
        let bounds = options.max_bounds;
        Self {
            center: pair(options.center),
            zoom: options.zoom,
            max_bounds: [pair(bounds.south_west), pair(bounds.north_east)],
            max_bounds_viscosity: options.max_bounds_viscosity,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LeafletTileOptions<'a> {
    attribution: &'a str,
    max_zoom: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CircleMarkerOptions<'a> {
    radius: f64,
    fill_color: &'a str,
    color: &'a str,
    weight: f64,
    opacity: f64,
    fill_opacity: f64,
}

impl<'a> From<&'a MarkerStyle> for CircleMarkerOptions<'a> {
    fn from(style: &'a MarkerStyle) -> Self {
        Self {
            radius: style.radius,
            fill_color: &style.fill_color,
            color: &style.color,
            weight: style.weight,
            opacity: style.opacity,
            fill_opacity: style.fill_opacity,
        }
    }
}

const fn pair(point: LatLng) -> [f64; 2] {
    [point.lat, point.lng]
}

fn describe(error: &JsValue) -> String {
    error.as_string().unwrap_or_else(|| format!("{error:?}"))
}

/// A Leaflet map with its base tile layer already attached.
pub struct LeafletHost {
    map: Map,
}

impl LeafletHost {
    pub fn create(
        element_id: &str,
        options: &MapOptions,
        tiles: &TileLayerOptions,
    ) -> Result<Self, HostError> {
        let map_options = serde_wasm_bindgen::to_value(&LeafletMapOptions::from(options))
            .map_err(|error| HostError::Unavailable(error.to_string()))?;
        let map = create_map(element_id, &map_options)
            .map_err(|error| HostError::Unavailable(describe(&error)))?;

        let tile_options = serde_wasm_bindgen::to_value(&LeafletTileOptions {
            attribution: &tiles.attribution,
            max_zoom: tiles.max_zoom,
        })
        .map_err(|error| HostError::Unavailable(error.to_string()))?;
        tile_layer(&tiles.url_template, &tile_options)
            .map_err(|error| HostError::Unavailable(describe(&error)))?
            .add_to(&map);

        Ok(Self { map })
    }
}

impl MapHost for LeafletHost {
    type Marker = Layer;

    fn add_marker(
        &mut self,
        position: LatLng,
        style: &MarkerStyle,
        popup: &PopupContent,
    ) -> Result<Layer, HostError> {
        let marker_error = |reason: String| HostError::Marker {
            lat: position.lat,
            lng: position.lng,
            reason,
        };

        let lat_lng = serde_wasm_bindgen::to_value(&pair(position))
            .map_err(|error| marker_error(error.to_string()))?;
        let options = serde_wasm_bindgen::to_value(&CircleMarkerOptions::from(style))
            .map_err(|error| marker_error(error.to_string()))?;
        let marker =
            circle_marker(&lat_lng, &options).map_err(|error| marker_error(describe(&error)))?;

        marker.bind_popup(&popup.to_html());
        marker.add_to(&self.map);
        Ok(marker)
    }

    fn remove_marker(&mut self, marker: Layer) {
        self.map.remove_layer(&marker);
    }
}
