// Owner filtering and marker rendering for the property map.
// Nothing here touches the network, the DOM or a terminal; hosts live in the apps.

pub mod controller;
pub mod filter;
pub mod host;
pub mod loader;
pub mod owners;
pub mod record;
pub mod render;
pub mod view;

pub use controller::MapController;
pub use filter::{apply_filter, FilterSelection};
pub use host::{HostError, LatLng, LatLngBounds, MapHost, MapOptions, MarkerStyle, TileLayerOptions};
pub use loader::{cache_busted_url, parse_records, LoadError, DATA_FILE};
pub use owners::{normalize_owner, OwnerIndex, UNKNOWN_OWNER};
pub use record::PropertyRecord;
pub use render::{MarkerRenderer, RenderSummary};
pub use view::{escape_html, FilterPanel, OwnerToggle, PopupContent};
