use serde::Serialize;

use crate::host::{MapHost, MarkerStyle};
use crate::record::PropertyRecord;
use crate::view::PopupContent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RenderSummary {
    pub drawn: usize,
    /// Records without a usable coordinate, plus any the host refused.
    pub skipped: usize,
}

/// Sole owner of the markers currently on the map.
///
/// Every render removes all of them and draws the new set from scratch, so a
/// marker never outlives the filter state that produced it.
#[derive(Debug)]
pub struct MarkerRenderer<M> {
    markers: Vec<M>,
    style: MarkerStyle,
}

impl<M> Default for MarkerRenderer<M> {
    fn default() -> Self {
        Self::new(MarkerStyle::default())
    }
}

impl<M> MarkerRenderer<M> {
    pub const fn new(style: MarkerStyle) -> Self {
        Self {
            markers: Vec::new(),
            style,
        }
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub const fn style(&self) -> &MarkerStyle {
        &self.style
    }

    pub fn clear<H>(&mut self, host: &mut H)
    where
        H: MapHost<Marker = M>,
    {
        for marker in self.markers.drain(..) {
            host.remove_marker(marker);
        }
    }

    pub fn render<'a, H, I>(&mut self, host: &mut H, records: I) -> RenderSummary
    where
        H: MapHost<Marker = M>,
        I: IntoIterator<Item = &'a PropertyRecord>,
    {
        self.clear(host);

        let mut summary = RenderSummary::default();
        for record in records {
            let Some(position) = record.position() else {
                summary.skipped += 1;
                continue;
            };

            let popup = PopupContent::from_record(record);
            match host.add_marker(position, &self.style, &popup) {
                Ok(marker) => {
                    self.markers.push(marker);
                    summary.drawn += 1;
                }
                Err(error) => {
                    log::warn!("skipping marker for {:?}: {error}", popup.name);
                    summary.skipped += 1;
                }
            }
        }

        log::debug!(
            "rendered {} markers, skipped {}",
            summary.drawn,
            summary.skipped
        );
        summary
    }
}
