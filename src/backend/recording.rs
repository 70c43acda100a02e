//! Recording backends used by tests and headless hosts.
//!
//! Each implementation performs no real work but keeps what it was told to
//! do, so tests can assert on the exact widget traffic an adapter produced.

use crate::core::{BoundsRect, GeoPoint};
use crate::error::{BindError, BindResult};

use super::{
    ChartSpec, ChartSurface, FormSnapshot, FormSubmitter, MapSurface, Notifier, PickerMessage,
    RichTextHost, ScriptLoader, TableConfig, TableWidget, WindowPort,
};

#[derive(Debug, Default)]
pub struct RecordingChartSurface {
    pub mounted: Vec<ChartSpec>,
}

impl ChartSurface for RecordingChartSurface {
    fn mount(&mut self, spec: &ChartSpec) {
        self.mounted.push(spec.clone());
    }
}

#[derive(Debug, Default)]
pub struct RecordingTableWidget {
    pub config: Option<TableConfig>,
    pub searches: Vec<(usize, String)>,
    pub redraws: usize,
}

impl TableWidget for RecordingTableWidget {
    fn configure(&mut self, config: &TableConfig) {
        self.config = Some(config.clone());
    }

    fn column_search(&mut self, column_index: usize, value: &str) {
        self.searches.push((column_index, value.to_owned()));
    }

    fn redraw(&mut self) {
        self.redraws += 1;
    }
}

#[derive(Debug, Default)]
pub struct RecordingSubmitter {
    pub submissions: Vec<FormSnapshot>,
}

impl FormSubmitter for RecordingSubmitter {
    fn submit(&mut self, form: &FormSnapshot) {
        self.submissions.push(form.clone());
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub alerts: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }
}

/// Window port with a switchable opener: flip `opener_alive` to exercise the
/// stale-opener degradation path.
#[derive(Debug)]
pub struct RecordingWindowPort {
    pub opened: Vec<String>,
    pub delivered: Vec<PickerMessage>,
    pub closed: usize,
    pub opener_alive: bool,
}

impl Default for RecordingWindowPort {
    fn default() -> Self {
        Self {
            opened: Vec::new(),
            delivered: Vec::new(),
            closed: 0,
            opener_alive: true,
        }
    }
}

impl WindowPort for RecordingWindowPort {
    fn open(&mut self, url: &str) {
        self.opened.push(url.to_owned());
    }

    fn deliver(&mut self, message: &PickerMessage) -> bool {
        if !self.opener_alive {
            return false;
        }
        self.delivered.push(message.clone());
        true
    }

    fn close(&mut self) {
        self.closed += 1;
    }
}

#[derive(Debug, Default)]
pub struct RecordingMapSurface {
    pub markers: Option<(GeoPoint, GeoPoint)>,
    pub rectangles: Vec<BoundsRect>,
}

impl MapSurface for RecordingMapSurface {
    fn place_markers(&mut self, first: GeoPoint, second: GeoPoint) {
        self.markers = Some((first, second));
    }

    fn draw_rectangle(&mut self, rect: BoundsRect) {
        self.rectangles.push(rect);
    }
}

#[derive(Debug, Default)]
pub struct RecordingScriptLoader {
    pub requested: Vec<String>,
}

impl ScriptLoader for RecordingScriptLoader {
    fn request(&mut self, url: &str) {
        self.requested.push(url.to_owned());
    }
}

/// Rich-text host that can be told to fail, to exercise the skip-and-log
/// path of the attach sweep.
#[derive(Debug, Default)]
pub struct RecordingRichTextHost {
    pub attached: Vec<(String, Vec<String>)>,
    pub fail_for: Vec<String>,
}

impl RichTextHost for RecordingRichTextHost {
    fn attach(&mut self, textarea_id: &str, toolbar: &[&str]) -> BindResult<()> {
        if self.fail_for.iter().any(|id| id == textarea_id) {
            return Err(BindError::EditorAttach {
                textarea: textarea_id.to_owned(),
                reason: "host rejected attach".to_owned(),
            });
        }
        self.attached.push((
            textarea_id.to_owned(),
            toolbar.iter().map(|item| (*item).to_owned()).collect(),
        ));
        Ok(())
    }
}
