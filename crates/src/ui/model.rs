use crate::config::TuiConfig;
use crate::packages::{PackageProvider, PackageRecord};
use crate::ui::filter::FilterBuffer;
use crate::ui::layout::{Layout, compute_layout};
use crate::ui::pager::{PageSlice, Pager};
use crate::ui::render::{Frame, header_label};
use crate::ui::status::StatusLine;
use crate::ui::{Msg, Signal};
use std::time::Instant;

// gap between the filter text and the status message
const FILTER_STATUS_GAP: usize = 3;

/// Interaction mode; filter entry owns its edit buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Filter(FilterBuffer),
    KeybindingsHelp,
}

/// A blocking provider call waiting for its "working" frame to be shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingOp {
    Install { index: usize },
    UpdateAll,
    Uninstall { index: usize },
    Query { filter: String },
}

/// The whole UI state, owned by the interaction loop.
pub struct Session {
    pub mode: Mode,
    pub packages: Vec<PackageRecord>,
    pub pager: Pager,
    pub status: StatusLine,
    pub layout: Layout,
    pub config: TuiConfig,
    pub blink_frame: usize,
    pub pending: Option<PendingOp>,
    pub(crate) provider: Box<dyn PackageProvider>,
}

impl Session {
    pub fn new(
        provider: Box<dyn PackageProvider>,
        packages: Vec<PackageRecord>,
        config: TuiConfig,
        width: usize,
        height: usize,
    ) -> Self {
        let mut s = Session {
            mode: Mode::Normal,
            packages,
            pager: Pager::default(),
            status: StatusLine::new(config.status_timeout),
            layout: compute_layout(width, height),
            config,
            blink_frame: 0,
            pending: None,
            provider,
        };
        s.refresh_geometry();
        s
    }

    // wrapper update that delegates to the update module
    pub fn update(&mut self, msg: Msg, now: Instant) -> Signal {
        crate::ui::update::handle_update(self, msg, now)
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.layout = compute_layout(width, height);
        self.refresh_geometry();
    }

    /// Per-frame bookkeeping: status expiry, pagination reclamp and the
    /// status position for the current header.
    pub fn prepare_frame(&mut self, now: Instant) {
        self.status.tick(now);
        self.refresh_geometry();
    }

    fn refresh_geometry(&mut self) {
        self.pager
            .clamp(self.packages.len(), self.layout.render_capacity);
        let label = header_label(&self.mode).chars().count();
        let mut x = self.layout.header_x + label + 1;
        if let Mode::Filter(buf) = &self.mode {
            x += buf.len() + FILTER_STATUS_GAP;
        }
        self.status.set_position(x, self.layout.header_y);
    }

    pub fn page(&self) -> PageSlice {
        self.pager
            .slice(self.packages.len(), self.layout.render_capacity)
    }

    pub fn page_items(&self) -> &[PackageRecord] {
        let slice = self.page();
        let end = (slice.first_index + slice.items_on_page).min(self.packages.len());
        self.packages.get(slice.first_index..end).unwrap_or(&[])
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.pager
            .selected_index(self.packages.len(), self.layout.render_capacity)
    }

    pub fn selected(&self) -> Option<&PackageRecord> {
        self.selected_index().and_then(|i| self.packages.get(i))
    }

    pub fn filter(&self) -> Option<&FilterBuffer> {
        match &self.mode {
            Mode::Filter(buf) => Some(buf),
            _ => None,
        }
    }

    pub fn cursor_visible(&self) -> bool {
        let period = self.config.blink_period.max(2);
        self.blink_frame % period < period / 2
    }

    pub fn too_small(&self) -> bool {
        !self
            .layout
            .fits(self.config.min_width, self.config.min_height)
    }

    // render wrappers
    pub fn frame(&self) -> Frame {
        crate::ui::render::render_frame(self)
    }
    pub fn render_full(&self) -> String {
        crate::ui::render::render_full(self)
    }
}
