//! Per-render description of the strip handed to the presentation layer.

use super::layout::{self, Rect, SlotGeometry};
use super::reorder::{DragStrategy, ReorderEngine};
use super::{TabCollection, TabId};

#[derive(Clone, Debug, PartialEq)]
pub struct TabFrame {
    pub id: TabId,
    pub title: String,
    pub selected: bool,
    /// Model position.
    pub index: usize,
    /// Target frame with any drag offset already applied.
    pub frame: Rect,
    /// Horizontal offset from the resting slot (0 when not displaced).
    pub offset: f32,
    /// Drawn above every other tab while dragged.
    pub lifted: bool,
    pub close_button: Rect,
    /// Where the title label goes, moving with `frame`.
    pub title_rect: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TabBarSnapshot {
    pub tabs: Vec<TabFrame>,
    pub selected: Option<TabId>,
    pub lifted: Option<TabId>,
    pub tab_width: f32,
    pub plus_button: Rect,
    pub content_width: f32,
}

impl TabBarSnapshot {
    pub fn build(tabs: &TabCollection, engine: &ReorderEngine, geometry: &SlotGeometry) -> Self {
        let session = engine.session();
        let strategy = engine.options().strategy;
        let m = &geometry.metrics;

        let frames = tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| {
                let resting = geometry.rect(index);
                let lifted = session.is_some_and(|s| s.dragged_id() == tab.id());
                let offset = match session {
                    Some(s) if lifted => {
                        geometry.origin_x(s.original_index()) + s.displacement() - resting.x
                    }
                    Some(s) if strategy == DragStrategy::Transform => s.neighbor_offset(index),
                    _ => 0.0,
                };
                let frame = resting.offset_x(offset);
                TabFrame {
                    id: tab.id(),
                    title: tab.title.clone(),
                    selected: tab.is_selected(),
                    index,
                    frame,
                    offset,
                    lifted,
                    close_button: layout::close_button_rect(m, frame),
                    title_rect: layout::title_rect(m, frame),
                }
            })
            .collect();

        TabBarSnapshot {
            tabs: frames,
            selected: tabs.selected_id(),
            lifted: engine.lifted(),
            tab_width: geometry.tab_width,
            plus_button: layout::plus_button_rect(m, tabs.len(), geometry.tab_width),
            content_width: layout::content_width(m, tabs.len(), geometry.tab_width),
        }
    }

    pub fn order(&self) -> Vec<TabId> {
        self.tabs.iter().map(|frame| frame.id).collect()
    }

    pub fn frame(&self, id: TabId) -> Option<&TabFrame> {
        self.tabs.iter().find(|frame| frame.id == id)
    }

    /// Frames in paint order: model order, with the lifted tab last.
    pub fn draw_order(&self) -> impl Iterator<Item = &TabFrame> {
        self.tabs
            .iter()
            .filter(|frame| !frame.lifted)
            .chain(self.tabs.iter().filter(|frame| frame.lifted))
    }
}
