use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::layout::{StripMetrics, length_or};
use crate::core::{DragStrategy, ReorderOptions, TabBarConfig};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemeChoice,
    pub layout: LayoutConfig,
    pub reorder: ReorderConfig,
    pub behavior: BehaviorConfig,
    pub font: FontConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub max_tab_width: f32,
    pub min_tab_width: f32,
    pub tab_height: f32,
    pub tab_spacing: f32,
    pub strip_padding: f32,
    pub tab_top_inset: f32,
    pub bar_height: f32,
    pub plus_button_size: f32,
    pub close_button_size: f32,
    pub tab_padding_h: f32,
    pub sidebar_width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let m = StripMetrics::default();
        Self {
            max_tab_width: m.max_tab_width,
            min_tab_width: m.min_tab_width,
            tab_height: m.tab_height,
            tab_spacing: m.tab_spacing,
            strip_padding: m.strip_padding,
            tab_top_inset: m.tab_top_inset,
            bar_height: m.bar_height,
            plus_button_size: m.plus_button_size,
            close_button_size: m.close_button_size,
            tab_padding_h: m.tab_padding_h,
            sidebar_width: 220.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReorderConfig {
    pub strategy: DragStrategy,
    pub commit_on_cancel: bool,
    pub select_on_drag_start: bool,
    /// Pointer travel (logical px) before a press on a tab becomes a drag.
    pub activation_threshold: f32,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        let options = ReorderOptions::default();
        Self {
            strategy: options.strategy,
            commit_on_cancel: options.commit_on_cancel,
            select_on_drag_start: options.select_on_drag_start,
            activation_threshold: 5.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    pub keep_last_tab: bool,
    pub select_new_tabs: bool,
    pub initial_tabs: usize,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            keep_last_tab: true,
            select_new_tabs: true,
            initial_tabs: 3,
        }
    }
}

/// Tab title font. Without `path` the first installed system font from a
/// built-in list is used.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub path: Option<PathBuf>,
    /// Logical pixels.
    pub size: f32,
}

pub const DEFAULT_FONT_SIZE: f32 = 13.0;

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: None,
            size: DEFAULT_FONT_SIZE,
        }
    }
}

impl FontConfig {
    /// `size`, or the default when it is not a positive finite length.
    pub fn pixel_size(&self) -> f32 {
        let size = length_or(self.size, DEFAULT_FONT_SIZE);
        if size > 0.0 { size } else { DEFAULT_FONT_SIZE }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl AppConfig {
    /// Layout section as strip metrics. Unusable lengths (NaN, infinite,
    /// negative) are replaced by the defaults and the width range is repaired.
    pub fn strip_metrics(&self) -> StripMetrics {
        let l = &self.layout;
        let d = StripMetrics::default();
        let raw = StripMetrics {
            max_tab_width: length_or(l.max_tab_width, d.max_tab_width),
            min_tab_width: length_or(l.min_tab_width, d.min_tab_width),
            tab_height: length_or(l.tab_height, d.tab_height),
            tab_spacing: length_or(l.tab_spacing, d.tab_spacing),
            strip_padding: length_or(l.strip_padding, d.strip_padding),
            tab_top_inset: length_or(l.tab_top_inset, d.tab_top_inset),
            bar_height: length_or(l.bar_height, d.bar_height),
            plus_button_size: length_or(l.plus_button_size, d.plus_button_size),
            close_button_size: length_or(l.close_button_size, d.close_button_size),
            tab_padding_h: length_or(l.tab_padding_h, d.tab_padding_h),
        };
        let (min_tab_width, max_tab_width) = raw.width_bounds();
        StripMetrics {
            min_tab_width,
            max_tab_width,
            ..raw
        }
    }

    pub fn reorder_options(&self) -> ReorderOptions {
        ReorderOptions {
            strategy: self.reorder.strategy,
            commit_on_cancel: self.reorder.commit_on_cancel,
            select_on_drag_start: self.reorder.select_on_drag_start,
        }
    }

    pub fn tab_bar_config(&self) -> TabBarConfig {
        TabBarConfig {
            metrics: self.strip_metrics(),
            reorder: self.reorder_options(),
            keep_last_tab: self.behavior.keep_last_tab,
            select_new_tabs: self.behavior.select_new_tabs,
            initial_tabs: self.behavior.initial_tabs,
        }
    }
}
