//! Hover tooltip state.
//!
//! Pointer events are turned into a `TooltipState` that the rendering layer
//! applies; the handlers themselves never touch any output.

use crate::cell::CellAttributes;
use serde::Serialize;

/// Opacity of a shown tooltip.
pub const TOOLTIP_OPACITY: f64 = 0.9;
/// Fade duration for show and hide.
pub const TRANSITION_MS: u32 = 200;
/// Tooltip offset from the pointer, in page pixels.
pub const OFFSET_X: f64 = 10.0;
pub const OFFSET_Y: f64 = -28.0;

/// Page coordinates of the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipState {
    pub visible: bool,
    pub opacity: f64,
    pub text: String,
    /// Year of the hovered cell, mirrored into the tooltip's `data-year`
    pub data_year: Option<i32>,
    pub x: f64,
    pub y: f64,
    pub transition_ms: u32,
}

impl TooltipState {
    /// Initial state: nothing shown.
    pub fn hidden() -> Self {
        Self {
            visible: false,
            opacity: 0.0,
            text: String::new(),
            data_year: None,
            x: 0.0,
            y: 0.0,
            transition_ms: 0,
        }
    }
}

impl Default for TooltipState {
    fn default() -> Self {
        Self::hidden()
    }
}

/// Pointer entered a cell: show its text next to the pointer.
pub fn on_hover(pointer: Pointer, cell: &CellAttributes) -> TooltipState {
    TooltipState {
        visible: true,
        opacity: TOOLTIP_OPACITY,
        text: cell.tooltip.clone(),
        data_year: Some(cell.year),
        x: pointer.x + OFFSET_X,
        y: pointer.y + OFFSET_Y,
        transition_ms: TRANSITION_MS,
    }
}

/// Pointer left a cell: fade out. Content and position stay where they were.
pub fn on_unhover(current: &TooltipState) -> TooltipState {
    TooltipState {
        visible: false,
        opacity: 0.0,
        transition_ms: TRANSITION_MS,
        ..current.clone()
    }
}
