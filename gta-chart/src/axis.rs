//! Axis groups drawn the usual way: a domain path with 6px end ticks, one
//! tick line per labelled value, labels 9px out from the axis line.

use crate::escape;
use gta_utils::format::coord;

const TICK_SIZE: f64 = 6.0;
const TICK_LABEL_OFFSET: f64 = 9.0;

/// A labelled tick at a pixel offset along the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

impl Tick {
    pub fn new(offset: f64, label: impl Into<String>) -> Self {
        Self {
            offset,
            label: label.into(),
        }
    }
}

/// Horizontal axis with labels below. `length` is the axis span in pixels.
pub fn axis_bottom(id: &str, translate_y: f64, length: f64, ticks: &[Tick]) -> Vec<String> {
    let mut lines = vec![
        format!(
            r#"<g id="{}" transform="translate(0,{})" fill="none" font-size="10" font-family="sans-serif" text-anchor="middle">"#,
            escape(id),
            coord(translate_y)
        ),
        format!(
            r#"  <path class="domain" stroke="currentColor" d="M0,{s}V0H{l}V{s}"/>"#,
            s = coord(TICK_SIZE),
            l = coord(length)
        ),
    ];
    for tick in ticks {
        lines.push(format!(
            r#"  <g class="tick" opacity="1" transform="translate({},0)"><line stroke="currentColor" y2="{}"/><text fill="currentColor" y="{}" dy="0.71em">{}</text></g>"#,
            coord(tick.offset),
            coord(TICK_SIZE),
            coord(TICK_LABEL_OFFSET),
            escape(&tick.label)
        ));
    }
    lines.push("</g>".to_string());
    lines
}

/// Vertical axis with labels to the left. `length` is the axis span in pixels.
pub fn axis_left(id: &str, length: f64, ticks: &[Tick]) -> Vec<String> {
    let mut lines = vec![
        format!(
            r#"<g id="{}" fill="none" font-size="10" font-family="sans-serif" text-anchor="end">"#,
            escape(id)
        ),
        format!(
            r#"  <path class="domain" stroke="currentColor" d="M-{s},{l}H0V0H-{s}"/>"#,
            s = coord(TICK_SIZE),
            l = coord(length)
        ),
    ];
    for tick in ticks {
        lines.push(format!(
            r#"  <g class="tick" opacity="1" transform="translate(0,{})"><line stroke="currentColor" x2="-{}"/><text fill="currentColor" x="-{}" dy="0.32em">{}</text></g>"#,
            coord(tick.offset),
            coord(TICK_SIZE),
            coord(TICK_LABEL_OFFSET),
            escape(&tick.label)
        ));
    }
    lines.push("</g>".to_string());
    lines
}
