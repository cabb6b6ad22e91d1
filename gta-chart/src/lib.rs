//! Rendering surface for the temperature anomaly heatmap.
//!
//! This crate provides:
//! - `svg`: the standalone chart document (cells, axes, legend)
//! - `axis`: bottom and left axis groups
//! - `html`: a page hosting the chart plus the hover tooltip

pub mod axis;
pub mod html;
pub mod svg;

pub use html::{render_page, PageOptions};
pub use svg::render_svg;

/// Escape text for use in XML content and attribute values.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(escape("7.98℃"), "7.98℃");
    }
}
