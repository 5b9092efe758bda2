//! Fixed-width column rendering of diff records.
//!
//! Rendering is pure: a [`Diff`] and a [`RenderConfig`] in, a `String` out.
//! Colour is left to the caller.

use serde::{Deserialize, Serialize};

use crate::dataset_diff::{Diff, DiffValue};

/// Width of the ` - (GGGG, EEEE)` suffix inside the tag column.
const TAG_SUFFIX_WIDTH: usize = 15;

/// Column widths for rendered output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Width of the description + tag column.
    pub tag_width: usize,
    /// Width of each value column.
    pub value_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tag_width: 50,
            value_width: 70,
        }
    }
}

/// Right-align `text` in `width` characters, cutting the tail to `...` when
/// it does not fit. The result is never longer than `width`.
pub fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return format!("{text:>width$}");
    }
    if width < 3 {
        return ".".repeat(width);
    }
    let mut out: String = text.chars().take(width - 3).collect();
    out.push_str("...");
    out
}

fn display(value: Option<&DiffValue>) -> String {
    value.map_or_else(|| "NULL".to_string(), ToString::to_string)
}

/// The column title line and the separator line.
pub fn render_header(config: &RenderConfig) -> [String; 2] {
    let tw = config.tag_width;
    let vw = config.value_width;
    [
        format!("  {:>tw$} │ {:>vw$} │ {:>vw$}", "Tag", "Left", "Right"),
        format!(
            "──{}─┼─{}─┼─{}",
            "─".repeat(tw),
            "─".repeat(vw),
            "─".repeat(vw)
        ),
    ]
}

/// One output line for `diff`.
pub fn render_line(diff: &Diff, config: &RenderConfig) -> String {
    let mut lead = diff.diff_type.symbol().to_string();
    let mut description_width = config.tag_width.saturating_sub(TAG_SUFFIX_WIDTH);
    if let Some(prefix) = diff.prefix {
        lead.push(' ');
        lead.push_str(prefix.as_str());
        description_width = description_width.saturating_sub(prefix.as_str().chars().count() + 1);
    }

    format!(
        "{lead} {} - {} │ {} │ {}",
        fit(&diff.description, description_width),
        diff.tag,
        fit(&display(diff.value_left.as_ref()), config.value_width),
        fit(&display(diff.value_right.as_ref()), config.value_width),
    )
}
