//! Layout options the core carries on behalf of presenters: column count and
//! tag-bar placement. Malformed values are logged and skipped, never fatal.

use serde::{Deserialize, Serialize};
use tracing::error;

/// Terminal widths (in cells) at which each breakpoint starts.
pub const BREAKPOINT_SM: u16 = 60;
pub const BREAKPOINT_MD: u16 = 90;
pub const BREAKPOINT_LG: u16 = 120;
pub const BREAKPOINT_XL: u16 = 160;

/// Column count per breakpoint. Unset breakpoints inherit from narrower ones.
/// Counts may be fractional; they round up when resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct BreakpointColumns {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xl: Option<f64>,
}

impl BreakpointColumns {
    /// Value for the widest breakpoint `width` reaches, cascading down
    /// through narrower ones that are set.
    pub fn for_width(&self, width: u16) -> Option<f64> {
        let tiers = [
            (BREAKPOINT_XL, self.xl),
            (BREAKPOINT_LG, self.lg),
            (BREAKPOINT_MD, self.md),
            (BREAKPOINT_SM, self.sm),
            (0, self.xs),
        ];
        tiers
            .iter()
            .filter(|(min, _)| width >= *min)
            .find_map(|(_, value)| *value)
    }
}

/// `columns` option: a plain number or a per-breakpoint table. Anything
/// else (including JSON `null`) is kept as-is so it can be reported when
/// resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Columns {
    #[serde(serialize_with = "serialize_count")]
    Count(f64),
    Breakpoints(BreakpointColumns),
    Unsupported(serde_json::Value),
}

impl Default for Columns {
    fn default() -> Self {
        Columns::Count(3.0)
    }
}

/// Whole counts are written back as integers so saved configs read `columns = 3`.
fn serialize_count<S: serde::Serializer>(count: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if count.fract() == 0.0 && count.abs() < u32::MAX as f64 {
        serializer.serialize_i64(*count as i64)
    } else {
        serializer.serialize_f64(*count)
    }
}

/// Round a configured count up to whole columns. Non-positive and
/// non-finite counts are rejected.
fn whole_columns(count: f64) -> Result<usize, &'static str> {
    if !count.is_finite() {
        Err("non-finite")
    } else if count <= 0.0 {
        Err("zero columns")
    } else {
        Ok(count.ceil() as usize)
    }
}

fn value_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl Columns {
    /// Column count for a surface `width` cells wide, or `None` when the
    /// option is malformed and wrapping must be skipped.
    pub fn resolve(&self, width: u16) -> Option<usize> {
        let count = match self {
            Columns::Count(n) => *n,
            Columns::Breakpoints(table) => match table.for_width(width) {
                Some(n) => n,
                None => return Some(1),
            },
            Columns::Unsupported(value) => {
                error!(
                    "Columns should be defined as numbers or objects. {} is not supported.",
                    value_type(value)
                );
                return None;
            }
        };
        match whole_columns(count) {
            Ok(columns) => Some(columns),
            Err(kind) => {
                error!(
                    width,
                    "Columns should be defined as numbers or objects. {kind} is not supported."
                );
                None
            }
        }
    }

    /// Like [`Columns::resolve`], falling back to a single column.
    pub fn resolve_or_single(&self, width: u16) -> usize {
        self.resolve(width).unwrap_or(1)
    }
}

/// Where the tag bar goes relative to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagBarPlacement {
    Top,
    Bottom,
}

/// `tags_position` option as written. Unknown values survive parsing and
/// are reported when the bar is placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum TagsPosition {
    Top,
    #[default]
    Bottom,
    Unknown(String),
}

impl From<String> for TagsPosition {
    fn from(value: String) -> Self {
        match value.as_str() {
            "top" => TagsPosition::Top,
            "bottom" => TagsPosition::Bottom,
            _ => TagsPosition::Unknown(value),
        }
    }
}

impl From<TagsPosition> for String {
    fn from(value: TagsPosition) -> Self {
        match value {
            TagsPosition::Top => "top".to_string(),
            TagsPosition::Bottom => "bottom".to_string(),
            TagsPosition::Unknown(other) => other,
        }
    }
}

impl TagsPosition {
    /// Placement of the tag bar, or `None` (logged) for an unknown position.
    pub fn placement(&self) -> Option<TagBarPlacement> {
        match self {
            TagsPosition::Top => Some(TagBarPlacement::Top),
            TagsPosition::Bottom => Some(TagBarPlacement::Bottom),
            TagsPosition::Unknown(value) => {
                error!("Unknown tags position: {value}");
                None
            }
        }
    }
}

/// Row and column of the `index`-th visible cell in a grid.
pub fn grid_position(index: usize, columns: usize) -> (usize, usize) {
    let columns = columns.max(1);
    (index / columns, index % columns)
}
