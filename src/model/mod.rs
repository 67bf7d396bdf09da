//! # Layout Model
//!
//! The input and output representation of the flow engine. Children arrive
//! already measured by the host toolkit: the engine only reads their
//! intrinsic size, their margins and whether they take part in layout.
//!
//! Everything here is plain data. None of it outlives a single pass.

use serde::{Deserialize, Serialize};

use crate::layout::{LayoutConfig, Placement};

/// Edge insets, used for both child margins and container padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    pub const ZERO: Edges = Edges {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// True when every edge is a finite, non-negative number.
    pub fn is_valid_inset(&self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// One child as seen by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildBox {
    /// Intrinsic width, measured by the host before the pass.
    pub width: f64,
    /// Intrinsic height, measured by the host before the pass.
    pub height: f64,
    #[serde(default)]
    pub margin: Edges,
    /// Hidden children are skipped entirely: no width, no height, no row.
    #[serde(default = "default_true")]
    pub visible: bool,
}

fn default_true() -> bool {
    true
}

impl ChildBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: Edges::ZERO,
            visible: true,
        }
    }

    pub fn with_margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Width of the margin box: intrinsic width plus left and right margins.
    pub fn outer_width(&self) -> f64 {
        self.width + self.margin.horizontal()
    }

    /// Height of the margin box: intrinsic height plus top and bottom margins.
    pub fn outer_height(&self) -> f64 {
        self.height + self.margin.vertical()
    }
}

/// How the container's height is decided for a measure pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeightMode {
    /// The host fixed the height. Row-breaking is not needed to size the container.
    Exact(f64),
    /// The height is whatever the rows add up to, plus padding.
    #[default]
    Natural,
}

/// Size constraints handed to the engine by the host for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    /// The container's full width, padding included.
    pub width: f64,
    #[serde(default)]
    pub height: HeightMode,
}

impl Constraints {
    pub fn natural(width: f64) -> Self {
        Self {
            width,
            height: HeightMode::Natural,
        }
    }

    pub fn exact(width: f64, height: f64) -> Self {
        Self {
            width,
            height: HeightMode::Exact(height),
        }
    }
}

/// The constraint a host should measure a child against before a pass.
///
/// Both axes are upper bounds: the child may be smaller. `None` means the
/// child may grow without limit on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildConstraint {
    pub max_width: f64,
    pub max_height: Option<f64>,
}

/// Resolved container size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in container-local coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

// ── JSON boundary ───────────────────────────────────────────────

/// A complete layout request: configuration, constraints and children.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRequest {
    #[serde(default)]
    pub config: LayoutConfig,
    /// Container width, padding included.
    pub width: f64,
    #[serde(default)]
    pub height: HeightMode,
    #[serde(default)]
    pub children: Vec<ChildBox>,
}

impl LayoutRequest {
    pub fn constraints(&self) -> Constraints {
        Constraints {
            width: self.width,
            height: self.height,
        }
    }
}

/// The result of running both passes over a [`LayoutRequest`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResponse {
    pub width: f64,
    pub height: f64,
    pub placement: Placement,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outer_size_includes_margins() {
        let child = ChildBox::new(40.0, 20.0).with_margin(Edges {
            top: 1.0,
            right: 2.0,
            bottom: 3.0,
            left: 4.0,
        });
        assert_eq!(child.outer_width(), 46.0);
        assert_eq!(child.outer_height(), 24.0);
    }

    #[test]
    fn zero_sized_child_is_sized_by_margins() {
        let child = ChildBox::new(0.0, 0.0).with_margin(Edges::uniform(5.0));
        assert_eq!(child.outer_width(), 10.0);
        assert_eq!(child.outer_height(), 10.0);
    }

    #[test]
    fn negative_edge_is_not_a_valid_inset() {
        assert!(Edges::uniform(2.0).is_valid_inset());
        assert!(!Edges::symmetric(0.0, -1.0).is_valid_inset());
        assert!(!Edges::uniform(f64::NAN).is_valid_inset());
    }

    #[test]
    fn child_defaults_from_json() {
        let child: ChildBox = serde_json::from_str(r#"{ "width": 10, "height": 5 }"#).unwrap();
        assert!(child.visible);
        assert_eq!(child.margin, Edges::ZERO);
    }

    #[test]
    fn height_mode_json_forms() {
        let natural: HeightMode = serde_json::from_str(r#""natural""#).unwrap();
        assert_eq!(natural, HeightMode::Natural);
        let exact: HeightMode = serde_json::from_str(r#"{ "exact": 120 }"#).unwrap();
        assert_eq!(exact, HeightMode::Exact(120.0));
    }

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
    }
}
