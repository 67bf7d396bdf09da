//! # Flow Layout Engine
//!
//! Children run left to right and wrap onto a new row when the next margin
//! box would push the row past the content width. Rows stack top to bottom,
//! separated by the vertical gap.
//!
//! ## Two Passes, One Algorithm
//!
//! 1. **Measure** asks how tall the container must be. With an exact height
//!    the answer is the height itself. With a natural height the engine runs
//!    the [`RowBreaker`] and adds the vertical padding to what it found.
//! 2. **Layout** runs the same [`RowBreaker`] against the measured width and
//!    turns every slot into a rectangle in container coordinates.
//!
//! Nothing is cached between the two. Given unchanged inputs the second pass
//! sees exactly the rows the first one did, because it is the same code
//! walking the same data.
//!
//! ## The Row Cap
//!
//! A positive `max_rows` is a hard stop. The first child that would open the
//! row past the cap, and every visible child after it, is left out of both
//! the height and the placement. Their indices are reported in
//! [`Placement::truncated`] so the host can hide them.

mod config;
pub mod rows;

pub use config::LayoutConfig;
pub use rows::{FlowSlot, RowBreaker, RowSummary};

use serde::Serialize;

use crate::model::{ChildBox, ChildConstraint, Constraints, HeightMode, Rect, Size};

/// A child's final position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedChild {
    /// Index of the child in the input slice.
    pub index: usize,
    pub row: usize,
    pub rect: Rect,
}

/// Output of the layout pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// One entry per visible, non-truncated child, in input order.
    pub children: Vec<PlacedChild>,
    pub rows: usize,
    /// Height taken by the rows, padding excluded.
    pub content_height: f64,
    /// Visible children dropped by the row cap.
    pub truncated: Vec<usize>,
}

impl Placement {
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlacedChild> {
        self.children.iter()
    }

    /// Rectangle assigned to the child at `index` in the input, if it was placed.
    pub fn rect_of(&self, index: usize) -> Option<Rect> {
        self.children
            .binary_search_by_key(&index, |c| c.index)
            .ok()
            .map(|i| self.children[i].rect)
    }
}

impl<'a> IntoIterator for &'a Placement {
    type Item = &'a PlacedChild;
    type IntoIter = std::slice::Iter<'a, PlacedChild>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

/// The flow layout engine. Holds configuration only; every pass is a pure
/// function of its arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowLayoutEngine {
    config: LayoutConfig,
}

impl FlowLayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut LayoutConfig {
        &mut self.config
    }

    /// Runs the row breaker over `children` for a container of the given full width.
    pub fn rows<'a>(&self, children: &'a [ChildBox], container_width: f64) -> RowBreaker<'a> {
        RowBreaker::new(children, &self.config, self.config.content_width(container_width))
    }

    /// Computes the container's size. The width is always the constraint's
    /// width; the engine never shrinks to its content horizontally.
    pub fn measure(&self, children: &[ChildBox], constraints: &Constraints) -> Size {
        let height = match constraints.height {
            HeightMode::Exact(height) => height,
            HeightMode::Natural => {
                let summary = self.rows(children, constraints.width).finish();
                tracing::debug!(
                    rows = summary.rows,
                    content_height = summary.content_height,
                    truncated = summary.truncated_at.is_some(),
                    "measured flow rows"
                );
                summary.content_height + self.config.padding().vertical()
            }
        };
        Size::new(constraints.width, height)
    }

    /// Places every visible child inside a container of the given size.
    ///
    /// Only `size.width` takes part in row-breaking. An exact height smaller
    /// than the rows does not clip or drop anything; that is the host's call.
    pub fn layout(&self, children: &[ChildBox], size: &Size) -> Placement {
        let padding = self.config.padding();
        let mut breaker = self.rows(children, size.width);

        let placed: Vec<PlacedChild> = breaker
            .by_ref()
            .map(|slot| {
                let child = &children[slot.index];
                PlacedChild {
                    index: slot.index,
                    row: slot.row,
                    rect: Rect::new(
                        padding.left + slot.x,
                        padding.top + slot.y,
                        child.width,
                        child.height,
                    ),
                }
            })
            .collect();

        let summary = breaker.finish();
        let truncated = match summary.truncated_at {
            Some(first) => children[first..]
                .iter()
                .enumerate()
                .filter(|(_, c)| c.visible)
                .map(|(i, _)| first + i)
                .collect(),
            None => Vec::new(),
        };

        tracing::debug!(
            placed = placed.len(),
            rows = summary.rows,
            truncated = truncated.len(),
            "laid out flow children"
        );

        Placement {
            children: placed,
            rows: summary.rows,
            content_height: summary.content_height,
            truncated,
        }
    }

    /// The relaxed constraint a host should measure `child` against before a
    /// pass: at most the content box minus the child's own margins. A natural
    /// height leaves the child free to grow vertically.
    pub fn child_constraint(&self, child: &ChildBox, constraints: &Constraints) -> ChildConstraint {
        let padding = self.config.padding();
        let max_width = (self.config.content_width(constraints.width) - child.margin.horizontal()).max(0.0);
        let max_height = match constraints.height {
            HeightMode::Exact(height) => {
                Some((height - padding.vertical() - child.margin.vertical()).max(0.0))
            }
            HeightMode::Natural => None,
        };
        ChildConstraint {
            max_width,
            max_height,
        }
    }
}
