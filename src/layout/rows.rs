//! # Row Breaking
//!
//! The single row-accumulation algorithm behind both passes. Measurement
//! drains it for the content height; placement reads every slot it yields.
//! Because both go through [`RowBreaker`], the rows found while measuring are
//! the rows realized while placing.
//!
//! Rows are never materialized. The breaker carries a running row width, the
//! tallest margin box seen in the row so far, and the height of all finished
//! rows, and resets the first two on every wrap.

use crate::layout::LayoutConfig;
use crate::model::ChildBox;

/// Where one visible child lands, relative to the content origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowSlot {
    /// Index of the child in the input slice.
    pub index: usize,
    pub row: usize,
    /// Left edge of the child's content box (margin already applied).
    pub x: f64,
    /// Top edge of the child's content box (margin already applied).
    pub y: f64,
}

/// What the breaker found once it ran out of children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSummary {
    /// Rows that received at least one child.
    pub rows: usize,
    /// Height of all realized rows plus the gaps between them.
    pub content_height: f64,
    /// Index of the first visible child dropped by the row cap, if any.
    pub truncated_at: Option<usize>,
}

/// Iterator over the slots of a flow layout.
#[derive(Debug, Clone)]
pub struct RowBreaker<'a> {
    children: std::iter::Enumerate<std::slice::Iter<'a, ChildBox>>,
    available_width: f64,
    horizontal_gap: f64,
    vertical_gap: f64,
    max_rows: usize,

    row: usize,
    in_row: usize,
    row_width: f64,
    row_height: f64,
    finished_height: f64,
    truncated_at: Option<usize>,
}

impl<'a> RowBreaker<'a> {
    /// `available_width` is the content width, padding already removed.
    pub fn new(children: &'a [ChildBox], config: &LayoutConfig, available_width: f64) -> Self {
        Self {
            children: children.iter().enumerate(),
            available_width,
            horizontal_gap: config.horizontal_gap(),
            vertical_gap: config.vertical_gap(),
            max_rows: config.max_rows() as usize,
            row: 0,
            in_row: 0,
            row_width: 0.0,
            row_height: 0.0,
            finished_height: 0.0,
            truncated_at: None,
        }
    }

    /// Drains the remaining children and reports the result.
    pub fn finish(mut self) -> RowSummary {
        while self.next().is_some() {}
        RowSummary {
            rows: if self.in_row == 0 { self.row } else { self.row + 1 },
            content_height: self.finished_height + self.row_height,
            truncated_at: self.truncated_at,
        }
    }

    fn would_overflow(&self, outer_width: f64) -> bool {
        // The first child of a row always fits, however wide it is.
        self.in_row > 0 && self.row_width + outer_width > self.available_width
    }

    fn break_row(&mut self) {
        self.finished_height += self.row_height + self.vertical_gap;
        self.row += 1;
        self.in_row = 0;
        self.row_width = 0.0;
        self.row_height = 0.0;
    }
}

impl Iterator for RowBreaker<'_> {
    type Item = FlowSlot;

    fn next(&mut self) -> Option<FlowSlot> {
        if self.truncated_at.is_some() {
            return None;
        }

        let (index, child) = self.children.by_ref().find(|(_, c)| c.visible)?;
        let outer_width = child.outer_width();

        if self.would_overflow(outer_width) {
            if self.max_rows > 0 && self.row + 1 == self.max_rows {
                tracing::debug!(
                    index,
                    max_rows = self.max_rows,
                    "row cap reached, dropping remaining children"
                );
                self.truncated_at = Some(index);
                return None;
            }
            tracing::trace!(index, row = self.row + 1, "wrapping to next row");
            self.break_row();
        }

        let slot = FlowSlot {
            index,
            row: self.row,
            x: self.row_width + child.margin.left,
            y: self.finished_height + child.margin.top,
        };

        self.row_width += outer_width + self.horizontal_gap;
        self.row_height = self.row_height.max(child.outer_height());
        self.in_row += 1;

        Some(slot)
    }
}
