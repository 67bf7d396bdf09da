//! # Flow Container
//!
//! A host-side container that owns its children and a [`FlowLayoutEngine`]
//! value and delegates sizing and placement to it. This is where toolkit
//! state lives: the last measured size and whether a new layout is due.
//! The engine itself stays free of both.
//!
//! Setters forward to [`LayoutConfig`] and raise `needs_layout` only when the
//! value actually changed. The host polls [`FlowContainer::needs_layout`] and
//! schedules its own re-measure and repaint.

use crate::error::FlowError;
use crate::layout::{FlowLayoutEngine, LayoutConfig, Placement};
use crate::model::{ChildBox, ChildConstraint, Constraints, Edges, Size};

#[derive(Debug, Clone)]
pub struct FlowContainer {
    engine: FlowLayoutEngine,
    children: Vec<ChildBox>,
    measured: Option<Size>,
    needs_layout: bool,
}

impl FlowContainer {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            engine: FlowLayoutEngine::new(config),
            children: Vec::new(),
            measured: None,
            needs_layout: true,
        }
    }

    pub fn engine(&self) -> &FlowLayoutEngine {
        &self.engine
    }

    pub fn config(&self) -> &LayoutConfig {
        self.engine.config()
    }

    pub fn children(&self) -> &[ChildBox] {
        &self.children
    }

    /// Mutable access to the children. Any change may move rows, so this
    /// always marks the container for layout.
    pub fn children_mut(&mut self) -> &mut Vec<ChildBox> {
        self.needs_layout = true;
        &mut self.children
    }

    pub fn push(&mut self, child: ChildBox) {
        self.children.push(child);
        self.needs_layout = true;
    }

    /// Shows or hides a child. Returns whether its visibility changed.
    pub fn set_visible(&mut self, index: usize, visible: bool) -> bool {
        match self.children.get_mut(index) {
            Some(child) if child.visible != visible => {
                child.visible = visible;
                self.needs_layout = true;
                true
            }
            _ => false,
        }
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Size reported by the most recent [`measure`](Self::measure).
    pub fn measured_size(&self) -> Option<Size> {
        self.measured
    }

    pub fn set_horizontal_gap(&mut self, gap: f64) -> Result<bool, FlowError> {
        let changed = self.engine.config_mut().set_horizontal_gap(gap)?;
        Ok(self.invalidate_if(changed))
    }

    pub fn set_vertical_gap(&mut self, gap: f64) -> Result<bool, FlowError> {
        let changed = self.engine.config_mut().set_vertical_gap(gap)?;
        Ok(self.invalidate_if(changed))
    }

    pub fn set_max_rows(&mut self, max_rows: i32) -> Result<bool, FlowError> {
        let changed = self.engine.config_mut().set_max_rows(max_rows)?;
        Ok(self.invalidate_if(changed))
    }

    pub fn set_padding(&mut self, padding: Edges) -> Result<bool, FlowError> {
        let changed = self.engine.config_mut().set_padding(padding)?;
        Ok(self.invalidate_if(changed))
    }

    fn invalidate_if(&mut self, changed: bool) -> bool {
        self.needs_layout |= changed;
        changed
    }

    /// Measures the container with the children's current intrinsic sizes.
    pub fn measure(&mut self, constraints: &Constraints) -> Size {
        let size = self.engine.measure(&self.children, constraints);
        self.measured = Some(size);
        size
    }

    /// Asks the host to size every visible child first, then measures.
    ///
    /// `measure_child` receives the child's index and the constraint it
    /// should be measured against, and returns its intrinsic size.
    pub fn measure_children<F>(&mut self, constraints: &Constraints, mut measure_child: F) -> Size
    where
        F: FnMut(usize, &ChildConstraint) -> Size,
    {
        for (index, child) in self.children.iter_mut().enumerate() {
            if !child.visible {
                continue;
            }
            let constraint = self.engine.child_constraint(child, constraints);
            let size = measure_child(index, &constraint);
            child.width = size.width;
            child.height = size.height;
        }
        self.measure(constraints)
    }

    /// Places the children within the last measured size and clears the
    /// layout flag.
    pub fn layout(&mut self) -> Result<Placement, FlowError> {
        let size = self.measured.ok_or(FlowError::NotMeasured)?;
        let placement = self.engine.layout(&self.children, &size);
        self.needs_layout = false;
        Ok(placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container_with(widths: &[f64]) -> FlowContainer {
        let mut container = FlowContainer::new(LayoutConfig::new());
        for &w in widths {
            container.push(ChildBox::new(w, 10.0));
        }
        container
    }

    #[test]
    fn layout_before_measure_fails() {
        let mut container = container_with(&[10.0]);
        assert!(matches!(container.layout(), Err(FlowError::NotMeasured)));
        assert!(container.needs_layout());
    }

    #[test]
    fn layout_clears_flag_and_setters_raise_it() {
        let mut container = container_with(&[40.0, 40.0, 40.0]);
        container.measure(&Constraints::natural(100.0));
        container.layout().unwrap();
        assert!(!container.needs_layout());

        assert!(!container.set_horizontal_gap(0.0).unwrap());
        assert!(!container.needs_layout());

        assert!(container.set_horizontal_gap(25.0).unwrap());
        assert!(container.needs_layout());
    }

    #[test]
    fn rejected_max_rows_leaves_flag_untouched() {
        let mut container = container_with(&[40.0]);
        container.measure(&Constraints::natural(100.0));
        container.layout().unwrap();
        assert!(container.set_max_rows(-4).is_err());
        assert!(!container.needs_layout());
        assert_eq!(container.config().max_rows(), 0);
    }

    #[test]
    fn set_visible_only_reports_real_changes() {
        let mut container = container_with(&[40.0, 40.0]);
        container.measure(&Constraints::natural(100.0));
        container.layout().unwrap();
        assert!(!container.set_visible(0, true));
        assert!(!container.set_visible(9, false));
        assert!(!container.needs_layout());
        assert!(container.set_visible(0, false));
        assert!(container.needs_layout());
    }

    #[test]
    fn measure_children_stores_sizes_from_host() {
        let mut container = FlowContainer::new(
            LayoutConfig::new().with_padding(Edges::uniform(10.0)).unwrap(),
        );
        container.push(ChildBox::new(0.0, 0.0));
        container.push(ChildBox::new(0.0, 0.0).hidden());
        container.push(ChildBox::new(0.0, 0.0));

        let mut seen = Vec::new();
        let size = container.measure_children(&Constraints::natural(100.0), |index, constraint| {
            seen.push((index, constraint.max_width));
            Size::new(50.0, 20.0)
        });

        assert_eq!(seen, vec![(0, 80.0), (2, 80.0)]);
        assert_eq!(container.children()[1].width, 0.0);
        // Content width 80 holds one 50-wide child per row: two rows plus padding.
        assert_eq!(size.height, 2.0 * 20.0 + 20.0);
        assert_eq!(container.measured_size(), Some(size));
    }
}
