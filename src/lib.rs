//! # flowwrap
//!
//! A flow-wrap layout engine for container widgets.
//!
//! Children are laid out left to right. When the next child's margin box
//! would push the row past the content width, a new row starts below the
//! tallest child of the previous one. That is the whole idea; the rest is
//! bookkeeping for gaps, padding, hidden children and an optional row cap.
//!
//! The engine does not measure children, draw them or attach them to a view
//! tree. A host toolkit measures each child, hands the engine the sizes and
//! margins, and positions its views from the rectangles it gets back.
//!
//! ## Architecture
//!
//! ```text
//! Input (JSON/API)
//!       ↓
//!   [model]      Children, margins, constraints, rectangles
//!       ↓
//!   [layout]     Config validation, row breaking, measure + layout passes
//!       ↓
//!   [container]  Host-side state: measured size, needs-layout flag
//!       ↓
//! Output (size + placement)
//! ```

pub mod container;
pub mod error;
pub mod layout;
pub mod model;

pub use error::FlowError;

use layout::FlowLayoutEngine;
use model::{LayoutRequest, LayoutResponse};

/// Run both passes over a request: measure the container, then place the
/// children inside the measured size.
pub fn layout_request(request: &LayoutRequest) -> LayoutResponse {
    let engine = FlowLayoutEngine::new(request.config.clone());
    let size = engine.measure(&request.children, &request.constraints());
    let placement = engine.layout(&request.children, &size);
    LayoutResponse {
        width: size.width,
        height: size.height,
        placement,
    }
}

/// Lay out a request described as JSON and return the response as JSON.
pub fn layout_json(json: &str) -> Result<String, FlowError> {
    let request: LayoutRequest = serde_json::from_str(json)?;
    let response = layout_request(&request);
    serde_json::to_string_pretty(&response).map_err(|e| FlowError::OutputError(e.to_string()))
}
