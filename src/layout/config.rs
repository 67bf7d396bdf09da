//! # Layout Configuration
//!
//! The knobs the container owner sets before a pass. Every setter validates
//! first and only then compares against the current value, so a rejected
//! value never leaves a half-updated config behind. Setters report whether
//! anything changed; the host decides what to invalidate.

use serde::{Deserialize, Serialize};

use crate::error::{Axis, FlowError};
use crate::model::Edges;

/// Gap, row cap and padding for a flow container. All default to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawLayoutConfig")]
pub struct LayoutConfig {
    horizontal_gap: f64,
    vertical_gap: f64,
    max_rows: u32,
    padding: Edges,
}

/// Unvalidated shape of [`LayoutConfig`] as it appears in JSON.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawLayoutConfig {
    #[serde(alias = "horizontalDividerSize")]
    horizontal_gap: f64,
    #[serde(alias = "verticalDividerSize")]
    vertical_gap: f64,
    max_rows: i32,
    padding: Edges,
}

impl TryFrom<RawLayoutConfig> for LayoutConfig {
    type Error = FlowError;

    fn try_from(raw: RawLayoutConfig) -> Result<Self, Self::Error> {
        let mut config = LayoutConfig::default();
        config.set_horizontal_gap(raw.horizontal_gap)?;
        config.set_vertical_gap(raw.vertical_gap)?;
        config.set_max_rows(raw.max_rows)?;
        config.set_padding(raw.padding)?;
        Ok(config)
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Space inserted between adjacent children of the same row.
    pub fn horizontal_gap(&self) -> f64 {
        self.horizontal_gap
    }

    /// Space inserted between adjacent rows.
    pub fn vertical_gap(&self) -> f64 {
        self.vertical_gap
    }

    /// Maximum number of rows to place. Zero means unlimited.
    pub fn max_rows(&self) -> u32 {
        self.max_rows
    }

    pub fn padding(&self) -> Edges {
        self.padding
    }

    pub fn set_horizontal_gap(&mut self, gap: f64) -> Result<bool, FlowError> {
        let gap = validate_gap(Axis::Horizontal, gap)?;
        Ok(replace_if_changed(&mut self.horizontal_gap, gap))
    }

    pub fn set_vertical_gap(&mut self, gap: f64) -> Result<bool, FlowError> {
        let gap = validate_gap(Axis::Vertical, gap)?;
        Ok(replace_if_changed(&mut self.vertical_gap, gap))
    }

    /// Sets the row cap. Negative input is rejected before anything else
    /// happens; `0` lifts the cap.
    pub fn set_max_rows(&mut self, max_rows: i32) -> Result<bool, FlowError> {
        let max_rows = u32::try_from(max_rows).map_err(|_| FlowError::NegativeMaxRows(max_rows))?;
        Ok(replace_if_changed(&mut self.max_rows, max_rows))
    }

    pub fn set_padding(&mut self, padding: Edges) -> Result<bool, FlowError> {
        if !padding.is_valid_inset() {
            return Err(FlowError::InvalidPadding(padding));
        }
        Ok(replace_if_changed(&mut self.padding, padding))
    }

    // Builder-style variants for constructing a config in one expression.

    pub fn with_gaps(mut self, horizontal: f64, vertical: f64) -> Result<Self, FlowError> {
        self.set_horizontal_gap(horizontal)?;
        self.set_vertical_gap(vertical)?;
        Ok(self)
    }

    pub fn with_max_rows(mut self, max_rows: i32) -> Result<Self, FlowError> {
        self.set_max_rows(max_rows)?;
        Ok(self)
    }

    pub fn with_padding(mut self, padding: Edges) -> Result<Self, FlowError> {
        self.set_padding(padding)?;
        Ok(self)
    }

    /// Row budget for a container of the given full width.
    pub fn content_width(&self, container_width: f64) -> f64 {
        (container_width - self.padding.horizontal()).max(0.0)
    }
}

fn validate_gap(axis: Axis, value: f64) -> Result<f64, FlowError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(FlowError::InvalidGap { axis, value })
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_zero() {
        let config = LayoutConfig::new();
        assert_eq!(config.horizontal_gap(), 0.0);
        assert_eq!(config.vertical_gap(), 0.0);
        assert_eq!(config.max_rows(), 0);
        assert_eq!(config.padding(), Edges::ZERO);
    }

    #[test]
    fn setter_reports_change_only_once() {
        let mut config = LayoutConfig::new();
        assert!(config.set_horizontal_gap(8.0).unwrap());
        assert!(!config.set_horizontal_gap(8.0).unwrap());
        assert!(config.set_vertical_gap(4.0).unwrap());
        assert!(!config.set_vertical_gap(4.0).unwrap());
        assert!(config.set_max_rows(2).unwrap());
        assert!(!config.set_max_rows(2).unwrap());
        assert!(config.set_padding(Edges::uniform(3.0)).unwrap());
        assert!(!config.set_padding(Edges::uniform(3.0)).unwrap());
    }

    #[test]
    fn negative_max_rows_rejected_without_mutation() {
        let mut config = LayoutConfig::new();
        config.set_max_rows(3).unwrap();
        let err = config.set_max_rows(-1).unwrap_err();
        assert!(matches!(err, FlowError::NegativeMaxRows(-1)));
        assert_eq!(config.max_rows(), 3);
    }

    #[test]
    fn zero_max_rows_is_unlimited_sentinel() {
        let mut config = LayoutConfig::new();
        config.set_max_rows(5).unwrap();
        assert!(config.set_max_rows(0).unwrap());
        assert_eq!(config.max_rows(), 0);
    }

    #[test]
    fn invalid_gaps_rejected() {
        let mut config = LayoutConfig::new();
        assert!(matches!(
            config.set_horizontal_gap(-2.0),
            Err(FlowError::InvalidGap { axis: Axis::Horizontal, .. })
        ));
        assert!(matches!(
            config.set_vertical_gap(f64::NAN),
            Err(FlowError::InvalidGap { axis: Axis::Vertical, .. })
        ));
        assert!(config.set_vertical_gap(f64::INFINITY).is_err());
        assert_eq!(config, LayoutConfig::default());
    }

    #[test]
    fn invalid_padding_rejected() {
        let mut config = LayoutConfig::new();
        let err = config.set_padding(Edges::symmetric(-1.0, 0.0)).unwrap_err();
        assert!(matches!(err, FlowError::InvalidPadding(_)));
        assert_eq!(config.padding(), Edges::ZERO);
    }

    #[test]
    fn content_width_subtracts_horizontal_padding() {
        let config = LayoutConfig::new()
            .with_padding(Edges::symmetric(5.0, 10.0))
            .unwrap();
        assert_eq!(config.content_width(100.0), 80.0);
        assert_eq!(config.content_width(15.0), 0.0);
    }

    #[test]
    fn json_accepts_divider_aliases() {
        let config: LayoutConfig = serde_json::from_str(
            r#"{ "horizontalDividerSize": 6, "verticalDividerSize": 2, "maxRows": 3 }"#,
        )
        .unwrap();
        assert_eq!(config.horizontal_gap(), 6.0);
        assert_eq!(config.vertical_gap(), 2.0);
        assert_eq!(config.max_rows(), 3);
    }

    #[test]
    fn json_runs_validation() {
        let result: Result<LayoutConfig, _> = serde_json::from_str(r#"{ "maxRows": -1 }"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("maxRows can't be negative"));
    }

    #[test]
    fn json_round_trip_keeps_values() {
        let config = LayoutConfig::new()
            .with_gaps(4.0, 8.0)
            .and_then(|c| c.with_max_rows(2))
            .unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let back: LayoutConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
