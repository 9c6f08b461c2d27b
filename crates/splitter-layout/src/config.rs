//! Container and panel configuration.
//!
//! Both [`SplitterConfig`] and [`PanelSpec`] are plain serde-enabled records
//! with builder methods, so hosts can either assemble them in code or load
//! them from JSON alongside the rest of their UI description.

use std::fmt;

use serde::{Deserialize, Serialize};
use splitter_core::Axis;

/// Default divider thickness in pixels.
pub const DEFAULT_GUTTER_SIZE: f64 = 8.0;

/// Default container-wide minimum panel size in pixels.
pub const DEFAULT_MIN_SIZE: f64 = 50.0;

/// Default keyboard step in percent.
pub const DEFAULT_KEYBOARD_STEP: f64 = 1.0;

/// Default multiplier applied to the keyboard step while Shift is held.
pub const DEFAULT_KEYBOARD_COARSE_MULTIPLIER: f64 = 10.0;

/// Default keyboard minimum panel fraction in percent.
pub const DEFAULT_KEYBOARD_MIN_PERCENT: f64 = 5.0;

/// Whether the engine owns the published size vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeMode {
    /// The engine persists every computed vector as ground truth.
    #[default]
    Owned,
    /// The host owns the vector: computed vectors are only reported, and the
    /// host feeds them back as the new controlled value.
    Controlled,
}

/// Keyboard resize tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardTuning {
    /// Percent moved per arrow keypress.
    pub step: f64,
    /// Multiplier applied to `step` while Shift is held.
    pub coarse_multiplier: f64,
    /// Minimum fraction (percent) keyboard resizing leaves on either panel,
    /// independent of the pixel minimums.
    pub min_percent: f64,
}

impl KeyboardTuning {
    pub fn validate(self) -> Result<(), SplitterConfigError> {
        let valid = self.step.is_finite()
            && self.step > 0.0
            && self.coarse_multiplier.is_finite()
            && self.coarse_multiplier > 0.0
            && self.min_percent.is_finite()
            && (0.0..50.0).contains(&self.min_percent);
        if valid {
            Ok(())
        } else {
            Err(SplitterConfigError::InvalidKeyboardTuning { tuning: self })
        }
    }
}

impl Default for KeyboardTuning {
    fn default() -> Self {
        Self {
            step: DEFAULT_KEYBOARD_STEP,
            coarse_multiplier: DEFAULT_KEYBOARD_COARSE_MULTIPLIER,
            min_percent: DEFAULT_KEYBOARD_MIN_PERCENT,
        }
    }
}

/// Container-level splitter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Axis the panels are laid out along.
    pub direction: Axis,
    /// Thickness of each divider in pixels.
    pub gutter_size: f64,
    /// Minimum panel size in pixels for panels without their own `min_size`.
    pub min_size: f64,
    /// Initial sizes in percent; used only when the length matches the panel
    /// count.
    pub default_sizes: Option<Vec<f64>>,
    pub keyboard: KeyboardTuning,
}

impl SplitterConfig {
    /// Horizontal (left to right) splitter with default tuning.
    #[must_use]
    pub fn horizontal() -> Self {
        Self::default()
    }

    /// Vertical (top to bottom) splitter with default tuning.
    #[must_use]
    pub fn vertical() -> Self {
        Self {
            direction: Axis::Vertical,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn direction(mut self, direction: Axis) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn gutter_size(mut self, gutter_size: f64) -> Self {
        self.gutter_size = gutter_size;
        self
    }

    #[must_use]
    pub fn min_size(mut self, min_size: f64) -> Self {
        self.min_size = min_size;
        self
    }

    #[must_use]
    pub fn default_sizes(mut self, sizes: impl IntoIterator<Item = f64>) -> Self {
        self.default_sizes = Some(sizes.into_iter().collect());
        self
    }

    #[must_use]
    pub fn keyboard(mut self, keyboard: KeyboardTuning) -> Self {
        self.keyboard = keyboard;
        self
    }

    /// Validate container settings on their own.
    pub fn validate(&self) -> Result<(), SplitterConfigError> {
        if !self.gutter_size.is_finite() || self.gutter_size < 0.0 {
            return Err(SplitterConfigError::InvalidLength {
                field: "gutter_size",
                value: self.gutter_size,
            });
        }
        if !self.min_size.is_finite() || self.min_size < 0.0 {
            return Err(SplitterConfigError::InvalidLength {
                field: "min_size",
                value: self.min_size,
            });
        }
        if let Some(sizes) = &self.default_sizes {
            for (index, &size) in sizes.iter().enumerate() {
                if !size.is_finite() || size < 0.0 {
                    return Err(SplitterConfigError::InvalidSizeHint { index, size });
                }
            }
        }
        self.keyboard.validate()
    }

    /// Validate container settings together with the panels they govern.
    pub fn validate_panels(&self, panels: &[PanelSpec]) -> Result<(), SplitterConfigError> {
        self.validate()?;
        if panels.is_empty() {
            return Err(SplitterConfigError::NoPanels);
        }
        for (index, panel) in panels.iter().enumerate() {
            panel.validate(index)?;
        }
        Ok(())
    }
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            direction: Axis::Horizontal,
            gutter_size: DEFAULT_GUTTER_SIZE,
            min_size: DEFAULT_MIN_SIZE,
            default_sizes: None,
            keyboard: KeyboardTuning::default(),
        }
    }
}

/// Per-panel input.
///
/// Sizes (`default_size`, `size`) are percentages; bounds (`min_size`,
/// `max_size`) are pixels along the splitter axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSpec {
    /// Stable host key for reconciliation; not used by the engine.
    pub key: Option<String>,
    /// Initial size hint in percent.
    pub default_size: Option<f64>,
    /// Host-controlled size in percent.
    pub size: Option<f64>,
    pub min_size: Option<f64>,
    pub max_size: Option<f64>,
    pub resizable: bool,
    pub collapsible: bool,
    /// Host-controlled collapsed flag. When `None` the engine owns the flag.
    pub collapsed: Option<bool>,
    /// Initial collapsed flag for engine-owned state.
    pub default_collapsed: bool,
}

impl PanelSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn default_size(mut self, percent: f64) -> Self {
        self.default_size = Some(percent);
        self
    }

    #[must_use]
    pub fn size(mut self, percent: f64) -> Self {
        self.size = Some(percent);
        self
    }

    #[must_use]
    pub fn min_size(mut self, px: f64) -> Self {
        self.min_size = Some(px);
        self
    }

    #[must_use]
    pub fn max_size(mut self, px: f64) -> Self {
        self.max_size = Some(px);
        self
    }

    #[must_use]
    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    #[must_use]
    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    #[must_use]
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = Some(collapsed);
        self
    }

    #[must_use]
    pub fn default_collapsed(mut self, collapsed: bool) -> Self {
        self.default_collapsed = collapsed;
        self
    }

    /// Initial collapsed flag: the controlled value wins over the default.
    #[must_use]
    pub fn initially_collapsed(&self) -> bool {
        self.collapsed.unwrap_or(self.default_collapsed)
    }

    /// Validate one panel at position `index`.
    pub fn validate(&self, index: usize) -> Result<(), SplitterConfigError> {
        for size in [self.default_size, self.size].into_iter().flatten() {
            if !size.is_finite() || size < 0.0 {
                return Err(SplitterConfigError::InvalidSizeHint { index, size });
            }
        }
        for (field, value) in [("min_size", self.min_size), ("max_size", self.max_size)] {
            if let Some(value) = value
                && (!value.is_finite() || value < 0.0)
            {
                return Err(SplitterConfigError::InvalidLength { field, value });
            }
        }
        if let (Some(min), Some(max)) = (self.min_size, self.max_size)
            && max < min
        {
            return Err(SplitterConfigError::InvalidConstraint { index, min, max });
        }
        Ok(())
    }
}

impl Default for PanelSpec {
    fn default() -> Self {
        Self {
            key: None,
            default_size: None,
            size: None,
            min_size: None,
            max_size: None,
            resizable: true,
            collapsible: false,
            collapsed: None,
            default_collapsed: false,
        }
    }
}

/// Configuration validation failures.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitterConfigError {
    /// A splitter needs at least one panel.
    NoPanels,
    /// A pixel length was negative or not finite.
    InvalidLength { field: &'static str, value: f64 },
    /// A percent size hint was negative or not finite.
    InvalidSizeHint { index: usize, size: f64 },
    /// A panel's `max_size` is smaller than its `min_size`.
    InvalidConstraint { index: usize, min: f64, max: f64 },
    InvalidKeyboardTuning { tuning: KeyboardTuning },
    /// A size vector does not have one entry per panel.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for SplitterConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPanels => write!(f, "splitter requires at least one panel"),
            Self::InvalidLength { field, value } => {
                write!(f, "invalid {field} value {value} (must be finite and >= 0)")
            }
            Self::InvalidSizeHint { index, size } => {
                write!(f, "panel {index} has invalid size hint {size}")
            }
            Self::InvalidConstraint { index, min, max } => {
                write!(f, "panel {index} has max_size {max} below min_size {min}")
            }
            Self::InvalidKeyboardTuning { tuning } => write!(
                f,
                "invalid keyboard tuning step={} coarse_multiplier={} min_percent={}",
                tuning.step, tuning.coarse_multiplier, tuning.min_percent
            ),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "size vector has {actual} entries, expected {expected}")
            }
        }
    }
}

impl std::error::Error for SplitterConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_component_defaults() {
        let config = SplitterConfig::default();
        assert_eq!(config.direction, Axis::Horizontal);
        assert_eq!(config.gutter_size, 8.0);
        assert_eq!(config.min_size, 50.0);
        assert_eq!(config.keyboard.step, 1.0);
        assert_eq!(config.keyboard.coarse_multiplier, 10.0);
        assert_eq!(config.keyboard.min_percent, 5.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn panel_defaults_are_resizable_and_not_collapsible() {
        let panel = PanelSpec::new();
        assert!(panel.resizable);
        assert!(!panel.collapsible);
        assert!(!panel.initially_collapsed());
    }

    #[test]
    fn controlled_collapsed_wins_over_default() {
        let panel = PanelSpec::new().default_collapsed(true).collapsed(false);
        assert!(!panel.initially_collapsed());
        let panel = PanelSpec::new().default_collapsed(true);
        assert!(panel.initially_collapsed());
    }

    #[test]
    fn rejects_max_below_min() {
        let err = PanelSpec::new()
            .min_size(100.0)
            .max_size(40.0)
            .validate(2)
            .expect_err("max below min must be rejected");
        assert_eq!(
            err,
            SplitterConfigError::InvalidConstraint {
                index: 2,
                min: 100.0,
                max: 40.0
            }
        );
        assert_eq!(err.to_string(), "panel 2 has max_size 40 below min_size 100");
    }

    #[test]
    fn rejects_empty_panel_list() {
        let err = SplitterConfig::default()
            .validate_panels(&[])
            .expect_err("no panels");
        assert_eq!(err, SplitterConfigError::NoPanels);
    }

    #[test]
    fn rejects_negative_gutter_and_bad_hints() {
        assert!(SplitterConfig::default().gutter_size(-1.0).validate().is_err());
        assert!(
            SplitterConfig::default()
                .default_sizes([50.0, f64::NAN])
                .validate()
                .is_err()
        );
        assert!(PanelSpec::new().default_size(-5.0).validate(0).is_err());
        assert!(PanelSpec::new().min_size(f64::INFINITY).validate(0).is_err());
    }

    #[test]
    fn rejects_degenerate_keyboard_tuning() {
        let tuning = KeyboardTuning {
            step: 0.0,
            ..KeyboardTuning::default()
        };
        assert!(tuning.validate().is_err());
        let tuning = KeyboardTuning {
            min_percent: 60.0,
            ..KeyboardTuning::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn loads_from_json_with_defaults() {
        let config: SplitterConfig = serde_json::from_str(
            r#"{ "direction": "vertical", "gutter_size": 4, "keyboard": { "step": 2 } }"#,
        )
        .expect("config json");
        assert_eq!(config.direction, Axis::Vertical);
        assert_eq!(config.gutter_size, 4.0);
        assert_eq!(config.min_size, DEFAULT_MIN_SIZE);
        assert_eq!(config.keyboard.step, 2.0);
        assert_eq!(config.keyboard.min_percent, DEFAULT_KEYBOARD_MIN_PERCENT);

        let panels: Vec<PanelSpec> = serde_json::from_str(
            r#"[{ "key": "nav", "min_size": 120, "collapsible": true }, { "resizable": false }]"#,
        )
        .expect("panel json");
        assert_eq!(panels[0].key.as_deref(), Some("nav"));
        assert_eq!(panels[0].min_size, Some(120.0));
        assert!(panels[0].collapsible);
        assert!(panels[0].resizable);
        assert!(!panels[1].resizable);
        assert!(config.validate_panels(&panels).is_ok());
    }
}
