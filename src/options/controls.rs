use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ControlsError;

/// Base of the zoom scale; each zoom step scales distance by
/// `ZOOM_SCALE_BASE ^ zoom_speed`.
pub const ZOOM_SCALE_BASE: f32 = 0.95;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
/// Behavior switches and speeds for the map controls.
pub struct ControlOptions {
    /// Master switch; when off every input event is ignored.
    pub enabled: bool,
    /// Closest the camera may get to the zoom anchor.
    #[schemars(title = "Min Distance", range(min = 0.0))]
    pub min_distance: f32,
    /// Farthest the camera may get from the zoom anchor.
    ///
    /// An unbounded value is replaced by the camera's starting distance, so
    /// with the default the camera can zoom in and back out but never past
    /// where it started. Set a finite value to allow zooming out further.
    #[schemars(title = "Max Distance", range(min = 0.0))]
    pub max_distance: f32,
    /// Declared for API compatibility. Damping always runs at a fixed rate.
    #[schemars(skip)]
    pub enable_damping: bool,
    /// Declared for API compatibility. Not read by the motion model.
    #[schemars(skip)]
    pub damping_factor: f32,
    /// Allow dolly (wheel, middle drag, pinch).
    #[schemars(title = "Zoom")]
    pub enable_zoom: bool,
    /// Zoom sensitivity exponent.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub zoom_speed: f32,
    /// Allow panning (drag, one-finger touch, arrow keys).
    #[schemars(title = "Pan")]
    pub enable_pan: bool,
    /// Pixels moved per arrow key press.
    #[schemars(title = "Key Pan Speed", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub key_pan_speed: f32,
    /// Allow keyboard panning.
    #[schemars(title = "Keys")]
    pub enable_keys: bool,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            enable_damping: true,
            damping_factor: 0.25,
            enable_zoom: true,
            zoom_speed: 4.0,
            enable_pan: true,
            key_pan_speed: 12.0,
            enable_keys: true,
        }
    }
}

impl ControlOptions {
    /// Factor applied to the target distance by one zoom step.
    #[must_use]
    pub fn zoom_scale(&self) -> f32 {
        ZOOM_SCALE_BASE.powf(self.zoom_speed)
    }

    /// Reject settings the motion model cannot work with.
    pub fn validate(&self) -> Result<(), ControlsError> {
        if self.min_distance.is_nan() || self.min_distance < 0.0 {
            return Err(ControlsError::InvalidOptions(format!(
                "min_distance must be non-negative, got {}",
                self.min_distance
            )));
        }
        if self.max_distance.is_nan() || self.max_distance <= 0.0 {
            return Err(ControlsError::InvalidOptions(format!(
                "max_distance must be positive, got {}",
                self.max_distance
            )));
        }
        if self.min_distance > self.max_distance {
            return Err(ControlsError::InvalidOptions(format!(
                "min_distance {} exceeds max_distance {}",
                self.min_distance, self.max_distance
            )));
        }
        if !self.zoom_speed.is_finite() || self.zoom_speed <= 0.0 {
            return Err(ControlsError::InvalidOptions(format!(
                "zoom_speed must be positive and finite, got {}",
                self.zoom_speed
            )));
        }
        if !self.key_pan_speed.is_finite() {
            return Err(ControlsError::InvalidOptions(format!(
                "key_pan_speed must be finite, got {}",
                self.key_pan_speed
            )));
        }
        Ok(())
    }
}
