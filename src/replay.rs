//! Headless replay of scripted gestures.
//!
//! A gesture script is a TOML file describing a camera, a target plane, the
//! control options, and a list of steps. Each step either feeds one
//! [`InputEvent`] to the controls or runs a number of frame updates:
//!
//! ```toml
//! viewport = [800.0, 600.0]
//!
//! [camera]
//! position = [0.0, 100.0, 0.0]
//! fovy = 45.0
//!
//! [options.controls]
//! max_distance = 150.0
//!
//! [[steps]]
//! event = { type = "wheel", delta = 1.0, x = 400.0, y = 300.0 }
//!
//! [[steps]]
//! frames = 30
//! ```

use std::path::Path;

use glam::Vec3;
use serde::Deserialize;

use crate::camera::PerspectiveCamera;
use crate::controls::{InteractionState, MapControls, Viewport};
use crate::error::ControlsError;
use crate::geometry::Plane;
use crate::input::InputEvent;
use crate::options::Options;

/// Camera placement for a script.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraSetup {
    /// Starting eye position.
    pub position: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraSetup {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 100.0, 0.0),
            fovy: 45.0,
        }
    }
}

/// Target plane for a script.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaneSetup {
    /// Any point on the plane.
    pub point: Vec3,
    /// Plane normal (normalized on load).
    pub normal: Vec3,
}

impl Default for PlaneSetup {
    fn default() -> Self {
        Self {
            point: Vec3::ZERO,
            normal: Vec3::Y,
        }
    }
}

/// One scripted step.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    /// Feed one input event.
    Event {
        /// The event to deliver.
        event: InputEvent,
    },
    /// Call `update` this many times.
    Frames {
        /// Number of frames.
        frames: u32,
    },
}

/// Controls state recorded after a step.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaySample {
    /// Index of the step in the script.
    pub step: usize,
    /// Camera position.
    pub position: Vec3,
    /// Desired zoom distance.
    pub target_zoom: f32,
    /// Damped zoom distance.
    pub current_zoom: f32,
    /// Interaction running after the step.
    pub state: InteractionState,
    /// Whether the step's event was consumed (always `true` for frames).
    pub consumed: bool,
}

/// A parsed gesture script.
#[derive(Debug, Clone, Deserialize)]
pub struct GestureScript {
    /// Viewport `[width, height]` in pixels.
    #[serde(default = "default_viewport")]
    pub viewport: [f32; 2],
    /// Camera placement.
    #[serde(default)]
    pub camera: CameraSetup,
    /// Target plane.
    #[serde(default)]
    pub plane: PlaneSetup,
    /// Control options.
    #[serde(default)]
    pub options: Options,
    /// Steps to run in order.
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

fn default_viewport() -> [f32; 2] {
    [800.0, 600.0]
}

impl GestureScript {
    /// Parse a script from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ControlsError> {
        toml::from_str(content).map_err(|e| ControlsError::Script(e.to_string()))
    }

    /// Load a script from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ControlsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Build the controls the script describes.
    pub fn build_controls(
        &self,
    ) -> Result<MapControls<PerspectiveCamera>, ControlsError> {
        let [width, height] = self.viewport;
        if !(width > 0.0 && height > 0.0) {
            return Err(ControlsError::Script(format!(
                "viewport must be positive, got {width}x{height}"
            )));
        }
        if !(self.camera.fovy > 0.0 && self.camera.fovy < 180.0) {
            return Err(ControlsError::Script(format!(
                "fovy must be within (0, 180), got {}",
                self.camera.fovy
            )));
        }

        let camera = PerspectiveCamera::new(
            self.camera.position,
            self.camera.fovy,
            width / height,
        );
        let plane = Plane::from_point_normal(self.plane.point, self.plane.normal);
        MapControls::new(
            camera,
            plane,
            Viewport::new(width, height),
            self.options.clone(),
        )
    }

    /// Run every step and record the controls state after each one.
    pub fn run(&self) -> Result<Vec<ReplaySample>, ControlsError> {
        let mut controls = self.build_controls()?;
        let mut samples = Vec::with_capacity(self.steps.len());

        for (step, script_step) in self.steps.iter().enumerate() {
            let consumed = match script_step {
                ScriptStep::Event { event } => controls.handle_input(event),
                ScriptStep::Frames { frames } => {
                    for _ in 0..*frames {
                        controls.update();
                    }
                    true
                }
            };
            log::debug!("step {step}: {script_step:?} consumed={consumed}");

            samples.push(ReplaySample {
                step,
                position: controls.camera().eye,
                target_zoom: controls.motion().target_zoom(),
                current_zoom: controls.motion().current_zoom(),
                state: controls.state(),
                consumed,
            });
        }
        Ok(samples)
    }
}
