// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Map-style pan and zoom controls for a camera looking at a target plane.
//!
//! The controls keep the camera on the segment between two anchors: the
//! point on the plane the camera was looking at when the controls were built
//! (maximum zoom) and a point `max_distance` back along the same line
//! (minimum zoom). Wheel, drag, pinch and arrow-key input move a desired
//! zoom and pan offset; every [`MapControls::update`] call damps the camera
//! toward them.
//!
//! # Key entry points
//!
//! - [`controls::MapControls`] - the controls themselves
//! - [`input::InputEvent`] - platform-neutral input fed to
//!   [`MapControls::handle_input`]
//! - [`options::Options`] - tunables, key bindings and button roles
//! - [`camera::ControlledCamera`] - the camera seam, with
//!   [`camera::PerspectiveCamera`] and [`camera::OrthographicCamera`]
//! - [`replay::GestureScript`] - headless replay of scripted gestures
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use map_controls::{
//!     InputEvent, MapControls, Options, PerspectiveCamera, Plane, Viewport,
//! };
//!
//! let camera = PerspectiveCamera::new(Vec3::new(0.0, 100.0, 0.0), 45.0, 4.0 / 3.0);
//! let mut controls =
//!     MapControls::new(camera, Plane::GROUND, Viewport::new(800.0, 600.0), Options::default())?;
//!
//! let _ = controls.handle_input(&InputEvent::Wheel { delta: 1.0, x: 400.0, y: 300.0 });
//! for _ in 0..30 {
//!     controls.update();
//! }
//! assert!(controls.camera().eye.y < 100.0);
//! # Ok::<(), map_controls::ControlsError>(())
//! ```

pub mod camera;
pub mod controls;
pub mod error;
pub mod geometry;
pub mod input;
pub mod options;
pub mod replay;

pub use camera::{ControlledCamera, OrthographicCamera, PerspectiveCamera};
pub use controls::{
    ControlEvent, InteractionState, ListenerId, MapControls, Viewport,
};
pub use error::ControlsError;
pub use geometry::{Plane, Ray};
pub use input::{InputEvent, MouseButton, PanAction, TouchPoint};
pub use options::{ControlOptions, Options};
