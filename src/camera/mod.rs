//! Camera types driven by the map controls.
//!
//! The controls only need the narrow [`ControlledCamera`] capability; the
//! concrete perspective and orthographic cameras here are what a host
//! renderer would normally own.

/// Camera capability trait and shared orientation helpers.
pub mod core;
/// Orthographic camera (unsupported for dolly).
pub mod orthographic;
/// Perspective camera defined by eye position, orientation, and projection
/// parameters.
pub mod perspective;

pub use self::core::{look_rotation, ControlledCamera, ProjectionKind};
pub use orthographic::OrthographicCamera;
pub use perspective::PerspectiveCamera;
