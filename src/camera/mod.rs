//! Camera system for 3D scene viewing.
//!
//! Provides an orbital camera around a movable pivot with rotate, pan and
//! zoom driven by mouse drags.

/// Orbit camera controller: pointer handlers and camera recompute.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Spherical rig (pivot, radius, azimuth, elevation).
pub mod rig;
/// Host viewport abstraction and aspect-ratio policy.
pub mod viewport;
