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
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests may unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Orbit-style camera controller for interactive 3D scenes.
//!
//! The camera sits on a sphere around a movable pivot, parameterized by
//! radius, azimuth and elevation. Mouse drags update those coordinates:
//! left drag rotates, middle drag pans the pivot, right drag zooms.
//!
//! # Key entry points
//!
//! - [`OrbitCameraController`] - owns the camera and the pointer handlers
//! - [`CameraRig`] - the spherical state the camera derives from
//! - [`Options`] - limits, sensitivities and projection (TOML presets)
//! - [`InputEvent`] - platform-agnostic pointer events
//!
//! # Example
//!
//! ```
//! use orbit_camera::{MouseButton, OrbitCameraController};
//!
//! let mut controller = OrbitCameraController::new(&(1280_u32, 720_u32));
//! controller.on_pointer_move(100.0, 100.0);
//! controller.on_pointer_down(MouseButton::Left);
//! controller.on_pointer_move(150.0, 100.0);
//! controller.on_pointer_up(MouseButton::Left);
//!
//! assert_eq!(controller.rig().azimuth, -25.0);
//! assert_eq!(controller.rig().elevation, 30.0);
//! ```
//!
//! Rendering, windowing and event sources belong to the host. With the
//! `viewer` feature, winit windows implement [`Viewport`] and winit mouse
//! buttons convert into [`MouseButton`].

pub mod camera;
pub mod error;
pub mod input;
pub mod options;

pub use camera::controller::OrbitCameraController;
pub use camera::core::{Camera, CameraUniform};
pub use camera::rig::CameraRig;
pub use camera::viewport::Viewport;
pub use error::OrbitError;
pub use input::{InputEvent, MouseButton};
pub use options::Options;
