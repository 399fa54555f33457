//! Spherical camera rig around a movable pivot.
//!
//! Angles are stored in degrees. Azimuth turns about +Y starting from +Z;
//! elevation rises from the XZ plane toward +Y.

use glam::{Quat, Vec3};

/// Spherical coordinates of the camera around its pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    /// Pivot the camera orbits and looks at.
    pub origin: Vec3,
    /// Distance from pivot to camera.
    pub radius: f32,
    /// Angle about the vertical axis in degrees. Unbounded.
    pub azimuth: f32,
    /// Angle above the horizontal plane in degrees.
    pub elevation: f32,
}

impl CameraRig {
    /// Rig at the world origin with zero angles.
    #[must_use]
    pub fn new(radius: f32) -> Self {
        Self {
            origin: Vec3::ZERO,
            radius,
            azimuth: 0.0,
            elevation: 0.0,
        }
    }

    /// Pivot-relative camera offset (spherical → Cartesian).
    #[must_use]
    pub fn offset(&self) -> Vec3 {
        let (sin_az, cos_az) = self.azimuth.to_radians().sin_cos();
        let (sin_el, cos_el) = self.elevation.to_radians().sin_cos();
        self.radius * Vec3::new(sin_az * cos_el, sin_el, cos_az * cos_el)
    }

    /// World-space camera position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.offset() + self.origin
    }

    /// Camera up vector: the sphere tangent along increasing elevation.
    ///
    /// Equal to world +Y projected onto the view plane, and still defined
    /// when looking straight down or up.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        let (sin_az, cos_az) = self.azimuth.to_radians().sin_cos();
        let (sin_el, cos_el) = self.elevation.to_radians().sin_cos();
        Vec3::new(-sin_el * sin_az, cos_el, -sin_el * cos_az)
    }

    /// Rotation about +Y by the current azimuth.
    #[must_use]
    pub fn heading(&self) -> Quat {
        Quat::from_axis_angle(Vec3::Y, self.azimuth.to_radians())
    }

    /// Horizontal pan axes `(forward, left)`: +Z and +X turned by the
    /// azimuth.
    #[must_use]
    pub fn pan_axes(&self) -> (Vec3, Vec3) {
        let heading = self.heading();
        (heading * Vec3::Z, heading * Vec3::X)
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(crate::options::INITIAL_RADIUS)
    }
}
