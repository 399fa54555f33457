use crate::options::AspectMode;

/// Anything with a displayable pixel size: a host window, canvas, or a
/// plain `(width, height)` pair.
pub trait Viewport {
    /// Current `(width, height)` in pixels.
    fn size(&self) -> (u32, u32);
}

impl Viewport for (u32, u32) {
    fn size(&self) -> (u32, u32) {
        *self
    }
}

#[cfg(feature = "viewer")]
impl Viewport for winit::window::Window {
    fn size(&self) -> (u32, u32) {
        let size = self.inner_size();
        (size.width, size.height)
    }
}

/// Aspect ratio for a `width × height` surface. Zero dimensions count as 1.
#[must_use]
pub fn aspect_ratio(width: u32, height: u32, mode: AspectMode) -> f32 {
    match mode {
        AspectMode::Viewport => width.max(1) as f32 / height.max(1) as f32,
        AspectMode::Square => 1.0,
    }
}
