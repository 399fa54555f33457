use glam::Vec2;

use crate::camera::core::{Camera, CameraUniform};
use crate::camera::rig::CameraRig;
use crate::camera::viewport::{aspect_ratio, Viewport};
use crate::error::OrbitError;
use crate::input::{DragState, InputEvent, MouseButton};
use crate::options::{CameraOptions, InputOptions, Options, ReleaseMode};

/// Orbit camera driven by mouse drags.
///
/// Left drag rotates around the pivot, middle drag pans the pivot across
/// the ground plane, right drag zooms. The camera's eye, target and up are
/// only ever written by the internal recompute step, so they always follow
/// from the [`CameraRig`].
#[derive(Debug, Clone)]
pub struct OrbitCameraController {
    rig: CameraRig,
    drag: DragState,
    camera: Camera,
    options: CameraOptions,
    input: InputOptions,
    revision: u64,
}

impl OrbitCameraController {
    /// Controller with the default options, sized for `viewport`.
    #[must_use]
    pub fn new<V: Viewport + ?Sized>(viewport: &V) -> Self {
        Self::build(viewport, Options::default())
    }

    /// Controller with custom options.
    ///
    /// # Errors
    ///
    /// Fails if the options are inconsistent (see
    /// [`CameraOptions::validate`]).
    pub fn with_options<V: Viewport + ?Sized>(
        viewport: &V,
        options: &Options,
    ) -> Result<Self, OrbitError> {
        options.validate()?;
        Ok(Self::build(viewport, options.clone()))
    }

    fn build<V: Viewport + ?Sized>(viewport: &V, options: Options) -> Self {
        let (width, height) = viewport.size();
        let aspect = aspect_ratio(width, height, options.camera.aspect_mode);

        let mut controller = Self {
            rig: CameraRig::new(options.camera.initial_radius),
            drag: DragState::new(),
            camera: Camera::from_options(&options.camera, aspect),
            options: options.camera,
            input: options.input,
            revision: 0,
        };
        controller.recompute_position();

        log::info!(
            "orbit camera ready: {width}x{height} viewport, aspect {aspect:.3}, \
             radius {}",
            controller.rig.radius
        );
        controller
    }

    /// Current camera (eye, target, up and projection).
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current spherical rig.
    #[must_use]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// Current drag state.
    #[must_use]
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Camera options in effect.
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Pointer options in effect.
    #[must_use]
    pub fn input_options(&self) -> &InputOptions {
        &self.input
    }

    /// Counter bumped every time the camera is reassigned. Hosts can compare
    /// it against the value they last uploaded to skip redundant matrix
    /// rebuilds.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// GPU uniform for the current camera.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&self.camera);
        uniform
    }

    /// Route a platform-agnostic event to the pointer handlers.
    ///
    /// Returns true if the event was consumed by the camera.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::CursorMoved { x, y } => self.on_pointer_move(x, y),
            InputEvent::MouseButton {
                button,
                pressed: true,
            } => self.on_pointer_down(button),
            InputEvent::MouseButton {
                button,
                pressed: false,
            } => self.on_pointer_up(button),
        }
        true
    }

    /// A pointer button went down. Only marks it held; the camera moves on
    /// the following pointer moves.
    pub fn on_pointer_down(&mut self, button: MouseButton) {
        if self.drag.press(button) {
            log::trace!("pointer down: {button:?}");
        } else {
            log::trace!("pointer down: ignoring {button:?}");
        }
    }

    /// A pointer button went up.
    pub fn on_pointer_up(&mut self, button: MouseButton) {
        log::trace!("pointer up: {button:?} ({:?})", self.input.release_mode);
        match self.input.release_mode {
            ReleaseMode::AllButtons => self.drag.release_all(),
            ReleaseMode::PerButton => self.drag.release(button),
        }
    }

    /// The pointer moved to `(x, y)` in screen pixels.
    ///
    /// Held buttons apply in the order rotate (left), pan (middle), zoom
    /// (right), each against the state left by the previous one. Non-finite
    /// coordinates are dropped without touching any state.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if !x.is_finite() || !y.is_finite() {
            log::trace!("pointer move: ignoring non-finite ({x}, {y})");
            return;
        }

        let pointer = Vec2::new(x, y);
        let delta = self.drag.delta_to(pointer);

        if self.drag.is_held(MouseButton::Left) {
            self.rotate(delta);
        }
        if self.drag.is_held(MouseButton::Middle) {
            self.pan(delta);
        }
        if self.drag.is_held(MouseButton::Right) {
            self.zoom(delta.y);
        }

        self.drag.last_pointer = pointer;
    }

    /// Orbit by a pointer delta in pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        let speed = self.options.rotation_sensitivity;
        self.rig.azimuth -= delta.x * speed;
        self.rig.elevation = self
            .options
            .clamp_elevation(self.rig.elevation + delta.y * speed);
        log::trace!(
            "rotate by {delta}: azimuth {:.2}, elevation {:.2}",
            self.rig.azimuth,
            self.rig.elevation
        );
        self.recompute_position();
    }

    /// Slide the pivot across the horizontal plane by a pointer delta.
    pub fn pan(&mut self, delta: Vec2) {
        let speed = self.options.pan_sensitivity;
        let (forward, left) = self.rig.pan_axes();
        self.rig.origin += forward * (speed * delta.y) + left * (speed * delta.x);
        log::trace!("pan by {delta}: origin {}", self.rig.origin);
        self.recompute_position();
    }

    /// Move toward/away from the pivot by a vertical pointer delta.
    pub fn zoom(&mut self, delta: f32) {
        self.rig.radius = self
            .options
            .clamp_radius(self.rig.radius + delta * self.options.zoom_sensitivity);
        log::trace!("zoom by {delta}: radius {:.3}", self.rig.radius);
        self.recompute_position();
    }

    /// Surface size changed.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.aspect =
            aspect_ratio(width, height, self.options.aspect_mode);
        self.revision += 1;
        log::debug!(
            "camera resized to {width}x{height}, aspect {:.3}",
            self.camera.aspect
        );
    }

    /// Place the camera on the rig's sphere looking at the pivot.
    fn recompute_position(&mut self) {
        let eye = self.rig.eye();
        let target = self.rig.origin;
        if self.options.skip_unchanged
            && eye == self.camera.eye
            && target == self.camera.target
        {
            return;
        }

        self.camera.eye = eye;
        self.camera.target = target;
        self.camera.up = self.rig.up();
        self.revision += 1;
        log::debug!("camera eye {eye}, looking at {target}");
    }

    /// Distance from the camera to the pivot.
    #[must_use]
    pub fn distance_to_pivot(&self) -> f32 {
        self.camera.eye.distance(self.camera.target)
    }
}
