//! Demo window for the orbit camera.
//!
//! Opens a winit window, feeds its mouse events to an
//! [`OrbitCameraController`] and logs the resulting camera state. Pass a
//! TOML preset path as the first argument to override the default options.
//! Set `RUST_LOG=debug` to see every recompute.

use std::{path::Path, sync::Arc};

use orbit_camera::{
    InputEvent, MouseButton, OrbitCameraController, OrbitError, Options,
};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

struct OrbitApp {
    window: Option<Arc<Window>>,
    controller: Option<OrbitCameraController>,
    options: Options,
    reported_revision: u64,
}

impl OrbitApp {
    fn new(options: Options) -> Self {
        Self {
            window: None,
            controller: None,
            options,
            reported_revision: 0,
        }
    }

    /// Log the camera once per change instead of once per event.
    fn report(&mut self) {
        let Some(controller) = &self.controller else {
            return;
        };
        if controller.revision() == self.reported_revision {
            return;
        }
        self.reported_revision = controller.revision();

        let rig = controller.rig();
        log::info!(
            "eye {:.3} | pivot {:.3} | radius {:.2} azimuth {:.1} elevation {:.1}",
            controller.camera().eye,
            rig.origin,
            rig.radius,
            rig.azimuth,
            rig.elevation
        );
    }
}

impl ApplicationHandler for OrbitApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes().with_title("Orbit Camera");
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        match OrbitCameraController::with_options(&*window, &self.options) {
            Ok(controller) => self.controller = Some(controller),
            Err(e) => {
                log::error!("{e}");
                event_loop.exit();
                return;
            }
        }
        self.window = Some(window);
        self.report();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        let Some(controller) = &mut self.controller else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::Resized(size) => {
                controller.resize(size.width, size.height);
            }
            WindowEvent::MouseInput { button, state, .. } => {
                let _ = controller.handle_input(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }
            WindowEvent::CursorMoved { position, .. } => {
                let _ = controller.handle_input(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }
            _ => return,
        }
        self.report();
    }
}

fn main() -> Result<(), OrbitError> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path))?,
        None => Options::default(),
    };

    let event_loop =
        EventLoop::new().map_err(|e| OrbitError::Viewer(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = OrbitApp::new(options);
    event_loop
        .run_app(&mut app)
        .map_err(|e| OrbitError::Viewer(e.to_string()))
}
