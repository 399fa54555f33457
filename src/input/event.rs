/// Platform-agnostic input events.
///
/// These are fed into
/// [`OrbitCameraController::handle_input`](crate::OrbitCameraController::handle_input),
/// which routes them to the pointer handlers.
///
/// # Example
///
/// ```
/// use orbit_camera::{InputEvent, MouseButton, OrbitCameraController};
///
/// let mut controller = OrbitCameraController::new(&(1280_u32, 720_u32));
/// let _ = controller.handle_input(InputEvent::MouseButton {
///     button: MouseButton::Right,
///     pressed: true,
/// });
/// let _ = controller.handle_input(InputEvent::CursorMoved { x: 0.0, y: 50.0 });
/// assert!((controller.rig().radius - 5.0).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in screen pixels.
        x: f32,
        /// Vertical position in screen pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button. Drags rotate the camera.
    Left,
    /// Secondary (right) mouse button. Drags zoom.
    Right,
    /// Middle mouse button (wheel click). Drags pan the pivot.
    Middle,
    /// Any other button, identified by its DOM-style index. Ignored by the
    /// controller.
    Other(u16),
}

impl MouseButton {
    /// Map a DOM-style button index (`0` left, `1` middle, `2` right).
    #[must_use]
    pub fn from_index(index: u16) -> Self {
        match index {
            0 => Self::Left,
            1 => Self::Middle,
            2 => Self::Right,
            n => Self::Other(n),
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Back => Self::Other(3),
            winit::event::MouseButton::Forward => Self::Other(4),
            winit::event::MouseButton::Other(n) => Self::Other(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_indices_map_to_buttons() {
        assert_eq!(MouseButton::from_index(0), MouseButton::Left);
        assert_eq!(MouseButton::from_index(1), MouseButton::Middle);
        assert_eq!(MouseButton::from_index(2), MouseButton::Right);
        assert_eq!(MouseButton::from_index(7), MouseButton::Other(7));
    }

    #[cfg(feature = "viewer")]
    #[test]
    fn winit_buttons_convert() {
        use winit::event::MouseButton as WinitButton;

        assert_eq!(MouseButton::from(WinitButton::Middle), MouseButton::Middle);
        assert_eq!(MouseButton::from(WinitButton::Back), MouseButton::Other(3));
        assert_eq!(
            MouseButton::from(WinitButton::Other(9)),
            MouseButton::Other(9)
        );
    }
}
