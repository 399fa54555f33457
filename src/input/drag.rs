use glam::Vec2;

use super::event::MouseButton;

/// Set of held drag buttons. Only left, middle and right are tracked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonSet {
    bits: u8,
}

impl ButtonSet {
    fn bit(button: MouseButton) -> Option<u8> {
        match button {
            MouseButton::Left => Some(0b001),
            MouseButton::Middle => Some(0b010),
            MouseButton::Right => Some(0b100),
            MouseButton::Other(_) => None,
        }
    }

    /// Add a button. Returns `false` for untracked buttons.
    pub fn insert(&mut self, button: MouseButton) -> bool {
        if let Some(bit) = Self::bit(button) {
            self.bits |= bit;
            true
        } else {
            false
        }
    }

    /// Remove a single button.
    pub fn remove(&mut self, button: MouseButton) {
        if let Some(bit) = Self::bit(button) {
            self.bits &= !bit;
        }
    }

    /// Whether `button` is held.
    #[must_use]
    pub fn contains(self, button: MouseButton) -> bool {
        Self::bit(button).is_some_and(|bit| self.bits & bit != 0)
    }

    /// Drop every button.
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Whether no button is held.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }
}

/// Transient pointer state for an in-progress drag: which buttons are held
/// and where the pointer was last seen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    /// Buttons currently held.
    pub active: ButtonSet,
    /// Last observed pointer position in screen pixels.
    pub last_pointer: Vec2,
}

impl DragState {
    /// Create a drag state with no held buttons and the pointer at the
    /// screen origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a button press. Untracked buttons are ignored.
    pub fn press(&mut self, button: MouseButton) -> bool {
        self.active.insert(button)
    }

    /// Release one button.
    pub fn release(&mut self, button: MouseButton) {
        self.active.remove(button);
    }

    /// Release every button.
    pub fn release_all(&mut self) {
        self.active.clear();
    }

    /// Whether `button` is held.
    #[must_use]
    pub fn is_held(&self, button: MouseButton) -> bool {
        self.active.contains(button)
    }

    /// Offset of `pointer` from the last observed position.
    #[must_use]
    pub fn delta_to(&self, pointer: Vec2) -> Vec2 {
        pointer - self.last_pointer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_tracks_drag_buttons_only() {
        let mut drag = DragState::new();
        assert!(drag.press(MouseButton::Left));
        assert!(drag.press(MouseButton::Right));
        assert!(!drag.press(MouseButton::Other(4)));

        assert!(drag.is_held(MouseButton::Left));
        assert!(drag.is_held(MouseButton::Right));
        assert!(!drag.is_held(MouseButton::Middle));
        assert!(!drag.is_held(MouseButton::Other(4)));
    }

    #[test]
    fn release_variants() {
        let mut drag = DragState::new();
        let _ = drag.press(MouseButton::Left);
        let _ = drag.press(MouseButton::Middle);

        drag.release(MouseButton::Left);
        assert!(!drag.is_held(MouseButton::Left));
        assert!(drag.is_held(MouseButton::Middle));

        // Releasing an unknown button is a no-op
        drag.release(MouseButton::Other(3));
        assert!(drag.is_held(MouseButton::Middle));

        drag.release_all();
        assert!(drag.active.is_empty());
    }

    #[test]
    fn delta_is_relative_to_last_pointer() {
        let mut drag = DragState::new();
        assert_eq!(drag.delta_to(Vec2::new(3.0, -4.0)), Vec2::new(3.0, -4.0));

        drag.last_pointer = Vec2::new(100.0, 100.0);
        assert_eq!(drag.delta_to(Vec2::new(150.0, 90.0)), Vec2::new(50.0, -10.0));
    }
}
