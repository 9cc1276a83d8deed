use super::types::Key;

/// Key presses observed since the previous frame, in arrival order.
///
/// `InputState` holds what is currently down; `InputFrame` is drained by the
/// runtime after every frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys pressed this frame (auto-repeat included).
    pub keys_pressed: Vec<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
    }
}
