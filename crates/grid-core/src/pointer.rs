/// Last known pointer position in normalized device coordinates.
///
/// Input handlers overwrite it; the frame reads it once. There is no queue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// NDC from client-space pixels. Y grows upwards in NDC.
    pub fn from_client(client_x: f32, client_y: f32, width: f32, height: f32) -> Self {
        let w = if width > 0.0 { width } else { 1.0 };
        let h = if height > 0.0 { height } else { 1.0 };
        Self {
            x: (client_x / w) * 2.0 - 1.0,
            y: -(client_y / h) * 2.0 + 1.0,
        }
    }

    /// The value a pointer at the client origin maps to. Used at start-up and
    /// when a touch ends.
    pub fn origin() -> Self {
        Self::from_client(0.0, 0.0, 1.0, 1.0)
    }

    pub fn as_vec2(&self) -> glam::Vec2 {
        glam::Vec2::new(self.x, self.y)
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::origin()
    }
}
