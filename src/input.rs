use grid_core::{LayoutMode, PointerState};

/// Canvas placement in client (CSS pixel) space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Pointer position relative to the canvas, in NDC.
#[inline]
pub fn pointer_ndc(client_x: f32, client_y: f32, rect: CanvasRect) -> PointerState {
    PointerState::from_client(client_x - rect.left, client_y - rect.top, rect.width, rect.height)
}

/// Stand-ins for the debug panel, driven from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyCommand {
    SetLayout(LayoutMode),
    GutterStep(f32),
    Reshuffle,
    ToggleBloom,
    ToggleHint,
}

#[inline]
pub fn command_for_key(key: &str, gutter_step: f32) -> Option<KeyCommand> {
    match key {
        "1" => Some(KeyCommand::SetLayout(LayoutMode::Crossed)),
        "2" => Some(KeyCommand::SetLayout(LayoutMode::Rectangular)),
        "[" | "-" => Some(KeyCommand::GutterStep(-gutter_step)),
        "]" | "=" | "+" => Some(KeyCommand::GutterStep(gutter_step)),
        "r" | "R" => Some(KeyCommand::Reshuffle),
        "b" | "B" => Some(KeyCommand::ToggleBloom),
        "h" | "H" => Some(KeyCommand::ToggleHint),
        _ => None,
    }
}

/// New gutter after a step, kept inside `[min, max]`.
#[inline]
pub fn stepped_gutter(current: f32, delta: f32, min: f32, max: f32) -> f32 {
    (current + delta).clamp(min, max)
}
