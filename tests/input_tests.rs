// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use grid_core::{LayoutMode, PointerState};
use input::*;

#[test]
fn client_corners_map_to_ndc() {
    let tl = PointerState::from_client(0.0, 0.0, 800.0, 600.0);
    assert_eq!((tl.x, tl.y), (-1.0, 1.0));
    let br = PointerState::from_client(800.0, 600.0, 800.0, 600.0);
    assert_eq!((br.x, br.y), (1.0, -1.0));
    let mid = PointerState::from_client(400.0, 300.0, 800.0, 600.0);
    assert_eq!((mid.x, mid.y), (0.0, 0.0));
}

#[test]
fn zero_sized_viewport_does_not_divide_by_zero() {
    let p = PointerState::from_client(0.5, 0.5, 0.0, -3.0);
    assert!(p.x.is_finite() && p.y.is_finite());
    assert_eq!((p.x, p.y), (0.0, 0.0));
}

#[test]
fn origin_is_top_left() {
    assert_eq!(PointerState::origin(), PointerState { x: -1.0, y: 1.0 });
    assert_eq!(PointerState::default(), PointerState::origin());
    assert_eq!(PointerState::origin().as_vec2(), glam::Vec2::new(-1.0, 1.0));
}

#[test]
fn pointer_ndc_is_relative_to_canvas() {
    let rect = CanvasRect {
        left: 100.0,
        top: 50.0,
        width: 400.0,
        height: 200.0,
    };
    let p = pointer_ndc(300.0, 150.0, rect);
    assert_eq!((p.x, p.y), (0.0, 0.0));
    let p = pointer_ndc(100.0, 250.0, rect);
    assert_eq!((p.x, p.y), (-1.0, -1.0));
}

#[test]
fn keys_map_to_commands() {
    assert_eq!(
        command_for_key("1", 0.5),
        Some(KeyCommand::SetLayout(LayoutMode::Crossed))
    );
    assert_eq!(
        command_for_key("2", 0.5),
        Some(KeyCommand::SetLayout(LayoutMode::Rectangular))
    );
    assert_eq!(command_for_key("[", 0.5), Some(KeyCommand::GutterStep(-0.5)));
    assert_eq!(command_for_key("]", 0.5), Some(KeyCommand::GutterStep(0.5)));
    assert_eq!(command_for_key("R", 0.5), Some(KeyCommand::Reshuffle));
    assert_eq!(command_for_key("b", 0.5), Some(KeyCommand::ToggleBloom));
    assert_eq!(command_for_key("h", 0.5), Some(KeyCommand::ToggleHint));
    assert_eq!(command_for_key("x", 0.5), None);
    assert_eq!(command_for_key("Enter", 0.5), None);
}

#[test]
fn gutter_steps_stay_in_range() {
    assert_eq!(stepped_gutter(5.0, 0.5, 1.0, 12.0), 5.5);
    assert_eq!(stepped_gutter(1.2, -0.5, 1.0, 12.0), 1.0);
    assert_eq!(stepped_gutter(11.8, 0.5, 1.0, 12.0), 12.0);
}
