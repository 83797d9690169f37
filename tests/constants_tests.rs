// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn gutter_controls_bracket_default() {
    assert!(GUTTER_STEP > 0.0);
    assert!(GUTTER_MIN > 0.0);
    assert!(GUTTER_MIN < grid_core::DEFAULT_GUTTER);
    assert!(grid_core::DEFAULT_GUTTER < GUTTER_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn post_and_frame_settings_are_sane() {
    assert!(BLOOM_STRENGTH >= 0.0 && BLOOM_STRENGTH <= 2.0);
    assert!(BLOOM_THRESHOLD > 0.0 && BLOOM_THRESHOLD < 1.0);
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC < 1.0);
    assert!(INITIAL_INSTANCE_CAPACITY > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lights_reach_the_grid() {
    // spot light sits between the floor and the camera
    assert!(SPOT_LIGHT_HEIGHT > grid_core::PEAK_HEIGHT);
    assert!(SPOT_LIGHT_HEIGHT < grid_core::CAMERA_HEIGHT);
    assert!(POINT_LIGHT_RANGE > 100.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_falloff_is_ordered() {
    use grid_core::*;
    assert!(FALLOFF_START > FALLOFF_END);
    assert!(PEAK_HEIGHT > MIN_HEIGHT);
    assert!(SCALE_DIVISOR > 0.0);
    assert!(CAMERA_ZNEAR < CAMERA_HEIGHT && CAMERA_HEIGHT < CAMERA_ZFAR);
}

#[test]
fn dom_ids_are_set() {
    assert!(!CANVAS_ID.is_empty());
    assert_ne!(CANVAS_ID, HINT_ID);
}

#[test]
fn spot_shadow_covers_visible_floor() {
    use glam::Vec3;
    use grid_core::*;
    assert!(FLOOR_SHADOW_OPACITY > 0.0 && FLOOR_SHADOW_OPACITY < 1.0);
    assert!(SHADOW_MAP_SIZE.is_power_of_two());

    // the 16:9 view of the floor fits inside the light's shadow frustum
    let light = Camera::top_down(SPOT_LIGHT_HEIGHT, SPOT_SHADOW_FOV_DEG, 1.0);
    let visible = visible_size(CAMERA_HEIGHT, CAMERA_FOV_DEG, 16.0 / 9.0, 0.0);
    let (hw, hh) = (visible.width * 0.5, visible.height * 0.5);
    assert!(FLOOR_SIZE * 0.5 > hw);
    for corner in [
        Vec3::new(-hw, 0.0, -hh),
        Vec3::new(hw, 0.0, hh),
        Vec3::new(hw, PEAK_HEIGHT, -hh),
    ] {
        let clip = light.view_projection() * corner.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0, "{:?}", ndc);
        assert!(ndc.z > 0.0 && ndc.z < 1.0, "{:?}", ndc);
    }
}
