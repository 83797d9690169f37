use crate::constants::{GUTTER_MAX, GUTTER_MIN, GUTTER_STEP};
use crate::input::{command_for_key, stepped_gutter, KeyCommand};
use crate::overlay;
use grid_core::SceneState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Refresh the hint overlay after a grid or bloom change
fn update_hint_after_change(scene: &Rc<RefCell<SceneState>>, bloom: bool) {
    if let Some(document) = crate::dom::window_document() {
        let s = scene.borrow();
        overlay::update_hint(&document, &s.grid_config(), s.grid().len(), bloom);
    }
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    scene: &Rc<RefCell<SceneState>>,
    bloom: &Rc<RefCell<bool>>,
) {
    let Some(cmd) = command_for_key(&ev.key(), GUTTER_STEP) else {
        return;
    };
    let result = match cmd {
        KeyCommand::SetLayout(layout) => scene.borrow_mut().set_layout(layout),
        KeyCommand::GutterStep(delta) => {
            let mut s = scene.borrow_mut();
            let gutter = stepped_gutter(s.config().gutter, delta, GUTTER_MIN, GUTTER_MAX);
            s.set_gutter(gutter)
        }
        KeyCommand::Reshuffle => scene.borrow_mut().reshuffle(),
        KeyCommand::ToggleBloom => {
            let mut b = bloom.borrow_mut();
            *b = !*b;
            log::info!("[keys] bloom={}", *b);
            Ok(())
        }
        KeyCommand::ToggleHint => {
            if let Some(document) = crate::dom::window_document() {
                overlay::toggle(&document);
            }
            ev.prevent_default();
            return;
        }
    };
    if let Err(e) = result {
        log::warn!("[keys] {:?} rejected: {}", cmd, e);
        return;
    }
    update_hint_after_change(scene, *bloom.borrow());
}

pub fn wire_global_keydown(scene: Rc<RefCell<SceneState>>, bloom: Rc<RefCell<bool>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &scene, &bloom);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
