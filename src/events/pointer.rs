use crate::dom;
use crate::input;
use grid_core::SceneState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<SceneState>>) {
    wire_pointermove(canvas, scene.clone());
    wire_touch(canvas, "touchstart", scene.clone());
    wire_touch(canvas, "touchmove", scene.clone());
    wire_touchend(canvas, scene);
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<SceneState>>) {
    let c = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = dom::canvas_rect(&c);
        let p = input::pointer_ndc(ev.client_x() as f32, ev.client_y() as f32, rect);
        scene.borrow_mut().set_pointer(p);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touch(canvas: &web::HtmlCanvasElement, event: &str, scene: Rc<RefCell<SceneState>>) {
    let c = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        // first finger only
        if let Some(t) = ev.touches().get(0) {
            let rect = dom::canvas_rect(&c);
            let p = input::pointer_ndc(t.client_x() as f32, t.client_y() as f32, rect);
            scene.borrow_mut().set_pointer(p);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchend(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<SceneState>>) {
    let closure = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
        scene.borrow_mut().reset_pointer();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Keep the canvas backing store in sync with its CSS size and queue a grid rebuild.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<SceneState>>) {
    let c = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&c);
        scene.borrow_mut().request_resize(w, h, Instant::now());
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
