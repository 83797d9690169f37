#![cfg(target_arch = "wasm32")]
use grid_core::{default_shape_pool, SceneConfig, SceneState, Viewport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("grid-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    let (width, height) = dom::sync_canvas_backing_size(&canvas);

    // Fresh shapes on every page load
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let config = SceneConfig {
        seed,
        ..SceneConfig::default()
    };
    let scene = SceneState::new(config, Viewport::new(width, height), default_shape_pool())
        .map_err(|e| anyhow::anyhow!("scene setup failed: {}", e))?;
    let scene = Rc::new(RefCell::new(scene));
    let bloom = Rc::new(RefCell::new(true));

    overlay::update_hint(
        &document,
        &scene.borrow().grid_config(),
        scene.borrow().grid().len(),
        *bloom.borrow(),
    );

    events::wire_resize(&canvas, scene.clone());
    events::wire_pointer_handlers(&canvas, scene.clone());
    events::wire_global_keydown(scene.clone(), bloom.clone());

    // Without WebGPU the scene still ticks; nothing is drawn
    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        bloom,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
