use crate::constants::MAX_FRAME_DT_SEC;
use crate::render::{self, FrameInput};
use grid_core::SceneState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<SceneState>>,
    pub bloom: Rc<RefCell<bool>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_secs_f32(MAX_FRAME_DT_SEC));
        self.last_instant = now;

        let mut scene = self.scene.borrow_mut();
        match scene.tick(now, dt) {
            Ok(stats) if stats.rebuilt => {
                log::debug!("[frame] grid rebuilt, {} cells", scene.grid().len());
            }
            Ok(_) => {}
            Err(e) => log::error!("tick error: {}", e),
        }

        if let Some(g) = &mut self.gpu {
            g.set_bloom(*self.bloom.borrow());
            g.resize_if_needed(self.canvas.width(), self.canvas.height());

            let instances = scene.instances();
            let (camera_eye, view_proj) = scene.view_projection();
            let input = FrameInput {
                instances: &instances,
                camera_eye,
                view_proj,
                material: &scene.config().material,
            };
            if let Err(e) = g.render(&input) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas.clone()).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
