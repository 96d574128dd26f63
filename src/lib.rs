#![cfg(target_arch = "wasm32")]
use craft_core::{FramePipeline, RecipeBook, Tuning, Viewport, World};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod detector;
mod dom;
mod frame;
mod mode;
mod overlay;
mod render;

use constants::{CANVAS_ID, LOADING_MESSAGE};
use mode::ViewMode;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("craft-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some(document) = dom::window_document() {
                overlay::show_error(&document, &e);
            }
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
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let painter = render::CanvasPainter::new(&canvas)?;

    overlay::show_message(&document, LOADING_MESSAGE);

    // Camera and detector are both required; any failure here is fatal and
    // the frame loop is never started.
    let (video, stream) = camera::open(&document).await?;
    let detector = detector::MediaPipeHands::load(video.clone()).await?;
    overlay::hide(&document);

    let mode = ViewMode::from_fragment(&dom::location_hash());
    let viewport = Viewport::new(video.video_width().max(1) as f32, video.video_height().max(1) as f32)?;
    let world = World::new(Tuning::default(), RecipeBook::classic(), viewport);
    log::info!(
        "[frame] mode={:?} viewport={}x{} palette={}",
        mode,
        viewport.width,
        viewport.height,
        world.discovered().len()
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        FramePipeline::new(world),
        detector,
        mode,
        canvas,
        video,
        painter,
    )));

    // Tear down with the page: stop scheduling frames and release the camera.
    let alive = Rc::new(Cell::new(true));
    let alive_teardown = alive.clone();
    dom::add_window_listener("pagehide", move || {
        if alive_teardown.replace(false) {
            camera::stop(&stream);
        }
    });

    frame::start_loop(frame_ctx, alive);
    Ok(())
}
