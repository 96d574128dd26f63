use crate::detector::MediaPipeHands;
use crate::dom;
use crate::mode::ViewMode;
use crate::render::CanvasPainter;
use craft_core::draw::skeleton_scene;
use craft_core::{
    DetectionThrottle, FramePipeline, LandmarkSource, ScreenHand, Viewport, WorldEvent,
    DETECT_INTERVAL_MS,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub pipeline: FramePipeline,
    pub detector: MediaPipeHands,
    pub mode: ViewMode,

    pub canvas: web::HtmlCanvasElement,
    pub video: web::HtmlVideoElement,
    pub painter: CanvasPainter,

    pub events: Vec<WorldEvent>,
    // skeleton viewer state; the world is not involved there
    pub skeleton_throttle: DetectionThrottle,
    pub skeleton_hands: Vec<ScreenHand>,
}

impl FrameContext {
    pub fn new(
        pipeline: FramePipeline,
        detector: MediaPipeHands,
        mode: ViewMode,
        canvas: web::HtmlCanvasElement,
        video: web::HtmlVideoElement,
        painter: CanvasPainter,
    ) -> Self {
        Self {
            pipeline,
            detector,
            mode,
            canvas,
            video,
            painter,
            events: Vec::new(),
            skeleton_throttle: DetectionThrottle::new(DETECT_INTERVAL_MS),
            skeleton_hands: Vec::new(),
        }
    }

    pub fn frame(&mut self) {
        let (w, h) = (self.video.video_width(), self.video.video_height());
        // metadata not loaded yet
        let Ok(viewport) = Viewport::new(w as f32, h as f32) else {
            return;
        };
        dom::sync_canvas_to_video(&self.canvas, w, h);
        let now = instant::now();

        let list = match self.mode {
            ViewMode::Craft => {
                self.pipeline
                    .frame(now, viewport, &mut self.detector, &mut self.events);
                for ev in self.events.drain(..) {
                    log_event(&ev);
                }
                self.pipeline.scene()
            }
            ViewMode::Skeleton => {
                if self.skeleton_throttle.ready(now) {
                    match self.detector.detect(now) {
                        Ok(hands) => {
                            self.skeleton_hands =
                                hands.iter().map(|h| h.to_screen(viewport)).collect();
                        }
                        Err(e) => log::warn!("[detector] {}", e),
                    }
                }
                skeleton_scene(&self.skeleton_hands)
            }
        };
        self.painter.paint(&list, &self.video, w as f64, h as f64);
    }
}

fn log_event(ev: &WorldEvent) {
    match ev {
        WorldEvent::Merged(m) => log::info!("[frame] merged into {}", m.kind),
        WorldEvent::Discovered(kind) => log::info!("[frame] discovered {}", kind),
        other => log::debug!("[frame] {:?}", other),
    }
}

/// Drive `frame_ctx` from requestAnimationFrame until `alive` is cleared.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, alive: Rc<Cell<bool>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !alive.get() {
            log::info!("[frame] loop stopped");
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
