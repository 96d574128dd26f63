use crate::constants::{DETECTOR_NUM_HANDS, MODEL_ASSET_PATH, WASM_FILESET_URL};
use craft_core::{hands_from_flat, CraftError, HandLandmarks, LandmarkSource};
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(module = "/js/landmarker.js")]
extern "C" {
    pub type HandDetector;

    #[wasm_bindgen(catch, js_name = createHandDetector)]
    async fn create_hand_detector(
        fileset_url: &str,
        model_path: &str,
        num_hands: u32,
    ) -> Result<JsValue, JsValue>;

    /// Flat `x, y` pairs, 21 per detected hand.
    #[wasm_bindgen(catch, method)]
    fn detect(
        this: &HandDetector,
        video: &web::HtmlVideoElement,
        timestamp_ms: f64,
    ) -> Result<js_sys::Float32Array, JsValue>;
}

/// MediaPipe HandLandmarker in video mode, reading from a playing `<video>`.
pub struct MediaPipeHands {
    inner: HandDetector,
    video: web::HtmlVideoElement,
}

impl MediaPipeHands {
    pub async fn load(video: web::HtmlVideoElement) -> anyhow::Result<Self> {
        let inner = create_hand_detector(WASM_FILESET_URL, MODEL_ASSET_PATH, DETECTOR_NUM_HANDS)
            .await
            .map_err(|e| anyhow::anyhow!("hand landmarker failed to load: {:?}", e))?
            .unchecked_into::<HandDetector>();
        log::info!("[detector] hand landmarker ready ({} hands)", DETECTOR_NUM_HANDS);
        Ok(Self { inner, video })
    }
}

impl LandmarkSource for MediaPipeHands {
    fn detect(&mut self, now_ms: f64) -> craft_core::error::Result<Vec<HandLandmarks>> {
        let flat = self
            .inner
            .detect(&self.video, now_ms)
            .map_err(|e| CraftError::Detector(format!("{:?}", e)))?;
        hands_from_flat(&flat.to_vec())
    }
}
