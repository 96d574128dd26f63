use crate::constants::FACING_MODE;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Ask for the front camera and start playing it into a hidden `<video>`.
pub async fn open(document: &web::Document) -> anyhow::Result<(web::HtmlVideoElement, web::MediaStream)> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let devices = window.navigator().media_devices().map_err(js_err)?;

    let video_req = js_sys::Object::new();
    js_sys::Reflect::set(&video_req, &"facingMode".into(), &FACING_MODE.into()).map_err(js_err)?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_video(&video_req);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(js_err)?;
    let stream: web::MediaStream = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("camera permission denied or unavailable: {:?}", e))?
        .dyn_into()
        .map_err(js_err)?;

    let video: web::HtmlVideoElement = document
        .create_element("video")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    video.set_muted(true);
    _ = video.set_attribute("playsinline", "");
    _ = video.set_attribute("style", "display:none");
    video.set_src_object(Some(&stream));
    JsFuture::from(video.play().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    log::info!(
        "[camera] streaming {}x{}",
        video.video_width(),
        video.video_height()
    );
    Ok((video, stream))
}

pub fn stop(stream: &web::MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<web::MediaStreamTrack>() {
            track.stop();
        }
    }
    log::info!("[camera] stopped");
}
