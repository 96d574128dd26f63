use crate::constants::STATUS_OVERLAY_ID;
use web_sys as web;

#[inline]
pub fn show_message(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id(STATUS_OVERLAY_ID) {
        el.set_text_content(Some(message));
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(STATUS_OVERLAY_ID) {
        _ = el.set_attribute("style", "display:none");
    }
}

/// Setup failed; the loop never starts, so the message stays up.
pub fn show_error(document: &web::Document, err: &anyhow::Error) {
    show_message(document, &format!("Could not start: {err}"));
}
