use crate::constants::{COMMENT_ID, ERROR_BANNER_ID, LOADING_OVERLAY_ID, SCORE_ID};
use crate::dom;
use web_sys as web;

#[inline]
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "display:none");
    }
}

/// Persistent camera-error banner; once shown it stays up.
pub fn show_error(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id(ERROR_BANNER_ID) {
        el.set_text_content(Some(message));
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        _ = el.set_attribute("style", "");
    }
}

pub fn set_score(document: &web::Document, score: u32) {
    dom::set_text(document, SCORE_ID, &format!("{score:04}"));
}

pub fn set_comment(document: &web::Document, text: &str) {
    dom::set_text(document, COMMENT_ID, text);
}
