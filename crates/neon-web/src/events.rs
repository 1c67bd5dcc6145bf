//! User-gesture wiring: the play/pause control and the audio file picker.

use crate::audio::{self, AnalyserLoudness};
use crate::constants::{
    AUDIO_INPUT_ID, AUDIO_LABEL_ID, LABEL_AUDIO_LOADED, LABEL_PAUSE, LABEL_PLAY, PLAY_BUTTON_ID,
};
use crate::dom;
use crate::frame::App;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_controls(document: &web::Document, app: &Rc<RefCell<App>>) {
    // Audio file picker: stash an object URL for the first play gesture.
    let app_file = app.clone();
    let doc_file = document.clone();
    dom::add_change_listener(document, AUDIO_INPUT_ID, move || {
        if let Some(url) = picked_file_url(&doc_file) {
            app_file.borrow_mut().audio_url = Some(url);
            dom::set_text(&doc_file, AUDIO_LABEL_ID, LABEL_AUDIO_LOADED);
        }
    });

    // Play/pause toggle. The audio graph is built on the first activation
    // because the context needs a user gesture; without a loaded track the
    // toggle still flips.
    let app_toggle = app.clone();
    let doc_toggle = document.clone();
    dom::add_click_listener(document, PLAY_BUTTON_ID, move || {
        let mut app = app_toggle.borrow_mut();
        if app.camera_error || app.loading {
            return;
        }
        if app.audio.is_none() {
            if let Some(url) = app.audio_url.clone() {
                if let Ok(chain) = audio::build_chain(&url) {
                    app.loudness = Some(AnalyserLoudness::new(chain.analyser.clone()));
                    app.audio = Some(chain);
                    log::info!("audio chain started");
                }
            }
        }
        let playing = app.session.toggle();
        dom::set_text(
            &doc_toggle,
            PLAY_BUTTON_ID,
            if playing { LABEL_PAUSE } else { LABEL_PLAY },
        );
        overlay::set_score(&doc_toggle, app.session.score);
    });
}

fn picked_file_url(document: &web::Document) -> Option<String> {
    let input = document
        .get_element_by_id(AUDIO_INPUT_ID)?
        .dyn_into::<web::HtmlInputElement>()
        .ok()?;
    let file = input.files()?.get(0)?;
    web::Url::create_object_url_with_blob(&file).ok()
}
