//! Fire-and-forget commentary requests to the text-generation service.
//!
//! The frame loop never waits on a response; whichever request resolves
//! last wins the display. Failures are logged and recovered locally.

use crate::constants::COMMENT_ID;
use crate::dom;
use instant::Instant;
use neon_core::{classify_failure, comment_prompt, AiFailure, CommentaryLimiter, FALLBACK_COMMENT};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Key for the generative-language service. Left empty in the repo;
/// commentary is skipped entirely until one is configured.
const API_KEY: &str = "";
const MODEL: &str = "gemini-2.5-flash";

fn endpoint() -> String {
    format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{MODEL}:generateContent?key={API_KEY}"
    )
}

/// Rate-limit and, if allowed, issue exactly one asynchronous request for a
/// milestone score. The comment element is updated whenever the response
/// lands, possibly several frames later.
pub fn request_comment(document: &web::Document, limiter: &mut CommentaryLimiter, score: u32) {
    if API_KEY.is_empty() {
        return;
    }
    if !limiter.try_acquire(Instant::now()) {
        return;
    }
    let document = document.clone();
    spawn_local(async move {
        match fetch_comment(score).await {
            Ok(text) => {
                let trimmed = text.trim();
                let shown = if trimmed.is_empty() {
                    FALLBACK_COMMENT
                } else {
                    trimmed
                };
                dom::set_text(&document, COMMENT_ID, shown);
            }
            Err(AiFailure::Config(msg)) => {
                // Key or model misconfiguration: keep whatever comment is
                // already on screen.
                log::error!("commentary request failed: {msg}");
            }
            Err(AiFailure::Service(msg)) => {
                log::error!("commentary request failed: {msg}");
                dom::set_text(&document, COMMENT_ID, "");
            }
        }
    });
}

async fn fetch_comment(score: u32) -> Result<String, AiFailure> {
    let body = request_body(&comment_prompt(score));

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));

    let request = web::Request::new_with_str_and_init(&endpoint(), &init)
        .map_err(|e| service_error(&e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| service_error(&e))?;
    let window = web::window().ok_or_else(|| AiFailure::Service("no window".into()))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| service_error(&e))?;
    let response: web::Response = response
        .dyn_into()
        .map_err(|_| AiFailure::Service("unexpected fetch result".into()))?;

    if !response.ok() {
        let status = response.status();
        let detail = match response.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        return Err(classify_failure(
            Some(status),
            &format!("status {status}: {detail}"),
        ));
    }

    let json = JsFuture::from(response.json().map_err(|e| service_error(&e))?)
        .await
        .map_err(|e| service_error(&e))?;
    // A well-formed but empty answer falls through to the fallback comment.
    Ok(candidate_text(&json).unwrap_or_default())
}

/// `{"contents":[{"role":"user","parts":[{"text": prompt}]}]}`
fn request_body(prompt: &str) -> String {
    let part = js_sys::Object::new();
    _ = js_sys::Reflect::set(&part, &"text".into(), &prompt.into());
    let content = js_sys::Object::new();
    _ = js_sys::Reflect::set(&content, &"role".into(), &"user".into());
    _ = js_sys::Reflect::set(&content, &"parts".into(), &js_sys::Array::of1(&part));
    let root = js_sys::Object::new();
    _ = js_sys::Reflect::set(&root, &"contents".into(), &js_sys::Array::of1(&content));
    js_sys::JSON::stringify(&root)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_default()
}

/// First candidate's first part, if the response carries one.
fn candidate_text(json: &JsValue) -> Option<String> {
    let candidates = js_sys::Reflect::get(json, &"candidates".into()).ok()?;
    let first = js_sys::Array::from(&candidates).get(0);
    let content = js_sys::Reflect::get(&first, &"content".into()).ok()?;
    let parts = js_sys::Reflect::get(&content, &"parts".into()).ok()?;
    let part = js_sys::Array::from(&parts).get(0);
    js_sys::Reflect::get(&part, &"text".into()).ok()?.as_string()
}

fn service_error(value: &JsValue) -> AiFailure {
    classify_failure(None, &format!("{value:?}"))
}
