//! Gateway proxy response builders.
//!
//! Every response carries permissive CORS headers and the shared
//! `Cache-Control` policy.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value, json};

use crate::core::constants::{CACHE_CONTROL, FILENAME_STEM};
use crate::core::models::{FetchedImage, ResolveFailure, ResolvedImage};

// ============================================================================
// Headers
// ============================================================================

#[must_use]
pub fn base_headers() -> Map<String, Value> {
    let mut headers = Map::new();
    headers.insert("Access-Control-Allow-Origin".into(), json!("*"));
    headers.insert("Access-Control-Allow-Methods".into(), json!("GET,OPTIONS"));
    headers.insert("Access-Control-Allow-Headers".into(), json!("Content-Type"));
    headers.insert("Cache-Control".into(), json!(CACHE_CONTROL));
    headers
}

#[must_use]
pub fn content_disposition(extension: &str) -> String {
    format!("inline; filename=\"{FILENAME_STEM}.{extension}\"")
}

// ============================================================================
// Response Builders
// ============================================================================

/// Empty 204 for CORS preflight.
#[must_use]
pub fn preflight() -> Value {
    json!({
        "statusCode": 204,
        "headers": base_headers(),
        "body": "",
        "isBase64Encoded": false
    })
}

#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> Value {
    let mut headers = base_headers();
    headers.insert("Content-Type".into(), json!("application/json"));
    json!({
        "statusCode": status_code,
        "headers": headers,
        "body": body.to_string(),
        "isBase64Encoded": false
    })
}

/// 200 carrying the image bytes, base64-encoded for the gateway.
#[must_use]
pub fn image_response(image: &FetchedImage) -> Value {
    let mut headers = base_headers();
    headers.insert("Content-Type".into(), json!(image.content_type));
    headers.insert(
        "Content-Disposition".into(),
        json!(content_disposition(image.extension)),
    );
    json!({
        "statusCode": 200,
        "headers": headers,
        "body": STANDARD.encode(&image.bytes),
        "isBase64Encoded": true
    })
}

#[must_use]
pub fn debug_body(resolved: &ResolvedImage) -> Value {
    match resolved.candidates {
        Some(candidates) => json!({
            "ok": true,
            "source": resolved.source,
            "candidates": candidates,
            "picked": resolved.url,
            "content_type": resolved.image.content_type
        }),
        None => json!({
            "ok": true,
            "source": resolved.source,
            "image": resolved.url,
            "content_type": resolved.image.content_type
        }),
    }
}

#[must_use]
pub fn debug_response(resolved: &ResolvedImage) -> Value {
    json_response(200, &debug_body(resolved))
}

#[must_use]
pub fn failure_response(failure: &ResolveFailure) -> Value {
    let mut body = json!({ "ok": false, "error": failure.error });
    if let Some(candidates) = failure.candidates {
        body["candidates"] = json!(candidates);
    }
    json_response(failure.status_code, &body)
}

/// Returns an error response with the given status code and reason.
#[must_use]
pub fn err_response(status_code: u16, reason: &str) -> Value {
    json_response(status_code, &json!({ "ok": false, "error": reason }))
}
