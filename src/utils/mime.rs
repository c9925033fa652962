//! MIME utilities shared across modules

/// Returns whether a content-type header denotes an image.
#[must_use]
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type
        .trim_start()
        .to_ascii_lowercase()
        .starts_with("image/")
}

/// File extension for the `Content-Disposition` filename.
#[must_use]
pub fn extension_for_content_type(content_type: &str) -> &'static str {
    let ct = content_type.to_ascii_lowercase();
    if ct.contains("png") {
        "png"
    } else if ct.contains("jpeg") {
        "jpg"
    } else if ct.contains("gif") {
        "gif"
    } else if ct.contains("webp") {
        "webp"
    } else {
        "jpg"
    }
}
