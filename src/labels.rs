//! User-facing label lookup.
//!
//! A pure key→string table for the handful of strings the core surfaces to
//! people (alt text, terminal failure messages, copy confirmations). The
//! core never branches on the content of these strings; callers that want
//! different wording swap the table, not the call sites.

/// Looks up the user-facing string for `key`.
///
/// Unknown keys echo back unchanged so a missing entry degrades to
/// something visible rather than an empty message.
pub fn label(key: &str) -> &str {
    match key {
        "qr_alt_text" => "Generated QR code",
        "render_failed" => "No QR code could be rendered. Check your network connection and try again.",
        "download_failed" => {
            "Could not save the image. Right-click the QR code and choose \"Save image as\" instead."
        }
        "open_original" => "The image could not be re-encoded; open the original service URL instead",
        "copied_text" => "Payload copied to clipboard",
        "copied_image" => "Image copied to clipboard",
        "fallback_styling" => "Rendered by a fallback service; custom colors and logo are not applied",
        _ => key,
    }
}
