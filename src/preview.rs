//! Client-side file previews.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Inline `data:` URL for a just-selected file.
///
/// Runs entirely client-side, before (and independent of) any upload: forms
/// show the preview as soon as a file is picked.
pub fn data_url(file_name: &str, bytes: &[u8]) -> String {
    let mime = mime_guess::from_path(file_name).first_or_octet_stream();
    format!("data:{};base64,{}", mime.essence_str(), STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_carries_mime_and_payload() {
        let url = data_url("cat.png", b"abc");
        assert_eq!(url, "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_unknown_extension_defaults_to_octet_stream() {
        let url = data_url("mystery", b"");
        assert!(url.starts_with("data:application/octet-stream;base64,"));
    }
}
