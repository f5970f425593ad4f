//! Decoding and payload extraction for raw runner output.

use specter_proto::{DiscoveryError, Result};

/// Decodes captured stdout, failing when the runner wrote nothing or
/// wrote bytes that are not valid UTF-8. Stderr is attached to the
/// no-output failure so callers can see what the runner actually said.
pub fn decode_stdout(stdout: &[u8], stderr: &[u8]) -> Result<String> {
    if stdout.is_empty() {
        return Err(DiscoveryError::NoOutput {
            stderr: decode_lossy(stderr),
        });
    }
    String::from_utf8(stdout.to_vec()).map_err(|_| DiscoveryError::UndecodableOutput)
}

/// Lossy decoding for diagnostic streams.
pub fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Cuts the report payload out of decoded runner output.
///
/// Runners are free to append notices after the JSON document, so the
/// payload ends at the last closing brace. Output without any closing
/// brace cannot contain a report.
pub fn extract_payload(text: &str) -> Result<&str> {
    match text.rfind('}') {
        Some(idx) => Ok(&text[..=idx]),
        None => Err(DiscoveryError::MalformedPayload {
            reason: String::from("no closing brace in runner output"),
        }),
    }
}
