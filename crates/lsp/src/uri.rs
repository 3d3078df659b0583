//! Conversion between `file://` URIs and filesystem paths.

use std::path::{Path, PathBuf};

use lsp_types::Uri;

/// Convert an LSP URI to a file system path.
///
/// Handles `file:///path/to/file` URIs by stripping the scheme and authority
/// and percent-decoding (e.g. `%20` → ` `).
pub fn uri_to_path(uri: &Uri) -> PathBuf {
    uri_str_to_path(uri.as_str())
}

/// Same as [`uri_to_path`] for a raw string; anything without a `file://`
/// scheme is taken as a plain path.
pub fn uri_str_to_path(uri_str: &str) -> PathBuf {
    let Some(path) = uri_str.strip_prefix("file://") else {
        return PathBuf::from(uri_str);
    };
    let decoded = percent_decode(path);
    // On Unix: file:///foo/bar -> /foo/bar
    // On Windows: file:///C:/foo -> C:/foo (strip leading /)
    #[cfg(windows)]
    {
        let decoded = decoded.strip_prefix('/').unwrap_or(&decoded);
        PathBuf::from(decoded)
    }
    #[cfg(not(windows))]
    {
        PathBuf::from(decoded)
    }
}

/// Build a `file://` URI for `path`.
pub fn path_to_uri(path: &Path) -> Result<Uri, String> {
    let raw = path.to_string_lossy();
    #[cfg(windows)]
    let raw = format!("/{}", raw.replace('\\', "/"));
    let uri_str = format!("file://{}", percent_encode(&raw));
    uri_str
        .parse::<Uri>()
        .map_err(|e| format!("invalid URI {uri_str}: {e:?}"))
}

/// Decode percent-encoded bytes; malformed escapes pass through unchanged.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(h), Some(l)) = (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                out.push(h << 4 | l);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' | b':' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
