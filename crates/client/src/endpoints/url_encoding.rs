//! Percent-encoding for identifiers interpolated into API paths.
//!
//! Pool, member, room and invite identifiers come from user input on the
//! command line. Encoding everything outside the RFC 3986 unreserved set keeps
//! an identifier inside its own path segment: `a/b` cannot reach a sibling
//! resource and `a?b` cannot start a query string.
//!
//! ```
//! use santa_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("42"), "42");
//! assert_eq!(encode_path_segment("../admin"), "..%2Fadmin");
//! ```

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except ALPHA / DIGIT / `-` / `.` / `_` / `~`.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode `segment` for use as a single URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}
