//! Encoding helpers

use encoding_rs::Encoding;
use super::types::error::{WordListError, Result};

/// Resolve a WHATWG encoding label (`"utf-8"`, `"latin1"`, `"gbk"`, ...).
///
/// GBK and GB2312 labels are widened to GB18030, a strict superset that
/// decodes every file the narrower charsets produce.
pub fn parse_encoding(label: &str) -> Result<&'static Encoding> {
    let normalized = label.trim().to_ascii_lowercase();
    let label = match normalized.as_str() {
        "gbk" | "gb2312" => "gb18030",
        other => other,
    };
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| WordListError::UnsupportedEncoding(label.to_string()))
}

/// Decode one line, rejecting malformed byte sequences.
///
/// Returns `None` when the bytes are not valid in `encoding`.
pub fn decode_strict(bytes: &[u8], encoding: &'static Encoding) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}
