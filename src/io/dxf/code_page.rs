//! `$DWGCODEPAGE` to `encoding_rs` encoding.
//!
//! Only consulted for files older than AC1021; later files are UTF-8.

use encoding_rs::Encoding;

/// Encoding for a DXF code page name, case-insensitive.
///
/// `None` means no transcoding is needed (ASCII or UTF-8). Unrecognized
/// names fall back to Windows-1252, the most common DXF code page.
pub fn encoding_from_code_page(code_page: &str) -> Option<&'static Encoding> {
    let name = code_page.trim().to_ascii_lowercase();
    if matches!(name.as_str(), "ascii" | "utf-8" | "utf8" | "unicode") {
        return None;
    }

    let label = if let Some(number) = name.strip_prefix("ansi_") {
        match number {
            "932" => "shift_jis".to_string(),
            "936" => "gbk".to_string(),
            "949" => "euc-kr".to_string(),
            "950" => "big5".to_string(),
            n => format!("windows-{n}"),
        }
    } else if let Some(number) = name.strip_prefix("dos") {
        // Closest single-byte encodings that encoding_rs provides
        match number {
            "437" | "855" | "866" => "ibm866".to_string(),
            "852" => "windows-1250".to_string(),
            "857" => "windows-1254".to_string(),
            "869" => "windows-1253".to_string(),
            _ => "windows-1252".to_string(),
        }
    } else if let Some(part) = name
        .strip_prefix("iso8859-")
        .or_else(|| name.strip_prefix("iso_8859-"))
    {
        format!("iso-8859-{part}")
    } else {
        match name.as_str() {
            "gb2312" => "gbk".to_string(),
            "korean" | "johab" => "euc-kr".to_string(),
            other => other.to_string(),
        }
    };

    Some(Encoding::for_label(label.as_bytes()).unwrap_or(encoding_rs::WINDOWS_1252))
}
