//! Byte-to-text decoding for loaded resources.
//!
//! Backends fetch raw bytes; this module turns them into text using the
//! charset name configured for the compile invocation. Charset lookup is
//! by WHATWG encoding label, so the usual names (`UTF-8`, `ISO-8859-1`,
//! `windows-1251`, ...) all resolve. A leading BOM matching the charset
//! is stripped.

use encoding_rs::Encoding;

use crate::error::LoadError;

/// Decode raw resource bytes using a named charset.
///
/// Fails with [`LoadError::UnsupportedCharset`] when the name is not a
/// recognized encoding label, before any text is produced. Malformed byte
/// sequences under a valid charset decode to U+FFFD replacement
/// characters rather than failing the load.
pub fn decode(bytes: &[u8], charset: &str) -> Result<String, LoadError> {
    let encoding = Encoding::for_label(charset.as_bytes())
        .ok_or_else(|| LoadError::unsupported_charset(charset))?;
    let (text, _, _) = encoding.decode(bytes);
    Ok(text.into_owned())
}

/// Check whether a charset name is decodable at all.
///
/// Lets callers fail a compile before any backend I/O is attempted.
pub fn is_supported(charset: &str) -> bool {
    Encoding::for_label(charset.as_bytes()).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        let text = "Hello, 世界!";
        assert_eq!(decode(text.as_bytes(), "UTF-8").unwrap(), text);
    }

    #[test]
    fn test_decode_strips_bom() {
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice(b"body {}");
        assert_eq!(decode(&bytes, "UTF-8").unwrap(), "body {}");
    }

    #[test]
    fn test_decode_latin1() {
        // 0xE9 is 'é' in ISO-8859-1.
        assert_eq!(decode(&[0x63, 0x61, 0x66, 0xE9], "ISO-8859-1").unwrap(), "café");
    }

    #[test]
    fn test_unknown_charset() {
        let err = decode(b"body {}", "not-a-real-charset").unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedCharset { .. }));
    }

    #[test]
    fn test_malformed_bytes_replaced() {
        let text = decode(&[0xff, 0xfe, b'a'], "UTF-8").unwrap();
        assert!(text.ends_with('a'));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported("utf-8"));
        assert!(is_supported("windows-1251"));
        assert!(!is_supported("not-a-real-charset"));
    }
}
