//! Text encodings for raw file content.
//!
//! Raw file nodes declare the encoding their bytes are stored in. Decoding is
//! strict: unlike lossy decoding, malformed input is reported instead of being
//! replaced with U+FFFD, so a misdeclared file surfaces as an error at render
//! time.

use std::borrow::Cow;
use std::fmt;

/// An encoding a raw file may be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
    /// Windows-1252, which is also what `latin1`/`iso-8859-1` labels resolve to.
    Windows1252,
    Iso8859_2,
    ShiftJis,
    EucJp,
    Gb18030,
    Big5,
    EucKr,
}

impl Encoding {
    /// Look up an encoding by one of its WHATWG labels (case-insensitive,
    /// surrounding whitespace ignored).
    ///
    /// Returns `None` for unknown labels and for encodings that are not
    /// part of this set.
    pub fn for_label(label: &str) -> Option<Self> {
        let encoding = encoding_rs::Encoding::for_label(label.as_bytes())?;
        [
            Self::Utf8,
            Self::Utf16Le,
            Self::Utf16Be,
            Self::Windows1252,
            Self::Iso8859_2,
            Self::ShiftJis,
            Self::EucJp,
            Self::Gb18030,
            Self::Big5,
            Self::EucKr,
        ]
        .into_iter()
        .find(|candidate| candidate.as_encoding_rs() == encoding)
    }

    /// The canonical name of the encoding.
    pub fn name(self) -> &'static str {
        self.as_encoding_rs().name()
    }

    fn as_encoding_rs(self) -> &'static encoding_rs::Encoding {
        match self {
            Self::Utf8 => encoding_rs::UTF_8,
            Self::Utf16Le => encoding_rs::UTF_16LE,
            Self::Utf16Be => encoding_rs::UTF_16BE,
            Self::Windows1252 => encoding_rs::WINDOWS_1252,
            Self::Iso8859_2 => encoding_rs::ISO_8859_2,
            Self::ShiftJis => encoding_rs::SHIFT_JIS,
            Self::EucJp => encoding_rs::EUC_JP,
            Self::Gb18030 => encoding_rs::GB18030,
            Self::Big5 => encoding_rs::BIG5,
            Self::EucKr => encoding_rs::EUC_KR,
        }
    }

    /// Decode `bytes` under this encoding.
    ///
    /// A byte order mark matching this encoding is stripped. Returns `None`
    /// if the input is malformed. Uses `Cow<str>` to avoid allocation when
    /// the input is valid UTF-8.
    pub fn decode(self, bytes: &[u8]) -> Option<Cow<'_, str>> {
        let (result, malformed) = self.as_encoding_rs().decode_with_bom_removal(bytes);
        if malformed { None } else { Some(result) }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        assert_eq!(
            Encoding::Utf8.decode("Hello, World!".as_bytes()).as_deref(),
            Some("Hello, World!")
        );
    }

    #[test]
    fn test_decode_utf8_borrows() {
        let bytes = b"borrowed";
        assert!(matches!(
            Encoding::Utf8.decode(bytes),
            Some(Cow::Borrowed("borrowed"))
        ));
    }

    #[test]
    fn test_decode_utf8_strips_bom() {
        assert_eq!(
            Encoding::Utf8.decode(b"\xEF\xBB\xBFhi").as_deref(),
            Some("hi")
        );
    }

    #[test]
    fn test_decode_utf8_rejects_malformed() {
        assert_eq!(Encoding::Utf8.decode(b"caf\xE9"), None);
    }

    #[test]
    fn test_decode_windows_1252() {
        assert_eq!(
            Encoding::Windows1252.decode(b"caf\xE9").as_deref(),
            Some("café")
        );
    }

    #[test]
    fn test_decode_utf16le_with_bom() {
        let bytes = [0xFF, 0xFE, b'h', 0x00, b'i', 0x00];
        assert_eq!(Encoding::Utf16Le.decode(&bytes).as_deref(), Some("hi"));
    }

    #[test]
    fn test_decode_utf16be() {
        let bytes = [0x00, b'o', 0x00, b'k'];
        assert_eq!(Encoding::Utf16Be.decode(&bytes).as_deref(), Some("ok"));
    }

    #[test]
    fn test_decode_utf16_odd_length_is_malformed() {
        assert_eq!(Encoding::Utf16Le.decode(&[b'h', 0x00, b'i']), None);
    }

    #[test]
    fn test_for_label() {
        assert_eq!(Encoding::for_label("utf-8"), Some(Encoding::Utf8));
        assert_eq!(Encoding::for_label(" UTF8 "), Some(Encoding::Utf8));
        assert_eq!(Encoding::for_label("latin1"), Some(Encoding::Windows1252));
        assert_eq!(Encoding::for_label("sjis"), Some(Encoding::ShiftJis));
        assert_eq!(Encoding::for_label("utf-16"), Some(Encoding::Utf16Le));
        assert_eq!(Encoding::for_label("klingon"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Encoding::Utf8.to_string(), "UTF-8");
        assert_eq!(Encoding::Windows1252.to_string(), "windows-1252");
        assert_eq!(Encoding::default(), Encoding::Utf8);
    }
}
