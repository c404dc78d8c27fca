//! Character set registry.
//!
//! Maps a Firebird character set name to the decoder that turns its bytes
//! into UTF-8. The table is built once and never changes; adding an encoding
//! is one more `insert`.
//!
//! Some entries read through another code page's decoder:
//!
//! - `ISO8859_4` decodes as ISO-8859-5
//! - `WIN1253` and `WIN1254` decode as Windows-1252
//! - `GB_2312` decodes as GBK

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use encoding_rs::Encoding;

/// Turns bytes of one character set into a UTF-8 string.
///
/// Malformed input is never an error: unmappable bytes become U+FFFD.
pub trait CharsetDecoder: Send + Sync {
    /// Label of the underlying encoding.
    fn encoding_name(&self) -> &'static str;

    fn decode_to_utf8(&self, raw: &[u8]) -> String;
}

/// How a declared character set is read.
pub enum Charset {
    /// Bytes pass through untouched.
    Octets,
    Decoder(Box<dyn CharsetDecoder>),
}

impl Charset {
    fn decoder(decoder: impl CharsetDecoder + 'static) -> Self {
        Charset::Decoder(Box::new(decoder))
    }

    fn legacy(encoding: &'static Encoding) -> Self {
        Charset::decoder(Legacy(encoding))
    }

    /// Label of the underlying encoding, `"octets"` for passthrough.
    pub fn encoding_name(&self) -> &'static str {
        match self {
            Charset::Octets => "octets",
            Charset::Decoder(d) => d.encoding_name(),
        }
    }
}

impl std::fmt::Debug for Charset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Charset({})", self.encoding_name())
    }
}

struct Utf8;

impl CharsetDecoder for Utf8 {
    fn encoding_name(&self) -> &'static str {
        "UTF-8"
    }

    fn decode_to_utf8(&self, raw: &[u8]) -> String {
        String::from_utf8_lossy(raw).into_owned()
    }
}

/// ISO-8859-1: every byte is its own code point.
struct Latin1;

impl CharsetDecoder for Latin1 {
    fn encoding_name(&self) -> &'static str {
        "ISO-8859-1"
    }

    fn decode_to_utf8(&self, raw: &[u8]) -> String {
        encoding_rs::mem::decode_latin1(raw).into_owned()
    }
}

/// ISO-8859-9: Windows-1254 without the graphic characters at 0x80..=0x9F,
/// which are C1 controls in the ISO table.
struct Latin5;

impl CharsetDecoder for Latin5 {
    fn encoding_name(&self) -> &'static str {
        "ISO-8859-9"
    }

    fn decode_to_utf8(&self, raw: &[u8]) -> String {
        let mut out = String::with_capacity(raw.len());
        for run in raw.chunk_by(|a, b| is_c1(*a) == is_c1(*b)) {
            if is_c1(run[0]) {
                out.extend(run.iter().map(|&b| char::from(b)));
            } else {
                out.push_str(&decode_lossy(encoding_rs::WINDOWS_1254, run));
            }
        }
        out
    }
}

fn is_c1(byte: u8) -> bool {
    (0x80..=0x9f).contains(&byte)
}

/// Any single or multi-byte encoding `encoding_rs` knows.
struct Legacy(&'static Encoding);

impl CharsetDecoder for Legacy {
    fn encoding_name(&self) -> &'static str {
        self.0.name()
    }

    fn decode_to_utf8(&self, raw: &[u8]) -> String {
        decode_lossy(self.0, raw).into_owned()
    }
}

fn decode_lossy<'a>(encoding: &'static Encoding, raw: &'a [u8]) -> Cow<'a, str> {
    let (text, _had_errors) = encoding.decode_without_bom_handling(raw);
    text
}

static REGISTRY: LazyLock<HashMap<&'static str, Charset>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert("OCTETS", Charset::Octets);
    m.insert("UTF8", Charset::decoder(Utf8));
    m.insert("UNICODE_FSS", Charset::decoder(Utf8));

    // Japanese
    m.insert("SJIS_0208", Charset::legacy(encoding_rs::SHIFT_JIS));
    m.insert("EUCJ_0208", Charset::legacy(encoding_rs::EUC_JP));

    // ISO-8859
    m.insert("ISO8859_1", Charset::decoder(Latin1));
    m.insert("ISO8859_2", Charset::legacy(encoding_rs::ISO_8859_2));
    m.insert("ISO8859_3", Charset::legacy(encoding_rs::ISO_8859_3));
    m.insert("ISO8859_4", Charset::legacy(encoding_rs::ISO_8859_5));
    m.insert("ISO8859_5", Charset::legacy(encoding_rs::ISO_8859_5));
    m.insert("ISO8859_6", Charset::legacy(encoding_rs::ISO_8859_6));
    m.insert("ISO8859_7", Charset::legacy(encoding_rs::ISO_8859_7));
    m.insert("ISO8859_8", Charset::legacy(encoding_rs::ISO_8859_8));
    m.insert("ISO8859_9", Charset::decoder(Latin5));
    m.insert("ISO8859_13", Charset::legacy(encoding_rs::ISO_8859_13));

    // Windows code pages
    m.insert("WIN1250", Charset::legacy(encoding_rs::WINDOWS_1250));
    m.insert("WIN1251", Charset::legacy(encoding_rs::WINDOWS_1251));
    m.insert("WIN1252", Charset::legacy(encoding_rs::WINDOWS_1252));
    m.insert("WIN1253", Charset::legacy(encoding_rs::WINDOWS_1252));
    m.insert("WIN1254", Charset::legacy(encoding_rs::WINDOWS_1252));
    m.insert("WIN1255", Charset::legacy(encoding_rs::WINDOWS_1255));
    m.insert("WIN1256", Charset::legacy(encoding_rs::WINDOWS_1256));
    m.insert("WIN1257", Charset::legacy(encoding_rs::WINDOWS_1257));
    m.insert("WIN1258", Charset::legacy(encoding_rs::WINDOWS_1258));

    // CJK
    m.insert("KSC_5601", Charset::legacy(encoding_rs::EUC_KR));
    m.insert("BIG_5", Charset::legacy(encoding_rs::BIG5));
    m.insert("GB_2312", Charset::legacy(encoding_rs::GBK));

    // Cyrillic
    m.insert("KOI8R", Charset::legacy(encoding_rs::KOI8_R));
    m.insert("KOI8U", Charset::legacy(encoding_rs::KOI8_U));

    m
});

static FALLBACK: LazyLock<Charset> = LazyLock::new(|| Charset::decoder(Utf8));

/// Registered charset for `name`, or `None` if the name is not known.
pub fn get(name: &str) -> Option<&'static Charset> {
    REGISTRY.get(name)
}

/// Charset for `name`; unknown names read as UTF-8.
pub fn lookup(name: &str) -> &'static Charset {
    get(name).unwrap_or(&*FALLBACK)
}

/// All registered names, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}
