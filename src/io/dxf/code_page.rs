//! `$DWGCODEPAGE` handling for byte output
//!
//! Drawings before AC1021 store text in the code page named by the header;
//! from AC1021 on, DXF text is always UTF-8.

use crate::header::Header;
use ahash::AHashMap;
use encoding_rs::Encoding;
use once_cell::sync::Lazy;

/// First version whose text is always UTF-8
pub const UTF8_VERSION: &str = "AC1021";

/// Code page names (lower case) and their encodings
static CODE_PAGES: Lazy<AHashMap<&'static str, &'static Encoding>> = Lazy::new(|| {
    [
        ("ansi_874", encoding_rs::WINDOWS_874),
        ("ansi_932", encoding_rs::SHIFT_JIS),
        ("ansi_936", encoding_rs::GBK),
        ("ansi_949", encoding_rs::EUC_KR),
        ("ansi_950", encoding_rs::BIG5),
        ("ansi_1250", encoding_rs::WINDOWS_1250),
        ("ansi_1251", encoding_rs::WINDOWS_1251),
        ("ansi_1252", encoding_rs::WINDOWS_1252),
        ("ansi_1253", encoding_rs::WINDOWS_1253),
        ("ansi_1254", encoding_rs::WINDOWS_1254),
        ("ansi_1255", encoding_rs::WINDOWS_1255),
        ("ansi_1256", encoding_rs::WINDOWS_1256),
        ("ansi_1257", encoding_rs::WINDOWS_1257),
        ("ansi_1258", encoding_rs::WINDOWS_1258),
        ("gb2312", encoding_rs::GBK),
        ("big5", encoding_rs::BIG5),
        ("korean", encoding_rs::EUC_KR),
        ("johab", encoding_rs::EUC_KR),
        ("dos850", encoding_rs::WINDOWS_1252),
        ("dos852", encoding_rs::WINDOWS_1250),
        ("dos855", encoding_rs::IBM866),
        ("dos866", encoding_rs::IBM866),
        ("dos857", encoding_rs::WINDOWS_1254),
        ("dos869", encoding_rs::WINDOWS_1253),
        ("iso8859-1", encoding_rs::WINDOWS_1252),
        ("iso8859-2", encoding_rs::ISO_8859_2),
        ("iso8859-5", encoding_rs::ISO_8859_5),
        ("iso8859-7", encoding_rs::ISO_8859_7),
        ("iso8859-9", encoding_rs::WINDOWS_1254),
        ("iso8859-15", encoding_rs::ISO_8859_15),
        ("koi8-r", encoding_rs::KOI8_R),
        ("koi8-u", encoding_rs::KOI8_U),
    ]
    .into_iter()
    .collect()
});

/// Look up the encoding for a code page name, ignoring case
///
/// `None` means no transcoding: UTF-8 and ASCII names as well as names this
/// table does not know.
pub fn encoding_from_code_page(code_page: &str) -> Option<&'static Encoding> {
    let key = code_page.to_ascii_lowercase().replace("iso_", "iso");
    CODE_PAGES.get(key.as_str()).copied()
}

/// Whether a drawing of this version stores text in a code page
///
/// Version strings compare lexically (`AC1015` < `AC1021`).
pub fn uses_code_page(version: &str) -> bool {
    version.starts_with("AC") && version < UTF8_VERSION
}

/// Encoding to write the given header's document in, if not UTF-8
pub fn encoding_for_header(header: &Header) -> Option<&'static Encoding> {
    let version = header.version()?;
    if !uses_code_page(version) {
        return None;
    }
    encoding_from_code_page(header.code_page()?)
}
