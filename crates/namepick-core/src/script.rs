//! Static script classification for language codes.
//!
//! Only non-Latin scripts are listed. A code that no script claims is
//! treated as Latin. The table is plain `const` data; nothing here mutates.

use std::fmt;

/// A non-Latin writing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Arabic,
    Armenian,
    Bengali,
    Cyrillic,
    Devanagari,
    Ethiopic,
    Georgian,
    Greek,
    Gujarati,
    Gurmukhi,
    Han,
    Hangul,
    Hebrew,
    Japanese,
    Kannada,
    Khmer,
    Lao,
    Malayalam,
    Myanmar,
    Sinhala,
    Tamil,
    Telugu,
    Thaana,
    Thai,
    Tibetan,
}

impl Script {
    /// Every script in the table, in declaration order.
    pub const ALL: [Script; 25] = [
        Script::Arabic,
        Script::Armenian,
        Script::Bengali,
        Script::Cyrillic,
        Script::Devanagari,
        Script::Ethiopic,
        Script::Georgian,
        Script::Greek,
        Script::Gujarati,
        Script::Gurmukhi,
        Script::Han,
        Script::Hangul,
        Script::Hebrew,
        Script::Japanese,
        Script::Kannada,
        Script::Khmer,
        Script::Lao,
        Script::Malayalam,
        Script::Myanmar,
        Script::Sinhala,
        Script::Tamil,
        Script::Telugu,
        Script::Thaana,
        Script::Thai,
        Script::Tibetan,
    ];

    /// ISO 15924 code used as a tag suffix, e.g. `name:sr-Cyrl`.
    pub fn tag(self) -> &'static str {
        self.suffixes()[0]
    }

    /// Every tag suffix marking a value written in this script, the
    /// canonical [`tag`](Self::tag) first.
    ///
    /// Han values are usually tagged with a simplified or traditional
    /// variant (`zh-Hans`, `zh-Hant`) rather than the generic `Hani`.
    pub fn suffixes(self) -> &'static [&'static str] {
        match self {
            Script::Arabic => &["Arab"],
            Script::Armenian => &["Armn"],
            Script::Bengali => &["Beng"],
            Script::Cyrillic => &["Cyrl"],
            Script::Devanagari => &["Deva"],
            Script::Ethiopic => &["Ethi"],
            Script::Georgian => &["Geor"],
            Script::Greek => &["Grek"],
            Script::Gujarati => &["Gujr"],
            Script::Gurmukhi => &["Guru"],
            Script::Han => &["Hani", "Hans", "Hant"],
            Script::Hangul => &["Kore"],
            Script::Hebrew => &["Hebr"],
            Script::Japanese => &["Jpan"],
            Script::Kannada => &["Knda"],
            Script::Khmer => &["Khmr"],
            Script::Lao => &["Laoo"],
            Script::Malayalam => &["Mlym"],
            Script::Myanmar => &["Mymr"],
            Script::Sinhala => &["Sinh"],
            Script::Tamil => &["Taml"],
            Script::Telugu => &["Telu"],
            Script::Thaana => &["Thaa"],
            Script::Thai => &["Thai"],
            Script::Tibetan => &["Tibt"],
        }
    }

    /// Language codes written in this script.
    pub fn siblings(self) -> &'static [&'static str] {
        match self {
            Script::Arabic => &[
                "ar", "arz", "azb", "ckb", "fa", "glk", "ks", "lrc", "mzn", "pnb", "ps", "sd",
                "ug", "ur",
            ],
            Script::Armenian => &["hy", "hyw"],
            Script::Bengali => &["as", "bn", "bpy"],
            Script::Cyrillic => &[
                "ba", "be", "bg", "ce", "cv", "kk", "kv", "ky", "mk", "mn", "os", "ru", "sah",
                "sr", "tg", "tt", "udm", "uk",
            ],
            Script::Devanagari => &["bh", "bho", "hi", "mai", "mr", "ne", "new", "sa"],
            Script::Ethiopic => &["am", "ti"],
            Script::Georgian => &["ka", "xmf"],
            Script::Greek => &["el", "pnt"],
            Script::Gujarati => &["gu"],
            Script::Gurmukhi => &["pa"],
            Script::Han => &["cdo", "gan", "hak", "lzh", "wuu", "yue", "zh"],
            Script::Hangul => &["ko"],
            Script::Hebrew => &["he", "yi"],
            Script::Japanese => &["ja"],
            Script::Kannada => &["kn"],
            Script::Khmer => &["km"],
            Script::Lao => &["lo"],
            Script::Malayalam => &["ml"],
            Script::Myanmar => &["my"],
            Script::Sinhala => &["si"],
            Script::Tamil => &["ta"],
            Script::Telugu => &["te"],
            Script::Thaana => &["dv"],
            Script::Thai => &["th"],
            Script::Tibetan => &["bo", "dz"],
        }
    }

    /// Whether `code` is listed as a sibling of this script.
    pub fn has_sibling(self, code: &str) -> bool {
        self.siblings().contains(&code)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Classify a language code. `None` means Latin.
///
/// An explicit script subtag decides (`sr-Latn` is Latin, `zh-hant` is
/// Han); otherwise the code, then its primary subtag, is looked up.
pub fn script_of(code: &str) -> Option<Script> {
    let mut subtags = code.split('-');
    let primary = subtags.next().unwrap_or_default();
    for subtag in subtags {
        if subtag.eq_ignore_ascii_case("Latn") {
            return None;
        }
        if let Some(script) = script_for_suffix(subtag) {
            return Some(script);
        }
    }
    find_sibling(code).or_else(|| find_sibling(primary))
}

fn script_for_suffix(subtag: &str) -> Option<Script> {
    Script::ALL.into_iter().find(|s| {
        s.suffixes()
            .iter()
            .any(|suffix| suffix.eq_ignore_ascii_case(subtag))
    })
}

fn find_sibling(code: &str) -> Option<Script> {
    Script::ALL.into_iter().find(|s| s.has_sibling(code))
}
