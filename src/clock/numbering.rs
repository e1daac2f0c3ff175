/// Decimal digit sets a locale can render numbers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberingSystem {
    Latn,
    Arab,
    ArabExt,
    Beng,
    Deva,
    Fullwide,
    Gujr,
    Guru,
    Khmr,
    Knda,
    Laoo,
    Mlym,
    Mong,
    Mymr,
    Orya,
    TamlDec,
    Telu,
    Thai,
    Tibt,
}

impl NumberingSystem {
    /// Parses a Unicode `nu` keyword value such as `arab` or `deva`.
    pub fn from_keyword(value: &str) -> Option<Self> {
        let ns = match value.to_ascii_lowercase().as_str() {
            "latn" => Self::Latn,
            "arab" => Self::Arab,
            "arabext" => Self::ArabExt,
            "beng" => Self::Beng,
            "deva" => Self::Deva,
            "fullwide" => Self::Fullwide,
            "gujr" => Self::Gujr,
            "guru" => Self::Guru,
            "khmr" => Self::Khmr,
            "knda" => Self::Knda,
            "laoo" => Self::Laoo,
            "mlym" => Self::Mlym,
            "mong" => Self::Mong,
            "mymr" => Self::Mymr,
            "orya" => Self::Orya,
            "tamldec" => Self::TamlDec,
            "telu" => Self::Telu,
            "thai" => Self::Thai,
            "tibt" => Self::Tibt,
            _ => return None,
        };
        Some(ns)
    }

    /// Resolves a BCP 47 tag (`ar-EG`, `en-GB-u-nu-deva`, `fa_IR`). An
    /// explicit `-u-nu-` keyword wins; otherwise the language's default
    /// digits are used, and anything unknown renders Latin digits.
    pub fn for_locale(tag: &str) -> Self {
        let tag = tag.trim().replace('_', "-").to_ascii_lowercase();
        let subtags = tag.split('-').collect::<Vec<_>>();

        let extension = subtags.iter().position(|s| *s == "u");
        if let Some(u) = extension {
            let keyword = subtags[u + 1..]
                .windows(2)
                .find(|w| w[0] == "nu")
                .and_then(|w| Self::from_keyword(w[1]));
            if let Some(ns) = keyword {
                return ns;
            }
        }

        let base = &subtags[..extension.unwrap_or(subtags.len())];
        let language = base.first().copied().unwrap_or_default();
        let region = base
            .iter()
            .skip(1)
            .find(|s| s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()))
            .copied();

        match (language, region) {
            // Maghreb Arabic writes Latin digits
            ("ar", Some("ma" | "dz" | "tn" | "ly" | "eh")) => Self::Latn,
            ("ar" | "ckb", _) => Self::Arab,
            ("fa" | "ps", _) => Self::ArabExt,
            ("bn", _) => Self::Beng,
            ("mr" | "ne", _) => Self::Deva,
            ("my", _) => Self::Mymr,
            ("dz", _) => Self::Tibt,
            _ => Self::Latn,
        }
    }

    fn zero(self) -> char {
        match self {
            Self::Latn => '0',
            Self::Arab => '\u{0660}',
            Self::ArabExt => '\u{06F0}',
            Self::Beng => '\u{09E6}',
            Self::Deva => '\u{0966}',
            Self::Fullwide => '\u{FF10}',
            Self::Gujr => '\u{0AE6}',
            Self::Guru => '\u{0A66}',
            Self::Khmr => '\u{17E0}',
            Self::Knda => '\u{0CE6}',
            Self::Laoo => '\u{0ED0}',
            Self::Mlym => '\u{0D66}',
            Self::Mong => '\u{1810}',
            Self::Mymr => '\u{1040}',
            Self::Orya => '\u{0B66}',
            Self::TamlDec => '\u{0BE6}',
            Self::Telu => '\u{0C66}',
            Self::Thai => '\u{0E50}',
            Self::Tibt => '\u{0F20}',
        }
    }

    /// Replaces ASCII digits with this system's digits.
    pub fn transliterate(self, s: &str) -> String {
        if self == Self::Latn {
            return s.to_string();
        }
        let zero = self.zero() as u32;
        s.chars()
            .map(|c| match c.to_digit(10) {
                Some(d) if c.is_ascii_digit() => char::from_u32(zero + d).unwrap_or(c),
                _ => c,
            })
            .collect()
    }
}
