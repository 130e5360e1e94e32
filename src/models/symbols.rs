//! Music symbols used for key signatures and chord display
//!
//! The lead sheet works with three sign markers (natural, sharp, flat) and
//! one placeholder glyph, the G clef, which stands for "no chord / no key
//! assigned yet".
//!
//! Stored songs written by older clients carry these symbols as HTML
//! entities (e.g. `&#9839;`), so every parser here accepts the entity,
//! the Unicode glyph and the plain name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The G clef glyph, used as the "no chord / key unset" sentinel
pub const CLEF_GLYPH: &str = "𝄞";

/// Legacy HTML entity for the G clef
pub const CLEF_ENTITY: &str = "&#119070;";

/// Returns true for both spellings of the clef sentinel
pub fn is_clef(s: &str) -> bool {
    s == CLEF_GLYPH || s == CLEF_ENTITY
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MusicSymbol {
    Natural,
    Sharp,
    Flat,
    GClef,
}

impl MusicSymbol {
    /// Unicode glyph for display
    pub fn glyph(&self) -> &'static str {
        match self {
            MusicSymbol::Natural => "♮",
            MusicSymbol::Sharp => "♯",
            MusicSymbol::Flat => "♭",
            MusicSymbol::GClef => CLEF_GLYPH,
        }
    }
}

impl fmt::Display for MusicSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Tie-break hint for enharmonic spelling, chosen by the user's key edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PreferredSign {
    #[default]
    #[serde(rename = "natural", alias = "&#9838;", alias = "♮")]
    Natural,
    #[serde(rename = "sharp", alias = "&#9839;", alias = "♯", alias = "#")]
    Sharp,
    #[serde(rename = "flat", alias = "&#9837;", alias = "♭", alias = "b")]
    Flat,
}

impl PreferredSign {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferredSign::Natural => "natural",
            PreferredSign::Sharp => "sharp",
            PreferredSign::Flat => "flat",
        }
    }

    pub fn symbol(&self) -> MusicSymbol {
        match self {
            PreferredSign::Natural => MusicSymbol::Natural,
            PreferredSign::Sharp => MusicSymbol::Sharp,
            PreferredSign::Flat => MusicSymbol::Flat,
        }
    }
}

impl fmt::Display for PreferredSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PreferredSign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "natural" | "&#9838;" | "♮" | "" => Ok(PreferredSign::Natural),
            "sharp" | "&#9839;" | "♯" | "#" => Ok(PreferredSign::Sharp),
            "flat" | "&#9837;" | "♭" | "b" => Ok(PreferredSign::Flat),
            _ => Err(format!("Invalid preferred sign: '{}'. Expected natural, sharp or flat", s)),
        }
    }
}

/// Accidental of a typed note: `#`, `b` or nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accidental {
    #[default]
    None,
    Sharp,
    Flat,
}

impl Accidental {
    pub fn as_str(&self) -> &'static str {
        match self {
            Accidental::None => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }

    pub fn from_marker(s: &str) -> Accidental {
        match s {
            "#" => Accidental::Sharp,
            "b" => Accidental::Flat,
            _ => Accidental::None,
        }
    }

    /// Accidental carried by a note spelling such as "C#" or "Eb"
    pub fn of_spelling(spelling: &str) -> Accidental {
        if spelling.len() > 1 && spelling.ends_with('#') {
            Accidental::Sharp
        } else if spelling.len() > 1 && spelling.ends_with('b') {
            Accidental::Flat
        } else {
            Accidental::None
        }
    }
}

/// How accidentals are written in rendered chord text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignStyle {
    /// `C#`, `Db`
    #[default]
    Ascii,
    /// `C♯`, `D♭`
    Glyph,
}

impl SignStyle {
    /// Rewrite the accidental of a resolved spelling in this style
    pub fn apply(&self, spelling: &str) -> String {
        match (self, Accidental::of_spelling(spelling)) {
            (SignStyle::Ascii, _) | (_, Accidental::None) => spelling.to_string(),
            (SignStyle::Glyph, Accidental::Sharp) => {
                format!("{}{}", &spelling[..spelling.len() - 1], MusicSymbol::Sharp.glyph())
            }
            (SignStyle::Glyph, Accidental::Flat) => {
                format!("{}{}", &spelling[..spelling.len() - 1], MusicSymbol::Flat.glyph())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clef_detection() {
        assert!(is_clef("𝄞"));
        assert!(is_clef("&#119070;"));
        assert!(!is_clef("C"));
        assert!(!is_clef(""));
    }

    #[test]
    fn test_preferred_sign_from_str() {
        assert_eq!("sharp".parse::<PreferredSign>().unwrap(), PreferredSign::Sharp);
        assert_eq!("&#9837;".parse::<PreferredSign>().unwrap(), PreferredSign::Flat);
        assert_eq!("♮".parse::<PreferredSign>().unwrap(), PreferredSign::Natural);
        assert!("double-sharp".parse::<PreferredSign>().is_err());
    }

    #[test]
    fn test_preferred_sign_serde() {
        let json = serde_json::to_string(&PreferredSign::Flat).unwrap();
        assert_eq!(json, "\"flat\"");

        let legacy: PreferredSign = serde_json::from_str("\"&#9839;\"").unwrap();
        assert_eq!(legacy, PreferredSign::Sharp);

        let natural: PreferredSign = serde_json::from_str("\"&#9838;\"").unwrap();
        assert_eq!(natural, PreferredSign::Natural);
    }

    #[test]
    fn test_accidental_of_spelling() {
        assert_eq!(Accidental::of_spelling("C#"), Accidental::Sharp);
        assert_eq!(Accidental::of_spelling("Db"), Accidental::Flat);
        assert_eq!(Accidental::of_spelling("B"), Accidental::None);
        // A lone "b" is the note letter, not a flat
        assert_eq!(Accidental::of_spelling("b"), Accidental::None);
    }

    #[test]
    fn test_sign_style() {
        assert_eq!(SignStyle::Ascii.apply("F#"), "F#");
        assert_eq!(SignStyle::Glyph.apply("F#"), "F♯");
        assert_eq!(SignStyle::Glyph.apply("Bb"), "B♭");
        assert_eq!(SignStyle::Glyph.apply("B"), "B");
    }

    #[test]
    fn test_symbol_glyphs() {
        assert_eq!(MusicSymbol::GClef.glyph(), CLEF_GLYPH);
        assert_eq!(PreferredSign::Flat.symbol(), MusicSymbol::Flat);
        assert_eq!(format!("{}", MusicSymbol::Natural), "♮");
    }
}
