//! Language tags understood by the synthesis engine.
//!
//! The reference clip is always in a single language; target text may additionally
//! be one of the code-switched "Mixed" variants. Tags are the literal strings shown
//! in the dropdowns and are what the engine ultimately receives.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Returned when a string is not a known language tag.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized language tag: {0:?}")]
pub struct UnknownLanguage(pub String);

/// Language of the uploaded reference clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RefLanguage {
    #[default]
    Chinese,
    English,
    Japanese,
    Cantonese,
    Korean,
}

impl RefLanguage {
    /// Dropdown options, in display order.
    pub const ALL: [RefLanguage; 5] = [
        RefLanguage::Chinese,
        RefLanguage::English,
        RefLanguage::Japanese,
        RefLanguage::Cantonese,
        RefLanguage::Korean,
    ];

    /// The literal tag passed to the engine.
    pub fn tag(self) -> &'static str {
        match self {
            RefLanguage::Chinese => "Chinese",
            RefLanguage::English => "English",
            RefLanguage::Japanese => "Japanese",
            RefLanguage::Cantonese => "Cantonese",
            RefLanguage::Korean => "Korean",
        }
    }
}

impl fmt::Display for RefLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for RefLanguage {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RefLanguage::ALL
            .into_iter()
            .find(|lang| lang.tag() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// Language of the text to synthesize.
///
/// Extends [`RefLanguage`] with the code-switched variants the engine accepts for
/// target text only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TargetLanguage {
    #[default]
    Chinese,
    English,
    Japanese,
    Cantonese,
    Korean,
    #[serde(rename = "Chinese-English Mixed")]
    ChineseEnglishMixed,
    #[serde(rename = "Japanese-English Mixed")]
    JapaneseEnglishMixed,
    #[serde(rename = "Cantonese-English Mixed")]
    CantoneseEnglishMixed,
    #[serde(rename = "Korean-English Mixed")]
    KoreanEnglishMixed,
}

impl TargetLanguage {
    /// Dropdown options, in display order.
    pub const ALL: [TargetLanguage; 9] = [
        TargetLanguage::Chinese,
        TargetLanguage::English,
        TargetLanguage::Japanese,
        TargetLanguage::Cantonese,
        TargetLanguage::Korean,
        TargetLanguage::ChineseEnglishMixed,
        TargetLanguage::JapaneseEnglishMixed,
        TargetLanguage::CantoneseEnglishMixed,
        TargetLanguage::KoreanEnglishMixed,
    ];

    /// The literal tag passed to the engine.
    pub fn tag(self) -> &'static str {
        match self {
            TargetLanguage::Chinese => "Chinese",
            TargetLanguage::English => "English",
            TargetLanguage::Japanese => "Japanese",
            TargetLanguage::Cantonese => "Cantonese",
            TargetLanguage::Korean => "Korean",
            TargetLanguage::ChineseEnglishMixed => "Chinese-English Mixed",
            TargetLanguage::JapaneseEnglishMixed => "Japanese-English Mixed",
            TargetLanguage::CantoneseEnglishMixed => "Cantonese-English Mixed",
            TargetLanguage::KoreanEnglishMixed => "Korean-English Mixed",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for TargetLanguage {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetLanguage::ALL
            .into_iter()
            .find(|lang| lang.tag() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

impl From<RefLanguage> for TargetLanguage {
    fn from(lang: RefLanguage) -> Self {
        match lang {
            RefLanguage::Chinese => TargetLanguage::Chinese,
            RefLanguage::English => TargetLanguage::English,
            RefLanguage::Japanese => TargetLanguage::Japanese,
            RefLanguage::Cantonese => TargetLanguage::Cantonese,
            RefLanguage::Korean => TargetLanguage::Korean,
        }
    }
}
