//! # Emoji Data Model
//!
//! An [`Emoji`] is an ordered sequence of Unicode scalars plus the skin tone
//! currently applied to it. The rendered glyph is always derived from those
//! two pieces, so there is exactly one active representation at a time.
//!
//! Skin tones follow the Fitzpatrick modifier scheme: the modifier scalar is
//! inserted right after the first scalar of the sequence, and any U+FE0F
//! variation selectors are dropped since the modifier already forces emoji
//! presentation.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Variation selector that requests emoji presentation for text-default
/// characters. Redundant (and invalid in some renderers) once a skin tone
/// modifier is attached.
const VARIATION_SELECTOR_16: u32 = 0xFE0F;

/// A skin tone selector, raw values 1 through 6.
///
/// Raw value 1 (`None`) means "no modifier applied" and renders the base
/// glyph; 2 through 6 map to the Fitzpatrick modifiers U+1F3FB..U+1F3FF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SkinTone {
    None = 1,
    Light = 2,
    MediumLight = 3,
    Medium = 4,
    MediumDark = 5,
    Dark = 6,
}

impl SkinTone {
    /// All tones in raw-value order, for iteration in selection UIs.
    pub const ALL: [SkinTone; 6] = [
        SkinTone::None,
        SkinTone::Light,
        SkinTone::MediumLight,
        SkinTone::Medium,
        SkinTone::MediumDark,
        SkinTone::Dark,
    ];

    /// Parses a raw tone value. Anything outside 1..=6 is rejected.
    pub fn from_raw(raw: u8) -> Option<SkinTone> {
        match raw {
            1 => Some(SkinTone::None),
            2 => Some(SkinTone::Light),
            3 => Some(SkinTone::MediumLight),
            4 => Some(SkinTone::Medium),
            5 => Some(SkinTone::MediumDark),
            6 => Some(SkinTone::Dark),
            _ => None,
        }
    }

    pub fn raw(self) -> u8 {
        self as u8
    }

    /// The Fitzpatrick modifier scalar, or `None` for the default tone.
    pub fn modifier(self) -> Option<u32> {
        match self {
            SkinTone::None => None,
            SkinTone::Light => Some(0x1F3FB),
            SkinTone::MediumLight => Some(0x1F3FC),
            SkinTone::Medium => Some(0x1F3FD),
            SkinTone::MediumDark => Some(0x1F3FE),
            SkinTone::Dark => Some(0x1F3FF),
        }
    }

    /// Human-readable label for status lines and the tone overlay.
    pub fn label(self) -> &'static str {
        match self {
            SkinTone::None => "default",
            SkinTone::Light => "light",
            SkinTone::MediumLight => "medium-light",
            SkinTone::Medium => "medium",
            SkinTone::MediumDark => "medium-dark",
            SkinTone::Dark => "dark",
        }
    }
}

/// A single emoji entry owned by a category.
///
/// The scalar sequence is the *base* key — tone-free. The applied tone lives
/// alongside it and [`Emoji::glyph`] composes the two on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Emoji {
    /// Base Unicode scalar sequence, in display order.
    pub scalars: Vec<u32>,
    /// CLDR-style short name, used for search and status lines.
    pub name: String,
    /// Whether this emoji has Fitzpatrick tone variants.
    pub supports_skin_tones: bool,
    /// Unicode (emoji) version that introduced this entry.
    pub unicode_version: f32,
    /// Currently applied tone. `None` renders the base glyph.
    skin_tone: Option<SkinTone>,
}

impl Emoji {
    pub fn new(
        scalars: Vec<u32>,
        name: impl Into<String>,
        supports_skin_tones: bool,
        unicode_version: f32,
    ) -> Self {
        Self {
            scalars,
            name: name.into(),
            supports_skin_tones,
            unicode_version,
            skin_tone: None,
        }
    }

    pub fn skin_tone(&self) -> Option<SkinTone> {
        self.skin_tone
    }

    /// Applies a skin tone by raw value, in place.
    ///
    /// Deterministic policy for the unguarded cases: if this emoji has no
    /// tone variants, or `raw` is outside 1..=6, the entry is left unchanged.
    /// Raw value 1 clears the tone back to the base glyph.
    pub fn set_skin_tone(&mut self, raw: u8) {
        if !self.supports_skin_tones {
            log::debug!("ignoring tone {} for '{}': no variants", raw, self.name);
            return;
        }
        match SkinTone::from_raw(raw) {
            Some(SkinTone::None) => self.skin_tone = None,
            Some(tone) => self.skin_tone = Some(tone),
            None => log::debug!("ignoring unknown tone raw value {}", raw),
        }
    }

    /// The glyph with the current skin tone applied.
    pub fn glyph(&self) -> String {
        let modifier = self
            .skin_tone
            .filter(|_| self.supports_skin_tones)
            .and_then(SkinTone::modifier);

        match modifier {
            None => self.base_glyph(),
            Some(modifier) => {
                let mut glyph = String::new();
                for (i, &scalar) in self.scalars.iter().enumerate() {
                    if scalar == VARIATION_SELECTOR_16 {
                        continue;
                    }
                    if let Some(c) = char::from_u32(scalar) {
                        glyph.push(c);
                    }
                    if i == 0
                        && let Some(c) = char::from_u32(modifier)
                    {
                        glyph.push(c);
                    }
                }
                glyph
            }
        }
    }

    /// The tone-free glyph, regardless of the applied tone.
    pub fn base_glyph(&self) -> String {
        self.scalars
            .iter()
            .filter_map(|&scalar| char::from_u32(scalar))
            .collect()
    }
}

/// A named, ordered grouping of emoji. Display order is meaningful and
/// stable; entries are only ever mutated through the picker's tone update.
#[derive(Debug, Clone, PartialEq)]
pub struct EmojiCategory {
    pub name: String,
    pub emojis: Vec<Emoji>,
}
