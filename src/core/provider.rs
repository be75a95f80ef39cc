//! # Emoji Providers
//!
//! The picker view-model depends on an abstract "produce categorized emoji
//! data" capability rather than a concrete loader. [`BundledProvider`] is the
//! shipped implementation: it parses the dataset compiled into the binary,
//! hides emoji newer than the configured Unicode version, and applies the
//! configured default skin tone to tone-capable entries.

use std::fmt;

use serde::Deserialize;

use crate::core::emoji::{Emoji, EmojiCategory, SkinTone};

/// Categorized emoji dataset compiled into the binary.
const BUNDLED_DATASET: &str = include_str!("../../assets/emoji.json");

/// High enough to pass every entry in the bundled dataset, i.e. no
/// filtering unless the user configures a cap.
pub const DEFAULT_MAX_UNICODE_VERSION: f32 = 16.0;

/// Capability to produce the full categorized emoji list. Invoked exactly
/// once, at view-model construction.
pub trait EmojiProvider {
    /// Returns the name of the provider, for logging.
    fn name(&self) -> &str;

    /// Returns every category, in display order, with its emoji in display
    /// order. An empty list is valid and yields an empty picker. Categories
    /// with no emoji carry no addressable (section, row) pairs and are
    /// dropped by the picker at construction.
    fn emoji_categories(&self) -> Vec<EmojiCategory>;
}

/// Errors raised while decoding an emoji dataset.
#[derive(Debug)]
pub enum DatasetError {
    Json(serde_json::Error),
    /// A scalar was not valid hex or not a valid Unicode scalar value.
    Scalar { emoji: String, value: String },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Json(e) => write!(f, "dataset parse error: {e}"),
            DatasetError::Scalar { emoji, value } => {
                write!(f, "bad scalar {value:?} in emoji {emoji:?}")
            }
        }
    }
}

impl std::error::Error for DatasetError {}

// ============================================================================
// Dataset records (on-disk JSON shape)
// ============================================================================

#[derive(Debug, Deserialize)]
struct CategoryRecord {
    name: String,
    emojis: Vec<EmojiRecord>,
}

#[derive(Debug, Deserialize)]
struct EmojiRecord {
    /// Hex-encoded scalar values, e.g. `["270C", "FE0F"]`.
    scalars: Vec<String>,
    name: String,
    version: f32,
    #[serde(default)]
    tones: bool,
}

impl EmojiRecord {
    fn into_emoji(self) -> Result<Emoji, DatasetError> {
        let mut scalars = Vec::with_capacity(self.scalars.len());
        for hex in &self.scalars {
            let value = u32::from_str_radix(hex, 16)
                .ok()
                .filter(|&v| char::from_u32(v).is_some())
                .ok_or_else(|| DatasetError::Scalar {
                    emoji: self.name.clone(),
                    value: hex.clone(),
                })?;
            scalars.push(value);
        }
        Ok(Emoji::new(scalars, self.name, self.tones, self.version))
    }
}

/// Decodes a JSON dataset into categories. Order is preserved.
pub fn parse_dataset(json: &str) -> Result<Vec<EmojiCategory>, DatasetError> {
    let records: Vec<CategoryRecord> =
        serde_json::from_str(json).map_err(DatasetError::Json)?;

    records
        .into_iter()
        .map(|record| {
            let emojis = record
                .emojis
                .into_iter()
                .map(EmojiRecord::into_emoji)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(EmojiCategory {
                name: record.name,
                emojis,
            })
        })
        .collect()
}

// ============================================================================
// Bundled provider
// ============================================================================

/// Provider backed by the dataset compiled into the binary.
pub struct BundledProvider {
    max_version: f32,
    default_tone: Option<SkinTone>,
}

impl BundledProvider {
    /// `max_version` hides emoji introduced after that Unicode version (the
    /// terminal's font usually lags the standard). `default_tone` is applied
    /// to every tone-capable entry at load.
    pub fn new(max_version: f32, default_tone: Option<SkinTone>) -> Self {
        Self {
            max_version,
            default_tone,
        }
    }
}

impl Default for BundledProvider {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UNICODE_VERSION, None)
    }
}

impl EmojiProvider for BundledProvider {
    fn name(&self) -> &str {
        "bundled"
    }

    fn emoji_categories(&self) -> Vec<EmojiCategory> {
        // The bundled asset is part of the build; a parse failure here is a
        // packaging defect, not a runtime condition.
        let categories =
            parse_dataset(BUNDLED_DATASET).expect("bundled emoji dataset is malformed");

        categories
            .into_iter()
            .filter_map(|mut category| {
                category.emojis.retain(|e| e.unicode_version <= self.max_version);
                if let Some(tone) = self.default_tone {
                    for emoji in &mut category.emojis {
                        emoji.set_skin_tone(tone.raw());
                    }
                }
                // A category with every entry filtered out is not shown.
                (!category.emojis.is_empty()).then_some(category)
            })
            .collect()
    }
}
