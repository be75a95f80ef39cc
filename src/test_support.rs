//! # Test Support
//!
//! Shared fixtures for unit tests. A fixed in-memory provider avoids pulling
//! the full bundled dataset into tests that only care about model behavior.

use crate::core::emoji::{Emoji, EmojiCategory};
use crate::core::picker::PickerModel;
use crate::core::provider::EmojiProvider;

/// Provider serving a fixed set of categories.
pub struct StaticProvider {
    pub categories: Vec<EmojiCategory>,
}

impl EmojiProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    fn emoji_categories(&self) -> Vec<EmojiCategory> {
        self.categories.clone()
    }
}

/// One category: grinning face (no tones) and thumbs up (tones).
pub fn smileys_model() -> PickerModel {
    let provider = StaticProvider {
        categories: vec![EmojiCategory {
            name: "Smileys".to_string(),
            emojis: vec![
                Emoji::new(vec![0x1F600], "grinning face", false, 6.1),
                Emoji::new(vec![0x1F44D], "thumbs up", true, 6.0),
            ],
        }],
    };
    PickerModel::new(&provider)
}

/// Two categories: "Smileys" with 5 emoji, "Animals" with 3.
pub fn two_section_model() -> PickerModel {
    let smileys = vec![
        Emoji::new(vec![0x1F600], "grinning face", false, 6.1),
        Emoji::new(vec![0x1F602], "face with tears of joy", false, 6.0),
        Emoji::new(vec![0x1F609], "winking face", false, 6.0),
        Emoji::new(vec![0x1F44D], "thumbs up", true, 6.0),
        Emoji::new(vec![0x1F44B], "waving hand", true, 6.0),
    ];
    let animals = vec![
        Emoji::new(vec![0x1F436], "dog face", false, 6.0),
        Emoji::new(vec![0x1F431], "cat face", false, 6.0),
        Emoji::new(vec![0x1F98A], "fox", false, 9.0),
    ];
    let provider = StaticProvider {
        categories: vec![
            EmojiCategory {
                name: "Smileys".to_string(),
                emojis: smileys,
            },
            EmojiCategory {
                name: "Animals".to_string(),
                emojis: animals,
            },
        ],
    };
    PickerModel::new(&provider)
}

/// A model built from a provider with no categories at all.
pub fn empty_model() -> PickerModel {
    let provider = StaticProvider { categories: vec![] };
    PickerModel::new(&provider)
}
