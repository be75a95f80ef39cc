//! # Picker View-Model
//!
//! [`PickerModel`] mediates between the stored emoji catalog and whatever
//! surface presents it. It answers positional queries (counts, entry at a
//! section/row, header text), carries the single mutation (skin tone
//! update), and publishes the current selection through two observable
//! fields the UI layer writes and subscribes to.
//!
//! The model owns the category list for its lifetime: it is materialized
//! once from the provider at construction and never replaced. Entries are
//! mutated in place, so clones previously handed out go stale — callers
//! re-fetch after a mutation (the mutator hands the fresh entry back so the
//! common case needs no second read).
//!
//! All state lives on one logical thread; nothing here locks, suspends, or
//! blocks.

use crate::core::emoji::Emoji;
use crate::core::emoji::EmojiCategory;
use crate::core::observable::Observable;
use crate::core::provider::EmojiProvider;

pub struct PickerModel {
    /// All emoji categories, fixed at construction.
    categories: Vec<EmojiCategory>,
    /// The emoji the user picked. Written by the UI layer; `None` until the
    /// first pick.
    pub selected_emoji: Observable<Option<Emoji>>,
    /// The category currently in view. Written by the UI layer as the user
    /// navigates; starts at 0.
    pub selected_category_index: Observable<usize>,
}

impl PickerModel {
    /// Eagerly materializes the full category list from `provider`,
    /// discarding categories with no emoji. An empty provider result just
    /// yields a picker with zero sections.
    pub fn new(provider: &dyn EmojiProvider) -> Self {
        let mut categories = provider.emoji_categories();
        // An empty category has no valid (section, row) pair, so every
        // section index the model exposes must hold at least one entry.
        categories.retain(|c| !c.emojis.is_empty());
        log::info!(
            "loaded {} emoji in {} categories from provider '{}'",
            categories.iter().map(|c| c.emojis.len()).sum::<usize>(),
            categories.len(),
            provider.name()
        );
        Self {
            categories,
            selected_emoji: Observable::new(None),
            selected_category_index: Observable::new(0),
        }
    }

    /// Number of emoji categories.
    pub fn number_of_sections(&self) -> usize {
        self.categories.len()
    }

    /// Number of emoji in the target section.
    ///
    /// Panics if `section` is out of bounds; valid indices are the caller's
    /// responsibility.
    pub fn number_of_items(&self, section: usize) -> usize {
        self.categories[section].emojis.len()
    }

    /// The entry at the target position.
    ///
    /// Panics if the indices are out of bounds for that category.
    pub fn emoji(&self, section: usize, row: usize) -> &Emoji {
        &self.categories[section].emojis[row]
    }

    /// The display name of the target section.
    ///
    /// Panics if `section` is out of bounds.
    pub fn section_header(&self, section: usize) -> &str {
        &self.categories[section].name
    }

    /// Section headers in display order, for tab strips.
    pub fn section_headers(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Updates the skin tone of the stored entry in place and returns the
    /// now-updated entry. The only mutator: any other holder of a clone of
    /// that emoji observes the change only by re-reading.
    ///
    /// Tone values outside 1..=6, or any tone on an emoji without variants,
    /// leave the entry unchanged (see `Emoji::set_skin_tone`).
    ///
    /// Panics if the indices are out of bounds.
    pub fn update_emoji_skin_tone(&mut self, tone_raw: u8, section: usize, row: usize) -> &Emoji {
        self.categories[section].emojis[row].set_skin_tone(tone_raw);
        &self.categories[section].emojis[row]
    }
}
