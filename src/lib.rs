//! # moji
//!
//! A terminal emoji picker.
//!
//! The crate splits into two layers:
//!
//! - [`core`]: the picker model, emoji data types, dataset provider, and a
//!   small synchronous observable primitive. No terminal code here; this
//!   layer is usable from any frontend.
//! - [`tui`]: the ratatui frontend that drives the model from keyboard
//!   events and renders the grid, category tabs, and tone overlay.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

// Commonly used types at the crate root
pub use crate::core::emoji::{Emoji, EmojiCategory, SkinTone};
pub use crate::core::observable::Observable;
pub use crate::core::picker::PickerModel;
pub use crate::core::provider::{BundledProvider, EmojiProvider};
