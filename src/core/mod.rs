//! # Core Picker Logic
//!
//! This module contains moji's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Emoji / categories   │
//!                    │  • PickerModel (queries │
//!                    │    + tone mutation)     │
//!                    │  • Observable fields    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    GUI     │      │  scripting │
//!     │  Adapter   │      │  Adapter   │      │  (future)  │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`emoji`]: `Emoji`, `SkinTone`, and `EmojiCategory` — the data model
//! - [`observable`]: `Observable<T>` — value container with synchronous notify
//! - [`provider`]: the `EmojiProvider` capability and the bundled dataset
//! - [`picker`]: `PickerModel` — the view-model driving any picker surface
//! - [`config`]: user configuration (`~/.moji/config.toml`)

pub mod config;
pub mod emoji;
pub mod observable;
pub mod picker;
pub mod provider;
