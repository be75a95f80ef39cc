//! # TUI Components
//!
//! All UI components for the terminal picker surface.
//!
//! Two patterns, as elsewhere in the codebase:
//!
//! - **Stateless components** receive everything as props and just draw:
//!   [`CategoryBar`], [`StatusBar`].
//! - **Stateful components** keep persistent state in `TuiState` and are
//!   wrapped in a transient renderer each frame: the emoji grid
//!   ([`EmojiGridState`]/[`EmojiGrid`]) and the skin tone overlay
//!   ([`TonePickerState`]/[`TonePicker`]).
//!
//! Components never reach into global state; the event loop hands them the
//! [`PickerModel`](crate::core::picker::PickerModel) data they need. This
//! keeps dependencies explicit and every component testable with a
//! `TestBackend`.

pub mod category_bar;
pub mod emoji_grid;
pub mod status_bar;
pub mod tone_picker;

pub use category_bar::CategoryBar;
pub use emoji_grid::{EmojiGrid, EmojiGridState};
pub use status_bar::StatusBar;
pub use tone_picker::{TonePicker, TonePickerState, ToneEvent};
