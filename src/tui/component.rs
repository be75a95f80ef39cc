//! # Component Traits
//!
//! The two seams shared by the TUI widgets.
//!
//! [`Component`] is the draw seam for widgets whose inputs all arrive as
//! struct fields: `CategoryBar` and `StatusBar` implement it. The emoji grid
//! and the tone overlay render through inherent methods instead — their
//! transient wrappers borrow persistent state *and* the model, so a common
//! signature buys nothing there.
//!
//! [`EventHandler`] is the input seam for stateful overlays: translate a raw
//! [`TuiEvent`] into a higher-level event the loop acts on, or swallow it.
//! `TonePickerState` is the one implementor.

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// A drawable widget whose inputs are carried as struct fields.
pub trait Component {
    /// Render into the given area.
    ///
    /// Takes `&mut self` so implementors can update cached layout values
    /// during the pass, the same contract ratatui's stateful widgets use.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes raw terminal events.
pub trait EventHandler {
    /// The higher-level event this component emits.
    type Event;

    /// Handle a raw event. `None` means the event was consumed (or ignored)
    /// without anything for the loop to act on.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
