//! # Tone Picker Component
//!
//! Modal overlay for changing the skin tone of the highlighted emoji.
//! Opened with `t`, dismissed with Esc.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TonePickerState` lives in `TuiState` (as `Option`, `None` = hidden)
//! - `TonePicker` is created each frame with borrowed state
//!
//! The overlay lists all six tone variants with a live preview of the target
//! emoji; applying one goes through the model's `update_emoji_skin_tone`, so
//! the grid shows the variant on the very next frame.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::emoji::{Emoji, SkinTone};
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Persistent state for the tone picker overlay.
pub struct TonePickerState {
    /// (section, row) of the emoji being edited.
    pub target: (usize, usize),
    /// Index into `SkinTone::ALL`.
    pub selected: usize,
    pub list_state: ListState,
}

impl TonePickerState {
    /// Preselects the tone currently applied to the target emoji.
    pub fn new(target: (usize, usize), current: Option<SkinTone>) -> Self {
        let selected = SkinTone::ALL
            .iter()
            .position(|&tone| Some(tone) == current)
            .unwrap_or(0);
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            target,
            selected,
            list_state,
        }
    }
}

impl EventHandler for TonePickerState {
    type Event = ToneEvent;

    /// Handle a key event, returning a ToneEvent if the overlay should act.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<ToneEvent> {
        match event {
            TuiEvent::Escape => Some(ToneEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(SkinTone::ALL.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => Some(ToneEvent::Apply(SkinTone::ALL[self.selected])),
            // Digits map straight onto raw tone values.
            TuiEvent::InputChar(c @ '1'..='6') => {
                let raw = *c as u8 - b'0';
                SkinTone::from_raw(raw).map(ToneEvent::Apply)
            }
            _ => None,
        }
    }
}

/// Events emitted by the tone picker.
pub enum ToneEvent {
    Apply(SkinTone),
    Dismiss,
}

/// Transient render wrapper for the tone picker overlay.
pub struct TonePicker<'a> {
    state: &'a mut TonePickerState,
    emoji: &'a Emoji,
}

impl<'a> TonePicker<'a> {
    pub fn new(state: &'a mut TonePickerState, emoji: &'a Emoji) -> Self {
        Self { state, emoji }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(40, 50, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let help_text = " 1-6/Enter Apply  Esc Back ";

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Skin tone — {} ", self.emoji.name))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));

        let current = self.emoji.skin_tone();
        let items: Vec<ListItem> = SkinTone::ALL
            .iter()
            .enumerate()
            .map(|(i, &tone)| {
                // Live preview: the target emoji with this tone applied.
                let mut preview = self.emoji.clone();
                preview.set_skin_tone(tone.raw());
                let active_marker = if Some(tone) == current || (current.is_none() && tone == SkinTone::None) {
                    " *"
                } else {
                    ""
                };

                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };

                let line = Line::from(vec![
                    Span::styled(format!("{} ", tone.raw()), style),
                    Span::styled(format!("{:<4}", preview.glyph()), style),
                    Span::styled(format!("{:<13}", tone.label()), style),
                    Span::styled(active_marker, style),
                ]);
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items).block(block);

        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
