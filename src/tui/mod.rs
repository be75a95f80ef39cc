//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the picker, and
//! translates keyboard events into operations on the core `PickerModel`.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw: it sleeps up to 250ms in the
//! event poll and only redraws after input or a terminal resize. Nothing
//! here animates, so there is no timed frame ticking.
//!
//! ## Observable wiring
//!
//! The model's two observable fields notify synchronously on every write.
//! Since the loop owns the model mutably, subscribers cannot touch it or the
//! TUI state directly; they forward notifications over an `mpsc` channel
//! that the loop drains each iteration — the same shape as an action channel
//! fed by background work, just without the background.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::mpsc;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::config::ResolvedConfig;
use crate::core::emoji::Emoji;
use crate::core::picker::PickerModel;
use crate::core::provider::BundledProvider;
use crate::tui::component::EventHandler;
use crate::tui::components::{EmojiGridState, ToneEvent, TonePickerState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core picker logic)
pub struct TuiState {
    // Persistent component states
    pub grid: EmojiGridState,
    // Tone overlay (None = hidden)
    pub tone_picker: Option<TonePickerState>,
    // Title bar status text
    pub status_message: String,
}

impl TuiState {
    pub fn new(start_section: usize) -> Self {
        Self {
            grid: EmojiGridState::new(start_section),
            tone_picker: None,
            status_message: String::new(),
        }
    }
}

/// Notifications bridged out of the model's observable fields.
enum Notice {
    Picked(Option<Emoji>),
    CategoryChanged(usize),
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Mouse capture for wheel scrolling in the grid
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Runs the picker. Returns the glyph of the picked emoji, or `None` if the
/// user backed out.
pub fn run(config: ResolvedConfig) -> std::io::Result<Option<String>> {
    let provider = BundledProvider::new(config.max_unicode_version, config.default_tone);
    let mut model = PickerModel::new(&provider);

    let start_section = config
        .start_category
        .as_deref()
        .and_then(|wanted| {
            model
                .section_headers()
                .position(|header| header.eq_ignore_ascii_case(wanted))
        })
        .unwrap_or(0);
    if start_section != 0 {
        model.selected_category_index.set(start_section);
    }
    let mut tui = TuiState::new(start_section);

    // Channel bridging observable notifications back into the loop
    let (tx, rx) = mpsc::channel();
    {
        let tx = tx.clone();
        model
            .selected_emoji
            .subscribe(move |emoji| {
                let _ = tx.send(Notice::Picked(emoji.clone()));
            });
    }
    model
        .selected_category_index
        .subscribe(move |index| {
            let _ = tx.send(Notice::CategoryChanged(*index));
        });

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;
    let mut picked: Option<String> = None;

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &model, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit = true;
                continue;
            }

            // When the tone overlay is open, route all events to it
            if let Some(ref mut tone) = tui.tone_picker {
                if let Some(tone_event) = tone.handle_event(&event) {
                    match tone_event {
                        ToneEvent::Apply(tone_value) => {
                            let (section, row) = tone.target;
                            let updated =
                                model.update_emoji_skin_tone(tone_value.raw(), section, row);
                            tui.status_message = format!(
                                "{} {} · tone: {}",
                                updated.glyph(),
                                updated.name,
                                tone_value.label()
                            );
                            tui.tone_picker = None;
                        }
                        ToneEvent::Dismiss => {
                            tui.tone_picker = None;
                        }
                    }
                }
                continue;
            }

            match event {
                TuiEvent::Escape | TuiEvent::InputChar('q') => {
                    should_quit = true;
                }
                TuiEvent::Submit => {
                    if model.number_of_sections() > 0 {
                        let (section, row) = tui.grid.selected();
                        let emoji = model.emoji(section, row).clone();
                        picked = Some(emoji.glyph());
                        model.selected_emoji.set(Some(emoji));
                        should_quit = true;
                    }
                }
                TuiEvent::InputChar('t') => {
                    if model.number_of_sections() > 0 {
                        let (section, row) = tui.grid.selected();
                        let emoji = model.emoji(section, row);
                        if emoji.supports_skin_tones {
                            tui.tone_picker =
                                Some(TonePickerState::new((section, row), emoji.skin_tone()));
                        } else {
                            tui.status_message =
                                format!("{} has no skin tone variants", emoji.name);
                        }
                    }
                }
                // Digits jump straight to a category
                TuiEvent::InputChar(c @ '1'..='9') => {
                    tui.grid
                        .jump_to_section(&model, (c as u8 - b'1') as usize);
                }
                TuiEvent::CursorUp | TuiEvent::ScrollUp => tui.grid.move_up(&model),
                TuiEvent::CursorDown | TuiEvent::ScrollDown => tui.grid.move_down(&model),
                TuiEvent::CursorLeft => tui.grid.move_left(&model),
                TuiEvent::CursorRight => tui.grid.move_right(&model),
                TuiEvent::NextCategory => tui.grid.next_category(&model),
                TuiEvent::PrevCategory => tui.grid.prev_category(&model),
                TuiEvent::PageUp => tui.grid.page_up(&model),
                TuiEvent::PageDown => tui.grid.page_down(&model),
                TuiEvent::Home => tui.grid.home(&model),
                TuiEvent::End => tui.grid.end(&model),
                _ => {}
            }

            // Grid movement may have crossed a section boundary; the
            // observable is the source of truth for the category tabs.
            if model.number_of_sections() > 0
                && tui.grid.section != *model.selected_category_index.get()
            {
                model.selected_category_index.set(tui.grid.section);
            }
        }

        // Handle bridged observable notifications
        while let Ok(notice) = rx.try_recv() {
            needs_redraw = true;
            match notice {
                Notice::Picked(Some(emoji)) => {
                    debug!("selected emoji: {} ({})", emoji.glyph(), emoji.name);
                    tui.status_message = format!("picked {} {}", emoji.glyph(), emoji.name);
                }
                Notice::Picked(None) => {
                    tui.status_message = String::new();
                }
                Notice::CategoryChanged(index) => {
                    debug!("selected category index: {}", index);
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();

    if let Some(ref glyph) = picked {
        info!("picker finished with {}", glyph);
    } else {
        info!("picker dismissed without a selection");
    }
    Ok(picked)
}
