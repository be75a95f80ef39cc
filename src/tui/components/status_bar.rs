//! # Status Bar Component
//!
//! Bottom line of the picker: preview of the highlighted emoji on the left,
//! keybinding hints on the right. Stateless, props-in-struct like the other
//! display-only components.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

const HINTS: &str = "←↑↓→ move  Tab category  t tone  Enter pick  q quit";

/// Bottom status line showing the highlighted emoji and key hints.
pub struct StatusBar {
    /// Preview text, e.g. "👍 thumbs up · tone: medium".
    pub preview: String,
}

impl StatusBar {
    pub fn new(preview: String) -> Self {
        Self { preview }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width as usize;
        let used = UnicodeWidthStr::width(self.preview.as_str());
        let hints_width = UnicodeWidthStr::width(HINTS);

        let mut spans = vec![Span::raw(self.preview.clone())];
        // Right-align the hints when there is room for both.
        if width > used + hints_width + 1 {
            spans.push(Span::raw(" ".repeat(width - used - hints_width)));
            spans.push(Span::styled(HINTS, Style::default().fg(Color::DarkGray)));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(bar: &mut StatusBar, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_preview_and_hints_rendered() {
        let mut bar = StatusBar::new("👍 thumbs up · tone: medium".to_string());
        let text = render_to_text(&mut bar, 100);
        assert!(text.contains("thumbs up"));
        assert!(text.contains("Enter pick"));
    }

    #[test]
    fn test_hints_dropped_on_narrow_terminal() {
        let mut bar = StatusBar::new("👍 thumbs up".to_string());
        let text = render_to_text(&mut bar, 20);
        assert!(text.contains("thumbs up"));
        assert!(!text.contains("Enter pick"));
    }
}
