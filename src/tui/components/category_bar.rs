//! # Category Bar Component
//!
//! Tab strip of category headers across the top of the picker. The active
//! tab follows the model's `selected_category_index` observable, so it stays
//! in sync whether the user tabs between categories or scrolls the grid
//! across a section boundary.
//!
//! Stateless: all data arrives as props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

/// Tab strip showing every section header with the active one highlighted.
pub struct CategoryBar {
    pub headers: Vec<String>,
    pub active: usize,
}

impl CategoryBar {
    pub fn new(headers: Vec<String>, active: usize) -> Self {
        Self { headers, active }
    }
}

impl Component for CategoryBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::with_capacity(self.headers.len() * 2);
        for (i, header) in self.headers.iter().enumerate() {
            let style = if i == self.active {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {header} "), style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
