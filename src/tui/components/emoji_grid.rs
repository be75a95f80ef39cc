//! # Emoji Grid Component
//!
//! The main picker surface: every category rendered as a header line
//! followed by rows of emoji cells, with a movable cursor and a scroll
//! window that keeps the cursor visible.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `EmojiGridState` lives in `TuiState`
//! - `EmojiGrid` is created each frame with borrowed state and model
//!
//! Column count depends on the terminal width, so it is computed during the
//! render pass and cached on the state for the movement methods to use on
//! the next event.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::picker::PickerModel;

/// Terminal columns reserved per emoji cell (glyph is typically 2 wide).
const CELL_WIDTH: usize = 4;

/// Persistent cursor and scroll state for the emoji grid.
pub struct EmojiGridState {
    /// Section the cursor is in.
    pub section: usize,
    /// Row index *within* the section (flat, not a visual grid row).
    pub row: usize,
    /// First visible layout line (headers and grid rows both count as lines).
    pub top_line: usize,
    /// Cells per visual row, cached from the last render.
    pub columns: usize,
    /// Visible grid lines, cached from the last render (for paging).
    pub page_rows: usize,
}

impl EmojiGridState {
    pub fn new(start_section: usize) -> Self {
        Self {
            section: start_section,
            row: 0,
            top_line: 0,
            columns: 8,
            page_rows: 8,
        }
    }

    /// The cursor position as (section, row) — the model's index pair.
    pub fn selected(&self) -> (usize, usize) {
        (self.section, self.row)
    }

    pub fn move_left(&mut self, model: &PickerModel) {
        if model.number_of_sections() == 0 {
            return;
        }
        if self.row > 0 {
            self.row -= 1;
        } else if self.section > 0 {
            self.section -= 1;
            self.row = model.number_of_items(self.section) - 1;
        }
    }

    pub fn move_right(&mut self, model: &PickerModel) {
        if model.number_of_sections() == 0 {
            return;
        }
        if self.row + 1 < model.number_of_items(self.section) {
            self.row += 1;
        } else if self.section + 1 < model.number_of_sections() {
            self.section += 1;
            self.row = 0;
        }
    }

    pub fn move_down(&mut self, model: &PickerModel) {
        if model.number_of_sections() == 0 {
            return;
        }
        let cols = self.columns.max(1);
        let items = model.number_of_items(self.section);
        let last_visual_row = (items - 1) / cols;

        if self.row + cols < items {
            self.row += cols;
        } else if self.row / cols < last_visual_row {
            // Partial last row: clamp to the final item.
            self.row = items - 1;
        } else if self.section + 1 < model.number_of_sections() {
            let column = self.row % cols;
            self.section += 1;
            self.row = column.min(model.number_of_items(self.section) - 1);
        }
    }

    pub fn move_up(&mut self, model: &PickerModel) {
        if model.number_of_sections() == 0 {
            return;
        }
        let cols = self.columns.max(1);
        if self.row >= cols {
            self.row -= cols;
        } else if self.section > 0 {
            let column = self.row % cols;
            self.section -= 1;
            let items = model.number_of_items(self.section);
            let last_row_start = ((items - 1) / cols) * cols;
            self.row = (last_row_start + column).min(items - 1);
        }
    }

    /// Tab: next category, wrapping at the end.
    pub fn next_category(&mut self, model: &PickerModel) {
        let sections = model.number_of_sections();
        if sections == 0 {
            return;
        }
        self.section = (self.section + 1) % sections;
        self.row = 0;
    }

    /// Shift+Tab: previous category, wrapping at the start.
    pub fn prev_category(&mut self, model: &PickerModel) {
        let sections = model.number_of_sections();
        if sections == 0 {
            return;
        }
        self.section = self.section.checked_sub(1).unwrap_or(sections - 1);
        self.row = 0;
    }

    pub fn jump_to_section(&mut self, model: &PickerModel, section: usize) {
        if section < model.number_of_sections() {
            self.section = section;
            self.row = 0;
        }
    }

    /// Home: first emoji of the current section.
    pub fn home(&mut self, model: &PickerModel) {
        if model.number_of_sections() > 0 {
            self.row = 0;
        }
    }

    /// End: last emoji of the current section.
    pub fn end(&mut self, model: &PickerModel) {
        if model.number_of_sections() > 0 {
            self.row = model.number_of_items(self.section) - 1;
        }
    }

    pub fn page_down(&mut self, model: &PickerModel) {
        for _ in 0..self.page_rows.max(1) {
            self.move_down(model);
        }
    }

    pub fn page_up(&mut self, model: &PickerModel) {
        for _ in 0..self.page_rows.max(1) {
            self.move_up(model);
        }
    }

    /// Layout line index of the cursor, given the current column count.
    fn cursor_line(&self, model: &PickerModel) -> usize {
        let cols = self.columns.max(1);
        let mut line = 0;
        for section in 0..self.section {
            line += 1 + model.number_of_items(section).div_ceil(cols);
        }
        line + 1 + self.row / cols
    }
}

/// Transient render wrapper for the emoji grid.
pub struct EmojiGrid<'a> {
    state: &'a mut EmojiGridState,
    model: &'a PickerModel,
}

impl<'a> EmojiGrid<'a> {
    pub fn new(state: &'a mut EmojiGridState, model: &'a PickerModel) -> Self {
        Self { state, model }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.model.number_of_sections() == 0 {
            let empty = Paragraph::new("No emoji available.")
                .style(Style::default().fg(Color::DarkGray))
                .centered();
            frame.render_widget(empty, area);
            return;
        }

        // Cache layout inputs for the movement methods.
        let cols = ((area.width as usize) / CELL_WIDTH).max(1);
        self.state.columns = cols;
        let height = area.height as usize;
        self.state.page_rows = height;

        // Keep the cursor inside the visible window.
        let cursor_line = self.state.cursor_line(self.model);
        if cursor_line < self.state.top_line {
            self.state.top_line = cursor_line;
        } else if height > 0 && cursor_line >= self.state.top_line + height {
            self.state.top_line = cursor_line + 1 - height;
        }

        let mut lines: Vec<Line> = Vec::with_capacity(height);
        let mut line_index = 0usize;
        let window = self.state.top_line..self.state.top_line + height;

        'sections: for section in 0..self.model.number_of_sections() {
            if window.contains(&line_index) {
                lines.push(Line::from(Span::styled(
                    self.model.section_header(section).to_string(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            line_index += 1;
            if line_index >= window.end {
                break 'sections;
            }

            let items = self.model.number_of_items(section);
            for row_start in (0..items).step_by(cols) {
                if window.contains(&line_index) {
                    lines.push(self.grid_row(section, row_start, cols, items));
                }
                line_index += 1;
                if line_index >= window.end {
                    break 'sections;
                }
            }
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn grid_row(&self, section: usize, row_start: usize, cols: usize, items: usize) -> Line<'a> {
        let mut spans = Vec::with_capacity(cols * 2);
        for row in row_start..(row_start + cols).min(items) {
            let glyph = self.model.emoji(section, row).glyph();
            let is_cursor = section == self.state.section && row == self.state.row;
            let style = if is_cursor {
                Style::default()
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };
            let glyph_width = UnicodeWidthStr::width(glyph.as_str()).min(CELL_WIDTH - 1);
            spans.push(Span::styled(glyph, style));
            spans.push(Span::raw(" ".repeat(CELL_WIDTH - glyph_width)));
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::emoji::{Emoji, EmojiCategory};
    use crate::test_support::{StaticProvider, empty_model, two_section_model};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    /// Grid state with a fixed column count, independent of any render.
    fn grid(columns: usize) -> EmojiGridState {
        let mut state = EmojiGridState::new(0);
        state.columns = columns;
        state
    }

    #[test]
    fn test_move_right_within_section() {
        let model = two_section_model();
        let mut state = grid(2);
        state.move_right(&model);
        assert_eq!(state.selected(), (0, 1));
    }

    #[test]
    fn test_move_right_crosses_section_boundary() {
        let model = two_section_model();
        let mut state = grid(2);
        state.row = model.number_of_items(0) - 1;
        state.move_right(&model);
        assert_eq!(state.selected(), (1, 0));
    }

    #[test]
    fn test_move_right_stops_at_last_emoji() {
        let model = two_section_model();
        let mut state = grid(2);
        state.section = 1;
        state.row = model.number_of_items(1) - 1;
        state.move_right(&model);
        assert_eq!(state.selected(), (1, model.number_of_items(1) - 1));
    }

    #[test]
    fn test_move_left_crosses_section_boundary() {
        let model = two_section_model();
        let mut state = grid(2);
        state.section = 1;
        state.row = 0;
        state.move_left(&model);
        assert_eq!(state.selected(), (0, model.number_of_items(0) - 1));
    }

    #[test]
    fn test_move_down_one_visual_row() {
        let model = two_section_model(); // section 0 has 5 items
        let mut state = grid(2);
        state.move_down(&model);
        assert_eq!(state.selected(), (0, 2));
    }

    #[test]
    fn test_move_down_clamps_to_partial_last_row() {
        let model = two_section_model();
        let mut state = grid(2);
        state.row = 3; // second visual row, second column; last row holds only item 4
        state.move_down(&model);
        assert_eq!(state.selected(), (0, 4));
    }

    #[test]
    fn test_move_down_from_last_row_enters_next_section() {
        let model = two_section_model();
        let mut state = grid(2);
        state.row = 4;
        state.move_down(&model);
        assert_eq!(state.selected(), (1, 0));
    }

    #[test]
    fn test_move_up_crosses_section_keeping_column() {
        let model = two_section_model();
        let mut state = grid(2);
        state.section = 1;
        state.row = 1; // column 1
        state.move_up(&model);
        // Section 0 has 5 items: last visual row starts at 4, column 1 clamps to item 4.
        assert_eq!(state.selected(), (0, 4));
    }

    #[test]
    fn test_category_cycling_wraps() {
        let model = two_section_model();
        let mut state = grid(2);
        state.next_category(&model);
        assert_eq!(state.section, 1);
        state.next_category(&model);
        assert_eq!(state.section, 0);
        state.prev_category(&model);
        assert_eq!(state.section, 1);
        assert_eq!(state.row, 0);
    }

    #[test]
    fn test_jump_to_out_of_range_section_is_noop() {
        let model = two_section_model();
        let mut state = grid(2);
        state.jump_to_section(&model, 9);
        assert_eq!(state.section, 0);
        state.jump_to_section(&model, 1);
        assert_eq!(state.section, 1);
    }

    #[test]
    fn test_home_and_end() {
        let model = two_section_model();
        let mut state = grid(2);
        state.row = 2;
        state.home(&model);
        assert_eq!(state.row, 0);
        state.end(&model);
        assert_eq!(state.row, model.number_of_items(0) - 1);
    }

    #[test]
    fn test_movement_safe_when_provider_yields_empty_category() {
        // The model drops the hollow category, so no movement can land on a
        // section without entries.
        let provider = StaticProvider {
            categories: vec![
                EmojiCategory {
                    name: "Smileys".to_string(),
                    emojis: vec![Emoji::new(vec![0x1F600], "grinning face", false, 6.1)],
                },
                EmojiCategory {
                    name: "Hollow".to_string(),
                    emojis: vec![],
                },
            ],
        };
        let model = PickerModel::new(&provider);
        let mut state = grid(2);
        state.move_right(&model);
        state.move_down(&model);
        state.next_category(&model);
        state.end(&model);
        state.move_left(&model);
        assert_eq!(state.selected(), (0, 0));
    }

    #[test]
    fn test_movement_on_empty_model_is_noop() {
        let model = empty_model();
        let mut state = grid(2);
        state.move_right(&model);
        state.move_down(&model);
        state.next_category(&model);
        state.end(&model);
        assert_eq!(state.selected(), (0, 0));
    }

    #[test]
    fn test_render_shows_headers_and_cursor() {
        let model = two_section_model();
        let mut state = EmojiGridState::new(0);

        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| EmojiGrid::new(&mut state, &model).render(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Smileys"));
        assert!(text.contains("Animals"));
        // Render pass recomputed the layout caches.
        assert_eq!(state.columns, 10);
        assert_eq!(state.page_rows, 10);
    }

    #[test]
    fn test_render_empty_model() {
        let model = empty_model();
        let mut state = EmojiGridState::new(0);

        let backend = TestBackend::new(30, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| EmojiGrid::new(&mut state, &model).render(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("No emoji available."));
    }

    #[test]
    fn test_scroll_window_follows_cursor() {
        let model = two_section_model();
        let mut state = EmojiGridState::new(0);
        state.section = 1;
        state.row = 2;

        // Width 7 gives one column: 2 headers + 5 + 3 grid rows = 10 lines.
        let backend = TestBackend::new(7, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| EmojiGrid::new(&mut state, &model).render(f, f.area()))
            .unwrap();

        // Cursor sits on the last layout line (index 9); with 4 visible
        // lines the window scrolls to 6..=9.
        assert_eq!(state.top_line, 6);
    }
}
