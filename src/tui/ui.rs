use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::Span;

use crate::core::picker::PickerModel;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CategoryBar, EmojiGrid, StatusBar, TonePicker};
use crate::tui::components::emoji_grid::EmojiGridState;

pub fn draw_ui(frame: &mut Frame, model: &PickerModel, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [title_area, category_area, grid_area, status_area] = layout.areas(frame.area());

    // Title line
    let title_text = if tui.status_message.is_empty() {
        "moji — emoji picker".to_string()
    } else {
        format!("moji — emoji picker | {}", tui.status_message)
    };
    frame.render_widget(Span::raw(title_text), title_area);

    // Category tabs follow the observable, not the grid cursor, so they stay
    // correct however the active category got changed.
    CategoryBar::new(
        model.section_headers().map(String::from).collect(),
        *model.selected_category_index.get(),
    )
    .render(frame, category_area);

    EmojiGrid::new(&mut tui.grid, model).render(frame, grid_area);

    StatusBar::new(preview_text(model, &tui.grid)).render(frame, status_area);

    // Modal overlay goes last so it draws over the grid.
    if let Some(ref mut tone_state) = tui.tone_picker {
        let (section, row) = tone_state.target;
        let emoji = model.emoji(section, row);
        TonePicker::new(tone_state, emoji).render(frame, frame.area());
    }
}

/// Status preview for the emoji under the grid cursor.
fn preview_text(model: &PickerModel, grid: &EmojiGridState) -> String {
    if model.number_of_sections() == 0 {
        return String::new();
    }
    let (section, row) = grid.selected();
    let emoji = model.emoji(section, row);
    if emoji.supports_skin_tones {
        let tone = emoji.skin_tone().map_or("default", |t| t.label());
        format!("{} {} · tone: {}", emoji.glyph(), emoji.name, tone)
    } else {
        format!("{} {}", emoji.glyph(), emoji.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::emoji::SkinTone;
    use crate::test_support::{empty_model, smileys_model, two_section_model};
    use crate::tui::components::TonePickerState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui() {
        let model = two_section_model();
        let mut tui = TuiState::new(0);

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &model, &mut tui)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("moji — emoji picker"));
        assert!(text.contains("Smileys"));
        assert!(text.contains("Animals"));
    }

    #[test]
    fn test_draw_ui_with_empty_model() {
        let model = empty_model();
        let mut tui = TuiState::new(0);

        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &model, &mut tui)).unwrap();

        assert!(buffer_text(&terminal).contains("No emoji available."));
    }

    #[test]
    fn test_draw_ui_with_tone_overlay() {
        let model = smileys_model();
        let mut tui = TuiState::new(0);
        tui.tone_picker = Some(TonePickerState::new((0, 1), None));

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &model, &mut tui)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Skin tone"));
        assert!(text.contains("default"));
    }

    #[test]
    fn test_preview_text_with_tone() {
        let mut model = smileys_model();
        model.update_emoji_skin_tone(SkinTone::Medium.raw(), 0, 1);
        let mut grid = EmojiGridState::new(0);
        grid.row = 1;
        let preview = preview_text(&model, &grid);
        assert!(preview.contains("thumbs up"));
        assert!(preview.contains("tone: medium"));
    }

    #[test]
    fn test_preview_text_without_tone_support() {
        let model = smileys_model();
        let grid = EmojiGridState::new(0);
        let preview = preview_text(&model, &grid);
        assert!(preview.contains("grinning face"));
        assert!(!preview.contains("tone:"));
    }

    #[test]
    fn test_preview_text_empty_model() {
        let model = empty_model();
        let grid = EmojiGridState::new(0);
        assert!(preview_text(&model, &grid).is_empty());
    }
}
