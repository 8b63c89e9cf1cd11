use crate::quiz::{LoadRequest, QuizState};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &QuizState, request: &LoadRequest) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled(
                "  quizterm",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(request.category.name, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(request.difficulty.label(), text_style),
        ];

        if !state.questions.is_empty() {
            let shown = if state.game_over {
                state.questions.len()
            } else {
                state.current_question + 1
            };
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("Question {}/{}", shown, state.questions.len()),
                text_style,
            ));
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("Score {}", state.right_answers),
                text_style,
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
