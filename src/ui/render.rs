use crate::quiz::{LoadRequest, QuizPhase, QuizState, SessionError, SlotLabel};
use crate::trivia::AnswerStatus;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::theme::{
    ACCENT, ANSWER_CORRECT, ANSWER_WRONG, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
    SELECTED_HIGHLIGHT,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());
    let state = app.state();
    let phase = state.phase();

    frame.render_widget(Header::new().widget(state, app.request()), header);
    frame.render_widget(Clear, body);

    let lines = match phase {
        QuizPhase::Idle => vec![Line::from("Press r to load questions.")],
        QuizPhase::Loading => loading_lines(app.request(), app.spinner_tick()),
        QuizPhase::Failed => {
            let block = Block::default()
                .title(Span::styled(" Could not load questions ", Style::default().fg(ANSWER_WRONG)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ANSWER_WRONG));
            let error_lines = state.error.as_ref().map(error_lines).unwrap_or_default();
            let area = centered_rect(70, 40, body);
            frame.render_widget(
                Paragraph::new(error_lines)
                    .wrap(Wrap { trim: true })
                    .block(block),
                area,
            );
            Vec::new()
        }
        QuizPhase::Answering | QuizPhase::Answered => question_lines(state, app.selected()),
        QuizPhase::GameOver => results_lines(state),
    };

    if phase != QuizPhase::Failed {
        let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
        frame.render_widget(widget, body);
    }

    frame.render_widget(
        Footer::new().widget(footer, hints_for(phase), app.notice()),
        footer,
    );
}

pub fn hints_for(phase: QuizPhase) -> &'static str {
    match phase {
        QuizPhase::Idle => "r: Load │ q: Quit",
        QuizPhase::Loading => "q: Quit",
        QuizPhase::Failed => "r: Retry │ n: New session │ q: Quit",
        QuizPhase::Answering => "1-4: Answer │ ↑/↓: Move │ Enter: Select │ q: Quit",
        QuizPhase::Answered => "Enter: Continue │ q: Quit",
        QuizPhase::GameOver => "n: New session │ q: Quit",
    }
}

pub fn loading_lines(request: &LoadRequest, tick: u8) -> Vec<Line<'static>> {
    let frame = SPINNER[tick as usize % SPINNER.len()];
    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {frame} "), Style::default().fg(ACCENT)),
            Span::styled(
                format!(
                    "Fetching {} {} questions ({})…",
                    request.amount, request.category.name, request.difficulty
                ),
                Style::default().fg(HEADER_TEXT),
            ),
        ]),
    ]
}

pub fn error_lines(error: &SessionError) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Press r to try again.",
            Style::default().fg(MUTED_TEXT),
        )),
    ]
}

pub fn question_lines(state: &QuizState, selected: usize) -> Vec<Line<'static>> {
    let Some(question) = state.current() else {
        return Vec::new();
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                " {} · {}",
                question.category,
                capitalize(&question.difficulty)
            ),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", question.text),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (slot, answer) in state.shuffled_answers.iter().enumerate() {
        let label = state.slot_labels.get(slot).copied().unwrap_or_default();
        let (marker, style) = match label {
            SlotLabel::Correct => (" ✓", Style::default().fg(ANSWER_CORRECT).add_modifier(Modifier::BOLD)),
            SlotLabel::Wrong => (" ✗", Style::default().fg(ANSWER_WRONG)),
            SlotLabel::None if state.press_to_continue => ("", Style::default().fg(MUTED_TEXT)),
            SlotLabel::None => ("", Style::default().fg(HEADER_TEXT)),
        };
        let highlighted = !state.press_to_continue && slot == selected;
        let pointer = if highlighted { "▶" } else { " " };

        let mut line = Line::from(vec![
            Span::styled(format!(" {pointer} {}. ", slot + 1), style),
            Span::styled(answer.clone(), style),
            Span::styled(marker, style),
        ]);
        if highlighted {
            line = line.style(Style::default().bg(SELECTED_HIGHLIGHT));
        }
        lines.push(line);
    }

    if state.press_to_continue {
        lines.push(Line::from(""));
        let verdict = match question.answer_status {
            AnswerStatus::Correct => Span::styled(
                " Correct!",
                Style::default().fg(ANSWER_CORRECT).add_modifier(Modifier::BOLD),
            ),
            _ => Span::styled(
                format!(" Wrong! The answer was {}.", question.correct_answer),
                Style::default().fg(ANSWER_WRONG).add_modifier(Modifier::BOLD),
            ),
        };
        lines.push(Line::from(verdict));
        let next = if state.is_last_question() {
            " Press Enter to see your results."
        } else {
            " Press Enter for the next question."
        };
        lines.push(Line::from(Span::styled(next, Style::default().fg(MUTED_TEXT))));
    }

    lines
}

pub fn results_lines(state: &QuizState) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            " Game over",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                " Score: {}/{} ({}%)",
                state.right_answers,
                state.questions.len(),
                state.score_percent()
            ),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (index, entry) in state.review().into_iter().enumerate() {
        let (mark, color) = match entry.status {
            AnswerStatus::Correct => ("✓", ANSWER_CORRECT),
            _ => ("✗", ANSWER_WRONG),
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {mark} "), Style::default().fg(color)),
            Span::styled(
                format!("{}. {}", index + 1, entry.text),
                Style::default().fg(HEADER_TEXT),
            ),
        ]));
        let mut detail = vec![Span::styled(
            format!("     Your answer: {}", entry.chosen),
            Style::default().fg(MUTED_TEXT),
        )];
        if entry.status != AnswerStatus::Correct {
            detail.push(Span::styled(
                format!("   Correct: {}", entry.correct),
                Style::default().fg(ANSWER_CORRECT),
            ));
        }
        lines.push(Line::from(detail));
    }

    lines
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
