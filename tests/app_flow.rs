mod common;

use common::{history_request, raw_question, FakeProvider};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use quizterm::quiz::{QuizPhase, QuizSession};
use quizterm::trivia::{ProviderError, RawQuestion};
use quizterm::ui::app::{App, UiCommand};
use quizterm::ui::events::AppEvent;
use quizterm::ui::render::draw;
use quizterm::ui::runtime::command_worker;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn new_app(amount: u32) -> (App, mpsc::Receiver<UiCommand>) {
    let (tx, rx) = mpsc::channel(8);
    let session = QuizSession::with_rng(
        Arc::new(FakeProvider::default()),
        StdRng::seed_from_u64(17),
    );
    (App::new(session, history_request(amount), tx), rx)
}

fn two_questions() -> Vec<RawQuestion> {
    vec![
        raw_question("Who was the first Roman emperor?", "Augustus"),
        raw_question("In which year did the Berlin Wall fall?", "1989"),
    ]
}

fn expect_fetch(rx: &mut mpsc::Receiver<UiCommand>) -> u64 {
    match rx.try_recv().expect("fetch command queued") {
        UiCommand::FetchQuestions {
            generation,
            request,
        } => {
            assert_eq!(request.category.name, "History");
            generation
        }
    }
}

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn start_load_queues_a_fetch_and_shows_spinner() {
    let (mut app, mut rx) = new_app(2);
    app.start_load();

    assert_eq!(expect_fetch(&mut rx), 1);
    assert!(app.state().is_loading);
    assert_eq!(app.state().phase(), QuizPhase::Loading);
    assert!(screen(&app).contains("Fetching 2 History questions"));

    app.on_tick();
    app.on_tick();
    assert_eq!(app.spinner_tick(), 2);
}

#[test]
fn stale_fetch_results_are_ignored() {
    let (mut app, mut rx) = new_app(2);
    app.start_load();
    let first = expect_fetch(&mut rx);
    app.on_questions_fetched(first, Err(ProviderError::Status { status: 500 }));
    assert_eq!(app.state().phase(), QuizPhase::Failed);

    app.on_key(key(KeyCode::Char('r')));
    let second = expect_fetch(&mut rx);
    assert_eq!(second, first + 1);

    app.on_questions_fetched(first, Ok(two_questions()));
    assert_eq!(app.state().phase(), QuizPhase::Loading);

    app.on_questions_fetched(second, Ok(two_questions()));
    assert_eq!(app.state().phase(), QuizPhase::Answering);
}

#[test]
fn failed_load_shows_error_and_retries() {
    let (mut app, mut rx) = new_app(3);
    app.start_load();
    let generation = expect_fetch(&mut rx);
    app.on_questions_fetched(generation, Err(ProviderError::Status { status: 503 }));

    let rendered = screen(&app);
    assert!(rendered.contains("Failed to fetch questions"));
    assert!(rendered.contains("Press r to try again."));

    app.on_key(key(KeyCode::Char('r')));
    expect_fetch(&mut rx);
    assert!(app.state().is_loading);
    assert!(app.state().error.is_none());
}

#[test]
fn closed_command_channel_fails_the_load() {
    let (mut app, rx) = new_app(2);
    drop(rx);
    app.start_load();

    assert_eq!(app.state().phase(), QuizPhase::Failed);
    assert!(app
        .state()
        .error
        .as_ref()
        .unwrap()
        .to_string()
        .contains("unavailable"));
}

// ============================================================================
// Answering
// ============================================================================

#[test]
fn keyboard_session_reaches_results() {
    let (mut app, mut rx) = new_app(2);
    app.start_load();
    let generation = expect_fetch(&mut rx);
    app.on_questions_fetched(generation, Ok(two_questions()));

    let rendered = screen(&app);
    assert!(rendered.contains("Who was the first Roman emperor?"));
    assert!(rendered.contains("Augustus"));

    // Answer the first question correctly with a number key.
    let correct = app.state().correct_slot().unwrap();
    let digit = char::from(b'1' + correct as u8);
    app.on_key(key(KeyCode::Char(digit)));
    assert_eq!(app.state().phase(), QuizPhase::Answered);
    assert_eq!(app.state().right_answers, 1);
    assert!(screen(&app).contains("Correct!"));

    // Number keys do nothing once answered.
    app.on_action(quizterm::ui::input::Action::Answer(0));
    assert_eq!(app.state().saved_answers.len(), 1);

    app.on_key(key(KeyCode::Enter));
    assert_eq!(app.state().current_question, 1);
    assert_eq!(app.selected(), 0);

    // Move the highlight off the correct answer and confirm.
    let correct = app.state().correct_slot().unwrap();
    while app.selected() == correct {
        app.on_key(key(KeyCode::Down));
    }
    app.on_key(key(KeyCode::Enter));
    assert_eq!(app.state().right_answers, 1);
    assert!(screen(&app).contains("Wrong! The answer was 1989."));

    app.on_key(key(KeyCode::Enter));
    assert!(app.state().game_over);
    let rendered = screen(&app);
    assert!(rendered.contains("Game over"));
    assert!(rendered.contains("Score: 1/2 (50%)"));
}

#[test]
fn selection_wraps_around() {
    let (mut app, mut rx) = new_app(2);
    app.start_load();
    let generation = expect_fetch(&mut rx);
    app.on_questions_fetched(generation, Ok(two_questions()));

    app.on_key(key(KeyCode::Up));
    assert_eq!(app.selected(), 3);
    app.on_key(key(KeyCode::Down));
    assert_eq!(app.selected(), 0);
}

#[test]
fn new_session_after_game_over_reloads() {
    let (mut app, mut rx) = new_app(1);
    app.start_load();
    let generation = expect_fetch(&mut rx);
    app.on_questions_fetched(
        generation,
        Ok(vec![raw_question("Only question", "Yes")]),
    );
    app.on_key(key(KeyCode::Char('1')));
    app.on_key(key(KeyCode::Enter));
    assert!(app.state().game_over);

    app.on_key(key(KeyCode::Char('n')));
    assert_eq!(expect_fetch(&mut rx), generation + 1);
    assert!(app.state().is_loading);
    assert!(app.state().questions.is_empty());
}

#[test]
fn quit_keys_request_exit() {
    let (mut app, _rx) = new_app(2);
    assert!(!app.should_quit());
    app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

// ============================================================================
// Command worker
// ============================================================================

#[tokio::test]
async fn command_worker_posts_fetch_results() {
    let provider = Arc::new(FakeProvider::with_questions(two_questions()));
    let (command_tx, command_rx) = mpsc::channel(8);
    let (event_tx, event_rx) = std::sync::mpsc::channel();
    tokio::spawn(command_worker(provider.clone(), command_rx, event_tx));

    command_tx
        .send(UiCommand::FetchQuestions {
            generation: 7,
            request: history_request(2),
        })
        .await
        .unwrap();

    let event = tokio::task::spawn_blocking(move || event_rx.recv_timeout(Duration::from_secs(5)))
        .await
        .unwrap()
        .expect("fetch result delivered");
    match event {
        AppEvent::QuestionsFetched { generation, result } => {
            assert_eq!(generation, 7);
            assert_eq!(result.unwrap().len(), 2);
        }
        _ => panic!("expected QuestionsFetched"),
    }
    assert_eq!(provider.requests().len(), 1);
}
