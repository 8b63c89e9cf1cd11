use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::quiz::{LoadRequest, QuizSession};
use crate::trivia::QuestionProvider;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

const COMMAND_QUEUE: usize = 8;

/// Run the quiz TUI until the user quits.
///
/// Fetches run on `runtime`; the draw/event loop stays on the calling thread.
pub fn run(
    runtime: Handle,
    provider: Arc<dyn QuestionProvider>,
    request: LoadRequest,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(120);
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    runtime.spawn(command_worker(
        Arc::clone(&provider),
        command_rx,
        events.sender(),
    ));

    let mut app = App::new(QuizSession::new(provider), request, command_tx);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.start_load();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::QuestionsFetched { generation, result }) => {
                app.on_questions_fetched(generation, result)
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

/// Execute UI commands against the provider, posting results back as events.
pub async fn command_worker(
    provider: Arc<dyn QuestionProvider>,
    mut commands: mpsc::Receiver<UiCommand>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::FetchQuestions {
                generation,
                request,
            } => {
                let provider = Arc::clone(&provider);
                let events = events.clone();
                tokio::spawn(async move {
                    let result = provider.fetch(&request).await;
                    if events
                        .send(AppEvent::QuestionsFetched { generation, result })
                        .is_err()
                    {
                        tracing::trace!("Fetch result dropped (event loop gone)");
                    }
                });
            }
        }
    }
}
