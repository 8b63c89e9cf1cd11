use crossterm::event::KeyEvent;
use tokio::sync::mpsc;

use crate::quiz::{LoadRequest, QuizPhase, QuizSession, QuizState};
use crate::trivia::{ProviderError, RawQuestion, ANSWER_SLOTS};
use crate::ui::input::{action_for, Action};

#[derive(Debug)]
pub enum UiCommand {
    FetchQuestions {
        generation: u64,
        request: LoadRequest,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    session: QuizSession,
    /// Parameters of the current session; reused for retries and new sessions.
    request: LoadRequest,
    /// Bumped on every load; fetch results carrying an older value are stale.
    generation: u64,
    /// Highlighted option while the current question is unanswered.
    selected: usize,
    spinner_tick: u8,
    /// Last refused operation, shown in the footer until the next action.
    notice: Option<String>,
    commands: UiCommandSender,
}

impl App {
    pub fn new(session: QuizSession, request: LoadRequest, commands: UiCommandSender) -> Self {
        Self {
            should_quit: false,
            size: None,
            session,
            request,
            generation: 0,
            selected: 0,
            spinner_tick: 0,
            notice: None,
            commands,
        }
    }

    pub fn state(&self) -> &QuizState {
        self.session.state()
    }

    pub fn request(&self) -> &LoadRequest {
        &self.request
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn spinner_tick(&self) -> u8 {
        self.spinner_tick
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Enter the loading state and hand the fetch to the command worker.
    pub fn start_load(&mut self) {
        self.generation += 1;
        self.selected = 0;
        self.notice = None;
        self.session.begin_load(&self.request);

        let command = UiCommand::FetchQuestions {
            generation: self.generation,
            request: self.request,
        };
        if let Err(err) = self.commands.try_send(command) {
            tracing::error!(error = %err, "Could not queue question fetch");
            self.session.finish_load(Err(ProviderError::Unavailable));
        }
    }

    pub fn on_questions_fetched(
        &mut self,
        generation: u64,
        result: Result<Vec<RawQuestion>, ProviderError>,
    ) {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "Dropping stale fetch result");
            return;
        }
        self.session.finish_load(result);
        self.selected = 0;
    }

    pub fn on_tick(&mut self) {
        if self.state().is_loading {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if let Some(action) = action_for(key) {
            self.on_action(action);
        }
    }

    pub fn on_action(&mut self, action: Action) {
        let phase = self.state().phase();
        self.notice = None;

        match (action, phase) {
            (Action::Quit, _) => self.request_quit(),
            (Action::Answer(option), QuizPhase::Answering) => self.answer(option),
            (Action::SelectPrev, QuizPhase::Answering) => {
                self.selected = (self.selected + ANSWER_SLOTS - 1) % ANSWER_SLOTS;
            }
            (Action::SelectNext, QuizPhase::Answering) => {
                self.selected = (self.selected + 1) % ANSWER_SLOTS;
            }
            (Action::Confirm, QuizPhase::Answering) => self.answer(self.selected),
            (Action::Confirm, QuizPhase::Answered) => self.advance(),
            (Action::Confirm | Action::Retry, QuizPhase::Failed | QuizPhase::Idle) => {
                self.start_load()
            }
            (Action::NewSession, QuizPhase::GameOver | QuizPhase::Failed) => {
                self.session.reset();
                self.start_load();
            }
            _ => {}
        }
    }

    fn answer(&mut self, option: usize) {
        if let Err(err) = self.session.check_answer(option) {
            tracing::warn!(error = %err, option, "Answer refused");
            self.notice = Some(err.to_string());
        }
    }

    fn advance(&mut self) {
        match self.session.press_continue() {
            Ok(_) => self.selected = 0,
            Err(err) => {
                tracing::warn!(error = %err, "Continue refused");
                self.notice = Some(err.to_string());
            }
        }
    }
}
