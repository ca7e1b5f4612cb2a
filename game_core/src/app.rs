//! Screen navigation between the instructions screen and the game screen

use crate::error::ConfigError;
use crate::session::{MatchResult, Navigator, Session};
use crate::timers::{TimerId, Timers};
use crate::{Config, Control, ControlProbe, Score, Side};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Instructions,
    Game,
}

/// Remembers whether the instructions have been shown this browsing session
pub trait VisitStore {
    fn instructions_shown(&self) -> bool;
    fn mark_instructions_shown(&mut self);
}

/// In-memory visit flag
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryVisitStore {
    shown: bool,
}

impl MemoryVisitStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn already_shown() -> Self {
        Self { shown: true }
    }
}

impl VisitStore for MemoryVisitStore {
    fn instructions_shown(&self) -> bool {
        self.shown
    }

    fn mark_instructions_shown(&mut self) {
        self.shown = true;
    }
}

/// Text of the instructions screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionsView {
    pub lines: Vec<String>,
    pub button: &'static str,
}

pub fn instructions_text(result: Option<&MatchResult>, win_score: u8) -> InstructionsView {
    let mut lines = vec![
        "Pong".to_string(),
        "How to Play".to_string(),
        "Press SPACE to start the game.".to_string(),
        "Player one use the W and S keys to move the left paddle up and down.".to_string(),
        "Player two use the Up and Down keys to move the right paddle up and down.".to_string(),
        format!("First player to reach {win_score} points wins."),
    ];

    if let Some(result) = result {
        lines.push("Game Over".to_string());
        lines.push(format!("Winner: {}", result.winner.name()));
        lines.push(format!(
            "Final Score - Left Player: {}, Right Player: {}",
            result.score.left, result.score.right
        ));
    }

    InstructionsView {
        lines,
        button: if result.is_some() {
            "Play Again"
        } else {
            "Start Game"
        },
    }
}

#[derive(Default)]
struct PendingEnd(Option<MatchResult>);

impl Navigator for PendingEnd {
    fn request_session_end(&mut self, winner: Side, final_score: Score) {
        self.0 = Some(MatchResult {
            winner,
            score: final_score,
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppTimer {
    StartPoll,
}

/// Top-level container: routes between screens and owns the live session
pub struct App<S: VisitStore> {
    store: S,
    config: Config,
    screen: Screen,
    session: Option<Session>,
    last_result: Option<MatchResult>,
    timers: Timers<AppTimer>,
    start_poll: Option<TimerId>,
    next_seed: u64,
}

impl<S: VisitStore> App<S> {
    /// Opens on the game route; first-time visitors land on the instructions
    pub fn new(store: S, config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut app = Self {
            store,
            config,
            screen: Screen::Instructions,
            session: None,
            last_result: None,
            timers: Timers::new(),
            start_poll: None,
            next_seed: seed,
        };
        app.open_game()?;
        Ok(app)
    }

    /// Navigate to the game screen with a fresh session
    pub fn open_game(&mut self) -> Result<(), ConfigError> {
        if !self.store.instructions_shown() {
            log::debug!("Instructions not shown yet, redirecting");
            self.show_instructions();
            return Ok(());
        }

        let session = Session::new(self.config.clone(), self.next_seed)?;
        self.next_seed = self.next_seed.wrapping_add(1);

        if let Some(id) = self.start_poll.take() {
            self.timers.cancel(id);
        }
        self.session = Some(session);
        self.screen = Screen::Game;
        log::debug!("Navigated to game");
        Ok(())
    }

    /// Navigate to the instructions screen, ending any live session
    pub fn show_instructions(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.end();
        }
        self.store.mark_instructions_shown();
        self.screen = Screen::Instructions;
        if self.start_poll.is_none() {
            self.start_poll = Some(
                self.timers
                    .every(self.config.start_poll_ms, AppTimer::StartPoll),
            );
        }
        log::debug!("Navigated to instructions");
    }

    /// The instructions screen's start button
    pub fn press_start_button(&mut self) -> Result<(), ConfigError> {
        match self.screen {
            Screen::Instructions => self.open_game(),
            Screen::Game => Ok(()),
        }
    }

    pub fn advance<I: ControlProbe + ?Sized>(
        &mut self,
        elapsed_ms: u64,
        input: &I,
    ) -> Result<(), ConfigError> {
        match self.screen {
            Screen::Instructions => {
                let until = self.timers.now() + elapsed_ms;
                let mut opened_at = None;
                while let Some(AppTimer::StartPoll) = self.timers.pop_due(until) {
                    if input.is_pressed(Control::Start) {
                        opened_at = Some(self.timers.now());
                        break;
                    }
                }
                self.timers.advance_to(until);

                if let Some(at) = opened_at {
                    self.open_game()?;
                    // The new session gets the rest of this frame
                    if self.screen == Screen::Game {
                        return self.advance(until - at, input);
                    }
                }
            }
            Screen::Game => {
                let mut pending = PendingEnd::default();
                if let Some(session) = self.session.as_mut() {
                    session.advance(elapsed_ms, input, &mut pending);
                }
                if let Some(result) = pending.0 {
                    self.last_result = Some(result);
                    self.show_instructions();
                }
            }
        }
        Ok(())
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    pub fn last_result(&self) -> Option<&MatchResult> {
        self.last_result.as_ref()
    }

    pub fn instructions(&self) -> InstructionsView {
        instructions_text(self.last_result.as_ref(), self.config.win_score)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
