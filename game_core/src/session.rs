//! Game loop driver
//!
//! A `Session` is one match: it owns the ball and paddles, the play-state
//! machine, the score and every timer the match needs. The host advances it
//! by real elapsed time; ball ticks, paddle polls and start polls run as
//! independent repeating timers on the session's own clock, so their
//! periods drift against each other exactly as separate intervals would.
//! Dropping or ending a session cancels every timer it owns.

use glam::Vec2;
use hecs::{Entity, World};

use crate::error::ConfigError;
use crate::fsm::{PlayAction, PlayFsm, PlayState};
use crate::systems::{check_paddles, move_paddles, paddle_snapshot, set_paddle_height};
use crate::timers::{TimerId, Timers};
use crate::{
    create_ball, create_paddle, Ball, Config, Control, ControlProbe, Events, GameRng, Score, Side,
};

/// How a finished match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub winner: Side,
    pub score: Score,
}

/// Receives the end-of-match hand-off
pub trait Navigator {
    fn request_session_end(&mut self, winner: Side, final_score: Score);
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSnapshot {
    pub ball: Vec2,
    pub left_paddle: f32,
    pub right_paddle: f32,
    pub score: Score,
    pub state: PlayState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionTimer {
    BallTick,
    PaddlePoll,
    StartPoll,
    ScoreSettle,
    WinAnnounce,
}

/// Handles of the timers currently armed
#[derive(Debug, Default)]
struct ArmedTimers {
    ball_tick: Option<TimerId>,
    paddle_poll: Option<TimerId>,
    start_poll: Option<TimerId>,
    settle: Option<TimerId>,
    announce: Option<TimerId>,
}

fn disarm(timers: &mut Timers<SessionTimer>, slot: &mut Option<TimerId>) {
    if let Some(id) = slot.take() {
        timers.cancel(id);
    }
}

pub struct Session {
    world: World,
    ball: Entity,
    config: Config,
    fsm: PlayFsm,
    timers: Timers<SessionTimer>,
    armed: ArmedTimers,
    score: Score,
    events: Events,
    rng: GameRng,
    scoring_latch: bool,
    is_scoring: bool,
    winner: Option<Side>,
}

impl Session {
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        for side in Side::BOTH {
            create_paddle(&mut world, side, config.paddle_start);
        }
        let ball = create_ball(&mut world, Vec2::new(50.0, 50.0), Vec2::ZERO);

        let mut session = Self {
            world,
            ball,
            config,
            fsm: PlayFsm::new(),
            timers: Timers::new(),
            armed: ArmedTimers::default(),
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            scoring_latch: false,
            is_scoring: false,
            winner: None,
        };
        session.enter(PlayState::NotStarted);
        Ok(session)
    }

    /// Run every timer that falls due within the next `elapsed_ms`
    pub fn advance<I, N>(&mut self, elapsed_ms: u64, input: &I, navigator: &mut N)
    where
        I: ControlProbe + ?Sized,
        N: Navigator + ?Sized,
    {
        let until = self.timers.now() + elapsed_ms;
        while let Some(timer) = self.timers.pop_due(until) {
            log::trace!("{:?} fired at {}ms", timer, self.timers.now());
            match timer {
                SessionTimer::BallTick => self.tick_ball(),
                SessionTimer::PaddlePoll => move_paddles(&mut self.world, input, &self.config),
                SessionTimer::StartPoll => {
                    if input.is_pressed(Control::Start) {
                        self.request_start();
                    }
                }
                SessionTimer::ScoreSettle => self.settle(),
                SessionTimer::WinAnnounce => self.announce(&mut *navigator),
            }
        }
        self.timers.advance_to(until);
    }

    /// Start signal; only takes effect while not started
    pub fn request_start(&mut self) -> bool {
        self.apply(PlayAction::Start)
    }

    /// Cancel every pending timer; the session stays readable but inert
    pub fn end(&mut self) {
        self.timers.clear();
        self.armed = ArmedTimers::default();
    }

    fn tick_ball(&mut self) {
        let paddles = paddle_snapshot(&self.world);
        let prev = self.ball();

        self.events.clear();
        let next = check_paddles(
            prev,
            &paddles,
            &self.config,
            &mut self.scoring_latch,
            &mut self.score,
            &mut self.events,
        );
        self.set_ball(next);

        if self.events.scored.is_some() {
            self.is_scoring = true;
            self.armed.settle = Some(
                self.timers
                    .after(self.config.settle_delay_ms, SessionTimer::ScoreSettle),
            );
            if let Some(winner) = self.score.has_winner(self.config.win_score) {
                self.declare_winner(winner);
            }
        }
    }

    fn settle(&mut self) {
        self.armed.settle = None;
        self.is_scoring = false;
        self.apply(PlayAction::SettleElapsed);
    }

    fn declare_winner(&mut self, winner: Side) {
        if !self.apply(PlayAction::WinReached) {
            return;
        }
        log::info!(
            "{} wins {} : {}",
            winner.name(),
            self.score.left,
            self.score.right
        );
        self.winner = Some(winner);
        self.armed.announce = Some(
            self.timers
                .after(self.config.settle_delay_ms, SessionTimer::WinAnnounce),
        );
    }

    fn announce<N: Navigator + ?Sized>(&mut self, navigator: &mut N) {
        self.armed.announce = None;
        if let Some(winner) = self.winner {
            log::debug!("Handing off to navigation: {} won", winner.name());
            navigator.request_session_end(winner, self.score);
        }
    }

    fn apply(&mut self, action: PlayAction) -> bool {
        let result = self.fsm.transition(action);
        if !result.success() {
            log::debug!(
                "Ignored {:?} while {:?}",
                result.action(),
                result.from_state()
            );
            return false;
        }

        log::info!(
            "Play state {:?} -> {:?}",
            result.from_state(),
            result.to_state()
        );
        self.leave(result.from_state());
        self.enter(result.to_state());
        true
    }

    fn leave(&mut self, state: PlayState) {
        match state {
            PlayState::NotStarted => disarm(&mut self.timers, &mut self.armed.start_poll),
            PlayState::Playing => {
                disarm(&mut self.timers, &mut self.armed.ball_tick);
                disarm(&mut self.timers, &mut self.armed.paddle_poll);
            }
            PlayState::Scored | PlayState::Won => {}
        }
    }

    fn enter(&mut self, state: PlayState) {
        match state {
            PlayState::NotStarted => {
                self.serve();
                self.armed.start_poll = Some(
                    self.timers
                        .every(self.config.start_poll_ms, SessionTimer::StartPoll),
                );
            }
            PlayState::Playing => {
                self.serve();
                self.armed.ball_tick = Some(
                    self.timers
                        .every(self.config.ball_tick_ms, SessionTimer::BallTick),
                );
                self.armed.paddle_poll = Some(
                    self.timers
                        .every(self.config.paddle_poll_ms, SessionTimer::PaddlePoll),
                );
            }
            PlayState::Scored => {
                self.apply(PlayAction::Resume);
            }
            PlayState::Won => {
                // A pending point settle loses to the win
                disarm(&mut self.timers, &mut self.armed.settle);
                self.is_scoring = false;
            }
        }
    }

    /// Fresh ball from the center, latch cleared
    fn serve(&mut self) {
        let ball = Ball::serve(
            self.config.ball_speed_x,
            self.config.ball_speed_y,
            &mut self.rng,
        );
        self.set_ball(ball);
        self.scoring_latch = false;
    }

    /// Replace the ball state. Only the ball tick and serve own the ball in
    /// play; outside callers use this to stage a rally in tests.
    #[doc(hidden)]
    pub fn set_ball(&mut self, next: Ball) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            *ball = next;
        }
    }

    /// Place a paddle (center, percent); clamped to the field
    pub fn set_paddle_height(&mut self, side: Side, height: f32) {
        set_paddle_height(&mut self.world, side, height);
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let paddles = paddle_snapshot(&self.world);
        RenderSnapshot {
            ball: self.ball().pos,
            left_paddle: paddles.left,
            right_paddle: paddles.right,
            score: self.score,
            state: self.fsm.state(),
        }
    }

    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.ball)
            .map(|ball| *ball)
            .unwrap_or_default()
    }

    pub fn state(&self) -> PlayState {
        self.fsm.state()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_scoring(&self) -> bool {
        self.is_scoring
    }

    pub fn scoring_latched(&self) -> bool {
        self.scoring_latch
    }

    /// Session clock in ms
    pub fn now(&self) -> u64 {
        self.timers.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
