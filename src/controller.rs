//! Touch-to-gesture state machine: pick up an item, drag its proxy, judge the drop.
//!
//! The controller is Idle or Dragging. Touch-begin on an item moves it to Dragging and
//! spawns a proxy; touch-end always returns it to Idle and destroys the proxy. Game over is
//! orthogonal: once entered, no new drag can start until [`DragGestureController::restart`].

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::geometry::{Point, Rect, ScreenTransform};
use crate::host::{GameOverSignal, ProxyHost, ScoreTracker};
use crate::state::{DragSession, GameState, PendingGameOver, TimerEvent, TouchPhase, TouchSample};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Correct item dropped on the target.
    Success,
    /// Wrong item dropped on the target.
    Fail,
    /// Released outside the target.
    Miss,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    pub score: u32,
    pub fail_count: u32,
    pub is_over: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropReport {
    pub outcome: Outcome,
    pub index: usize,
    pub counters: Counters,
}

pub struct DragGestureController<H, S, G> {
    config: GameConfig,
    transform: ScreenTransform,
    host: H,
    score: S,
    game_over: G,
    state: GameState,
    session: Option<DragSession>,
    pending: PendingGameOver,
}

impl<H, S, G> DragGestureController<H, S, G>
where
    H: ProxyHost,
    S: ScoreTracker,
    G: GameOverSignal,
{
    /// Validates `config` and starts the first game with a zeroed score.
    pub fn new(config: GameConfig, host: H, score: S, game_over: G) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut ctl = Self {
            config,
            transform: ScreenTransform::IDENTITY,
            host,
            score,
            game_over,
            state: GameState::default(),
            session: None,
            pending: PendingGameOver::default(),
        };
        ctl.score.reset();
        log::info!(
            "game ready: {} items, correct={}",
            ctl.config.items.len(),
            ctl.config.correct_item().name
        );
        Ok(ctl)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn transform(&self) -> ScreenTransform {
        self.transform
    }

    pub fn set_transform(&mut self, transform: ScreenTransform) {
        self.transform = transform;
    }

    pub fn counters(&self) -> Counters {
        Counters {
            score: self.score.get(),
            fail_count: self.state.fail_count,
            is_over: self.state.is_over,
        }
    }

    /// True while a success is waiting out its delay.
    #[cfg(test)]
    pub fn success_pending(&self) -> bool {
        self.pending.is_pending()
    }

    /// First item, by ascending index, whose region contains the stage point.
    pub fn hit_test(&self, local: Point) -> Option<usize> {
        self.config.items.iter().position(|item| item.region.contains(local))
    }

    pub fn on_touch_begin(&mut self, screen: Point) -> Option<DragSession> {
        if self.session.is_some() {
            log::debug!("touch-begin ignored: drag already active");
            return None;
        }
        if self.state.is_over {
            log::debug!("touch-begin ignored: game over");
            return None;
        }
        let local = self.transform.screen_to_local(screen);
        let index = self.hit_test(local)?;
        let proxy = self.host.spawn_proxy(index, &self.config.items[index], local);
        let session = DragSession {
            index,
            proxy,
            position: local,
        };
        log::debug!("drag start: {} at ({:.1}, {:.1})", self.config.items[index].name, local.x, local.y);
        self.session = Some(session);
        Some(session)
    }

    pub fn on_touch_move(&mut self, screen: Point) -> Option<DragSession> {
        let local = self.transform.screen_to_local(screen);
        let session = self.session.as_mut()?;
        session.position = local;
        self.host.move_proxy(session.proxy, local);
        Some(*session)
    }

    pub fn on_touch_end(&mut self) -> Option<DropReport> {
        let session = self.session.take()?;
        let item = &self.config.items[session.index];
        let proxy_rect = Rect::centered_at(session.position, item.region.width, item.region.height);
        let in_target = proxy_rect.overlaps(&self.config.drop_target);
        let is_correct = session.index == self.config.correct_index;

        let outcome = match (in_target, is_correct) {
            (true, true) => {
                self.score.increment();
                self.pending
                    .schedule(self.config.success_delay_secs, self.state.generation);
                Outcome::Success
            }
            (true, false) => {
                self.state.fail_count = self.state.fail_count.saturating_add(1);
                if self.state.fail_count >= self.config.fail_threshold {
                    self.enter_game_over();
                }
                Outcome::Fail
            }
            (false, _) => Outcome::Miss,
        };

        self.host.destroy_proxy(session.proxy);
        let report = DropReport {
            outcome,
            index: session.index,
            counters: self.counters(),
        };
        log::info!(
            "drop {}: {:?} (score={}, fails={})",
            self.config.items[session.index].name,
            outcome,
            report.counters.score,
            report.counters.fail_count
        );
        Some(report)
    }

    pub fn handle(&mut self, sample: TouchSample) -> Option<DropReport> {
        match sample.phase {
            TouchPhase::Began => {
                self.on_touch_begin(sample.position);
                None
            }
            TouchPhase::Moved => {
                self.on_touch_move(sample.position);
                None
            }
            TouchPhase::Ended => self.on_touch_end(),
        }
    }

    /// Advances the delayed game-over. Returns true on the tick it fires.
    pub fn tick(&mut self, dt_secs: f64) -> bool {
        match self.pending.advance(dt_secs, self.state.generation) {
            TimerEvent::Fired => self.enter_game_over(),
            TimerEvent::Stale => {
                log::warn!("dropped game-over timer from an earlier game");
                false
            }
            TimerEvent::Idle | TimerEvent::Waiting => false,
        }
    }

    /// Starts a new game: cancels any pending game-over, drops a live drag and zeroes the
    /// counters.
    pub fn restart(&mut self) {
        if let Some(session) = self.session.take() {
            self.host.destroy_proxy(session.proxy);
        }
        self.pending.cancel();
        self.state.advance();
        self.score.reset();
        log::info!("new game (generation {})", self.state.generation);
    }

    fn enter_game_over(&mut self) -> bool {
        if !self.state.finish() {
            return false;
        }
        self.pending.cancel();
        log::info!("Game Over. Score: {}", self.score.get());
        self.game_over.show();
        true
    }
}
