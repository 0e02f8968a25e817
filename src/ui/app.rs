//! Terminal front end state: the running game plus the combat log.

use crossterm::event::KeyCode;
use fate::combat::{roll_die, CombatEvent, Monster};
use fate::items::Item;
use fate::{Game, GamePhase, PlayerState, Presenter, ROLL_DELAY_MS};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Lines kept in the on-screen log.
pub const LOG_CAPACITY: usize = 5;

/// Presenter that turns game notifications into log lines.
#[derive(Debug, Default)]
pub struct CombatLog {
    lines: VecDeque<String>,
}

impl CombatLog {
    pub fn push(&mut self, line: impl Into<String>) {
        if self.lines.len() == LOG_CAPACITY {
            self.lines.pop_front();
        }
        self.lines.push_back(line.into());
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Presenter for CombatLog {
    fn on_round_started(&mut self, round: u32, monster: &Monster) {
        self.push(format!("Round {}: {} appears!", round, monster.name));
    }

    fn on_exchange_resolved(
        &mut self,
        events: &[CombatEvent],
        _monster: &Monster,
        _player: &PlayerState,
    ) {
        for event in events {
            self.push(event.to_string());
        }
    }

    fn on_loot_offered(&mut self, _items: &[Item]) {
        self.push("Choose your reward!");
    }
}

pub struct App {
    pub game: Game,
    pub log: CombatLog,
    rng: ChaCha8Rng,
    roll_started: Option<Instant>,
}

impl App {
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    pub fn with_rng(mut rng: ChaCha8Rng) -> Self {
        let mut log = CombatLog::default();
        let game = Game::start(&mut log, &mut rng);
        Self {
            game,
            log,
            rng,
            roll_started: None,
        }
    }

    /// Throws the die and starts the suspense delay.
    pub fn start_roll(&mut self, now: Instant) {
        let die = roll_die(&mut self.rng);
        match self.game.begin_roll(die) {
            Ok(()) => self.roll_started = Some(now),
            Err(err) => tracing::debug!(error = %err, "roll ignored"),
        }
    }

    /// Resolves the pending roll once the delay has passed.
    pub fn tick(&mut self, now: Instant) {
        let Some(started) = self.roll_started else {
            return;
        };
        if now.duration_since(started) < Duration::from_millis(ROLL_DELAY_MS) {
            return;
        }
        self.roll_started = None;
        if let Err(err) = self.game.resolve_pending(&mut self.log, &mut self.rng) {
            tracing::warn!(error = %err, "pending roll could not be resolved");
        }
    }

    pub fn select(&mut self, index: usize) {
        match self.game.select_offer(index, &mut self.log, &mut self.rng) {
            Ok(item) => self.log.push(format!("You took {}.", item.name)),
            Err(err) => tracing::debug!(error = %err, "selection ignored"),
        }
    }

    pub fn restart(&mut self) {
        self.log.clear();
        if let Err(err) = self.game.reset(&mut self.log, &mut self.rng) {
            tracing::debug!(error = %err, "restart ignored");
        }
    }

    /// Handles one key press. Returns false when the player wants to quit.
    pub fn handle_key(&mut self, code: KeyCode, now: Instant) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return false,
            _ => {}
        }
        match self.game.phase() {
            GamePhase::Combat => {
                if matches!(code, KeyCode::Char(' ') | KeyCode::Enter) {
                    self.start_roll(now);
                }
            }
            GamePhase::LootSelection => {
                if let KeyCode::Char(c @ '1'..='3') = code {
                    self.select(c as usize - '1' as usize);
                }
            }
            GamePhase::GameOver => {
                if matches!(code, KeyCode::Char('r') | KeyCode::Char('R')) {
                    self.restart();
                }
            }
        }
        true
    }
}
