//! The game state machine.
//!
//! `Game` owns every piece of run state and is the only thing that mutates
//! it. Combat moves to LootSelection when the monster falls and to GameOver
//! when the player does; picking an item returns to Combat against a fresh
//! monster for the next round.
//!
//! A roll is split in two so the presentation layer can animate between
//! request and resolution: `begin_roll` records the die and locks out further
//! rolls, `resolve_pending` applies the exchange. Once begun, a roll always
//! resolves; there is no cancel.

use super::constants::*;
use super::error::GameError;
use super::game_state::{GamePhase, PlayerState};
use super::presenter::Presenter;
use crate::combat::{resolve_exchange, spawn_monster, ExchangeOutcome, Monster};
use crate::items::{generate_offer, Item};
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Game {
    round: u32,
    phase: GamePhase,
    player: PlayerState,
    monster: Monster,
    offer: Vec<Item>,
    pending_roll: Option<u8>,
    last_roll: Option<u8>,
}

impl Game {
    /// Fresh run: round 1, 6/6 health, x1 damage, no items.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            round: STARTING_ROUND,
            phase: GamePhase::Combat,
            player: PlayerState::new(),
            monster: spawn_monster(STARTING_ROUND, rng),
            offer: Vec::new(),
            pending_roll: None,
            last_roll: None,
        }
    }

    /// Like [`Game::new`] but announces the first monster.
    pub fn start(presenter: &mut impl Presenter, rng: &mut impl Rng) -> Self {
        let game = Self::new(rng);
        tracing::info!(round = game.round, monster = %game.monster.name, "round started");
        presenter.on_round_started(game.round, &game.monster);
        game
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn monster(&self) -> &Monster {
        &self.monster
    }

    /// Items on offer; empty outside LootSelection.
    pub fn offer(&self) -> &[Item] {
        &self.offer
    }

    pub fn pending_roll(&self) -> Option<u8> {
        self.pending_roll
    }

    pub fn last_roll(&self) -> Option<u8> {
        self.last_roll
    }

    pub fn is_rolling(&self) -> bool {
        self.pending_roll.is_some()
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// The round the player fell in; `None` while the run is alive.
    pub fn final_round(&self) -> Option<u32> {
        self.is_over().then_some(self.round)
    }

    /// Monsters killed this run.
    pub fn monsters_defeated(&self) -> u32 {
        match self.phase {
            GamePhase::LootSelection => self.round,
            GamePhase::Combat | GamePhase::GameOver => self.round - STARTING_ROUND,
        }
    }

    fn expect_phase(&self, expected: GamePhase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::PhaseMismatch {
                expected,
                actual: self.phase,
            })
        }
    }

    fn check_can_roll(&self) -> Result<(), GameError> {
        if self.pending_roll.is_some() {
            return Err(GameError::RollInFlight);
        }
        self.expect_phase(GamePhase::Combat)
    }

    /// Accepts a die face and locks rolling until it is resolved.
    pub fn begin_roll(&mut self, die: u8) -> Result<(), GameError> {
        self.check_can_roll()?;
        if !(1..=DIE_FACES).contains(&die) {
            return Err(GameError::InvalidDieFace(die));
        }
        self.pending_roll = Some(die);
        self.last_roll = Some(die);
        Ok(())
    }

    /// Resolves the pending roll and applies the outcome.
    pub fn resolve_pending(
        &mut self,
        presenter: &mut impl Presenter,
        rng: &mut impl Rng,
    ) -> Result<ExchangeOutcome, GameError> {
        let die = self.pending_roll.take().ok_or(GameError::NoPendingRoll)?;

        let outcome = resolve_exchange(die, self.round, &self.player, &self.monster, rng);
        self.monster.current_health = outcome.monster_health;
        self.player.health = outcome.player_health;
        presenter.on_exchange_resolved(&outcome.events, &self.monster, &self.player);

        if outcome.player_defeated {
            self.phase = GamePhase::GameOver;
            tracing::info!(round = self.round, "player defeated");
            presenter.on_game_over(self.round);
        } else if outcome.monster_defeated {
            self.phase = GamePhase::LootSelection;
            self.offer = generate_offer(self.round, rng);
            tracing::info!(round = self.round, monster = %self.monster.name, "monster defeated");
            presenter.on_loot_offered(&self.offer);
        }

        Ok(outcome)
    }

    /// `begin_roll` and `resolve_pending` back to back.
    pub fn roll(
        &mut self,
        die: u8,
        presenter: &mut impl Presenter,
        rng: &mut impl Rng,
    ) -> Result<ExchangeOutcome, GameError> {
        self.begin_roll(die)?;
        self.resolve_pending(presenter, rng)
    }

    /// Asks the presenter for a die face, then rolls it.
    pub fn take_turn(
        &mut self,
        presenter: &mut impl Presenter,
        rng: &mut impl Rng,
    ) -> Result<ExchangeOutcome, GameError> {
        self.check_can_roll()?;
        let die = presenter.request_roll(rng);
        self.roll(die, presenter, rng)
    }

    /// Applies the offered item with the given id and starts the next round.
    pub fn select_item(
        &mut self,
        id: &str,
        presenter: &mut impl Presenter,
        rng: &mut impl Rng,
    ) -> Result<Item, GameError> {
        self.expect_phase(GamePhase::LootSelection)?;
        let index = self
            .offer
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| GameError::ItemNotOffered(id.to_string()))?;

        let item = self.offer.swap_remove(index);
        self.offer.clear();
        tracing::info!(round = self.round, item = %item.name, "item selected");
        self.player.apply_item(item.clone());
        self.advance_round(presenter, rng);
        Ok(item)
    }

    /// Index-based variant of [`Game::select_item`].
    pub fn select_offer(
        &mut self,
        index: usize,
        presenter: &mut impl Presenter,
        rng: &mut impl Rng,
    ) -> Result<Item, GameError> {
        self.expect_phase(GamePhase::LootSelection)?;
        let id = self
            .offer
            .get(index)
            .map(|item| item.id.clone())
            .ok_or_else(|| GameError::ItemNotOffered(format!("#{}", index + 1)))?;
        self.select_item(&id, presenter, rng)
    }

    fn advance_round(&mut self, presenter: &mut impl Presenter, rng: &mut impl Rng) {
        self.round += 1;
        self.monster = spawn_monster(self.round, rng);
        self.phase = GamePhase::Combat;
        tracing::info!(round = self.round, monster = %self.monster.name, "round started");
        presenter.on_round_started(self.round, &self.monster);
    }

    /// Starts over from round 1. Refused only while a roll is in flight.
    pub fn reset(
        &mut self,
        presenter: &mut impl Presenter,
        rng: &mut impl Rng,
    ) -> Result<(), GameError> {
        if self.pending_roll.is_some() {
            return Err(GameError::RollInFlight);
        }
        *self = Self::start(presenter, rng);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::presenter::NullPresenter;
    use crate::items::{Effect, EffectKind, Upgrade};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[derive(Default)]
    struct Tally {
        exchanges: u32,
        offers: u32,
        game_overs: Vec<u32>,
    }

    impl Presenter for Tally {
        fn on_exchange_resolved(
            &mut self,
            _events: &[crate::combat::CombatEvent],
            monster: &Monster,
            player: &PlayerState,
        ) {
            assert!(monster.current_health <= monster.max_health);
            assert!(player.health <= player.max_health);
            self.exchanges += 1;
        }

        fn on_loot_offered(&mut self, _items: &[Item]) {
            self.offers += 1;
        }

        fn on_game_over(&mut self, final_round: u32) {
            self.game_overs.push(final_round);
        }
    }

    fn thorns_item(magnitude: u32) -> Item {
        let effect = Effect::new(EffectKind::Thorns, magnitude);
        Item {
            id: "thorns".to_string(),
            name: EffectKind::Thorns.name().to_string(),
            description: effect.description(),
            upgrade: Upgrade::Effect(effect),
        }
    }

    fn game_with_monster_health(health: u32, rng: &mut impl Rng) -> Game {
        let mut game = Game::new(rng);
        game.monster.max_health = health;
        game.monster.current_health = health;
        game
    }

    #[test]
    fn test_new_game() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let game = Game::new(&mut rng);
        assert_eq!(game.round(), 1);
        assert_eq!(game.phase(), GamePhase::Combat);
        assert_eq!(game.player().health, 6);
        assert_eq!(game.monsters_defeated(), 0);
        assert!(game.offer().is_empty());
        assert!(!game.is_rolling());
    }

    #[test]
    fn test_pending_roll_blocks_second_roll() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut game = game_with_monster_health(100, &mut rng);
        game.begin_roll(3).unwrap();
        assert!(game.is_rolling());
        assert_eq!(game.begin_roll(4), Err(GameError::RollInFlight));
        assert_eq!(
            game.reset(&mut NullPresenter, &mut rng),
            Err(GameError::RollInFlight)
        );

        let outcome = game.resolve_pending(&mut NullPresenter, &mut rng).unwrap();
        assert_eq!(outcome.damage_dealt, 3);
        assert!(!game.is_rolling());
        assert_eq!(game.last_roll(), Some(3));
    }

    #[test]
    fn test_resolve_without_pending_roll() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut game = Game::new(&mut rng);
        assert!(matches!(
            game.resolve_pending(&mut NullPresenter, &mut rng),
            Err(GameError::NoPendingRoll)
        ));
    }

    #[test]
    fn test_invalid_die_face() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut game = Game::new(&mut rng);
        assert_eq!(game.begin_roll(0), Err(GameError::InvalidDieFace(0)));
        assert_eq!(game.begin_roll(7), Err(GameError::InvalidDieFace(7)));
        assert!(!game.is_rolling());
    }

    #[test]
    fn test_kill_enters_loot_selection() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut game = game_with_monster_health(2, &mut rng);
        let outcome = game.roll(6, &mut NullPresenter, &mut rng).unwrap();
        assert!(outcome.monster_defeated);
        assert_eq!(game.phase(), GamePhase::LootSelection);
        assert_eq!(game.offer().len(), OFFER_SIZE);
        assert_eq!(game.monsters_defeated(), 1);
        assert!(matches!(
            game.roll(1, &mut NullPresenter, &mut rng),
            Err(GameError::PhaseMismatch { .. })
        ));
    }

    #[test]
    fn test_select_advances_round() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut game = game_with_monster_health(1, &mut rng);
        game.roll(1, &mut NullPresenter, &mut rng).unwrap();

        let picked = game.select_offer(0, &mut NullPresenter, &mut rng).unwrap();
        assert_eq!(game.round(), 2);
        assert_eq!(game.phase(), GamePhase::Combat);
        assert!(game.offer().is_empty());
        assert_eq!(game.monster().current_health, game.monster().max_health);
        assert!(!picked.id.is_empty());
    }

    #[test]
    fn test_select_unknown_item_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut game = game_with_monster_health(1, &mut rng);
        game.roll(1, &mut NullPresenter, &mut rng).unwrap();

        let err = game
            .select_item("not-an-id", &mut NullPresenter, &mut rng)
            .unwrap_err();
        assert_eq!(err, GameError::ItemNotOffered("not-an-id".to_string()));
        assert_eq!(game.phase(), GamePhase::LootSelection);
        assert_eq!(game.offer().len(), OFFER_SIZE);
        assert!(game.select_offer(3, &mut NullPresenter, &mut rng).is_err());
    }

    #[test]
    fn test_select_outside_loot_phase() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut game = Game::new(&mut rng);
        assert_eq!(
            game.select_offer(0, &mut NullPresenter, &mut rng),
            Err(GameError::PhaseMismatch {
                expected: GamePhase::LootSelection,
                actual: GamePhase::Combat,
            })
        );
    }

    #[test]
    fn test_death_is_terminal_until_reset() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut game = game_with_monster_health(100, &mut rng);
        game.player.health = 1;
        let outcome = game.roll(1, &mut NullPresenter, &mut rng).unwrap();
        assert!(outcome.player_defeated);
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert!(game.is_over());
        assert_eq!(game.final_round(), Some(1));
        assert!(game.roll(1, &mut NullPresenter, &mut rng).is_err());

        game.reset(&mut NullPresenter, &mut rng).unwrap();
        assert_eq!(game.phase(), GamePhase::Combat);
        assert_eq!(game.round(), 1);
        assert_eq!(game.player(), &PlayerState::new());
        assert_eq!(game.final_round(), None);
    }

    #[test]
    fn test_resolve_writes_back_health() {
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        let mut game = game_with_monster_health(50, &mut rng);
        let outcome = game.roll(4, &mut NullPresenter, &mut rng).unwrap();
        assert_eq!(game.monster().current_health, 46);
        assert_eq!(game.monster().current_health, outcome.monster_health);
        assert_eq!(game.player().health, outcome.player_health);
        assert_eq!(game.player().health, 5);
    }

    #[test]
    fn test_thorns_kill_with_lethal_counterattack_ends_run() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut game = game_with_monster_health(100, &mut rng);
        game.monster.current_health = 3;
        game.player.apply_item(thorns_item(10));
        game.player.health = 1;

        let mut tally = Tally::default();
        let outcome = game.roll(1, &mut tally, &mut rng).unwrap();
        assert!(outcome.monster_defeated);
        assert!(outcome.player_defeated);
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.final_round(), Some(1));
        assert!(game.offer().is_empty());
        assert_eq!(tally.exchanges, 1);
        assert_eq!(tally.offers, 0);
        assert_eq!(tally.game_overs, vec![1]);
        assert_eq!(game.monsters_defeated(), 0);
    }

    #[test]
    fn test_thorns_kill_while_alive_offers_loot() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let mut game = game_with_monster_health(100, &mut rng);
        game.monster.current_health = 3;
        game.player.apply_item(thorns_item(10));

        let mut tally = Tally::default();
        game.roll(1, &mut tally, &mut rng).unwrap();
        assert_eq!(game.phase(), GamePhase::LootSelection);
        assert_eq!(game.player().health, 5);
        assert_eq!(game.offer().len(), OFFER_SIZE);
        assert_eq!(tally.offers, 1);
        assert!(tally.game_overs.is_empty());
    }
}
