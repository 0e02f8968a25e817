//! Integration test: whole games through the public `Game` API.
//!
//! Plays seeded games and checks the run-level rules: phase transitions,
//! monotonic player growth, round numbering and the notifications a
//! presenter receives. Stacked Lifesteal and Vampiric Strike can outheal
//! every counterattack, so runs are capped and only some of them end.

use fate::combat::{CombatEvent, Monster};
use fate::items::{Item, ItemCategory};
use fate::{Game, GameError, GamePhase, NullPresenter, PlayerState, Presenter, OFFER_SIZE};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

const ROLL_CAP: u32 = 3_000;

/// Records every notification for later inspection.
#[derive(Default)]
struct Recorder {
    rounds_started: Vec<u32>,
    exchanges: usize,
    offers: Vec<Vec<Item>>,
    game_over: Vec<u32>,
    events: Vec<CombatEvent>,
}

impl Presenter for Recorder {
    fn on_round_started(&mut self, round: u32, monster: &Monster) {
        assert_eq!(monster.current_health, monster.max_health);
        self.rounds_started.push(round);
    }

    fn on_exchange_resolved(
        &mut self,
        events: &[CombatEvent],
        _monster: &Monster,
        _player: &PlayerState,
    ) {
        self.exchanges += 1;
        self.events.extend_from_slice(events);
    }

    fn on_loot_offered(&mut self, items: &[Item]) {
        self.offers.push(items.to_vec());
    }

    fn on_game_over(&mut self, final_round: u32) {
        self.game_over.push(final_round);
    }
}

/// Plays until game over or `max_rolls` rolls, picking a random card each
/// time. The cap is only checked in combat, so a capped game never stops
/// with an offer open.
fn play(seed: u64, max_rolls: u32, presenter: &mut impl Presenter) -> Game {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut game = Game::start(presenter, &mut rng);
    let mut prev = game.player().clone();
    let mut prev_round = game.round();
    let mut rolls = 0;

    loop {
        match game.phase() {
            GamePhase::Combat => {
                if rolls == max_rolls {
                    break;
                }
                game.take_turn(presenter, &mut rng).unwrap();
                rolls += 1;
            }
            GamePhase::LootSelection => {
                let offer = game.offer().to_vec();
                assert_eq!(offer.len(), OFFER_SIZE);
                let ids: HashSet<&str> = offer.iter().map(|i| i.id.as_str()).collect();
                assert_eq!(ids.len(), OFFER_SIZE, "offer ids must be distinct");

                let pick = rng.gen_range(0..offer.len());
                let item = game.select_offer(pick, presenter, &mut rng).unwrap();
                assert_eq!(item.id, offer[pick].id);
                assert_eq!(game.round(), prev_round + 1);
                prev_round = game.round();
            }
            GamePhase::GameOver => break,
        }

        let player = game.player();
        assert!(player.damage_percent >= prev.damage_percent);
        assert!(player.max_health >= prev.max_health);
        assert!(player.items.len() >= prev.items.len());
        assert!(player.items.starts_with(&prev.items));
        assert!(player.health <= player.max_health);
        prev = player.clone();
    }

    game
}

/// First seed at or after `from` whose capped game ends in GameOver.
fn first_finished<P: Presenter + Default>(from: u64) -> (Game, P) {
    for seed in from..from + 50 {
        let mut presenter = P::default();
        let game = play(seed, ROLL_CAP, &mut presenter);
        if game.is_over() {
            return (game, presenter);
        }
    }
    panic!("no game from seed {from} onward finished within {ROLL_CAP} rolls");
}

// =========================================================================
// Whole runs
// =========================================================================

#[test]
fn test_capped_runs_hold_run_invariants() {
    for seed in 0..20 {
        let game = play(seed, ROLL_CAP, &mut NullPresenter);
        assert_eq!(game.monsters_defeated(), game.round() - 1);
        assert!(game.offer().is_empty());
        if game.is_over() {
            assert_eq!(game.player().health, 0);
            assert_eq!(game.final_round(), Some(game.round()));
        } else {
            assert_eq!(game.phase(), GamePhase::Combat);
            assert!(game.player().health > 0);
            assert_eq!(game.final_round(), None);
        }
    }
}

#[test]
fn test_capped_run_can_stay_alive() {
    // Two round-one counterattacks deal at most 4 damage.
    let mut recorder = Recorder::default();
    let game = play(40, 2, &mut recorder);
    assert!(!game.is_over());
    assert!(game.player().health > 0);
    assert_eq!(game.final_round(), None);
    assert!(recorder.game_over.is_empty());
    assert_eq!(recorder.exchanges, 2);
}

#[test]
fn test_presenter_sees_every_transition() {
    let (game, recorder) = first_finished::<Recorder>(21);

    let expected: Vec<u32> = (1..=game.round()).collect();
    assert_eq!(recorder.rounds_started, expected);
    assert_eq!(recorder.offers.len() as u32, game.monsters_defeated());
    assert_eq!(recorder.game_over, vec![game.round()]);
    assert!(recorder.exchanges >= recorder.rounds_started.len());
    assert_eq!(
        recorder
            .events
            .iter()
            .filter(|e| matches!(e, CombatEvent::PlayerDefeated))
            .count(),
        1
    );
}

#[test]
fn test_same_seed_same_game() {
    let a = play(33, ROLL_CAP, &mut NullPresenter);
    let b = play(33, ROLL_CAP, &mut NullPresenter);
    assert_eq!(a.phase(), b.phase());
    assert_eq!(a.round(), b.round());
    assert_eq!(a.player(), b.player());
    assert_eq!(a.monster(), b.monster());
}

#[test]
fn test_game_over_rejects_actions_until_reset() {
    let (mut game, _) = first_finished::<NullPresenter>(5);
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    assert_eq!(
        game.begin_roll(3),
        Err(GameError::PhaseMismatch {
            expected: GamePhase::Combat,
            actual: GamePhase::GameOver,
        })
    );
    assert!(game.select_offer(0, &mut NullPresenter, &mut rng).is_err());
    assert!(game.take_turn(&mut NullPresenter, &mut rng).is_err());

    game.reset(&mut NullPresenter, &mut rng).unwrap();
    assert_eq!(game.phase(), GamePhase::Combat);
    assert_eq!(game.round(), 1);
    assert_eq!(game.player(), &PlayerState::new());
    assert_eq!(game.last_roll(), None);
}

// =========================================================================
// Single steps
// =========================================================================

#[test]
fn test_reset_mid_run_starts_over() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut game = Game::new(&mut rng);
    game.roll(6, &mut NullPresenter, &mut rng).unwrap();
    game.reset(&mut NullPresenter, &mut rng).unwrap();
    assert_eq!(game.round(), 1);
    assert_eq!(game.player().health, 6);
}

#[test]
fn test_health_pick_raises_max_and_current() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    for _ in 0..200 {
        let mut game = Game::new(&mut rng);
        // Kill the round-1 monster outright; it has at most 11 health.
        while game.phase() == GamePhase::Combat {
            game.roll(6, &mut NullPresenter, &mut rng).unwrap();
        }
        if game.phase() != GamePhase::LootSelection {
            continue;
        }
        let Some(index) = game
            .offer()
            .iter()
            .position(|i| i.category() == ItemCategory::Health)
        else {
            continue;
        };

        let before = game.player().clone();
        let item = game.select_offer(index, &mut NullPresenter, &mut rng).unwrap();
        let gain = item.magnitude() as u32;
        assert_eq!(game.player().max_health, before.max_health + gain);
        assert_eq!(game.player().health, before.health + gain);
        return;
    }
    panic!("no health item offered in 200 games");
}
