//! Integration test: full battle flow
//!
//! Drives whole campaigns through the public API: hero selection, cast
//! resolution, enemy counter attacks, level progression, defeat resets,
//! and the event stream a presentation layer would replay.

use gembattle::battle::{cast, choose_hero, enemy_turn, resume};
use gembattle::config::parse_config;
use gembattle::{BattleEvent, BattleSession, BattleState, GameConfig, Gem, ResolutionRules};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn new_session(rng: &mut ChaCha8Rng) -> BattleSession {
    BattleSession::start(GameConfig::default(), ResolutionRules::default(), rng)
}

/// Fill the whole board with one elemental kind for predictable damage.
fn paint_board(session: &mut BattleSession, gem: Gem) {
    for row in 0..session.board.size() {
        for col in 0..session.board.size() {
            session.board.set(row, col, Some(gem)).unwrap();
        }
    }
}

// =============================================================================
// Session start
// =============================================================================

#[test]
fn test_session_starts_ready_for_input() {
    let mut rng = seeded_rng();
    let session = new_session(&mut rng);

    assert_eq!(session.state, BattleState::SelectingHero);
    assert!(session.board.empty_positions().is_empty());
    assert_eq!(session.player_hp, session.player_max_hp);
    assert_eq!(session.enemy_hp, session.enemy_max_hp);
}

#[test]
fn test_initial_board_has_no_flames() {
    // Flame gems only enter play through the Fire Sorcerer
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let session = new_session(&mut rng);
        assert!(session.board.positions_of(Gem::Flame).is_empty());
    }
}

// =============================================================================
// One full player/enemy round
// =============================================================================

#[test]
fn test_full_round_returns_to_hero_selection() {
    let mut rng = seeded_rng();
    let mut session = new_session(&mut rng);
    paint_board(&mut session, Gem::Water);
    session.enemy_hp = 10_000;
    session.enemy_max_hp = 10_000;

    assert!(choose_hero(&mut session, 1));
    assert!(cast(&mut session, (2, 2), &mut rng));
    assert_eq!(session.state, BattleState::EnemyTurn);
    assert_eq!(session.enemy_hp, 10_000 - 900);

    assert!(enemy_turn(&mut session, &mut rng));
    assert_eq!(session.state, BattleState::SelectingHero);
    let lost = session.player_max_hp - session.player_hp;
    assert!((500..=1000).contains(&lost));
}

#[test]
fn test_round_events_arrive_in_resolution_order() {
    let mut rng = seeded_rng();
    let mut session = new_session(&mut rng);
    paint_board(&mut session, Gem::Water);
    session.enemy_hp = 10_000;
    session.enemy_max_hp = 10_000;
    session.drain_events();

    choose_hero(&mut session, 1);
    cast(&mut session, (2, 2), &mut rng);
    enemy_turn(&mut session, &mut rng);

    let events = session.drain_events();
    assert!(matches!(
        events[0],
        BattleEvent::CellsEliminated { damage: 900, .. }
    ));
    assert_eq!(events[1], BattleEvent::GravityApplied);
    assert_eq!(events[2], BattleEvent::RefillApplied);
    assert!(matches!(events[3], BattleEvent::EnemyAttacked { .. }));
    assert_eq!(events.len(), 4);
}

#[test]
fn test_cast_is_synchronous_board_final_on_return() {
    let mut rng = seeded_rng();
    let mut session = new_session(&mut rng);
    paint_board(&mut session, Gem::Water);
    session.enemy_hp = 10_000;
    session.enemy_max_hp = 10_000;

    choose_hero(&mut session, 3);
    cast(&mut session, (3, 3), &mut rng);

    // No transient state leaks: the board is already refilled and the
    // snapshot agrees with the session
    assert!(session.board.empty_positions().is_empty());
    let snap = session.snapshot();
    assert_eq!(snap.enemy_hp, session.enemy_hp);
    assert_eq!(snap.state, BattleState::EnemyTurn);
}

#[test]
fn test_reselecting_hero_cancels_cleanly() {
    let mut rng = seeded_rng();
    let mut session = new_session(&mut rng);
    let before = session.board.snapshot();

    choose_hero(&mut session, 0);
    choose_hero(&mut session, 3);
    choose_hero(&mut session, 5);

    assert_eq!(session.selected_hero, Some(5));
    assert_eq!(session.board.snapshot(), before);
    assert!(session.drain_events().is_empty());
}

// =============================================================================
// Level progression
// =============================================================================

fn three_level_campaign() -> GameConfig {
    parse_config(
        r#"{
            "levels": [
                {"id": 10, "enemy": {"name": "Slime", "maxHp": 100}},
                {"id": 20, "enemy": {"name": "Ogre", "maxHp": 200}},
                {"id": 30, "enemy": {"name": "Lich", "maxHp": 300}}
            ],
            "player": {"initialHp": 8000}
        }"#,
    )
}

/// Kill the current enemy with one overkill water cast.
fn win_level(session: &mut BattleSession, rng: &mut ChaCha8Rng) {
    paint_board(session, Gem::Water);
    assert!(choose_hero(session, 1));
    assert!(cast(session, (2, 2), rng));
}

#[test]
fn test_campaign_runs_level_by_level() {
    let mut rng = seeded_rng();
    let mut session =
        BattleSession::start(three_level_campaign(), ResolutionRules::default(), &mut rng);
    session.drain_events();

    win_level(&mut session, &mut rng);
    assert_eq!(session.level_index, 1);
    assert_eq!(session.enemy_hp, 200);
    assert_eq!(session.state, BattleState::SelectingHero);
    let events = session.drain_events();
    assert!(events.contains(&BattleEvent::LevelWon));
    assert!(events.contains(&BattleEvent::LevelAdvanced { next_level_id: 20 }));

    win_level(&mut session, &mut rng);
    assert_eq!(session.level_index, 2);
    assert_eq!(session.enemy_hp, 300);
    let events = session.drain_events();
    assert!(events.contains(&BattleEvent::LevelAdvanced { next_level_id: 30 }));

    win_level(&mut session, &mut rng);
    assert_eq!(session.state, BattleState::Victory);
    let events = session.drain_events();
    assert!(events.contains(&BattleEvent::LevelWon));
    assert!(events.contains(&BattleEvent::CampaignComplete));

    // Terminal: no further input is accepted
    assert!(!choose_hero(&mut session, 0));
    assert!(!enemy_turn(&mut session, &mut rng));
    assert!(!resume(&mut session));
}

#[test]
fn test_player_hp_carries_across_levels() {
    let mut rng = seeded_rng();
    let mut session =
        BattleSession::start(three_level_campaign(), ResolutionRules::default(), &mut rng);
    session.player_hp = 3_456;

    win_level(&mut session, &mut rng);

    assert_eq!(session.level_index, 1);
    assert_eq!(session.player_hp, 3_456);
    assert!(session.player_hp <= session.player_max_hp);
}

#[test]
fn test_fresh_board_on_level_advance() {
    let mut rng = seeded_rng();
    let mut session =
        BattleSession::start(three_level_campaign(), ResolutionRules::default(), &mut rng);

    win_level(&mut session, &mut rng);

    // The all-water board painted for the kill is gone
    assert!(session.board.empty_positions().is_empty());
    let water_count = session.board.positions_of(Gem::Water).len();
    assert!(water_count < 36, "board was regenerated");
}

// =============================================================================
// Defeat and reset
// =============================================================================

#[test]
fn test_defeat_resets_and_resumes_current_level() {
    let mut rng = seeded_rng();
    let mut session =
        BattleSession::start(three_level_campaign(), ResolutionRules::default(), &mut rng);

    // Clear level one, then lose on level two
    win_level(&mut session, &mut rng);
    assert_eq!(session.level_index, 1);

    session.player_hp = 1;
    session.enemy_hp = 150;
    session.state = BattleState::EnemyTurn;
    session.drain_events();

    enemy_turn(&mut session, &mut rng);

    assert_eq!(session.state, BattleState::Defeat);
    assert_eq!(session.level_index, 1, "defeat stays on the current level");
    assert_eq!(session.player_hp, session.player_max_hp);
    assert_eq!(session.enemy_hp, 200);
    let events = session.drain_events();
    assert!(events.contains(&BattleEvent::LevelLost));

    assert!(resume(&mut session));
    assert_eq!(session.state, BattleState::SelectingHero);
}

#[test]
fn test_no_input_accepted_while_defeated() {
    let mut rng = seeded_rng();
    let mut session = new_session(&mut rng);
    session.state = BattleState::EnemyTurn;
    session.player_hp = 1;

    enemy_turn(&mut session, &mut rng);
    assert_eq!(session.state, BattleState::Defeat);

    assert!(!choose_hero(&mut session, 0));
    assert!(!cast(&mut session, (2, 2), &mut rng));
    assert!(!enemy_turn(&mut session, &mut rng));
}

// =============================================================================
// Config fallback through the session
// =============================================================================

#[test]
fn test_session_survives_garbage_config() {
    let mut rng = seeded_rng();
    let config = parse_config("][ not json");
    let session = BattleSession::start(config, ResolutionRules::default(), &mut rng);

    assert_eq!(session.enemy_max_hp, 500);
    assert_eq!(session.player_max_hp, 10_000);
    assert_eq!(session.current_level().enemy.min_damage, 500);
    assert_eq!(session.current_level().enemy.max_damage, 1000);
}

#[test]
fn test_snapshot_serializes() {
    let mut rng = seeded_rng();
    let session = new_session(&mut rng);
    let json = serde_json::to_string(&session.snapshot()).unwrap();
    assert!(json.contains("\"state\":\"SelectingHero\""));
    assert!(json.contains("\"enemy_hp\":500"));
}
