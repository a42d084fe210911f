use gem_crossing::engine::Point;
use gem_crossing::game::artifacts::{Artifacts, ItemKind, MAX_ITEMS};
use gem_crossing::game::board::{self, Direction};
use gem_crossing::game::clock::GameClock;
use gem_crossing::game::enemy::Enemy;
use gem_crossing::game::player::Player;
use gem_crossing::game::session::Session;
use gem_crossing::sprite::Character;

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// ── enemies ──────────────────────────────────────────────────────────────────

#[test]
fn enemies_advance_monotonically_until_the_right_edge() {
    let mut rng = seeded_rng(1);
    let mut enemy = Enemy::spawn(&mut rng);
    let speed = enemy.speed();
    let mut previous = enemy.x();
    while enemy.x() <= board::ENEMY_EXIT_X - speed * 0.1 {
        enemy.advance(0.1, &mut rng);
        assert_relative_eq!(enemy.x(), previous + speed * 0.1);
        previous = enemy.x();
    }
    // the next step carries it over the boundary and back to the left spawn
    enemy.advance(0.2, &mut rng);
    assert_relative_eq!(enemy.x(), board::ENEMY_SPAWN_X);
}

#[test]
fn respawned_enemies_draw_from_the_valid_lane_and_speed_sets() {
    let mut rng = seeded_rng(2);
    let mut enemy = Enemy::spawn(&mut rng);
    for _ in 0..40 {
        // a whole-second step always moves at least one cell
        enemy.advance(1.0, &mut rng);
        assert!(board::LANE_YS.contains(&enemy.lane()));
        assert!((100.0..=140.0).contains(&enemy.speed()));
        assert_relative_eq!((enemy.speed() / 10.0).round() * 10.0, enemy.speed());
    }
}

// ── player movement ──────────────────────────────────────────────────────────

#[test]
fn rock_blocked_moves_are_idempotent_rejections() {
    let mut player = Player::new(Character::Boy);
    let blocked = Point {
        x: board::PLAYER_SPAWN.x,
        y: board::PLAYER_SPAWN.y - board::CELL_HEIGHT,
    };
    let before = player.position();
    assert_eq!(player.handle_input(Direction::Up, &[blocked]), before);
    player.tick(1.0 / 60.0);
    assert_eq!(player.position(), before);
}

#[test]
fn the_player_never_leaves_the_grid() {
    let mut player = Player::new(Character::PrincessGirl);
    let mut rng = seeded_rng(3);
    for _ in 0..500 {
        let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        let target = player.handle_input(direction, &[]);
        // a goal row target is legal; everything else stays inside the grid
        assert!((0..=board::MAX_X).contains(&target.x));
        assert!(target.y <= board::MAX_Y);
        if target.y < board::WATER_EDGE_Y {
            player.reset_round(false);
        }
        player.tick(1.0 / 60.0);
    }
}

// ── artifacts ────────────────────────────────────────────────────────────────

#[test]
fn prep_items_bounds_and_distinctness_hold_across_seeds() {
    let mut artifacts = Artifacts::new();
    for seed in 0..300 {
        let mut rng = seeded_rng(seed);
        artifacts.prep_items(&mut rng);
        let mut cells: Vec<Point> = artifacts
            .items()
            .iter()
            .map(|item| item.position)
            .chain(artifacts.rocks().iter().copied())
            .collect();
        assert!(cells.len() <= MAX_ITEMS);
        for cell in &cells {
            assert!(board::LANE_YS.contains(&cell.y));
            assert!(cell.x % board::CELL_WIDTH == 0 && (0..=board::MAX_X).contains(&cell.x));
        }
        let placed = cells.len();
        cells.sort_by_key(|cell| (cell.x, cell.y));
        cells.dedup();
        assert_eq!(cells.len(), placed);
        // rocks are blockers, never collectibles
        assert!(artifacts
            .items()
            .iter()
            .all(|item| item.kind != ItemKind::Rock));
    }
}

#[test]
fn collecting_every_sampled_item_updates_the_matching_counter() {
    for seed in 0..100 {
        let mut artifacts = Artifacts::new();
        let mut rng = seeded_rng(seed);
        artifacts.prep_items(&mut rng);
        let placed: Vec<_> = artifacts.items().to_vec();
        for item in &placed {
            let hearts = artifacts.hearts();
            let (blue, green, orange) = artifacts.gem_counts();
            assert_eq!(artifacts.collect_at(item.position), Some(item.kind));
            match item.kind {
                ItemKind::GemBlue => assert_eq!(artifacts.gem_counts().0, blue + 1),
                ItemKind::GemGreen => assert_eq!(artifacts.gem_counts().1, green + 1),
                ItemKind::GemOrange => assert_eq!(artifacts.gem_counts().2, orange + 1),
                ItemKind::Heart => assert_eq!(artifacts.hearts(), hearts + 1),
                ItemKind::Star => {
                    assert_eq!(artifacts.hearts(), hearts);
                    assert_eq!(artifacts.gem_counts(), (blue, green, orange));
                }
                ItemKind::Rock => unreachable!("rocks are never collectible"),
            }
        }
        assert!(artifacts.items().is_empty());
        // a second pickup on an emptied cell finds nothing
        if let Some(item) = placed.first() {
            assert_eq!(artifacts.collect_at(item.position), None);
        }
    }
}

// ── clock ────────────────────────────────────────────────────────────────────

#[test]
fn clock_runs_only_between_start_and_stop() {
    let mut clock = GameClock::new();
    clock.tick(5.0);
    assert_eq!(clock.display(), "00:00");
    clock.start();
    clock.tick(61.0);
    assert_eq!(clock.display(), "01:01");
    clock.stop();
    clock.tick(61.0);
    assert_eq!(clock.display(), "01:01");
    assert!(!clock.is_running());
}

// ── session invariants under random play ─────────────────────────────────────

#[test]
fn random_play_preserves_the_board_invariants() {
    for seed in 0..25 {
        let mut session = Session::new(Character::HornGirl, seeded_rng(seed));
        let mut rng = seeded_rng(seed ^ 0xDEAD);
        for _ in 0..200 {
            let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
            session.handle_move(direction);
            session.tick(1.0 / 60.0);

            let position = session.player().position();
            assert!(position.x % board::CELL_WIDTH == 0);
            assert!((0..=board::MAX_X).contains(&position.x));
            assert!((board::WATER_EDGE_Y..=board::MAX_Y).contains(&position.y));

            let artifacts = session.artifacts();
            assert!(artifacts.items().len() + artifacts.rocks().len() <= MAX_ITEMS);
            if session.is_game_over() {
                assert_eq!(artifacts.hearts(), 0);
                assert!(!session.clock().is_running());
                assert!(session.final_score() >= session.score());
            }
        }
    }
}
