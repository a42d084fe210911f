use crate::engine::{Point, Renderer};
use crate::game::artifacts::{Artifacts, ItemKind};
use crate::game::board::{self, Direction};
use crate::game::clock::GameClock;
use crate::game::enemy::Enemy;
use crate::game::hud;
use crate::game::player::{Player, STAR_SECONDS};
use crate::sprite::{Assets, Character};
use rand::rngs::StdRng;

/// Bugs on the road at once.
pub const ENEMY_COUNT: usize = 5;

/// One full game, owned in one place: the entities, the scoreboard state,
/// the clock, and the rng behind every spawn. Nothing here is ambient; the
/// loop passes the session into update and draw explicitly.
pub struct Session {
    player: Player,
    enemies: Vec<Enemy>,
    artifacts: Artifacts,
    clock: GameClock,
    rng: StdRng,
    game_over: bool,
}

impl Session {
    pub fn new(character: Character, mut rng: StdRng) -> Self {
        let enemies = (0..ENEMY_COUNT).map(|_| Enemy::spawn(&mut rng)).collect();
        let mut artifacts = Artifacts::new();
        artifacts.prep_items(&mut rng);
        Session {
            player: Player::new(character),
            enemies,
            artifacts,
            clock: GameClock::new(),
            rng,
            game_over: false,
        }
    }

    /// One fixed loop tick: clock, then the enemies (with the collision
    /// check against the player's committed cell), then the player's move
    /// commit. A finished session ignores ticks entirely.
    pub fn tick(&mut self, dt: f32) {
        if self.game_over {
            return;
        }
        self.clock.tick(dt);
        for enemy in &mut self.enemies {
            enemy.advance(dt, &mut self.rng);
        }
        // a starred player walks right through the bugs
        if !self.player.is_invincible()
            && self.enemies.iter().any(|enemy| enemy.overlaps(&self.player))
        {
            self.end_round(true);
        }
        self.player.tick(dt);
    }

    /// A directional key: queue the move, apply pickups on the resolved
    /// target, and detect the water row. The first move of a session starts
    /// the clock.
    pub fn handle_move(&mut self, direction: Direction) {
        if self.game_over {
            return;
        }
        self.clock.start();
        let target = self.player.handle_input(direction, self.artifacts.rocks());
        if let Some(kind) = self.artifacts.collect_at(target) {
            if kind == ItemKind::Star {
                self.player.grant_invincibility(STAR_SECONDS);
            }
        }
        if target.y < board::WATER_EDGE_Y {
            self.end_round(false);
        }
    }

    /// Rounds end at the water (scores) or on a bug (costs a heart); either
    /// way the player respawns and the board is re-dressed.
    fn end_round(&mut self, was_collision: bool) {
        self.player.reset_round(was_collision);
        let out_of_hearts = self.artifacts.reset(was_collision);
        self.artifacts.prep_items(&mut self.rng);
        if out_of_hearts {
            self.finish();
        }
    }

    /// Heart exhaustion: freeze the session and fix the final score.
    fn finish(&mut self) {
        self.game_over = true;
        self.clock.stop();
        log!("Game over - final score {}", self.final_score());
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Water crossings so far.
    pub fn score(&self) -> u32 {
        self.player.score()
    }

    /// Water crossings plus the weighted gem tally.
    pub fn final_score(&self) -> u32 {
        self.player.score() + self.artifacts.gem_score()
    }

    pub fn character(&self) -> Character {
        self.player.character()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn artifacts(&self) -> &Artifacts {
        &self.artifacts
    }

    /// Draw order matters : tiles -> enemies -> player -> items -> HUD
    pub fn draw(&self, renderer: &Renderer, assets: &Assets) {
        self.draw_board(renderer, assets);
        for enemy in &self.enemies {
            enemy.draw(renderer, assets);
        }
        self.player.draw(renderer, assets);
        self.artifacts.draw(renderer, assets);
        self.draw_hud(renderer, assets);
    }

    pub fn draw_board(&self, renderer: &Renderer, assets: &Assets) {
        renderer.clear(&board::CANVAS_RECT);
        for (row, tile) in board::ROW_TILES.iter().enumerate() {
            for column in 0..board::COLUMNS {
                renderer.draw_image(
                    assets.get(*tile),
                    &Point {
                        x: board::column_x(column),
                        y: row as i16 * board::CELL_HEIGHT,
                    },
                );
            }
        }
    }

    pub fn draw_hud(&self, renderer: &Renderer, assets: &Assets) {
        hud::draw_clock(renderer, &self.clock);
        let score = if self.game_over {
            self.final_score()
        } else {
            self.score()
        };
        hud::draw_scoreboard(renderer, assets, &self.artifacts, score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FRAME_DT;
    use approx::assert_relative_eq;
    use rand::SeedableRng;

    fn session() -> Session {
        let mut session = Session::new(Character::CatGirl, StdRng::seed_from_u64(7));
        // clear the random round so moves are unobstructed
        session.artifacts.clear_board();
        session
    }

    #[test]
    fn five_up_moves_cross_to_the_water_and_score() {
        let mut s = session();
        for _ in 0..5 {
            s.handle_move(Direction::Up);
        }
        assert_eq!(s.score(), 1);
        assert!(!s.is_game_over());
        // the round reset put the player back on spawn, with nothing queued
        s.tick(FRAME_DT);
        assert_eq!(s.player.position(), board::PLAYER_SPAWN);
        // the board was re-dressed for the next round
        assert!(s.artifacts.items().len() + s.artifacts.rocks().len() <= 4);
        assert_eq!(s.artifacts.hearts(), 5);
    }

    #[test]
    fn the_first_move_starts_the_clock() {
        let mut s = session();
        s.tick(1.0);
        assert_relative_eq!(s.clock().elapsed(), 0.0);
        s.handle_move(Direction::Left);
        s.tick(1.0);
        assert_relative_eq!(s.clock().elapsed(), 1.0);
    }

    #[test]
    fn collision_costs_a_heart_but_no_score() {
        let mut s = session();
        // climb to the middle stone lane
        s.handle_move(Direction::Up);
        s.handle_move(Direction::Up);
        s.tick(FRAME_DT);
        assert_eq!(s.player.position().y, 229);
        // park a bug on the player's cell and let the next tick find it
        s.enemies[0] = Enemy::stationed(f32::from(s.player.position().x), 229, 0.0);
        s.tick(FRAME_DT);
        assert_eq!(s.score(), 0);
        assert_eq!(s.artifacts.hearts(), 4);
        assert!(!s.is_game_over());
        assert_eq!(s.player.position(), board::PLAYER_SPAWN);
    }

    #[test]
    fn an_invincible_player_walks_through_bugs() {
        let mut s = session();
        s.artifacts
            .place_item(ItemKind::Star, Point { x: 202, y: 312 });
        s.handle_move(Direction::Up);
        assert!(s.player.is_invincible());
        s.tick(FRAME_DT);
        s.enemies[0] = Enemy::stationed(f32::from(s.player.position().x), 312, 0.0);
        s.tick(FRAME_DT);
        // no round reset happened
        assert_eq!(s.artifacts.hearts(), 5);
        assert_eq!(s.player.position(), Point { x: 202, y: 312 });
    }

    #[test]
    fn losing_the_last_heart_ends_the_game_with_a_weighted_score() {
        let mut s = session();
        s.artifacts.set_hearts(1);
        // bank an orange gem on the way up
        s.artifacts
            .place_item(ItemKind::GemOrange, Point { x: 202, y: 312 });
        s.handle_move(Direction::Up);
        s.handle_move(Direction::Up);
        s.tick(FRAME_DT);
        s.enemies[0] = Enemy::stationed(f32::from(s.player.position().x), 229, 0.0);
        s.tick(FRAME_DT);

        assert!(s.is_game_over());
        assert_eq!(s.artifacts.hearts(), 0);
        assert!(!s.clock().is_running());
        assert_eq!(s.final_score(), 60);

        // a dead session is frozen: ticks and moves change nothing
        let elapsed = s.clock().elapsed();
        s.handle_move(Direction::Up);
        s.tick(1.0);
        assert_relative_eq!(s.clock().elapsed(), elapsed);
        assert_eq!(s.player.position(), board::PLAYER_SPAWN);
        assert_eq!(s.final_score(), 60);
    }

    #[test]
    fn rocks_block_the_climb() {
        let mut s = session();
        s.artifacts.place_rock(Point { x: 202, y: 312 });
        s.handle_move(Direction::Up);
        s.tick(FRAME_DT);
        assert_eq!(s.player.position(), board::PLAYER_SPAWN);
        // stepping around the rock still works
        s.handle_move(Direction::Right);
        s.handle_move(Direction::Up);
        s.tick(FRAME_DT);
        assert_eq!(s.player.position(), Point { x: 303, y: 312 });
    }
}
