use crate::engine::{Point, Renderer};
use crate::game::board::{self, Direction};
use crate::sprite::{Assets, Character};

/// Seconds of invincibility granted by a star.
pub const STAR_SECONDS: f32 = 5.0;

/// The grid-bound player: a committed cell, the queued target cell applied on
/// the next tick, and the star window counted down tick by tick.
pub struct Player {
    position: Point,
    queued: Point,
    character: Character,
    invincibility: f32,
    score: u32,
}

impl Player {
    pub fn new(character: Character) -> Self {
        Player {
            position: board::PLAYER_SPAWN,
            queued: board::PLAYER_SPAWN,
            character,
            invincibility: 0.0,
            score: 0,
        }
    }

    /// Queue a one-cell move. The candidate steps off the queued target so
    /// presses arriving between ticks chain; it is bounded to the board, and
    /// a rock on the candidate cell reverts it. Returns the resolved target
    /// so the caller can apply pickups and goal detection before the commit.
    pub fn handle_input(&mut self, direction: Direction, rocks: &[Point]) -> Point {
        let queued = self.queued;
        let candidate = match direction {
            Direction::Left if queued.x > 0 => Point {
                x: queued.x - board::CELL_WIDTH,
                y: queued.y,
            },
            Direction::Right if queued.x < board::MAX_X => Point {
                x: queued.x + board::CELL_WIDTH,
                y: queued.y,
            },
            Direction::Up if queued.y > 0 => Point {
                x: queued.x,
                y: queued.y - board::CELL_HEIGHT,
            },
            Direction::Down if queued.y < board::MAX_Y => Point {
                x: queued.x,
                y: queued.y + board::CELL_HEIGHT,
            },
            _ => queued,
        };
        self.queued = if rocks.contains(&candidate) {
            queued
        } else {
            candidate
        };
        self.queued
    }

    /// Once per loop tick: commit the queued target and run down the star
    /// window.
    pub fn tick(&mut self, dt: f32) {
        self.position = self.queued;
        self.invincibility = (self.invincibility - dt).max(0.0);
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility > 0.0
    }

    /// A fresh star replaces whatever window remains; durations never stack.
    pub fn grant_invincibility(&mut self, seconds: f32) {
        self.invincibility = seconds;
    }

    /// Back to the spawn cell. Only rounds that ended at the water score.
    pub fn reset_round(&mut self, was_collision: bool) {
        if !was_collision {
            self.score += 1;
        }
        self.position = board::PLAYER_SPAWN;
        self.queued = board::PLAYER_SPAWN;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn character(&self) -> Character {
        self.character
    }

    pub fn draw(&self, renderer: &Renderer, assets: &Assets) {
        renderer.draw_image(assets.get(self.character.sprite()), &self.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn player() -> Player {
        Player::new(Character::CatGirl)
    }

    #[test]
    fn moves_stay_on_the_board() {
        let mut p = player();
        // spawn is on the bottom row, so Down is a no-op
        assert_eq!(p.handle_input(Direction::Down, &[]), board::PLAYER_SPAWN);
        // walk to the left edge and keep pushing
        for _ in 0..5 {
            p.handle_input(Direction::Left, &[]);
        }
        assert_eq!(p.handle_input(Direction::Left, &[]).x, 0);
        // and to the right edge
        for _ in 0..6 {
            p.handle_input(Direction::Right, &[]);
        }
        assert_eq!(p.handle_input(Direction::Right, &[]).x, board::MAX_X);
    }

    #[test]
    fn rock_on_the_target_cell_reverts_the_move() {
        let mut p = player();
        let before = p.handle_input(Direction::Right, &[]);
        let blocked = Point {
            x: before.x,
            y: before.y - board::CELL_HEIGHT,
        };
        // blocked move resolves to the queued position it started from
        assert_eq!(p.handle_input(Direction::Up, &[blocked]), before);
        // and repeating it changes nothing
        assert_eq!(p.handle_input(Direction::Up, &[blocked]), before);
        p.tick(0.0);
        assert_eq!(p.position(), before);
    }

    #[test]
    fn queued_moves_commit_on_tick() {
        let mut p = player();
        let target = p.handle_input(Direction::Up, &[]);
        assert_eq!(p.position(), board::PLAYER_SPAWN);
        p.tick(1.0 / 60.0);
        assert_eq!(p.position(), target);
    }

    // 1/64s divides 5.0 exactly in f32, so these window tests are precise
    const TICK: f32 = 0.015625;

    #[test]
    fn star_window_expires_after_exactly_five_seconds() {
        let mut p = player();
        assert!(!p.is_invincible());
        p.grant_invincibility(STAR_SECONDS);
        // one tick short of 5s, still invincible
        for _ in 0..319 {
            p.tick(TICK);
        }
        assert!(p.is_invincible());
        p.tick(TICK);
        assert!(!p.is_invincible());
    }

    #[test]
    fn recollecting_a_star_resets_the_window_instead_of_stacking() {
        let mut p = player();
        p.grant_invincibility(STAR_SECONDS);
        // 3s in, re-arm
        for _ in 0..192 {
            p.tick(TICK);
        }
        p.grant_invincibility(STAR_SECONDS);
        // 3s after the re-arm: a stacked window would have 4s left, a reset
        // one 2s
        for _ in 0..192 {
            p.tick(TICK);
        }
        assert!(p.is_invincible());
        for _ in 0..128 {
            p.tick(TICK);
        }
        assert!(!p.is_invincible());
    }

    #[test]
    fn only_goal_rounds_score() {
        let mut p = player();
        p.handle_input(Direction::Up, &[]);
        p.reset_round(false);
        assert_eq!(p.score(), 1);
        assert_eq!(p.position(), board::PLAYER_SPAWN);
        p.reset_round(true);
        assert_eq!(p.score(), 1);
        // the queued target is cleared too, so nothing commits later
        p.tick(0.0);
        assert_eq!(p.position(), board::PLAYER_SPAWN);
    }

    #[test]
    fn countdown_never_goes_negative() {
        let mut p = player();
        p.grant_invincibility(0.05);
        p.tick(1.0);
        assert_relative_eq!(p.invincibility, 0.0);
    }
}
