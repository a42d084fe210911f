use crate::engine::{Point, Renderer};
use crate::game::board;
use crate::game::player::Player;
use crate::sprite::{Assets, Sprite};
use rand::Rng;

/// Width of the bug sprite, which is also its collision span.
const ENEMY_WIDTH: f32 = 101.0;
/// The player sprite is narrower than its cell; collisions use this inset
/// span of the player's cell.
const PLAYER_HIT_LEFT: i16 = 24;
const PLAYER_HIT_RIGHT: i16 = 77;
/// px per second: BASE plus a random number of STEPs, so speeds land in
/// {100, 110, 120, 130, 140}.
const BASE_SPEED: f32 = 100.0;
const SPEED_STEP: f32 = 10.0;
const SPEED_STEPS: u32 = 5;

/// A bug crossing one of the stone lanes left to right.
pub struct Enemy {
    x: f32,
    y: i16,
    speed: f32,
}

impl Enemy {
    pub fn spawn(rng: &mut impl Rng) -> Self {
        Enemy {
            x: board::ENEMY_SPAWN_X,
            y: random_lane(rng),
            speed: random_speed(rng),
        }
    }

    /// Move by speed x elapsed seconds. Past the right boundary the bug
    /// re-enters on the left with a freshly drawn lane and speed.
    pub fn advance(&mut self, dt: f32, rng: &mut impl Rng) {
        self.x += self.speed * dt;
        if self.x > board::ENEMY_EXIT_X {
            *self = Enemy::spawn(rng);
        }
    }

    /// Lane equality plus a two-sided horizontal overlap test against the
    /// player's inset hitbox. Exact edge contact does not collide.
    pub fn overlaps(&self, player: &Player) -> bool {
        let position = player.position();
        if self.y != position.y {
            return false;
        }
        let hit_left = f32::from(position.x + PLAYER_HIT_LEFT);
        let hit_right = f32::from(position.x + PLAYER_HIT_RIGHT);
        self.x < hit_right && self.x + ENEMY_WIDTH > hit_left
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn lane(&self) -> i16 {
        self.y
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn draw(&self, renderer: &Renderer, assets: &Assets) {
        renderer.draw_image(
            assets.get(Sprite::EnemyBug),
            &Point {
                x: self.x as i16,
                y: self.y,
            },
        );
    }
}

#[cfg(test)]
impl Enemy {
    /// Test fixture: a bug parked at an exact spot.
    pub fn stationed(x: f32, y: i16, speed: f32) -> Self {
        Enemy { x, y, speed }
    }
}

fn random_lane(rng: &mut impl Rng) -> i16 {
    board::LANE_YS[rng.gen_range(0..board::LANE_YS.len())]
}

fn random_speed(rng: &mut impl Rng) -> f32 {
    BASE_SPEED + rng.gen_range(0..SPEED_STEPS) as f32 * SPEED_STEP
}
