//! Fixed level geometry. The board is a 5x6 grid of 101x83 cells on a
//! 505x606 canvas: a water row on top, three stone lanes, two grass rows at
//! the bottom. Entities sit 20px above their row's tile edge, which is where
//! the lane y values come from.

use crate::engine::{Point, Rect, Size};
use crate::sprite::Sprite;

pub const COLUMNS: i16 = 5;
pub const ROWS: i16 = 6;
pub const CELL_WIDTH: i16 = 101;
pub const CELL_HEIGHT: i16 = 83;
pub const CANVAS_WIDTH: i16 = 505;
pub const CANVAS_HEIGHT: i16 = 606;

pub const CANVAS_RECT: Rect = Rect {
    position: Point { x: 0, y: 0 },
    size: Size {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
    },
};

/// Tile image of each board row, top to bottom.
pub const ROW_TILES: [Sprite; ROWS as usize] = [
    Sprite::WaterBlock,
    Sprite::StoneBlock,
    Sprite::StoneBlock,
    Sprite::StoneBlock,
    Sprite::GrassBlock,
    Sprite::GrassBlock,
];

/// y offsets of the three stone lanes that enemies patrol and items land on.
pub const LANE_YS: [i16; 3] = [63, 146, 229];

pub const PLAYER_SPAWN: Point = Point { x: 202, y: 395 };

/// Any y short of this is in the water row; reaching it ends the round as a
/// win.
pub const WATER_EDGE_Y: i16 = 63;

/// Rightmost playable column x and bottom row y.
pub const MAX_X: i16 = 404;
pub const MAX_Y: i16 = 395;

/// Enemies enter fully off-canvas on the left and leave past the right edge.
pub const ENEMY_SPAWN_X: f32 = -101.0;
pub const ENEMY_EXIT_X: f32 = 510.0;

pub fn column_x(column: i16) -> i16 {
    column * CELL_WIDTH
}

/// Every stone-row cell: the candidate set for artifact placement.
pub fn lane_cells() -> Vec<Point> {
    LANE_YS
        .iter()
        .flat_map(|&y| (0..COLUMNS).map(move |column| Point { x: column_x(column), y }))
        .collect()
}

/// A one-cell move intent from the arrow keys.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// `KeyboardEvent.code` that triggers this intent.
    pub fn key_code(self) -> &'static str {
        match self {
            Direction::Left => "ArrowLeft",
            Direction::Up => "ArrowUp",
            Direction::Right => "ArrowRight",
            Direction::Down => "ArrowDown",
        }
    }
}
