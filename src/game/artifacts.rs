use crate::engine::{Point, Rect, Renderer, Size};
use crate::game::board;
use crate::sprite::{Assets, Sprite};
use rand::seq::SliceRandom;
use rand::Rng;

/// At most this many artifacts (collectibles plus rocks) land per round.
pub const MAX_ITEMS: usize = 4;

/// Score weight per gem color, applied when the game ends.
const BLUE_WEIGHT: u32 = 20;
const GREEN_WEIGHT: u32 = 40;
const ORANGE_WEIGHT: u32 = 60;

const STARTING_HEARTS: u32 = 5;

/// Collectibles are drawn taller than their cell and nudged into its center.
const ITEM_OFFSET: Point = Point { x: 8, y: 28 };
const ITEM_SIZE: Size = Size {
    width: 83,
    height: 128,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ItemKind {
    GemBlue,
    GemGreen,
    GemOrange,
    Heart,
    Star,
    Rock,
}

impl ItemKind {
    const ALL: [ItemKind; 6] = [
        ItemKind::GemBlue,
        ItemKind::GemGreen,
        ItemKind::GemOrange,
        ItemKind::Heart,
        ItemKind::Star,
        ItemKind::Rock,
    ];

    pub fn sprite(self) -> Sprite {
        match self {
            ItemKind::GemBlue => Sprite::GemBlue,
            ItemKind::GemGreen => Sprite::GemGreen,
            ItemKind::GemOrange => Sprite::GemOrange,
            ItemKind::Heart => Sprite::Heart,
            ItemKind::Star => Sprite::Star,
            ItemKind::Rock => Sprite::Rock,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Item {
    pub kind: ItemKind,
    pub position: Point,
}

/// The per-round board dressing and the counters it feeds: live collectibles,
/// rock-blocked cells, gem tallies and the heart (life) count.
pub struct Artifacts {
    items: Vec<Item>,
    rocks: Vec<Point>,
    blue_gems: u32,
    green_gems: u32,
    orange_gems: u32,
    hearts: u32,
}

impl Artifacts {
    pub fn new() -> Self {
        Artifacts {
            items: Vec::new(),
            rocks: Vec::new(),
            blue_gems: 0,
            green_gems: 0,
            orange_gems: 0,
            hearts: STARTING_HEARTS,
        }
    }

    /// Lay out a fresh round: 0 to 4 stone-row cells sampled without
    /// replacement, each given a uniformly drawn kind. Two artifacts can
    /// never share a coordinate and placement always terminates. Rock draws
    /// populate the blocking list instead of the collectible list.
    pub fn prep_items(&mut self, rng: &mut impl Rng) {
        self.items.clear();
        self.rocks.clear();
        let count = rng.gen_range(0..=MAX_ITEMS);
        let cells = board::lane_cells();
        for &position in cells.choose_multiple(rng, count) {
            let kind = ItemKind::ALL[rng.gen_range(0..ItemKind::ALL.len())];
            if kind == ItemKind::Rock {
                self.rocks.push(position);
            } else {
                self.items.push(Item { kind, position });
            }
        }
    }

    /// Cells the player cannot step onto this round.
    pub fn rocks(&self) -> &[Point] {
        &self.rocks
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Pick up whatever sits on `position`. Gems and hearts are tallied
    /// here; the kind is returned so the caller can apply player-side
    /// effects.
    pub fn collect_at(&mut self, position: Point) -> Option<ItemKind> {
        let index = self
            .items
            .iter()
            .position(|item| item.position == position)?;
        let kind = self.items.remove(index).kind;
        match kind {
            ItemKind::GemBlue => self.blue_gems += 1,
            ItemKind::GemGreen => self.green_gems += 1,
            ItemKind::GemOrange => self.orange_gems += 1,
            ItemKind::Heart => self.hearts += 1,
            // stars act on the player; rocks never sit in the item list
            ItemKind::Star | ItemKind::Rock => {}
        }
        Some(kind)
    }

    /// End-of-round cleanup. Returns true when the last heart is gone and
    /// the game is over.
    pub fn reset(&mut self, was_collision: bool) -> bool {
        self.rocks.clear();
        if was_collision {
            self.hearts = self.hearts.saturating_sub(1);
        }
        self.hearts == 0
    }

    /// Weighted gem tally added to the score when the game ends.
    pub fn gem_score(&self) -> u32 {
        self.blue_gems * BLUE_WEIGHT
            + self.green_gems * GREEN_WEIGHT
            + self.orange_gems * ORANGE_WEIGHT
    }

    pub fn gem_counts(&self) -> (u32, u32, u32) {
        (self.blue_gems, self.green_gems, self.orange_gems)
    }

    pub fn hearts(&self) -> u32 {
        self.hearts
    }

    pub fn draw(&self, renderer: &Renderer, assets: &Assets) {
        for item in &self.items {
            renderer.draw_image_scaled(
                assets.get(item.kind.sprite()),
                &Rect::new(
                    Point {
                        x: item.position.x + ITEM_OFFSET.x,
                        y: item.position.y + ITEM_OFFSET.y,
                    },
                    ITEM_SIZE,
                ),
            );
        }
        for rock in &self.rocks {
            renderer.draw_image_scaled(
                assets.get(Sprite::Rock),
                &Rect::new(
                    Point {
                        x: rock.x + ITEM_OFFSET.x,
                        y: rock.y + ITEM_OFFSET.y,
                    },
                    ITEM_SIZE,
                ),
            );
        }
    }
}

impl Default for Artifacts {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl Artifacts {
    pub fn clear_board(&mut self) {
        self.items.clear();
        self.rocks.clear();
    }

    pub fn place_item(&mut self, kind: ItemKind, position: Point) {
        self.items.push(Item { kind, position });
    }

    pub fn place_rock(&mut self, position: Point) {
        self.rocks.push(position);
    }

    pub fn set_hearts(&mut self, hearts: u32) {
        self.hearts = hearts;
    }
}
