//! HUD and overlay drawing: clock, scoreboard, and the final-score panel.
//! All offsets are canvas pixels on the fixed 505x606 surface.

use crate::engine::{Point, Rect, Renderer, Size, TextAlign, TextStyle};
use crate::game::artifacts::Artifacts;
use crate::game::board;
use crate::game::clock::GameClock;
use crate::sprite::{Assets, Sprite};

// shared palette
pub const INK: &str = "#7D5D28";
pub const PARCHMENT: &str = "#FFF0D5";
pub const PINE: &str = "#195045";
pub const SAGE: &str = "#90ACA7";
pub const BLACK: &str = "#000000";
pub const WHITE: &str = "#ffffff";

pub const CENTER_X: i16 = board::CANVAS_WIDTH / 2;

const HUD_FONT: &str = "24px Arial";

/// counter icons along the bottom edge
const ICON_SIZE: Size = Size {
    width: 32,
    height: 54,
};

pub const PLAY_AGAIN_BUTTON: Rect = Rect {
    position: Point { x: 40, y: 360 },
    size: Size {
        width: 200,
        height: 60,
    },
};

pub const MENU_BUTTON: Rect = Rect {
    position: Point { x: 300, y: 360 },
    size: Size {
        width: 160,
        height: 60,
    },
};

fn hud_style(color: &str) -> TextStyle {
    TextStyle {
        font: HUD_FONT,
        color,
        align: TextAlign::Left,
    }
}

pub fn draw_clock(renderer: &Renderer, clock: &GameClock) {
    let style = hud_style(INK);
    renderer.text("Time:", &Point { x: 0, y: 40 }, &style);
    renderer.text(&clock.display(), &Point { x: 65, y: 40 }, &style);
}

pub fn draw_scoreboard(renderer: &Renderer, assets: &Assets, artifacts: &Artifacts, score: u32) {
    renderer.text(
        &format!("Score: {}", score),
        &Point { x: 330, y: 40 },
        &hud_style(INK),
    );

    // gem tallies along the bottom, heart count on the right
    let counter = hud_style(BLACK);
    let (blue, green, orange) = artifacts.gem_counts();
    renderer.text(&blue.to_string(), &Point { x: 165, y: 575 }, &counter);
    renderer.text(&green.to_string(), &Point { x: 266, y: 575 }, &counter);
    renderer.text(&orange.to_string(), &Point { x: 367, y: 575 }, &counter);
    renderer.draw_image_scaled(
        assets.get(Sprite::GemBlue),
        &Rect::new(Point { x: 120, y: 532 }, ICON_SIZE),
    );
    renderer.draw_image_scaled(
        assets.get(Sprite::GemGreen),
        &Rect::new(Point { x: 221, y: 532 }, ICON_SIZE),
    );
    renderer.draw_image_scaled(
        assets.get(Sprite::GemOrange),
        &Rect::new(Point { x: 322, y: 532 }, ICON_SIZE),
    );
    renderer.draw_image_scaled(
        assets.get(Sprite::Heart),
        &Rect::new(Point { x: 423, y: 538 }, ICON_SIZE),
    );
    renderer.text(
        &artifacts.hearts().to_string(),
        &Point { x: 468, y: 575 },
        &counter,
    );
}

/// The end-of-game panel: final score plus the restart/menu buttons.
pub fn draw_final_score(renderer: &Renderer, final_score: u32) {
    renderer.fill_rect(
        &Rect::new(
            Point { x: 20, y: 100 },
            Size {
                width: 460,
                height: 340,
            },
        ),
        PARCHMENT,
    );

    let headline = TextStyle {
        font: "54px Arial",
        color: INK,
        align: TextAlign::Center,
    };
    renderer.text("FINAL SCORE", &Point { x: CENTER_X, y: 200 }, &headline);
    renderer.text(
        &final_score.to_string(),
        &Point { x: CENTER_X, y: 280 },
        &headline,
    );

    renderer.fill_rect(&PLAY_AGAIN_BUTTON, INK);
    renderer.fill_rect(&MENU_BUTTON, INK);
    let label = TextStyle {
        font: "32px Arial",
        color: WHITE,
        align: TextAlign::Center,
    };
    renderer.text("Play Again?", &Point { x: 140, y: 400 }, &label);
    renderer.text("Menu", &Point { x: 380, y: 400 }, &label);
}
