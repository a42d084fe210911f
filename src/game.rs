use crate::browser;
use crate::engine::{FrameInput, Game, Point, Rect, Renderer, Size, TextAlign, TextStyle, FRAME_DT};
use crate::sprite::{Assets, Character, Sprite};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;

pub mod artifacts;
pub mod board;
pub mod clock;
pub mod enemy;
pub mod hud;
pub mod player;
pub mod session;

use board::Direction;
use session::Session;

/// Screen Flow
/// ┌──────────────────────────────────────────────────────┐
/// │  Loading ──(assets resolve)──► Menu                  │
/// │  Menu ──(Lets GO!)──► Playing                        │
/// │  Playing ──(last heart lost)──► GameOver             │
/// │  GameOver ──(Play Again?)──► Playing (same runner)   │
/// │  GameOver ──(Menu)──► Menu                           │
/// └──────────────────────────────────────────────────────┘
pub enum GemCrossing {
    /// Waiting on the image pack; transitions to `Loaded` once every
    /// declared sprite resolves
    Loading,
    Loaded(Screen),
}

impl GemCrossing {
    pub fn new() -> Self {
        GemCrossing::Loading
    }
}

impl Default for GemCrossing {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Game for GemCrossing {
    async fn initialize(&self) -> Result<Box<dyn Game>> {
        match self {
            GemCrossing::Loading => {
                let canvas = browser::canvas()?;
                canvas.set_width(board::CANVAS_WIDTH as u32);
                canvas.set_height(board::CANVAS_HEIGHT as u32);
                let assets = Rc::new(Assets::load().await?);
                Ok(Box::new(GemCrossing::Loaded(Screen::Menu(Menu::new(
                    assets,
                )))))
            }
            GemCrossing::Loaded(_) => Err(anyhow!("Game is already initialized")),
        }
    }

    fn update(&mut self, input: &FrameInput) {
        if matches!(self, GemCrossing::Loaded(_)) {
            // screens consume themselves on transition; park Loading while
            // the update runs
            let state = std::mem::replace(self, GemCrossing::Loading);
            if let GemCrossing::Loaded(screen) = state {
                *self = GemCrossing::Loaded(screen.update(input));
            }
        }
    }

    fn draw(&self, renderer: &Renderer) {
        match self {
            GemCrossing::Loading => {}
            GemCrossing::Loaded(screen) => screen.draw(renderer),
        }
    }
}

pub enum Screen {
    Menu(Menu),
    Playing(Playing),
    GameOver(GameOver),
}

impl Screen {
    fn update(self, input: &FrameInput) -> Screen {
        match self {
            Screen::Menu(menu) => {
                let mut screen = Screen::Menu(menu);
                for &click in input.clicks {
                    screen = match screen {
                        Screen::Menu(menu) => menu.handle_click(click),
                        other => other,
                    };
                }
                screen
            }
            Screen::Playing(playing) => playing.update(input),
            Screen::GameOver(over) => over.handle_clicks(input.clicks),
        }
    }

    fn draw(&self, renderer: &Renderer) {
        match self {
            Screen::Menu(menu) => menu.draw(renderer),
            Screen::Playing(playing) => playing.draw(renderer),
            Screen::GameOver(over) => over.draw(renderer),
        }
    }
}

/// Clickable regions of the menu, in canvas pixels.
mod menu_layout {
    use crate::engine::{Point, Rect, Size};

    /// the band the character row occupies
    pub const CHARACTER_ROW: Rect = Rect {
        position: Point { x: 0, y: 71 },
        size: Size {
            width: 505,
            height: 110,
        },
    };

    pub const GO_BUTTON: Rect = Rect {
        position: Point { x: 190, y: 190 },
        size: Size {
            width: 126,
            height: 40,
        },
    };
}

/// Character select plus a how-to-play panel.
pub struct Menu {
    assets: Rc<Assets>,
    selected: usize,
}

impl Menu {
    fn new(assets: Rc<Assets>) -> Self {
        Menu {
            assets,
            selected: 1,
        }
    }

    fn handle_click(mut self, click: Point) -> Screen {
        if menu_layout::CHARACTER_ROW.contains(click) {
            let column = (click.x / board::CELL_WIDTH).clamp(0, board::COLUMNS - 1);
            self.selected = column as usize;
            Screen::Menu(self)
        } else if menu_layout::GO_BUTTON.contains(click) {
            let character = Character::ALL[self.selected];
            log!("Starting a session as {:?}", character);
            Screen::Playing(Playing::new(self.assets, character))
        } else {
            Screen::Menu(self)
        }
    }

    fn draw(&self, renderer: &Renderer) {
        renderer.clear(&board::CANVAS_RECT);
        // parchment backdrop with a pine border
        renderer.stroke_rect(&board::CANVAS_RECT, hud::PINE);
        renderer.fill_rect(
            &Rect::new(
                Point { x: 1, y: 1 },
                Size {
                    width: board::CANVAS_WIDTH - 2,
                    height: board::CANVAS_HEIGHT - 2,
                },
            ),
            hud::PARCHMENT,
        );
        self.draw_character_select(renderer);
        self.draw_how_to_play(renderer);
    }

    fn draw_character_select(&self, renderer: &Renderer) {
        renderer.draw_image(
            self.assets.get(Sprite::Selector),
            &Point {
                x: board::column_x(self.selected as i16),
                y: 10,
            },
        );
        renderer.text(
            "Select Character",
            &Point {
                x: hud::CENTER_X,
                y: 40,
            },
            &TextStyle {
                font: "30px Arial",
                color: hud::INK,
                align: TextAlign::Center,
            },
        );
        for (index, character) in Character::ALL.iter().enumerate() {
            renderer.draw_image(
                self.assets.get(character.sprite()),
                &Point {
                    x: board::column_x(index as i16),
                    y: 10,
                },
            );
        }
        renderer.fill_rect(&menu_layout::GO_BUTTON, hud::SAGE);
        renderer.stroke_rect(&menu_layout::GO_BUTTON, hud::PINE);
        renderer.text(
            "Lets GO!",
            &Point {
                x: hud::CENTER_X,
                y: 220,
            },
            &TextStyle {
                font: "24px Arial",
                color: hud::BLACK,
                align: TextAlign::Center,
            },
        );
    }

    fn draw_how_to_play(&self, renderer: &Renderer) {
        let heading = TextStyle {
            font: "20px Arial",
            color: hud::INK,
            align: TextAlign::Left,
        };
        renderer.text("How to Play?", &Point { x: 48, y: 275 }, &heading);

        let line = TextStyle {
            font: "16px Arial",
            color: hud::INK,
            align: TextAlign::Center,
        };
        renderer.text(
            "Reach the water without colliding into any of the enemies.",
            &Point {
                x: hud::CENTER_X,
                y: 305,
            },
            &line,
        );
        renderer.text(
            "Use the arrow keys to move up, down, left and right.",
            &Point {
                x: hud::CENTER_X,
                y: 325,
            },
            &line,
        );

        let icon = Size {
            width: 50,
            height: 85,
        };
        let icons = [
            (Sprite::GemBlue, 320),
            (Sprite::Heart, 400),
            (Sprite::Star, 460),
            (Sprite::Rock, 510),
        ];
        for (sprite, y) in icons {
            renderer.draw_image_scaled(
                self.assets.get(sprite),
                &Rect::new(Point { x: 20, y }, icon),
            );
        }
        renderer.text(
            "There are 3 colours of diamonds to collect.",
            &Point { x: 240, y: 370 },
            &line,
        );
        renderer.text(
            "They will add to your final score.",
            &Point { x: 204, y: 390 },
            &line,
        );
        renderer.text(
            "Hearts increase your life by 1.",
            &Point { x: 198, y: 450 },
            &line,
        );
        renderer.text(
            "Stars will make you invincible for 5s.",
            &Point { x: 220, y: 510 },
            &line,
        );
        renderer.text(
            "Enemies will go right through you.",
            &Point { x: 212, y: 530 },
            &line,
        );
        renderer.text(
            "Rocks block the way. Go around them.",
            &Point { x: 228, y: 570 },
            &line,
        );
    }
}

/// A live session, with edge-triggered arrow keys so one press means one
/// cell.
pub struct Playing {
    assets: Rc<Assets>,
    session: Session,
    held: [bool; Direction::ALL.len()],
}

impl Playing {
    fn new(assets: Rc<Assets>, character: Character) -> Self {
        Playing {
            assets,
            session: Session::new(character, StdRng::from_entropy()),
            held: [false; Direction::ALL.len()],
        }
    }

    fn update(mut self, input: &FrameInput) -> Screen {
        for (index, direction) in Direction::ALL.iter().enumerate() {
            let pressed = input.keys.is_pressed(direction.key_code());
            if pressed && !self.held[index] {
                self.session.handle_move(*direction);
            }
            self.held[index] = pressed;
        }
        self.session.tick(FRAME_DT);
        if self.session.is_game_over() {
            Screen::GameOver(GameOver {
                assets: self.assets,
                session: self.session,
            })
        } else {
            Screen::Playing(self)
        }
    }

    fn draw(&self, renderer: &Renderer) {
        self.session.draw(renderer, &self.assets);
    }
}

/// The frozen session behind the final-score panel.
pub struct GameOver {
    assets: Rc<Assets>,
    session: Session,
}

impl GameOver {
    fn handle_clicks(self, clicks: &[Point]) -> Screen {
        for &click in clicks {
            if hud::PLAY_AGAIN_BUTTON.contains(click) {
                log!("Restarting as {:?}", self.session.character());
                return Screen::Playing(Playing::new(self.assets, self.session.character()));
            }
            if hud::MENU_BUTTON.contains(click) {
                return Screen::Menu(Menu::new(self.assets));
            }
        }
        Screen::GameOver(self)
    }

    fn draw(&self, renderer: &Renderer) {
        self.session.draw_board(renderer, &self.assets);
        // leftover artifacts sit behind the panel
        self.session.artifacts().draw(renderer, &self.assets);
        self.session.draw_hud(renderer, &self.assets);
        hud::draw_final_score(renderer, self.session.final_score());
    }
}
