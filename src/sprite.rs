use crate::engine;
use anyhow::{Error, Result};
use futures::future::try_join_all;
use std::collections::HashMap;
use web_sys::HtmlImageElement;

/// Every image the game ever draws, as an explicit tag rather than a loose
/// path string. Pickup dispatch and rendering both key off these, so asset
/// naming can change without touching game logic.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sprite {
    StoneBlock,
    WaterBlock,
    GrassBlock,
    EnemyBug,
    CharBoy,
    CharCatGirl,
    CharHornGirl,
    CharPinkGirl,
    CharPrincessGirl,
    GemBlue,
    GemGreen,
    GemOrange,
    Heart,
    Star,
    Rock,
    Selector,
}

impl Sprite {
    pub const ALL: [Sprite; 16] = [
        Sprite::StoneBlock,
        Sprite::WaterBlock,
        Sprite::GrassBlock,
        Sprite::EnemyBug,
        Sprite::CharBoy,
        Sprite::CharCatGirl,
        Sprite::CharHornGirl,
        Sprite::CharPinkGirl,
        Sprite::CharPrincessGirl,
        Sprite::GemBlue,
        Sprite::GemGreen,
        Sprite::GemOrange,
        Sprite::Heart,
        Sprite::Star,
        Sprite::Rock,
        Sprite::Selector,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Sprite::StoneBlock => "images/stone-block.png",
            Sprite::WaterBlock => "images/water-block.png",
            Sprite::GrassBlock => "images/grass-block.png",
            Sprite::EnemyBug => "images/enemy-bug.png",
            Sprite::CharBoy => "images/char-boy.png",
            Sprite::CharCatGirl => "images/char-cat-girl.png",
            Sprite::CharHornGirl => "images/char-horn-girl.png",
            Sprite::CharPinkGirl => "images/char-pink-girl.png",
            Sprite::CharPrincessGirl => "images/char-princess-girl.png",
            Sprite::GemBlue => "images/gem-blue.png",
            Sprite::GemGreen => "images/gem-green.png",
            Sprite::GemOrange => "images/gem-orange.png",
            Sprite::Heart => "images/Heart.png",
            Sprite::Star => "images/Star.png",
            Sprite::Rock => "images/Rock.png",
            Sprite::Selector => "images/Selector.png",
        }
    }
}

/// The playable roster shown on the menu, left to right.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Character {
    Boy,
    CatGirl,
    HornGirl,
    PinkGirl,
    PrincessGirl,
}

impl Character {
    pub const ALL: [Character; 5] = [
        Character::Boy,
        Character::CatGirl,
        Character::HornGirl,
        Character::PinkGirl,
        Character::PrincessGirl,
    ];

    pub fn sprite(self) -> Sprite {
        match self {
            Character::Boy => Sprite::CharBoy,
            Character::CatGirl => Sprite::CharCatGirl,
            Character::HornGirl => Sprite::CharHornGirl,
            Character::PinkGirl => Sprite::CharPinkGirl,
            Character::PrincessGirl => Sprite::CharPrincessGirl,
        }
    }
}

/// Drawable handles for the whole sprite pack. Loading resolves every image
/// before the game starts; a single missing resource fails the load.
pub struct Assets {
    images: HashMap<Sprite, HtmlImageElement>,
}

impl Assets {
    pub async fn load() -> Result<Self> {
        // Independent resources load simultaneously; total time is the
        // slowest image, not the sum.
        let loads = Sprite::ALL.iter().map(|&sprite| async move {
            let image = engine::load_image(sprite.path()).await?;
            Ok::<_, Error>((sprite, image))
        });
        let images = try_join_all(loads).await?.into_iter().collect();
        log!("Assets: all {} images resolved", Sprite::ALL.len());
        Ok(Assets { images })
    }

    pub fn get(&self, sprite: Sprite) -> &HtmlImageElement {
        // load() resolved the full catalogue, so a miss here is a bug
        self.images
            .get(&sprite)
            .expect("Sprite missing from loaded assets")
    }
}
