//! Frontend Models
//!
//! Data structures shared by the state core, storage and backend calls.

use serde::{Deserialize, Serialize};

/// Product category, one gallery per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    GameboyColor,
    GameboyAdvance,
    GameboyAdvanceSp,
    NintendoDsLite,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::GameboyColor,
        Category::GameboyAdvance,
        Category::GameboyAdvanceSp,
        Category::NintendoDsLite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::GameboyColor => "gameboy-color",
            Category::GameboyAdvance => "gameboy-advance",
            Category::GameboyAdvanceSp => "gameboy-advance-sp",
            Category::NintendoDsLite => "nintendo-ds-lite",
        }
    }

    /// Menu label shown in the shop menu
    pub fn label(&self) -> &'static str {
        match self {
            Category::GameboyColor => "Gameboy Color",
            Category::GameboyAdvance => "Gameboy Advance",
            Category::GameboyAdvanceSp => "Gameboy Advance SP",
            Category::NintendoDsLite => "Nintendo DS Lite",
        }
    }

    /// Match a normalized (trimmed, lowercase) menu label
    pub fn from_label(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(text))
    }
}

/// Static catalog record
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub img: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub price: u32,
    pub stock: u32,
}

/// Cart line (matches the persisted JSON shape)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub title: String,
    pub price: u32,
    pub img: String,
    pub category: Category,
}

impl CartItem {
    /// Identity key for a catalog entry: `{category}-{gallery index}`
    pub fn key_for(category: Category, gallery_index: usize) -> String {
        format!("{}-{}", category.as_str(), gallery_index)
    }

    pub fn from_gallery(category: Category, gallery_index: usize, item: &GalleryItem) -> Self {
        Self {
            id: Self::key_for(category, gallery_index),
            title: item.title.to_string(),
            price: item.price,
            img: item.img.to_string(),
            category,
        }
    }
}

/// Seller lead collected by the chatbot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerLead {
    pub item: String,
    pub condition: String,
    pub price: String,
    pub shipping: String,
    pub email: String,
    pub timestamp: String,
}

/// Console shell artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleLayout {
    #[default]
    Gba,
    GbaSp,
}

impl ConsoleLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleLayout::Gba => "gba",
            ConsoleLayout::GbaSp => "gbasp",
        }
    }

    pub fn shell_image(&self) -> String {
        format!("/static/{}.png", self.as_str())
    }

    pub fn toggled(&self) -> Self {
        match self {
            ConsoleLayout::Gba => ConsoleLayout::GbaSp,
            ConsoleLayout::GbaSp => ConsoleLayout::Gba,
        }
    }

    /// Handheld SP shell on narrow screens, GBA on desktop
    pub fn for_width(width: f64) -> Self {
        if width <= 768.0 {
            ConsoleLayout::GbaSp
        } else {
            ConsoleLayout::Gba
        }
    }
}

/// CSS scale factor for the console container
pub fn scale_for_width(width: f64) -> f64 {
    if width > 480.0 && width <= 768.0 {
        1.2
    } else {
        1.0
    }
}
