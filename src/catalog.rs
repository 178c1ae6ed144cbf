//! Product Catalog
//!
//! Fixed in-memory listings, one list per category.

use crate::models::{Category, GalleryItem};

const GAMEBOY_COLOR: &[GalleryItem] = &[
    GalleryItem {
        img: "static/images/gbc1.png",
        title: "Atomic Purple GBC",
        description: "Transparent shell with new buttons. Good working condition.",
        price: 175,
        stock: 2,
    },
    GalleryItem {
        img: "static/images/gbc2.png",
        title: "Teal Blue GBC",
        description: "Refurbished with backlit screen. Minor scratches on back.",
        price: 200,
        stock: 1,
    },
];

const GAMEBOY_ADVANCE: &[GalleryItem] = &[GalleryItem {
    img: "static/images/gba1.png",
    title: "Clear Purple GBA",
    description: "Fully refurbished with IPS screen upgrade.",
    price: 160,
    stock: 3,
}];

const GAMEBOY_ADVANCE_SP: &[GalleryItem] = &[GalleryItem {
    img: "static/images/gbasp1.png",
    title: "Cobalt Blue SP",
    description: "AGS-101 model with bright backlit screen.",
    price: 185,
    stock: 1,
}];

const NINTENDO_DS_LITE: &[GalleryItem] = &[GalleryItem {
    img: "static/images/dslite1.png",
    title: "Polar White DS Lite",
    description: "Pristine condition with new shell.",
    price: 150,
    stock: 2,
}];

/// Listings for a category
pub fn listings(category: Category) -> &'static [GalleryItem] {
    match category {
        Category::GameboyColor => GAMEBOY_COLOR,
        Category::GameboyAdvance => GAMEBOY_ADVANCE,
        Category::GameboyAdvanceSp => GAMEBOY_ADVANCE_SP,
        Category::NintendoDsLite => NINTENDO_DS_LITE,
    }
}

/// Gallery position of a listing by title
pub fn position_of(category: Category, title: &str) -> Option<usize> {
    listings(category).iter().position(|item| item.title == title)
}
