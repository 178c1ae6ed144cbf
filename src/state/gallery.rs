//! Gallery Browser
//!
//! Circular carousel over one category's listings, with an enlarged-image
//! overlay.

use crate::catalog;
use crate::models::{Category, GalleryItem};
use super::menu::{Direction, MenuEntry, Role};

/// Focus positions within the gallery view
pub const IMAGE_SLOT: usize = 1;
pub const ADD_SLOT: usize = 4;
pub const BACK_SLOT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryBrowser {
    category: Category,
    index: usize,
    enlarged: bool,
}

impl GalleryBrowser {
    pub fn new(category: Category) -> Self {
        Self::at(category, 0)
    }

    /// Open on a given position, clamped to the first listing if out of range
    pub fn at(category: Category, index: usize) -> Self {
        let len = catalog::listings(category).len();
        Self {
            category,
            index: if index < len { index } else { 0 },
            enlarged: false,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_enlarged(&self) -> bool {
        self.enlarged
    }

    pub fn current(&self) -> &'static GalleryItem {
        &catalog::listings(self.category)[self.index]
    }

    pub fn next(&mut self) {
        let len = catalog::listings(self.category).len();
        self.index = (self.index + 1) % len;
    }

    pub fn prev(&mut self) {
        let len = catalog::listings(self.category).len();
        self.index = (self.index + len - 1) % len;
    }

    pub fn enlarge(&mut self) {
        self.enlarged = true;
    }

    pub fn dismiss(&mut self) {
        self.enlarged = false;
    }

    /// Gallery view entries; the back label depends on where we came from
    pub fn entries(&self, from_cart: bool) -> Vec<MenuEntry> {
        let item = self.current();
        vec![
            MenuEntry::text(item.title, Role::GalleryTitle),
            MenuEntry::image(item.title, item.img, Role::GalleryImage),
            MenuEntry::text(item.description, Role::GalleryDescription),
            MenuEntry::text(format!("Price: ${}", item.price), Role::GalleryPrice),
            MenuEntry::action("Add to Cart"),
            MenuEntry::action(if from_cart { "Back to Cart" } else { "Back" }),
        ]
    }
}

/// Up/Down inside the gallery cycle image -> add -> back
pub fn gallery_focus(current: usize, direction: Direction) -> usize {
    match (direction, current) {
        (Direction::Forward, IMAGE_SLOT) => ADD_SLOT,
        (Direction::Forward, ADD_SLOT) => BACK_SLOT,
        (Direction::Forward, _) => IMAGE_SLOT,
        (Direction::Backward, BACK_SLOT) => ADD_SLOT,
        (Direction::Backward, ADD_SLOT) => IMAGE_SLOT,
        (Direction::Backward, _) => BACK_SLOT,
    }
}
