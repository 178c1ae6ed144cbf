//! Cart Manager
//!
//! Ordered cart lines with the per-listing stock limit.

use crate::models::{CartItem, Category, GalleryItem};
use super::menu::{MenuEntry, Role};

/// Focus position of "View Listing" in the cart detail view
pub const DETAIL_VIEW_SLOT: usize = 3;
/// Focus position of "Remove Item" in the cart detail view
pub const DETAIL_REMOVE_SLOT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added { count: usize },
    OutOfStock { stock: u32 },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CartItem> {
        self.items.get(index)
    }

    /// Lines already in the cart for one catalog entry
    pub fn count_of(&self, id: &str) -> usize {
        self.items.iter().filter(|item| item.id == id).count()
    }

    /// Append a listing unless its stock is already used up
    pub fn add(&mut self, category: Category, gallery_index: usize, listing: &GalleryItem) -> AddOutcome {
        let id = CartItem::key_for(category, gallery_index);
        if self.count_of(&id) >= listing.stock as usize {
            return AddOutcome::OutOfStock { stock: listing.stock };
        }
        self.items.push(CartItem::from_gallery(category, gallery_index, listing));
        AddOutcome::Added { count: self.items.len() }
    }

    pub fn remove(&mut self, index: usize) -> Option<CartItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total(&self) -> u32 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Cart view: back, one line per item, total and trailing actions
    pub fn entries(&self) -> Vec<MenuEntry> {
        if self.items.is_empty() {
            return vec![
                MenuEntry::action("Back"),
                MenuEntry::text("Cart is Empty", Role::CartEmpty),
            ];
        }

        let mut entries = Vec::with_capacity(self.items.len() + 4);
        entries.push(MenuEntry::action("Back"));
        for (index, item) in self.items.iter().enumerate() {
            entries.push(MenuEntry::text(
                format!("{} - ${}", item.title, item.price),
                Role::CartLine(index),
            ));
        }
        entries.push(MenuEntry::text(format!("Total: ${}", self.total()), Role::CartTotal));
        entries.push(MenuEntry::action("Checkout"));
        entries.push(MenuEntry::action("Clear Cart"));
        entries
    }

    /// Detail view of one line
    pub fn detail_entries(&self, index: usize) -> Option<Vec<MenuEntry>> {
        let item = self.items.get(index)?;
        Some(vec![
            MenuEntry::text(item.title.clone(), Role::CartItemTitle),
            MenuEntry::image(item.title.clone(), item.img.clone(), Role::CartItemImage),
            MenuEntry::text(format!("Price: ${}", item.price), Role::CartItemPrice),
            MenuEntry::action("View Listing"),
            MenuEntry::action("Remove Item"),
            MenuEntry::action("Back to Cart"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::catalog;

    #[test]
    fn test_add_respects_stock() {
        let mut cart = Cart::default();
        let listing = &catalog::listings(Category::GameboyColor)[0];
        assert_eq!(listing.stock, 2);

        assert_eq!(cart.add(Category::GameboyColor, 0, listing), AddOutcome::Added { count: 1 });
        assert_eq!(cart.add(Category::GameboyColor, 0, listing), AddOutcome::Added { count: 2 });
        assert_eq!(cart.add(Category::GameboyColor, 0, listing), AddOutcome::OutOfStock { stock: 2 });
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_stock_is_per_listing() {
        let mut cart = Cart::default();
        let listings = catalog::listings(Category::GameboyColor);
        cart.add(Category::GameboyColor, 1, &listings[1]);
        assert!(matches!(cart.add(Category::GameboyColor, 1, &listings[1]), AddOutcome::OutOfStock { .. }));
        assert!(matches!(cart.add(Category::GameboyColor, 0, &listings[0]), AddOutcome::Added { .. }));
    }

    #[test]
    fn test_same_index_in_other_category_is_distinct() {
        let mut cart = Cart::default();
        let sp = &catalog::listings(Category::GameboyAdvanceSp)[0];
        let ds = &catalog::listings(Category::NintendoDsLite)[0];
        cart.add(Category::GameboyAdvanceSp, 0, sp);
        assert!(matches!(cart.add(Category::NintendoDsLite, 0, ds), AddOutcome::Added { .. }));
        assert_eq!(cart.count_of("gameboy-advance-sp-0"), 1);
        assert_eq!(cart.count_of("nintendo-ds-lite-0"), 1);
    }

    #[test]
    fn test_total_and_entries() {
        let mut cart = Cart::default();
        cart.add(Category::GameboyColor, 0, &catalog::listings(Category::GameboyColor)[0]);
        cart.add(Category::NintendoDsLite, 0, &catalog::listings(Category::NintendoDsLite)[0]);
        assert_eq!(cart.total(), 325);

        let entries = cart.entries();
        let labels: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Back",
                "Atomic Purple GBC - $175",
                "Polar White DS Lite - $150",
                "Total: $325",
                "Checkout",
                "Clear Cart",
            ]
        );
        assert_eq!(entries[2].role, Role::CartLine(1));
    }

    #[test]
    fn test_empty_entries() {
        let entries = Cart::default().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].role, Role::CartEmpty);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::default();
        let listing = &catalog::listings(Category::GameboyAdvance)[0];
        cart.add(Category::GameboyAdvance, 0, listing);
        cart.add(Category::GameboyAdvance, 0, listing);
        assert!(cart.remove(5).is_none());
        assert!(cart.remove(0).is_some());
        assert_eq!(cart.total(), 160);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn test_detail_entries() {
        let mut cart = Cart::default();
        cart.add(Category::GameboyAdvance, 0, &catalog::listings(Category::GameboyAdvance)[0]);
        let detail = cart.detail_entries(0).unwrap();
        assert_eq!(detail[DETAIL_VIEW_SLOT].label, "View Listing");
        assert_eq!(detail[DETAIL_REMOVE_SLOT].label, "Remove Item");
        assert_eq!(detail[2].label, "Price: $160");
        assert!(cart.detail_entries(1).is_none());
    }

    proptest! {
        #[test]
        fn test_any_add_sequence_respects_stock(
            adds in prop::collection::vec(catalog::strategy::listing(), 0..40)
        ) {
            let mut cart = Cart::default();
            for (category, index) in adds {
                let listing = &catalog::listings(category)[index];
                let before = cart.count_of(&CartItem::key_for(category, index));
                match cart.add(category, index, listing) {
                    AddOutcome::Added { count } => {
                        prop_assert!(before < listing.stock as usize);
                        prop_assert_eq!(count, cart.len());
                    }
                    AddOutcome::OutOfStock { stock } => {
                        prop_assert_eq!(before, stock as usize);
                    }
                }
            }
            for category in Category::ALL {
                for (index, listing) in catalog::listings(category).iter().enumerate() {
                    prop_assert!(cart.count_of(&CartItem::key_for(category, index)) <= listing.stock as usize);
                }
            }
        }
    }
}
