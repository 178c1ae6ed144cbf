//! Shop State
//!
//! The whole console screen as one value plus a single `update` reducer.
//! `update` never touches the browser: side effects come back as `Effect`s
//! for the runtime to execute.

use crate::catalog;
use crate::config::{ShopConfig, Timings};
use crate::models::{CartItem, ConsoleLayout};
use super::cart::{AddOutcome, Cart, DETAIL_REMOVE_SLOT, DETAIL_VIEW_SLOT};
use super::gallery::{gallery_focus, GalleryBrowser, ADD_SLOT, BACK_SLOT, IMAGE_SLOT};
use super::intent::Intent;
use super::menu::{first_focusable, static_entries, step_focus, Command, Direction, MenuEntry, MenuId, Role};

/// Index of the Back entry in the enlarged-image view
pub const ENLARGED_BACK_SLOT: usize = 2;

const CONFIRM_CLEAR_PROMPT: &str = "Clear all items from cart?";
const EMPTY_CART_ALERT: &str = "Your cart is empty!";

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Intent(Intent),
    /// Click/tap on the entry at this index
    Pointer(usize),
    /// Timer fired for the overlay with this token
    Restore(u64),
    ClearCartConfirmed,
    CheckoutFailed(String),
    /// Viewport width changed
    Resize(f64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayKind {
    AddedToCart { count: usize },
    OutOfStock { stock: u32 },
    Processing,
    CheckoutError(String),
}

impl OverlayKind {
    /// Headline and detail line
    pub fn lines(&self) -> [String; 2] {
        match self {
            OverlayKind::AddedToCart { count } => ["Added to Cart!".to_string(), format!("Cart: {} items", count)],
            OverlayKind::OutOfStock { stock } => ["Out of Stock!".to_string(), format!("Only {} available", stock)],
            OverlayKind::Processing => ["Processing...".to_string(), "Redirecting to checkout".to_string()],
            OverlayKind::CheckoutError(message) => ["Error!".to_string(), message.clone()],
        }
    }
}

/// Transient message covering the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub kind: OverlayKind,
    pub token: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Rewrite the stored cart
    PersistCart(Vec<CartItem>),
    /// Deliver `Msg::Restore(token)` after a delay
    ScheduleRestore { token: u64, after_ms: u32 },
    Alert(String),
    /// Ask the user; deliver `Msg::ClearCartConfirmed` on yes
    ConfirmClearCart(String),
    /// Create a payment session and redirect
    BeginCheckout(Vec<CartItem>),
    OpenUrl(String),
}

/// What the screen currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView {
    Menu {
        dom_id: &'static str,
        entries: Vec<MenuEntry>,
        focus: usize,
    },
    Message { lines: [String; 2] },
    Enlarged { title: String, img: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShopState {
    menu: MenuId,
    focus: usize,
    gallery: Option<GalleryBrowser>,
    viewing_from_cart: bool,
    cart: Cart,
    overlay: Option<Overlay>,
    layout: ConsoleLayout,
    payments_enabled: bool,
    external_link: String,
    timings: Timings,
    next_token: u64,
}

impl ShopState {
    pub fn new(config: &ShopConfig, cart: Vec<CartItem>) -> Self {
        Self {
            menu: MenuId::Main,
            focus: 0,
            gallery: None,
            viewing_from_cart: false,
            cart: Cart::new(cart),
            overlay: None,
            layout: ConsoleLayout::default(),
            payments_enabled: config.stripe_key.is_some(),
            external_link: config.external_link.clone(),
            timings: config.timings,
            next_token: 0,
        }
    }

    #[cfg(test)]
    pub fn menu(&self) -> MenuId {
        self.menu
    }

    #[cfg(test)]
    pub fn focus(&self) -> usize {
        self.focus
    }

    #[cfg(test)]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[cfg(test)]
    pub fn gallery(&self) -> Option<&GalleryBrowser> {
        self.gallery.as_ref()
    }

    #[cfg(test)]
    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn layout(&self) -> ConsoleLayout {
        self.layout
    }

    #[cfg(test)]
    pub fn viewing_from_cart(&self) -> bool {
        self.viewing_from_cart
    }

    /// Entries of the active menu
    pub fn entries(&self) -> Vec<MenuEntry> {
        match self.menu {
            MenuId::Cart => self.cart.entries(),
            MenuId::CartDetail(index) => self
                .cart
                .detail_entries(index)
                .unwrap_or_else(|| self.cart.entries()),
            MenuId::Gallery => self
                .gallery
                .as_ref()
                .map(|g| g.entries(self.viewing_from_cart))
                .unwrap_or_default(),
            menu => static_entries(menu),
        }
    }

    pub fn screen(&self) -> ScreenView {
        if let Some(overlay) = &self.overlay {
            return ScreenView::Message { lines: overlay.kind.lines() };
        }
        if let Some(gallery) = self.gallery.as_ref().filter(|g| g.is_enlarged()) {
            let item = gallery.current();
            return ScreenView::Enlarged {
                title: item.title.to_string(),
                img: item.img.to_string(),
            };
        }
        ScreenView::Menu {
            dom_id: self.menu.dom_id(),
            entries: self.entries(),
            focus: self.focus,
        }
    }

    // ========================
    // Navigation
    // ========================

    fn switch_to(&mut self, menu: MenuId) {
        log::debug!("[NAV] {:?} -> {:?}", self.menu, menu);
        self.menu = menu;
        self.gallery = None;
        self.viewing_from_cart = false;
        self.focus = first_focusable(&self.entries());
    }

    fn render_cart(&mut self) {
        self.switch_to(MenuId::Cart);
    }

    fn show_cart_detail(&mut self, index: usize) {
        if self.cart.get(index).is_none() {
            return;
        }
        self.menu = MenuId::CartDetail(index);
        self.focus = DETAIL_VIEW_SLOT;
    }

    fn open_gallery(&mut self, gallery: GalleryBrowser, from_cart: bool) {
        log::debug!("[NAV] gallery {:?} #{}", gallery.category(), gallery.index());
        self.menu = MenuId::Gallery;
        self.gallery = Some(gallery);
        self.viewing_from_cart = from_cart;
        self.focus = IMAGE_SLOT;
    }

    fn leave_gallery(&mut self) {
        if self.viewing_from_cart {
            self.render_cart();
        } else {
            self.switch_to(MenuId::Shop);
        }
    }

    fn show_overlay(&mut self, kind: OverlayKind) -> u64 {
        self.next_token += 1;
        self.overlay = Some(Overlay { kind, token: self.next_token });
        self.next_token
    }

    // ========================
    // Cart / checkout
    // ========================

    fn add_to_cart(&mut self) -> Vec<Effect> {
        let Some(gallery) = &self.gallery else {
            return Vec::new();
        };
        let (category, index, listing) = (gallery.category(), gallery.index(), gallery.current());

        match self.cart.add(category, index, listing) {
            AddOutcome::Added { count } => {
                let token = self.show_overlay(OverlayKind::AddedToCart { count });
                vec![
                    Effect::PersistCart(self.cart.items().to_vec()),
                    Effect::ScheduleRestore { token, after_ms: self.timings.added_to_cart_ms },
                ]
            }
            AddOutcome::OutOfStock { stock } => {
                log::info!("[CART] {} out of stock ({} available)", listing.title, stock);
                let token = self.show_overlay(OverlayKind::OutOfStock { stock });
                vec![Effect::ScheduleRestore { token, after_ms: self.timings.out_of_stock_ms }]
            }
        }
    }

    fn remove_from_cart(&mut self) -> Vec<Effect> {
        let MenuId::CartDetail(index) = self.menu else {
            return Vec::new();
        };
        self.cart.remove(index);
        self.render_cart();
        vec![Effect::PersistCart(self.cart.items().to_vec())]
    }

    fn view_listing(&mut self) {
        let MenuId::CartDetail(index) = self.menu else {
            return;
        };
        let Some(item) = self.cart.get(index) else {
            return;
        };
        let category = item.category;
        let position = catalog::position_of(category, &item.title).unwrap_or(0);
        self.open_gallery(GalleryBrowser::at(category, position), true);
    }

    fn checkout(&mut self) -> Vec<Effect> {
        if self.cart.is_empty() {
            return vec![Effect::Alert(EMPTY_CART_ALERT.to_string())];
        }
        if !self.payments_enabled {
            return vec![Effect::Alert(crate::error::ShopError::Unavailable.to_string())];
        }
        self.show_overlay(OverlayKind::Processing);
        vec![Effect::BeginCheckout(self.cart.items().to_vec())]
    }

    // ========================
    // Input handling
    // ========================

    fn run_command(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::OpenGallery(category) => self.open_gallery(GalleryBrowser::new(category), false),
            Command::SwitchConsole => {
                self.layout = self.layout.toggled();
                self.switch_to(MenuId::Main);
            }
            Command::Home => self.switch_to(MenuId::Main),
            Command::Shop => self.switch_to(MenuId::Shop),
            Command::Cart | Command::BackToCart => self.render_cart(),
            Command::About => self.switch_to(MenuId::About),
            Command::Creator => self.switch_to(MenuId::Creator),
            Command::Contact => self.switch_to(MenuId::Contact),
            Command::PrivacyPolicy => self.switch_to(MenuId::Privacy),
            Command::SleepyStatic => return vec![Effect::OpenUrl(self.external_link.clone())],
            Command::Back => {
                if self.gallery.is_some() {
                    self.leave_gallery();
                } else if self.menu.is_about_child() {
                    self.switch_to(MenuId::About);
                } else {
                    self.switch_to(MenuId::Main);
                }
            }
            Command::Checkout => return self.checkout(),
            Command::ClearCart => return vec![Effect::ConfirmClearCart(CONFIRM_CLEAR_PROMPT.to_string())],
            Command::RemoveItem => return self.remove_from_cart(),
            Command::ViewListing => self.view_listing(),
            Command::AddToCart => return self.add_to_cart(),
        }
        Vec::new()
    }

    /// Run the focused entry; unknown labels fall back to the cart-line marker
    fn activate(&mut self) -> Vec<Effect> {
        let entries = self.entries();
        let Some(entry) = entries.get(self.focus) else {
            return Vec::new();
        };
        match Command::parse(&entry.normalized()) {
            Some(command) => self.run_command(command),
            None => {
                if let Role::CartLine(index) = entry.role {
                    self.show_cart_detail(index);
                }
                Vec::new()
            }
        }
    }

    fn gallery_intent(&mut self, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::BrowseNext | Intent::BrowsePrev => {
                if let Some(gallery) = self.gallery.as_mut() {
                    if intent == Intent::BrowseNext {
                        gallery.next();
                    } else {
                        gallery.prev();
                    }
                }
                self.focus = IMAGE_SLOT;
            }
            Intent::MoveDown => self.focus = gallery_focus(self.focus, Direction::Forward),
            Intent::MoveUp => self.focus = gallery_focus(self.focus, Direction::Backward),
            Intent::Select => match self.focus {
                IMAGE_SLOT => {
                    if let Some(gallery) = self.gallery.as_mut() {
                        gallery.enlarge();
                    }
                }
                ADD_SLOT => return self.add_to_cart(),
                BACK_SLOT => self.leave_gallery(),
                _ => {}
            },
            Intent::Back => self.leave_gallery(),
        }
        Vec::new()
    }

    fn menu_intent(&mut self, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::MoveUp | Intent::MoveDown => {
                if let MenuId::CartDetail(_) = self.menu {
                    self.focus = if self.focus == DETAIL_VIEW_SLOT { DETAIL_REMOVE_SLOT } else { DETAIL_VIEW_SLOT };
                } else {
                    let direction = if intent == Intent::MoveDown { Direction::Forward } else { Direction::Backward };
                    self.focus = step_focus(&self.entries(), self.focus, direction);
                }
            }
            Intent::Select => return self.activate(),
            Intent::Back => {
                if self.menu != MenuId::Main {
                    self.switch_to(MenuId::Main);
                }
            }
            Intent::BrowseNext | Intent::BrowsePrev => {}
        }
        Vec::new()
    }

    fn dismiss_enlarged(&mut self) {
        if let Some(gallery) = self.gallery.as_mut() {
            gallery.dismiss();
        }
        self.focus = IMAGE_SLOT;
    }

    fn is_enlarged(&self) -> bool {
        self.gallery.as_ref().is_some_and(|g| g.is_enlarged())
    }

    fn handle_intent(&mut self, intent: Intent) -> Vec<Effect> {
        if self.overlay.is_some() {
            return Vec::new();
        }
        if self.is_enlarged() {
            if matches!(intent, Intent::Select | Intent::Back) {
                self.dismiss_enlarged();
            }
            return Vec::new();
        }
        if self.menu == MenuId::Gallery {
            self.gallery_intent(intent)
        } else {
            self.menu_intent(intent)
        }
    }

    fn handle_pointer(&mut self, index: usize) -> Vec<Effect> {
        if self.overlay.is_some() {
            return Vec::new();
        }
        if self.is_enlarged() {
            if index == ENLARGED_BACK_SLOT {
                self.dismiss_enlarged();
            }
            return Vec::new();
        }
        let focusable = self
            .entries()
            .get(index)
            .is_some_and(|entry| entry.role.is_focusable());
        if !focusable {
            return Vec::new();
        }
        if index == self.focus {
            self.handle_intent(Intent::Select)
        } else {
            self.focus = index;
            Vec::new()
        }
    }

    fn restore(&mut self, token: u64) {
        let Some(overlay) = self.overlay.take_if(|o| o.token == token) else {
            return;
        };
        match overlay.kind {
            OverlayKind::CheckoutError(_) => self.render_cart(),
            _ => {
                if self.menu == MenuId::Gallery {
                    self.focus = IMAGE_SLOT;
                }
            }
        }
    }
}

/// Apply one message to the state and collect the resulting effects
pub fn update(state: &mut ShopState, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::Intent(intent) => state.handle_intent(intent),
        Msg::Pointer(index) => state.handle_pointer(index),
        Msg::Restore(token) => {
            state.restore(token);
            Vec::new()
        }
        Msg::ClearCartConfirmed => {
            state.cart.clear();
            state.render_cart();
            vec![Effect::PersistCart(Vec::new())]
        }
        Msg::CheckoutFailed(message) => {
            let processing = matches!(state.overlay, Some(Overlay { kind: OverlayKind::Processing, .. }));
            if !processing {
                return Vec::new();
            }
            log::error!("[CHECKOUT] {}", message);
            let token = state.show_overlay(OverlayKind::CheckoutError(message));
            vec![Effect::ScheduleRestore { token, after_ms: state.timings.checkout_error_ms }]
        }
        Msg::Resize(width) => {
            state.layout = ConsoleLayout::for_width(width);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::models::Category;

    fn config_with_payments() -> ShopConfig {
        ShopConfig {
            stripe_key: Some("pk_test_123".to_string()),
            ..ShopConfig::default()
        }
    }

    fn send(state: &mut ShopState, intents: &[Intent]) -> Vec<Effect> {
        intents
            .iter()
            .flat_map(|intent| update(state, Msg::Intent(*intent)))
            .collect()
    }

    /// Deliver every scheduled restore immediately
    fn flush(state: &mut ShopState, effects: &[Effect]) {
        for effect in effects {
            if let Effect::ScheduleRestore { token, .. } = effect {
                update(state, Msg::Restore(*token));
            }
        }
    }

    /// Main -> Shop -> first category gallery
    fn open_first_gallery(state: &mut ShopState) {
        send(state, &[Intent::Select, Intent::Select]);
        assert_eq!(state.menu(), MenuId::Gallery);
    }

    fn focused_label(state: &ShopState) -> String {
        state.entries()[state.focus()].label.clone()
    }

    #[test]
    fn test_main_menu_navigation_is_circular() {
        let mut state = ShopState::new(&ShopConfig::default(), Vec::new());
        let count = state.entries().len();
        for _ in 0..count {
            send(&mut state, &[Intent::MoveDown]);
        }
        assert_eq!(state.focus(), 0);
        send(&mut state, &[Intent::MoveUp]);
        assert_eq!(focused_label(&state), "Switch Console");
    }

    #[test]
    fn test_switch_menu_resets_focus() {
        let mut state = ShopState::new(&ShopConfig::default(), Vec::new());
        send(&mut state, &[Intent::MoveDown, Intent::MoveDown, Intent::Select]);
        assert_eq!(state.menu(), MenuId::About);
        assert_eq!(state.focus(), 0);

        send(&mut state, &[Intent::Select]);
        assert_eq!(state.menu(), MenuId::Creator);
        // bio is skipped
        assert_eq!(focused_label(&state), "Back");

        send(&mut state, &[Intent::Select]);
        assert_eq!(state.menu(), MenuId::About);
    }

    #[test]
    fn test_escape_returns_to_main() {
        let mut state = ShopState::new(&ShopConfig::default(), Vec::new());
        send(&mut state, &[Intent::Select]);
        assert_eq!(state.menu(), MenuId::Shop);
        send(&mut state, &[Intent::Back]);
        assert_eq!(state.menu(), MenuId::Main);
        send(&mut state, &[Intent::Back]);
        assert_eq!(state.menu(), MenuId::Main);
    }

    #[test]
    fn test_gallery_browse_and_back() {
        let mut state = ShopState::new(&ShopConfig::default(), Vec::new());
        open_first_gallery(&mut state);
        assert_eq!(state.gallery().unwrap().category(), Category::GameboyColor);
        assert_eq!(state.focus(), IMAGE_SLOT);

        send(&mut state, &[Intent::MoveDown, Intent::BrowseNext]);
        assert_eq!(state.gallery().unwrap().index(), 1);
        assert_eq!(state.focus(), IMAGE_SLOT);

        send(&mut state, &[Intent::MoveUp]);
        assert_eq!(state.focus(), BACK_SLOT);
        send(&mut state, &[Intent::Select]);
        assert_eq!(state.menu(), MenuId::Shop);
        assert!(state.gallery().is_none());
    }

    #[test]
    fn test_enlarge_suspends_navigation() {
        let mut state = ShopState::new(&ShopConfig::default(), Vec::new());
        open_first_gallery(&mut state);
        send(&mut state, &[Intent::Select]);
        assert!(matches!(state.screen(), ScreenView::Enlarged { .. }));

        send(&mut state, &[Intent::BrowseNext, Intent::MoveDown]);
        assert_eq!(state.gallery().unwrap().index(), 0);
        assert!(matches!(state.screen(), ScreenView::Enlarged { .. }));

        send(&mut state, &[Intent::Back]);
        assert_eq!(state.menu(), MenuId::Gallery);
        assert!(matches!(state.screen(), ScreenView::Menu { focus: IMAGE_SLOT, .. }));

        send(&mut state, &[Intent::Select]);
        update(&mut state, Msg::Pointer(ENLARGED_BACK_SLOT));
        assert!(!state.gallery().unwrap().is_enlarged());
    }

    #[test]
    fn test_out_of_stock_after_two_adds() {
        let mut state = ShopState::new(&ShopConfig::default(), Vec::new());
        open_first_gallery(&mut state);
        send(&mut state, &[Intent::MoveDown]);
        assert_eq!(state.focus(), ADD_SLOT);

        for expected in 1..=2 {
            let effects = send(&mut state, &[Intent::Select]);
            assert!(effects.iter().any(|e| matches!(e, Effect::PersistCart(items) if items.len() == expected)));
            assert_eq!(
                state.screen(),
                ScreenView::Message { lines: ["Added to Cart!".to_string(), format!("Cart: {} items", expected)] }
            );
            flush(&mut state, &effects);
            // restore puts focus back on the image
            send(&mut state, &[Intent::MoveDown]);
        }

        let effects = send(&mut state, &[Intent::Select]);
        assert!(!effects.iter().any(|e| matches!(e, Effect::PersistCart(_))));
        assert_eq!(
            state.screen(),
            ScreenView::Message { lines: ["Out of Stock!".to_string(), "Only 2 available".to_string()] }
        );
        assert_eq!(state.cart().len(), 2);

        flush(&mut state, &effects);
        assert_eq!(state.menu(), MenuId::Gallery);
        assert!(state.overlay().is_none());
    }

    #[test]
    fn test_overlay_blocks_input_and_ignores_stale_restore() {
        let mut state = ShopState::new(&ShopConfig::default(), Vec::new());
        open_first_gallery(&mut state);
        let effects = send(&mut state, &[Intent::MoveDown, Intent::Select]);
        let token = state.overlay().unwrap().token;

        assert!(send(&mut state, &[Intent::Back]).is_empty());
        assert_eq!(state.menu(), MenuId::Gallery);

        update(&mut state, Msg::Restore(token + 1));
        assert!(state.overlay().is_some());
        flush(&mut state, &effects);
        assert!(state.overlay().is_none());
    }

    #[test]
    fn test_empty_cart_checkout_makes_no_request() {
        let mut state = ShopState::new(&config_with_payments(), Vec::new());
        send(&mut state, &[Intent::MoveDown, Intent::Select]);
        assert_eq!(state.menu(), MenuId::Cart);

        let effects = update(&mut state, Msg::Intent(Intent::Select));
        // "Back" is focused on an empty cart
        assert!(effects.is_empty());
        assert_eq!(state.menu(), MenuId::Main);

        state.render_cart();
        let effects = state.run_command(Command::Checkout);
        assert_eq!(effects, vec![Effect::Alert("Your cart is empty!".to_string())]);
        assert!(state.overlay().is_none());
    }

    fn state_with_cart(config: &ShopConfig) -> ShopState {
        let listing = &catalog::listings(Category::GameboyAdvance)[0];
        let mut cart = Cart::default();
        cart.add(Category::GameboyAdvance, 0, listing);
        ShopState::new(config, cart.items().to_vec())
    }

    /// Focus an entry in the cart view by label
    fn focus_cart_entry(state: &mut ShopState, label: &str) {
        send(state, &[Intent::MoveDown, Intent::Select]);
        assert_eq!(state.menu(), MenuId::Cart);
        while focused_label(state) != label {
            send(state, &[Intent::MoveDown]);
        }
    }

    #[test]
    fn test_checkout_without_payments() {
        let mut state = state_with_cart(&ShopConfig::default());
        focus_cart_entry(&mut state, "Checkout");
        let effects = send(&mut state, &[Intent::Select]);
        assert_eq!(effects, vec![Effect::Alert("Payment system not configured".to_string())]);
    }

    #[test]
    fn test_checkout_failure_restores_cart() {
        let mut state = state_with_cart(&config_with_payments());
        focus_cart_entry(&mut state, "Checkout");

        let effects = send(&mut state, &[Intent::Select]);
        assert!(matches!(effects.as_slice(), [Effect::BeginCheckout(items)] if items.len() == 1));
        assert_eq!(state.overlay().unwrap().kind, OverlayKind::Processing);

        let effects = update(&mut state, Msg::CheckoutFailed("Card declined".to_string()));
        assert_eq!(
            state.screen(),
            ScreenView::Message { lines: ["Error!".to_string(), "Card declined".to_string()] }
        );
        assert!(matches!(effects.as_slice(), [Effect::ScheduleRestore { after_ms: 2000, .. }]));

        flush(&mut state, &effects);
        assert_eq!(state.menu(), MenuId::Cart);
        assert!(state.overlay().is_none());
        assert_eq!(state.cart().len(), 1);
    }

    #[test]
    fn test_cart_detail_remove() {
        let mut state = state_with_cart(&ShopConfig::default());
        focus_cart_entry(&mut state, "Clear Purple GBA - $160");
        send(&mut state, &[Intent::Select]);
        assert_eq!(state.menu(), MenuId::CartDetail(0));
        assert_eq!(focused_label(&state), "View Listing");

        send(&mut state, &[Intent::MoveDown]);
        assert_eq!(focused_label(&state), "Remove Item");
        send(&mut state, &[Intent::MoveDown]);
        assert_eq!(focused_label(&state), "View Listing");
        send(&mut state, &[Intent::MoveUp]);

        let effects = send(&mut state, &[Intent::Select]);
        assert_eq!(effects, vec![Effect::PersistCart(Vec::new())]);
        assert_eq!(state.menu(), MenuId::Cart);
        assert!(state.cart().is_empty());
    }

    #[test]
    fn test_view_listing_returns_to_cart() {
        let mut state = state_with_cart(&ShopConfig::default());
        focus_cart_entry(&mut state, "Clear Purple GBA - $160");
        send(&mut state, &[Intent::Select, Intent::Select]);
        assert_eq!(state.menu(), MenuId::Gallery);
        assert!(state.viewing_from_cart());
        assert_eq!(state.entries()[BACK_SLOT].label, "Back to Cart");

        send(&mut state, &[Intent::Back]);
        assert_eq!(state.menu(), MenuId::Cart);
        assert!(!state.viewing_from_cart());
    }

    #[test]
    fn test_clear_cart_requires_confirmation() {
        let mut state = state_with_cart(&ShopConfig::default());
        focus_cart_entry(&mut state, "Clear Cart");
        let effects = send(&mut state, &[Intent::Select]);
        assert_eq!(effects, vec![Effect::ConfirmClearCart("Clear all items from cart?".to_string())]);
        assert_eq!(state.cart().len(), 1);

        let effects = update(&mut state, Msg::ClearCartConfirmed);
        assert_eq!(effects, vec![Effect::PersistCart(Vec::new())]);
        assert!(state.cart().is_empty());
        assert_eq!(state.entries()[1].role, Role::CartEmpty);
    }

    #[test]
    fn test_pointer_focuses_then_activates() {
        let mut state = ShopState::new(&ShopConfig::default(), Vec::new());
        update(&mut state, Msg::Pointer(2));
        assert_eq!(state.focus(), 2);
        assert_eq!(state.menu(), MenuId::Main);
        update(&mut state, Msg::Pointer(2));
        assert_eq!(state.menu(), MenuId::About);
        update(&mut state, Msg::Pointer(99));
        assert_eq!(state.menu(), MenuId::About);
    }

    #[test]
    fn test_pointer_ignores_static_entries() {
        let mut state = state_with_cart(&ShopConfig::default());
        send(&mut state, &[Intent::MoveDown, Intent::Select]);
        // "Total: $160"
        update(&mut state, Msg::Pointer(2));
        assert_eq!(state.focus(), 0);
    }

    #[test]
    fn test_switch_console_and_resize() {
        let mut state = ShopState::new(&ShopConfig::default(), Vec::new());
        update(&mut state, Msg::Resize(1280.0));
        assert_eq!(state.layout(), ConsoleLayout::Gba);
        update(&mut state, Msg::Pointer(4));
        update(&mut state, Msg::Pointer(4));
        assert_eq!(state.layout(), ConsoleLayout::GbaSp);
        assert_eq!(state.menu(), MenuId::Main);
        assert_eq!(state.focus(), 0);
    }

    #[test]
    fn test_external_link() {
        let mut state = ShopState::new(&ShopConfig::default(), Vec::new());
        update(&mut state, Msg::Pointer(2));
        update(&mut state, Msg::Pointer(2));
        update(&mut state, Msg::Pointer(2));
        let effects = update(&mut state, Msg::Pointer(2));
        assert_eq!(effects, vec![Effect::OpenUrl("https://sleepystatic.com/".to_string())]);
    }

    fn arb_msg() -> impl Strategy<Value = Msg> {
        let intent = prop::sample::select(vec![
            Intent::MoveUp,
            Intent::MoveDown,
            Intent::Select,
            Intent::Back,
            Intent::BrowseNext,
            Intent::BrowsePrev,
        ]);
        prop_oneof![
            6 => intent.prop_map(Msg::Intent),
            2 => (0usize..10).prop_map(Msg::Pointer),
            2 => (0u64..40).prop_map(Msg::Restore),
            1 => Just(Msg::ClearCartConfirmed),
            1 => "[A-Za-z ]{0,16}".prop_map(Msg::CheckoutFailed),
            1 => (200.0f64..1400.0).prop_map(Msg::Resize),
        ]
    }

    proptest! {
        #[test]
        fn test_any_message_stream_keeps_stock_and_focus(
            msgs in prop::collection::vec(arb_msg(), 0..200)
        ) {
            let mut state = ShopState::new(&config_with_payments(), Vec::new());
            for msg in msgs {
                update(&mut state, msg);

                for category in Category::ALL {
                    for (index, listing) in crate::catalog::listings(category).iter().enumerate() {
                        let count = state.cart().count_of(&CartItem::key_for(category, index));
                        prop_assert!(count <= listing.stock as usize);
                    }
                }
                if let ScreenView::Menu { entries, focus, .. } = state.screen() {
                    prop_assert!(focus < entries.len(), "focus {} of {} entries", focus, entries.len());
                }
            }
        }
    }
}
