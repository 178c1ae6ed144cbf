//! Menu Tree
//!
//! Menu identifiers, entries and the focus ring. Entries are plain data so
//! the navigator can be driven without a document.

use crate::models::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuId {
    Main,
    Shop,
    About,
    Creator,
    Contact,
    Privacy,
    Cart,
    /// Detail view of one cart line
    CartDetail(usize),
    Gallery,
}

impl MenuId {
    /// DOM id of the menu list
    pub fn dom_id(&self) -> &'static str {
        match self {
            MenuId::Main => "main-menu",
            MenuId::Shop => "shop-menu",
            MenuId::About => "about-menu",
            MenuId::Creator => "creator-menu",
            MenuId::Contact => "contact-menu",
            MenuId::Privacy => "privacy-menu",
            MenuId::Cart | MenuId::CartDetail(_) => "cart-menu",
            MenuId::Gallery => "gallery-menu",
        }
    }

    /// Menus nested under About
    pub fn is_about_child(&self) -> bool {
        matches!(self, MenuId::Creator | MenuId::Contact)
    }
}

/// What an entry is; decides focusability and styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Action,
    /// Cart line carrying its cart index marker
    CartLine(usize),
    GalleryImage,
    GalleryTitle,
    GalleryDescription,
    GalleryPrice,
    CartTotal,
    CartEmpty,
    CartItemTitle,
    CartItemImage,
    CartItemPrice,
    Bio,
}

impl Role {
    pub fn is_focusable(&self) -> bool {
        matches!(self, Role::Action | Role::CartLine(_) | Role::GalleryImage)
    }

    pub fn class(&self) -> &'static str {
        match self {
            Role::Action | Role::CartLine(_) => "menu-item",
            Role::GalleryImage => "menu-item gallery-image",
            Role::GalleryTitle => "menu-item gallery-title",
            Role::GalleryDescription => "menu-item gallery-description",
            Role::GalleryPrice => "menu-item gallery-price",
            Role::CartTotal => "menu-item cart-total",
            Role::CartEmpty => "menu-item cart-empty",
            Role::CartItemTitle => "menu-item cart-item-title",
            Role::CartItemImage => "menu-item cart-item-image",
            Role::CartItemPrice => "menu-item cart-item-price",
            Role::Bio => "menu-item bio",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub role: Role,
    pub image: Option<String>,
}

impl MenuEntry {
    pub fn action(label: impl Into<String>) -> Self {
        Self::new(label, Role::Action)
    }

    pub fn text(label: impl Into<String>, role: Role) -> Self {
        Self::new(label, role)
    }

    pub fn image(alt: impl Into<String>, src: impl Into<String>, role: Role) -> Self {
        Self {
            label: alt.into(),
            role,
            image: Some(src.into()),
        }
    }

    fn new(label: impl Into<String>, role: Role) -> Self {
        Self {
            label: label.into(),
            role,
            image: None,
        }
    }

    /// Trimmed, lowercased label used for command matching
    pub fn normalized(&self) -> String {
        self.label.trim().to_lowercase()
    }
}

/// Fixed entries of the static menus
pub fn static_entries(menu: MenuId) -> Vec<MenuEntry> {
    match menu {
        MenuId::Main => vec![
            MenuEntry::action("Shop"),
            MenuEntry::action("Cart"),
            MenuEntry::action("About"),
            MenuEntry::action("Privacy Policy"),
            MenuEntry::action("Switch Console"),
        ],
        MenuId::Shop => Category::ALL
            .iter()
            .map(|c| MenuEntry::action(c.label()))
            .chain(std::iter::once(MenuEntry::action("Back")))
            .collect(),
        MenuId::About => vec![
            MenuEntry::action("Creator"),
            MenuEntry::action("Contact"),
            MenuEntry::action("Sleepy Static"),
            MenuEntry::action("Back"),
        ],
        MenuId::Creator => vec![
            MenuEntry::text("Handhelds restored, modded and tested by hand in Modesto, CA.", Role::Bio),
            MenuEntry::action("Back"),
        ],
        MenuId::Contact => vec![
            MenuEntry::text("Questions or want to sell? Open the chat bubble and we'll get back to you.", Role::Bio),
            MenuEntry::action("Back"),
        ],
        MenuId::Privacy => vec![
            MenuEntry::text("Your cart stays in this browser. Payments are handled by Stripe; we never see card details.", Role::Bio),
            MenuEntry::text("Seller chat answers are only used to contact you about your item.", Role::Bio),
            MenuEntry::action("Home"),
        ],
        MenuId::Cart | MenuId::CartDetail(_) | MenuId::Gallery => Vec::new(),
    }
}

/// Commands recognized from a focused entry's normalized label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    OpenGallery(Category),
    SwitchConsole,
    Home,
    Shop,
    Cart,
    About,
    Creator,
    SleepyStatic,
    Contact,
    PrivacyPolicy,
    Back,
    Checkout,
    ClearCart,
    BackToCart,
    RemoveItem,
    ViewListing,
    AddToCart,
}

impl Command {
    pub fn parse(text: &str) -> Option<Self> {
        if let Some(category) = Category::from_label(text) {
            return Some(Command::OpenGallery(category));
        }
        let command = match text {
            "switch console" => Command::SwitchConsole,
            "home" => Command::Home,
            "shop" => Command::Shop,
            "cart" => Command::Cart,
            "about" => Command::About,
            "creator" => Command::Creator,
            "sleepy static" => Command::SleepyStatic,
            "contact" => Command::Contact,
            "privacy policy" => Command::PrivacyPolicy,
            "back" => Command::Back,
            "checkout" => Command::Checkout,
            "clear cart" => Command::ClearCart,
            "back to cart" => Command::BackToCart,
            "remove item" => Command::RemoveItem,
            "view listing" => Command::ViewListing,
            "add to cart" => Command::AddToCart,
            _ => return None,
        };
        Some(command)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// First focusable index, or 0 when the menu has none
pub fn first_focusable(entries: &[MenuEntry]) -> usize {
    entries.iter().position(|e| e.role.is_focusable()).unwrap_or(0)
}

/// Next focusable index in `direction`, wrapping around.
/// Returns `from` unchanged when nothing is focusable.
pub fn step_focus(entries: &[MenuEntry], from: usize, direction: Direction) -> usize {
    let len = entries.len();
    if len == 0 {
        return from;
    }
    let mut index = from % len;
    for _ in 0..len {
        index = match direction {
            Direction::Forward => (index + 1) % len,
            Direction::Backward => (index + len - 1) % len,
        };
        if entries[index].role.is_focusable() {
            return index;
        }
    }
    from
}
