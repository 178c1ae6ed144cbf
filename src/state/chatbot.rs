//! Lead Chatbot
//!
//! Fixed forward-only script collecting a seller lead. Each visitor answer
//! fills the next record field; the bot's next prompt is shown after a
//! delay through `ChatEffect::ScheduleReply`.

use crate::models::SellerLead;

/// Step reached after the email answer
pub const FINAL_STEP: u8 = 6;

pub const CONDITION_CHOICES: &[&str] = &["Mint", "Good", "Fair", "For Parts"];
pub const SHIPPING_CHOICES: &[&str] = &["Local Pickup", "Shipping"];

const GREETING: &str = "Hey there! Got an old Game Boy or DS collecting dust? Tell us and we'll make you an offer.";

/// Bot prompt for a step: text, button choices, whether typed input is shown
fn prompt(step: u8) -> (&'static str, &'static [&'static str], bool) {
    match step {
        0 => (GREETING, &[], true),
        1 => ("Awesome! What are you looking to sell?", &[], true),
        2 => ("What condition is it in?", CONDITION_CHOICES, false),
        3 => ("What price are you hoping for? (e.g., $80)", &[], true),
        4 => ("Are you local to Modesto for pickup, or prefer shipping?", SHIPPING_CHOICES, false),
        5 => ("Great! What's your email so we can reach you?", &[], true),
        _ => ("Thanks! We'll reach out to you shortly! 🎮", &[], false),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub from_bot: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEffect {
    /// Show the prompt for `step` after `after_ms`
    ScheduleReply { step: u8, after_ms: u32 },
    /// Post the completed lead
    Submit(SellerLead),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadChatbot {
    step: u8,
    record: SellerLead,
    messages: Vec<ChatMessage>,
    choices: &'static [&'static str],
    input_visible: bool,
    awaiting_reply: bool,
    open: bool,
    reply_delay_ms: u32,
}

impl LeadChatbot {
    pub fn new(reply_delay_ms: u32) -> Self {
        let (greeting, choices, input_visible) = prompt(0);
        Self {
            step: 0,
            record: SellerLead::default(),
            messages: vec![ChatMessage { text: greeting.to_string(), from_bot: true }],
            choices,
            input_visible,
            awaiting_reply: false,
            open: false,
            reply_delay_ms,
        }
    }

    #[cfg(test)]
    pub fn step(&self) -> u8 {
        self.step
    }

    #[cfg(test)]
    pub fn record(&self) -> &SellerLead {
        &self.record
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn choices(&self) -> &'static [&'static str] {
        self.choices
    }

    pub fn input_visible(&self) -> bool {
        self.input_visible
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_finished(&self) -> bool {
        self.step >= FINAL_STEP
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Record a visitor answer for the current step.
    ///
    /// Ignored when finished, while the previous reply is still pending,
    /// for blank input, or for text outside a choice step's options.
    /// `timestamp` is only called on the email step.
    pub fn respond(&mut self, response: &str, timestamp: impl FnOnce() -> String) -> Vec<ChatEffect> {
        let response = response.trim();
        if self.is_finished() || self.awaiting_reply || response.is_empty() {
            return Vec::new();
        }
        if !self.choices.is_empty() && !self.choices.iter().any(|choice| *choice == response) {
            return Vec::new();
        }

        self.messages.push(ChatMessage { text: response.to_string(), from_bot: false });
        self.choices = &[];

        match self.step {
            0 => {}
            1 => self.record.item = response.to_string(),
            2 => self.record.condition = response.to_string(),
            3 => self.record.price = response.to_string(),
            4 => self.record.shipping = response.to_string(),
            _ => {
                self.record.email = response.to_string();
                self.record.timestamp = timestamp();
            }
        }
        self.step += 1;
        self.awaiting_reply = true;

        let mut effects = Vec::with_capacity(2);
        if self.step == FINAL_STEP {
            effects.push(ChatEffect::Submit(self.record.clone()));
        }
        effects.push(ChatEffect::ScheduleReply { step: self.step, after_ms: self.reply_delay_ms });
        effects
    }

    /// Show the bot prompt for `step`; stale replies are dropped
    pub fn show_prompt(&mut self, step: u8) {
        if step != self.step || !self.awaiting_reply {
            return;
        }
        let (text, choices, input_visible) = prompt(step);
        self.messages.push(ChatMessage { text: text.to_string(), from_bot: true });
        self.choices = choices;
        self.input_visible = input_visible;
        self.awaiting_reply = false;
    }
}
