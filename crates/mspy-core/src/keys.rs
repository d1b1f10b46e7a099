use crate::types::KeyEvent;
use tracing::warn;

pub const VK_NONE: u16 = 0x00;
pub const VK_SPACE: u16 = 0x20;
pub const VK_SHIFT: u16 = 0x10;
pub const VK_CONTROL: u16 = 0x11;
pub const VK_MENU: u16 = 0x12;
pub const VK_LWIN: u16 = 0x5B;

/// One `+`-separated token of a key combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyToken {
    Shift,
    Ctrl,
    Alt,
    Win,
    Space,
    /// Outside the supported set; injected as the null key code.
    Unknown(String),
}

impl KeyToken {
    pub fn from_text(text: &str) -> Self {
        match text {
            "shift" => Self::Shift,
            "ctrl" => Self::Ctrl,
            "alt" => Self::Alt,
            "win" => Self::Win,
            "space" => Self::Space,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub const fn vk(&self) -> u16 {
        match self {
            Self::Shift => VK_SHIFT,
            Self::Ctrl => VK_CONTROL,
            Self::Alt => VK_MENU,
            Self::Win => VK_LWIN,
            Self::Space => VK_SPACE,
            Self::Unknown(_) => VK_NONE,
        }
    }
}

/// A parsed key combination such as `ctrl+shift`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyCombo {
    pub tokens: Vec<KeyToken>,
}

impl KeyCombo {
    /// Case-insensitive split on `+`. Tokens are taken as written, so empty
    /// or padded ones become unknown keys; only a single trailing empty token
    /// (`"ctrl+"`) is dropped, and an empty string has no tokens.
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        let mut parts: Vec<&str> = lowered.split('+').collect();
        if parts.last().is_some_and(|t| t.is_empty()) {
            parts.pop();
        }
        let tokens = parts.into_iter().map(KeyToken::from_text).collect();
        Self { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn unknown_tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(|t| match t {
            KeyToken::Unknown(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Press every key in order, then release in reverse.
    pub fn events(&self) -> Vec<KeyEvent> {
        let mut events = Vec::with_capacity(self.tokens.len() * 2);
        events.extend(self.tokens.iter().map(|t| KeyEvent::down(t.vk())));
        events.extend(self.tokens.iter().rev().map(|t| KeyEvent::up(t.vk())));
        events
    }
}

/// Parse a combination and build its event sequence, warning about tokens
/// that will be injected as the null key.
pub fn key_sequence(raw: &str) -> Vec<KeyEvent> {
    let combo = KeyCombo::parse(raw);
    for token in combo.unknown_tokens() {
        warn!("Unknown key {:?} in {:?}, sending null key code", token, raw);
    }
    combo.events()
}
