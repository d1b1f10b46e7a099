/// What the run was asked to do, derived once from the parsed mode and alias list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeQuery {
    /// Report the current mode.
    Unset,
    /// Switch to this mode unless it is already active.
    Target(String),
}

impl ModeQuery {
    pub fn from_literal(mode: &str) -> Self {
        if mode.is_empty() {
            Self::Unset
        } else {
            Self::Target(mode.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPhase {
    Down,
    Up,
}

/// A single virtual-key transition to be injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Windows virtual-key code. `0` for tokens outside the known set.
    pub vk: u16,
    pub phase: KeyPhase,
}

impl KeyEvent {
    pub const fn down(vk: u16) -> Self {
        Self {
            vk,
            phase: KeyPhase::Down,
        }
    }

    pub const fn up(vk: u16) -> Self {
        Self {
            vk,
            phase: KeyPhase::Up,
        }
    }
}

/// Element kinds the reader filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlType {
    Button,
    Text,
    ToolBar,
    Window,
    Pane,
}

impl ControlType {
    /// UI Automation control type id.
    pub const fn id(self) -> i32 {
        match self {
            Self::Button => 50000,
            Self::Text => 50020,
            Self::ToolBar => 50021,
            Self::Window => 50032,
            Self::Pane => 50033,
        }
    }
}

/// Result of one query-or-switch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Query without aliases: the raw captured mode.
    Current(String),
    /// Query with aliases: index of the current mode in the alias list.
    CurrentIndex(usize),
    /// Query with aliases, but the current mode is not one of them.
    Unlisted(String),
    /// Requested mode is already active; nothing was injected.
    Unchanged(String),
    /// The switch combination was injected.
    Switched { from: String, to: String },
}

impl Outcome {
    /// The line to print on stdout, if any.
    pub fn report(&self) -> Option<String> {
        match self {
            Self::Current(mode) => Some(mode.clone()),
            Self::CurrentIndex(idx) => Some(idx.to_string()),
            Self::Unlisted(_) | Self::Unchanged(_) | Self::Switched { .. } => None,
        }
    }
}
