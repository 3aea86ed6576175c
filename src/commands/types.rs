//! Command and shortcut types.
//!
//! Shortcuts are parsed from "Ctrl+Shift+K" style strings into a canonical
//! lowercase form used for equality and conflict checks, with a separate
//! human display form. Ctrl and Meta (Cmd) stay distinct; either counts as
//! the accelerator depending on the host platform.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::nav::Route;

/// Errors from parsing a shortcut string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShortcutParseError {
    #[error("shortcut is empty")]
    Empty,
    #[error("shortcut has no key, only modifiers")]
    MissingKey,
    #[error("unexpected token '{0}' in shortcut")]
    UnknownToken(String),
    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

/// Modifier key flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub meta: bool,
}

impl Modifiers {
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn any(&self) -> bool {
        self.ctrl || self.alt || self.shift || self.meta
    }
}

/// A keyboard shortcut: modifier flags plus a canonical key name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shortcut {
    pub key: String,
    pub modifiers: Modifiers,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: canonicalize_key(&key.into()),
            modifiers,
        }
    }

    pub fn parse(s: &str) -> Result<Self, ShortcutParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ShortcutParseError::Empty);
        }

        let mut modifiers = Modifiers::default();
        let mut key_part: Option<&str> = None;

        for part in s.split('+').map(str::trim).filter(|p| !p.is_empty()) {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" | "opt" | "option" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                "cmd" | "meta" | "super" | "win" => modifiers.meta = true,
                _ => {
                    if key_part.is_some() {
                        return Err(ShortcutParseError::UnknownToken(part.to_owned()));
                    }
                    key_part = Some(part);
                }
            }
        }

        let key = key_part.ok_or(ShortcutParseError::MissingKey)?;
        let canonical = canonicalize_key(key);
        if !is_known_key(&canonical) {
            return Err(ShortcutParseError::UnknownKey(key.to_owned()));
        }

        Ok(Self {
            key: canonical,
            modifiers,
        })
    }

    /// Canonical lowercase form, fixed modifier order: "ctrl+shift+k".
    /// This is the identity used by conflict checks and persistence.
    pub fn canonical(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(5);
        if self.modifiers.ctrl {
            parts.push("ctrl");
        }
        if self.modifiers.alt {
            parts.push("alt");
        }
        if self.modifiers.shift {
            parts.push("shift");
        }
        if self.modifiers.meta {
            parts.push("meta");
        }
        parts.push(&self.key);
        parts.join("+")
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::with_capacity(5);
        if self.modifiers.ctrl {
            parts.push("Ctrl".into());
        }
        if self.modifiers.alt {
            parts.push("Alt".into());
        }
        if self.modifiers.shift {
            parts.push("Shift".into());
        }
        if self.modifiers.meta {
            parts.push("Cmd".into());
        }
        parts.push(display_key(&self.key));
        write!(f, "{}", parts.join("+"))
    }
}

/// Canonicalize a key name to the internal standard form.
pub fn canonicalize_key(key: &str) -> String {
    let lower = key.to_lowercase();
    match lower.as_str() {
        "arrowup" | "uparrow" => "up",
        "arrowdown" | "downarrow" => "down",
        "arrowleft" | "leftarrow" => "left",
        "arrowright" | "rightarrow" => "right",
        "return" => "enter",
        "esc" => "escape",
        _ => return lower,
    }
    .to_owned()
}

fn display_key(key: &str) -> String {
    match key {
        "enter" => "Enter".into(),
        "escape" => "Esc".into(),
        "space" => "Space".into(),
        "up" => "Up".into(),
        "down" => "Down".into(),
        "left" => "Left".into(),
        "right" => "Right".into(),
        k => k.to_uppercase(),
    }
}

/// Keys a shortcut may bind. Letters, digits, function keys, and a handful
/// of named keys.
pub fn is_known_key(key: &str) -> bool {
    if key.len() == 1 {
        let c = key.as_bytes()[0];
        return c.is_ascii_lowercase() || c.is_ascii_digit();
    }
    matches!(
        key,
        "f1" | "f2"
            | "f3"
            | "f4"
            | "f5"
            | "f6"
            | "f7"
            | "f8"
            | "f9"
            | "f10"
            | "f11"
            | "f12"
            | "space"
            | "enter"
            | "escape"
            | "up"
            | "down"
            | "left"
            | "right"
    )
}

/// Whether a command is an action (creates/does something) or a navigation
/// (routes somewhere). Drives the palette's fixed section ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandCategory {
    Action,
    Navigation,
}

/// Where a command came from. System commands are fixed at startup; custom
/// commands are user-created and persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandSource {
    System,
    Custom,
}

/// Every executable target a command can point at. Custom commands pick one
/// of these from the catalog; ids are stable strings used in persistence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandTarget {
    GoDashboard,
    GoInvoices,
    GoPos,
    GoProducts,
    GoClients,
    GoReceivables,
    GoSettings,
    NewInvoice,
    NewClient,
    NewProduct,
}

impl CommandTarget {
    pub const ALL: [CommandTarget; 10] = [
        CommandTarget::GoDashboard,
        CommandTarget::GoInvoices,
        CommandTarget::GoPos,
        CommandTarget::GoProducts,
        CommandTarget::GoClients,
        CommandTarget::GoReceivables,
        CommandTarget::GoSettings,
        CommandTarget::NewInvoice,
        CommandTarget::NewClient,
        CommandTarget::NewProduct,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CommandTarget::GoDashboard => "Go to dashboard",
            CommandTarget::GoInvoices => "Go to invoices",
            CommandTarget::GoPos => "Go to point of sale",
            CommandTarget::GoProducts => "Go to products",
            CommandTarget::GoClients => "Go to clients",
            CommandTarget::GoReceivables => "Go to receivables",
            CommandTarget::GoSettings => "Go to settings",
            CommandTarget::NewInvoice => "New invoice",
            CommandTarget::NewClient => "New client",
            CommandTarget::NewProduct => "New product",
        }
    }

    /// The route this target lands on. Creation actions open their page with
    /// the corresponding form.
    pub fn route(&self) -> Route {
        match self {
            CommandTarget::GoDashboard => Route::Dashboard,
            CommandTarget::GoInvoices | CommandTarget::NewInvoice => Route::Invoices,
            CommandTarget::GoPos => Route::Pos,
            CommandTarget::GoProducts | CommandTarget::NewProduct => Route::Products,
            CommandTarget::GoClients | CommandTarget::NewClient => Route::Clients,
            CommandTarget::GoReceivables => Route::Receivables,
            CommandTarget::GoSettings => Route::Settings,
        }
    }

    pub fn default_category(&self) -> CommandCategory {
        match self {
            CommandTarget::NewInvoice | CommandTarget::NewClient | CommandTarget::NewProduct => {
                CommandCategory::Action
            }
            _ => CommandCategory::Navigation,
        }
    }
}

/// An executable command as the palette sees it.
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    pub id: String,
    pub name: String,
    pub category: CommandCategory,
    pub shortcut: Shortcut,
    pub icon: Option<String>,
    pub target: CommandTarget,
    pub source: CommandSource,
}

/// The persisted shape of a user-defined command. Shortcut is stored in
/// canonical string form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomCommand {
    pub id: String,
    pub name: String,
    pub category: CommandCategory,
    pub shortcut: String,
    pub target: CommandTarget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_canonicalize() {
        let s = Shortcut::parse("Ctrl+Shift+K").unwrap();
        assert!(s.modifiers.ctrl && s.modifiers.shift);
        assert_eq!(s.key, "k");
        assert_eq!(s.canonical(), "ctrl+shift+k");
        assert_eq!(s.to_string(), "Ctrl+Shift+K");
    }

    #[test]
    fn parse_accepts_modifier_aliases() {
        let s = Shortcut::parse("cmd+1").unwrap();
        assert!(s.modifiers.meta);
        assert_eq!(s.canonical(), "meta+1");
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(Shortcut::parse(""), Err(ShortcutParseError::Empty));
        assert_eq!(
            Shortcut::parse("ctrl+shift"),
            Err(ShortcutParseError::MissingKey)
        );
        assert_eq!(
            Shortcut::parse("ctrl+k+j"),
            Err(ShortcutParseError::UnknownToken("j".into()))
        );
        assert!(matches!(
            Shortcut::parse("ctrl+volumeup"),
            Err(ShortcutParseError::UnknownKey(_))
        ));
    }

    #[test]
    fn key_names_are_canonicalized() {
        assert_eq!(Shortcut::parse("Esc").unwrap().key, "escape");
        assert_eq!(Shortcut::parse("ArrowDown").unwrap().key, "down");
    }

    #[test]
    fn target_catalog_is_consistent() {
        for target in CommandTarget::ALL {
            assert!(!target.label().is_empty());
            // Every target resolves to a route.
            let _ = target.route();
        }
        assert_eq!(
            CommandTarget::NewInvoice.default_category(),
            CommandCategory::Action
        );
        assert_eq!(
            CommandTarget::GoSettings.default_category(),
            CommandCategory::Navigation
        );
    }

    #[test]
    fn custom_command_serde_round_trip() {
        let original = CustomCommand {
            id: "abc".into(),
            name: "Caja rápida".into(),
            category: CommandCategory::Navigation,
            shortcut: "ctrl+shift+x".into(),
            target: CommandTarget::GoPos,
        };
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("go-pos"));
        let back: CustomCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }
}
