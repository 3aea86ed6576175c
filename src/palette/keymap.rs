//! Global keyboard routing.
//!
//! Pure function from a key event plus a host-supplied context to a set of
//! dispatch actions, so the contract is testable without a DOM. The host
//! owns the capture-phase listener and the "is focus in an editable element"
//! predicate; this module owns the decisions.

use crate::commands::types::{canonicalize_key, Command, CommandTarget};

/// A key event as the host reports it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl KeyInput {
    pub fn new(key: &str) -> Self {
        Self {
            key: canonicalize_key(key),
            ..Self::default()
        }
    }

    pub fn ctrl(key: &str) -> Self {
        Self {
            ctrl: true,
            ..Self::new(key)
        }
    }

    /// Ctrl or Meta counts as the platform accelerator.
    pub fn accel(&self) -> bool {
        self.ctrl || self.meta
    }

    /// Whether this event matches a command's shortcut. Ctrl and Meta are
    /// interchangeable accelerators so "Ctrl+2" fires on Cmd+2 as well.
    fn matches(&self, command: &Command) -> bool {
        let shortcut = &command.shortcut;
        let key = canonicalize_key(&self.key);
        if key != shortcut.key || self.alt != shortcut.modifiers.alt
            || self.shift != shortcut.modifiers.shift
        {
            return false;
        }
        if shortcut.modifiers.ctrl || shortcut.modifiers.meta {
            self.accel() == (shortcut.modifiers.ctrl || shortcut.modifiers.meta)
        } else {
            !self.accel()
        }
    }
}

/// What the host is showing when the key arrives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyContext {
    pub palette_open: bool,
    pub dropdown_open: bool,
    /// Injected focus predicate: true when a text-input-like element has
    /// focus.
    pub focus_in_editable: bool,
}

/// One routed action. Escape can yield two at once (palette back-step and
/// dropdown close).
#[derive(Clone, Debug, PartialEq)]
pub enum KeyAction {
    TogglePalette,
    /// Escape while the palette is open; the state machine decides whether
    /// this steps back a view or closes.
    PaletteBack,
    CloseDropdown,
    MoveUp,
    MoveDown,
    Activate,
    /// A global command shortcut fired while the palette is closed.
    Run(CommandTarget),
}

/// Routing outcome: the actions to apply plus whether the host must call
/// preventDefault to keep the browser binding from firing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyDispatch {
    pub actions: Vec<KeyAction>,
    pub prevent_default: bool,
}

impl KeyDispatch {
    fn none() -> Self {
        Self::default()
    }

    fn handled(actions: Vec<KeyAction>) -> Self {
        Self {
            actions,
            prevent_default: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Route one global key event.
///
/// Contract:
/// - Ctrl/Cmd+K toggles the palette, except when it is closed and focus sits
///   in an editable element (normal typing wins). An open palette always
///   closes regardless of focus.
/// - Escape steps the palette back one level and/or closes the dropdown;
///   both apply when both are open.
/// - While the palette is open it owns the keyboard: arrows/enter navigate
///   it and global command shortcuts are suppressed.
/// - Command shortcuts fire only while the palette is closed and focus is
///   not editable. Every handled event demands preventDefault.
pub fn route_key(input: &KeyInput, ctx: KeyContext, commands: &[&Command]) -> KeyDispatch {
    let key = canonicalize_key(&input.key);

    if input.accel() && key == "k" {
        if ctx.palette_open || !ctx.focus_in_editable {
            return KeyDispatch::handled(vec![KeyAction::TogglePalette]);
        }
        return KeyDispatch::none();
    }

    if key == "escape" {
        let mut actions = Vec::new();
        if ctx.palette_open {
            actions.push(KeyAction::PaletteBack);
        }
        if ctx.dropdown_open {
            actions.push(KeyAction::CloseDropdown);
        }
        return if actions.is_empty() {
            KeyDispatch::none()
        } else {
            KeyDispatch::handled(actions)
        };
    }

    if ctx.palette_open {
        return match key.as_str() {
            "down" => KeyDispatch::handled(vec![KeyAction::MoveDown]),
            "up" => KeyDispatch::handled(vec![KeyAction::MoveUp]),
            "enter" => KeyDispatch::handled(vec![KeyAction::Activate]),
            // Palette owns the keyboard; nothing else routes globally.
            _ => KeyDispatch::none(),
        };
    }

    if !ctx.focus_in_editable {
        if let Some(command) = commands.iter().find(|c| input.matches(c)) {
            return KeyDispatch::handled(vec![KeyAction::Run(command.target)]);
        }
    }

    KeyDispatch::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::registry::system_commands;

    fn ctx(palette_open: bool, dropdown_open: bool, focus_in_editable: bool) -> KeyContext {
        KeyContext {
            palette_open,
            dropdown_open,
            focus_in_editable,
        }
    }

    fn route(input: &KeyInput, ctx: KeyContext) -> KeyDispatch {
        let commands = system_commands();
        let refs: Vec<&Command> = commands.iter().collect();
        route_key(input, ctx, &refs)
    }

    #[test]
    fn accel_k_toggles_when_closed_and_focus_free() {
        let dispatch = route(&KeyInput::ctrl("k"), ctx(false, false, false));
        assert_eq!(dispatch.actions, vec![KeyAction::TogglePalette]);
        assert!(dispatch.prevent_default);
    }

    #[test]
    fn accel_k_suppressed_while_typing() {
        let dispatch = route(&KeyInput::ctrl("k"), ctx(false, false, true));
        assert!(dispatch.is_empty());
        assert!(!dispatch.prevent_default);
    }

    #[test]
    fn accel_k_always_closes_an_open_palette() {
        let dispatch = route(&KeyInput::ctrl("k"), ctx(true, false, true));
        assert_eq!(dispatch.actions, vec![KeyAction::TogglePalette]);
    }

    #[test]
    fn cmd_k_works_like_ctrl_k() {
        let input = KeyInput {
            meta: true,
            ..KeyInput::new("k")
        };
        let dispatch = route(&input, ctx(false, false, false));
        assert_eq!(dispatch.actions, vec![KeyAction::TogglePalette]);
    }

    #[test]
    fn escape_hits_palette_and_dropdown_together() {
        let dispatch = route(&KeyInput::new("Escape"), ctx(true, true, false));
        assert_eq!(
            dispatch.actions,
            vec![KeyAction::PaletteBack, KeyAction::CloseDropdown]
        );

        let dispatch = route(&KeyInput::new("Escape"), ctx(false, true, true));
        assert_eq!(dispatch.actions, vec![KeyAction::CloseDropdown]);

        let dispatch = route(&KeyInput::new("Escape"), ctx(false, false, false));
        assert!(dispatch.is_empty());
    }

    #[test]
    fn open_palette_owns_arrows_and_enter() {
        assert_eq!(
            route(&KeyInput::new("ArrowDown"), ctx(true, false, false)).actions,
            vec![KeyAction::MoveDown]
        );
        assert_eq!(
            route(&KeyInput::new("ArrowUp"), ctx(true, false, false)).actions,
            vec![KeyAction::MoveUp]
        );
        assert_eq!(
            route(&KeyInput::new("Enter"), ctx(true, false, false)).actions,
            vec![KeyAction::Activate]
        );
    }

    #[test]
    fn digit_shortcut_navigates_when_palette_closed() {
        let dispatch = route(&KeyInput::ctrl("2"), ctx(false, false, false));
        assert_eq!(dispatch.actions, vec![KeyAction::Run(CommandTarget::GoInvoices)]);
        assert!(dispatch.prevent_default);
    }

    #[test]
    fn letter_shortcut_navigates_when_palette_closed() {
        let dispatch = route(&KeyInput::ctrl("b"), ctx(false, false, false));
        assert_eq!(dispatch.actions, vec![KeyAction::Run(CommandTarget::NewInvoice)]);
    }

    #[test]
    fn global_shortcuts_suppressed_while_palette_open() {
        let dispatch = route(&KeyInput::ctrl("2"), ctx(true, false, false));
        assert!(dispatch.is_empty());
    }

    #[test]
    fn global_shortcuts_suppressed_while_typing() {
        let dispatch = route(&KeyInput::ctrl("2"), ctx(false, false, true));
        assert!(dispatch.is_empty());
    }

    #[test]
    fn shift_distinguishes_shortcuts() {
        // ctrl+shift+b is "new product", plain ctrl+b is "new invoice"
        let input = KeyInput {
            shift: true,
            ..KeyInput::ctrl("b")
        };
        let dispatch = route(&input, ctx(false, false, false));
        assert_eq!(dispatch.actions, vec![KeyAction::Run(CommandTarget::NewProduct)]);
    }

    #[test]
    fn unbound_keys_do_nothing() {
        assert!(route(&KeyInput::ctrl("9"), ctx(false, false, false)).is_empty());
        assert!(route(&KeyInput::new("x"), ctx(false, false, false)).is_empty());
    }
}
