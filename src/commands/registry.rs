//! The merged command list: fixed system commands plus user-defined custom
//! commands, with conflict-checked shortcut registration.

use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use super::store::CommandStore;
use super::types::{
    Command, CommandCategory, CommandSource, CommandTarget, CustomCommand, Shortcut,
    ShortcutParseError,
};

/// Browser/OS bindings a custom command may never claim, with the reason
/// shown to the user. Kept as a static table; it covers the common bindings
/// the app actually collides with in practice.
pub const RESERVED_SHORTCUTS: &[(&str, &str)] = &[
    ("ctrl+p", "browser print dialog"),
    ("ctrl+t", "browser new tab"),
    ("ctrl+w", "browser close tab"),
    ("ctrl+n", "browser new window"),
    ("ctrl+s", "browser save page"),
    ("ctrl+f", "browser find in page"),
    ("ctrl+r", "browser reload"),
    ("ctrl+l", "browser address bar"),
    ("f5", "browser reload"),
    ("ctrl+k", "command palette toggle"),
];

/// Why a custom command submission was rejected. Messages are shown inline
/// in the edit form; they must name the conflicting owner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandValidationError {
    #[error("command name is required")]
    EmptyName,
    #[error("shortcut is required")]
    EmptyShortcut,
    #[error("pick an action for the command")]
    MissingTarget,
    #[error("invalid shortcut: {0}")]
    InvalidShortcut(#[from] ShortcutParseError),
    #[error("{shortcut} is reserved ({reason})")]
    ReservedShortcut { shortcut: String, reason: String },
    #[error("{shortcut} is already used by \"{owner}\"")]
    ShortcutTaken { shortcut: String, owner: String },
}

/// Draft fields for the palette's new-command form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DraftCommand {
    pub name: String,
    pub shortcut: String,
    pub target: Option<CommandTarget>,
    pub category: Option<CommandCategory>,
}

fn system_command(
    id: &str,
    shortcut: &str,
    target: CommandTarget,
    icon: Option<&str>,
) -> Command {
    // Shortcut strings here are compile-time constants; a parse failure is a
    // programming error, so expect() in this one constructor is acceptable.
    Command {
        id: id.to_owned(),
        name: target.label().to_owned(),
        category: target.default_category(),
        shortcut: Shortcut::parse(shortcut).expect("system shortcut must parse"),
        icon: icon.map(str::to_owned),
        target,
        source: CommandSource::System,
    }
}

/// The fixed system command list. Immutable after startup.
pub fn system_commands() -> Vec<Command> {
    vec![
        system_command("sys.new-invoice", "ctrl+b", CommandTarget::NewInvoice, Some("receipt")),
        system_command("sys.new-client", "ctrl+u", CommandTarget::NewClient, Some("user-plus")),
        system_command(
            "sys.new-product",
            "ctrl+shift+b",
            CommandTarget::NewProduct,
            Some("package"),
        ),
        system_command("sys.go-dashboard", "ctrl+1", CommandTarget::GoDashboard, None),
        system_command("sys.go-invoices", "ctrl+2", CommandTarget::GoInvoices, None),
        system_command("sys.go-pos", "ctrl+3", CommandTarget::GoPos, None),
        system_command("sys.go-products", "ctrl+4", CommandTarget::GoProducts, None),
        system_command("sys.go-clients", "ctrl+5", CommandTarget::GoClients, None),
        system_command("sys.go-receivables", "ctrl+6", CommandTarget::GoReceivables, None),
        system_command("sys.go-settings", "ctrl+7", CommandTarget::GoSettings, None),
    ]
}

/// Registry of all active commands. Custom commands live in the injected
/// store; the registry reloads on mount and whenever the host's
/// storage-change event fires.
pub struct CommandRegistry {
    system: Vec<Command>,
    custom: Vec<Command>,
    store: Box<dyn CommandStore>,
}

impl CommandRegistry {
    /// Build the registry and load custom commands. A failing store degrades
    /// to the system-only list with a warning; the palette keeps working.
    pub fn new(store: Box<dyn CommandStore>) -> Self {
        let mut registry = Self {
            system: system_commands(),
            custom: Vec::new(),
            store,
        };
        registry.reload();
        registry
    }

    /// Re-read the custom list from the store. Invalid persisted shortcuts
    /// are skipped with a warning instead of poisoning the whole list.
    pub fn reload(&mut self) {
        match self.store.load() {
            Ok(persisted) => {
                self.custom = persisted
                    .into_iter()
                    .filter_map(|c| match Shortcut::parse(&c.shortcut) {
                        Ok(shortcut) => Some(Command {
                            id: c.id,
                            name: c.name,
                            category: c.category,
                            shortcut,
                            icon: None,
                            target: c.target,
                            source: CommandSource::Custom,
                        }),
                        Err(e) => {
                            warn!(id = %c.id, shortcut = %c.shortcut, error = %e,
                                "skipping custom command with invalid shortcut");
                            None
                        }
                    })
                    .collect();
                debug!(count = self.custom.len(), "custom commands loaded");
            }
            Err(e) => {
                warn!(error = %e, "command store unavailable, using system commands only");
                self.custom.clear();
            }
        }
    }

    pub fn system(&self) -> &[Command] {
        &self.system
    }

    pub fn custom(&self) -> &[Command] {
        &self.custom
    }

    /// The palette's fixed ordering contract: action commands first, then
    /// navigation commands; system before custom within each group.
    pub fn merged(&self) -> Vec<&Command> {
        let mut list = Vec::with_capacity(self.system.len() + self.custom.len());
        for category in [CommandCategory::Action, CommandCategory::Navigation] {
            list.extend(self.system.iter().filter(|c| c.category == category));
            list.extend(self.custom.iter().filter(|c| c.category == category));
        }
        list
    }

    pub fn find(&self, id: &str) -> Option<&Command> {
        self.system
            .iter()
            .chain(self.custom.iter())
            .find(|c| c.id == id)
    }

    /// Validate and register a new custom command.
    ///
    /// Reloads from the store before conflict-checking so a command created
    /// in another window moments ago is seen. On success the full custom
    /// list is persisted; a persist failure keeps the command in memory and
    /// logs a warning rather than crashing the palette.
    pub fn create(&mut self, draft: &DraftCommand) -> Result<Command, CommandValidationError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(CommandValidationError::EmptyName);
        }
        if draft.shortcut.trim().is_empty() {
            return Err(CommandValidationError::EmptyShortcut);
        }
        let Some(target) = draft.target else {
            return Err(CommandValidationError::MissingTarget);
        };

        let shortcut = Shortcut::parse(&draft.shortcut)?;

        self.reload();
        self.check_conflicts(&shortcut)?;

        let command = Command {
            id: Uuid::new_v4().to_string(),
            name: name.to_owned(),
            category: draft.category.unwrap_or_else(|| target.default_category()),
            shortcut,
            icon: None,
            target,
            source: CommandSource::Custom,
        };
        self.custom.push(command.clone());
        self.persist();
        Ok(command)
    }

    /// Remove a custom command by id. Returns false when the id is unknown
    /// (system commands cannot be deleted).
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.custom.len();
        self.custom.retain(|c| c.id != id);
        if self.custom.len() == before {
            return false;
        }
        self.persist();
        true
    }

    fn check_conflicts(&self, shortcut: &Shortcut) -> Result<(), CommandValidationError> {
        let canonical = shortcut.canonical();
        if let Some((_, reason)) = RESERVED_SHORTCUTS.iter().find(|(s, _)| *s == canonical) {
            return Err(CommandValidationError::ReservedShortcut {
                shortcut: shortcut.to_string(),
                reason: (*reason).to_owned(),
            });
        }
        if let Some(owner) = self
            .system
            .iter()
            .chain(self.custom.iter())
            .find(|c| c.shortcut.canonical() == canonical)
        {
            return Err(CommandValidationError::ShortcutTaken {
                shortcut: shortcut.to_string(),
                owner: owner.name.clone(),
            });
        }
        Ok(())
    }

    fn persist(&self) {
        let persisted: Vec<CustomCommand> = self
            .custom
            .iter()
            .map(|c| CustomCommand {
                id: c.id.clone(),
                name: c.name.clone(),
                category: c.category,
                shortcut: c.shortcut.canonical(),
                target: c.target,
            })
            .collect();
        if let Err(e) = self.store.save(&persisted) {
            warn!(error = %e, "failed to persist custom commands, keeping them in memory");
        }
    }
}
