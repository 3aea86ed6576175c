//! Command registry: system and user-defined commands with conflict-checked
//! keyboard shortcuts, persisted through a pluggable store.

pub mod registry;
pub mod store;
pub mod types;

pub use registry::{CommandRegistry, CommandValidationError, DraftCommand};
pub use store::{default_store_path, CommandStore, JsonCommandStore, MemoryCommandStore, StoreError};
pub use types::{
    Command, CommandCategory, CommandSource, CommandTarget, CustomCommand, Modifiers, Shortcut,
    ShortcutParseError,
};
