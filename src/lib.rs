//! Omnibar - omnisearch and command palette core for the business manager
//!
//! This library provides the search, ranking, and palette interaction logic
//! shared by the invoicing, point-of-sale, inventory, and collections views:
//! multi-entity scoring and ranking, match highlighting, a conflict-checked
//! command registry with durable custom commands, and a keyboard-driven
//! palette state machine. Rendering and data ownership stay with the host.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod nav;
pub mod palette;
pub mod search;

pub use commands::registry::{CommandRegistry, CommandValidationError, DraftCommand};
pub use config::Config;
pub use error::{OmnibarError, ResultExt};
pub use commands::store::{CommandStore, JsonCommandStore, MemoryCommandStore, StoreError};
pub use commands::types::{Command, CommandCategory, CommandTarget, Shortcut};
pub use nav::{NavigationRequest, Route};
pub use palette::keymap::{route_key, KeyContext, KeyDispatch, KeyInput};
pub use palette::state::{PaletteItem, PaletteState, PaletteView};
pub use search::engine::{SearchResults, Snapshot, PALETTE_RESULT_LIMIT};
pub use search::query::Query;
pub use search::types::{Candidate, Category, SectionResult, SECTION_LIMIT};
