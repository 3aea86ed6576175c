//! Command palette interaction: the modal view stack, merged item list with
//! keyboard focus, and the global key-routing contract.

pub mod keymap;
pub mod state;

pub use keymap::{route_key, KeyAction, KeyContext, KeyDispatch, KeyInput};
pub use state::{merge_items, PaletteAction, PaletteItem, PaletteItemKind, PaletteState, PaletteView};
