//! Palette interaction state machine.
//!
//! One explicit struct owns what the original UI scattered across local
//! variables: the view stack (main/manage/edit), the merged navigable list,
//! the active index, and the new-command draft. Illegal states are
//! unrepresentable: the active index is `None` exactly when the list is
//! empty, and it can never point past the end.

use tracing::debug;

use crate::commands::registry::{CommandRegistry, DraftCommand};
use crate::commands::types::{Command, CommandTarget};
use crate::nav::{request_for_hit, NavigationRequest};
use crate::search::types::ScoredCandidate;

/// Which sub-view an open palette shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaletteView {
    #[default]
    Main,
    Manage,
    Edit,
}

/// What a palette row wraps: a command or a search hit.
#[derive(Clone, Debug, PartialEq)]
pub enum PaletteItemKind {
    Command(Command),
    Hit(ScoredCandidate),
}

/// One navigable row of the merged palette list. Keys are unique across the
/// whole list for the current render.
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteItem {
    pub key: String,
    pub kind: PaletteItemKind,
}

/// What activating a row asks the host to do.
#[derive(Clone, Debug, PartialEq)]
pub enum PaletteAction {
    /// Execute a command target (the host maps it to a route or form).
    Run(CommandTarget),
    /// Route to a selected search hit.
    Navigate(NavigationRequest),
}

/// Build the merged, ordered palette list: commands (already ordered by the
/// registry: actions then navigation) followed by the top search hits.
pub fn merge_items(commands: &[&Command], hits: &[ScoredCandidate]) -> Vec<PaletteItem> {
    let mut items = Vec::with_capacity(commands.len() + hits.len());
    for command in commands {
        items.push(PaletteItem {
            key: format!("cmd:{}", command.id),
            kind: PaletteItemKind::Command((*command).clone()),
        });
    }
    for hit in hits {
        items.push(PaletteItem {
            key: format!("hit:{:?}:{}", hit.candidate.category, hit.candidate.id),
            kind: PaletteItemKind::Hit(hit.clone()),
        });
    }
    items
}

#[derive(Debug, Default)]
pub struct PaletteState {
    open: bool,
    view: PaletteView,
    query: String,
    items: Vec<PaletteItem>,
    active: Option<usize>,
    scroll_epoch: u64,
    draft: DraftCommand,
    draft_error: Option<String>,
}

impl PaletteState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn view(&self) -> PaletteView {
        self.view
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn items(&self) -> &[PaletteItem] {
        &self.items
    }

    /// Index of the keyboard-focused row; `None` iff the list is empty.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_item(&self) -> Option<&PaletteItem> {
        self.active.and_then(|i| self.items.get(i))
    }

    /// Bumps whenever the active row changes while open; the view scrolls
    /// the row into sight when it observes a new epoch.
    pub fn scroll_epoch(&self) -> u64 {
        self.scroll_epoch
    }

    pub fn draft(&self) -> &DraftCommand {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftCommand {
        &mut self.draft
    }

    /// Inline validation message for the edit form, if the last submit failed.
    pub fn draft_error(&self) -> Option<&str> {
        self.draft_error.as_deref()
    }

    // ----- open/close and view stack -----

    pub fn open(&mut self) {
        if !self.open {
            self.open = true;
            self.view = PaletteView::Main;
            debug!("palette opened");
        }
    }

    /// Close and drop all ephemeral state (query, focus, draft).
    pub fn close(&mut self) {
        if self.open {
            debug!("palette closed");
        }
        *self = Self {
            scroll_epoch: self.scroll_epoch,
            ..Self::default()
        };
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Outside-click closes from any sub-view.
    pub fn outside_click(&mut self) {
        self.close();
    }

    /// One level of back-navigation per press: edit -> manage -> main ->
    /// closed. Returns true when the press was consumed.
    pub fn escape(&mut self) -> bool {
        if !self.open {
            return false;
        }
        match self.view {
            PaletteView::Edit => self.view = PaletteView::Manage,
            PaletteView::Manage => self.view = PaletteView::Main,
            PaletteView::Main => self.close(),
        }
        true
    }

    /// "Manage commands" action from the main view. Clears the query.
    pub fn enter_manage(&mut self) {
        if self.open && self.view == PaletteView::Main {
            self.view = PaletteView::Manage;
            self.set_query("");
        }
    }

    pub fn back_to_main(&mut self) {
        if self.open && self.view == PaletteView::Manage {
            self.view = PaletteView::Main;
        }
    }

    /// "New command" action from the manage view. Resets the draft form.
    pub fn enter_edit(&mut self) {
        if self.open && self.view == PaletteView::Manage {
            self.view = PaletteView::Edit;
            self.draft = DraftCommand::default();
            self.draft_error = None;
        }
    }

    pub fn cancel_edit(&mut self) {
        if self.open && self.view == PaletteView::Edit {
            self.view = PaletteView::Manage;
            self.draft = DraftCommand::default();
            self.draft_error = None;
        }
    }

    /// Submit the draft through the registry. On success returns to manage
    /// with a fresh draft; on rejection the human-readable message lands in
    /// [`Self::draft_error`] and the view stays put.
    pub fn submit_draft(&mut self, registry: &mut CommandRegistry) -> bool {
        match registry.create(&self.draft) {
            Ok(command) => {
                debug!(id = %command.id, "custom command created");
                self.view = PaletteView::Manage;
                self.draft = DraftCommand::default();
                self.draft_error = None;
                true
            }
            Err(e) => {
                self.draft_error = Some(e.to_string());
                false
            }
        }
    }

    // ----- query and merged list -----

    /// Update the query text. Any change resets keyboard focus to the top so
    /// a stale index can never point at a different item after filtering.
    pub fn set_query(&mut self, query: &str) {
        if self.query != query {
            self.query = query.to_owned();
            self.reset_active();
        }
    }

    /// Replace the merged list. Focus resets only when the identity of the
    /// list (its key sequence) actually changed.
    pub fn sync_items(&mut self, items: Vec<PaletteItem>) {
        let same_keys = self.items.len() == items.len()
            && self
                .items
                .iter()
                .zip(items.iter())
                .all(|(a, b)| a.key == b.key);
        self.items = items;
        if !same_keys {
            self.reset_active();
        }
    }

    fn reset_active(&mut self) {
        let next = if self.items.is_empty() { None } else { Some(0) };
        if next != self.active {
            self.active = next;
            self.bump_scroll();
        }
    }

    fn bump_scroll(&mut self) {
        if self.open {
            self.scroll_epoch += 1;
        }
    }

    // ----- keyboard focus -----

    /// Arrow-down with wraparound; no-op on an empty list.
    pub fn move_down(&mut self) {
        if let Some(current) = self.active {
            self.active = Some((current + 1) % self.items.len());
            self.bump_scroll();
        }
    }

    /// Arrow-up with wraparound; no-op on an empty list.
    pub fn move_up(&mut self) {
        if let Some(current) = self.active {
            let len = self.items.len();
            self.active = Some((current + len - 1) % len);
            self.bump_scroll();
        }
    }

    /// Enter: execute the active row, if any, then close. Selecting a search
    /// hit also clears the query (close drops all ephemeral state anyway).
    pub fn activate(&mut self) -> Option<PaletteAction> {
        let action = match &self.active_item()?.kind {
            PaletteItemKind::Command(command) => PaletteAction::Run(command.target),
            PaletteItemKind::Hit(hit) => {
                PaletteAction::Navigate(request_for_hit(&hit.candidate, &self.query))
            }
        };
        self.close();
        Some(action)
    }
}
