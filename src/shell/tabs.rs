//! Tab panel.
//!
//! Owns the open sessions, tracks which one is active, and the
//! minimized/expanded presentation flags.

use tracing::debug;

use super::error::TabError;
use super::session::Session;
use crate::config::ShellConfig;

/// One open terminal tab.
#[derive(Debug, Clone)]
pub struct Tab {
    pub id: usize,
    pub title: String,
    pub session: Session,
}

impl Tab {
    fn new(id: usize, config: &ShellConfig) -> Self {
        Self {
            id,
            title: format!("Terminal {}", id),
            session: Session::new(config),
        }
    }
}

/// The set of open tabs. Always holds at least one tab.
#[derive(Debug, Clone)]
pub struct TabPanel {
    tabs: Vec<Tab>,
    active_id: usize,
    next_id: usize,
    minimized: bool,
    expanded: bool,
    config: ShellConfig,
}

impl Default for TabPanel {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

impl TabPanel {
    /// Create a panel with a single tab, `Terminal 1`.
    pub fn new(config: ShellConfig) -> Self {
        Self {
            tabs: vec![Tab::new(1, &config)],
            active_id: 1,
            next_id: 2,
            minimized: false,
            expanded: false,
            config,
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_id(&self) -> usize {
        self.active_id
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn active(&self) -> &Tab {
        let idx = self.active_index();
        &self.tabs[idx]
    }

    pub fn active_mut(&mut self) -> &mut Tab {
        let idx = self.active_index();
        &mut self.tabs[idx]
    }

    /// Open a new tab and make it active. Returns its id.
    pub fn add(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.tabs.push(Tab::new(id, &self.config));
        self.active_id = id;
        debug!(id, "Opened tab");
        id
    }

    /// Close a tab.
    ///
    /// If the active tab is closed, the tab that slides into its position
    /// (or the new last tab) becomes active.
    pub fn close(&mut self, id: usize) -> Result<(), TabError> {
        let idx = self.index_of(id).ok_or(TabError::NotFound(id))?;
        if self.tabs.len() == 1 {
            return Err(TabError::LastTab);
        }

        self.tabs.remove(idx);
        if id == self.active_id {
            let new_idx = idx.min(self.tabs.len() - 1);
            self.active_id = self.tabs[new_idx].id;
        }
        debug!(id, active = self.active_id, "Closed tab");
        Ok(())
    }

    /// Close the active tab.
    pub fn close_active(&mut self) -> Result<(), TabError> {
        self.close(self.active_id)
    }

    pub fn activate(&mut self, id: usize) -> Result<(), TabError> {
        self.index_of(id).ok_or(TabError::NotFound(id))?;
        self.active_id = id;
        Ok(())
    }

    /// Activate the tab to the right, wrapping around.
    pub fn activate_next(&mut self) {
        let idx = (self.active_index() + 1) % self.tabs.len();
        self.active_id = self.tabs[idx].id;
    }

    /// Activate the tab to the left, wrapping around.
    pub fn activate_previous(&mut self) {
        let len = self.tabs.len();
        let idx = (self.active_index() + len - 1) % len;
        self.active_id = self.tabs[idx].id;
    }

    /// Minimizing cancels expansion.
    pub fn toggle_minimize(&mut self) {
        self.minimized = !self.minimized;
        if self.minimized {
            self.expanded = false;
        }
    }

    /// Expanding cancels minimization.
    pub fn toggle_expand(&mut self) {
        self.expanded = !self.expanded;
        if self.expanded {
            self.minimized = false;
        }
    }

    fn index_of(&self, id: usize) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    fn active_index(&self) -> usize {
        // active_id always names an open tab
        self.index_of(self.active_id).unwrap_or(0)
    }
}
