//! Terminal guess prompt built on the debounced suggestion box.

mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use std::sync::Arc;

use anyhow::Result;
pub use app::GuessApp;
pub use terminal::TerminalManager;

use crate::matcher::Selection;
use crate::search::CatalogIndex;

/// Run the interactive guess prompt. Returns `None` when the player quits.
pub fn run_guess(index: Arc<CatalogIndex>) -> Result<Option<Selection>> {
    let mut manager = TerminalManager::new()?;
    let res = GuessApp::new(index).run(manager.terminal_mut());
    manager.restore()?;
    res
}
