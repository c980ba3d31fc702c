//! Guess prompt state and event loop.
//!
//! [`GuessApp`] feeds terminal events into a [`SuggestBox`] and redraws
//! when the box reports a change. The poll timeout follows the box's
//! nearest timer deadline so debounced ranking fires on time without
//! busy-waiting.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::debug;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::render_ui;
use crate::matcher::{Selection, SuggestBox};
use crate::search::CatalogIndex;

/// Poll interval when no timer is pending
const IDLE_POLL: Duration = Duration::from_millis(100);

pub struct GuessApp {
    suggest: SuggestBox,
    catalog_size: usize,
    selection: Option<Selection>,
    should_quit: bool,
    needs_redraw: bool,
}

impl GuessApp {
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        let catalog_size = index.len();
        Self {
            suggest: SuggestBox::new(index),
            catalog_size,
            selection: None,
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub fn suggest(&self) -> &SuggestBox {
        &self.suggest
    }

    /// Run until the player confirms a title or quits.
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<Option<Selection>> {
        while !self.should_quit {
            let now = Instant::now();
            if self.suggest.tick(now) {
                self.needs_redraw = true;
            }

            if self.needs_redraw {
                terminal.draw(|f| render_ui(f, &self.suggest, self.catalog_size))?;
                self.needs_redraw = false;
            }

            let timeout = self.suggest.next_deadline(Instant::now()).unwrap_or(IDLE_POLL);
            let action = poll_event(timeout)?;
            self.handle_action(action, Instant::now());
        }

        Ok(self.selection)
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::None => return,
            Action::Quit => self.should_quit = true,
            Action::Dismiss => self.suggest.dismiss(),
            Action::MoveUp => self.suggest.move_up(),
            Action::MoveDown => self.suggest.move_down(),
            Action::Confirm => {
                if let Some(selection) = self.suggest.confirm() {
                    debug!("confirmed guess {} ({})", selection.text, selection.id);
                    self.selection = Some(selection);
                    self.should_quit = true;
                }
            }
            Action::UpdateSearch(c) => self.suggest.push_char(c, now),
            Action::DeleteChar => self.suggest.pop_char(now),
            Action::FocusLost => self.suggest.blur(now),
            Action::FocusGained => self.suggest.focus(),
        }
        self.needs_redraw = true;
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
