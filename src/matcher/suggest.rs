//! Debounced suggestion box for typing a guess.
//!
//! `SuggestBox` owns the state machine only. Rendering and input devices live
//! elsewhere (see `crate::tui`) and feed it events together with the current
//! time, which keeps every transition deterministic under test.
//!
//! ```text
//!  Idle --keystroke--> Debouncing --timer, results--> Open --confirm/dismiss--> Closed
//!                          |                            |
//!                          +--timer, no results--> Closed <--blur grace--+
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::timer::Debouncer;
use crate::models::{RankedMatch, TitleId};
use crate::search::{CatalogIndex, DEFAULT_LIMIT, rank_titles};

/// Quiet period after the last keystroke before ranking runs.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(60);
/// Grace period between losing focus and closing, so a pointer press on a
/// suggestion still lands.
pub const DEFAULT_BLUR_GRACE: Duration = Duration::from_millis(120);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherState {
    /// Nothing typed yet
    Idle,
    /// A keystroke is waiting for the debounce timer
    Debouncing,
    /// Suggestions shown with an active cursor
    Open,
    /// No results, or dismissed
    Closed,
}

/// The guess the player picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub id: TitleId,
    pub text: String,
}

pub struct SuggestBox {
    index: Arc<CatalogIndex>,
    limit: usize,
    input: String,
    state: MatcherState,
    ranked: Vec<RankedMatch>,
    cursor: usize,
    debounce: Debouncer,
    blur_grace: Debouncer,
}

impl SuggestBox {
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        Self::with_options(index, DEFAULT_LIMIT, DEFAULT_DEBOUNCE, DEFAULT_BLUR_GRACE)
    }

    pub fn with_options(
        index: Arc<CatalogIndex>,
        limit: usize,
        debounce: Duration,
        blur_grace: Duration,
    ) -> Self {
        Self {
            index,
            limit,
            input: String::new(),
            state: MatcherState::Idle,
            ranked: Vec::new(),
            cursor: 0,
            debounce: Debouncer::new(debounce),
            blur_grace: Debouncer::new(blur_grace),
        }
    }

    pub fn state(&self) -> MatcherState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MatcherState::Open
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Last rendered suggestions (kept while debouncing or hidden by blur).
    pub fn results(&self) -> &[RankedMatch] {
        &self.ranked
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn active_item(&self) -> Option<&RankedMatch> {
        if self.is_open() { self.ranked.get(self.cursor) } else { None }
    }

    /// Earliest pending deadline, for the caller's poll timeout.
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        match (self.debounce.remaining(now), self.blur_grace.remaining(now)) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Replace the input text and restart the debounce timer.
    pub fn set_input(&mut self, text: impl Into<String>, now: Instant) {
        self.input = text.into();
        self.blur_grace.cancel();
        self.debounce.start(now);
        self.state = MatcherState::Debouncing;
    }

    pub fn push_char(&mut self, c: char, now: Instant) {
        let mut text = std::mem::take(&mut self.input);
        text.push(c);
        self.set_input(text, now);
    }

    pub fn pop_char(&mut self, now: Instant) {
        let mut text = std::mem::take(&mut self.input);
        text.pop();
        self.set_input(text, now);
    }

    /// Advance timers. Returns `true` when the visible state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if self.debounce.fire_if_due(now) {
            self.ranked = rank_titles(self.input.trim(), &self.index, self.limit);
            self.cursor = 0;
            self.state =
                if self.ranked.is_empty() { MatcherState::Closed } else { MatcherState::Open };
            changed = true;
        }

        if self.blur_grace.fire_if_due(now) {
            self.state = MatcherState::Closed;
            changed = true;
        }

        changed
    }

    /// Move the cursor down one item, stopping at the last.
    pub fn move_down(&mut self) {
        if self.is_open() {
            self.move_cursor(self.cursor.saturating_add(1));
        }
    }

    /// Move the cursor up one item, stopping at the first.
    pub fn move_up(&mut self) {
        if self.is_open() {
            self.move_cursor(self.cursor.saturating_sub(1));
        }
    }

    /// Pointer moved over an item.
    pub fn hover(&mut self, index: usize) {
        if self.is_open() {
            self.move_cursor(index);
        }
    }

    fn move_cursor(&mut self, index: usize) {
        if !self.ranked.is_empty() {
            self.cursor = index.min(self.ranked.len() - 1);
        }
    }

    /// Pick the item under the cursor.
    pub fn confirm(&mut self) -> Option<Selection> {
        if !self.is_open() {
            return None;
        }
        self.choose(self.cursor)
    }

    /// Pointer press on an item. Still valid during the blur grace period.
    pub fn select_at(&mut self, index: usize) -> Option<Selection> {
        if !self.is_open() {
            return None;
        }
        self.choose(index)
    }

    fn choose(&mut self, index: usize) -> Option<Selection> {
        let item = self.ranked.get(index)?;
        let selection = Selection { id: item.id, text: item.text.clone() };
        self.input = selection.text.clone();
        self.close_and_clear();
        Some(selection)
    }

    /// Explicit cancel. Drops pending and rendered results.
    pub fn dismiss(&mut self) {
        self.close_and_clear();
    }

    /// Focus left the input. An open list closes after the grace period but
    /// stays rendered for [`Self::focus`]. From Idle or Debouncing the box
    /// closes at once, dropping the pending ranking and any hidden results.
    pub fn blur(&mut self, now: Instant) {
        match self.state {
            MatcherState::Open => {
                self.debounce.cancel();
                self.blur_grace.start(now);
            }
            MatcherState::Idle | MatcherState::Debouncing => self.close_and_clear(),
            MatcherState::Closed => self.debounce.cancel(),
        }
    }

    /// Focus returned. Re-opens only if results are still rendered; never re-ranks.
    pub fn focus(&mut self) {
        self.blur_grace.cancel();
        if self.state == MatcherState::Closed && !self.ranked.is_empty() {
            self.state = MatcherState::Open;
        }
    }

    fn close_and_clear(&mut self) {
        self.debounce.cancel();
        self.blur_grace.cancel();
        self.ranked.clear();
        self.cursor = 0;
        self.state = MatcherState::Closed;
    }
}
