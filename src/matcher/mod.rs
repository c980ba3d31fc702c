//! Interactive guess matching: a debounced suggestion box over the title index.

pub mod suggest;
pub mod timer;

pub use suggest::{DEFAULT_BLUR_GRACE, DEFAULT_DEBOUNCE, MatcherState, Selection, SuggestBox};
pub use timer::Debouncer;
