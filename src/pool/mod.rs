//! Answer-pool construction and selection
//!
//! # Error Handling Strategy
//!
//! Unlike catalog loading, this path never degrades gracefully. A wrong or
//! partial pool would change which titles can be the answer, so:
//!
//! - **Configuration**: settings are validated before any fetch is issued.
//! - **Remote failures**: the first failing user aborts the whole build; there
//!   is no partial-success mode and no automatic retry.
//! - **Empty pool**: reported as [`crate::Error::EmptyPool`] with the mode and
//!   statuses in effect, never replaced by a default pool.

pub mod builder;
pub mod select;
pub mod set_ops;
pub mod source;

pub use builder::{build_candidate_pool, fetch_user_ids, select_answer_id};
pub use select::{CandidatePool, pick_random};
pub use set_ops::{intersect_sets, union_sets};
pub use source::ListSource;
