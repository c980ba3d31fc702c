use std::collections::HashSet;

use log::debug;
use rayon::prelude::*;

use super::select::CandidatePool;
use super::set_ops::{intersect_sets, union_sets};
use super::source::ListSource;
use crate::error::{Error, Result};
use crate::filters::{EntryFilter, apply_filters, normalize_statuses};
use crate::models::{CombineMode, Settings, TitleId};

/// Fetch one user's list and keep the ids that pass the filter.
pub fn fetch_user_ids<S: ListSource + ?Sized>(
    source: &S,
    user: &str,
    filter: &EntryFilter,
) -> Result<HashSet<TitleId>> {
    let entries = source
        .fetch_entries(user)
        .map_err(|e| Error::RemoteFetch { user: user.to_string(), message: e.to_string() })?;
    let ids = apply_filters(&entries, filter);
    debug!("{}: {} of {} entries accepted", user, ids.len(), entries.len());
    Ok(ids)
}

/// Build the candidate pool from a settings snapshot.
///
/// Validates the settings first, then fetches every user concurrently. The
/// first failed fetch aborts the whole build; results of fetches still in
/// flight are discarded.
///
/// # Errors
///
/// - [`Error::Configuration`] when the settings are invalid (no fetch is made)
/// - [`Error::RemoteFetch`] naming the first user whose fetch failed
///
/// An empty pool is returned as-is; [`CandidatePool::pick`] reports it.
pub fn build_candidate_pool<S: ListSource + ?Sized>(
    source: &S,
    settings: &Settings,
) -> Result<CandidatePool> {
    settings.validate()?;

    let users = settings.normalized_usernames();
    let statuses = normalize_statuses(&settings.statuses);
    let filter = EntryFilter::from_settings(settings);

    let sets = users
        .par_iter()
        .map(|user| fetch_user_ids(source, user, &filter))
        .collect::<Result<Vec<_>>>()?;

    let ids = match settings.combine {
        CombineMode::Union => union_sets(&sets),
        CombineMode::Intersect => intersect_sets(&sets),
    };
    debug!("Candidate pool: {} ids ({} users, mode={})", ids.len(), users.len(), settings.combine);

    Ok(CandidatePool { ids, mode: settings.combine, statuses })
}

/// Build the pool and draw the day's answer id.
pub fn select_answer_id<S: ListSource + ?Sized>(source: &S, settings: &Settings) -> Result<TitleId> {
    build_candidate_pool(source, settings)?.pick()
}
