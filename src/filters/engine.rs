// src/filters/engine.rs

use crate::dates::parse_date;
use crate::filters::config::FilterConfig;
use crate::filters::Record;
use chrono::NaiveDate;

/// Runs the filter stages over a collection, in order: id search, entry-date
/// range, exit-date range. Each stage narrows the previous one; a stage at
/// its default is a no-op, not an exclusion. Pure — the input is untouched
/// and a new Vec comes back.
///
/// A record whose date field cannot be parsed passes date-range stages
/// untouched. Hiding rows because the backend stored a malformed date would
/// silently lose data, so the unreadable row stays visible. Keep this rule;
/// excluding instead would change what users see.
///
/// `from > to` is allowed and simply matches nothing for that stage.
pub fn apply_filters<R: Record + Clone>(records: &[R], config: &FilterConfig) -> Vec<R> {
    let mut out: Vec<R> = records.to_vec();

    if !config.id_search.is_empty() {
        let needle = config.id_search.to_lowercase();
        out.retain(|r| r.id().to_lowercase().contains(&needle));
    }

    out.retain(|r| date_in_range(r.entry_date(), config.entry_from, config.entry_to));
    out.retain(|r| date_in_range(r.exit_date(), config.exit_from, config.exit_to));

    out
}

fn date_in_range(raw: Option<&str>, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    if from.is_none() && to.is_none() {
        return true;
    }
    // Missing or unparsable date: pass through.
    let date = match raw.and_then(parse_date) {
        Some(date) => date,
        None => return true,
    };
    from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t)
}
