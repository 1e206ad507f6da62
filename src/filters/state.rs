// src/filters/state.rs

use crate::filters::config::FilterConfig;

/// Holds the filter configuration of one list view: a pending copy being
/// edited in the filter form and the applied copy the list is actually
/// showing. Edits take effect only on `apply`; `clear` takes effect
/// immediately, without a separate confirmation step. Owned by a single
/// view, never persisted.
#[derive(Debug, Default)]
pub struct FilterState {
    pending: FilterConfig,
    applied: FilterConfig,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The copy the form edits. Mutating it has no effect on the list until
    /// `apply` is called.
    pub fn pending_mut(&mut self) -> &mut FilterConfig {
        &mut self.pending
    }

    /// The configuration the list is currently showing.
    pub fn applied(&self) -> &FilterConfig {
        &self.applied
    }

    /// Commits the pending edits and hands the caller the configuration to
    /// re-run the pipeline with.
    pub fn apply(&mut self) -> &FilterConfig {
        self.applied = self.pending.clone();
        &self.applied
    }

    /// Back to the neutral configuration, effective immediately.
    pub fn clear(&mut self) -> &FilterConfig {
        self.pending = FilterConfig::default();
        self.applied = FilterConfig::default();
        &self.applied
    }

    /// Whether the *applied* configuration deviates from neutral.
    pub fn is_active(&self) -> bool {
        self.applied.is_active()
    }
}
