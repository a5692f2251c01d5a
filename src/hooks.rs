//! Extension points applied at fixed positions in the handler algorithm.
//!
//! Each hook defaults to pass-through and is invoked synchronously exactly
//! once at its documented point: the label override before the option entry
//! is built, the term override after numeric parsing, and the predicate
//! override after the predicate is built.

use std::fmt;
use std::sync::Arc;

use crate::predicate::Predicate;

pub type LabelOverride = Arc<dyn Fn(String) -> String + Send + Sync>;
pub type TermOverride = Arc<dyn Fn(f64) -> f64 + Send + Sync>;
pub type PredicateOverride = Arc<dyn Fn(Predicate, f64) -> Predicate + Send + Sync>;

/// Injectable callbacks customizing the order-total search.
#[derive(Clone, Default)]
pub struct TotalSearchHooks {
    label: Option<LabelOverride>,
    term: Option<TermOverride>,
    predicate: Option<PredicateOverride>,
}

impl TotalSearchHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default option label before it is contributed to the
    /// dropdown.
    pub fn with_label_override(
        mut self,
        hook: impl Fn(String) -> String + Send + Sync + 'static,
    ) -> Self {
        self.label = Some(Arc::new(hook));
        self
    }

    /// Replace the parsed numeric term before the predicate is built. The
    /// returned value fully replaces the parsed one, and the positivity
    /// guard is re-checked against it, so an override may force pass-through
    /// by returning a value ≤ 0.
    pub fn with_term_override(mut self, hook: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.term = Some(Arc::new(hook));
        self
    }

    /// Replace the built predicate. Receives the predicate and the numeric
    /// term it was built from.
    pub fn with_predicate_override(
        mut self,
        hook: impl Fn(Predicate, f64) -> Predicate + Send + Sync + 'static,
    ) -> Self {
        self.predicate = Some(Arc::new(hook));
        self
    }

    pub(crate) fn apply_label(&self, label: String) -> String {
        match &self.label {
            Some(hook) => hook(label),
            None => label,
        }
    }

    pub(crate) fn apply_term(&self, term: f64) -> f64 {
        match &self.term {
            Some(hook) => hook(term),
            None => term,
        }
    }

    pub(crate) fn apply_predicate(&self, predicate: Predicate, term: f64) -> Predicate {
        match &self.predicate {
            Some(hook) => hook(predicate, term),
            None => predicate,
        }
    }
}

impl fmt::Debug for TotalSearchHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TotalSearchHooks")
            .field("label", &self.label.is_some())
            .field("term", &self.term.is_some())
            .field("predicate", &self.predicate.is_some())
            .finish()
    }
}
