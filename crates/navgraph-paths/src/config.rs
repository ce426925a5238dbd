/// Configuration shared by every search type.
///
/// The default is unbounded: a search runs until it reaches the target or
/// exhausts its frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Upper bound on the number of nodes whose outgoing edges are examined.
    /// Reaching it stops the search with `found() == false` and
    /// `budget_exhausted() == true`. Useful for per-frame time slicing.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// A config that stops after `n` expansions.
    pub const fn bounded(n: usize) -> Self {
        Self {
            max_expansions: Some(n),
        }
    }

    /// Whether `expansions` already used up the budget.
    #[inline]
    pub(crate) fn exhausted_by(&self, expansions: usize) -> bool {
        self.max_expansions.is_some_and(|max| expansions >= max)
    }
}
