//! Search failure taxonomy.
//!
//! Strategies themselves never return errors.  An empty or partial [`Path`]
//! is the whole answer.  [`classify`] turns that answer into a
//! [`SearchError`] for logging and reporting.

use thiserror::Error;

use gn_core::Position;

use crate::Path;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("start or goal is not set")]
    MissingEndpoint,

    #[error("goal {goal} is unreachable from {start}")]
    Unreachable { start: Position, goal: Position },

    #[error("search stuck at {at}, short of goal {goal}")]
    Stuck { at: Position, goal: Position },

    #[error("unknown algorithm {0:?}: expected \"BFS\", \"Greedy\" or \"A*\"")]
    UnknownAlgorithm(String),
}

pub type SearchResult<T> = Result<T, SearchError>;

/// Classify a search result.
///
/// `Ok(())` means `path` is complete: non-empty and ending at `goal`.
pub fn classify(
    path:  &Path,
    start: Option<Position>,
    goal:  Option<Position>,
) -> SearchResult<()> {
    let (Some(start), Some(goal)) = (start, goal) else {
        return Err(SearchError::MissingEndpoint);
    };
    match path.last() {
        None => Err(SearchError::Unreachable { start, goal }),
        Some(at) if at != goal => Err(SearchError::Stuck { at, goal }),
        Some(_) => Ok(()),
    }
}
