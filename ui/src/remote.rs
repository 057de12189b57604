//! The remote-derived view state every screen renders from.

use std::fmt;

/// What a screen knows about data it fetches: still waiting, arrived, or
/// failed with a human-readable reason.
///
/// Screens match on exactly these three cases, so a failed fetch always has
/// a rendering and can never leave a spinner up forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T: Clone> Remote<T> {
    /// Derives the state of one fetch slot, as exposed by a resource read:
    /// `None` while the fetch is in flight, `Some(Result)` once it settled.
    pub fn from_fetch<E: fmt::Display>(slot: Option<&Result<T, E>>) -> Self {
        match slot {
            None => Remote::Loading,
            Some(Ok(value)) => Remote::Ready(value.clone()),
            Some(Err(e)) => Remote::Failed(e.to_string()),
        }
    }
}

impl<T> Remote<T> {
    /// Combines two independent fetches into one view state.
    ///
    /// The pair is ready only once both sides are, whichever resolved
    /// first; either side failing fails the pair.
    pub fn zip<U>(self, other: Remote<U>) -> Remote<(T, U)> {
        match (self, other) {
            (Remote::Failed(reason), _) => Remote::Failed(reason),
            (_, Remote::Failed(reason)) => Remote::Failed(reason),
            (Remote::Ready(a), Remote::Ready(b)) => Remote::Ready((a, b)),
            _ => Remote::Loading,
        }
    }

    /// The payload, when the state is [`Remote::Ready`].
    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Remote::Failed(_))
    }
}
