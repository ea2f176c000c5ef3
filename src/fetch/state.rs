//! Per-call navigation state.

use std::collections::HashSet;
use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use url::Url;

use super::instruction::InstructionKind;
use crate::error_handling::ResolutionError;

/// One accepted navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    pub from: Url,
    pub to: Url,
    pub kind: InstructionKind,
}

/// Mutable state of one resolution call.
///
/// Owned by a single call and dropped when it returns. `hop_count` grows by exactly
/// one per accepted navigation and `current_url` is always absolute.
#[derive(Debug)]
pub struct NavigationState {
    current_url: Url,
    hop_count: usize,
    visited: HashSet<Url>,
    chain: Vec<Hop>,
    cookie_jar: Arc<Jar>,
}

impl NavigationState {
    pub fn new(seed: Url, cookie_jar: Arc<Jar>) -> Self {
        Self {
            current_url: seed,
            hop_count: 0,
            visited: HashSet::new(),
            chain: Vec::new(),
            cookie_jar,
        }
    }

    pub fn current_url(&self) -> &Url {
        &self.current_url
    }

    pub fn hop_count(&self) -> usize {
        self.hop_count
    }

    pub fn visited(&self) -> &HashSet<Url> {
        &self.visited
    }

    pub fn chain(&self) -> &[Hop] {
        &self.chain
    }

    /// Whether the session holds cookies that will be sent to the current URL.
    pub fn carries_cookies(&self) -> bool {
        self.cookie_jar.cookies(&self.current_url).is_some()
    }

    /// Moves to `target`, marking the current page visited.
    ///
    /// # Errors
    ///
    /// Returns `ResolutionError::CycleDetected` if `target` was already visited in
    /// this call (including the page being left).
    pub fn advance(&mut self, kind: InstructionKind, target: Url) -> Result<(), ResolutionError> {
        self.visited.insert(self.current_url.clone());
        if self.visited.contains(&target) {
            return Err(ResolutionError::CycleDetected { url: target });
        }

        let from = std::mem::replace(&mut self.current_url, target);
        self.chain.push(Hop {
            from,
            to: self.current_url.clone(),
            kind,
        });
        self.hop_count += 1;
        Ok(())
    }

    /// Consumes the state, returning the terminal URL and the accepted hops.
    pub fn finish(self) -> (Url, Vec<Hop>) {
        (self.current_url, self.chain)
    }
}
