//! Proposal validity lookup
//!
//! Answers "is proposal P valid for meeting M?". The [`ProposalStore`]
//! trait is the capability the voting service consults; the in-memory
//! adapter below is the reference implementation, and any external store
//! (a database, a remote service) can stand in for it behind the same
//! trait.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

/// Lookup capability for the proposals that are valid in a meeting
#[async_trait]
pub trait ProposalStore: Send + Sync {
    /// Returns the set of valid proposal identifiers for the given
    /// meeting, or `None` if the meeting is unknown.
    ///
    /// A known meeting with no valid proposals yields `Some` of an empty
    /// set; the two cases are distinct. The lookup is a pure read and
    /// must be safe to call concurrently.
    async fn proposals_for_meeting(&self, meeting_id: &str) -> Option<HashSet<String>>;
}

/// In-memory proposal store backed by a fixed mapping
pub struct MemoryProposalStore {
    proposals: HashMap<String, HashSet<String>>,
}

impl MemoryProposalStore {
    /// Create a store from a mapping of meeting identifiers to their
    /// valid proposal identifiers.
    ///
    /// The store takes ownership of the mapping, so later changes to the
    /// caller's source data cannot affect lookups.
    pub fn new(proposals: HashMap<String, HashSet<String>>) -> Self {
        Self { proposals }
    }
}

#[async_trait]
impl ProposalStore for MemoryProposalStore {
    async fn proposals_for_meeting(&self, meeting_id: &str) -> Option<HashSet<String>> {
        self.proposals.get(meeting_id).cloned()
    }
}
