//! Vote validation for shareholder meetings
//!
//! This crate decides the fate of a single vote cast by a shareholder
//! against a proposal in a corporate meeting. The rules are:
//! - A vote referencing a proposal that is not valid for its meeting is
//!   rejected with [`VotingError::InvalidProposal`].
//! - A first-time vote is always accepted.
//! - A change to an earlier vote is accepted only strictly before the
//!   meeting's record date; from the record date on, changes are frozen.
//!
//! The decision itself is side-effect free. Persisting votes, updating
//! the voter set and managing the meeting lifecycle stay with the caller;
//! the caller supplies the already-resolved voter set and record date and
//! a [`ProposalStore`] that answers which proposals a meeting recognizes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for vote processing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VotingError {
    /// The vote references a proposal that is not valid for the meeting,
    /// either because the meeting is unknown or because the proposal is
    /// not in its valid set
    #[error("proposal {proposal_id} is not valid for meeting {meeting_id}")]
    InvalidProposal {
        /// Identifier of the offending proposal
        proposal_id: String,
        /// Identifier of the meeting the proposal was checked against
        meeting_id: String,
    },
}

/// Result type for vote processing
pub type VotingResult<T> = Result<T, VotingError>;

/// A single vote cast by a shareholder for a proposal in a meeting.
///
/// A vote is immutable and uniquely identified by the combination of its
/// three identifiers. It carries no lifecycle of its own; callers build
/// one per vote-casting attempt and discard it after the decision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vote {
    /// The shareholder casting the vote
    pub shareholder_id: String,
    /// The meeting the vote is cast in
    pub meeting_id: String,
    /// The proposal being voted on
    pub proposal_id: String,
}

impl Vote {
    /// Create a new vote
    pub fn new(shareholder_id: &str, meeting_id: &str, proposal_id: &str) -> Self {
        Self {
            shareholder_id: shareholder_id.to_string(),
            meeting_id: meeting_id.to_string(),
            proposal_id: proposal_id.to_string(),
        }
    }
}

pub mod clock;
pub mod proposals;
pub mod service;

// Re-exports
pub use clock::{Clock, FixedClock, SystemClock};
pub use proposals::{MemoryProposalStore, ProposalStore};
pub use service::VotingService;
