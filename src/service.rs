//! Vote processing service
//!
//! This module provides the decision function for incoming shareholder
//! votes: proposal validity first, then the first-vote/changed-vote
//! distinction, then the record-date cutoff for changes.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::proposals::ProposalStore;
use crate::{Vote, VotingError, VotingResult};

/// Validates shareholder votes and decides whether they are accepted.
///
/// The service enforces the following business rules:
/// - A vote is rejected with [`VotingError::InvalidProposal`] if the
///   referenced proposal is not valid for the given meeting, according
///   to the configured [`ProposalStore`].
/// - A new vote (the shareholder has not voted before) is always
///   accepted.
/// - An existing vote can be changed only while the current date is
///   strictly before the meeting's record date.
///
/// The service holds no mutable state and may be shared freely across
/// tasks as long as the supplied [`ProposalStore`] supports concurrent
/// reads.
pub struct VotingService {
    proposals: Arc<dyn ProposalStore>,
    clock: Arc<dyn Clock>,
}

impl VotingService {
    /// Create a service that reads the current date from the system clock
    pub fn new(proposals: Arc<dyn ProposalStore>) -> Self {
        Self::with_clock(proposals, Arc::new(SystemClock))
    }

    /// Create a service with an explicit date source
    pub fn with_clock(proposals: Arc<dyn ProposalStore>, clock: Arc<dyn Clock>) -> Self {
        Self { proposals, clock }
    }

    /// Process an incoming vote and decide whether it is accepted.
    ///
    /// `existing_voters` is the set of shareholders who have already
    /// voted in this meeting and `record_date` is the meeting's change
    /// cutoff; both are resolved by the caller from its own storage.
    ///
    /// Returns `Ok(true)` if the vote is accepted, either as a first
    /// vote or as a change made strictly before the record date, and
    /// `Ok(false)` if it is rejected as a change attempted on or after
    /// the record date. A rejected change is an expected business
    /// outcome, not an error.
    ///
    /// # Errors
    ///
    /// [`VotingError::InvalidProposal`] if the referenced proposal is
    /// not valid for the given meeting. This check runs before any
    /// voter-state logic, so an invalid proposal fails even for a
    /// first-time voter.
    pub async fn process_vote(
        &self,
        vote: &Vote,
        existing_voters: &HashSet<String>,
        record_date: NaiveDate,
    ) -> VotingResult<bool> {
        let proposal_is_valid = self
            .proposals
            .proposals_for_meeting(&vote.meeting_id)
            .await
            .map(|proposals| proposals.contains(&vote.proposal_id))
            .unwrap_or(false);

        if !proposal_is_valid {
            debug!(
                "Rejected vote from {}: proposal {} is not valid for meeting {}",
                vote.shareholder_id, vote.proposal_id, vote.meeting_id
            );
            return Err(VotingError::InvalidProposal {
                proposal_id: vote.proposal_id.clone(),
                meeting_id: vote.meeting_id.clone(),
            });
        }

        if !existing_voters.contains(&vote.shareholder_id) {
            debug!(
                "Accepted first vote from {} in meeting {}",
                vote.shareholder_id, vote.meeting_id
            );
            return Ok(true);
        }

        // Changes are frozen from the record date on.
        let accepted = self.clock.today() < record_date;
        debug!(
            "Vote change from {} in meeting {} {}",
            vote.shareholder_id,
            vote.meeting_id,
            if accepted { "accepted" } else { "rejected: record date reached" }
        );
        Ok(accepted)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::clock::FixedClock;
    use crate::proposals::MemoryProposalStore;

    fn service_for(meeting_id: &str, proposal_ids: &[&str], today: NaiveDate) -> VotingService {
        let mut mapping = HashMap::new();
        mapping.insert(
            meeting_id.to_string(),
            proposal_ids.iter().map(|id| id.to_string()).collect(),
        );
        VotingService::with_clock(
            Arc::new(MemoryProposalStore::new(mapping)),
            Arc::new(FixedClock(today)),
        )
    }

    #[tokio::test]
    async fn test_invalid_proposal_is_rejected_before_voter_state_is_considered() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
        let service = service_for("M1", &["P1", "P2"], today);

        // The shareholder has already voted, but the proposal check
        // must fail first.
        let vote = Vote::new("S1", "M1", "BAD");
        let existing_voters = HashSet::from(["S1".to_string()]);

        let err = service
            .process_vote(&vote, &existing_voters, today)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            VotingError::InvalidProposal {
                proposal_id: "BAD".to_string(),
                meeting_id: "M1".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_unknown_meeting_is_an_invalid_proposal() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
        let service = service_for("M1", &["P1"], today);

        let vote = Vote::new("S1", "OTHER", "P1");
        let result = service.process_vote(&vote, &HashSet::new(), today).await;

        assert_eq!(
            result,
            Err(VotingError::InvalidProposal {
                proposal_id: "P1".to_string(),
                meeting_id: "OTHER".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_known_meeting_with_empty_proposal_set_rejects_every_proposal() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
        let service = service_for("M1", &[], today);

        let vote = Vote::new("S1", "M1", "P1");
        let result = service.process_vote(&vote, &HashSet::new(), today).await;

        assert!(matches!(result, Err(VotingError::InvalidProposal { .. })));
    }
}
