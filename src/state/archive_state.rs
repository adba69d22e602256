//! ArchiveState - In-Flight Submission and History

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::constants::SUBMISSION_HISTORY_CAPACITY;
use crate::domain::archive::{ArchiveCreated, ArchivePayload, SubmitError};

/// Outcome of a finished submission
pub type SubmitOutcome = Result<ArchiveCreated, SubmitError>;

/// One submission, pending or settled
#[derive(Debug, Clone)]
pub struct SubmissionRecord {
    pub request_id: String,
    pub payload: ArchivePayload,
    pub submitted_at: DateTime<Local>,
    /// `None` while the request is in flight
    pub outcome: Option<SubmitOutcome>,
}

/// State for archive submissions
#[derive(Debug)]
pub struct ArchiveState {
    /// Newest last
    history: VecDeque<SubmissionRecord>,
    capacity: usize,
    pending: Option<String>,
}

impl Default for ArchiveState {
    fn default() -> Self {
        Self::new(SUBMISSION_HISTORY_CAPACITY)
    }
}

impl ArchiveState {
    pub fn new(capacity: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            pending: None,
        }
    }

    /// Whether a submission is in flight
    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a new submission. Returns false, leaving state untouched,
    /// while another submission is still in flight.
    pub fn begin(&mut self, request_id: impl Into<String>, payload: ArchivePayload) -> bool {
        if self.pending.is_some() {
            return false;
        }
        let request_id = request_id.into();
        self.pending = Some(request_id.clone());

        if self.history.len() >= self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(SubmissionRecord {
            request_id,
            payload,
            submitted_at: Local::now(),
            outcome: None,
        });
        true
    }

    /// Settle the submission with `request_id`. Unknown ids are ignored.
    pub fn finish(&mut self, request_id: &str, outcome: SubmitOutcome) -> bool {
        if self.pending.as_deref() == Some(request_id) {
            self.pending = None;
        }
        match self
            .history
            .iter_mut()
            .find(|record| record.request_id == request_id)
        {
            Some(record) => {
                record.outcome = Some(outcome);
                true
            }
            None => false,
        }
    }

    /// Settled outcome of `request_id`, `None` while pending or unknown
    pub fn outcome(&self, request_id: &str) -> Option<&SubmitOutcome> {
        self.history
            .iter()
            .find(|record| record.request_id == request_id)
            .and_then(|record| record.outcome.as_ref())
    }

    /// Newest first
    pub fn history(&self) -> impl Iterator<Item = &SubmissionRecord> {
        self.history.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::archive::ArchiveMetadata;

    fn payload(number: f64) -> ArchivePayload {
        ArchivePayload {
            number,
            metadata: ArchiveMetadata {
                source: "s".into(),
                location: "l".into(),
                unit: "u".into(),
                device_id: "d".into(),
                battery_level: None,
                calibrated: false,
                updated: false,
            },
        }
    }

    #[test]
    fn test_second_submit_ignored_while_pending() {
        let mut state = ArchiveState::default();
        assert!(state.begin("req-1", payload(1.0)));
        assert!(state.is_submitting());
        assert!(!state.begin("req-2", payload(2.0)));
        assert_eq!(state.len(), 1);

        assert!(state.finish("req-1", Ok(ArchiveCreated { id: "7".into() })));
        assert!(!state.is_submitting());
        assert!(state.begin("req-2", payload(2.0)));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_finish_records_outcome() {
        let mut state = ArchiveState::default();
        state.begin("req-1", payload(1.0));
        state.finish("req-1", Err(SubmitError::NotFound));

        let record = state.history().next().expect("record");
        assert_eq!(record.outcome, Some(Err(SubmitError::NotFound)));
        assert!(!state.finish("unknown", Err(SubmitError::Cors)));
    }

    #[test]
    fn test_history_is_bounded_and_newest_first() {
        let mut state = ArchiveState::new(2);
        for i in 0..3 {
            let id = format!("req-{i}");
            state.begin(id.clone(), payload(i as f64));
            state.finish(&id, Ok(ArchiveCreated { id: i.to_string() }));
        }
        let ids: Vec<_> = state.history().map(|r| r.request_id.as_str()).collect();
        assert_eq!(ids, vec!["req-2", "req-1"]);
    }

    #[test]
    fn test_outcome_lookup() {
        let mut state = ArchiveState::default();
        state.begin("req-1", payload(1.0));
        assert!(state.outcome("req-1").is_none());

        state.finish("req-1", Ok(ArchiveCreated { id: "9".into() }));
        assert_eq!(
            state.outcome("req-1"),
            Some(&Ok(ArchiveCreated { id: "9".into() }))
        );
        assert!(state.outcome("req-2").is_none());
    }
}
