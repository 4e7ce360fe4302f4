use super::QueryCategory;

/// Identifies one submission. A delayed completion only applies while its
/// ticket is still the current one, which makes every older pending task a
/// no-op once a newer submission has been made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WidgetState {
    #[default]
    Idle,
    Analyzing {
        ticket: Ticket,
        query: String,
    },
    Result {
        ticket: Ticket,
        query: String,
        category: QueryCategory,
    },
}

/// What the caller has to schedule after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input. Nothing changed and nothing must be scheduled.
    Rejected,
    /// Resolve `ticket` once `delay_ms` has elapsed. Any task scheduled for an
    /// earlier ticket should be cancelled.
    Scheduled { ticket: Ticket, delay_ms: u32 },
}

/// State machine behind the query demo: Idle -> Analyzing -> Result, with
/// every new submission restarting at Analyzing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDemo {
    state: WidgetState,
    pulse: Option<Ticket>,
    last_ticket: u64,
    analysis_delay_ms: u32,
}

impl QueryDemo {
    pub fn new(analysis_delay_ms: u32) -> Self {
        Self {
            state: WidgetState::Idle,
            pulse: None,
            last_ticket: 0,
            analysis_delay_ms,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.analysis_delay_ms
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Ticket of the analysis that is currently waiting on its delay.
    pub fn pending(&self) -> Option<Ticket> {
        match &self.state {
            WidgetState::Analyzing { ticket, .. } => Some(*ticket),
            _ => None,
        }
    }

    /// Ticket whose acknowledgment pulse is currently shown on the submit
    /// control.
    pub fn pulse(&self) -> Option<Ticket> {
        self.pulse
    }

    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        let query = raw.trim();
        if query.is_empty() {
            return SubmitOutcome::Rejected;
        }

        self.last_ticket += 1;
        let ticket = Ticket(self.last_ticket);
        if let Some(previous) = self.pending() {
            log::debug!("Query {} superseded by {}", previous.id(), ticket.id());
        }
        self.state = WidgetState::Analyzing {
            ticket,
            query: query.to_string(),
        };

        SubmitOutcome::Scheduled {
            ticket,
            delay_ms: self.analysis_delay_ms,
        }
    }

    /// Completes the analysis for `ticket`. Returns the resolved category, or
    /// `None` when the ticket is stale.
    pub fn resolve(&mut self, ticket: Ticket) -> Option<QueryCategory> {
        let query = match &self.state {
            WidgetState::Analyzing { ticket: current, query } if *current == ticket => {
                query.clone()
            }
            _ => {
                log::debug!("Ignoring stale analysis {}", ticket.id());
                return None;
            }
        };

        let category = QueryCategory::classify(&query);
        self.state = WidgetState::Result {
            ticket,
            query,
            category,
        };
        self.pulse = Some(ticket);
        Some(category)
    }

    /// Clears the pulse if it still belongs to `ticket`.
    pub fn clear_pulse(&mut self, ticket: Ticket) -> bool {
        if self.pulse == Some(ticket) {
            self.pulse = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled(outcome: SubmitOutcome) -> Ticket {
        match outcome {
            SubmitOutcome::Scheduled { ticket, .. } => ticket,
            SubmitOutcome::Rejected => panic!("submission was rejected"),
        }
    }

    #[test]
    fn starts_idle() {
        let demo = QueryDemo::new(1500);
        assert_eq!(demo.state(), &WidgetState::Idle);
        assert_eq!(demo.pending(), None);
        assert_eq!(demo.pulse(), None);
    }

    #[test]
    fn blank_submission_changes_nothing() {
        let mut demo = QueryDemo::new(1500);
        assert_eq!(demo.submit(""), SubmitOutcome::Rejected);
        assert_eq!(demo.submit("   \t\n"), SubmitOutcome::Rejected);
        assert_eq!(demo.state(), &WidgetState::Idle);

        let ticket = scheduled(demo.submit("cancer"));
        demo.resolve(ticket);
        let before = demo.clone();
        assert_eq!(demo.submit("  "), SubmitOutcome::Rejected);
        assert_eq!(demo, before);
    }

    #[test]
    fn submission_trims_and_reports_the_delay() {
        let mut demo = QueryDemo::new(1500);
        let outcome = demo.submit("  melanoma  ");
        let ticket = scheduled(outcome);
        assert_eq!(
            outcome,
            SubmitOutcome::Scheduled {
                ticket,
                delay_ms: 1500
            }
        );
        assert_eq!(
            demo.state(),
            &WidgetState::Analyzing {
                ticket,
                query: "melanoma".to_string()
            }
        );
    }

    #[test]
    fn resolve_moves_to_result_and_raises_pulse() {
        let mut demo = QueryDemo::new(1500);
        let ticket = scheduled(demo.submit("Cardiac surgery recovery"));
        assert_eq!(demo.resolve(ticket), Some(QueryCategory::Cardiac));
        assert!(matches!(
            demo.state(),
            WidgetState::Result { category: QueryCategory::Cardiac, .. }
        ));
        assert_eq!(demo.pulse(), Some(ticket));
        assert!(demo.clear_pulse(ticket));
        assert_eq!(demo.pulse(), None);
    }

    #[test]
    fn last_submission_wins() {
        let mut demo = QueryDemo::new(1500);
        let first = scheduled(demo.submit("diabetes"));
        let second = scheduled(demo.submit("melanoma"));
        assert!(second > first);

        assert_eq!(demo.resolve(first), None);
        assert_eq!(demo.pending(), Some(second));
        assert_eq!(demo.resolve(second), Some(QueryCategory::Cancer));
        // a late completion of the first submission must not overwrite it
        assert_eq!(demo.resolve(first), None);
        assert!(matches!(
            demo.state(),
            WidgetState::Result { category: QueryCategory::Cancer, .. }
        ));
    }

    #[test]
    fn resolving_twice_is_a_no_op() {
        let mut demo = QueryDemo::new(1500);
        let ticket = scheduled(demo.submit("random text"));
        assert_eq!(demo.resolve(ticket), Some(QueryCategory::Default));
        assert_eq!(demo.resolve(ticket), None);
    }

    #[test]
    fn stale_pulse_clear_keeps_newer_pulse() {
        let mut demo = QueryDemo::new(1500);
        let first = scheduled(demo.submit("diabetes"));
        demo.resolve(first);
        let second = scheduled(demo.submit("cancer"));
        demo.resolve(second);

        assert!(!demo.clear_pulse(first));
        assert_eq!(demo.pulse(), Some(second));
    }

    #[test]
    fn resubmitting_from_result_restarts_analysis() {
        let mut demo = QueryDemo::new(1500);
        let first = scheduled(demo.submit("diabetes"));
        demo.resolve(first);
        let second = scheduled(demo.submit("surgery"));
        assert_eq!(demo.pending(), Some(second));
    }
}
