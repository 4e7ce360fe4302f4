use landing_core::query::{
    QueryCategory, QueryDemo, ResponseTable, ResponseView, SubmitOutcome, Ticket, CHECKMARK,
};
use landing_core::LandingConfig;

/// Drives a `QueryDemo` against a virtual clock, the way the browser timers
/// would. Scheduling a new analysis cancels the pending one unless
/// `keep_stale` is set, in which case stale completions still fire. A result
/// starts the pulse-clear timer, replacing any earlier one.
struct Harness {
    demo: QueryDemo,
    table: ResponseTable,
    now: u32,
    pulse_ms: u32,
    timers: Vec<(u32, Ticket)>,
    pulse_timer: Option<(u32, Ticket)>,
    keep_stale: bool,
    fired: usize,
}

impl Harness {
    fn new() -> Self {
        let config = LandingConfig::default();
        Self {
            demo: QueryDemo::new(config.analysis_delay_ms),
            table: ResponseTable::builtin().unwrap(),
            now: 0,
            pulse_ms: config.pulse_ms,
            timers: Vec::new(),
            pulse_timer: None,
            keep_stale: false,
            fired: 0,
        }
    }

    fn submit(&mut self, query: &str) -> SubmitOutcome {
        let outcome = self.demo.submit(query);
        if let SubmitOutcome::Scheduled { ticket, delay_ms } = outcome {
            if !self.keep_stale {
                self.timers.clear();
            }
            self.timers.push((self.now + delay_ms, ticket));
        }
        outcome
    }

    fn advance(&mut self, ms: u32) {
        self.now += ms;
        let now = self.now;
        let (due, pending): (Vec<_>, Vec<_>) =
            self.timers.drain(..).partition(|(at, _)| *at <= now);
        self.timers = pending;
        for (at, ticket) in due {
            self.fired += 1;
            if self.demo.resolve(ticket).is_some() {
                self.pulse_timer = Some((at + self.pulse_ms, ticket));
            }
        }
        if let Some((at, ticket)) = self.pulse_timer {
            if at <= now {
                self.pulse_timer = None;
                self.demo.clear_pulse(ticket);
            }
        }
    }

    fn view(&self) -> ResponseView {
        ResponseView::render(self.demo.state(), &self.table)
    }
}

#[test]
fn diabetes_question_renders_its_payload_after_the_delay() {
    let mut harness = Harness::new();
    harness.submit("What about diabetes treatment?");
    assert!(harness.view().shows_analyzing());

    harness.advance(1499);
    assert!(harness.view().shows_analyzing());

    harness.advance(1);
    let view = harness.view();
    let result = view.result().expect("result is shown");
    assert_eq!(result.category, QueryCategory::Diabetes);
    assert_eq!(
        result.summary,
        "Analyzing 1,247 recent studies on diabetes management and cardiovascular health..."
    );
    assert_eq!(result.insights.len(), 4);
    assert!(result.insights.iter().all(|line| line.starts_with(CHECKMARK)));
    assert_eq!(
        result.insights[0],
        "✓ SGLT-2 inhibitors show 23% reduction in cardiovascular events"
    );
}

#[test]
fn unmatched_text_falls_back_to_generic_payload() {
    let mut harness = Harness::new();
    harness.submit("random text");
    harness.advance(1500);

    let view = harness.view();
    let result = view.result().unwrap();
    assert_eq!(result.category, QueryCategory::Default);
    assert_eq!(
        result.summary,
        "Analyzing relevant medical research papers across multiple databases..."
    );
    assert_eq!(
        result.insights,
        vec![
            "✓ Evidence-based treatment protocols identified",
            "✓ Latest clinical trial results incorporated",
            "✓ Expert consensus guidelines reviewed",
            "✓ Peer-reviewed meta-analyses analyzed",
        ]
    );
}

#[test]
fn blank_input_schedules_nothing() {
    let mut harness = Harness::new();
    assert_eq!(harness.submit("   "), SubmitOutcome::Rejected);
    assert!(harness.timers.is_empty());
    harness.advance(5000);
    assert!(harness.view().shows_placeholder());
}

#[test]
fn resubmitting_mid_analysis_cancels_the_first_request() {
    let mut harness = Harness::new();
    harness.submit("diabetes");
    harness.advance(1000);
    harness.submit("melanoma immunotherapy");

    // first request would have been due here
    harness.advance(500);
    assert!(harness.view().shows_analyzing());
    assert_eq!(harness.fired, 0);

    harness.advance(1000);
    assert_eq!(harness.fired, 1);
    assert_eq!(
        harness.view().result().unwrap().category,
        QueryCategory::Cancer
    );
}

#[test]
fn late_timer_of_superseded_request_is_ignored() {
    let mut harness = Harness::new();
    harness.keep_stale = true;
    harness.submit("cardiac surgery");
    harness.advance(1000);
    harness.submit("random text");

    harness.advance(500);
    assert_eq!(harness.fired, 1);
    assert!(harness.view().shows_analyzing());

    harness.advance(1000);
    assert_eq!(harness.fired, 2);
    assert_eq!(
        harness.view().result().unwrap().category,
        QueryCategory::Default
    );
}

#[test]
fn result_stays_until_the_next_submission() {
    let mut harness = Harness::new();
    harness.submit("cancer");
    harness.advance(1500);
    harness.advance(60_000);
    assert_eq!(
        harness.view().result().unwrap().category,
        QueryCategory::Cancer
    );

    harness.submit("surgery");
    assert!(harness.view().shows_analyzing());
    harness.advance(1500);
    assert_eq!(
        harness.view().result().unwrap().category,
        QueryCategory::Cardiac
    );
}

#[test]
fn submit_pulse_clears_after_its_own_delay() {
    let mut harness = Harness::new();
    let SubmitOutcome::Scheduled { ticket, .. } = harness.submit("diabetes") else {
        panic!("submission was rejected");
    };
    assert_eq!(harness.demo.pulse(), None);

    harness.advance(1500);
    assert_eq!(harness.demo.pulse(), Some(ticket));

    harness.advance(599);
    assert_eq!(harness.demo.pulse(), Some(ticket));

    harness.advance(1);
    assert_eq!(harness.demo.pulse(), None);
    assert!(harness.view().result().is_some());
}
