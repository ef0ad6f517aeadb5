//! Scenario definition and runner.

use std::sync::Arc;

use cograph_session::{GraphStore, ManualClock, SessionResult};

use crate::error::{ScenarioError, ScenarioResult};
use crate::expect::Expect;
use crate::fixtures::{actor, init_tracing, OWNER};

type Op = Box<dyn Fn(&GraphStore) -> SessionResult<()>>;

struct Step {
    name: String,
    op: Op,
    expect: Expect,
}

/// A named sequence of calls with expected outcomes.
pub struct Scenario {
    name: String,
    start: u64,
    steps: Vec<Step>,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: 1_700_000_000,
            steps: Vec::new(),
        }
    }

    /// Clock reading for the first step. Each later step is one second on.
    pub fn starting_at(mut self, start: u64) -> Self {
        self.start = start;
        self
    }

    pub fn step<F>(mut self, name: impl Into<String>, expect: Expect, op: F) -> Self
    where
        F: Fn(&GraphStore) -> SessionResult<()> + 'static,
    {
        self.steps.push(Step {
            name: name.into(),
            op: Box::new(op),
            expect,
        });
        self
    }

    /// Run every step against a fresh store and hand the store back for
    /// further inspection.
    pub fn run(&self) -> ScenarioResult<GraphStore> {
        init_tracing();
        let clock = Arc::new(ManualClock::new(self.start));
        let store = GraphStore::with_clock(actor(OWNER), clock.clone()).map_err(|source| {
            ScenarioError::Setup {
                scenario: self.name.clone(),
                source,
            }
        })?;

        for step in &self.steps {
            let before = store.last_seq();
            let result = (step.op)(&store);
            let emitted = (store.last_seq() - before) as usize;
            step.expect
                .check(&result, emitted)
                .map_err(|message| ScenarioError::step_failed(&self.name, &step.name, message))?;
            clock.advance(1);
        }

        Ok(store)
    }
}
