//! The result collector: one per test run.
//!
//! Hooked into the host runner's lifecycle it buffers one record per
//! completed test and hands the whole buffer to the aggregation client when
//! the run finishes. Purely in-memory until then; the only network traffic
//! is the configure-time ping and the final submission.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::client::AggrClient;
use crate::config::SessionConfig;
use crate::describe;
use crate::errors::CollectError;
use crate::handle::TestHandle;
use crate::identity;
use crate::model::{FailureInfo, ResultRecord, TestOutcome};
use crate::traceback;

/// Suites the runner reserves for its own synthetic failures; outcomes
/// carrying these are never recorded.
const SENTINEL_SUITES: [&str; 2] = ["suite", "Failure"];

pub struct Collector {
    config: SessionConfig,
    client: Arc<dyn AggrClient>,
    results: Vec<ResultRecord>,
    started: Option<Instant>,
}

impl Collector {
    /// Build the collector for one run and verify the aggregation service is
    /// reachable. A failed ping aborts before any test executes.
    pub async fn configure(
        config: SessionConfig,
        client: Arc<dyn AggrClient>,
    ) -> anyhow::Result<Self> {
        client.ping().await?;
        Ok(Self {
            config,
            client,
            results: Vec::new(),
            started: None,
        })
    }

    /// Host hook: a test is about to run.
    pub fn begin(&mut self, _test: &dyn TestHandle) {
        self.started = Some(Instant::now());
    }

    /// Host hook: a test completed with `outcome`; failed/error outcomes
    /// carry the rendered exception. Appends at most one record.
    pub fn record_outcome(
        &mut self,
        test: &dyn TestHandle,
        outcome: TestOutcome,
        failure: Option<&FailureInfo>,
    ) -> Result<(), CollectError> {
        let taken = self.time_taken();
        debug!(
            test = test.address(),
            elapsed_s = taken.as_secs_f64(),
            "test finished"
        );

        // Skipped tests are not reported. The skip signal only counts on
        // error outcomes, matching how the runner delivers it.
        if outcome == TestOutcome::Error && failure.is_some_and(|f| f.skip) {
            return Ok(());
        }

        let suite = suite_of(test.address());
        if SENTINEL_SUITES.contains(&suite) {
            return Ok(());
        }

        let error = match outcome {
            TestOutcome::Passed => None,
            TestOutcome::Failed | TestOutcome::Error => {
                failure.map(|f| traceback::extract(&f.rendered, self.config.traceback_style))
            }
        };

        let test_id = identity::resolve_test_id(test, &self.config.test_id_attr)
            .found()
            .unwrap_or_default();
        let attributes = identity::resolve_attributes(test, &self.config.test_attrs)?.found();

        let description = match test.method() {
            Some(method) => describe::normalize(method.doc()),
            None => {
                warn!(test = test.address(), "cannot get test method");
                String::new()
            }
        };

        self.results.push(ResultRecord {
            component: self.config.component.clone(),
            suite: suite.to_string(),
            test_id,
            title: test.short_description().unwrap_or("").to_string(),
            description,
            result: outcome,
            error,
            attributes,
            comment: self.config.comment.clone(),
        });
        Ok(())
    }

    /// Number of buffered records.
    pub fn buffered(&self) -> usize {
        self.results.len()
    }

    /// Host hook: the run is over. Submits the whole buffer in exactly one
    /// request, also when it is empty. Consuming `self` keeps a finished
    /// session from ever being reused.
    pub async fn finalize(self) -> anyhow::Result<()> {
        info!(results = self.results.len(), "posting results");
        self.client
            .post_results(&self.config.project, &self.config.sprint, &self.results)
            .await?;
        info!("done");
        Ok(())
    }

    fn time_taken(&self) -> Duration {
        // No stamp: the test died in setup, or the host reported an outcome
        // for a test it never started.
        self.started.map(|t| t.elapsed()).unwrap_or_default()
    }
}

/// Grouping label: the second-from-last dotted segment of the address.
fn suite_of(address: &str) -> &str {
    let mut segments = address.rsplit('.');
    segments.next();
    segments.next().unwrap_or("")
}
