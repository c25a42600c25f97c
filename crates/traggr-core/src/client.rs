//! Remote aggregation service seam.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::model::ResultRecord;

/// Client for the result-aggregation service.
///
/// `ping` runs once while the session is configured and must fail when the
/// service is unreachable; `post_results` submits the whole buffer of a
/// finished run in a single call.
#[async_trait]
pub trait AggrClient: Send + Sync {
    async fn ping(&self) -> anyhow::Result<()>;

    async fn post_results(
        &self,
        project: &str,
        sprint: &str,
        results: &[ResultRecord],
    ) -> anyhow::Result<()>;
}

/// One captured `post_results` call.
#[derive(Debug, Clone)]
pub struct PostedResults {
    pub project: String,
    pub sprint: String,
    pub results: Vec<ResultRecord>,
}

/// In-memory client that records every call, for harness tests.
#[derive(Debug, Default)]
pub struct RecordingClient {
    fail_ping: bool,
    fail_post: bool,
    pings: AtomicUsize,
    posted: Mutex<Vec<PostedResults>>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_ping() -> Self {
        Self {
            fail_ping: true,
            ..Self::default()
        }
    }

    pub fn failing_post() -> Self {
        Self {
            fail_post: true,
            ..Self::default()
        }
    }

    pub fn pings(&self) -> usize {
        self.pings.load(Ordering::SeqCst)
    }

    pub fn posted(&self) -> Vec<PostedResults> {
        self.posted.lock().expect("posted results lock").clone()
    }
}

#[async_trait]
impl AggrClient for RecordingClient {
    async fn ping(&self) -> anyhow::Result<()> {
        self.pings.fetch_add(1, Ordering::SeqCst);
        if self.fail_ping {
            anyhow::bail!("scripted ping failure");
        }
        Ok(())
    }

    async fn post_results(
        &self,
        project: &str,
        sprint: &str,
        results: &[ResultRecord],
    ) -> anyhow::Result<()> {
        if self.fail_post {
            anyhow::bail!("scripted post failure");
        }
        self.posted
            .lock()
            .expect("posted results lock")
            .push(PostedResults {
                project: project.to_string(),
                sprint: sprint.to_string(),
                results: results.to_vec(),
            });
        Ok(())
    }
}
