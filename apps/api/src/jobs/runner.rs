//! Bounded worker pool for job execution.
//!
//! Each submission runs on its own tokio task so a slow provider call never
//! holds up an unrelated request. At most `max_concurrent` pipelines run at
//! once; extra submissions wait for a permit (queueing delay, not failure).
//! A panic inside a pipeline is caught here and reported as a failed result.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::{debug, error};

use crate::jobs::dispatcher::Dispatcher;
use crate::jobs::envelope::Envelope;
use crate::jobs::models::{JobRequest, JobResult};
use crate::jobs::JobError;

#[derive(Clone)]
pub struct JobRunner {
    dispatcher: Dispatcher,
    permits: Arc<Semaphore>,
    max_concurrent: usize,
}

impl JobRunner {
    pub fn new(dispatcher: Dispatcher, max_concurrent: usize) -> Self {
        let max_concurrent = max_concurrent.max(1);
        Self {
            dispatcher,
            permits: Arc::new(Semaphore::new(max_concurrent)),
            max_concurrent,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Pipelines currently holding a permit.
    pub fn in_flight(&self) -> usize {
        self.max_concurrent - self.permits.available_permits()
    }

    pub async fn submit(&self, request: JobRequest) -> JobResult {
        let permit = match self.permits.clone().acquire_owned().await {
            Ok(permit) => permit,
            Err(e) => {
                error!("Worker pool closed: {e}");
                return Envelope::open(&request.company_id, &request.job_type)
                    .failed(&JobError::Internal(format!("worker pool closed: {e}")));
            }
        };
        debug!("Worker permit acquired ({} in flight)", self.in_flight());

        // Opened once the permit is held so a crashed task reports the same
        // span `dispatch` would, without the queueing delay.
        let fallback = Envelope::open(&request.company_id, &request.job_type);

        let dispatcher = self.dispatcher.clone();
        let handle = tokio::spawn(async move {
            let _permit = permit;
            dispatcher.dispatch(&request).await
        });

        match handle.await {
            Ok(result) => result,
            Err(e) => {
                error!("Job task for {} aborted: {e}", fallback.job_id());
                fallback.failed(&JobError::Internal(format!("job task aborted: {e}")))
            }
        }
    }
}
