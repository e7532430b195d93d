//! Bounded fire-and-forget dispatch of analysis calls.
//!
//! Handlers enqueue a job and return immediately. A single worker task drains
//! the queue and runs each call on its own task, holding a semaphore permit
//! so at most `max_in_flight` calls are outstanding. When the queue is full
//! new jobs are dropped and logged; nothing is retried.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, Semaphore};
use uuid::Uuid;

use super::client::AnalysisClient;

/// Errors returned when a job cannot be queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The pending-job queue is at capacity.
    #[error("analysis queue is full")]
    QueueFull,

    /// The worker has stopped.
    #[error("analysis dispatcher is closed")]
    Closed,
}

/// A queued analysis trigger.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisJob {
    /// Correlates the enqueue and completion log lines.
    pub id: Uuid,
    /// When the job was queued.
    pub submitted_at: DateTime<Utc>,
}

impl AnalysisJob {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }
}

/// Handle for queueing analysis calls.
#[derive(Debug, Clone)]
pub struct AnalysisDispatcher {
    sender: mpsc::Sender<AnalysisJob>,
}

impl AnalysisDispatcher {
    /// Start the worker task and return a handle to it.
    ///
    /// Must be called from within a Tokio runtime. Zero capacities are raised to one.
    #[must_use]
    pub fn spawn(client: AnalysisClient, queue_capacity: usize, max_in_flight: usize) -> Self {
        let (sender, receiver) = mpsc::channel(queue_capacity.max(1));
        let permits = Arc::new(Semaphore::new(max_in_flight.max(1)));

        tokio::spawn(run_worker(Arc::new(client), receiver, permits));

        Self { sender }
    }

    /// Queue one analysis call without waiting for it.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::QueueFull` when the queue is at capacity and
    /// `DispatchError::Closed` if the worker has stopped.
    pub fn submit(&self) -> Result<Uuid, DispatchError> {
        let job = AnalysisJob::new();

        match self.sender.try_send(job) {
            Ok(()) => {
                tracing::debug!(job_id = %job.id, "Analysis job queued");
                Ok(job.id)
            }
            Err(mpsc::error::TrySendError::Full(job)) => {
                tracing::warn!(job_id = %job.id, "Analysis queue full, dropping job");
                Err(DispatchError::QueueFull)
            }
            Err(mpsc::error::TrySendError::Closed(job)) => {
                tracing::error!(job_id = %job.id, "Analysis dispatcher closed, dropping job");
                Err(DispatchError::Closed)
            }
        }
    }
}

async fn run_worker(
    client: Arc<AnalysisClient>,
    mut receiver: mpsc::Receiver<AnalysisJob>,
    permits: Arc<Semaphore>,
) {
    while let Some(job) = receiver.recv().await {
        let Ok(permit) = permits.clone().acquire_owned().await else {
            break;
        };
        let client = client.clone();

        tokio::spawn(async move {
            let _permit = permit;
            let queued_ms = (Utc::now() - job.submitted_at).num_milliseconds();

            match client.trigger().await {
                Ok(status) if status.is_success() => {
                    tracing::info!(job_id = %job.id, status = status.as_u16(), queued_ms, "Analysis triggered");
                }
                Ok(status) => {
                    tracing::warn!(job_id = %job.id, status = status.as_u16(), queued_ms, "Analysis engine returned an error status");
                }
                Err(e) => {
                    tracing::warn!(job_id = %job.id, error = %e, queued_ms, "Failed to trigger analysis");
                }
            }
        });
    }

    tracing::debug!("Analysis dispatcher stopped");
}
