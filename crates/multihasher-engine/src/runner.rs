//! Async cascade runner — background task, event channel, cancellation token
//!
//! The cascade runs on its own tokio task, decoupled from whoever consumes
//! the events. Cancellation is explicit message-passing: the handle's
//! `CancellationToken` is polled at level boundaries, so cancellation latency
//! is bounded by at most one level's computation.

use multihasher_core::{CascadeStatus, Encoding, FinalResult, HashRequest, ProgressEvent};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cascade::Cascade;

/// Events emitted by a cascade run, in strictly increasing level order.
/// Exactly one terminal event (`Completed` or `Stopped`) ends the stream.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum CascadeEvent {
    Progress(ProgressEvent),
    Completed(FinalResult),
    Stopped { levels_completed: u32 },
}

/// Handle for an active cascade run.
pub struct CascadeHandle {
    pub id: String,
    /// Cancel the run; observed before the next level starts
    pub cancel: CancellationToken,
    /// Per-level progress and the terminal event
    pub events: mpsc::Receiver<CascadeEvent>,
    /// Join handle for the spawned task
    pub join: JoinHandle<CascadeStatus>,
}

/// Sole entry point from the caller side: raw level/repetition strings go
/// through the normalizer, then the cascade is spawned in the background.
pub fn start_hashing(
    text: impl Into<String>,
    levels_raw: &str,
    repetitions_raw: &str,
    encoding: Encoding,
) -> CascadeHandle {
    spawn_cascade(HashRequest::from_raw(
        text,
        levels_raw,
        repetitions_raw,
        encoding,
    ))
}

/// Spawn a cascade for an already-validated request.
pub fn spawn_cascade(request: HashRequest) -> CascadeHandle {
    let (events_tx, events_rx) = mpsc::channel(64);
    let cancel = CancellationToken::new();
    let id = uuid::Uuid::new_v4().to_string();

    let token = cancel.clone();
    let run_id = id.clone();
    let join = tokio::spawn(async move {
        info!(
            run = %run_id,
            levels = request.levels,
            repetitions = request.repetitions,
            encoding = %request.encoding,
            "cascade started"
        );
        let mut cascade = Cascade::new(request);

        while !cascade.is_done() {
            if token.is_cancelled() {
                let levels_completed = cascade.levels_completed();
                info!(run = %run_id, levels_completed, "cascade stopped");
                let _ = events_tx
                    .send(CascadeEvent::Stopped { levels_completed })
                    .await;
                return CascadeStatus::Stopped;
            }

            if let Some(event) = cascade.advance() {
                debug!(run = %run_id, level = event.level_completed, "level converted");
                let _ = events_tx.send(CascadeEvent::Progress(event)).await;
            }

            // Yield between levels so a concurrent cancel is observed promptly.
            tokio::task::yield_now().await;
        }

        match cascade.final_result() {
            Some(result) => {
                info!(run = %run_id, "cascade completed");
                let _ = events_tx.send(CascadeEvent::Completed(result.clone())).await;
                CascadeStatus::Completed(result)
            }
            None => CascadeStatus::Stopped,
        }
    });

    CascadeHandle {
        id,
        cancel,
        events: events_rx,
        join,
    }
}
