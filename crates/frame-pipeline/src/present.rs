//! Hand-off of finished bitmaps to the display surface.
//!
//! The display surface has single-threaded affinity, so every delivery runs
//! on one presenter task. Presentations themselves may be asynchronous; the
//! task keeps them pending locally so several can be in flight while it
//! keeps draining its queue.

use std::sync::Arc;

use async_trait::async_trait;
use frame_common::Bgra8Bitmap;
use futures::stream::{FuturesUnordered, StreamExt};
use metrics::counter;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::throttle::{AdmissionGate, ScheduledSlot};

/// Receives finished bitmaps, e.g. by scheduling them onto a render target.
///
/// `present` runs on the presenter task. An error drops the frame; the
/// pipeline logs it and moves on.
#[async_trait]
pub trait DisplaySurface: Send + Sync {
    async fn present(&self, bitmap: Bgra8Bitmap) -> anyhow::Result<()>;
}

/// A converted frame queued for presentation, still holding its
/// scheduled-stage slot.
pub(crate) struct PresentJob {
    pub bitmap: Bgra8Bitmap,
    pub scheduled: ScheduledSlot,
}

/// Spawn the presenter task. The returned sender is the only way in; when
/// every sender is dropped the task drains in-flight presentations and
/// exits.
pub(crate) fn spawn_presenter(
    surface: Arc<dyn DisplaySurface>,
    gate: Arc<AdmissionGate>,
) -> mpsc::UnboundedSender<PresentJob> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(run_presenter(surface, gate, rx));
    tx
}

async fn run_presenter(
    surface: Arc<dyn DisplaySurface>,
    gate: Arc<AdmissionGate>,
    mut rx: mpsc::UnboundedReceiver<PresentJob>,
) {
    let mut in_flight = FuturesUnordered::new();
    loop {
        tokio::select! {
            job = rx.recv() => {
                let Some(PresentJob { bitmap, scheduled }) = job else { break };
                // This frame's continuation has started; it no longer
                // occupies the conversion backlog.
                drop(scheduled);

                let Some(slot) = gate.try_run() else {
                    debug!("presentation stage full, dropping converted frame");
                    counter!("frames_dropped_total", "stage" => "running").increment(1);
                    continue;
                };
                let surface = Arc::clone(&surface);
                in_flight.push(async move {
                    let result = surface.present(bitmap).await;
                    drop(slot);
                    result
                });
            }
            Some(result) = in_flight.next(), if !in_flight.is_empty() => {
                if let Err(err) = result {
                    warn!(error = %err, "display surface rejected bitmap");
                    counter!("frames_failed_total", "stage" => "present").increment(1);
                }
            }
        }
    }
    while let Some(result) = in_flight.next().await {
        if let Err(err) = result {
            warn!(error = %err, "display surface rejected bitmap");
            counter!("frames_failed_total", "stage" => "present").increment(1);
        }
    }
}
