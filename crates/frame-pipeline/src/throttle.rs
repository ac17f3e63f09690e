//! Two-stage admission control for outstanding conversions.
//!
//! Mirrors the two costs of the display path: a few frames may be scheduled
//! (arrived and converting) and a few finished bitmaps may be running (in
//! flight toward the display). Each stage is a capped atomic counter;
//! refusal at either stage drops the frame. Slots release on drop, so an
//! error or panic anywhere on the conversion path cannot leak one.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Bounded two-stage gate. Cheap to share; all operations are lock-free.
#[derive(Debug)]
pub struct AdmissionGate {
    scheduled: AtomicI64,
    running: AtomicI64,
    max_scheduled: i64,
    max_running: i64,
}

impl AdmissionGate {
    pub fn new(max_scheduled: i64, max_running: i64) -> Self {
        Self {
            scheduled: AtomicI64::new(0),
            running: AtomicI64::new(0),
            max_scheduled,
            max_running,
        }
    }

    /// Claim a scheduled-stage slot, or refuse if the backlog is full.
    ///
    /// The counter may transiently exceed the cap between the increment and
    /// the check; the immediate decrement on refusal restores it.
    pub fn try_schedule(self: &Arc<Self>) -> Option<ScheduledSlot> {
        if self.scheduled.fetch_add(1, Ordering::AcqRel) + 1 > self.max_scheduled {
            self.scheduled.fetch_sub(1, Ordering::AcqRel);
            return None;
        }
        Some(ScheduledSlot {
            gate: Arc::clone(self),
        })
    }

    /// Claim a running-stage slot, or refuse if too many presentations are
    /// already in flight.
    pub fn try_run(self: &Arc<Self>) -> Option<RunningSlot> {
        if self.running.fetch_add(1, Ordering::AcqRel) + 1 > self.max_running {
            self.running.fetch_sub(1, Ordering::AcqRel);
            return None;
        }
        Some(RunningSlot {
            gate: Arc::clone(self),
        })
    }

    /// Currently claimed scheduled-stage slots.
    pub fn scheduled(&self) -> i64 {
        self.scheduled.load(Ordering::Acquire)
    }

    /// Currently claimed running-stage slots.
    pub fn running(&self) -> i64 {
        self.running.load(Ordering::Acquire)
    }
}

/// Held while a frame is scheduled: from admission until its presentation
/// continuation starts. Releases on drop.
#[derive(Debug)]
pub struct ScheduledSlot {
    gate: Arc<AdmissionGate>,
}

impl Drop for ScheduledSlot {
    fn drop(&mut self) {
        self.gate.scheduled.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Held while a finished bitmap is being handed to the display. Releases on
/// drop.
#[derive(Debug)]
pub struct RunningSlot {
    gate: Arc<AdmissionGate>,
}

impl Drop for RunningSlot {
    fn drop(&mut self) {
        self.gate.running.fetch_sub(1, Ordering::AcqRel);
    }
}
