//! The pipeline entry point.

use std::sync::{Arc, RwLock};

use colorizer::ColorTables;
use frame_common::SensorFrame;
use metrics::counter;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::config::RendererConfig;
use crate::convert::convert_frame;
use crate::present::{spawn_presenter, DisplaySurface, PresentJob};
use crate::throttle::AdmissionGate;

/// Converts incoming sensor frames into bitmaps and feeds the display
/// surface, dropping frames whenever either pipeline stage is over budget.
///
/// `process_frame` is called from the capture reader's worker thread; the
/// conversion runs there synchronously and the finished bitmap crosses to
/// the presenter task for delivery.
pub struct FrameRenderer {
    tables: Arc<ColorTables>,
    gate: Arc<AdmissionGate>,
    sensor_name: RwLock<Option<String>>,
    present_tx: mpsc::UnboundedSender<PresentJob>,
}

impl FrameRenderer {
    /// Build a renderer with freshly-built color tables.
    ///
    /// Must be called within a tokio runtime; the presenter task is spawned
    /// here.
    pub fn new(surface: Arc<dyn DisplaySurface>, config: RendererConfig) -> Self {
        Self::with_tables(surface, config, Arc::new(ColorTables::default()))
    }

    /// Build a renderer sharing pre-built color tables. Several renderers
    /// may point at the same tables; they are immutable after construction.
    pub fn with_tables(
        surface: Arc<dyn DisplaySurface>,
        config: RendererConfig,
        tables: Arc<ColorTables>,
    ) -> Self {
        let gate = Arc::new(AdmissionGate::new(config.max_scheduled, config.max_running));
        let present_tx = spawn_presenter(surface, Arc::clone(&gate));
        Self {
            tables,
            gate,
            sensor_name: RwLock::new(None),
            present_tx,
        }
    }

    /// Record the sensor identity; used only to select depth calibration.
    pub fn set_sensor_name(&self, name: impl Into<String>) {
        *self.sensor_name.write().unwrap() = Some(name.into());
    }

    /// The admission counters, for callers that surface pipeline health.
    pub fn gate(&self) -> Arc<AdmissionGate> {
        Arc::clone(&self.gate)
    }

    /// Convert and present one frame. `None` (a reader with no frame ready)
    /// is a no-op.
    ///
    /// Never returns an error to the caller: over-budget, unsupported, and
    /// faulty frames are logged, counted, and dropped, and the previously
    /// presented image stays on screen.
    pub fn process_frame(&self, frame: Option<&SensorFrame<'_>>) {
        let Some(frame) = frame else { return };

        let Some(slot) = self.gate.try_schedule() else {
            debug!(kind = ?frame.kind, "conversion backlog full, dropping frame");
            counter!("frames_dropped_total", "stage" => "scheduled").increment(1);
            return;
        };

        let sensor_name = self.sensor_name.read().unwrap().clone();
        match convert_frame(frame, sensor_name.as_deref(), &self.tables) {
            Ok(bitmap) => {
                counter!("frames_converted_total").increment(1);
                if self
                    .present_tx
                    .send(PresentJob {
                        bitmap,
                        scheduled: slot,
                    })
                    .is_err()
                {
                    // Presenter stopped; the returned job releases the slot.
                    debug!("presenter gone, dropping converted frame");
                }
            }
            Err(err) => {
                warn!(kind = ?frame.kind, error = %err, "frame conversion failed");
                counter!("frames_failed_total", "stage" => "convert").increment(1);
            }
        }
    }
}
