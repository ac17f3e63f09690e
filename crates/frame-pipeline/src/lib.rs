//! Sensor frame presentation pipeline.
//!
//! Wires the pixel core into a throttled convert-and-present flow: frames
//! arrive from a capture reader, pass a bounded admission gate, are
//! colorized (or copied) into display-ready bitmaps, and are handed to the
//! display surface from a single presenter task. Frames over budget are
//! dropped rather than queued without bound; the previously presented image
//! simply stays on screen.

pub mod config;
pub mod convert;
pub mod error;
pub mod present;
pub mod renderer;
pub mod throttle;

pub use config::RendererConfig;
pub use convert::{convert_frame, negotiate_reader_subtype};
pub use error::ConvertError;
pub use present::DisplaySurface;
pub use renderer::FrameRenderer;
pub use throttle::{AdmissionGate, RunningSlot, ScheduledSlot};
