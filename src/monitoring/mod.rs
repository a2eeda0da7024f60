/*!
 * Monitoring
 * Timing sources and structured tracing
 */

pub mod clock;
mod tracer;

pub use clock::{Clock, ClockError, ClockResult, ManualClock, ProcessClock};
pub use tracer::init_tracing;
