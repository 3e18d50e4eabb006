mod calibration;
mod driver;
mod gesture;
mod haptics;
mod input_loop;
mod sim;
mod snapshot;
#[cfg(test)]
mod tests;

pub use calibration::Calibrator;
pub use driver::{ACTUATOR_COUNT, EulerAngles, GloveDriver, GloveError, Handedness};
pub use gesture::{Gesture, GestureThresholds, classify};
pub use haptics::Haptics;
pub use input_loop::HandLoop;
pub use sim::SimGlove;
pub use snapshot::HandSnapshot;
