use async_trait::async_trait;
use strum_macros::Display;

/// Number of haptic actuators on each glove.
pub const ACTUATOR_COUNT: usize = 6;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum Handedness {
    Left,
    Right,
}

#[derive(Debug, Display)]
pub enum GloveError {
    /// The glove dropped its link. Polling may resume after a backoff; the
    /// driver reconnects on its own.
    Disconnected,
    /// The operator interrupted the process. The caller must release the
    /// device handle and exit its loop.
    Interrupted,
}

impl std::error::Error for GloveError {}

/// Orientation of the back of the hand in degrees.
///
/// The IMU reports its axes in the order yaw, roll, pitch; `from_imu` is the
/// single place that mapping lives.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct EulerAngles {
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
}

impl EulerAngles {
    /// Builds named angles from the raw IMU triple.
    pub fn from_imu(raw: [f32; 3]) -> Self {
        Self { roll: raw[1], pitch: raw[2], yaw: raw[0] }
    }

    /// Largest absolute per-axis change towards another sample.
    pub fn max_axis_delta(&self, other: &EulerAngles) -> f32 {
        (self.roll - other.roll)
            .abs()
            .max((self.pitch - other.pitch).abs())
            .max((self.yaw - other.yaw).abs())
    }
}

/// Interface to one dataglove.
///
/// The vendor hardware binding implements this out of tree; in-tree the
/// simulated glove stands in for development and tests. Sensor reads fail
/// with `Disconnected` while the glove is out of reach and with
/// `Interrupted` when the operator shut the process down mid-call.
#[async_trait]
pub trait GloveDriver: Send + Sync {
    fn handedness(&self) -> Handedness;

    /// Normalized flexion per finger in [0, 1], ordered thumb, index,
    /// middle, ring, pinky. 0 is fully extended.
    async fn fingers_normalized(&self) -> Result<[f32; 5], GloveError>;

    /// Current IMU orientation.
    async fn euler_angles(&self) -> Result<EulerAngles, GloveError>;

    /// Loads a waveform into one actuator's playback slot.
    async fn select_haptic_wave(&self, actuator: usize, waveform: u8) -> Result<(), GloveError>;

    /// Starts playback on one actuator until silenced.
    async fn send_haptic(&self, actuator: usize, note: u8, amplitude: f32)
    -> Result<(), GloveError>;

    /// Stops playback on all actuators.
    async fn silence_haptics(&self) -> Result<(), GloveError>;

    /// Zeroes the finger sensors at the current pose.
    async fn calibrate_flat(&self) -> Result<(), GloveError>;

    /// Sets the IMU home point to the current orientation.
    async fn home_imu(&self) -> Result<(), GloveError>;

    /// Releases the device handle. Releasing twice is a no-op.
    async fn release(&self);
}
