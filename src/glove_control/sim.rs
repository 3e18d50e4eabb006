use crate::glove_control::driver::{EulerAngles, GloveDriver, GloveError, Handedness};
use crate::info;
use async_trait::async_trait;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};

/// Stand-in glove for running without the vendor hardware attached.
///
/// Reports a relaxed, half-curled hand with a little sensor jitter: still
/// enough to pass the calibration stability check, never curled or turned
/// far enough to classify as a gesture.
pub struct SimGlove {
    handedness: Handedness,
    released: AtomicBool,
}

impl SimGlove {
    /// Resting flexion reported for every finger.
    const NEUTRAL_FLEXION: f32 = 0.3;
    /// Flexion jitter half-range.
    const FLEX_JITTER: f32 = 0.005;
    /// Orientation jitter half-range in degrees, well inside the
    /// calibration stability window.
    const ANGLE_JITTER: f32 = 2.0;

    pub fn new(handedness: Handedness) -> Self {
        Self { handedness, released: AtomicBool::new(false) }
    }
}

#[async_trait]
impl GloveDriver for SimGlove {
    fn handedness(&self) -> Handedness {
        self.handedness
    }

    async fn fingers_normalized(&self) -> Result<[f32; 5], GloveError> {
        let mut rng = rand::rng();
        let mut flexion = [Self::NEUTRAL_FLEXION; 5];
        for f in &mut flexion {
            *f += rng.random_range(-Self::FLEX_JITTER..=Self::FLEX_JITTER);
        }
        Ok(flexion)
    }

    async fn euler_angles(&self) -> Result<EulerAngles, GloveError> {
        let mut rng = rand::rng();
        let mut jitter = || rng.random_range(-Self::ANGLE_JITTER..=Self::ANGLE_JITTER);
        Ok(EulerAngles { roll: jitter(), pitch: jitter(), yaw: jitter() })
    }

    async fn select_haptic_wave(&self, _actuator: usize, _waveform: u8) -> Result<(), GloveError> {
        Ok(())
    }

    async fn send_haptic(
        &self,
        _actuator: usize,
        _note: u8,
        _amplitude: f32,
    ) -> Result<(), GloveError> {
        Ok(())
    }

    async fn silence_haptics(&self) -> Result<(), GloveError> {
        Ok(())
    }

    async fn calibrate_flat(&self) -> Result<(), GloveError> {
        Ok(())
    }

    async fn home_imu(&self) -> Result<(), GloveError> {
        Ok(())
    }

    async fn release(&self) {
        if !self.released.swap(true, Ordering::Relaxed) {
            info!("{} sim glove released.", self.handedness);
        }
    }
}
