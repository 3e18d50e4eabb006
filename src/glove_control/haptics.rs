use crate::glove_control::driver::{ACTUATOR_COUNT, GloveDriver, GloveError};
use crate::glove_control::gesture::Gesture;
use crate::warn;
use std::time::Duration;
use tokio::time::sleep;

/// Haptic feedback patterns shared by the hand loops and the calibration
/// ceremony. Each gesture acknowledgment buzzes its own actuator subset so
/// the operator can tell which command was recognized without looking.
pub struct Haptics;

impl Haptics {
    /// Waveform slot loaded into every actuator before playback.
    const WAVEFORM: u8 = 15;
    /// Playback pitch (0..=127).
    const NOTE: u8 = 60;
    /// Playback amplitude (0.0..=1.0).
    const AMPLITUDE: f32 = 1.0;
    /// Length of a gesture acknowledgment pulse.
    const PULSE: Duration = Duration::from_millis(100);
    /// Every actuator index.
    pub const ALL: [usize; ACTUATOR_COUNT] = [0, 1, 2, 3, 4, 5];

    /// Actuator subset buzzed to acknowledge `gesture`.
    pub fn actuators_for(gesture: Gesture) -> &'static [usize] {
        match gesture {
            Gesture::ThumbsUp => &[0, 5],
            Gesture::Peace => &[1, 2],
            Gesture::GoBulls => &[1, 4],
            Gesture::Halt => &[5],
            Gesture::Land => &Self::ALL,
        }
    }

    /// Loads the playback waveform into all actuators.
    pub async fn prime(glove: &dyn GloveDriver) -> Result<(), GloveError> {
        for actuator in Self::ALL {
            glove.select_haptic_wave(actuator, Self::WAVEFORM).await?;
        }
        Ok(())
    }

    /// Starts playback on `actuators`. They keep buzzing until silenced.
    pub async fn play(glove: &dyn GloveDriver, actuators: &[usize]) -> Result<(), GloveError> {
        for &actuator in actuators {
            glove.send_haptic(actuator, Self::NOTE, Self::AMPLITUDE).await?;
        }
        Ok(())
    }

    /// Buzzes `actuators` for `duration`, then silences the glove.
    pub async fn pulse(
        glove: &dyn GloveDriver,
        actuators: &[usize],
        duration: Duration,
    ) -> Result<(), GloveError> {
        Self::play(glove, actuators).await?;
        sleep(duration).await;
        glove.silence_haptics().await?;
        Ok(())
    }

    /// Best-effort acknowledgment buzz for a recognized gesture. Failures are
    /// logged and swallowed, the next sensor poll surfaces a dead link anyway.
    pub async fn acknowledge(glove: &dyn GloveDriver, gesture: Gesture) {
        if let Err(e) = Self::pulse(glove, Self::actuators_for(gesture), Self::PULSE).await {
            warn!("Haptic acknowledgment for {gesture} failed: {e}");
        }
    }
}
