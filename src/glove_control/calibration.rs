use crate::config::Config;
use crate::glove_control::driver::{EulerAngles, GloveDriver, GloveError};
use crate::glove_control::haptics::Haptics;
use crate::{info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

/// Startup ceremony that zeroes both gloves' sensors.
///
/// The operator is buzzed once, then holds both hands flat, fingers
/// extended, palms down. Once the orientation of both hands stops moving
/// between two consecutive samples the finger sensors are zeroed and the
/// IMU home points set, confirmed with a double buzz. The ceremony blocks
/// startup: hand loops only run against calibrated gloves.
pub struct Calibrator {
    left: Arc<dyn GloveDriver>,
    right: Arc<dyn GloveDriver>,
    interval: Duration,
    settle: Duration,
    backoff: Duration,
    cancel: CancellationToken,
}

impl Calibrator {
    /// Maximum per-axis orientation drift between two consecutive samples
    /// for the hands to count as still.
    const STABILITY_DEG: f32 = 10.0;
    /// Length of the all-actuator burst prompting the operator.
    const PROMPT_BURST: Duration = Duration::from_millis(750);
    /// Length of the per-iteration tick pulse.
    const TICK_PULSE: Duration = Duration::from_millis(100);
    /// Actuator buzzed each iteration while waiting for still hands.
    const TICK_ACTUATOR: usize = 5;
    const CONFIRM_FIRST: Duration = Duration::from_millis(300);
    const CONFIRM_SECOND: Duration = Duration::from_millis(500);
    /// Pause after the confirmation double-buzz before returning.
    const CONFIRM_PAUSE: Duration = Duration::from_secs(2);

    pub fn new(
        left: Arc<dyn GloveDriver>,
        right: Arc<dyn GloveDriver>,
        config: &Config,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            left,
            right,
            interval: config.calibration_interval,
            settle: config.calibration_settle,
            backoff: config.disconnect_backoff,
            cancel,
        }
    }

    /// Runs the ceremony to completion. Returns `Ok` once both gloves are
    /// calibrated or the token was cancelled; only an operator interrupt
    /// surfaced by a driver call escapes as an error.
    pub async fn run(&self) -> Result<(), GloveError> {
        // Let the gloves finish connecting so the prompt is not buried.
        tokio::select! {
            () = self.cancel.cancelled() => return Ok(()),
            () = sleep(self.settle) => {}
        }
        let mut prompted = false;
        let mut previous: Option<(EulerAngles, EulerAngles)> = None;
        loop {
            if self.cancel.is_cancelled() {
                return Ok(());
            }
            match self.attempt(&mut prompted, &mut previous).await {
                Ok(true) => return Ok(()),
                Ok(false) => {}
                Err(GloveError::Disconnected) => {
                    warn!("Glove disconnected during calibration.");
                    tokio::select! {
                        () = self.cancel.cancelled() => return Ok(()),
                        () = sleep(self.backoff) => {}
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// One ceremony iteration. `Ok(true)` means both gloves are calibrated,
    /// `Ok(false)` that the hands were still moving.
    async fn attempt(
        &self,
        prompted: &mut bool,
        previous: &mut Option<(EulerAngles, EulerAngles)>,
    ) -> Result<bool, GloveError> {
        if !*prompted {
            info!("Hold both hands flat, fingers extended, palms down.");
            self.burst_both(Self::PROMPT_BURST).await?;
            *prompted = true;
        }

        tokio::select! {
            () = self.cancel.cancelled() => return Ok(false),
            () = sleep(self.interval) => {}
        }
        info!("Calibrating...");
        self.buzz_both(&[Self::TICK_ACTUATOR], Self::TICK_PULSE).await?;

        let left = self.left.euler_angles().await?;
        let right = self.right.euler_angles().await?;

        let stable = previous.is_some_and(|(prev_left, prev_right)| {
            left.max_axis_delta(&prev_left) <= Self::STABILITY_DEG
                && right.max_axis_delta(&prev_right) <= Self::STABILITY_DEG
        });
        if stable {
            self.left.calibrate_flat().await?;
            self.left.home_imu().await?;
            self.right.calibrate_flat().await?;
            self.right.home_imu().await?;
            info!("Calibration successful. Commands can now be sent.");

            self.burst_both(Self::CONFIRM_FIRST).await?;
            self.burst_both(Self::CONFIRM_SECOND).await?;
            sleep(Self::CONFIRM_PAUSE).await;
            return Ok(true);
        }
        *previous = Some((left, right));
        Ok(false)
    }

    /// Primes and buzzes every actuator on both gloves for `duration`.
    async fn burst_both(&self, duration: Duration) -> Result<(), GloveError> {
        Haptics::prime(self.left.as_ref()).await?;
        Haptics::prime(self.right.as_ref()).await?;
        self.buzz_both(&Haptics::ALL, duration).await
    }

    /// Buzzes `actuators` on both gloves under one shared delay.
    async fn buzz_both(&self, actuators: &[usize], duration: Duration) -> Result<(), GloveError> {
        Haptics::play(self.left.as_ref(), actuators).await?;
        Haptics::play(self.right.as_ref(), actuators).await?;
        sleep(duration).await;
        self.left.silence_haptics().await?;
        self.right.silence_haptics().await?;
        Ok(())
    }
}
