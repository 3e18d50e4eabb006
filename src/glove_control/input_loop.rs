use crate::config::Config;
use crate::flight_control::FlightComputer;
use crate::glove_control::driver::{GloveDriver, GloveError};
use crate::glove_control::gesture::{Gesture, GestureThresholds, classify};
use crate::glove_control::haptics::Haptics;
use crate::glove_control::snapshot::HandSnapshot;
use crate::{error, event, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

/// Polls one glove and dispatches recognized gestures to the vehicle.
///
/// Runs until cancelled or the operator interrupts. A dropped glove link is
/// the fail-safe trigger: the vehicle is landed unconditionally before the
/// loop backs off and resumes polling, so it never keeps flying on a stale
/// command. Each loop releases its own glove handle on the way out.
pub struct HandLoop {
    glove: Arc<dyn GloveDriver>,
    f_comp: Arc<FlightComputer>,
    thresholds: GestureThresholds,
    debounce: Duration,
    idle_poll: Duration,
    backoff: Duration,
    cancel: CancellationToken,
}

impl HandLoop {
    const SENTRY_SKILL: &'static str = "security_bot";
    const PANO_SKILL: &'static str = "pano";

    pub fn new(
        glove: Arc<dyn GloveDriver>,
        f_comp: Arc<FlightComputer>,
        config: &Config,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            glove,
            f_comp,
            thresholds: config.thresholds.clone(),
            debounce: config.gesture_debounce,
            idle_poll: config.idle_poll_interval,
            backoff: config.disconnect_backoff,
            cancel,
        }
    }

    pub async fn run(&self) {
        let hand = self.glove.handedness();
        info!("{hand} hand loop running.");
        loop {
            if self.cancel.is_cancelled() {
                break;
            }
            match self.poll_once().await {
                Ok(()) => {}
                Err(GloveError::Disconnected) => {
                    warn!("{hand} glove disconnected, landing as fail-safe.");
                    if let Err(e) = self.f_comp.land().await {
                        error!("Fail-safe landing failed: {e}");
                    }
                    tokio::select! {
                        () = self.cancel.cancelled() => break,
                        () = sleep(self.backoff) => {}
                    }
                }
                Err(GloveError::Interrupted) => break,
            }
        }
        self.glove.release().await;
        info!("{hand} hand loop stopped.");
    }

    /// One sample-classify-dispatch round.
    async fn poll_once(&self) -> Result<(), GloveError> {
        Haptics::prime(self.glove.as_ref()).await?;
        let snapshot = HandSnapshot::sample(self.glove.as_ref()).await?;
        let hand = self.glove.handedness();
        event!(
            "{hand} flexion {:?} orientation {:?}",
            snapshot.flexion(),
            snapshot.orientation()
        );

        let Some(gesture) = classify(hand, &snapshot, &self.thresholds) else {
            tokio::select! {
                () = self.cancel.cancelled() => {}
                () = sleep(self.idle_poll) => {}
            }
            return Ok(());
        };

        info!("{hand} hand: {gesture}");
        Haptics::acknowledge(self.glove.as_ref(), gesture).await;
        self.dispatch(gesture).await;

        // Debounce so a held pose does not re-trigger every poll.
        tokio::select! {
            () = self.cancel.cancelled() => {}
            () = sleep(self.debounce) => {}
        }
        Ok(())
    }

    async fn dispatch(&self, gesture: Gesture) {
        match gesture {
            Gesture::ThumbsUp => {
                info!("Taking off");
                if let Err(e) = self.f_comp.takeoff().await {
                    error!("Takeoff failed: {e}");
                }
            }
            Gesture::Peace => {
                info!("Sentry mode active");
                if let Err(e) = self.f_comp.pilot().set_skill(Self::SENTRY_SKILL).await {
                    warn!("Skill switch failed: {e}");
                }
            }
            Gesture::GoBulls => {
                info!("Scanning area");
                if let Err(e) = self.f_comp.pilot().set_skill(Self::PANO_SKILL).await {
                    warn!("Skill switch failed: {e}");
                }
            }
            Gesture::Halt => info!("Halt recognized, no skill bound."),
            Gesture::Land => {
                info!("Landing");
                if let Err(e) = self.f_comp.land().await {
                    error!("Landing failed: {e}");
                }
            }
        }
    }
}
