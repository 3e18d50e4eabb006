use crate::config::Config;
use crate::flight_control::fault_suppressor::FaultSuppressor;
use crate::flight_control::flight_phase::FlightPhase;
use crate::flight_control::pilot_client::PilotClient;
use crate::{error, info, log, warn};
use std::sync::Arc;
use std::time::Duration;
use strum_macros::Display;
use tokio::time::{Instant, sleep};

#[derive(Debug, Display)]
pub enum FlightError {
    /// The session holds less than pilot access, so flight commands would be
    /// rejected by the vehicle anyway.
    NotPilot,
    /// Takeoff did not reach FLYING within the configured wall-clock ceiling.
    TakeoffTimeout,
}

impl std::error::Error for FlightError {}

/// Drives the takeoff and landing state machines by polling the flight phase
/// through the pilot session.
pub struct FlightComputer {
    pilot: Arc<PilotClient>,
    /// Delay between phase polls while takeoff is in progress. Also the
    /// downsample that keeps the loop from spamming the endpoint.
    takeoff_poll_interval: Duration,
    /// Delay between land commands while the vehicle still reports FLYING.
    land_poll_interval: Duration,
    /// Optional wall-clock ceiling on the takeoff loop.
    takeoff_ceiling: Option<Duration>,
}

impl FlightComputer {
    pub fn new(pilot: Arc<PilotClient>, config: &Config) -> FlightComputer {
        FlightComputer {
            pilot,
            takeoff_poll_interval: config.takeoff_poll_interval,
            land_poll_interval: config.land_poll_interval,
            takeoff_ceiling: config.takeoff_ceiling,
        }
    }

    pub fn pilot(&self) -> Arc<PilotClient> { Arc::clone(&self.pilot) }

    /// Requests takeoff and blocks until the vehicle reports FLYING.
    ///
    /// Refreshes the session once, suppresses the phone-loss faults, then
    /// polls the phase: READY_FOR_GROUND_TAKEOFF gets the (idempotent) ground
    /// takeoff command, recognized intermediate phases are logged, and an
    /// unrecognized phase triggers a dump of the currently blocking faults.
    /// Without a configured ceiling the loop only exits on FLYING.
    pub async fn takeoff(&self) -> Result<(), FlightError> {
        if !self.pilot.is_pilot() {
            error!("Cannot takeoff: not pilot");
            return Err(FlightError::NotPilot);
        }

        if let Err(e) = self.pilot.refresh_status().await {
            warn!("Status refresh ahead of takeoff failed: {e}");
        }
        FaultSuppressor::suppress_phone_loss(&self.pilot).await;

        let deadline = self.takeoff_ceiling.map(|ceiling| Instant::now() + ceiling);
        loop {
            sleep(self.takeoff_poll_interval).await;
            if deadline.is_some_and(|d| Instant::now() >= d) {
                error!("Takeoff did not reach FLYING within the configured ceiling");
                return Err(FlightError::TakeoffTimeout);
            }

            let phase = match self.pilot.refresh_status().await {
                Ok(Some(phase)) => phase,
                Ok(None) => continue,
                Err(e) => {
                    warn!("Status refresh failed during takeoff: {e}");
                    continue;
                }
            };
            match phase {
                FlightPhase::ReadyForGroundTakeoff => {
                    info!("Publishing ground takeoff");
                    if let Err(e) = self.pilot.send_takeoff_command().await {
                        warn!("Ground takeoff command failed: {e}");
                    }
                }
                FlightPhase::Flying => {
                    info!("Flying.");
                    return Ok(());
                }
                FlightPhase::Rest => info!("On standby"),
                FlightPhase::FlightProcessesCheck => info!("Pre-flight check in progress"),
                FlightPhase::Prep => info!("Calibrating cameras"),
                FlightPhase::LoggingStart => info!("Initializing flight logs"),
                FlightPhase::Other(raw) => match self.pilot.blocking_faults().await {
                    Ok(faults) => log!("Phase {raw}, faults = {}", faults.join(",")),
                    Err(e) => warn!("Phase {raw}, fault readout failed: {e}"),
                },
            }
        }
    }

    /// Lands the vehicle and blocks until it is on the ground.
    ///
    /// Repeats the land command while the phase stays FLYING. An unreadable
    /// or absent phase counts as still flying; any other phase, recognized
    /// or not, means the vehicle is no longer airborne.
    pub async fn land(&self) -> Result<(), FlightError> {
        if !self.pilot.is_pilot() {
            error!("Cannot land: not pilot");
            return Err(FlightError::NotPilot);
        }

        loop {
            info!("Sending LAND");
            if let Err(e) = self.pilot.send_land_command().await {
                warn!("Land command failed: {e}");
            }
            sleep(self.land_poll_interval).await;
            match self.pilot.refresh_status().await {
                Ok(Some(FlightPhase::Flying)) | Ok(None) => {}
                Ok(Some(_)) => return Ok(()),
                Err(e) => warn!("Status refresh failed during landing: {e}"),
            }
        }
    }
}
