use crate::config::Config;
use crate::flight_control::pilot_client::PilotClient;
use crate::{error, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

/// Background housekeeping for the pilot session.
///
/// Owns the process-wide cancellation token and the keepalive loop that
/// stops the vehicle from expiring the session while the hand loops are
/// busy elsewhere.
pub struct Supervisor {
    pilot: Arc<PilotClient>,
    /// Delay between keepalive refreshes, well below the 10 s server expiry.
    keepalive_interval: Duration,
    cancel: CancellationToken,
}

impl Supervisor {
    /// Creates a new instance of `Supervisor`.
    pub fn new(pilot: Arc<PilotClient>, config: &Config) -> Supervisor {
        Supervisor {
            pilot,
            keepalive_interval: config.keepalive_interval,
            cancel: CancellationToken::new(),
        }
    }

    /// Token tripped once the operator interrupt arrives. Every polling task
    /// holds a clone and exits when it fires.
    pub fn cancellation_token(&self) -> CancellationToken { self.cancel.clone() }

    /// Periodically refreshes the pilot session until cancellation.
    ///
    /// Failures are logged and the loop keeps going; a dropped session
    /// re-establishes itself on the next successful refresh. An in-flight
    /// refresh finishes (or times out) before cancellation takes effect.
    pub async fn run_keepalive(&self) {
        loop {
            if let Err(e) = self.pilot.refresh_status().await {
                warn!("Session keepalive failed: {e}");
            }
            tokio::select! {
                () = self.cancel.cancelled() => {
                    info!("Keepalive loop shutting down.");
                    return;
                }
                () = sleep(self.keepalive_interval) => {}
            }
        }
    }

    /// Waits for the operator interrupt (Ctrl-C) and trips the cancellation
    /// token so every polling task releases its device handle and exits.
    pub async fn run_interrupt_watch(&self) {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Interrupt received, shutting down."),
            Err(e) => error!("Cannot listen for interrupt, shutting down: {e}"),
        }
        self.cancel.cancel();
    }
}
