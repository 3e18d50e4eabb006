#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod config;
mod flight_control;
mod glove_control;
mod http_handler;
mod keychain;
mod logger;
#[cfg(test)]
mod test_util;

use crate::config::Config;
use crate::glove_control::{Calibrator, GloveDriver, HandLoop, Handedness, SimGlove};
use crate::keychain::Keychain;
use std::sync::Arc;
use tokio::time::sleep;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let config = Config::from_env();
    info!("Connecting to vehicle at {}", config.base_url);
    let keychain = match Keychain::new(&config).await {
        Ok(keychain) => keychain,
        Err(e) => fatal!("Vehicle authentication failed: {e}"),
    };

    let supervisor = keychain.supervisor();
    let cancel = supervisor.cancellation_token();
    let interrupt_watch = {
        let sv = Arc::clone(&supervisor);
        tokio::spawn(async move { sv.run_interrupt_watch().await })
    };

    let left: Arc<dyn GloveDriver> = Arc::new(SimGlove::new(Handedness::Left));
    let right: Arc<dyn GloveDriver> = Arc::new(SimGlove::new(Handedness::Right));

    let calibrator =
        Calibrator::new(Arc::clone(&left), Arc::clone(&right), &config, cancel.clone());
    if let Err(e) = calibrator.run().await {
        warn!("Calibration aborted: {e}");
        cancel.cancel();
    }
    if cancel.is_cancelled() {
        left.release().await;
        right.release().await;
        return;
    }
    sleep(config.post_calibration_pause).await;

    let keepalive = {
        let sv = Arc::clone(&supervisor);
        tokio::spawn(async move { sv.run_keepalive().await })
    };
    let left_loop = {
        let hand_loop = HandLoop::new(left, keychain.f_comp(), &config, cancel.clone());
        tokio::spawn(async move { hand_loop.run().await })
    };
    let right_loop = {
        let hand_loop = HandLoop::new(right, keychain.f_comp(), &config, cancel.clone());
        tokio::spawn(async move { hand_loop.run().await })
    };

    // Hand loops release their gloves themselves on the way out.
    let _ = tokio::join!(left_loop, right_loop);
    cancel.cancel();
    let _ = keepalive.await;
    interrupt_watch.abort();
    info!("Shutdown complete.");
}
