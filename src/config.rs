use crate::glove_control::GestureThresholds;
use crate::http_handler::StreamSettings;
use crate::warn;
use std::{env, path::PathBuf, time::Duration};

/// Runtime configuration, assembled once at startup from environment variables
/// with compiled defaults. Every polling interval lives here rather than inline
/// at its call site so tests can shrink them.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root URL of the vehicle, e.g. `http://192.168.10.1` for a real R1 over
    /// WiFi or `https://sim####.sim.skydio.com` for a simulator.
    pub base_url: String,
    /// Path to the auth token file required for simulator access.
    pub token_file: Option<PathBuf>,
    /// Timeout applied to every vehicle HTTP round trip.
    pub request_timeout: Duration,
    /// Delay between keepalive status refreshes. The server drops the session
    /// after 10s of pilot silence, so this must stay well below that.
    pub keepalive_interval: Duration,
    /// Delay between phase polls while takeoff is in progress.
    pub takeoff_poll_interval: Duration,
    /// Delay between land commands while the vehicle still reports FLYING.
    pub land_poll_interval: Duration,
    /// Hold-off after a dispatched gesture so a held pose fires once.
    pub gesture_debounce: Duration,
    /// Pause between samples when no gesture is recognized.
    pub idle_poll_interval: Duration,
    /// Backoff after a glove disconnection before polling resumes.
    pub disconnect_backoff: Duration,
    /// Sampling period of the calibration stability check.
    pub calibration_interval: Duration,
    /// Settle delay before calibration starts sampling, so the gloves finish
    /// connecting first.
    pub calibration_settle: Duration,
    /// Pause between calibration completing and the hand loops starting.
    pub post_calibration_pause: Duration,
    /// Wall-clock ceiling on the takeoff loop. `None` keeps the loop unbounded.
    pub takeoff_ceiling: Option<Duration>,
    /// RTP stream configuration forwarded with every status refresh.
    pub stream_settings: Option<StreamSettings>,
    pub thresholds: GestureThresholds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://192.168.10.1".to_string(),
            token_file: None,
            request_timeout: Duration::from_secs(20),
            keepalive_interval: Duration::from_secs(2),
            takeoff_poll_interval: Duration::from_secs(2),
            land_poll_interval: Duration::from_secs(1),
            gesture_debounce: Duration::from_secs(2),
            idle_poll_interval: Duration::from_millis(25),
            disconnect_backoff: Duration::from_secs(1),
            calibration_interval: Duration::from_secs(1),
            calibration_settle: Duration::from_secs(5),
            post_calibration_pause: Duration::from_secs(3),
            takeoff_ceiling: None,
            stream_settings: Some(StreamSettings::native(55004)),
            thresholds: GestureThresholds::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(url) = env::var("R1_BASE_URL") {
            cfg.base_url = url;
        }
        cfg.token_file = env::var("R1_TOKEN_FILE").ok().map(PathBuf::from);
        if let Ok(port) = env::var("R1_STREAM_PORT") {
            cfg.stream_settings = match port.parse::<u16>() {
                Ok(0) => None,
                Ok(p) => Some(StreamSettings::native(p)),
                Err(_) => {
                    warn!("Ignoring unparsable R1_STREAM_PORT {port:?}");
                    cfg.stream_settings
                }
            };
        }
        if let Ok(secs) = env::var("GLOVEPILOT_TAKEOFF_CEILING_SECS") {
            match secs.parse::<u64>() {
                Ok(0) => cfg.takeoff_ceiling = None,
                Ok(s) => cfg.takeoff_ceiling = Some(Duration::from_secs(s)),
                Err(_) => warn!("Ignoring unparsable GLOVEPILOT_TAKEOFF_CEILING_SECS {secs:?}"),
            }
        }
        cfg
    }

    /// Reads and trims the simulator auth token, if a token file is configured.
    pub fn read_credentials(&self) -> Option<std::io::Result<String>> {
        self.token_file
            .as_ref()
            .map(|p| std::fs::read_to_string(p).map(|t| t.trim().to_string()))
    }
}
