use crate::config::Config;
use crate::flight_control::{FlightComputer, PilotClient};
use crate::glove_control::calibration::Calibrator;
use crate::glove_control::driver::{EulerAngles, GloveDriver, GloveError, Handedness};
use crate::glove_control::input_loop::HandLoop;
use crate::http_handler::http_client::HTTPClient;
use crate::test_util::StubVehicle;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Glove that replays scripted sensor readings.
///
/// Each sensor hands out its queued results in order; a drained queue
/// reads as an operator interrupt, which gives every loop under test a
/// deterministic exit.
struct ScriptedGlove {
    handedness: Handedness,
    fingers: Mutex<VecDeque<Result<[f32; 5], GloveError>>>,
    angles: Mutex<VecDeque<Result<EulerAngles, GloveError>>>,
    polls: AtomicUsize,
    angle_reads: AtomicUsize,
    flat_calibrations: AtomicUsize,
    imu_homings: AtomicUsize,
    released: AtomicBool,
}

impl ScriptedGlove {
    fn new(
        handedness: Handedness,
        fingers: Vec<Result<[f32; 5], GloveError>>,
        angles: Vec<Result<EulerAngles, GloveError>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            handedness,
            fingers: Mutex::new(fingers.into()),
            angles: Mutex::new(angles.into()),
            polls: AtomicUsize::new(0),
            angle_reads: AtomicUsize::new(0),
            flat_calibrations: AtomicUsize::new(0),
            imu_homings: AtomicUsize::new(0),
            released: AtomicBool::new(false),
        })
    }
}

#[async_trait]
impl GloveDriver for ScriptedGlove {
    fn handedness(&self) -> Handedness { self.handedness }

    async fn fingers_normalized(&self) -> Result<[f32; 5], GloveError> {
        self.polls.fetch_add(1, Ordering::Relaxed);
        self.fingers.lock().unwrap().pop_front().unwrap_or(Err(GloveError::Interrupted))
    }

    async fn euler_angles(&self) -> Result<EulerAngles, GloveError> {
        self.angle_reads.fetch_add(1, Ordering::Relaxed);
        self.angles.lock().unwrap().pop_front().unwrap_or(Err(GloveError::Interrupted))
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

    async fn silence_haptics(&self) -> Result<(), GloveError> { Ok(()) }

    async fn calibrate_flat(&self) -> Result<(), GloveError> {
        self.flat_calibrations.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    async fn home_imu(&self) -> Result<(), GloveError> {
        self.imu_homings.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    async fn release(&self) { self.released.store(true, Ordering::Relaxed); }
}

fn tilted(pitch: f32, yaw: f32) -> EulerAngles {
    EulerAngles { roll: 0.0, pitch, yaw }
}

fn fast_config(base_url: &str) -> Config {
    Config {
        base_url: base_url.to_string(),
        request_timeout: Duration::from_secs(5),
        takeoff_poll_interval: Duration::from_millis(5),
        land_poll_interval: Duration::from_millis(5),
        gesture_debounce: Duration::from_millis(5),
        idle_poll_interval: Duration::from_millis(5),
        disconnect_backoff: Duration::from_millis(5),
        ..Config::default()
    }
}

async fn flight_computer(config: &Config) -> Arc<FlightComputer> {
    let client = Arc::new(HTTPClient::new(&config.base_url, config.request_timeout));
    let pilot = Arc::new(PilotClient::authenticate(client, true, config).await.unwrap());
    Arc::new(FlightComputer::new(pilot, config))
}

#[tokio::test]
async fn test_hand_loop_exits_when_cancelled() {
    let stub = StubVehicle::spawn(&[]).await;
    let config = fast_config(stub.base_url());
    let f_comp = flight_computer(&config).await;
    let glove = ScriptedGlove::new(Handedness::Left, vec![], vec![]);
    let cancel = CancellationToken::new();
    cancel.cancel();

    HandLoop::new(glove.clone(), f_comp, &config, cancel).run().await;

    assert_eq!(glove.polls.load(Ordering::Relaxed), 0);
    assert!(glove.released.load(Ordering::Relaxed));
    // Only the authentication handshake reached the vehicle.
    assert_eq!(stub.requests().len(), 1);
}

#[tokio::test]
async fn test_disconnect_lands_once_then_resumes() {
    let stub = StubVehicle::spawn(&["REST"]).await;
    let config = fast_config(stub.base_url());
    let f_comp = flight_computer(&config).await;
    // One dropped read, then a neutral pose, then the script runs out.
    let glove = ScriptedGlove::new(
        Handedness::Left,
        vec![Err(GloveError::Disconnected), Ok([0.3; 5])],
        vec![Ok(EulerAngles::default())],
    );

    HandLoop::new(glove.clone(), f_comp, &config, CancellationToken::new()).run().await;

    // Exactly one fail-safe landing, then polling resumed.
    assert_eq!(stub.count_command("land"), 1);
    assert_eq!(glove.polls.load(Ordering::Relaxed), 3);
    assert!(glove.released.load(Ordering::Relaxed));
}

#[tokio::test]
async fn test_open_palm_dispatches_land() {
    let stub = StubVehicle::spawn(&["FLYING", "REST"]).await;
    let config = fast_config(stub.base_url());
    let f_comp = flight_computer(&config).await;
    let glove = ScriptedGlove::new(
        Handedness::Right,
        vec![Ok([0.0; 5])],
        vec![Ok(EulerAngles::default())],
    );

    HandLoop::new(glove.clone(), f_comp, &config, CancellationToken::new()).run().await;

    // Land repeats while the vehicle still reports FLYING.
    assert_eq!(stub.count_command("land"), 2);
    assert_eq!(stub.count_path("/api/status"), 2);
    assert!(glove.released.load(Ordering::Relaxed));
}

#[tokio::test]
async fn test_thumbs_up_triggers_takeoff() {
    let stub = StubVehicle::spawn(&["REST", "FLYING"]).await;
    let config = fast_config(stub.base_url());
    let f_comp = flight_computer(&config).await;
    // Left-hand thumbs up rolled leftward past the yaw gate.
    let glove = ScriptedGlove::new(
        Handedness::Left,
        vec![Ok([0.0, 0.5, 0.5, 0.5, 0.5])],
        vec![Ok(tilted(0.0, 75.0))],
    );

    HandLoop::new(glove.clone(), f_comp, &config, CancellationToken::new()).run().await;

    // REST was eaten by the pre-takeoff refresh, FLYING ended the loop, so
    // the takeoff command itself was never due.
    assert_eq!(stub.count_path("/api/status"), 2);
    assert_eq!(stub.count_command("ground_takeoff"), 0);
    assert_eq!(stub.count_path("/api/set_fault_override/2"), 1);
    assert_eq!(stub.count_path("/api/set_fault_override/3"), 1);
}

#[tokio::test]
async fn test_peace_switches_to_sentry_skill() {
    let stub = StubVehicle::spawn(&[]).await;
    let config = fast_config(stub.base_url());
    let f_comp = flight_computer(&config).await;
    // Peace reads the same at any wrist orientation.
    let glove = ScriptedGlove::new(
        Handedness::Right,
        vec![Ok([0.1, 0.0, 0.0, 0.35, 0.35])],
        vec![Ok(tilted(90.0, -40.0))],
    );

    HandLoop::new(glove.clone(), f_comp, &config, CancellationToken::new()).run().await;

    assert_eq!(stub.count_path("/api/set_skill/security_bot"), 1);
}

#[tokio::test]
async fn test_go_bulls_requests_pano() {
    let stub = StubVehicle::spawn(&[]).await;
    let config = fast_config(stub.base_url());
    let f_comp = flight_computer(&config).await;
    let glove = ScriptedGlove::new(
        Handedness::Right,
        vec![Ok([0.2, 0.1, 0.5, 0.5, 0.05])],
        vec![Ok(tilted(-60.0, 0.0))],
    );

    HandLoop::new(glove.clone(), f_comp, &config, CancellationToken::new()).run().await;

    assert_eq!(stub.count_path("/api/set_skill/pano"), 1);
}

#[tokio::test]
async fn test_halt_keeps_the_vehicle_untouched() {
    let stub = StubVehicle::spawn(&[]).await;
    let config = fast_config(stub.base_url());
    let f_comp = flight_computer(&config).await;
    let glove = ScriptedGlove::new(
        Handedness::Right,
        vec![Ok([0.6; 5])],
        vec![Ok(tilted(-60.0, 0.0))],
    );

    HandLoop::new(glove.clone(), f_comp, &config, CancellationToken::new()).run().await;

    // Halt has no bound skill; nothing beyond authentication goes out.
    assert_eq!(stub.requests().len(), 1);
    assert!(glove.released.load(Ordering::Relaxed));
}

#[tokio::test(start_paused = true)]
async fn test_calibration_waits_for_still_hands() {
    let left = ScriptedGlove::new(
        Handedness::Left,
        vec![],
        vec![Ok(tilted(0.0, 0.0)), Ok(tilted(0.0, 50.0)), Ok(tilted(0.0, 52.0))],
    );
    let right = ScriptedGlove::new(
        Handedness::Right,
        vec![],
        vec![Ok(tilted(0.0, 0.0)), Ok(tilted(0.0, 0.0)), Ok(tilted(0.0, 1.0))],
    );
    let calibrator = Calibrator::new(
        left.clone(),
        right.clone(),
        &Config::default(),
        CancellationToken::new(),
    );

    calibrator.run().await.unwrap();

    // The first sample only seeds the comparison and the second still moved,
    // so zeroing happened on the third, once per glove.
    for glove in [&left, &right] {
        assert_eq!(glove.angle_reads.load(Ordering::Relaxed), 3);
        assert_eq!(glove.flat_calibrations.load(Ordering::Relaxed), 1);
        assert_eq!(glove.imu_homings.load(Ordering::Relaxed), 1);
    }
}

#[tokio::test(start_paused = true)]
async fn test_calibration_retries_after_disconnect() {
    let left = ScriptedGlove::new(
        Handedness::Left,
        vec![],
        vec![Err(GloveError::Disconnected), Ok(tilted(0.0, 0.0)), Ok(tilted(0.0, 1.0))],
    );
    let right = ScriptedGlove::new(
        Handedness::Right,
        vec![],
        vec![Ok(tilted(0.0, 0.0)), Ok(tilted(0.0, 1.0))],
    );
    let calibrator = Calibrator::new(
        left.clone(),
        right.clone(),
        &Config::default(),
        CancellationToken::new(),
    );

    calibrator.run().await.unwrap();

    // The dropped read voided the whole iteration: the right glove was not
    // sampled and no stale baseline survived into the retry.
    assert_eq!(left.angle_reads.load(Ordering::Relaxed), 3);
    assert_eq!(right.angle_reads.load(Ordering::Relaxed), 2);
    assert_eq!(left.flat_calibrations.load(Ordering::Relaxed), 1);
    assert_eq!(right.flat_calibrations.load(Ordering::Relaxed), 1);
}

#[tokio::test(start_paused = true)]
async fn test_calibration_skipped_when_cancelled() {
    let left = ScriptedGlove::new(Handedness::Left, vec![], vec![]);
    let right = ScriptedGlove::new(Handedness::Right, vec![], vec![]);
    let cancel = CancellationToken::new();
    cancel.cancel();
    let calibrator = Calibrator::new(left.clone(), right.clone(), &Config::default(), cancel);

    calibrator.run().await.unwrap();

    assert_eq!(left.angle_reads.load(Ordering::Relaxed), 0);
    assert_eq!(left.flat_calibrations.load(Ordering::Relaxed), 0);
}
