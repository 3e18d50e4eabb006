use crate::config::Config;
use crate::flight_control::flight_phase::FlightPhase;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::{
    active_faults_get::ActiveFaultsRequest,
    async_command_post::AsyncCommandRequest,
    authentication_post::AuthenticationRequest,
    channel_get::ChannelRequest,
    custom_comms_post::CustomCommsRequest,
    fault_override_post::FaultOverrideRequest,
    request_common::{JSONBodyHTTPRequestType, NoBodyHTTPRequestType},
    runmode_post::RunModeRequest,
    set_skill_post::SetSkillRequest,
    shm_get::ShmRequest,
    status_get::VehicleConfigRequest,
    status_post::PilotStatusRequest,
};
use crate::http_handler::http_response::channel::ChannelImage;
use crate::http_handler::{HTTPError, StreamSettings};
use crate::{error, info, warn};
use std::sync::Arc;
use strum_macros::Display;
use tokio::sync::Mutex;

/// Access level the vehicle granted at authentication.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessLevel {
    None,
    Phone,
    Pilot,
}

impl From<&str> for AccessLevel {
    fn from(value: &str) -> Self {
        match value {
            "PILOT" => AccessLevel::Pilot,
            "PHONE" => AccessLevel::Phone,
            _ => AccessLevel::None,
        }
    }
}

#[derive(Debug, Display)]
pub enum AuthError {
    /// Pilot access was requested but the vehicle granted less.
    Unauthorized(AccessLevel),
    /// The configured token file could not be read.
    TokenFile(std::io::Error),
    /// The authentication round trip itself failed.
    Transport(HTTPError),
}

impl std::error::Error for AuthError {}

impl From<HTTPError> for AuthError {
    fn from(value: HTTPError) -> Self { Self::Transport(value) }
}

/// The authenticated control session against one vehicle.
///
/// Owns every piece of session state: the stable client id, the granted
/// access level and the server-issued session handle. The session handle sits
/// behind a mutex so concurrent status refreshes serialize instead of racing
/// each other with stale handles.
#[derive(Debug)]
pub struct PilotClient {
    client: Arc<HTTPClient>,
    client_id: String,
    access_level: AccessLevel,
    session_id: Mutex<Option<String>>,
    stream_settings: Option<StreamSettings>,
}

impl PilotClient {
    /// Channel publishing the latest color image from the native camera rig.
    pub const SUBJECT_CAMERA_CHANNEL: &'static str = "SUBJECT_CAMERA_RIG_NATIVE";

    /// Authenticates against the vehicle and wraps the granted session.
    ///
    /// Construction and authentication are one step so an unauthenticated
    /// client cannot exist. With `request_pilot` the vehicle is asked for the
    /// full pilot seat (commandeering it if someone else holds it), otherwise
    /// for phone-level access.
    pub async fn authenticate(
        client: Arc<HTTPClient>,
        request_pilot: bool,
        config: &Config,
    ) -> Result<Self, AuthError> {
        let credentials = match config.read_credentials() {
            Some(Ok(token)) => Some(token),
            Some(Err(e)) => return Err(AuthError::TokenFile(e)),
            None => None,
        };
        let client_id = uuid::Uuid::new_v4().to_string();
        let request = AuthenticationRequest {
            client_id: client_id.clone(),
            requested_level: if request_pilot {
                AuthenticationRequest::PILOT_LEVEL
            } else {
                AuthenticationRequest::PHONE_LEVEL
            },
            commandeer: true,
            credentials,
        };
        let response = request.send_request(&client).await?;
        let access_level = response.access_level().map_or(AccessLevel::None, AccessLevel::from);
        if request_pilot && access_level != AccessLevel::Pilot {
            return Err(AuthError::Unauthorized(access_level));
        }
        if let Some(token) = response.access_token() {
            client.set_access_token(token.to_string());
            info!("Received access token, authenticated as {access_level}.");
        } else {
            warn!("Vehicle granted {access_level} without an access token.");
        }
        Ok(Self {
            client,
            client_id,
            access_level,
            session_id: Mutex::new(None),
            stream_settings: config.stream_settings.clone(),
        })
    }

    pub fn access_level(&self) -> AccessLevel { self.access_level }

    pub fn is_pilot(&self) -> bool { self.access_level == AccessLevel::Pilot }

    pub fn client_id(&self) -> &str { &self.client_id }

    /// The session handle from the most recent status exchange.
    pub async fn session_id(&self) -> Option<String> { self.session_id.lock().await.clone() }

    /// Pings the vehicle to keep the pilot session alive and reads back the
    /// current flight phase.
    ///
    /// The vehicle expires the session after ten seconds of pilot silence.
    /// The session mutex is held across the whole round trip, so overlapping
    /// refreshes serialize and the stored handle is always the one from the
    /// latest completed exchange.
    pub async fn refresh_status(&self) -> Result<Option<FlightPhase>, HTTPError> {
        let mut session_id = self.session_id.lock().await;
        let request = PilotStatusRequest::new(session_id.clone(), self.stream_settings.clone());
        let response = request.send_request(&self.client).await?;
        let (new_session_id, phase) = response.into_parts();
        *session_id = Some(new_session_id);
        Ok(phase.map(|p| FlightPhase::from(p.as_str())))
    }

    /// Asks the flight stack to lift off. Only honored while the phase is
    /// READY_FOR_GROUND_TAKEOFF; harmless otherwise.
    pub async fn send_takeoff_command(&self) -> Result<(), HTTPError> {
        AsyncCommandRequest::ground_takeoff().send_request(&self.client).await
    }

    /// Asks the flight stack to descend and land at the current position.
    pub async fn send_land_command(&self) -> Result<(), HTTPError> {
        AsyncCommandRequest::land().send_request(&self.client).await
    }

    /// Names of the faults the vehicle currently marks relevant for flight.
    pub async fn blocking_faults(&self) -> Result<Vec<String>, HTTPError> {
        let response = ActiveFaultsRequest {}.send_request(&self.client).await?;
        Ok(response.blocking_names().into_iter().map(String::from).collect())
    }

    /// Pins the given fault inactive regardless of its real state.
    pub async fn override_fault(&self, fault_id: u16) -> Result<(), HTTPError> {
        FaultOverrideRequest::suppress(fault_id).send_request(&self.client).await
    }

    /// Requests a specific skill to become active. Refused below pilot level,
    /// mirroring the vehicle's own check.
    pub async fn set_skill(&self, skill_key: &str) -> Result<(), HTTPError> {
        if !self.is_pilot() {
            error!("Cannot switch skills: not pilot");
            return Ok(());
        }
        info!("Requesting {skill_key} skill");
        SetSkillRequest::new(skill_key).send_request(&self.client).await
    }

    /// Sends opaque bytes to a skill running on the vehicle and returns its
    /// decoded reply, if any. Best-effort RPC: every failure is logged and
    /// swallowed.
    pub async fn send_custom_comms(
        &self,
        skill_key: &str,
        data: &[u8],
        no_response: bool,
    ) -> Option<Vec<u8>> {
        let request = CustomCommsRequest::new(skill_key, data, no_response);
        match request.send_request(&self.client).await {
            Ok(response) => match response.decode_data() {
                Ok(payload) => payload,
                Err(e) => {
                    warn!("Comms reply carried invalid base64: {e}");
                    None
                }
            },
            Err(e) => {
                warn!("Comms error: {e}");
                None
            }
        }
    }

    /// Switches the vehicle run mode, either making it the default or tearing
    /// the current mode down and starting the new one.
    pub async fn set_run_mode(&self, mode_name: &str, set_default: bool) -> Result<(), HTTPError> {
        let request = if set_default {
            RunModeRequest::set_default(mode_name)
        } else {
            RunModeRequest::terminate_and_start(mode_name)
        };
        let reply = request.send_request(&self.client).await?;
        info!("Run mode reply: {}", reply.reply());
        Ok(())
    }

    /// Whether the deployed vehicle API satisfies the given minimum version.
    pub async fn check_min_api_version(&self, major: f64, minor: f64) -> Result<bool, HTTPError> {
        let response = VehicleConfigRequest {}.send_request(&self.client).await?;
        Ok(response.meets_min_api_version(major, minor))
    }

    /// Hostname and dynamically assigned port of the UDP phone link, the
    /// hostname falling back to the base URL host when the vehicle reports
    /// none.
    pub async fn udp_link_address(&self) -> Result<(String, Option<u16>), HTTPError> {
        let response = VehicleConfigRequest {}.send_request(&self.client).await?;
        let host = response
            .udp_hostname()
            .map_or_else(|| self.client.host().to_string(), String::from);
        Ok((host, response.udp_port()))
    }

    /// Image metadata currently published on the given camera channel.
    pub async fn channel_images(&self, channel: &str) -> Result<Vec<ChannelImage>, HTTPError> {
        let response = ChannelRequest::new(channel).send_request(&self.client).await?;
        Ok(response.images().to_vec())
    }

    /// Raw bytes behind a shared-memory path from channel image metadata.
    /// Uncompressed pixel data over HTTP, so not a high-rate image path.
    pub async fn fetch_shm(&self, path: &str) -> Result<Vec<u8>, HTTPError> {
        ShmRequest::new(path).send_request(&self.client).await
    }
}
