use crate::config::Config;
use crate::flight_control::{AuthError, FlightComputer, PilotClient, Supervisor};
use crate::http_handler::http_client::HTTPClient;
use std::sync::Arc;

/// Struct representing the key components of the application, providing access
/// to the HTTP client, the authenticated pilot session, the flight computer
/// and the session supervisor.
#[derive(Clone)]
pub struct Keychain {
    /// The HTTP client for performing network requests.
    client: Arc<HTTPClient>,
    /// The authenticated control session against the vehicle.
    pilot: Arc<PilotClient>,
    /// The flight computer driving takeoff and landing.
    f_comp: Arc<FlightComputer>,
    /// Keepalive and shutdown housekeeping around the session.
    supervisor: Arc<Supervisor>,
}

impl Keychain {
    /// Creates a new instance of `Keychain` asynchronously, authenticating
    /// against the vehicle for the pilot seat.
    ///
    /// # Arguments
    /// - `config`: The runtime configuration holding the vehicle base URL.
    ///
    /// # Returns
    /// A new instance of `Keychain` containing initialized subsystems, or the
    /// authentication error if the vehicle denied the pilot seat.
    pub async fn new(config: &Config) -> Result<Self, AuthError> {
        let client = Arc::new(HTTPClient::new(&config.base_url, config.request_timeout));
        let pilot = Arc::new(PilotClient::authenticate(Arc::clone(&client), true, config).await?);
        let f_comp = Arc::new(FlightComputer::new(Arc::clone(&pilot), config));
        let supervisor = Arc::new(Supervisor::new(Arc::clone(&pilot), config));
        Ok(Self { client, pilot, f_comp, supervisor })
    }

    /// Provides a cloned reference to the HTTP client.
    pub fn client(&self) -> Arc<HTTPClient> { Arc::clone(&self.client) }

    /// Provides a cloned reference to the pilot session.
    pub fn pilot(&self) -> Arc<PilotClient> { Arc::clone(&self.pilot) }

    /// Provides a cloned reference to the flight computer.
    pub fn f_comp(&self) -> Arc<FlightComputer> { Arc::clone(&self.f_comp) }

    /// Provides a cloned reference to the session supervisor.
    pub fn supervisor(&self) -> Arc<Supervisor> { Arc::clone(&self.supervisor) }
}
