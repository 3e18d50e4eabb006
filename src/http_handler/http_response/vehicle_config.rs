use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for configuration reads from the /status endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct VehicleConfigResponse {
    config: VehicleConfig,
}

#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct VehicleConfig {
    #[serde(default)]
    deploy_info: DeployInfo,
    /// Hostname of the LCM proxy for the UDP phone link.
    lcm_proxy_udp_hostname: Option<String>,
    /// Dynamically assigned port of the LCM proxy.
    lcm_proxy_udp_port: Option<u16>,
}

#[derive(serde::Deserialize, Debug, Default)]
struct DeployInfo {
    api_version_major: Option<f64>,
    api_version_minor: Option<f64>,
}

impl SerdeJSONBodyHTTPResponseType for VehicleConfigResponse {}

impl VehicleConfigResponse {
    /// Whether the deployed API version satisfies the given minimum. Missing
    /// version fields count as too old.
    pub(crate) fn meets_min_api_version(&self, major: f64, minor: f64) -> bool {
        let info = &self.config.deploy_info;
        info.api_version_major.is_some_and(|v| v >= major)
            && info.api_version_minor.is_some_and(|v| v >= minor)
    }

    /// Proxy hostname, with the empty string treated as not reported.
    pub(crate) fn udp_hostname(&self) -> Option<&str> {
        self.config.lcm_proxy_udp_hostname.as_deref().filter(|h| !h.is_empty())
    }

    pub(crate) fn udp_port(&self) -> Option<u16> { self.config.lcm_proxy_udp_port }
}
