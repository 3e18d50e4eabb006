use super::http_response::{
    active_faults, async_command, authentication, channel, custom_comms, fault_override, runmode,
    set_skill, shm, status, vehicle_config,
};

pub mod active_faults_get;
pub mod async_command_post;
pub mod authentication_post;
pub mod channel_get;
pub mod custom_comms_post;
pub mod fault_override_post;
pub mod request_common;
pub mod runmode_post;
pub mod set_skill_post;
pub mod shm_get;
pub mod status_get;
pub mod status_post;
