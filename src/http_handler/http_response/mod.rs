pub(crate) mod response_common;

pub mod active_faults;
pub mod async_command;
pub mod authentication;
pub mod channel;
pub mod custom_comms;
pub mod fault_override;
pub mod runmode;
pub mod set_skill;
pub mod shm;
pub mod status;
pub mod vehicle_config;
