mod fault_suppressor;
mod flight_computer;
mod flight_phase;
mod pilot_client;
mod supervisor;

pub use fault_suppressor::FaultSuppressor;
pub use flight_computer::{FlightComputer, FlightError};
pub use flight_phase::FlightPhase;
pub use pilot_client::{AccessLevel, AuthError, PilotClient};
pub use supervisor::Supervisor;
