use std::fmt;

/// Phase of the vehicle flight stack as reported by the status keepalive.
///
/// The wire strings are SCREAMING_SNAKE; anything this build does not know is
/// carried through verbatim in `Other` so the takeoff loop can surface it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum FlightPhase {
    Rest,
    FlightProcessesCheck,
    Prep,
    LoggingStart,
    ReadyForGroundTakeoff,
    Flying,
    Other(String),
}

impl From<&str> for FlightPhase {
    fn from(value: &str) -> Self {
        match value {
            "REST" => FlightPhase::Rest,
            "FLIGHT_PROCESSES_CHECK" => FlightPhase::FlightProcessesCheck,
            "PREP" => FlightPhase::Prep,
            "LOGGING_START" => FlightPhase::LoggingStart,
            "READY_FOR_GROUND_TAKEOFF" => FlightPhase::ReadyForGroundTakeoff,
            "FLYING" => FlightPhase::Flying,
            other => FlightPhase::Other(String::from(other)),
        }
    }
}

impl FlightPhase {
    /// The wire representation the vehicle reports.
    pub fn as_wire_str(&self) -> &str {
        match self {
            FlightPhase::Rest => "REST",
            FlightPhase::FlightProcessesCheck => "FLIGHT_PROCESSES_CHECK",
            FlightPhase::Prep => "PREP",
            FlightPhase::LoggingStart => "LOGGING_START",
            FlightPhase::ReadyForGroundTakeoff => "READY_FOR_GROUND_TAKEOFF",
            FlightPhase::Flying => "FLYING",
            FlightPhase::Other(raw) => raw,
        }
    }
}

impl fmt::Display for FlightPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}
