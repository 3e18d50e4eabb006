use crate::flight_control::pilot_client::PilotClient;
use crate::warn;

/// One-shot suppression of the phone-link faults.
///
/// Without a mobile app connected over UDP the vehicle raises the phone-loss
/// fault pair and refuses to fly. Pinning both inactive lets a glove pilot
/// fly without any phone attached.
pub struct FaultSuppressor;

impl FaultSuppressor {
    /// Fault raised seconds after the phone link drops.
    const LOST_PHONE_COMMS_SHORT: u16 = 2;
    /// Fault raised once the phone link has been gone for a while.
    const LOST_PHONE_COMMS_LONG: u16 = 3;

    const PHONE_LOSS_FAULTS: [(&'static str, u16); 2] = [
        ("LOST_PHONE_COMMS_SHORT", Self::LOST_PHONE_COMMS_SHORT),
        ("LOST_PHONE_COMMS_LONG", Self::LOST_PHONE_COMMS_LONG),
    ];

    /// Tells the vehicle to ignore missing phone info. Failures are logged
    /// and not retried; the takeoff loop surfaces any fault that stays
    /// blocking.
    pub async fn suppress_phone_loss(pilot: &PilotClient) {
        for (name, fault_id) in Self::PHONE_LOSS_FAULTS {
            if let Err(e) = pilot.override_fault(fault_id).await {
                warn!("Failed to suppress fault {name} ({fault_id}): {e}");
            }
        }
    }
}
