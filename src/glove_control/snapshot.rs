use crate::glove_control::driver::{EulerAngles, GloveDriver, GloveError};

/// One synchronized reading of a glove's finger and orientation sensors.
///
/// Flexion values are rounded to four decimals on capture so that downstream
/// threshold comparisons see the same figures the operator sees in traces.
#[derive(Debug, Copy, Clone)]
pub struct HandSnapshot {
    flexion: [f32; 5],
    orientation: EulerAngles,
}

fn round4(val: f32) -> f32 { (val * 10_000.0).round() / 10_000.0 }

impl HandSnapshot {
    pub fn new(flexion: [f32; 5], orientation: EulerAngles) -> Self {
        Self { flexion: flexion.map(round4), orientation }
    }

    /// Samples both sensor groups from `glove`.
    pub async fn sample(glove: &dyn GloveDriver) -> Result<Self, GloveError> {
        let flexion = glove.fingers_normalized().await?;
        let orientation = glove.euler_angles().await?;
        Ok(Self::new(flexion, orientation))
    }

    pub fn thumb(&self) -> f32 { self.flexion[0] }
    pub fn index(&self) -> f32 { self.flexion[1] }
    pub fn middle(&self) -> f32 { self.flexion[2] }
    pub fn ring(&self) -> f32 { self.flexion[3] }
    pub fn pinky(&self) -> f32 { self.flexion[4] }

    pub fn flexion(&self) -> &[f32; 5] { &self.flexion }

    /// Sum over all five fingers.
    pub fn flexion_sum(&self) -> f32 { self.flexion.iter().sum() }

    pub fn orientation(&self) -> &EulerAngles { &self.orientation }
}
