use super::SamplePoint;

/// Event emitted by the sampler for each sample.
///
/// Step 0 is the initial sample at `t = 0`.
/// Steps 1..=N follow at uniform spacing, ending at the simulated duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number (0 for the initial sample).
    pub step: usize,

    /// The sample computed at this step.
    pub sample: SamplePoint,
}
