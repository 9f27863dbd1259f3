use rcsim_core::{Event, Observer};
use uom::si::{electric_potential::volt, time::second};

/// An observer that logs each sample at `TRACE` level.
///
/// Counts the samples it has seen so callers can confirm a run was observed.
#[derive(Debug, Default)]
pub struct TracingObserver {
    seen: usize,
}

impl TracingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events observed so far.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.seen
    }
}

impl Observer<Event> for TracingObserver {
    fn observe(&mut self, event: &Event) {
        self.seen += 1;
        tracing::trace!(
            step = event.step,
            t_s = event.sample.time.get::<second>(),
            charge_v = event.sample.charge.get::<volt>(),
            discharge_v = event.sample.discharge.get::<volt>(),
            "sample",
        );
    }
}

/// Allows `&mut TracingObserver` to be passed to the sampler, which takes its
/// observer by value.
impl Observer<Event> for &mut TracingObserver {
    fn observe(&mut self, event: &Event) {
        (*self).observe(event);
    }
}
