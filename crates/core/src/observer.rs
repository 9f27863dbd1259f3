/// Receives events emitted while a simulation runs.
///
/// Observers are the seam between the sampler and anything that wants to
/// watch it work: a logger, a chart, a progress display. The unit type `()`
/// is a no-op observer, and any `FnMut(&E)` closure is an observer.
pub trait Observer<E> {
    /// Handles a single event.
    fn observe(&mut self, event: &E);
}

impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}

impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}
