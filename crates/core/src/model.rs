/// A deterministic, typed mapping from an input to an output.
///
/// [`RcCircuit`](crate::RcCircuit) is the model here: it maps elapsed time
/// to the charging and discharging capacitor voltages. Because a call has no
/// side effects, the sampler may evaluate it at any instant in any order.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the model at `input`.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the model cannot produce an output for
    /// `input`. A closed-form model uses [`std::convert::Infallible`].
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}
