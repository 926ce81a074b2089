use std::error;
use std::fmt;

/// Error returned when a simulation parameter is outside its valid range.
///
/// Parameters are validated once, eagerly, when a
/// [`SimulationParameters`](crate::simulation::SimulationParameters) value is
/// constructed. A trajectory that has started can therefore no longer fail
/// validation.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidParameterError {
    /// Carrying capacity must be a positive count.
    CarryingCapacity(u64),
    /// Decay rate must lie in `[0, 1)`.
    DecayRate(f64),
    /// Mutation rate must lie in `[0, 1)`.
    MutationRate(f64),
    /// Migration rate must be finite and non-negative.
    MigrationRate(f64),
    /// Generation cap must be positive.
    MaxGenerations(usize),
    /// Replicate count must be positive.
    Replicates(usize),
}

impl fmt::Display for InvalidParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CarryingCapacity(k) => {
                write!(f, "Invalid carrying capacity: {k} (must be greater than 0)")
            }
            Self::DecayRate(d) => {
                write!(f, "Invalid decay rate: {d} (must be in [0, 1))")
            }
            Self::MutationRate(mu) => {
                write!(f, "Invalid mutation rate: {mu} (must be in [0, 1))")
            }
            Self::MigrationRate(m) => {
                write!(
                    f,
                    "Invalid migration rate: {m} (must be finite and non-negative)"
                )
            }
            Self::MaxGenerations(g) => {
                write!(f, "Invalid generation cap: {g} (must be greater than 0)")
            }
            Self::Replicates(n) => {
                write!(f, "Invalid replicate count: {n} (must be greater than 0)")
            }
        }
    }
}

impl error::Error for InvalidParameterError {}

/// Error returned when an aggregation is asked to reduce an empty batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyInputError;

impl fmt::Display for EmptyInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot aggregate an empty batch of values")
    }
}

impl error::Error for EmptyInputError {}

/// Error returned when a proportion is taken against a zero capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionByZeroError;

impl fmt::Display for DivisionByZeroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot take a proportion of a zero capacity")
    }
}

impl error::Error for DivisionByZeroError {}

/// Errors surfaced by the experiment runner.
///
/// A validation failure aborts the grid point it occurred on, and with it the
/// whole run, rather than silently emitting zeros.
#[derive(Debug, Clone, PartialEq)]
pub enum ExperimentError {
    /// A grid value produced an out-of-range parameter set.
    Parameter(InvalidParameterError),
    /// A replicate batch reduced to nothing.
    EmptyBatch(EmptyInputError),
}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parameter(e) => write!(f, "Experiment parameter error: {e}"),
            Self::EmptyBatch(e) => write!(f, "Experiment aggregation error: {e}"),
        }
    }
}

impl error::Error for ExperimentError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Parameter(e) => Some(e),
            Self::EmptyBatch(e) => Some(e),
        }
    }
}

impl From<InvalidParameterError> for ExperimentError {
    fn from(e: InvalidParameterError) -> Self {
        Self::Parameter(e)
    }
}

impl From<EmptyInputError> for ExperimentError {
    fn from(e: EmptyInputError) -> Self {
        Self::EmptyBatch(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = InvalidParameterError::DecayRate(1.5);
        let msg = format!("{err}");
        assert!(msg.contains("decay rate"));
        assert!(msg.contains("1.5"));
        assert!(msg.contains("[0, 1)"));
    }

    #[test]
    fn test_empty_input_display() {
        let msg = format!("{}", EmptyInputError);
        assert!(msg.contains("empty batch"));
    }

    #[test]
    fn test_division_by_zero_display() {
        let msg = format!("{}", DivisionByZeroError);
        assert!(msg.contains("zero capacity"));
    }

    #[test]
    fn test_experiment_error_from_parameter() {
        let err: ExperimentError = InvalidParameterError::MigrationRate(-1.0).into();
        assert!(matches!(err, ExperimentError::Parameter(_)));
        assert!(format!("{err}").contains("migration rate"));
    }

    #[test]
    fn test_experiment_error_source() {
        use std::error::Error;
        let err: ExperimentError = EmptyInputError.into();
        assert!(err.source().is_some());
    }
}
