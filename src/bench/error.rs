use std::fmt;

#[derive(Debug)]
pub enum BenchError {
    /// Elapsed time was zero or non-finite; the measurement says nothing
    /// about bandwidth and must not be reported as a number.
    InconclusiveTiming { elapsed_ms: f64 },
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::InconclusiveTiming { elapsed_ms } => write!(
                f,
                "Inconclusive measurement: elapsed time {} ms cannot yield a bandwidth figure",
                elapsed_ms
            ),
        }
    }
}

impl std::error::Error for BenchError {}
