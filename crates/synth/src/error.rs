//! Error types for the mtsynth-synth crate.

use mtsynth_modem::ModemError;

/// Error type for all fallible operations in the mtsynth-synth crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SynthError {
    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a tensor component cannot be found for a period/station pair.
    #[error("lookup failed for station {station} at period {period}: {source}")]
    Lookup {
        /// Period being processed.
        period: f64,
        /// Station being processed.
        station: String,
        /// Underlying lookup failure.
        #[source]
        source: ModemError,
    },

    /// Returned when the error distribution cannot be constructed.
    #[error("normal distribution failed (mean={mean}, sigma={sigma}): {message}")]
    Distribution {
        /// Requested mean.
        mean: f64,
        /// Requested standard deviation.
        sigma: f64,
        /// Description of the failure.
        message: String,
    },
}
