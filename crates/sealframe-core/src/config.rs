//! Codec configuration
//!
//! All tuning lives here and is passed into [`crate::Encoder`] /
//! [`crate::Decoder`] construction explicitly. The codec keeps no ambient
//! global state.

use std::time::Duration;

/// Configuration for encoder and decoder construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Maximum accepted message age on decode. `None` disables the
    /// freshness check entirely.
    pub freshness_window: Option<Duration>,

    /// How far ahead of the local clock a message timestamp may run
    /// before it is rejected as future-dated. Only enforced when a
    /// freshness window is configured.
    pub clock_skew_tolerance: Duration,

    /// Optional key identifier stamped into outgoing envelopes so a
    /// receiver holding several private keys can route without trial
    /// decryption. Advisory: the decoder does not enforce it.
    pub key_id: Option<String>,
}

impl CodecConfig {
    /// Default clock-skew tolerance (30 seconds).
    pub const DEFAULT_CLOCK_SKEW_TOLERANCE: Duration = Duration::from_secs(30);

    /// Configuration with a freshness window and default skew tolerance.
    #[must_use]
    pub fn with_freshness_window(window: Duration) -> Self {
        Self { freshness_window: Some(window), ..Self::default() }
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            freshness_window: None,
            clock_skew_tolerance: Self::DEFAULT_CLOCK_SKEW_TOLERANCE,
            key_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_disables_freshness_check() {
        let config = CodecConfig::default();
        assert_eq!(config.freshness_window, None);
        assert_eq!(config.clock_skew_tolerance, CodecConfig::DEFAULT_CLOCK_SKEW_TOLERANCE);
    }

    #[test]
    fn with_freshness_window_sets_window_only() {
        let config = CodecConfig::with_freshness_window(Duration::from_secs(60));
        assert_eq!(config.freshness_window, Some(Duration::from_secs(60)));
        assert_eq!(config.clock_skew_tolerance, CodecConfig::DEFAULT_CLOCK_SKEW_TOLERANCE);
        assert_eq!(config.key_id, None);
    }
}
