//! Error types. None of these ever reach the host from an event handler;
//! the panel recovers from each locally.

/// A host fill that cannot be split into independent RGB channels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecompositionError {
    #[error("fill uses a grayscale-only color space")]
    Grayscale,

    #[error("fill is a pattern image ({0})")]
    Pattern(String),
}

/// Why a channel text field's contents were not taken as typed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChannelTextError {
    #[error("channel text is empty")]
    Empty,

    #[error("channel text {0:?} is not a number")]
    Unparseable(String),

    #[error("channel value {0} is outside 0–255")]
    OutOfRange(f64),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read panel config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse panel config: {0}")]
    Parse(#[from] toml::de::Error),
}
