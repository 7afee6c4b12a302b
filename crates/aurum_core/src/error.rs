use thiserror::Error;

/// Errors produced when reading CSS color or shadow notation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expected `oklch(...)`, found `{0}`")]
    NotOklch(String),

    #[error("`{input}` has {found} channels, expected 3")]
    ChannelCount { input: String, found: usize },

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("invalid length `{0}`, expected `0` or a px value")]
    InvalidLength(String),

    #[error("{channel} {value} is out of range")]
    OutOfRange { channel: &'static str, value: f32 },

    #[error("shadow layer `{0}` needs 2 to 4 lengths followed by a color")]
    ShadowLayer(String),
}
