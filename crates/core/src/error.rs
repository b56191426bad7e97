//! Error types.

/// Caller misuse detected while validating [`Options`](crate::Options).
///
/// Unparseable input is never an error; it is reported as `None` from the
/// parse methods. This type covers the option values a typed struct cannot
/// rule out at compile time.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    /// `endian_precedence` must name at least one date order to try.
    #[error("endian_precedence must not be empty")]
    EmptyEndianPrecedence,

    /// The ambiguous-time window is an hour of the day, 0 through 12.
    #[error("ambiguous_time_range out of range: {0} (expected 0..=12)")]
    AmbiguousTimeRangeOutOfRange(u32),
}
