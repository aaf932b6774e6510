use super::serial;

/// Errors raised when a constructor or setter receives a value outside the
/// attribute's domain.
///
/// Construction and mutation are atomic: when one of these is returned, no
/// field of the target has been changed.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    /// Cylinder count outside `2..=20`.
    #[error("Invalid cylinder count {0}: must be between 2 and 20 (inclusive)")]
    Cylinders(u32),

    /// Fuel is not one of battery, diesel or bio.
    #[error("Invalid fuel '{0}': must be either battery, diesel or bio")]
    Fuel(String),

    /// Serial number does not match `XXX.YYY`.
    #[error(transparent)]
    Serial(#[from] serial::Error),

    /// Commission year outside `1950..=2022`.
    #[error("Invalid commission year {0}: must be between 1950 and 2022 (inclusive)")]
    Year(u32),

    /// Hull is not one of steel, alloy or titanium.
    #[error("Invalid hull '{0}': must be either steel, alloy or titanium")]
    Hull(String),

    /// Max depth outside `-500.0..=0.0`.
    #[error("Invalid max depth {0}: must be between -500.0 and 0.0 (inclusive)")]
    MaxDepth(f64),

    /// Wing span outside `2.20..=25.6`.
    #[error("Invalid wing span {0}: must be between 2.20 and 25.6 (inclusive)")]
    WingSpan(f64),

    /// Ordnance is empty.
    #[error("Invalid ordnance: must not be empty")]
    Ordnance,
}
