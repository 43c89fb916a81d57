use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// Text did not match any solution status token.
    #[error("unknown solution status token")]
    UnknownSolutionStatus,

    /// Text did not match any position/velocity type token.
    #[error("unknown position/velocity type token")]
    UnknownPositionVelocityType,

    /// Text did not match any datum token.
    #[error("unknown datum token")]
    UnknownDatum,

    /// Coordinate text is not a digit-led decimal degree value
    /// with a fractional part, or its whole part is out of range.
    #[error("malformed decimal degree coordinate")]
    MalformedCoordinate,
}
