use thiserror::Error;

/// Everything that can go wrong before a scan starts.
///
/// Connection failures are not errors: a probe that cannot connect simply
/// reports nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A required argument was empty.
    #[error("{what} must be specified")]
    InvalidInput { what: &'static str },

    /// The range or list syntax is malformed.
    #[error("Invalid {what}: {value}")]
    InvalidFormat { what: &'static str, value: String },

    /// One side of an address range is not an IPv4 dotted-quad.
    #[error("Invalid {bound} IP address: {value}")]
    InvalidAddress { bound: Bound, value: String },

    /// Not an integer, or outside `1..=65535`.
    #[error("Invalid port number: {value}")]
    InvalidPort { value: String },

    /// The start of a range is greater than its end.
    #[error("Start {what} cannot be greater than end {what}")]
    RangeOrderError { what: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Start => f.write_str("start"),
            Bound::End => f.write_str("end"),
        }
    }
}
