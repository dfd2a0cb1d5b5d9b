use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A component could not be represented in the requested element type.
    #[error("{component} component out of range for the target type")]
    CastOutOfRange { component: &'static str },

    /// Text didn't have the form '(x, y)' or 'x, y'.
    #[error("expected a vector of the form '(x, y)'")]
    InvalidFormat,

    /// The text had the right shape but a component failed to parse.
    #[error("failed to parse the {component} component")]
    InvalidComponent { component: &'static str },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
