use core::fmt;

/// Kernel error
#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// A triangle side has no length, or both sides point in the same direction
    DegenerateTriangle(&'static str),
    /// A null pointer was passed over the host boundary
    NullPointer(&'static str),
    /// Settings could not be parsed
    InvalidSettings(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegenerateTriangle(reason) => f.write_fmt(format_args!("Degenerate triangle: {reason}")),
            Error::NullPointer(param)         => f.write_fmt(format_args!("Null pointer passed for '{param}'")),
            Error::InvalidSettings(err)       => f.write_fmt(format_args!("Invalid settings: {err}")),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
