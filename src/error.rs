use thiserror::Error;

/// Top-level error type for decigeo.
///
/// Almost every variant is an invalid-argument failure. The exception is
/// [`GeometryError::Overflow`], raised when finite input drives an
/// intermediate result out of the `f64` range.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecigeoError {
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Query(#[from] QueryError),
}

impl DecigeoError {
    /// Returns the name of the operation that rejected its arguments.
    #[must_use]
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Arithmetic(err) => err.operation(),
            Self::Geometry(err) => err.operation(),
            Self::Query(err) => err.operation(),
        }
    }
}

/// Errors raised by the decimal-safe arithmetic layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArithmeticError {
    #[error("{operation} needs at least one operand")]
    MissingOperands { operation: &'static str },

    #[error("operand #{index} of {operation} is not a number")]
    NotANumber {
        operation: &'static str,
        index: usize,
    },
}

impl ArithmeticError {
    fn operation(&self) -> &'static str {
        match *self {
            Self::MissingOperands { operation } | Self::NotANumber { operation, .. } => operation,
        }
    }
}

/// Errors raised by geometric constructions and predicates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("{operation}: {parameter} = {value} is not finite")]
    NonFinite {
        operation: &'static str,
        parameter: String,
        value: f64,
    },

    #[error("tolerance must not be negative, got {value}")]
    NegativeTolerance { value: f64 },

    #[error("{operation}: intermediate result left the f64 range")]
    Overflow { operation: &'static str },
}

impl GeometryError {
    fn operation(&self) -> &'static str {
        match *self {
            Self::NonFinite { operation, .. } | Self::Overflow { operation } => operation,
            Self::NegativeTolerance { .. } => "point_on_line",
        }
    }
}

/// Errors raised by nearest-neighbour queries.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QueryError {
    #[error("{operation} needs a non-empty collection")]
    EmptyCollection { operation: &'static str },

    #[error("{operation}: distance threshold must not be negative, got {value}")]
    NegativeThreshold { operation: &'static str, value: f64 },

    #[error("{operation}: polyline #{index} has fewer than two vertices")]
    ShortPolyline {
        operation: &'static str,
        index: usize,
    },
}

impl QueryError {
    fn operation(&self) -> &'static str {
        match *self {
            Self::EmptyCollection { operation }
            | Self::NegativeThreshold { operation, .. }
            | Self::ShortPolyline { operation, .. } => operation,
        }
    }
}

/// Convenience type alias for results using [`DecigeoError`].
pub type Result<T> = std::result::Result<T, DecigeoError>;
