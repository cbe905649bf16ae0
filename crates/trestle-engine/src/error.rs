//! Class definition and access errors

use thiserror::Error;

/// Errors raised while defining, assembling, or using a class
///
/// Every variant is a programmer-error signal: nothing here is retried or
/// recovered from, and `define_class` never returns a partial record.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClassError {
    /// Write targeted a reserved member name during definition
    #[error("'{0}' is reserved and cannot be used as a member name")]
    ReservedName(String),

    /// Private method invoked from outside its definition closure
    #[error("method '{0}' is private")]
    PrivateAccess(String),

    /// Non-static method invoked directly on the class record
    #[error("method '{0}' is not static and must be called on an instance")]
    StaticAccess(String),

    /// Method descriptor whose call slot holds no callable
    #[error("method '{0}' has no callable body")]
    MalformedMethod(String),

    /// Lookup or call of a member the class never defined
    #[error("no member named '{0}'")]
    UnknownMember(String),

    /// Call of a member that is not a function
    #[error("member '{0}' is not callable")]
    NotCallable(String),

    /// Type error inside a method body
    #[error("type error: {0}")]
    TypeError(String),
}

/// Class operation result
pub type ClassResult<T> = Result<T, ClassError>;
