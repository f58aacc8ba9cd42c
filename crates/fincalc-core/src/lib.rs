pub mod error;
pub mod format;
pub mod types;

#[cfg(feature = "savings")]
pub mod savings;

#[cfg(feature = "income_tax")]
pub mod income_tax;

#[cfg(feature = "loans")]
pub mod loans;

#[cfg(feature = "gst")]
pub mod gst;

pub use error::FincalcError;
pub use types::*;

/// Standard result type for all fincalc operations
pub type FincalcResult<T> = Result<T, FincalcError>;
