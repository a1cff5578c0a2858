pub mod error;
pub mod limits;
pub mod rounding;
pub mod types;
pub mod validation;

#[cfg(feature = "loans")]
pub mod loans;

#[cfg(feature = "savings")]
pub mod savings;

#[cfg(all(feature = "loans", feature = "savings"))]
pub mod engine;

#[cfg(all(feature = "loans", feature = "savings"))]
pub mod observer;

pub use error::{ErrorKind, ScheduleError};
pub use limits::Limits;
pub use types::*;

#[cfg(all(feature = "loans", feature = "savings"))]
pub use engine::{Engine, Operation};

#[cfg(all(feature = "loans", feature = "savings"))]
pub use observer::{CalculationObserver, CountingObserver, NoopObserver};

/// Standard result type for all schedule operations
pub type ScheduleResult<T> = Result<T, ScheduleError>;
