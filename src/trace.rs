//! Structured logging shims.
//!
//! With the `tracing` feature these forward to the `tracing` macros;
//! without it they expand to nothing, so arguments are never evaluated.

macro_rules! debug_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($argument)*);
        }
    };
}

macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($argument)*);
        }
    };
}
