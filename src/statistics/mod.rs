//! Structures for logging the statistics of a solve.
//!
//! Statistics are only emitted after [`configure_statistic_logging`] has been called; an
//! unconfigured process pays for nothing beyond the counter increments themselves.
mod statistic_logger;
mod statistic_logging;

use std::fmt::Display;

pub use statistic_logger::StatisticLogger;
pub use statistic_logging::configure_statistic_logging;
pub use statistic_logging::log_statistic;
pub use statistic_logging::should_log_statistics;
pub use statistic_logging::StatisticOptions;

/// A trait for structures which can emit their fields through a [`StatisticLogger`].
pub trait LogStatistics {
    fn log_statistics(&self, statistic_logger: &StatisticLogger);
}

impl<Name: Display + Clone, Value: Display + Clone> LogStatistics for (Name, Value) {
    fn log_statistics(&self, statistic_logger: &StatisticLogger) {
        statistic_logger.log_statistic(self.0.clone(), self.1.clone())
    }
}

/// A macro for generating a struct of named statistic counters.
///
/// The generated struct derives `Default` and implements [`LogStatistics`] by emitting every
/// field under its own name; the field types must implement [`std::fmt::Display`].
///
/// # Example
/// ```rust
/// # use parsnip_solver::create_statistics_struct;
/// create_statistics_struct!(Statistics { number_of_calls: u64 });
///
/// let statistics = Statistics::default();
///
/// assert_eq!(statistics.number_of_calls, 0);
/// ```
#[macro_export]
macro_rules! create_statistics_struct {
    ($(#[$struct_documentation:meta])* $name:ident { $($(#[$variable_documentation:meta])* $field:ident : $type:ident),+ $(,)? }) => {
        $(#[$struct_documentation])*
        #[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
        pub struct $name {
            $($(#[$variable_documentation])* pub $field: $type),+
        }

        impl $crate::statistics::LogStatistics for $name {
            fn log_statistics(
                &self,
                statistic_logger: &$crate::statistics::StatisticLogger
            ) {
                $(statistic_logger.log_statistic(stringify!($field), self.$field));+
            }
        }
    };
}
