use log::{error, info, warn};

use finance_schedule_core::{CalculationObserver, ErrorKind, Operation, ScheduleError};

/// Reports every engine outcome through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl CalculationObserver for LogObserver {
    fn on_success(&self, operation: Operation) {
        info!("{} completed", operation);
    }

    fn on_failure(&self, operation: Operation, err: &ScheduleError) {
        match err.kind() {
            ErrorKind::Calculation => error!("{} failed: {}", operation, err),
            kind => warn!("{} rejected ({}): {}", operation, kind.as_str(), err),
        }
    }
}
