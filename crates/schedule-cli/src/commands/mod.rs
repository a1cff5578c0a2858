pub mod dispatch;
pub mod limits;
pub mod loans;
pub mod savings;

use serde_json::Value;

use finance_schedule_core::Engine;

use crate::observer::LogObserver;

pub type CliEngine = Engine<LogObserver>;

pub type CommandResult = Result<Value, Box<dyn std::error::Error>>;

/// Resolve limits from flags, environment and `--limits`, then build the engine.
pub fn build_engine(args: &limits::LimitsArgs) -> Result<CliEngine, Box<dyn std::error::Error>> {
    let resolved = limits::resolve(args)?;
    log::debug!("effective limits: {:?}", resolved);
    Ok(Engine::with_observer(resolved, LogObserver)?)
}
