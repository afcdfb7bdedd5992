use serde_json::Value;

use crate::domain::errors::SimulationError;
use crate::domain::models::SimulationOutcome;
use crate::infrastructure::wire::SimulationValue;

/// Classifies a simulation result. An error tag wins over logs; a result carrying
/// neither is unparseable.
pub fn classify_simulation(value: SimulationValue) -> Result<SimulationOutcome, SimulationError> {
    match (value.err, value.logs) {
        (Some(err), _) => error_tag(err).map(|error| SimulationOutcome::Error { error }),
        (None, Some(logs)) => Ok(SimulationOutcome::Success { logs }),
        (None, None) => Err(SimulationError::Unparseable),
    }
}

fn error_tag(err: Value) -> Result<String, SimulationError> {
    match err {
        Value::String(tag) => Ok(tag),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(SimulationError::UnsupportedErrorShape(other.to_string())),
    }
}
