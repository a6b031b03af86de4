mod engine;

pub use engine::{
    burn_fuel, calculate_engine_outputs, thrust_from_throttle, thrust_vector, EngineOutputs,
};
