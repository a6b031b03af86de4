mod integrator;

pub use integrator::{
    apply_rate_limits, integrate_attitude, integrate_rates, integrate_translation, weight,
    InertiaApproximation,
};
