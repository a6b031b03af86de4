mod assertions;

// Re-export
pub use assertions::{
    assert_attitude_in_range, assert_controls_in_range, assert_state_finite, assert_vector_eq,
};

pub use helpers::*;

pub use test_app::{TestApp, TestAppBuilder};
