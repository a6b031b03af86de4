mod air_data;
mod force_calculator;

pub use air_data::{
    air_density, angle_of_attack, clamp_angle_of_attack, dynamic_pressure, AirDataValues,
};
pub use force_calculator::{
    aerodynamic_forces, drag_coefficient, lift_coefficient, moments, AeroForceMagnitudes,
};
