// Domain layer: suppression-list models and ports (interfaces). No AWS types cross this boundary.

pub mod model;
pub mod ports;
