// Domain layer: the visit record model, response envelope and ports (interfaces).

pub mod model;
pub mod ports;
