// Domain layer: value objects and the ports the pipeline talks to.

pub mod model;
pub mod ports;
