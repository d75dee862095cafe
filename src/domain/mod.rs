// Domain layer: puzzle model and the sink ports the solver writes to.

pub mod model;
pub mod ports;
