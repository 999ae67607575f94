// Domain layer: the validated number, module metadata and the output port.

pub mod model;
pub mod ports;
