// Domain layer: value objects, response model and the transport port.

pub mod model;
pub mod ports;
pub mod response;
