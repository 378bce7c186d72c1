// Domain layer: the record model and the handler port. No external dependencies beyond serde.

pub mod model;
pub mod ports;
