// Domain layer: models and ports. The process runner and file handling live in core.

pub mod model;
pub mod ports;
