// Domain layer: narration model and ports. No side effects live here.

pub mod model;
pub mod ports;
