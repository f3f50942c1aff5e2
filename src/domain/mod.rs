// Domain layer: value types and ports (interfaces). Calendar arithmetic and
// IO live in core; nothing here touches the network or the terminal.

pub mod model;
pub mod ports;
