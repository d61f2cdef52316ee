// Adapters layer: concrete implementations for external systems (vagrant, host probing, stdin).

pub mod host;
pub mod prompt;
pub mod vagrant;
