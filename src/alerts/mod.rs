mod assembler;
pub mod window;

pub use assembler::{HealthAlert, assemble_alerts, assemble_health_alerts};
pub use window::{AlertWindow, DueStatus};
