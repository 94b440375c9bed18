pub mod cpu_stress;
pub mod response;
pub mod telemetry;

pub use cpu_stress::{busy_wait, DEFAULT_BUSY_WAIT};
pub use response::LoadResponse;
