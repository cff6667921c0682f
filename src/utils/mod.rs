/// Utility helpers
pub mod logging;
