pub mod ai;
pub mod math;
pub mod providers;

pub use ai::{AiDelegate, AI_ERROR_SENTINEL};
