pub mod export;
pub mod extract;
pub mod pipeline;
pub mod transform;
