use serde::Serialize;

/// Per-request knobs for the layout-recognition service. CPU-only safe-mode
/// settings: bounded detection side length and small recognition batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngineConfig {
    pub det_limit_side_len: u32,
    pub cpu_threads: u32,
    pub rec_batch_num: u32,
}

impl EngineConfig {
    /// First-attempt settings.
    pub fn primary() -> Self {
        EngineConfig {
            det_limit_side_len: 1280,
            cpu_threads: 2,
            rec_batch_num: 4,
        }
    }

    /// Smaller settings used for the single retry after an engine failure.
    pub fn degraded() -> Self {
        EngineConfig {
            det_limit_side_len: 1024,
            cpu_threads: 1,
            rec_batch_num: 2,
        }
    }
}
