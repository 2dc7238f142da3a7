use anyhow::Result;
use tracing::{debug, info};

use crate::extract::{prepare_image, ResultCache, StructureClient, MAX_SIDE};
use crate::transform::{canonicalize, CanonicalMatrix};

/// Top-level coordinator: owns the acquisition client and the result cache,
/// and drives image bytes → canonical matrices. One instance per process,
/// built in `main`.
pub struct Pipeline {
    client: StructureClient,
    cache: ResultCache,
}

impl Pipeline {
    pub fn new(client: StructureClient, cache: ResultCache) -> Self {
        Pipeline { client, cache }
    }

    /// Extract and canonicalize every table in the image. Results are cached
    /// by image content, so a repeated upload never re-invokes the engine.
    pub async fn process(&mut self, image_bytes: &[u8]) -> Result<Vec<CanonicalMatrix>> {
        let key = ResultCache::key(image_bytes);
        if let Some(hit) = self.cache.get(&key) {
            debug!(key = %key, "result cache hit");
            return Ok(hit.clone());
        }

        let png = prepare_image(image_bytes, MAX_SIDE)?;
        let grids = self.client.extract_with_fallback(&png).await?;
        info!(tables = grids.len(), "extraction finished");

        let matrices: Vec<CanonicalMatrix> = grids.iter().map(canonicalize).collect();
        self.cache.insert(key, matrices.clone());
        Ok(matrices)
    }
}
