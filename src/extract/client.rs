use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};
use url::Url;

use crate::extract::config::EngineConfig;
use crate::extract::html::grid_from_html;
use crate::transform::RawGrid;

/// One detected layout region for one submitted image.
#[derive(Debug, Deserialize)]
struct Region {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    res: Option<RegionRes>,
}

#[derive(Debug, Deserialize)]
struct RegionRes {
    #[serde(default)]
    html: Option<String>,
}

/// Service response: one region list per submitted image.
#[derive(Debug, Deserialize)]
struct StructureResponse {
    #[serde(default)]
    results: Vec<Vec<Region>>,
}

/// HTTP client for the PP-Structure-style layout service. Constructed once at
/// process start with a fixed endpoint and shared from there; the per-request
/// engine knobs ride along in the request body.
#[derive(Debug, Clone)]
pub struct StructureClient {
    http: Client,
    endpoint: Url,
}

impl StructureClient {
    pub fn new(http: Client, endpoint: Url) -> Self {
        StructureClient { http, endpoint }
    }

    /// Single extraction attempt. Returns every region the engine classified
    /// as a table, parsed into a [`RawGrid`]. Table regions without usable
    /// HTML are skipped, not fatal; an empty list means no table was found.
    pub async fn extract_tables(
        &self,
        config: &EngineConfig,
        png_bytes: &[u8],
    ) -> Result<Vec<RawGrid>> {
        let mut body = serde_json::to_value(config).context("serializing engine config")?;
        body["images"] = json!([BASE64.encode(png_bytes)]);

        let resp: StructureResponse = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .with_context(|| format!("POST {}", self.endpoint))?
            .error_for_status()
            .context("layout service returned an error status")?
            .json()
            .await
            .context("decoding layout-service response")?;

        let mut grids = Vec::new();
        for region in resp.results.into_iter().flatten() {
            if region.kind != "table" {
                continue;
            }
            let html = region.res.and_then(|r| r.html).unwrap_or_default();
            if html.is_empty() {
                continue;
            }
            match grid_from_html(&html) {
                Some(grid) => {
                    debug!(rows = grid.rows.len(), cols = grid.headers.len(), "table region");
                    grids.push(grid);
                }
                None => warn!("table region with unparseable HTML; skipped"),
            }
        }
        Ok(grids)
    }

    /// Two-attempt acquisition: primary settings, then one retry with the
    /// degraded settings after any failure. Only both attempts failing is an
    /// acquisition failure, and the caller degrades that to "zero tables".
    pub async fn extract_with_fallback(&self, png_bytes: &[u8]) -> Result<Vec<RawGrid>> {
        match self.extract_tables(&EngineConfig::primary(), png_bytes).await {
            Ok(grids) => Ok(grids),
            Err(err) => {
                warn!(
                    error = %format!("{err:#}"),
                    "primary extraction failed; retrying with degraded settings"
                );
                self.extract_tables(&EngineConfig::degraded(), png_bytes)
                    .await
                    .context("degraded retry also failed")
            }
        }
    }
}
