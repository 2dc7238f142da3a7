use anyhow::{bail, Context, Result};
use reqwest::Client;
use std::{env, fs, path::PathBuf};
use tabulan::{
    export,
    extract::{ResultCache, StructureClient},
    pipeline::Pipeline,
    transform::{MonthToken, DAYS},
};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8866/predict/structure";
const CACHE_CAPACITY: usize = 16;

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();

    // ─── 2) parse arguments ──────────────────────────────────────────
    let mut args = env::args().skip(1);
    let image_path = match args.next() {
        Some(p) => PathBuf::from(p),
        None => bail!("usage: tabulan <image.(png|jpg|jpeg)> [out.xlsx]"),
    };
    let out_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("bulan_x_tanggal.xlsx"));

    let ext = image_path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    if !matches!(ext.as_str(), "png" | "jpg" | "jpeg") {
        bail!("unsupported image type `{}`; expected png/jpg/jpeg", ext);
    }

    // ─── 3) build the pipeline ───────────────────────────────────────
    let endpoint = env::var("TABULAN_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    let endpoint = Url::parse(&endpoint)
        .with_context(|| format!("parsing layout-service endpoint `{endpoint}`"))?;
    info!(endpoint = %endpoint, "startup");
    let client = StructureClient::new(Client::new(), endpoint);
    let mut pipeline = Pipeline::new(client, ResultCache::new(CACHE_CAPACITY));

    // ─── 4) extract + canonicalize ───────────────────────────────────
    let image_bytes =
        fs::read(&image_path).with_context(|| format!("reading {}", image_path.display()))?;
    let matrices = match pipeline.process(&image_bytes).await {
        Ok(m) => m,
        Err(err) => {
            // acquisition failure degrades to "zero tables", not a crash
            warn!("extraction failed: {err:#}");
            Vec::new()
        }
    };
    if matrices.is_empty() {
        warn!("no tables detected in {}", image_path.display());
        return Ok(());
    }

    // ─── 5) preview summaries ────────────────────────────────────────
    for (i, matrix) in matrices.iter().enumerate() {
        info!(
            "Tabel {}: {} of {} cells filled",
            i + 1,
            matrix.filled(),
            MonthToken::ALL.len() * DAYS
        );
        for month in MonthToken::ALL {
            let filled = matrix.row(month).iter().filter(|c| c.is_some()).count();
            if filled > 0 {
                debug!(month = %month, filled, "month row");
            }
        }
    }

    // ─── 6) export workbook ──────────────────────────────────────────
    export::write_workbook(&matrices, &out_path)?;
    info!("wrote {}", out_path.display());
    Ok(())
}
