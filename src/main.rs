//! POI clustering tool
//!
//! Reads points of interest from a CSV file, groups them into day-sized
//! clusters with the planner's clustering pipeline, and writes one row per
//! clustered POI with its cluster id and whether it is the anchor.

use clap::{Parser, ValueEnum};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use poi_cluster::{AnchorMethod, ClusterConfig, ClusterResult, DropReason, PlannerConfig, Poi, PoiClusterer};


/// Separator between categories in the `categories` column
const CATEGORY_SEPARATOR: char = ';';

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AnchorArg {
    Centroid,
    HighestRated,
    MostPopular,
}

impl From<AnchorArg> for AnchorMethod {
    fn from(arg: AnchorArg) -> Self {
        match arg {
            AnchorArg::Centroid => AnchorMethod::Centroid,
            AnchorArg::HighestRated => AnchorMethod::HighestRated,
            AnchorArg::MostPopular => AnchorMethod::MostPopular,
        }
    }
}

#[derive(Parser)]
#[command(name = "poi_cluster")]
#[command(about = "Cluster points of interest into day-sized groups", long_about = None)]
struct Args {
    /// Input CSV with id,name,categories,latitude,longitude,rating,review_count columns
    #[arg(short, long, default_value = "pois.csv")]
    input: PathBuf,

    /// Output CSV file with clustered POIs (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML config file (default: ./poi_cluster.yml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Radius the POIs were fetched with, in km
    #[arg(short, long)]
    radius_km: Option<f64>,

    /// Desired number of clusters
    #[arg(short, long)]
    target_clusters: Option<usize>,

    /// DBSCAN epsilon in km (tuned automatically when absent)
    #[arg(short, long)]
    eps: Option<f64>,

    /// DBSCAN minPoints (derived from density when absent)
    #[arg(short = 'm', long)]
    min_samples: Option<usize>,

    /// Maximum POIs per cluster, 0 disables the cap
    #[arg(long)]
    max_pois: Option<usize>,

    /// Maximum restaurants per cluster, 0 disables the cap
    #[arg(long)]
    max_restaurants: Option<usize>,

    /// How anchors are chosen
    #[arg(short, long, value_enum)]
    anchor: Option<AnchorArg>,

    /// Keep low-quality POIs in large clusters
    #[arg(long)]
    no_quality_filter: bool,

    /// Merge nearest clusters until at most the target count remains
    #[arg(long)]
    merge_to_target: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

/// One input row
#[derive(Debug, Deserialize)]
struct PoiRecord {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    categories: String,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    review_count: Option<u32>,
}

/// One output row
#[derive(Debug, Serialize)]
struct ClusterRow<'a> {
    cluster_id: usize,
    anchor: bool,
    id: &'a str,
    name: &'a str,
    latitude: Option<f64>,
    longitude: Option<f64>,
    rating: Option<f64>,
    review_count: Option<u32>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.debug);

    let mut config = PlannerConfig::load_or_default(args.config.as_deref()).context("Failed to load configuration")?;
    apply_overrides(&args, &mut config.clustering);
    config.validate().context("Invalid configuration")?;

    let pois = read_pois(&args.input).with_context(|| format!("Failed to read POIs from {}", args.input.display()))?;
    if pois.is_empty() {
        eyre::bail!("No POIs found in {}", args.input.display());
    }
    info!("Read {} POIs from {}", pois.len(), args.input.display());

    let result = PoiClusterer::new(pois, config.clustering).cluster();
    log_report(&result);

    match &args.output {
        None => write_clusters(io::stdout().lock(), &result).context("Failed to write to stdout")?,
        Some(path) => {
            let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
            write_clusters(file, &result).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Clusters written to {}", path.display());
        }
    }

    Ok(())
}

/// Logs go to stderr so that stdout carries only CSV
fn setup_logging(debug: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_filter(debug, rust_log.as_deref()))
        .init();
}

/// A usable `RUST_LOG` wins; otherwise `--debug` picks debug over info
fn log_filter(debug: bool, rust_log: Option<&str>) -> EnvFilter {
    let level = if debug { "debug" } else { "info" };
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level))
}

/// Command-line flags win over file values
fn apply_overrides(args: &Args, config: &mut ClusterConfig) {
    if let Some(radius_km) = args.radius_km {
        config.search_radius_km = radius_km;
    }
    if let Some(target) = args.target_clusters {
        config.target_clusters = target;
    }
    if args.eps.is_some() {
        config.eps_km = args.eps;
    }
    if args.min_samples.is_some() {
        config.min_samples = args.min_samples;
    }
    if let Some(n) = args.max_pois {
        config.max_pois_per_cluster = (n > 0).then_some(n);
    }
    if let Some(n) = args.max_restaurants {
        config.max_restaurants_per_cluster = (n > 0).then_some(n);
    }
    if let Some(anchor) = args.anchor {
        config.anchor_method = anchor.into();
    }
    if args.no_quality_filter {
        config.filter_worth_visiting = false;
    }
    if args.merge_to_target {
        config.merge_to_target = true;
    }
}

/// Reads POIs from a CSV file with a header row
///
/// Empty latitude/longitude cells yield a POI without coordinates, which the
/// pipeline reports as dropped rather than rejecting the file.
fn read_pois(path: &Path) -> Result<Vec<Poi>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(file);

    let mut pois = Vec::new();
    for (row, result) in reader.deserialize::<PoiRecord>().enumerate() {
        let record = result.with_context(|| format!("Malformed record at row {}", row + 1))?;
        pois.push(record_to_poi(record));
    }
    Ok(pois)
}

fn record_to_poi(record: PoiRecord) -> Poi {
    let mut poi = Poi::new(record.id, record.name);
    poi.categories = record
        .categories
        .split(CATEGORY_SEPARATOR)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect();
    if let (Some(lat), Some(lon)) = (record.latitude, record.longitude) {
        poi = poi.with_location(lat, lon);
    }
    poi.rating = record.rating;
    poi.review_count = record.review_count;
    poi
}

/// Writes one row per clustered POI, clusters in id order
fn write_clusters<W: io::Write>(out: W, result: &ClusterResult) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(out);

    for (id, members) in &result.clusters {
        let anchor_id = result.anchors.get(id).map(|a| a.id.as_str());
        for poi in members {
            writer.serialize(ClusterRow {
                cluster_id: *id,
                anchor: anchor_id == Some(poi.id.as_str()),
                id: &poi.id,
                name: &poi.name,
                latitude: poi.location.map(|p| p.lat),
                longitude: poi.location.map(|p| p.lon),
                rating: poi.rating,
                review_count: poi.review_count,
            })?;
        }
    }

    writer.flush()?;
    Ok(())
}

fn log_report(result: &ClusterResult) {
    let report = &result.report;
    info!(
        "Clustered {} of {} POIs into {} clusters (eps={:.3} km, minPoints={})",
        report.output, report.input, report.clusters, report.eps_km, report.min_samples
    );
    for summary in &report.summaries {
        info!(
            "Cluster {}: {} POIs ({} restaurants), span {:.2} km, anchor {}",
            summary.id, summary.size, summary.restaurants, summary.span_km, summary.anchor_id
        );
    }
    for reason in [
        DropReason::MissingCoordinates,
        DropReason::Noise,
        DropReason::SizeCap,
        DropReason::RestaurantCap,
        DropReason::QualityFilter,
    ] {
        let n = report.dropped_for(reason);
        if n > 0 {
            info!("Dropped {} POIs: {:?}", n, reason);
        }
    }
}
