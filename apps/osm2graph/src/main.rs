//! `osm2graph` — turn an OSM extract into `graph.json` + `nodes.json`.
//!
//! Reads the extract, builds the node table and the road adjacency graph,
//! and writes both files into the output directory.  Any malformed node or
//! out-of-range coordinate aborts the run with a non-zero exit status and
//! leaves existing output files untouched.
//!
//! Run with:
//!   cargo run -p osm2graph --release -- planet_77.811,30.225_78.252,30.473.osm
//!   RUST_LOG=debug cargo run -p osm2graph -- region.osm --format csv --out-dir out

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use og_core::{BuildConfig, DistanceUnit, DuplicatePolicy};
use og_graph::{read_extract, MapGraph};
use og_output::{export, CsvWriter, JsonWriter};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "osm2graph", version, about = "Build a weighted road graph from an OSM extract")]
struct Args {
    /// OSM extract (`.osm` XML, or `.osm.pbf` with the `pbf` feature)
    input: PathBuf,

    /// Directory for the output files
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Output file format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Graph file name (default: graph.json, or edges.csv for CSV)
    #[arg(long, value_name = "NAME")]
    graph_file: Option<String>,

    /// Node table file name (default: nodes.json, or nodes.csv for CSV)
    #[arg(long, value_name = "NAME")]
    nodes_file: Option<String>,

    /// Indent JSON output
    #[arg(long)]
    pretty: bool,

    /// Unit of edge weights
    #[arg(long, value_enum, default_value_t = Unit::Meters)]
    unit: Unit,

    /// Tag key that marks a way as a road
    #[arg(long, value_name = "KEY", default_value = "highway")]
    road_key: String,

    /// Fail on repeated node ids instead of keeping the last one
    #[arg(long)]
    reject_duplicates: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Csv,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Unit {
    Meters,
    Kilometers,
    Miles,
    NauticalMiles,
    Feet,
}

impl From<Unit> for DistanceUnit {
    fn from(u: Unit) -> Self {
        match u {
            Unit::Meters        => DistanceUnit::Meters,
            Unit::Kilometers    => DistanceUnit::Kilometers,
            Unit::Miles         => DistanceUnit::Miles,
            Unit::NauticalMiles => DistanceUnit::NauticalMiles,
            Unit::Feet          => DistanceUnit::Feet,
        }
    }
}

impl Args {
    fn build_config(&self) -> BuildConfig {
        let duplicates = if self.reject_duplicates {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::LastWins
        };
        BuildConfig::default()
            .road_key(self.road_key.clone())
            .unit(self.unit.into())
            .duplicates(duplicates)
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();
    run(&args)
}

/// Read, build and write.  Output files are only created once every step
/// before the final commit has succeeded.
fn run(args: &Args) -> Result<()> {
    let t0 = Instant::now();
    let root = read_extract(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    info!(input = %args.input.display(), elements = root.children.len(), "extract loaded");

    let config = args.build_config();
    let map = MapGraph::from_element(&root, &config)
        .with_context(|| format!("building graph from {}", args.input.display()))?;
    drop(root);

    let graph_name = args.graph_file.as_deref();
    let nodes_name = args.nodes_file.as_deref();
    let written = match args.format {
        Format::Json => {
            let mut writer = JsonWriter::new(&args.out_dir)?
                .with_file_names(graph_name.unwrap_or("graph.json"), nodes_name.unwrap_or("nodes.json"))
                .pretty(args.pretty);
            export(&mut writer, &map)
        }
        Format::Csv => {
            let mut writer = CsvWriter::new(&args.out_dir)?
                .with_file_names(graph_name.unwrap_or("edges.csv"), nodes_name.unwrap_or("nodes.csv"));
            export(&mut writer, &map)
        }
    };
    written.with_context(|| format!("writing output to {}", args.out_dir.display()))?;

    info!(
        elapsed_ms = t0.elapsed().as_millis() as u64,
        out_dir = %args.out_dir.display(),
        "done: {}",
        map.stats
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use clap::Parser;

    use og_core::{DistanceUnit, DuplicatePolicy};

    use super::{run, Args, Format};

    fn args_for(input: &std::path::Path, out: &std::path::Path) -> Args {
        Args::try_parse_from([
            OsStr::new("osm2graph"),
            input.as_os_str(),
            OsStr::new("--out-dir"),
            out.as_os_str(),
        ])
        .unwrap()
    }

    fn out_files(dir: &std::path::Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["osm2graph", "map.osm"]).unwrap();
        assert_eq!(args.format, Format::Json);
        assert_eq!(args.out_dir.to_str(), Some("."));
        let cfg = args.build_config();
        assert_eq!(cfg.road_key, "highway");
        assert_eq!(cfg.unit, DistanceUnit::Meters);
        assert_eq!(cfg.duplicates, DuplicatePolicy::LastWins);
    }

    #[test]
    fn flags_map_onto_config() {
        let args = Args::try_parse_from([
            "osm2graph", "map.osm",
            "--format", "csv",
            "--unit", "nautical-miles",
            "--road-key", "railway",
            "--reject-duplicates",
        ])
        .unwrap();
        assert_eq!(args.format, Format::Csv);
        let cfg = args.build_config();
        assert_eq!(cfg.road_key, "railway");
        assert_eq!(cfg.unit, DistanceUnit::NauticalMiles);
        assert_eq!(cfg.duplicates, DuplicatePolicy::Reject);
    }

    #[test]
    fn input_is_required() {
        assert!(Args::try_parse_from(["osm2graph"]).is_err());
    }

    #[test]
    fn run_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("map.osm");
        std::fs::write(&input, r#"<osm>
            <node id="A" lat="0" lon="0"/>
            <node id="B" lat="0" lon="0.001"/>
            <way id="1"><nd ref="A"/><nd ref="B"/><tag k="highway" v="primary"/></way>
        </osm>"#).unwrap();
        let out = dir.path().join("out");

        run(&args_for(&input, &out)).unwrap();
        assert_eq!(out_files(&out), ["graph.json", "nodes.json"]);
    }

    #[test]
    fn out_of_range_latitude_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("map.osm");
        std::fs::write(&input, r#"<osm>
            <node id="A" lat="95" lon="0"/>
            <node id="B" lat="0" lon="0"/>
            <way id="1"><nd ref="A"/><nd ref="B"/><tag k="highway" v="primary"/></way>
        </osm>"#).unwrap();
        let out = dir.path().join("out");

        let err = run(&args_for(&input, &out)).unwrap_err();
        assert!(format!("{err:#}").contains("latitude"), "{err:#}");
        assert!(!out.join("graph.json").exists());
        assert!(!out.join("nodes.json").exists());
    }

    #[test]
    fn malformed_node_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        for (i, body) in [
            r#"<node id="A" lon="0"/>"#,
            r#"<node id="A" lat="north" lon="0"/>"#,
            r#"<node id="A" lat="nan" lon="0"/>"#,
        ].into_iter().enumerate() {
            let input = dir.path().join(format!("bad{i}.osm"));
            std::fs::write(&input, format!("<osm>{body}</osm>")).unwrap();
            assert!(run(&args_for(&input, &out)).is_err(), "{body}");
        }
        assert!(!out.exists() || out_files(&out).is_empty());
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let err = run(&args_for(&dir.path().join("absent.osm"), &out)).unwrap_err();
        assert!(format!("{err:#}").contains("absent.osm"), "{err:#}");
        assert!(!out.exists());
    }
}
