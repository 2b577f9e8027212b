//! Integration tests for og-output.

#[cfg(test)]
mod fixtures {
    use og_core::BuildConfig;
    use og_graph::{parse_osm_xml, MapGraph};

    pub const TWO_NODE_ROAD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6">
  <node id="A" lat="10.0" lon="20.0"/>
  <node id="B" lat="10.001" lon="20.001"/>
  <node id="Z" lat="11.0" lon="21.0"/>
  <way id="1">
    <nd ref="A"/>
    <nd ref="B"/>
    <nd ref="C"/>
    <tag k="highway" v="residential"/>
  </way>
  <way id="2">
    <nd ref="A"/>
    <nd ref="Z"/>
    <tag k="name" v="Main St"/>
  </way>
</osm>"#;

    pub fn build(xml: &str) -> MapGraph {
        let root = parse_osm_xml(xml).unwrap();
        MapGraph::from_element(&root, &BuildConfig::default()).unwrap()
    }

    pub fn tmp() -> tempfile::TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    /// Names of the visible (non-staging) files in `dir`, sorted.
    pub fn listing(dir: &std::path::Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

// ── JSON ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod json_tests {
    use serde_json::{json, Value};

    use og_core::{haversine, Coordinate, DistanceUnit};

    use super::fixtures::{build, listing, tmp, TWO_NODE_ROAD};
    use crate::{export, JsonWriter, OutputWriter};

    fn read(path: &std::path::Path) -> Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn end_to_end_layout() {
        let dir = tmp();
        let map = build(TWO_NODE_ROAD);
        let mut w = JsonWriter::new(dir.path()).unwrap();
        export(&mut w, &map).unwrap();

        let d = haversine(
            Coordinate::new(10.0, 20.0),
            Coordinate::new(10.001, 20.001),
            DistanceUnit::Meters,
        ).unwrap();

        let graph = read(&dir.path().join("graph.json"));
        let obj = graph.as_object().unwrap();
        assert_eq!(obj.keys().collect::<Vec<_>>(), ["A", "B"]);
        for (from, to) in [("A", "B"), ("B", "A")] {
            let edges = obj[from].as_array().unwrap();
            assert_eq!(edges.len(), 1);
            assert_eq!(edges[0][0], json!(to));
            let w = edges[0][1].as_f64().unwrap();
            assert!((w - d).abs() < 1e-9, "{from}: {w} vs {d}");
        }
        assert_eq!(
            read(&dir.path().join("nodes.json")),
            json!({ "A": [10.0, 20.0], "B": [10.001, 20.001], "Z": [11.0, 21.0] })
        );
    }

    #[test]
    fn keys_keep_extract_order() {
        let dir = tmp();
        let mut w = JsonWriter::new(dir.path()).unwrap();
        export(&mut w, &build(TWO_NODE_ROAD)).unwrap();
        let text = std::fs::read_to_string(dir.path().join("nodes.json")).unwrap();
        assert_eq!(text, r#"{"A":[10.0,20.0],"B":[10.001,20.001],"Z":[11.0,21.0]}"#);
    }

    #[test]
    fn rerun_is_byte_identical() {
        let (d1, d2) = (tmp(), tmp());
        for d in [&d1, &d2] {
            let mut w = JsonWriter::new(d.path()).unwrap();
            export(&mut w, &build(TWO_NODE_ROAD)).unwrap();
        }
        for name in ["graph.json", "nodes.json"] {
            let a = std::fs::read(d1.path().join(name)).unwrap();
            let b = std::fs::read(d2.path().join(name)).unwrap();
            assert_eq!(a, b, "{name} differs between runs");
        }
    }

    #[test]
    fn custom_names_and_pretty() {
        let dir = tmp();
        let mut w = JsonWriter::new(dir.path())
            .unwrap()
            .with_file_names("g.json", "n.json")
            .pretty(true);
        export(&mut w, &build(TWO_NODE_ROAD)).unwrap();
        assert_eq!(listing(dir.path()), ["g.json", "n.json"]);
        let text = std::fs::read_to_string(dir.path().join("n.json")).unwrap();
        assert!(text.contains('\n'));
    }

    #[test]
    fn nothing_visible_before_finish() {
        let dir = tmp();
        let map = build(TWO_NODE_ROAD);
        let mut w = JsonWriter::new(dir.path()).unwrap();
        w.write_graph(&map.graph).unwrap();
        w.write_nodes(&map.nodes).unwrap();
        assert!(!dir.path().join("graph.json").exists());
        assert!(!dir.path().join("nodes.json").exists());

        // Dropping an unfinished writer discards the staged files.
        drop(w);
        assert!(listing(dir.path()).is_empty());
    }

    #[test]
    fn node_table_committed_first() {
        let dir = tmp();
        // A non-empty directory at the graph path makes its rename fail.
        let blocker = dir.path().join("graph.json");
        std::fs::create_dir(&blocker).unwrap();
        std::fs::write(blocker.join("keep"), b"").unwrap();

        let mut w = JsonWriter::new(dir.path()).unwrap();
        assert!(export(&mut w, &build(TWO_NODE_ROAD)).is_err());
        assert!(blocker.is_dir());
        assert_eq!(
            read(&dir.path().join("nodes.json")),
            json!({ "A": [10.0, 20.0], "B": [10.001, 20.001], "Z": [11.0, 21.0] })
        );
        drop(w);
        assert_eq!(listing(dir.path()), ["graph.json", "nodes.json"]);
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = JsonWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
        assert!(listing(dir.path()).is_empty());
    }

    #[test]
    fn empty_graph_is_empty_object() {
        let dir = tmp();
        let map = build(r#"<osm><node id="1" lat="0" lon="0"/></osm>"#);
        let mut w = JsonWriter::new(dir.path()).unwrap();
        export(&mut w, &map).unwrap();
        assert_eq!(read(&dir.path().join("graph.json")), json!({}));
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let out = dir.path().join("a").join("b");
        let mut w = JsonWriter::new(&out).unwrap();
        export(&mut w, &build(TWO_NODE_ROAD)).unwrap();
        assert!(out.join("graph.json").exists());
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::fixtures::{build, listing, tmp, TWO_NODE_ROAD};
    use crate::{export, CsvWriter};

    #[test]
    fn csv_headers_and_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        export(&mut w, &build(TWO_NODE_ROAD)).unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("edges.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["from", "to", "weight"]);
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!((&rows[0][0], &rows[0][1]), ("A", "B"));
        assert_eq!((&rows[1][0], &rows[1][1]), ("B", "A"));
        assert_eq!(&rows[0][2], &rows[1][2]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("nodes.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["node_id", "lat", "lon"]);
        let nodes: Vec<_> = rdr2.records().map(|r| r.unwrap()).collect();
        assert_eq!(nodes.len(), 3);
        assert_eq!(&nodes[1][0], "B");
        assert_eq!(&nodes[1][1], "10.001");
    }

    #[test]
    fn csv_weight_parses_back() {
        let dir = tmp();
        let map = build(TWO_NODE_ROAD);
        let mut w = CsvWriter::new(dir.path()).unwrap().with_file_names("e.csv", "n.csv");
        export(&mut w, &map).unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("e.csv")).unwrap();
        let first = rdr.records().next().unwrap().unwrap();
        let weight: f64 = first[2].parse().unwrap();
        assert_eq!(weight, map.graph.neighbors("A")[0].weight);
    }

    #[test]
    fn nodes_csv_lands_when_edges_rename_fails() {
        let dir = tmp();
        let blocker = dir.path().join("edges.csv");
        std::fs::create_dir(&blocker).unwrap();
        std::fs::write(blocker.join("keep"), b"").unwrap();

        let mut w = CsvWriter::new(dir.path()).unwrap();
        assert!(export(&mut w, &build(TWO_NODE_ROAD)).is_err());
        drop(w);
        assert_eq!(listing(dir.path()), ["edges.csv", "nodes.csv"]);
        assert!(blocker.is_dir());
    }
}
