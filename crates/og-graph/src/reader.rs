//! Extract readers — OSM XML always, OSM PBF with the `pbf` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//! use og_graph::read_extract;
//!
//! let root = read_extract(Path::new("dehradun.osm"))?;
//! ```
//!
//! # What is loaded
//!
//! The whole extract becomes one [`Element`] tree held in memory.  XML is
//! converted element-for-element (text and comments are dropped).  PBF is
//! mapped onto the same shape: `node{id,lat,lon}` and
//! `way{id, tag{k,v}*, nd{ref}*}`.  Relations are ignored by both readers'
//! consumers, and the PBF reader skips them outright.

use std::path::Path;

use tracing::debug;

use crate::{Element, GraphError, GraphResult};

// ── Public entry points ───────────────────────────────────────────────────────

/// Read an extract, choosing the decoder from the file extension.
///
/// `*.pbf` needs the `pbf` feature; anything else is treated as OSM XML.
pub fn read_extract(path: &Path) -> GraphResult<Element> {
    let is_pbf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pbf"));

    if is_pbf {
        #[cfg(feature = "pbf")]
        return read_osm_pbf(path);

        #[cfg(not(feature = "pbf"))]
        return Err(GraphError::Markup(format!(
            "{} is a PBF file; rebuild with the `pbf` feature to read it",
            path.display()
        )));
    }

    read_osm_xml(path)
}

/// Read and parse an OSM XML file.
pub fn read_osm_xml(path: &Path) -> GraphResult<Element> {
    let text = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "read OSM XML");
    parse_osm_xml(&text)
}

/// Parse OSM XML text into an owned element tree rooted at `<osm>`.
///
/// # Errors
///
/// Returns [`GraphError::Markup`] if the text is not well-formed XML.
pub fn parse_osm_xml(text: &str) -> GraphResult<Element> {
    let doc = roxmltree::Document::parse(text)
        .map_err(|e| GraphError::Markup(e.to_string()))?;
    Ok(convert(doc.root_element()))
}

fn convert(node: roxmltree::Node<'_, '_>) -> Element {
    Element {
        name: node.tag_name().name().to_owned(),
        attributes: node
            .attributes()
            .map(|a| (a.name().to_owned(), a.value().to_owned()))
            .collect(),
        children: node
            .children()
            .filter(|c| c.is_element())
            .map(convert)
            .collect(),
    }
}

// ── PBF ───────────────────────────────────────────────────────────────────────

/// Load an OSM PBF file into the same element shape the XML reader produces.
///
/// # Errors
///
/// Returns [`GraphError::Pbf`] on decode errors, including a missing file.
#[cfg(feature = "pbf")]
pub fn read_osm_pbf(path: &Path) -> GraphResult<Element> {
    use osmpbf::{Element as PbfElement, ElementReader};

    let reader = ElementReader::from_path(path)
        .map_err(|e| GraphError::Pbf(e.to_string()))?;

    let mut root = Element::new("osm");

    reader
        .for_each(|elem| match elem {
            PbfElement::Node(n) => {
                root.children.push(point(n.id(), n.lat(), n.lon()));
            }
            PbfElement::DenseNode(n) => {
                root.children.push(point(n.id(), n.lat(), n.lon()));
            }
            PbfElement::Way(w) => {
                let mut way = Element::new("way").with_attr("id", w.id().to_string());
                way.children.extend(
                    w.tags().map(|(k, v)| Element::new("tag").with_attr("k", k).with_attr("v", v)),
                );
                way.children.extend(
                    w.refs().map(|r| Element::new("nd").with_attr("ref", r.to_string())),
                );
                root.children.push(way);
            }
            _ => {}
        })
        .map_err(|e| GraphError::Pbf(e.to_string()))?;

    debug!(path = %path.display(), elements = root.children.len(), "read OSM PBF");
    Ok(root)
}

#[cfg(feature = "pbf")]
fn point(id: i64, lat: f64, lon: f64) -> Element {
    Element::new("node")
        .with_attr("id", id.to_string())
        .with_attr("lat", lat.to_string())
        .with_attr("lon", lon.to_string())
}
