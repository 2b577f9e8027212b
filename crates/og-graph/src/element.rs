//! Owned markup element tree.
//!
//! Readers turn an extract into a single root `Element` (`<osm>`) whose
//! children are the `node` and `way` entities.  The builders only look at
//! element names and attributes, so XML and PBF inputs go through the same
//! code.

/// A named element with ordered attributes and ordered child elements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    pub name:       String,
    pub attributes: Vec<(String, String)>,
    pub children:   Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), attributes: Vec::new(), children: Vec::new() }
    }

    /// Builder-style attribute append.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Value of the first attribute named `key`.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Direct children named `name`, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }
}
