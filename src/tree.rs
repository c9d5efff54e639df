use std::fmt;

/// Element node of generated markup.
///
/// Attributes keep their insertion order so serialization is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedTree {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<EmbedTree>,
}

impl EmbedTree {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Setting an attribute twice overwrites the value but keeps its original position.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn append(&mut self, child: EmbedTree) {
        self.children.push(child);
    }

    pub fn with_child(mut self, child: EmbedTree) -> Self {
        self.append(child);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn children(&self) -> &[EmbedTree] {
        &self.children
    }

    /// Serialize as strict XHTML. Every element gets an explicit end tag,
    /// attribute values are escaped.
    pub fn to_xhtml(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EmbedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, escaper::encode_minimal(value))?;
        }
        f.write_str(">")?;

        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }

        write!(f, "</{}>", self.tag)
    }
}
