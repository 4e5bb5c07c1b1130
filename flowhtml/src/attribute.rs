/// A key-value pair for an HTML attribute.
///
/// A `None` value denotes a boolean attribute, rendered as a bare name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attribute {
    /// The name of the attribute. Emitted verbatim, never validated.
    pub name: String,
    /// The value of the attribute, HTML-attribute-escaped at render time.
    pub value: Option<String>,
}

impl Attribute {
    /// Create a new attribute with a name and value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Create a boolean attribute (no value).
    pub fn boolean(name: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: None,
        }
    }

    /// Create an attribute with an optional value.
    pub fn with_optional_value(name: impl Into<String>, value: Option<&str>) -> Self {
        Attribute {
            name: name.into(),
            value: value.map(str::to_string),
        }
    }
}

impl From<&str> for Attribute {
    fn from(name: &str) -> Self {
        Attribute::boolean(name)
    }
}
impl From<String> for Attribute {
    fn from(name: String) -> Self {
        Attribute::boolean(name)
    }
}
impl From<(&str, &str)> for Attribute {
    fn from((name, value): (&str, &str)) -> Self {
        Attribute::new(name, value)
    }
}
impl From<(&str, String)> for Attribute {
    fn from((name, value): (&str, String)) -> Self {
        Attribute::new(name, value)
    }
}
impl From<(String, &str)> for Attribute {
    fn from((name, value): (String, &str)) -> Self {
        Attribute::new(name, value)
    }
}
impl From<(String, String)> for Attribute {
    fn from((name, value): (String, String)) -> Self {
        Attribute::new(name, value)
    }
}
impl From<(&str, Option<&str>)> for Attribute {
    fn from((name, value): (&str, Option<&str>)) -> Self {
        Attribute::with_optional_value(name, value)
    }
}

/// The canonicalized form of an element's attribute list.
pub(crate) struct ExtractedAttributes {
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) rest: Vec<Attribute>,
}

/// Canonicalize an attribute list, left to right.
///
/// The first `id` wins; later `id` attributes are dropped entirely. Every
/// `class` with a value is collected in encounter order and never reaches
/// `rest`. Everything else lands in `rest` preserving order and duplicates.
pub(crate) fn extract(attributes: impl IntoIterator<Item = Attribute>) -> ExtractedAttributes {
    let mut seen_id = false;
    let mut id = None;
    let mut classes = Vec::new();
    let mut rest = Vec::new();

    for Attribute { name, value } in attributes {
        if name == "id" {
            if !seen_id {
                seen_id = true;
                id = value;
            }
        } else if name == "class" {
            match value {
                Some(class) => classes.push(class),
                None => rest.push(Attribute { name, value: None }),
            }
        } else {
            rest.push(Attribute { name, value });
        }
    }

    ExtractedAttributes { id, classes, rest }
}

/// Format the opening-tag markup for an element as an ordered list of chunks:
/// `<tag`, the `id` (if any), the space-joined classes (if any), each remaining
/// attribute, and the final `>`.
///
/// Both renderers consume this, so their element output is byte-identical.
pub(crate) fn open_tag_chunks(tag: &str, attributes: Vec<Attribute>) -> Vec<String> {
    let extracted = extract(attributes);
    let mut chunks = vec![format!("<{tag}")];

    if let Some(id) = &extracted.id {
        chunks.push(format!(
            " id=\"{}\"",
            html_escape::encode_quoted_attribute(id)
        ));
    }
    if !extracted.classes.is_empty() {
        chunks.push(format!(
            " class=\"{}\"",
            html_escape::encode_quoted_attribute(&extracted.classes.join(" "))
        ));
    }
    for attribute in extracted.rest {
        match attribute.value {
            Some(value) => chunks.push(format!(
                " {}=\"{}\"",
                attribute.name,
                html_escape::encode_quoted_attribute(&value)
            )),
            None => chunks.push(format!(" {}", attribute.name)),
        }
    }
    chunks.push(">".to_string());
    chunks
}
