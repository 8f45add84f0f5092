/// A named fragment declared with `@name{...}` (or `@tag name{...}`).
///
/// `start..end` covers the whole declaration, marker through closing brace,
/// in the raw script. `body` is the verbatim text from the first to the last
/// token inside the braces, references left unexpanded.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Definition {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub start: usize,
    pub end: usize,
    pub body: String,
}

impl Definition {
    /// Byte length of the declaration removed from the output.
    pub fn declared_len(&self) -> usize {
        self.end - self.start
    }
}

/// A `{{name}}` marker in the raw script.
///
/// `open_offset` is the first `{`, `close_offset` is one past the last `}`.
/// `owner` names the definition whose body holds the marker; top-level
/// markers have none.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Reference {
    pub name: String,
    pub open_offset: usize,
    pub close_offset: usize,
    pub raw: String,
    pub substitution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Reference {
    pub fn is_top_level(&self) -> bool {
        self.owner.is_none()
    }

    /// Width of the raw marker in characters.
    pub fn width(&self) -> usize {
        self.raw.chars().count()
    }
}
