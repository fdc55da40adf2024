/// Ordered collection of tag labels attached to an analyzed page.
///
/// Every member is trimmed and non-empty. Duplicates are not collapsed; the
/// persistence collaborator stores the joined form verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma-joined tag string. Parts are trimmed, empty parts are
    /// dropped and input order is preserved. Garbage input yields an empty
    /// set; there is no failure mode.
    pub fn from_delimited(text: &str) -> Self {
        Self::from_list(text.split(','))
    }

    /// Builds a set from an already-split sequence, applying the same
    /// trim-and-drop rules as [`TagSet::from_delimited`].
    pub fn from_list<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags = tags
            .into_iter()
            .map(|tag| tag.as_ref().trim().to_owned())
            .filter(|tag| !tag.is_empty())
            .collect();
        Self { tags }
    }

    /// Appends a tag at the end. Whitespace-only input is a no-op.
    /// Returns whether the set changed.
    pub fn add(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() {
            return false;
        }
        self.tags.push(tag.to_owned());
        true
    }

    /// Removes every occurrence equal to the trimmed argument.
    /// Returns whether anything was removed.
    pub fn remove(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        let before = self.tags.len();
        self.tags.retain(|existing| existing != tag);
        self.tags.len() != before
    }

    /// Comma-joins the members in current order.
    pub fn to_delimited(&self) -> String {
        self.tags.join(",")
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.tags.clone()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
