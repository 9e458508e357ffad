use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Locator of a node inside a form document, used in structural findings.
///
/// Segments are joined with `.`, array positions are bracketed:
/// `Fields[2].LoadDataInfo.ColumnsDefinition[0].DataField`.
/// Root-level keys are reported under `root` (`root.MenuID`) while field and
/// action paths start at their array (`Fields[0].Id`, `Actions[1].Label`).
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct DocPath(String);

impl Default for DocPath {
    fn default() -> Self {
        DocPath::root()
    }
}

impl DocPath {
    pub const ROOT: &'static str = "root";

    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn root() -> Self {
        Self::new(Self::ROOT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append a property segment.
    pub fn key(&self, segment: &str) -> DocPath {
        if self.0.is_empty() {
            return DocPath::new(segment);
        }
        DocPath(format!("{}.{}", self.0, segment))
    }

    /// Append an array position.
    pub fn index(&self, index: usize) -> DocPath {
        DocPath(format!("{}[{}]", self.0, index))
    }

    /// Number of `ChildFields[...]` hops in this path.
    pub fn group_depth(&self) -> usize {
        self.0.matches("ChildFields[").count()
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocPath {
    fn from(value: &str) -> Self {
        DocPath::new(value)
    }
}
