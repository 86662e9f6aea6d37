use std::fmt::{Display, Formatter};

use serde::Serialize;

/// A piece of data that can be requested about an equity or an option.
///
/// The tag is the key the quotes endpoint uses on the wire (`fids` parameter
/// and response properties). Label and description are for display only.
///
/// Definitions are plain values: registries hold copies, so two definitions
/// with the same tag and labels compare equal wherever they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldDefinition {
    tag: &'static str,
    label: &'static str,
    description: &'static str,
}

impl FieldDefinition {
    pub const fn new(tag: &'static str, label: &'static str, description: &'static str) -> Self {
        Self {
            tag,
            label,
            description,
        }
    }

    /// Wire key, e.g. `"ask"` or `"wk52hi"`.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Short human label, e.g. `"Ask Price"`. May be empty for undocumented fields.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Longer description. May be empty for undocumented fields.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Label if there is one, otherwise the tag.
    pub fn display_name(&self) -> &'static str {
        if self.label.is_empty() {
            self.tag
        } else {
            self.label
        }
    }
}

impl Display for FieldDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag)
    }
}
