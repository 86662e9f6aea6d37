use std::collections::HashMap;

use log::{debug, warn};

use crate::models::{FieldDefinition, InstrumentKind};

/// Immutable catalog of the fields queryable for one instrument kind.
///
/// Holds its own copies of the definitions it was built from, in insertion
/// order, plus a tag index for lookups.
#[derive(Debug)]
pub struct FieldRegistry {
    kind: InstrumentKind,
    fields: Vec<FieldDefinition>,
    by_tag: HashMap<&'static str, usize>,
}

impl FieldRegistry {
    /// Build a registry from catalog entries. A repeated tag keeps its first entry.
    pub(crate) fn build(
        kind: InstrumentKind,
        entries: impl IntoIterator<Item = FieldDefinition>,
    ) -> Self {
        let mut fields = Vec::new();
        let mut by_tag = HashMap::new();

        for field in entries {
            if by_tag.contains_key(field.tag()) {
                warn!(
                    "Duplicate tag '{}' in {} field catalog, keeping the first entry",
                    field.tag(),
                    kind
                );
                continue;
            }
            by_tag.insert(field.tag(), fields.len());
            fields.push(field);
        }

        debug!("Built {} field registry with {} fields", kind, fields.len());

        Self {
            kind,
            fields,
            by_tag,
        }
    }

    pub fn kind(&self) -> InstrumentKind {
        self.kind
    }

    /// Every field of this registry, in catalog order.
    ///
    /// The order is meant for display; do not rely on it for anything else.
    pub fn all(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Exact, case-sensitive lookup by wire tag. A miss is `None`, not an error.
    pub fn find_by_tag(&self, tag: &str) -> Option<&FieldDefinition> {
        self.by_tag.get(tag).map(|&index| &self.fields[index])
    }

    pub fn contains_tag(&self, tag: &str) -> bool {
        self.by_tag.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
