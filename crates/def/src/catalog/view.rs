use {
    super::{validate::DuplicateConstraintNameSnafu, ConstraintEntry, ValidationError},
    std::collections::BTreeMap,
};

/// Point-in-time, name-keyed view over a table's constraints.
#[derive(Debug)]
pub struct ConstraintCatalogView<'a> {
    entries: BTreeMap<&'a str, &'a ConstraintEntry>,
}

impl<'a> ConstraintCatalogView<'a> {
    pub fn new(constraints: &'a [ConstraintEntry]) -> Result<Self, ValidationError> {
        let mut entries = BTreeMap::new();

        for entry in constraints {
            if entries.insert(entry.name.as_str(), entry).is_some() {
                return DuplicateConstraintNameSnafu {
                    name: entry.name.clone(),
                }
                .fail();
            }
        }

        Ok(Self { entries })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}
