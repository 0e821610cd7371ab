use {
    super::{ConstraintCatalogView, ConstraintEntry, ValidationError},
    crate::{ColumnId, DataType, TableId},
    common::pub_fields_struct,
    std::fmt::Display,
};

pub type DescriptorVersion = u64;

pub const DEFAULT_SCHEMA: &str = "public";

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableName {
    pub schema: String,
    pub name: String,
}

impl TableName {
    pub fn new(schema: &str, name: &str) -> Self {
        Self {
            schema: schema.to_string(),
            name: name.to_string(),
        }
    }

    pub fn public(name: &str) -> Self {
        Self::new(DEFAULT_SCHEMA, name)
    }
}

impl Display for TableName {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}.{}", self.schema, self.name)
    }
}

pub_fields_struct! {
    #[derive(Clone, Debug, PartialEq)]
    struct ColumnDescriptor {
        id: ColumnId,
        name: String,
        data_type: DataType,
        is_nullable: bool,
    }

    #[derive(Clone, Debug, PartialEq)]
    struct TableDescriptor {
        id: TableId,
        name: TableName,
        /// Bumped by the catalog writer every time the descriptor is persisted.
        version: DescriptorVersion,
        columns: Vec<ColumnDescriptor>,
        /// Ordered by ordinal position.
        constraints: Vec<ConstraintEntry>,
    }
}

impl TableDescriptor {
    pub fn new(id: TableId, name: TableName) -> Self {
        Self {
            id,
            name,
            version: 1,
            columns: vec![],
            constraints: vec![],
        }
    }

    /// Appends a column with the next free column id.
    pub fn with_column(mut self, name: &str, data_type: DataType, is_nullable: bool) -> Self {
        let id = self.columns.iter().map(|col| col.id).max().unwrap_or(0) + 1;

        self.columns.push(ColumnDescriptor {
            id,
            name: name.to_string(),
            data_type,
            is_nullable,
        });

        self
    }

    pub fn with_constraint(mut self, constraint: ConstraintEntry) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn column(&self, id: ColumnId) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|col| col.id == id)
    }

    pub fn column_by_name(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|col| col.name == name)
    }

    pub fn constraint(&self, name: &str) -> Option<&ConstraintEntry> {
        self.constraints.iter().find(|c| c.name == name)
    }

    /// Takes a name-keyed snapshot of the constraints.
    pub fn constraint_view(&self) -> Result<ConstraintCatalogView<'_>, ValidationError> {
        ConstraintCatalogView::new(&self.constraints)
    }

    /// Returns a copy of the descriptor with constraint `from` renamed to `to`,
    /// or `None` if there is no constraint named `from`. The receiver is left
    /// untouched.
    pub fn with_constraint_renamed(&self, from: &str, to: &str) -> Option<Self> {
        let pos = self.constraints.iter().position(|c| c.name == from)?;

        let mut candidate = self.clone();
        candidate.constraints[pos].name = to.to_string();

        Some(candidate)
    }
}
