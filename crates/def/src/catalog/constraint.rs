use {
    crate::{ColumnId, TableId},
    common::pub_fields_struct,
    std::fmt::Display,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    PrimaryKey,
    Unique,
    Check,
    ForeignKey,
}

impl ConstraintKind {
    pub fn accepts(&self, definition: &ConstraintDefinition) -> bool {
        match definition {
            ConstraintDefinition::Key { .. } => matches!(self, Self::PrimaryKey | Self::Unique),
            ConstraintDefinition::Check { .. } => *self == Self::Check,
            ConstraintDefinition::ForeignKey { .. } => *self == Self::ForeignKey,
        }
    }
}

impl Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::PrimaryKey => "PRIMARY KEY",
                Self::Unique => "UNIQUE",
                Self::Check => "CHECK",
                Self::ForeignKey => "FOREIGN KEY",
            }
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConstraintDefinition {
    Key {
        columns: Vec<ColumnId>,
    },

    Check {
        expr: String,
        columns: Vec<ColumnId>,
    },

    ForeignKey {
        columns: Vec<ColumnId>,
        referenced_table: TableId,
        referenced_columns: Vec<ColumnId>,
    },
}

impl ConstraintDefinition {
    /// Columns of the owning table the constraint refers to.
    pub fn columns(&self) -> &[ColumnId] {
        match self {
            Self::Key { columns }
            | Self::Check { columns, .. }
            | Self::ForeignKey { columns, .. } => columns,
        }
    }
}

pub_fields_struct! {
    #[derive(Clone, Debug, PartialEq)]
    struct ConstraintEntry {
        /// Unique within the owning table.
        name: String,
        kind: ConstraintKind,
        definition: ConstraintDefinition,
    }
}

impl ConstraintEntry {
    pub fn primary_key(name: &str, columns: Vec<ColumnId>) -> Self {
        Self {
            name: name.to_string(),
            kind: ConstraintKind::PrimaryKey,
            definition: ConstraintDefinition::Key { columns },
        }
    }

    pub fn unique(name: &str, columns: Vec<ColumnId>) -> Self {
        Self {
            name: name.to_string(),
            kind: ConstraintKind::Unique,
            definition: ConstraintDefinition::Key { columns },
        }
    }

    pub fn check(name: &str, expr: &str, columns: Vec<ColumnId>) -> Self {
        Self {
            name: name.to_string(),
            kind: ConstraintKind::Check,
            definition: ConstraintDefinition::Check {
                expr: expr.to_string(),
                columns,
            },
        }
    }

    pub fn foreign_key(
        name: &str,
        columns: Vec<ColumnId>,
        referenced_table: TableId,
        referenced_columns: Vec<ColumnId>,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind: ConstraintKind::ForeignKey,
            definition: ConstraintDefinition::ForeignKey {
                columns,
                referenced_table,
                referenced_columns,
            },
        }
    }
}
