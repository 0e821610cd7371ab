mod stmt;

pub use stmt::RenameConstraintError;

use {
    bound_ast::Statement,
    def::{
        catalog::{DescriptorValidator, StructuralValidator, TableDescriptor},
        Settings,
    },
    snafu::prelude::*,
};

#[derive(Debug, Snafu, PartialEq)]
pub enum Error {
    #[snafu(display("{}", source))]
    RenameConstraint { source: RenameConstraintError },
}

impl Error {
    /// SQLSTATE reported to the client.
    pub fn code(&self) -> &'static str {
        match self {
            Self::RenameConstraint { source } => source.code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// What a DDL statement leaves for the caller to do.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// The table does not exist and `IF EXISTS` was given.
    Skipped,
    /// The statement succeeded without changing anything.
    Unchanged,
    /// A validated descriptor, to be handed to the catalog writer.
    Altered(TableDescriptor),
}

impl Outcome {
    pub fn into_descriptor(self) -> Option<TableDescriptor> {
        match self {
            Self::Altered(desc) => Some(desc),
            Self::Skipped | Self::Unchanged => None,
        }
    }
}

pub struct Executor<V = StructuralValidator> {
    settings: Settings,
    validator: V,
}

impl Executor {
    pub fn new(settings: Settings) -> Self {
        Self::with_validator(settings, StructuralValidator)
    }
}

impl<V: DescriptorValidator> Executor<V> {
    pub fn with_validator(settings: Settings, validator: V) -> Self {
        Self {
            settings,
            validator,
        }
    }

    /// Runs a bound statement against the transaction's copy of the target
    /// table. `table` is `None` when the binder found no such table.
    pub fn execute(&self, stmt: Statement, table: Option<&TableDescriptor>) -> Result<Outcome> {
        match stmt {
            Statement::RenameConstraint(stmt) => self
                .rename_constraint(&stmt, table)
                .context(RenameConstraintSnafu),
        }
    }
}
