use {
    crate::{Executor, Outcome},
    bound_ast::RenameConstraintStmt,
    def::catalog::{DescriptorValidator, TableDescriptor, TableName, ValidationError},
    snafu::prelude::*,
};


#[derive(Debug, Snafu, PartialEq)]
pub enum Error {
    #[snafu(display("empty constraint name"))]
    EmptyConstraintName,

    #[snafu(display(r#"relation "{}" does not exist"#, name))]
    TableNotExists { name: TableName },

    #[snafu(display(r#"constraint "{}" does not exist"#, name))]
    ConstraintNotExists { name: String },

    #[snafu(display(r#"constraint name "{}" already exists"#, name))]
    ConstraintNameExists { name: String },

    #[snafu(display("invalid table descriptor: {}", source))]
    Validation { source: ValidationError },
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyConstraintName => "42601",
            Self::TableNotExists { .. } => "42P01",
            Self::ConstraintNotExists { .. } => "42704",
            Self::ConstraintNameExists { .. } => "42710",
            Self::Validation { source } => source.code(),
        }
    }
}

type Result<T> = std::result::Result<T, Error>;

impl<V: DescriptorValidator> Executor<V> {
    /// Renames one constraint of `table`.
    ///
    /// The caller's descriptor is never modified: on success the renamed copy
    /// is returned in [`Outcome::Altered`], on failure it is dropped.
    pub(crate) fn rename_constraint(
        &self,
        stmt: &RenameConstraintStmt,
        table: Option<&TableDescriptor>,
    ) -> Result<Outcome> {
        let RenameConstraintStmt {
            table: table_name,
            name,
            new_name,
            if_exists,
        } = stmt;

        let table = match table {
            Some(table) => table,
            None if *if_exists => {
                log::debug!("table {} does not exist, skipping", table_name);
                return Ok(Outcome::Skipped);
            }
            None => {
                return TableNotExistsSnafu {
                    name: table_name.clone(),
                }
                .fail()
            }
        };

        ensure!(!new_name.is_empty(), EmptyConstraintNameSnafu);

        let view = table.constraint_view().context(ValidationSnafu)?;

        ensure!(view.contains(name), ConstraintNotExistsSnafu { name });

        if name == new_name {
            log::debug!("constraint {:?} already has that name", name);
            return Ok(Outcome::Unchanged);
        }

        ensure!(
            !view.contains(new_name),
            ConstraintNameExistsSnafu { name: new_name }
        );

        let candidate = table
            .with_constraint_renamed(name, new_name)
            .context(ConstraintNotExistsSnafu { name })?;

        if let Err(err) = self.validator.validate(&candidate, &self.settings) {
            log::warn!(
                "rejected renaming constraint {:?} to {:?} on {}: {}",
                name,
                new_name,
                table.name,
                err
            );
            return Err(err).context(ValidationSnafu);
        }

        log::info!(
            "renamed constraint {:?} to {:?} on {}",
            name,
            new_name,
            table.name
        );

        Ok(Outcome::Altered(candidate))
    }
}
