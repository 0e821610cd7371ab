use {
    super::{ConstraintCatalogView, ConstraintDefinition, ConstraintKind, TableDescriptor},
    crate::{ColumnId, Settings},
    snafu::prelude::*,
    std::collections::HashSet,
};

#[derive(Debug, Snafu, PartialEq)]
#[snafu(visibility(pub(super)))]
pub enum ValidationError {
    #[snafu(display("empty table name"))]
    EmptyTableName,

    #[snafu(display("empty column name"))]
    EmptyColumnName,

    #[snafu(display(r#"duplicate column name: "{}""#, name))]
    DuplicateColumnName { name: String },

    #[snafu(display("duplicate column id {}", id))]
    DuplicateColumnId { id: ColumnId },

    #[snafu(display(r#"column "{}" has an invalid type length"#, name))]
    InvalidColumnType { name: String },

    #[snafu(display("empty constraint name"))]
    EmptyConstraintName,

    #[snafu(display(r#"constraint name "{}" is longer than {} characters"#, name, max))]
    NameTooLong { name: String, max: usize },

    #[snafu(display(r#"duplicate constraint name: "{}""#, name))]
    DuplicateConstraintName { name: String },

    #[snafu(display(r#"constraint "{}" is declared {} but has another definition"#, name, kind))]
    MismatchedDefinition { name: String, kind: ConstraintKind },

    #[snafu(display(r#"constraint "{}" does not reference any column"#, name))]
    EmptyKeyColumns { name: String },

    #[snafu(display(r#"constraint "{}" references unknown column id {}"#, name, column))]
    UndefinedColumn { name: String, column: ColumnId },

    #[snafu(display("multiple primary keys for table {} are not allowed", table))]
    MultiplePrimaryKeys { table: String },

    #[snafu(display(r#"primary key column "{}" must not be nullable"#, column))]
    NullablePrimaryKeyColumn { column: String },

    #[snafu(display(r#"check constraint "{}" has an empty expression"#, name))]
    EmptyCheckExpression { name: String },

    #[snafu(display(
        r#"foreign key "{}" has {} columns but references {}"#,
        name,
        columns,
        referenced
    ))]
    ForeignKeyArity {
        name: String,
        columns: usize,
        referenced: usize,
    },
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NameTooLong { .. } => "42622",
            _ => "XX000",
        }
    }
}

/// Checks a candidate descriptor before it is accepted.
pub trait DescriptorValidator {
    fn validate(&self, desc: &TableDescriptor, settings: &Settings) -> Result<(), ValidationError>;
}

impl<F> DescriptorValidator for F
where
    F: Fn(&TableDescriptor, &Settings) -> Result<(), ValidationError>,
{
    fn validate(&self, desc: &TableDescriptor, settings: &Settings) -> Result<(), ValidationError> {
        self(desc, settings)
    }
}

/// Structural and intra-table referential checks.
#[derive(Clone, Copy, Debug, Default)]
pub struct StructuralValidator;

impl DescriptorValidator for StructuralValidator {
    fn validate(&self, desc: &TableDescriptor, settings: &Settings) -> Result<(), ValidationError> {
        ensure!(!desc.name.name.is_empty(), EmptyTableNameSnafu);

        validate_columns(desc)?;
        validate_constraints(desc, settings)
    }
}

fn validate_columns(desc: &TableDescriptor) -> Result<(), ValidationError> {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();

    for col in &desc.columns {
        ensure!(!col.name.is_empty(), EmptyColumnNameSnafu);
        ensure!(ids.insert(col.id), DuplicateColumnIdSnafu { id: col.id });
        ensure!(
            names.insert(col.name.as_str()),
            DuplicateColumnNameSnafu { name: &col.name }
        );
        ensure!(
            col.data_type.has_valid_length(),
            InvalidColumnTypeSnafu { name: &col.name }
        );
    }

    Ok(())
}

fn validate_constraints(
    desc: &TableDescriptor,
    settings: &Settings,
) -> Result<(), ValidationError> {
    for constraint in &desc.constraints {
        ensure!(!constraint.name.is_empty(), EmptyConstraintNameSnafu);
        ensure!(
            constraint.name.chars().count() <= settings.max_identifier_length,
            NameTooLongSnafu {
                name: &constraint.name,
                max: settings.max_identifier_length,
            }
        );
    }

    ConstraintCatalogView::new(&desc.constraints)?;

    let mut has_primary_key = false;

    for constraint in &desc.constraints {
        let name = &constraint.name;

        ensure!(
            constraint.kind.accepts(&constraint.definition),
            MismatchedDefinitionSnafu {
                name,
                kind: constraint.kind,
            }
        );

        let columns = constraint.definition.columns();
        for &column in columns {
            ensure!(
                desc.column(column).is_some(),
                UndefinedColumnSnafu { name, column }
            );
        }

        match &constraint.definition {
            ConstraintDefinition::Key { columns } => {
                ensure!(!columns.is_empty(), EmptyKeyColumnsSnafu { name });

                if constraint.kind == ConstraintKind::PrimaryKey {
                    ensure!(
                        !has_primary_key,
                        MultiplePrimaryKeysSnafu {
                            table: &desc.name.name
                        }
                    );
                    has_primary_key = true;

                    for col in columns.iter().filter_map(|&id| desc.column(id)) {
                        ensure!(
                            !col.is_nullable,
                            NullablePrimaryKeyColumnSnafu { column: &col.name }
                        );
                    }
                }
            }

            ConstraintDefinition::Check { expr, .. } => {
                ensure!(
                    !expr.trim().is_empty(),
                    EmptyCheckExpressionSnafu { name }
                );
            }

            ConstraintDefinition::ForeignKey {
                columns,
                referenced_columns,
                ..
            } => {
                ensure!(!columns.is_empty(), EmptyKeyColumnsSnafu { name });
                ensure!(
                    columns.len() == referenced_columns.len(),
                    ForeignKeyAritySnafu {
                        name,
                        columns: columns.len(),
                        referenced: referenced_columns.len(),
                    }
                );
            }
        }
    }

    Ok(())
}
