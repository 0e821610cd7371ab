use {
    bound_ast::RenameConstraintStmt,
    def::{
        catalog::{DescriptorResolver, PrivilegeChecker, TableDescriptor, TableName},
        privilege, Privilege,
    },
    snafu::prelude::*,
};

#[derive(Debug, Snafu, PartialEq)]
pub enum Error {
    #[snafu(display(r#"relation "{}" does not exist"#, name))]
    TableNotExists { name: TableName },

    #[snafu(display("{}", source))]
    Privilege { source: privilege::Error },
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Self::TableNotExists { .. } => "42P01",
            Self::Privilege { source } => source.code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Resolves statement inputs against the catalog on behalf of a session user.
pub struct Binder<'a, C> {
    user: String,
    catalog: &'a C,
}

impl<'a, C> Binder<'a, C>
where
    C: DescriptorResolver + PrivilegeChecker,
{
    pub fn new(user: &str, catalog: &'a C) -> Self {
        Self {
            user: user.to_string(),
            catalog,
        }
    }

    /// Returns the descriptor the rename operates on, or `None` when the table
    /// is missing and `IF EXISTS` was given.
    ///
    /// Requires CREATE on the table.
    pub fn bind_rename_constraint(
        &self,
        stmt: &RenameConstraintStmt,
    ) -> Result<Option<TableDescriptor>> {
        let desc = match self.catalog.resolve_table(&stmt.table) {
            Some(desc) => desc,
            None if stmt.if_exists => {
                log::debug!("table {} not found, skipping", stmt.table);
                return Ok(None);
            }
            None => {
                return TableNotExistsSnafu {
                    name: stmt.table.clone(),
                }
                .fail()
            }
        };

        self.catalog
            .check_privilege(&self.user, &desc, Privilege::Create)
            .context(PrivilegeSnafu)?;

        log::debug!(
            "bound rename of constraint {:?} on {} (version {})",
            stmt.name,
            desc.name,
            desc.version
        );

        Ok(Some(desc))
    }
}
