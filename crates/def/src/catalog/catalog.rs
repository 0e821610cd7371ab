use {
    super::{error::Result, DescriptorVersion, TableDescriptor, TableName},
    crate::privilege::{self, Privilege},
};

pub trait DescriptorResolver {
    /// Returns the enclosing transaction's private copy of the descriptor.
    fn resolve_table(&self, name: &TableName) -> Option<TableDescriptor>;
}

pub trait PrivilegeChecker {
    fn check_privilege(
        &self,
        user: &str,
        table: &TableDescriptor,
        privilege: Privilege,
    ) -> std::result::Result<(), privilege::Error>;
}

pub trait CatalogWriter {
    /// Persists an accepted descriptor and returns its new version.
    fn write_descriptor(&mut self, desc: TableDescriptor) -> Result<DescriptorVersion>;
}
