use {
    super::{
        error::{Error, Result},
        CatalogWriter, DescriptorResolver, DescriptorVersion, PrivilegeChecker, TableDescriptor,
        TableName,
    },
    crate::{
        privilege::{self, InsufficientPrivilegeSnafu, Privilege},
        TableId,
    },
    std::collections::{BTreeMap, BTreeSet},
};

/// Catalog kept entirely in memory.
#[derive(Debug, Default)]
pub struct MemCatalog {
    tables: BTreeMap<TableId, TableDescriptor>,
    names: BTreeMap<TableName, TableId>,
    grants: BTreeSet<(String, TableId, Privilege)>,
}

impl MemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_table(&mut self, desc: TableDescriptor) -> Result<TableId> {
        if self.names.contains_key(&desc.name) {
            return Err(Error::TableAlreadyExists { name: desc.name });
        }
        if self.tables.contains_key(&desc.id) {
            return Err(Error::TableIdAlreadyExists { id: desc.id });
        }

        let id = desc.id;
        log::debug!("creating table {} with id {}", desc.name, id);

        self.names.insert(desc.name.clone(), id);
        self.tables.insert(id, desc);

        Ok(id)
    }

    pub fn grant(&mut self, user: &str, table: TableId, privilege: Privilege) {
        self.grants.insert((user.to_string(), table, privilege));
    }

    pub fn table(&self, id: TableId) -> Option<&TableDescriptor> {
        self.tables.get(&id)
    }

    pub fn table_by_name(&self, name: &TableName) -> Option<&TableDescriptor> {
        self.names.get(name).and_then(|id| self.tables.get(id))
    }
}

impl DescriptorResolver for MemCatalog {
    fn resolve_table(&self, name: &TableName) -> Option<TableDescriptor> {
        self.table_by_name(name).cloned()
    }
}

impl PrivilegeChecker for MemCatalog {
    fn check_privilege(
        &self,
        user: &str,
        table: &TableDescriptor,
        privilege: Privilege,
    ) -> std::result::Result<(), privilege::Error> {
        let granted = self
            .grants
            .iter()
            .any(|(u, id, p)| u == user && *id == table.id && p.covers(privilege));

        if granted {
            Ok(())
        } else {
            InsufficientPrivilegeSnafu {
                user,
                privilege,
                table: table.name.clone(),
            }
            .fail()
        }
    }
}

impl CatalogWriter for MemCatalog {
    fn write_descriptor(&mut self, mut desc: TableDescriptor) -> Result<DescriptorVersion> {
        let stored = self
            .tables
            .get(&desc.id)
            .ok_or(Error::TableIdNotExists { id: desc.id })?;

        if stored.version != desc.version {
            return Err(Error::VersionMismatch {
                name: desc.name,
                expected: desc.version,
                actual: stored.version,
            });
        }

        if stored.name != desc.name {
            if self.names.contains_key(&desc.name) {
                return Err(Error::TableAlreadyExists { name: desc.name });
            }

            let old_name = stored.name.clone();
            self.names.remove(&old_name);
            self.names.insert(desc.name.clone(), desc.id);
        }

        desc.version += 1;
        let version = desc.version;

        log::info!("persisted descriptor {} at version {}", desc.name, version);
        self.tables.insert(desc.id, desc);

        Ok(version)
    }
}
