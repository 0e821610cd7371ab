mod catalog;
mod constraint;
mod descriptor;
mod error;
mod memory;
mod validate;
mod view;

pub use {
    catalog::{CatalogWriter, DescriptorResolver, PrivilegeChecker},
    constraint::{ConstraintDefinition, ConstraintEntry, ConstraintKind},
    descriptor::{ColumnDescriptor, DescriptorVersion, TableDescriptor, TableName, DEFAULT_SCHEMA},
    error::{Error, Result},
    memory::MemCatalog,
    validate::{DescriptorValidator, StructuralValidator, ValidationError},
    view::ConstraintCatalogView,
};
