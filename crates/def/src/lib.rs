pub mod catalog;
mod data_type;
pub mod privilege;
mod settings;

pub use {
    data_type::DataType,
    privilege::Privilege,
    settings::{Error as SettingsError, Settings, DB0_MAX_IDENTIFIER_LENGTH},
};

pub type TableId = u32;
pub type ColumnId = u32;
