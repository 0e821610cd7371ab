use {
    super::{DescriptorVersion, TableName},
    crate::TableId,
    std::fmt::Display,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq)]
pub enum Error {
    TableAlreadyExists {
        name: TableName,
    },
    TableIdAlreadyExists {
        id: TableId,
    },
    TableIdNotExists {
        id: TableId,
    },
    VersionMismatch {
        name: TableName,
        expected: DescriptorVersion,
        actual: DescriptorVersion,
    },
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Self::TableAlreadyExists { .. } | Self::TableIdAlreadyExists { .. } => "42P07",
            Self::TableIdNotExists { .. } => "42P01",
            Self::VersionMismatch { .. } => "40001",
        }
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::TableAlreadyExists { name } =>
                    format!(r#"relation "{}" already exists"#, name),
                Self::TableIdAlreadyExists { id } =>
                    format!("relation with id {} already exists", id),
                Self::TableIdNotExists { id } => format!("relation with id {} does not exist", id),
                Self::VersionMismatch {
                    name,
                    expected,
                    actual,
                } => format!(
                    r#"descriptor for "{}" changed: expected version {}, found {}"#,
                    name, expected, actual
                ),
            }
        )
    }
}
