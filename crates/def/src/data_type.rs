use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    Boolean,

    // Numeric types
    SmallInt,
    Int,
    BigInt,
    Float,
    Double,

    // String types
    Char(u16),
    Varchar(u16),
    Text,
}

impl DataType {
    /// Whether the declared length, if any, can hold at least one character.
    pub fn has_valid_length(&self) -> bool {
        match self {
            Self::Char(len) | Self::Varchar(len) => *len > 0,
            _ => true,
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Boolean => write!(f, "BOOLEAN"),
            Self::SmallInt => write!(f, "SMALLINT"),
            Self::Int => write!(f, "INT"),
            Self::BigInt => write!(f, "BIGINT"),
            Self::Float => write!(f, "FLOAT"),
            Self::Double => write!(f, "DOUBLE"),
            Self::Char(len) => write!(f, "CHAR({})", len),
            Self::Varchar(len) => write!(f, "VARCHAR({})", len),
            Self::Text => write!(f, "TEXT"),
        }
    }
}
