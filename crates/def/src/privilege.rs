use {crate::catalog::TableName, snafu::prelude::*, std::fmt::Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Privilege {
    All,
    Create,
    Drop,
    Select,
    Insert,
    Update,
    Delete,
}

impl Privilege {
    /// `ALL` covers every other privilege.
    pub fn covers(&self, other: Privilege) -> bool {
        *self == Self::All || *self == other
    }
}

impl Display for Privilege {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::All => "ALL",
                Self::Create => "CREATE",
                Self::Drop => "DROP",
                Self::Select => "SELECT",
                Self::Insert => "INSERT",
                Self::Update => "UPDATE",
                Self::Delete => "DELETE",
            }
        )
    }
}

#[derive(Debug, Snafu, PartialEq)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display(
        "user {} does not have {} privilege on relation {}",
        user,
        privilege,
        table
    ))]
    InsufficientPrivilege {
        user: String,
        privilege: Privilege,
        table: TableName,
    },
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InsufficientPrivilege { .. } => "42501",
        }
    }
}
