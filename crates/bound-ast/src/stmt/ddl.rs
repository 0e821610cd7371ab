use {common::pub_fields_struct, def::catalog::TableName};

pub_fields_struct! {
    /// `ALTER TABLE [IF EXISTS] <table> RENAME CONSTRAINT <name> TO <new_name>`
    #[derive(Clone, Debug, PartialEq)]
    struct RenameConstraintStmt {
        table: TableName,
        name: String,
        new_name: String,
        /// Skip instead of failing when the table is missing.
        if_exists: bool,
    }
}

impl RenameConstraintStmt {
    pub fn new(table: TableName, name: &str, new_name: &str) -> Self {
        Self {
            table,
            name: name.to_string(),
            new_name: new_name.to_string(),
            if_exists: false,
        }
    }

    pub fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }
}
