mod stmt;

pub use stmt::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    RenameConstraint(RenameConstraintStmt),
}
