mod rename_constraint;

pub use rename_constraint::Error as RenameConstraintError;
