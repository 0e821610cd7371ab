mod ddl;

pub use ddl::*;
