use {
    binder::Binder,
    bound_ast::{RenameConstraintStmt, Statement},
    def::{
        catalog::{
            CatalogWriter, ConstraintEntry, Error as CatalogError, MemCatalog, TableDescriptor,
            TableName,
        },
        DataType, Privilege, Settings,
    },
    env_logger::{Builder, Env},
    executor::{Error, Executor, Outcome, RenameConstraintError},
};

fn init_logger() {
    let env = Env::default().default_filter_or("debug");
    let _ = Builder::from_env(env).is_test(true).try_init();
}

fn catalog() -> MemCatalog {
    let mut catalog = MemCatalog::new();

    catalog
        .create_table(
            TableDescriptor::new(1, TableName::public("t"))
                .with_column("a", DataType::Int, false)
                .with_column("b", DataType::Varchar(20), true)
                .with_constraint(ConstraintEntry::primary_key("pk", vec![1]))
                .with_constraint(ConstraintEntry::unique("uq1", vec![2])),
        )
        .unwrap();
    catalog.grant("alice", 1, Privilege::Create);

    catalog
}

/// Binds and executes `stmt`, then persists the result. Mirrors what a
/// session does for one DDL statement inside a transaction.
fn run(
    catalog: &mut MemCatalog,
    user: &str,
    stmt: RenameConstraintStmt,
) -> Result<Outcome, String> {
    let table = Binder::new(user, &*catalog)
        .bind_rename_constraint(&stmt)
        .map_err(|e| e.code().to_string())?;

    let executor = Executor::new(Settings::default());
    let outcome = executor
        .execute(Statement::RenameConstraint(stmt), table.as_ref())
        .map_err(|e| e.code().to_string())?;

    if let Outcome::Altered(desc) = &outcome {
        catalog
            .write_descriptor(desc.clone())
            .map_err(|e| e.code().to_string())?;
    }

    Ok(outcome)
}

fn constraint_names(catalog: &MemCatalog) -> Vec<String> {
    catalog
        .table(1)
        .unwrap()
        .constraints
        .iter()
        .map(|c| c.name.clone())
        .collect()
}

#[test]
fn rename_constraint() {
    init_logger();
    let mut catalog = catalog();

    let stmt = RenameConstraintStmt::new(TableName::public("t"), "uq1", "uq2");
    let outcome = run(&mut catalog, "alice", stmt).unwrap();

    assert!(matches!(outcome, Outcome::Altered(_)));
    assert_eq!(constraint_names(&catalog), vec!["pk", "uq2"]);
    assert_eq!(catalog.table(1).unwrap().version, 2);
}

#[test]
fn failures_do_not_reach_the_catalog() {
    init_logger();
    let mut catalog = catalog();
    let t = TableName::public("t");

    let cases = [
        (RenameConstraintStmt::new(t.clone(), "ck1", "ck2"), "42704"),
        (RenameConstraintStmt::new(t.clone(), "uq1", "pk"), "42710"),
        (RenameConstraintStmt::new(t.clone(), "uq1", ""), "42601"),
        (
            RenameConstraintStmt::new(TableName::public("missing"), "uq1", "uq2"),
            "42P01",
        ),
    ];

    for (stmt, code) in cases {
        assert_eq!(run(&mut catalog, "alice", stmt), Err(code.to_string()));
        assert_eq!(constraint_names(&catalog), vec!["pk", "uq1"]);
        assert_eq!(catalog.table(1).unwrap().version, 1);
    }
}

#[test]
fn privilege_is_required() {
    init_logger();
    let mut catalog = catalog();

    let stmt = RenameConstraintStmt::new(TableName::public("t"), "uq1", "uq2");
    assert_eq!(run(&mut catalog, "bob", stmt), Err("42501".to_string()));
    assert_eq!(constraint_names(&catalog), vec!["pk", "uq1"]);
}

#[test]
fn if_exists_on_missing_table() {
    init_logger();
    let mut catalog = catalog();

    let stmt = RenameConstraintStmt::new(TableName::public("missing"), "uq1", "uq2");
    assert_eq!(
        run(&mut catalog, "alice", stmt.if_exists()),
        Ok(Outcome::Skipped)
    );
    assert_eq!(catalog.table(1).unwrap().version, 1);
}

#[test]
fn same_name_writes_nothing() {
    init_logger();
    let mut catalog = catalog();

    let stmt = RenameConstraintStmt::new(TableName::public("t"), "pk", "pk");
    assert_eq!(run(&mut catalog, "alice", stmt), Ok(Outcome::Unchanged));
    assert_eq!(catalog.table(1).unwrap().version, 1);
}

#[test]
fn concurrent_renames_conflict_on_write() {
    init_logger();
    let mut catalog = catalog();
    let executor = Executor::new(Settings::default());
    let binder_stmt = RenameConstraintStmt::new(TableName::public("t"), "uq1", "uq2");

    // two transactions bind the same version of the table
    let first = Binder::new("alice", &catalog)
        .bind_rename_constraint(&binder_stmt)
        .unwrap();
    let second = Binder::new("alice", &catalog)
        .bind_rename_constraint(&binder_stmt)
        .unwrap();

    let first = executor
        .execute(Statement::RenameConstraint(binder_stmt), first.as_ref())
        .unwrap()
        .into_descriptor()
        .unwrap();
    let second = executor
        .execute(
            Statement::RenameConstraint(RenameConstraintStmt::new(
                TableName::public("t"),
                "uq1",
                "uq3",
            )),
            second.as_ref(),
        )
        .unwrap()
        .into_descriptor()
        .unwrap();

    assert_eq!(catalog.write_descriptor(first), Ok(2));
    assert_eq!(
        catalog.write_descriptor(second),
        Err(CatalogError::VersionMismatch {
            name: TableName::public("t"),
            expected: 1,
            actual: 2,
        })
    );
    assert_eq!(constraint_names(&catalog), vec!["pk", "uq2"]);

    // a fresh bind sees the committed name
    let err = executor
        .execute(
            Statement::RenameConstraint(RenameConstraintStmt::new(
                TableName::public("t"),
                "uq1",
                "uq3",
            )),
            catalog.table(1),
        )
        .unwrap_err();
    assert_eq!(
        err,
        Error::RenameConstraint {
            source: RenameConstraintError::ConstraintNotExists {
                name: "uq1".to_string()
            }
        }
    );
}

#[test]
fn settings_from_environment_limit_names() {
    init_logger();
    let mut catalog = catalog();

    let lookup = |name: &str| match name {
        def::DB0_MAX_IDENTIFIER_LENGTH => Some("4".to_string()),
        _ => None,
    };
    let settings = Settings::from_lookup(lookup).unwrap();
    let executor = Executor::new(settings);

    let table = catalog.table(1).cloned();
    let err = executor
        .execute(
            Statement::RenameConstraint(RenameConstraintStmt::new(
                TableName::public("t"),
                "uq1",
                "unique_b",
            )),
            table.as_ref(),
        )
        .unwrap_err();
    assert_eq!(err.code(), "42622");

    let desc = executor
        .execute(
            Statement::RenameConstraint(RenameConstraintStmt::new(
                TableName::public("t"),
                "uq1",
                "uq_b",
            )),
            table.as_ref(),
        )
        .unwrap()
        .into_descriptor()
        .unwrap();
    assert_eq!(catalog.write_descriptor(desc), Ok(2));
}
