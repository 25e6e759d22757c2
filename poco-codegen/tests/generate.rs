//! End-to-end generation from a fixed schema snapshot.

use std::fs;

use pocogen_codegen::{Error, Generator, Progress};
use pocogen_core::{ColumnDescriptor, HostType, SchemaSnapshot, TypeCatalog, TypeMapping};
use tempfile::TempDir;

fn shop_snapshot() -> SchemaSnapshot {
    let catalog: TypeCatalog = [
        TypeMapping::new("int", HostType::Int32),
        TypeMapping::new("nvarchar", HostType::String),
        TypeMapping::new("decimal", HostType::Decimal),
    ]
    .into_iter()
    .collect();

    // Deliberately out of order.
    let columns = vec![
        ColumnDescriptor::new("Users", "Name", "nvarchar", true, 2),
        ColumnDescriptor::new("Orders", "Total", "decimal", true, 2),
        ColumnDescriptor::new("Users", "Id", "int", false, 1),
        ColumnDescriptor::new("Orders", "Id", "int", false, 1),
    ];

    SchemaSnapshot::new(columns, catalog)
}

#[test]
fn test_users_and_orders() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("Models");
    let snapshot = shop_snapshot();

    let result = Generator::new("Shop", &snapshot).generate(&out).unwrap();

    assert!(result.created_dir);
    assert_eq!(result.removed, 0);
    assert_eq!(result.written, vec!["Orders.cs", "Users.cs"]);
    assert!(result.warnings.is_empty());

    let users = fs::read_to_string(out.join("Users.cs")).unwrap();
    insta::assert_snapshot!(users, @r"
using System;

namespace Shop
{

    public class Users
    {

        public Int32 Id { get; set; }

        public String Name { get; set; }

    }
}
");

    let orders = fs::read_to_string(out.join("Orders.cs")).unwrap();
    assert!(orders.contains("        public Int32 Id { get; set; }\n"));
    assert!(orders.contains("        public Decimal? Total { get; set; }\n"));
    let id = orders.find("Id {").unwrap();
    let total = orders.find("Total {").unwrap();
    assert!(id < total);
}

#[test]
fn test_output_has_no_bom() {
    let temp = TempDir::new().unwrap();
    let snapshot = shop_snapshot();

    Generator::new("Shop", &snapshot)
        .generate(temp.path())
        .unwrap();

    let bytes = fs::read(temp.path().join("Users.cs")).unwrap();
    assert!(bytes.starts_with(b"using System;\n"));
}

#[test]
fn test_repeated_runs_are_identical() {
    let temp = TempDir::new().unwrap();
    let snapshot = shop_snapshot();
    let generator = Generator::new("Shop", &snapshot);

    generator.generate(temp.path()).unwrap();
    let first = fs::read(temp.path().join("Users.cs")).unwrap();

    let second_run = generator.generate(temp.path()).unwrap();
    let second = fs::read(temp.path().join("Users.cs")).unwrap();

    assert_eq!(first, second);
    assert!(!second_run.created_dir);
    assert_eq!(second_run.removed, 2);
}

#[test]
fn test_existing_files_are_removed() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Legacy.cs"), "stale").unwrap();
    fs::create_dir(temp.path().join("old")).unwrap();

    let snapshot = shop_snapshot();
    Generator::new("Shop", &snapshot)
        .generate(temp.path())
        .unwrap();

    let mut names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["Orders.cs", "Users.cs"]);
}

#[test]
fn test_unmapped_type_leaves_directory_untouched() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Previous.cs"), "previous").unwrap();

    let mut snapshot = shop_snapshot();
    snapshot
        .columns
        .push(ColumnDescriptor::new("Users", "Location", "geography", true, 3));

    let err = Generator::new("Shop", &snapshot)
        .generate(temp.path())
        .unwrap_err();

    assert!(matches!(
        err,
        Error::UnmappedType { ref table, ref column, ref type_code }
            if table == "Users" && column == "Location" && type_code == "geography"
    ));
    assert_eq!(
        fs::read_to_string(temp.path().join("Previous.cs")).unwrap(),
        "previous"
    );
    assert!(!temp.path().join("Orders.cs").exists());
}

#[test]
fn test_empty_schema_clears_directory() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Old.cs"), "").unwrap();

    let snapshot = SchemaSnapshot::default();
    let result = Generator::new("Shop", &snapshot)
        .generate(temp.path())
        .unwrap();

    assert!(result.written.is_empty());
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_preview_touches_nothing() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("never");
    let snapshot = shop_snapshot();

    let preview = Generator::new("Shop", &snapshot).preview().unwrap();

    let names: Vec<&str> = preview
        .documents
        .iter()
        .map(|d| d.file_name.as_str())
        .collect();
    assert_eq!(names, vec!["Orders.cs", "Users.cs"]);
    assert!(!out.exists());
}

#[test]
fn test_invalid_identifiers_warn_but_still_generate() {
    let temp = TempDir::new().unwrap();
    let catalog: TypeCatalog = [TypeMapping::new("int", HostType::Int32)]
        .into_iter()
        .collect();
    let snapshot = SchemaSnapshot::new(
        vec![ColumnDescriptor::new("order items", "Id", "int", false, 1)],
        catalog,
    );

    let result = Generator::new("Shop", &snapshot)
        .generate(temp.path())
        .unwrap();

    assert_eq!(result.warnings.len(), 1);
    let text = fs::read_to_string(temp.path().join("order items.cs")).unwrap();
    assert!(text.contains("    public class order items\n"));
}

#[test]
fn test_users_and_orders_one_property_each() {
    let temp = TempDir::new().unwrap();
    let catalog: TypeCatalog = [
        TypeMapping::new("int", HostType::Int32),
        TypeMapping::new("varchar", HostType::String),
    ]
    .into_iter()
    .collect();
    let snapshot = SchemaSnapshot::new(
        vec![
            ColumnDescriptor::new("Users", "Id", "int", false, 1),
            ColumnDescriptor::new("Users", "Name", "varchar", true, 2),
            ColumnDescriptor::new("Orders", "Id", "int", false, 1),
        ],
        catalog,
    );

    let result = Generator::new("Shop", &snapshot)
        .generate(temp.path())
        .unwrap();
    assert_eq!(result.written, vec!["Orders.cs", "Users.cs"]);

    let users = fs::read_to_string(temp.path().join("Users.cs")).unwrap();
    assert!(users.contains("        public Int32 Id { get; set; }\n"));
    assert!(users.contains("        public String Name { get; set; }\n"));

    let orders = fs::read_to_string(temp.path().join("Orders.cs")).unwrap();
    assert_eq!(orders.matches("{ get; set; }").count(), 1);
    assert!(orders.contains("    public class Orders\n"));
    assert!(orders.contains("        public Int32 Id { get; set; }\n"));
}

#[test]
fn test_progress_is_reported_in_order() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("Models");
    let snapshot = shop_snapshot();

    let mut events = Vec::new();
    Generator::new("Shop", &snapshot)
        .generate_with_progress(&out, |p| {
            events.push(match p {
                Progress::Warning(w) => format!("warning {}", w),
                Progress::OutputDir(dir) => format!("output {}", dir.display()),
                Progress::DirectoryCreated(dir) => format!("created {}", dir.display()),
                Progress::FileWritten(name) => format!("wrote {}", name),
            })
        })
        .unwrap();

    let dir = out.display();
    assert_eq!(
        events,
        vec![
            format!("output {}", dir),
            format!("created {}", dir),
            "wrote Orders.cs".to_string(),
            "wrote Users.cs".to_string(),
        ]
    );
}

#[test]
fn test_progress_stops_at_the_failed_write() {
    let temp = TempDir::new().unwrap();
    let long_name = "B".repeat(300);
    let catalog: TypeCatalog = [TypeMapping::new("int", HostType::Int32)]
        .into_iter()
        .collect();
    let snapshot = SchemaSnapshot::new(
        vec![
            ColumnDescriptor::new("A", "Id", "int", false, 1),
            ColumnDescriptor::new(long_name.as_str(), "Id", "int", false, 1),
        ],
        catalog,
    );

    let mut written = Vec::new();
    let err = Generator::new("Shop", &snapshot)
        .generate_with_progress(temp.path(), |p| {
            if let Progress::FileWritten(name) = p {
                written.push(name.to_string());
            }
        })
        .unwrap_err();

    assert!(matches!(err, Error::Filesystem { .. }));
    assert_eq!(written, vec!["A.cs"]);
}

#[test]
fn test_path_like_table_names_leave_directory_untouched() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("Models");
    fs::create_dir(&out).unwrap();
    fs::write(out.join("Previous.cs"), "previous").unwrap();

    let catalog: TypeCatalog = [TypeMapping::new("int", HostType::Int32)]
        .into_iter()
        .collect();
    let snapshot = SchemaSnapshot::new(
        vec![
            ColumnDescriptor::new("A", "Id", "int", false, 1),
            ColumnDescriptor::new("../Escaped", "Id", "int", false, 1),
            ColumnDescriptor::new("sub/Deep", "Id", "int", false, 1),
        ],
        catalog,
    );

    let mut events = 0;
    let err = Generator::new("Shop", &snapshot)
        .generate_with_progress(&out, |_| events += 1)
        .unwrap_err();

    assert!(matches!(err, Error::InvalidTableName { ref table, .. } if table == "../Escaped"));
    assert_eq!(events, 0);
    assert!(!temp.path().join("Escaped.cs").exists());
    assert!(!out.join("A.cs").exists());
    assert_eq!(
        fs::read_to_string(out.join("Previous.cs")).unwrap(),
        "previous"
    );
}
