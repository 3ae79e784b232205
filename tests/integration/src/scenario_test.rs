//! Fixture scenarios exercising the documented container contract
//! end to end on a fresh store.

use pretty_assertions::assert_eq;
use sfms_core::{Container, Error};

#[test]
fn touched_placeholder_reads_back_empty() {
    let container = Container::open_memory().unwrap();

    container.touch("/aa/bb/a.1").unwrap();
    let entry = container.get("/aa/bb/a.1").unwrap().unwrap();
    assert_eq!(entry.original_size, 0);
    assert_eq!(entry.meta, "");

    let content = container.read(&entry).unwrap();
    assert!(content.data.is_empty());
}

#[test]
fn write_then_set_meta_keeps_both() {
    let container = Container::open_memory().unwrap();

    container.write("/aa/bb/a.2", &[0xAA, 0xBB, 0xCC]).unwrap();
    container
        .set_meta("/aa/bb/a.2", "{\"name\":\"x\"}")
        .unwrap();

    let entry = container.get("/aa/bb/a.2").unwrap().unwrap();
    assert_eq!(entry.original_size, 3);
    assert_eq!(entry.meta, "{\"name\":\"x\"}");
}

#[test]
fn rename_onto_itself_is_a_conflict() {
    let container = Container::open_memory().unwrap();
    container.touch("/aa/bb/a.1").unwrap();

    let err = container.rename("/aa/bb/a.1", "/aa/bb/a.1").unwrap_err();
    assert!(matches!(err, Error::AlreadyExists { .. }));
}

#[test]
fn full_lifecycle_on_one_path() {
    let container = Container::open_memory().unwrap();

    // create
    let entry = container.write("/docs/report.pdf", b"v1").unwrap();
    assert_eq!(entry.original_size, 2);

    // annotate
    container
        .set_meta("/docs/report.pdf", "{\"rev\":1}")
        .unwrap();

    // replace content: delete-then-write, never overwrite-in-place
    assert!(matches!(
        container.write("/docs/report.pdf", b"v2-longer").unwrap_err(),
        Error::AlreadyExists { .. }
    ));
    container.delete("/docs/report.pdf").unwrap();
    container.write("/docs/report.pdf", b"v2-longer").unwrap();

    // relocate
    let moved = container
        .rename("/docs/report.pdf", "/archive/report.pdf")
        .unwrap();
    assert_eq!(moved.original_size, 9);

    // verify the final state by listing
    let all: Vec<String> = container
        .list("")
        .unwrap()
        .into_iter()
        .map(|e| e.path)
        .collect();
    assert_eq!(all, vec!["/archive/report.pdf".to_string()]);
}
