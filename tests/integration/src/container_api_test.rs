//! End-to-end flows across the adapter boundary and the container core,
//! mirroring what a transport controller does per request.

use pretty_assertions::assert_eq;
use sfms_api::{FileMeta, ResponseKind, download, write_encoded};
use sfms_core::Error as CoreError;
use sfms_test_utils::SampleContainer;

#[tokio::test]
async fn list_files_under_a_directory_prefix() {
    let sample = SampleContainer::in_memory().unwrap();
    let container = sample.container();

    let files = container
        .list_async(SampleContainer::TEST_DIR_PATH)
        .await
        .unwrap();
    assert_eq!(
        files.len(),
        SampleContainer::count_seeded(SampleContainer::TEST_DIR_PATH)
    );

    let empty = container
        .list_async(SampleContainer::EMPTY_DIR_PATH)
        .await
        .unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn delete_flow_and_error_mapping() {
    let sample = SampleContainer::in_memory().unwrap();
    let container = sample.container();

    let err = container
        .delete_async(SampleContainer::NOT_EXIST_FILE_PATH)
        .await
        .unwrap_err();
    let api_err = sfms_api::Error::from(err);
    assert_eq!(ResponseKind::from(&api_err), ResponseKind::NotFound);

    let removed = container
        .delete_async(SampleContainer::TEST_FILE_PATH)
        .await
        .unwrap();
    assert_eq!(removed.path, SampleContainer::TEST_FILE_PATH);
    assert!(
        container
            .get_async(SampleContainer::TEST_FILE_PATH)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn rename_flow_with_both_conflict_sides() {
    let sample = SampleContainer::in_memory().unwrap();
    let container = sample.container();

    let err = container
        .rename_async(
            SampleContainer::NOT_EXIST_FILE_PATH,
            SampleContainer::TEST_FILE_PATH,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::NotFound { .. }));

    let err = container
        .rename_async(
            SampleContainer::TEST_FILE_PATH,
            SampleContainer::TEST_FILE_PATH,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::AlreadyExists { .. }));

    let moved = container
        .rename_async(
            SampleContainer::TEST_FILE_PATH,
            SampleContainer::NOT_EXIST_FILE_PATH,
        )
        .await
        .unwrap();
    assert_eq!(moved.path, SampleContainer::NOT_EXIST_FILE_PATH);
    assert!(
        container
            .get_async(SampleContainer::TEST_FILE_PATH)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn upload_then_download_roundtrip() {
    let sample = SampleContainer::in_memory().unwrap();
    let container = sample.container();

    let err = write_encoded(
        container,
        SampleContainer::TEST_FILE_PATH,
        "test.file.name",
        "qrvM",
    )
    .await
    .unwrap_err();
    assert_eq!(ResponseKind::from(&err), ResponseKind::Conflict);

    let entry = write_encoded(
        container,
        SampleContainer::NOT_EXIST_FILE_PATH,
        "test.file.name",
        "qrvM",
    )
    .await
    .unwrap();
    assert_eq!(entry.original_size, 3);
    assert_eq!(
        FileMeta::from_json(&entry.meta).unwrap().original_file_name,
        "test.file.name"
    );

    let (meta, data) = download(container, SampleContainer::NOT_EXIST_FILE_PATH)
        .await
        .unwrap();
    assert_eq!(meta.original_file_name, "test.file.name");
    assert_eq!(data, vec![0xAA, 0xBB, 0xCC]);
}

#[tokio::test]
async fn download_of_seeded_file_matches_fixture() {
    let sample = SampleContainer::in_memory().unwrap();

    let (meta, data) = download(sample.container(), SampleContainer::TEST_FILE_PATH)
        .await
        .unwrap();
    assert_eq!(meta.original_file_name, "a-one.bin");
    assert_eq!(
        Some(data),
        SampleContainer::seeded_content(SampleContainer::TEST_FILE_PATH)
    );
}

#[tokio::test]
async fn bad_payload_maps_to_bad_request() {
    let sample = SampleContainer::in_memory().unwrap();

    let err = write_encoded(
        sample.container(),
        SampleContainer::NOT_EXIST_FILE_PATH,
        "x",
        "%%% not base64 %%%",
    )
    .await
    .unwrap_err();
    assert_eq!(ResponseKind::from(&err), ResponseKind::BadRequest);
}

#[tokio::test]
async fn illegal_path_maps_to_bad_request() {
    let sample = SampleContainer::in_memory().unwrap();

    let err = write_encoded(sample.container(), "/aa//broken", "x", "qrvM")
        .await
        .unwrap_err();
    assert_eq!(ResponseKind::from(&err), ResponseKind::BadRequest);
}

#[tokio::test]
async fn disk_fixture_behaves_like_memory_fixture() {
    let sample = SampleContainer::on_disk().unwrap();
    let container = sample.container();

    let files = container
        .list_async(SampleContainer::TEST_DIR_PATH)
        .await
        .unwrap();
    assert_eq!(
        files.len(),
        SampleContainer::count_seeded(SampleContainer::TEST_DIR_PATH)
    );

    let (_, data) = download(container, SampleContainer::TEST_FILE_PATH)
        .await
        .unwrap();
    assert_eq!(
        Some(data),
        SampleContainer::seeded_content(SampleContainer::TEST_FILE_PATH)
    );
}
