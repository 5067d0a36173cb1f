// SPDX-License-Identifier: MPL-2.0
use iced_drop::app::config::{self, Config};
use iced_drop::error::UploadRejection;
use iced_drop::i18n::fluent::I18n;
use iced_drop::library::{Library, ViewMode};
use iced_drop::media::{self, export, Bounds};
use iced_drop::registry::{self, StoredFile};
use iced_drop::ui::image_editor::{self, SidebarMessage, State as EditorState};
use iced_drop::upload;
use image_rs::{GenericImageView, ImageFormat, Rgba, RgbaImage};
use tempfile::tempdir;

fn write_png(path: &std::path::Path, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([30, 144, 255, 255]))
        .save_with_format(path, ImageFormat::Png)
        .expect("write png");
}

#[tokio::test]
async fn upload_edit_and_export_round_trip() {
    let files_dir = tempdir().expect("files dir");
    let data_dir = tempdir().expect("data dir");
    let downloads = tempdir().expect("downloads dir");

    let photo = files_dir.path().join("Photo.png");
    write_png(&photo, 40, 20);
    let notes = files_dir.path().join("notes.txt");
    std::fs::write(&notes, "not an image").expect("write text");

    let blobs = upload::read_blobs(
        vec![photo.clone(), notes],
        upload::DEFAULT_MAX_FILE_SIZE,
    )
    .await;
    let batch = upload::accept(blobs, upload::DEFAULT_MAX_FILE_SIZE);
    assert_eq!(batch.accepted.len(), 1);
    assert!(matches!(
        batch.last_rejection(),
        Some(UploadRejection::NotAnImage { name, .. }) if name == "notes.txt"
    ));

    let mut library = Library::new(ViewMode::Table);
    library.add(batch.accepted);
    library.set_filter("photo");
    let file = library.filtered().next().expect("filter is case-insensitive");

    let entry = StoredFile::from_upload(file);
    assert!(entry.preview.starts_with("file://"));
    registry::upsert_with_override(entry, Some(data_dir.path().to_path_buf()));

    let source = image_editor::load_source_from("Photo.png", Some(data_dir.path().to_path_buf()))
        .expect("load")
        .expect("registry entry");

    let mut editor = EditorState::loading("Photo.png", Bounds::new(1200, 800));
    editor.set_source(source);
    editor.update(SidebarMessage::RotateRight.into());
    editor.update(SidebarMessage::FlipHorizontal.into());

    let job = editor.export_job().expect("export job");
    let bytes = job.encode(90).expect("encode");
    let first = export::save_into_dir(downloads.path(), &job.file_name, &bytes).expect("save");
    let second = export::save_into_dir(downloads.path(), &job.file_name, &bytes).expect("save");

    assert_eq!(first.file_name().and_then(|n| n.to_str()), Some("edited_Photo.jpg"));
    assert_eq!(
        second.file_name().and_then(|n| n.to_str()),
        Some("edited_Photo (1).jpg")
    );

    let exported = image_rs::open(&first).expect("decode export");
    assert_eq!(exported.dimensions(), (20, 40));
}

#[tokio::test]
async fn oversized_file_is_rejected_with_its_size() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("big.png");
    write_png(&path, 64, 64);
    let size = std::fs::metadata(&path).expect("metadata").len();

    let blobs = upload::read_blobs(vec![path], size - 1).await;
    let batch = upload::accept(blobs, size - 1);

    assert!(batch.accepted.is_empty());
    assert!(matches!(
        batch.last_rejection(),
        Some(UploadRejection::TooLarge { size: s, limit, .. }) if *s == size && *limit == size - 1
    ));
}

#[test]
fn missing_file_becomes_unreadable_rejection() {
    let dir = tempdir().expect("temp dir");
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");

    let blobs = runtime.block_on(upload::read_blobs(
        vec![dir.path().join("gone.png")],
        upload::DEFAULT_MAX_FILE_SIZE,
    ));
    let batch = upload::accept(blobs, upload::DEFAULT_MAX_FILE_SIZE);

    assert!(matches!(
        batch.last_rejection(),
        Some(UploadRejection::Unreadable { name, .. }) if name == "gone.png"
    ));
}

#[test]
fn corrupt_registry_degrades_to_empty() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(dir.path().join(registry::STORAGE_FILE), "{ not json").expect("write");

    let files = registry::get_stored_files_with_override(Some(dir.path().to_path_buf()));
    assert!(files.is_empty());
    assert!(
        image_editor::load_source_from("any.png", Some(dir.path().to_path_buf()))
            .expect("load")
            .is_none()
    );
}

#[test]
fn language_and_view_mode_persist_through_settings_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.general.language = Some("zh-CN".to_string());
    settings.library.view_mode = Some(ViewMode::Table);
    config::save_to_path(&settings, &path).expect("save settings");

    let loaded = config::load_from_path(&path).expect("load settings");
    assert_eq!(loaded.library.view_mode, Some(ViewMode::Table));

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "zh-CN");
    assert_ne!(i18n.tr("window-title"), "window-title");
}

#[test]
fn render_is_deterministic_for_identical_inputs() {
    let source = image_rs::DynamicImage::ImageRgba8(RgbaImage::from_fn(32, 16, |x, y| {
        Rgba([(x * 8) as u8, (y * 16) as u8, 90, 255])
    }));
    let mut transform = iced_drop::domain::editing::TransformState::default();
    transform.rotate_left();
    transform.zoom_in();
    transform.set_contrast(140);

    let a = media::render(&source, &transform, Some(Bounds::new(24, 24)));
    let b = media::render(&source, &transform, Some(Bounds::new(24, 24)));

    assert_eq!(a.as_raw(), b.as_raw());
    assert_eq!(a.dimensions(), (12, 24));
}
