//! End-to-end tests for file and directory handles against a real temp dir.
//!
//! Covers conflict policies, per-handle cache independence, staleness, and
//! the move/rename contract (commit in memory only after the rename lands).

use std::fs;
use std::sync::Once;

use fsentry_core::{
    Directory, Entry, File, FileSystem, FsConfig, FsErrorKind, IfExists, IfNotExists, PathInfo,
};
use tempfile::TempDir;

static LOGGER: Once = Once::new();

fn init_logger() {
    LOGGER.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

fn setup() -> (TempDir, FileSystem, String) {
    init_logger();
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_string_lossy().into_owned();
    let fs = FileSystem::with_config(FsConfig { separator: '/' }).unwrap();
    (dir, fs, root)
}

#[test]
fn sandbox_scenario_caches_are_per_handle() {
    let (_tmp, fs, root) = setup();
    let sandbox_path = format!("{}/sandbox", root);

    let mut sandbox = Directory::make(&fs, &sandbox_path, IfExists::Open).unwrap();
    let mut parent = Directory::open(&fs, &root).unwrap();
    assert!(parent.directory_exists("sandbox").unwrap());

    let mut observer = Directory::open(&fs, &sandbox_path).unwrap();
    assert!(!observer.file_exists("child.txt").unwrap());

    let child = sandbox.get_file("child.txt", IfNotExists::Create).unwrap();
    assert_eq!(child.path(), format!("{}/child.txt", sandbox_path));
    assert_eq!(child.size().unwrap(), 0);

    // Loaded before the create: stays stale.
    assert!(!observer.file_exists("child.txt").unwrap());

    // A second independent handle sees it only once its own load runs.
    let mut second = Directory::open(&fs, &sandbox_path).unwrap();
    assert!(!second.is_loaded());
    assert!(second.file_exists("child.txt").unwrap());
    assert!(second.is_loaded());
}

#[test]
fn make_open_is_idempotent_across_runs() {
    let (_tmp, fs, root) = setup();
    let path = format!("{}/sandbox", root);
    let first = Directory::make(&fs, &path, IfExists::Open).unwrap();
    let second = Directory::make(&fs, &path, IfExists::Open).unwrap();
    assert_eq!(first.path(), second.path());
}

#[test]
fn make_open_returns_normalized_path() {
    let (_tmp, fs, root) = setup();
    let path = format!("{}/a.txt", root);
    fs::write(&path, "x").unwrap();
    let file = File::make(&fs, &format!("{}//a.txt", root), IfExists::Open).unwrap();
    assert_eq!(file.path(), fs.normalize(&path));
}

#[test]
fn listing_partitions_mixed_fixture() {
    let (_tmp, fs, root) = setup();
    for f in ["one.txt", "two.rs", ".hidden"] {
        fs::write(format!("{}/{}", root, f), f).unwrap();
    }
    for d in ["alpha", "beta"] {
        fs::create_dir(format!("{}/{}", root, d)).unwrap();
    }

    let mut dir = Directory::open(&fs, &root).unwrap();
    let mut files: Vec<String> = dir
        .get_files()
        .unwrap()
        .into_iter()
        .map(|f| f.name().to_string())
        .collect();
    let mut dirs: Vec<String> = dir
        .get_directories()
        .unwrap()
        .into_iter()
        .map(|d| d.name().to_string())
        .collect();
    files.sort();
    dirs.sort();

    assert_eq!(files, vec![".hidden", "one.txt", "two.rs"]);
    assert_eq!(dirs, vec!["alpha", "beta"]);
    assert!(files.iter().all(|f| !dirs.contains(f)));
    assert!(!files.iter().chain(dirs.iter()).any(|n| n == "." || n == ".."));
}

#[test]
fn loaded_handle_ignores_later_changes() {
    let (_tmp, fs, root) = setup();
    fs::write(format!("{}/a.txt", root), "a").unwrap();

    let mut dir = Directory::open(&fs, &root).unwrap();
    let before_files = dir.file_names().unwrap();
    let before_dirs = dir.directory_names().unwrap();

    fs::write(format!("{}/b.txt", root), "b").unwrap();
    fs::create_dir(format!("{}/c", root)).unwrap();

    for _ in 0..3 {
        assert_eq!(dir.file_names().unwrap(), before_files);
        assert_eq!(dir.directory_names().unwrap(), before_dirs);
        assert!(!dir.file_exists("b.txt").unwrap());
        assert!(!dir.directory_exists("c").unwrap());
    }
    assert_eq!(dir.get_files().unwrap().len(), 1);
}

#[test]
fn get_file_missing_policies() {
    let (_tmp, fs, root) = setup();
    let mut dir = Directory::open(&fs, &root).unwrap();

    let err = dir.get_file("missing", IfNotExists::ThrowOnMissing).unwrap_err();
    assert_eq!(err.kind(), FsErrorKind::DoesNotExist);

    let file = dir.get_file("missing", IfNotExists::Create).unwrap();
    assert!(File::exists(&fs, &file.path()));
    assert_eq!(fs::metadata(file.path()).unwrap().len(), 0);
}

#[test]
fn wrong_kind_is_does_not_exist() {
    let (_tmp, fs, root) = setup();
    let file_path = format!("{}/f.txt", root);
    fs::write(&file_path, "x").unwrap();

    assert_eq!(
        Directory::open(&fs, &file_path).unwrap_err().kind(),
        FsErrorKind::DoesNotExist
    );
    assert_eq!(
        File::open(&fs, &root).unwrap_err().kind(),
        FsErrorKind::DoesNotExist
    );
    assert_eq!(
        File::open(&fs, &format!("{}/absent", root)).unwrap_err().kind(),
        FsErrorKind::DoesNotExist
    );
}

#[test]
fn set_name_renames_on_disk_and_in_memory() {
    let (_tmp, fs, root) = setup();
    let mut file = File::make(&fs, &format!("{}/draft.txt", root), IfExists::ThrowOnExists).unwrap();
    file.write("body").unwrap();

    file.set_name("final.md").unwrap();

    assert_eq!(file.name(), "final.md");
    assert_eq!(file.extension(), "md");
    assert_eq!(file.path(), format!("{}/final.md", root));
    assert!(!File::exists(&fs, &format!("{}/draft.txt", root)));
    assert_eq!(file.read_to_string().unwrap(), "body");
}

#[test]
fn set_name_failure_leaves_handle_unchanged() {
    let (_tmp, fs, root) = setup();
    let path = format!("{}/a.txt", root);
    let mut file = File::make(&fs, &path, IfExists::ThrowOnExists).unwrap();
    fs::remove_file(&path).unwrap();

    let err = file.set_name("b.txt").unwrap_err();
    assert_eq!(err.kind(), FsErrorKind::CouldNotMove);
    assert_eq!(file.name(), "a.txt");
    assert_eq!(file.path(), path);
}

#[test]
fn set_name_rejects_multi_component_names() {
    let (_tmp, fs, root) = setup();
    let path = format!("{}/a.txt", root);
    let mut file = File::make(&fs, &path, IfExists::ThrowOnExists).unwrap();

    for bad in ["", ".", "..", "sub/b.txt"] {
        let err = file.set_name(bad).unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::CouldNotMove);
    }
    assert_eq!(file.path(), path);
    assert!(File::exists(&fs, &path));
}

#[test]
fn set_location_creates_target_and_moves() {
    let (_tmp, fs, root) = setup();
    let mut file = File::make(&fs, &format!("{}/a.txt", root), IfExists::ThrowOnExists).unwrap();
    let archive = format!("{}/archive", root);

    file.set_location(&archive).unwrap();

    assert_eq!(file.location(), archive);
    assert_eq!(file.path(), format!("{}/a.txt", archive));
    assert!(Directory::exists(&fs, &archive));
    assert!(File::exists(&fs, &file.path()));
    assert!(!File::exists(&fs, &format!("{}/a.txt", root)));
}

#[test]
fn set_location_into_existing_directory() {
    let (_tmp, fs, root) = setup();
    let target = format!("{}/existing", root);
    fs::create_dir(&target).unwrap();
    let mut dir = Directory::make(&fs, &format!("{}/moving", root), IfExists::ThrowOnExists).unwrap();

    dir.set_location(&target).unwrap();

    assert_eq!(dir.path(), format!("{}/moving", target));
    assert!(Directory::exists(&fs, &dir.path()));
}

#[test]
fn set_location_failure_leaves_handle_unchanged() {
    let (_tmp, fs, root) = setup();
    let path = format!("{}/a.txt", root);
    let mut file = File::make(&fs, &path, IfExists::ThrowOnExists).unwrap();

    // Parent of the target location does not exist, so it cannot be created.
    let err = file.set_location(&format!("{}/x/y/z", root)).unwrap_err();
    assert_eq!(err.kind(), FsErrorKind::CouldNotCreate);
    assert_eq!(file.path(), path);

    // Target exists but the source vanished: rename fails.
    fs::remove_file(&path).unwrap();
    let err = file.set_location(&format!("{}/elsewhere", root)).unwrap_err();
    assert_eq!(err.kind(), FsErrorKind::CouldNotMove);
    assert_eq!(file.location(), root);
}

#[test]
fn directory_cannot_move_into_itself() {
    let (_tmp, fs, root) = setup();
    let path = format!("{}/outer", root);
    let mut dir = Directory::make(&fs, &path, IfExists::ThrowOnExists).unwrap();

    let err = dir.set_location(&format!("{}/inner", path)).unwrap_err();
    assert_eq!(err.kind(), FsErrorKind::CouldNotMove);
    assert_eq!(dir.path(), path);
}

#[test]
fn set_path_moves_and_renames() {
    let (_tmp, fs, root) = setup();
    let mut file = File::make(&fs, &format!("{}/a.txt", root), IfExists::ThrowOnExists).unwrap();
    let target = format!("{}/docs/readme.md", root);

    file.set_path(&target).unwrap();

    assert_eq!(file.path(), target);
    assert_eq!(file.stem(), "readme");
    assert!(File::exists(&fs, &target));
}

#[test]
fn set_path_with_bare_name_renames_in_place() {
    let (_tmp, fs, root) = setup();
    let mut file = File::make(&fs, &format!("{}/a.txt", root), IfExists::ThrowOnExists).unwrap();

    file.set_path("b.txt").unwrap();

    assert_eq!(file.location(), root);
    assert_eq!(file.path(), format!("{}/b.txt", root));
    assert!(File::exists(&fs, &file.path()));
    assert!(!File::exists(&fs, &format!("{}/a.txt", root)));
}

#[test]
fn get_directory_never_hands_out_self_or_parent() {
    let (_tmp, fs, root) = setup();
    let mut sub = Directory::make(&fs, &format!("{}/sub", root), IfExists::ThrowOnExists).unwrap();

    for bad in ["", ".."] {
        let err = sub.get_directory(bad, IfNotExists::Create).unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::CouldNotCreate);
    }
    assert!(sub.get_directories().unwrap().is_empty());
}

#[test]
fn path_round_trip_with_configured_separator() {
    let fs = FileSystem::with_config(FsConfig { separator: '/' }).unwrap();
    for p in ["/tmp/sandbox/child.txt", "/tmp//sandbox/", "rel/x.tar.gz", "/"] {
        let info: PathInfo = fs.path_info(p);
        assert_eq!(fs.compose(&info.location, &info.basename), fs.normalize(p));
    }
}
