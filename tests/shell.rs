//! Shell integration tests.
//!
//! These tests drive [`Shell::execute`] the way the CLI does and check both
//! the printed output and the archive left on disk.

mod common;

use std::fs;

use zipvfs::{Config, Error, Outcome, Shell, VirtualFs, commands};

use common::{SAMPLE, create_zip_file, read_stored, sample_shell, shell_with, stored_names};

/// Runs `line` and returns its output, failing on errors and exit.
fn run(shell: &mut Shell, line: &str) -> Option<String> {
    match shell.execute(line) {
        Ok(Outcome::Continue(output)) => output,
        Ok(Outcome::Exit(message)) => panic!("unexpected exit: {}", message),
        Err(e) => panic!("'{}' failed: {}", line, e),
    }
}

/// Runs `line` and returns the error message.
fn fail(shell: &mut Shell, line: &str) -> String {
    match shell.execute(line) {
        Err(e) => e.to_string(),
        Ok(outcome) => panic!("'{}' succeeded with {:?}", line, outcome),
    }
}

fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_two_top_level_folders_fail_to_load() {
    let (_dir, path) = create_zip_file(&[
        ("a/", b"" as &[u8]),
        ("a/x.txt", b"x"),
        ("b/", b""),
        ("b/y.txt", b"y"),
    ]);
    let err = VirtualFs::open(&path).unwrap_err();
    assert!(err.is_load_error());
    assert!(matches!(err, Error::AmbiguousRoot { ref roots } if roots == &["a", "b"]));
}

#[test]
fn test_missing_archive_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = VirtualFs::open(dir.path().join("missing.zip")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_garbage_archive_is_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fs.zip");
    fs::write(&path, b"definitely not a zip file").unwrap();
    assert!(VirtualFs::open(&path).unwrap_err().is_load_error());
}

#[test]
fn test_shell_from_config_file() {
    let (dir, _path) = create_zip_file(SAMPLE);
    let config_path = dir.path().join("config.csv");
    fs::write(&config_path, "myhost,fs.zip\n").unwrap();

    let config = Config::load(&config_path).unwrap();
    let mut shell = Shell::from_config(&config).unwrap();
    assert_eq!(shell.prompt(), "myhost:/$ ");
    assert_eq!(run(&mut shell, "ls").as_deref(), Some("file1.txt\nfolder1"));
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn test_cd_folder_then_ls() {
    let (_dir, mut shell) = sample_shell();
    run(&mut shell, "cd folder1");
    assert_eq!(run(&mut shell, "ls").as_deref(), Some("file2.txt\nfile3.txt"));
    assert_eq!(shell.prompt(), "test:/folder1$ ");
}

#[test]
fn test_cd_nonexistent_keeps_cwd() {
    let (_dir, mut shell) = sample_shell();
    run(&mut shell, "cd folder1");
    assert_eq!(
        fail(&mut shell, "cd nonexistent"),
        "cd: nonexistent: No such file or directory"
    );
    assert_eq!(shell.prompt(), "test:/folder1$ ");
}

#[test]
fn test_cd_child_and_back_restores_cwd() {
    let (_dir, mut shell) = shell_with(&[
        ("r/", b"" as &[u8]),
        ("r/a/", b""),
        ("r/a/b/", b""),
        ("r/a/b/c/", b""),
    ]);
    run(&mut shell, "cd a/b");
    let before = shell.prompt();
    run(&mut shell, "cd c");
    run(&mut shell, "cd ..");
    assert_eq!(shell.prompt(), before);
}

#[test]
fn test_ls_children_resolve_back_to_parent() {
    let (_dir, shell) = sample_shell();
    let vfs = shell.vfs();
    for dir in ["/", "/folder1"] {
        for child in commands::ls(vfs, Some(dir)).unwrap() {
            let child_path = vfs.resolve(&format!("{}/{}", dir.trim_end_matches('/'), child));
            assert_eq!(child_path.parent(), vfs.resolve(dir));
        }
    }
}

#[test]
fn test_ls_file_and_missing_fail() {
    let (_dir, mut shell) = sample_shell();
    assert_eq!(
        fail(&mut shell, "ls file1.txt"),
        "ls: file1.txt: No such file or directory"
    );
    assert_eq!(
        fail(&mut shell, "ls ghost"),
        "ls: ghost: No such file or directory"
    );
}

#[test]
fn test_root_without_explicit_entry() {
    let (_dir, mut shell) = shell_with(&[("r/a.txt", b"a" as &[u8]), ("r/sub/", b"")]);
    assert_eq!(run(&mut shell, "ls").as_deref(), Some("a.txt\nsub"));
    run(&mut shell, "cd sub");
    run(&mut shell, "cd ..");
    assert_eq!(shell.prompt(), "test:/$ ");
}

// =============================================================================
// wc
// =============================================================================

#[test]
fn test_wc_scenario() {
    let (_dir, mut shell) = sample_shell();
    assert_eq!(
        run(&mut shell, "wc file1.txt").as_deref(),
        Some("0 2 12 file1.txt")
    );
}

#[test]
fn test_wc_metric_order_ignores_flag_order() {
    let (_dir, mut shell) = sample_shell();
    let a = run(&mut shell, "wc -m -w -l file1.txt");
    let b = run(&mut shell, "wc -lwm file1.txt");
    let c = run(&mut shell, "wc file1.txt");
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn test_wc_invalid_option_prints_no_count() {
    let (_dir, mut shell) = sample_shell();
    assert_eq!(
        fail(&mut shell, "wc -z file1.txt"),
        "wc: invalid option -- 'z'"
    );
}

#[test]
fn test_wc_multiline_file() {
    let (_dir, mut shell) = shell_with(&[("r/", b"" as &[u8]), ("r/poem.txt", b"a b\nc\n")]);
    assert_eq!(run(&mut shell, "wc poem.txt").as_deref(), Some("2 3 6 poem.txt"));
    assert_eq!(run(&mut shell, "wc -l poem.txt").as_deref(), Some("2 poem.txt"));
}

// =============================================================================
// rm
// =============================================================================

#[test]
fn test_rm_file_persists() {
    let (dir, mut shell) = sample_shell();
    let path = dir.path().join("fs.zip");

    run(&mut shell, "rm folder1/file2.txt");
    assert_eq!(run(&mut shell, "ls folder1").as_deref(), Some("file3.txt"));
    assert_eq!(
        fail(&mut shell, "wc folder1/file2.txt"),
        "wc: folder1/file2.txt: No such file"
    );

    let names = stored_names(&path);
    assert!(!names.iter().any(|n| n == "root_dir/folder1/file2.txt"));
    assert_eq!(names.len(), 4);
    assert_eq!(read_stored(&path, "root_dir/folder1/file3.txt"), "Another test file");

    let reopened = VirtualFs::open(&path).unwrap();
    assert_eq!(
        commands::ls(&reopened, Some("folder1")).unwrap(),
        vec!["file3.txt"]
    );
}

#[test]
fn test_rm_directory_without_recursive_removes_nothing() {
    let (dir, mut shell) = sample_shell();
    let path = dir.path().join("fs.zip");
    let before = fs::read(&path).unwrap();

    assert_eq!(
        fail(&mut shell, "rm folder1"),
        "rm: folder1 is a directory. Use -r to remove."
    );
    assert_eq!(fs::read(&path).unwrap(), before);
    assert_eq!(run(&mut shell, "ls folder1").as_deref(), Some("file2.txt\nfile3.txt"));
}

#[test]
fn test_rm_recursive_removes_substring_selection() {
    let (dir, mut shell) = shell_with(&[
        ("r/", b"" as &[u8]),
        ("r/logs/", b""),
        ("r/logs/today.txt", b"t"),
        ("r/old/", b""),
        ("r/old/backlogs.txt", b"b"),
        ("r/keep.txt", b"k"),
    ]);
    let path = dir.path().join("fs.zip");

    run(&mut shell, "rm -r logs");
    assert_eq!(
        sorted(stored_names(&path)),
        vec!["r/", "r/keep.txt", "r/old/"]
    );
    assert_eq!(run(&mut shell, "ls").as_deref(), Some("keep.txt\nold"));
    assert_eq!(run(&mut shell, "ls old"), None);
}

#[test]
fn test_rm_recursive_current_directory() {
    let (_dir, mut shell) = sample_shell();
    run(&mut shell, "cd folder1");
    run(&mut shell, "rm -r /folder1");
    assert_eq!(shell.prompt(), "test:/$ ");
    assert_eq!(run(&mut shell, "ls").as_deref(), Some("file1.txt"));
}

#[test]
fn test_rm_root_refused() {
    let (dir, mut shell) = sample_shell();
    let path = dir.path().join("fs.zip");
    assert_eq!(
        fail(&mut shell, "rm -r /"),
        "rm: /: refusing to remove the archive root"
    );
    assert_eq!(stored_names(&path).len(), SAMPLE.len());
}

#[test]
fn test_rm_usage_errors() {
    let (_dir, mut shell) = sample_shell();
    assert_eq!(fail(&mut shell, "rm"), "rm: missing file operand");
    assert_eq!(fail(&mut shell, "rm -x file1.txt"), "rm: invalid option -- 'x'");
    assert_eq!(fail(&mut shell, "rm -z"), "rm: missing file operand");
    assert_eq!(fail(&mut shell, "wc -z"), "wc: missing file operand");
    assert_eq!(
        fail(&mut shell, "rm nothing.txt"),
        "rm: nothing.txt: No such file or directory"
    );
}

#[test]
fn test_rm_failure_leaves_archive_and_index() {
    let (dir, mut shell) = sample_shell();
    let path = dir.path().join("fs.zip");

    // Swap the archive for a directory so the rewrite cannot open it.
    let saved = dir.path().join("saved.zip");
    fs::rename(&path, &saved).unwrap();
    fs::create_dir(&path).unwrap();

    let err = shell.execute("rm file1.txt").unwrap_err();
    assert!(err.is_mutation_error());
    assert!(err.to_string().starts_with("Error during file removal: "));
    assert_eq!(run(&mut shell, "ls").as_deref(), Some("file1.txt\nfolder1"));

    let mut leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    leftovers.sort();
    assert_eq!(leftovers, vec!["fs.zip", "saved.zip"]);
}

#[cfg(unix)]
#[test]
fn test_rm_keeps_archive_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let (dir, mut shell) = sample_shell();
    let path = dir.path().join("fs.zip");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

    run(&mut shell, "rm file1.txt");
    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn test_unknown_command() {
    let (_dir, mut shell) = sample_shell();
    assert_eq!(fail(&mut shell, "pwd"), "pwd: command not found");
    assert_eq!(fail(&mut shell, "lsx"), "lsx: command not found");
}

#[test]
fn test_exit() {
    let (_dir, mut shell) = sample_shell();
    assert_eq!(
        shell.execute("exit").unwrap(),
        Outcome::Exit("Exiting shell...".to_string())
    );
}

#[test]
fn test_session_continues_after_errors() {
    let (_dir, mut shell) = sample_shell();
    let _ = fail(&mut shell, "wc");
    let _ = fail(&mut shell, "cd nowhere");
    let _ = fail(&mut shell, "rm folder1");
    assert_eq!(run(&mut shell, "wc -w folder1/file3.txt").as_deref(), Some("3 folder1/file3.txt"));
}
