//! Integration tests for treelist


use harness::{TestDir, read_listing, run_treelist};

#[test]
fn test_defaults_scan_current_directory() {
    let dir = TestDir::new();
    dir.add_file("a.txt", "a");
    dir.add_file("sub/b.py", "b");

    let run = run_treelist(dir.path(), &[]);
    assert!(run.success, "treelist should succeed: {}", run.stderr);
    // The listing file is created before the walk, so it lists itself.
    assert_eq!(
        read_listing(dir.path()),
        "/.\n    a.txt\n    file_list.txt\n    /sub\n        b.py\n"
    );
}

#[test]
fn test_status_messages() {
    let dir = TestDir::new();
    dir.add_file("tree/x.txt", "");

    let run = run_treelist(dir.path(), &["tree"]);
    assert!(run.success);
    assert!(
        run.stdout
            .contains("Listing files in directory: tree and saving to file_list.txt"),
        "stdout: {}",
        run.stdout
    );
    assert!(
        run.stdout
            .contains("File listing saved successfully (1 directories, 1 files)"),
        "stdout: {}",
        run.stdout
    );
}

#[test]
fn test_end_to_end_scenario() {
    let dir = TestDir::new();
    dir.add_file("R/x.txt", "");
    dir.add_file("R/sub/y.md", "");

    let run = run_treelist(dir.path(), &["R", "-o", "out.txt"]);
    assert!(run.success, "stderr: {}", run.stderr);
    let listing = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
    assert_eq!(listing, "/R\n    x.txt\n    /sub\n        y.md\n");
}

#[test]
fn test_absolute_root_uses_base_name() {
    let dir = TestDir::new();
    let root = dir.add_dir("project");
    dir.add_file("project/main.rs", "");

    let root_arg = root.to_string_lossy().to_string();
    let run = run_treelist(dir.path(), &[&root_arg, "-o", "out.txt"]);
    assert!(run.success);
    let listing = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
    assert_eq!(listing, "/project\n    main.rs\n");
}

#[test]
fn test_invalid_root_writes_nothing() {
    let dir = TestDir::new();

    let run = run_treelist(dir.path(), &["does-not-exist"]);
    assert!(!run.success);
    assert_eq!(run.code, Some(2));
    assert!(
        run.stderr
            .contains("the provided path is not a valid directory: does-not-exist"),
        "stderr: {}",
        run.stderr
    );
    assert!(!dir.path().join("file_list.txt").exists());
    assert!(!run.stdout.contains("Listing files"), "stdout: {}", run.stdout);
}

#[test]
fn test_file_as_root_is_invalid() {
    let dir = TestDir::new();
    dir.add_file("notes.txt", "");

    let run = run_treelist(dir.path(), &["notes.txt", "-o", "out.txt"]);
    assert_eq!(run.code, Some(2));
    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn test_unwritable_output_is_io_failure() {
    let dir = TestDir::new();
    dir.add_dir("tree");

    let run = run_treelist(dir.path(), &["tree", "-o", "missing/dir/out.txt"]);
    assert!(!run.success);
    assert_eq!(run.code, Some(1));
    assert!(run.stderr.contains("cannot create output file"), "stderr: {}", run.stderr);
}

#[test]
fn test_stdout_destination() {
    let dir = TestDir::new();
    dir.add_file("tree/a.txt", "");

    let run = run_treelist(dir.path(), &["tree", "-o", "-"]);
    assert!(run.success);
    assert_eq!(run.stdout, "/tree\n    a.txt\n");
    assert!(run.stderr.contains("File listing saved successfully"));
    assert!(!dir.path().join("-").exists());
}

#[test]
fn test_quiet() {
    let dir = TestDir::new();
    dir.add_file("tree/a.txt", "");

    let run = run_treelist(dir.path(), &["tree", "-q"]);
    assert!(run.success);
    assert!(run.stdout.is_empty(), "stdout: {}", run.stdout);
    assert_eq!(read_listing(dir.path()), "/tree\n    a.txt\n");
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let dir = TestDir::new();
    dir.populate(3, 2);
    let out = TestDir::new();
    let first = out.path().join("first.txt").to_string_lossy().to_string();
    let second = out.path().join("second.txt").to_string_lossy().to_string();

    assert!(run_treelist(dir.path(), &[".", "-o", &first, "-q"]).success);
    assert!(run_treelist(dir.path(), &[".", "-o", &second, "-q"]).success);

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[test]
fn test_line_count_and_indentation() {
    let dir = TestDir::new();
    dir.populate(2, 3);
    let out = TestDir::new();
    let dest = out.path().join("listing.txt");
    let dest_arg = dest.to_string_lossy().to_string();

    let run = run_treelist(dir.path(), &[".", "-o", &dest_arg, "-q"]);
    assert!(run.success, "stderr: {}", run.stderr);
    let listing = std::fs::read_to_string(&dest).unwrap();

    // 1 + 2 + 4 + 8 directories, 2 files in each
    let dirs = 15;
    let files = 30;
    assert_eq!(listing.lines().count(), dirs + files);

    let mut dir_indent = 0;
    for line in listing.lines() {
        let spaces = line.len() - line.trim_start().len();
        assert_eq!(spaces % 4, 0, "bad indentation: {:?}", line);
        if line.trim_start().starts_with('/') {
            dir_indent = spaces;
        } else {
            assert_eq!(spaces, dir_indent + 4, "file line not nested: {:?}", line);
        }
    }
}

#[test]
fn test_unsorted_lists_same_entries() {
    let dir = TestDir::new();
    dir.add_file("tree/c.txt", "");
    dir.add_file("tree/a.txt", "");
    dir.add_file("tree/b.txt", "");

    let run = run_treelist(dir.path(), &["tree", "--unsorted", "-o", "-"]);
    assert!(run.success);
    let mut lines: Vec<&str> = run.stdout.lines().collect();
    assert_eq!(lines.remove(0), "/tree");
    lines.sort();
    assert_eq!(lines, vec!["    a.txt", "    b.txt", "    c.txt"]);
}
