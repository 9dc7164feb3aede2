use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use floorplan_cli::{Args, run};

/// Collects all .json datasets from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demo datasets live at the workspace root, not in the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args_for(input: &Path, output: PathBuf) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        building: None,
        floor: None,
        hover: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_json_files(demos_path());
    assert!(!valid_demos.is_empty(), "No valid datasets found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!("{}.svg", demo_path.file_stem().unwrap().to_string_lossy());
        let output_path = temp_dir.path().join(output_filename);

        let args = args_for(demo_path, output_path.clone());

        match run(&args) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).unwrap();
                assert!(svg.contains("<svg"), "{} produced no SVG", demo_path.display());
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_json_files(demos_path().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error datasets found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&args_for(demo_path, output_path)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!("✅ All {} error demos failed as expected", error_demos.len());
}

#[test]
fn e2e_hover_and_building_selection() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_path().join("two_buildings.json");
    let output = temp_dir.path().join("hover.svg");

    let mut args = args_for(&input, output.clone());
    args.building = Some(2);
    args.floor = Some(5);
    args.hover = Some("Б-5-3".to_string());
    run(&args).unwrap();

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("Корпус Б • 5 этаж"));

    args.hover = Some("no-such-unit".to_string());
    assert!(run(&args).is_err());

    args.hover = None;
    args.building = Some(99);
    assert!(run(&args).is_err());
}
