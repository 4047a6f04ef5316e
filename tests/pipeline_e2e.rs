//! End-to-end tests for the box-finding pipeline.
//!
//! Grid scenarios run through the library API, and a few through the built
//! binary with stdin input, to check the exact text output.

use std::io::Write;
use std::process::{Command, Stdio};

use star_boxes::geometry::BoundingBox;
use star_boxes::pipeline::{find_boxes, Pipeline};

fn render(boxes: &[BoundingBox]) -> String {
    boxes.iter().map(|b| format!("{}\n", b)).collect()
}

fn run_text(grid: &str) -> String {
    let lines: Vec<&str> = grid.lines().take_while(|l| !l.is_empty()).collect();
    render(&find_boxes(lines, '*'))
}

// ==================== Grid Scenarios ====================

#[test]
fn test_diagonal_corners_are_separate() {
    let output = run_text("*-*\n-*-\n*-*\n");
    assert_eq!(
        output,
        "(1,1)(1,1)\n(1,3)(1,3)\n(2,2)(2,2)\n(3,1)(3,1)\n(3,3)(3,3)\n"
    );
}

#[test]
fn test_square_block() {
    assert_eq!(run_text("**\n**\n"), "(1,1)(2,2)\n");
}

#[test]
fn test_empty_input() {
    assert_eq!(run_text(""), "");
    assert_eq!(run_text("\n**\n"), "");
}

#[test]
fn test_far_apart_single_stars_tie() {
    let grid = "*---------\n----------\n----------\n---------*\n";
    assert_eq!(run_text(grid), "(1,1)(1,1)\n(4,10)(4,10)\n");
}

#[test]
fn test_four_corners_of_large_grid() {
    let grid = "\
*-------*
---------
---------
---------
---------
---------
---------
---------
*-------*
";
    assert_eq!(
        run_text(grid),
        "(1,1)(1,1)\n(1,9)(1,9)\n(9,1)(9,1)\n(9,9)(9,9)\n"
    );
}

#[test]
fn test_ring_beats_small_segment() {
    let grid = "\
-*****
-*---*
-*---*
-*---*
-*****
------
***---
";
    assert_eq!(run_text(grid), "(1,2)(5,6)\n");
}

#[test]
fn test_ring_with_star_inside_is_eliminated() {
    let grid = "\
-*****
-*---*
-*-*-*
-*---*
-*****
------
***---
";
    assert_eq!(run_text(grid), "(7,1)(7,3)\n");
}

#[test]
fn test_single_row_run_wins() {
    assert_eq!(run_text("*--------****\n"), "(1,10)(1,13)\n");
}

#[test]
fn test_diagonal_neighbours_tie() {
    let grid = "\
-***
*---
*---
*---
";
    assert_eq!(run_text(grid), "(1,2)(1,4)\n(2,1)(4,1)\n");
}

#[test]
fn test_overlap_removes_larger_box() {
    let grid = "\
----------
-**-------
-**-*****-
----*-----
----*--*--
----*-----
";
    assert_eq!(run_text(grid), "(2,2)(3,3)\n");
}

#[test]
fn test_enclosed_stray_star_drops_l_shape() {
    let grid = "\
-------*----
-------*--*-
---**--*----
---**--*****
";
    assert_eq!(run_text(grid), "(3,4)(4,5)\n");
}

#[test]
fn test_blank_line_ends_grid() {
    let grid = "*\n\n*****\n";
    assert_eq!(run_text(grid), "(1,1)(1,1)\n");
}

#[test]
fn test_separated_bars_all_survive() {
    let grid = "\
--*--
--*--
-----
*****
-----
--*--
--*--
";
    let report = Pipeline::default().run(grid.lines());
    assert_eq!(report.components, 3);
    assert_eq!(report.survivors, 3);
    assert_eq!(render(&report.boxes), "(4,1)(4,5)\n");
}

#[test]
fn test_frame_around_frame_all_eliminated() {
    let grid = "\
*******
*-----*
*-***-*
*-*-*-*
*-***-*
*-----*
*******
";
    let report = Pipeline::default().run(grid.lines());
    assert_eq!(report.components, 2);
    assert_eq!(report.survivors, 0);
    assert!(report.boxes.is_empty());
}

// ==================== Properties ====================

/// Deterministic pseudo-random grid (LCG) so the property tests are reproducible.
fn pseudo_random_grid(seed: u64, rows: usize, cols: usize, density: u64) -> Vec<String> {
    let mut state = seed;
    (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    state = state
                        .wrapping_mul(6364136223846793005)
                        .wrapping_add(1442695040888963407);
                    if (state >> 33) % 100 < density {
                        '*'
                    } else {
                        '-'
                    }
                })
                .collect()
        })
        .collect()
}

#[test]
fn test_random_grids_uphold_invariants() {
    for seed in 0..20u64 {
        let grid = pseudo_random_grid(seed, 24, 40, 30);
        let report = Pipeline::default().run(&grid);

        for (i, a) in report.boxes.iter().enumerate() {
            for b in &report.boxes[i + 1..] {
                assert!(!a.overlaps(b), "seed {}: {} overlaps {}", seed, a, b);
            }
        }

        if let Some(first) = report.boxes.first() {
            assert!(report.boxes.iter().all(|b| b.area() == first.area()));
        }
        assert!(report.survivors <= report.components);
        assert!(report.components <= report.stars);
        assert!(report.boxes.len() <= report.survivors);
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let grid = pseudo_random_grid(7, 30, 30, 40);
    let first = Pipeline::default().run(&grid);
    let second = Pipeline::default().run(&grid);
    assert_eq!(first, second);
}

// ==================== Binary ====================

fn run_binary(args: &[&str], stdin: &str) -> (String, String, bool) {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "").unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_star-boxes"))
        .arg("--config")
        .arg(&config_path)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary should spawn");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    (
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
        output.status.success(),
    )
}

#[test]
fn test_binary_reads_stdin() {
    let (stdout, _, ok) = run_binary(&[], "**\n**\n\n");
    assert!(ok);
    assert_eq!(stdout, "(1,1)(2,2)\n");
}

#[test]
fn test_binary_empty_stdin_prints_nothing() {
    let (stdout, _, ok) = run_binary(&[], "\n");
    assert!(ok);
    assert_eq!(stdout, "");
}

#[test]
fn test_binary_json_output() {
    let (stdout, _, ok) = run_binary(&["--format", "json"], "*-*\n");
    assert!(ok);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["boxes"].as_array().unwrap().len(), 2);
    assert_eq!(value["stars"], 2);
}

#[test]
fn test_binary_custom_marker() {
    let (stdout, _, ok) = run_binary(&["--marker", "#"], "##*\n##*\n");
    assert!(ok);
    assert_eq!(stdout, "(1,1)(2,2)\n");
}

#[test]
fn test_binary_missing_input_file_fails() {
    let (stdout, stderr, ok) = run_binary(&["--input", "/nonexistent/grid.txt"], "");
    assert!(!ok);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error:"));
}
