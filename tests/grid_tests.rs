use horizon_rs::core::TargetGrid;

#[test]
fn range_grid_uses_floored_pixel_step() {
    let grid = TargetGrid::from_range(70, 210, 14).expect("valid range");

    assert_eq!(grid.step_ms(), 10);
    assert_eq!(grid.len(), 15);
    assert_eq!(grid.timestamps().first(), Some(&70));
    assert_eq!(grid.timestamps().last(), Some(&210));
}

#[test]
fn range_grid_includes_first_point_at_or_past_end() {
    // span 95 over 10 pixels floors to step 9; the final point overshoots
    // the range end rather than stopping short of it.
    let grid = TargetGrid::from_range(0, 95, 10).expect("valid range");

    assert_eq!(grid.step_ms(), 9);
    assert_eq!(grid.timestamps().last(), Some(&99));
    let before_last = grid.timestamps()[grid.len() - 2];
    assert!(before_last < 95);
}

#[test]
fn zero_width_clamps_to_single_point() {
    let grid = TargetGrid::from_range(100, 200, 0).expect("degenerate width");

    assert_eq!(grid.len(), 1);
    assert_eq!(grid.step_ms(), 0);
    assert_eq!(grid.timestamps(), &[100]);
}

#[test]
fn subpixel_span_clamps_to_single_point() {
    // span 5 over 10 pixels floors to step 0; must not loop.
    let grid = TargetGrid::from_range(1_000, 1_005, 10).expect("degenerate span");

    assert_eq!(grid.len(), 1);
    assert_eq!(grid.timestamps(), &[1_000]);
}

#[test]
fn empty_span_clamps_to_single_point() {
    let grid = TargetGrid::from_range(42, 42, 100).expect("empty span");

    assert_eq!(grid.len(), 1);
    assert_eq!(grid.timestamps(), &[42]);
}

#[test]
fn reversed_range_is_rejected() {
    assert!(TargetGrid::from_range(200, 100, 10).is_err());
}

#[test]
fn explicit_grid_keeps_caller_timestamps() {
    let grid = TargetGrid::from_timestamps(vec![1, 2, 4, 6, 7, 10]).expect("valid grid");

    assert_eq!(grid.timestamps(), &[1, 2, 4, 6, 7, 10]);
    assert_eq!(grid.step_ms(), 1);
}

#[test]
fn explicit_single_point_grid_has_zero_step() {
    let grid = TargetGrid::from_timestamps(vec![5]).expect("single point");

    assert_eq!(grid.len(), 1);
    assert_eq!(grid.step_ms(), 0);
}

#[test]
fn explicit_empty_grid_is_rejected() {
    assert!(TargetGrid::from_timestamps(Vec::new()).is_err());
}

#[test]
fn non_increasing_explicit_grid_is_rejected() {
    assert!(TargetGrid::from_timestamps(vec![1, 3, 3]).is_err());
    assert!(TargetGrid::from_timestamps(vec![5, 4]).is_err());
}
