use super::*;

#[test]
fn test_enter_leave() {
    let mut guard = RecursionGuard::new(4, 100);

    assert_eq!(guard.enter(1u32), RecursionResult::Entered);
    assert_eq!(guard.enter(2u32), RecursionResult::Entered);
    assert_eq!(guard.depth(), 2);
    assert!(guard.is_visiting(&1));

    guard.leave(2);
    guard.leave(1);
    assert_eq!(guard.depth(), 0);
    assert_eq!(guard.iterations(), 2);
}

#[test]
fn test_cycle_on_current_path() {
    let mut guard = RecursionGuard::new(4, 100);

    assert!(guard.enter(1u32).is_entered());
    assert!(guard.enter(1u32).is_cycle());
    guard.leave(1);

    // Revisiting after leaving is a diamond, not a cycle.
    assert!(guard.enter(1u32).is_entered());
    guard.leave(1);
}

#[test]
fn test_depth_exceeded() {
    let mut guard = RecursionGuard::new(2, 100);

    assert!(guard.enter(1u32).is_entered());
    assert!(guard.enter(2u32).is_entered());
    assert_eq!(guard.enter(3u32), RecursionResult::DepthExceeded);
    guard.leave(2);
    guard.leave(1);
}

#[test]
fn test_iterations_exceeded() {
    let mut guard = RecursionGuard::with_profile(RecursionProfile::Custom {
        max_depth: 10,
        max_iterations: 2,
    });

    for _ in 0..2 {
        assert!(guard.enter(1u32).is_entered());
        guard.leave(1);
    }
    assert!(guard.enter(1u32).is_exceeded());
}

#[test]
fn test_hierarchy_profile_limits() {
    let guard: RecursionGuard<u32> = RecursionGuard::with_profile(RecursionProfile::HierarchyWalk);
    assert_eq!(guard.max_depth(), propgen_common::limits::MAX_HIERARCHY_DEPTH);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "not in the visiting set")]
fn test_debug_leave_without_enter_panics() {
    let mut guard: RecursionGuard<u32> = RecursionGuard::new(4, 100);
    guard.leave(7);
}
