/// Asserts two floats agree within a tolerance.
#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r): (f64, f64) = ($left, $right);
        assert!(
            (l - r).abs() <= $tol,
            "{} and {} differ by more than {}",
            l,
            r,
            $tol
        );
    };
}

/// Asserts that no pellet with the given id is present in the world.
#[macro_export]
macro_rules! assert_pellet_gone {
    ($world:expr, $id:expr) => {
        let exists = $world.falling_particles().iter().any(|p| p.id == $id);
        assert!(!exists, "Pellet {} should be gone but is still falling", $id);
    };
}

/// Asserts that every agent depth lies inside the seek clamp.
#[macro_export]
macro_rules! assert_depths_clamped {
    ($world:expr) => {
        for view in $world.agents() {
            assert!(
                view.depth >= 5.0 && view.depth <= 95.0,
                "Agent {} depth {} left the clamp",
                view.id,
                view.depth
            );
        }
    };
}
