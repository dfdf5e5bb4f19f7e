use super::types::Skills;

pub fn has_converged(old_skills: &Skills, new_skills: &Skills, tolerance: f64) -> bool {
    max_change(old_skills, new_skills) <= tolerance
}

pub fn max_change(old_skills: &Skills, new_skills: &Skills) -> f64 {
    old_skills
        .iter()
        .zip(new_skills.iter())
        .map(|(old_val, new_val)| (new_val - old_val).abs())
        .fold(0.0, f64::max)
}

pub fn should_continue(iteration: usize, max_iterations: usize) -> bool {
    iteration < max_iterations
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn test_change_at_tolerance_counts_as_converged() {
        let old = Array1::from(vec![1.0, 2.0]);
        let new = Array1::from(vec![1.0, 2.00005]);

        assert!(has_converged(&old, &new, 1e-4));
        assert!(!has_converged(&old, &new, 1e-5));
    }

    #[test]
    fn test_max_change_picks_largest_move() {
        let old = Array1::from(vec![1.0, 2.0, 3.0]);
        let new = Array1::from(vec![1.5, 1.0, 3.1]);

        assert!((max_change(&old, &new) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_iteration_cap() {
        assert!(should_continue(9, 10));
        assert!(!should_continue(10, 10));
    }
}
