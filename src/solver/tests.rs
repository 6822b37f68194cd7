use crate::evaluator::evaluate;
use crate::expression::Expression;
use crate::generator::ExpressionGenerator;
use crate::solver::{ExpressionSolver, SolverConfig, SolverError};
use crate::test_support::brute_force_values;
use crate::utils::UtilsError;
use crate::{find_solution, solve};

#[test]
fn test_provided_example() {
    let target = 437;
    let numbers = [75, 100, 5, 2, 2, 4];
    let solution = find_solution(target, &numbers);
    assert!(solution.is_some());

    if let Some(text) = solution {
        assert_eq!(evaluate(&text), Ok(target), "{} does not hit target", text);
    }
}

#[test]
fn test_witness_verifies() {
    let solver = ExpressionSolver::default();
    let result = solver.find_solution(1400, &[75, 100, 5, 2]);
    assert!(result.is_some());
    if let Some(expr) = result {
        assert_eq!(expr.value(), 1400);
        assert_eq!(solver.verify(&expr, 1400), Ok(1400));
    }
}

#[test]
fn test_single_number_solution() {
    assert_eq!(find_solution(5, &[5]), Some("5".to_string()));
    assert_eq!(find_solution(6, &[5]), None);
}

#[test]
fn test_subset_solution_prefers_bare_number() {
    assert_eq!(find_solution(100, &[75, 100, 5]), Some("100".to_string()));
}

#[test]
fn test_witness_follows_generation_order() {
    assert_eq!(find_solution(8, &[3, 5]), Some("(3 + 5)".to_string()));
    assert_eq!(find_solution(2, &[3, 5]), Some("(5 - 3)".to_string()));
    assert_eq!(find_solution(40, &[3, 5]), Some("(5 << 3)".to_string()));
}

#[test]
fn test_partition_search_follows_search_order() {
    let mut generator = ExpressionGenerator::new();
    let found = ExpressionSolver::search_partitions(&mut generator, 16, &[2, 2, 3]);
    assert_eq!(found.map(|e| e.to_string()), Some("(2 << 3)".to_string()));

    let found = ExpressionSolver::search_partitions(&mut generator, 0, &[3, 5]);
    assert_eq!(found.map(|e| e.to_string()), Some("(3 >> 5)".to_string()));

    let found = ExpressionSolver::search_partitions(&mut generator, 7, &[7]);
    assert_eq!(found.map(|e| e.to_string()), Some("7".to_string()));
}

#[test]
fn test_no_solution() {
    assert!(!brute_force_values(&[3, 5]).contains(&7));
    assert_eq!(find_solution(7, &[3, 5]), None);
    assert_eq!(find_solution(1, &[]), None);
}

#[test]
fn test_unreachable_targets_agree_with_brute_force() {
    let mut unreachable = 0;
    for numbers in [vec![3, 5], vec![2, 2, 5], vec![0, 7, 1, 3], vec![6, 1, 3, 2]] {
        let reachable = brute_force_values(&numbers);

        for target in -40..=120 {
            let found = find_solution(target, &numbers);
            assert_eq!(
                found.is_none(),
                !reachable.contains(&target),
                "target {} from {:?}",
                target,
                numbers
            );
            if found.is_none() {
                unreachable += 1;
            }
        }
    }
    assert!(unreachable > 0);
}

#[test]
fn test_oversized_input_only_matches_single_numbers() {
    let numbers = vec![1; usize::BITS as usize + 1];
    assert_eq!(find_solution(1, &numbers), Some("1".to_string()));
    assert_eq!(find_solution(2, &numbers), None);
}

#[test]
fn test_memoization_does_not_change_witness() {
    let numbers = [75, 100, 5, 2];
    let cached = ExpressionSolver::new(SolverConfig { memoize: true });
    let uncached = ExpressionSolver::new(SolverConfig { memoize: false });
    assert!(!uncached.config().memoize);

    for target in [0, 37, 181, 401, 1400, -95] {
        let a = cached.find_solution(target, &numbers).map(|e| e.to_string());
        let b = uncached.find_solution(target, &numbers).map(|e| e.to_string());
        assert_eq!(a, b, "witness differs for target {}", target);
    }
}

#[test]
fn test_reachable_targets_round_trip() {
    let numbers = [6, 1, 3];
    let targets = -10..=50;
    let expected = brute_force_values(&numbers)
        .into_iter()
        .filter(|t| targets.contains(t))
        .count();
    assert!(expected > 0);

    let solver = ExpressionSolver::default();
    let mut found = 0;
    for target in targets {
        if let Some(expr) = solver.find_solution(target, &numbers) {
            assert_eq!(evaluate(&expr.to_string()), Ok(target));
            found += 1;
        }
    }
    assert_eq!(found, expected);
}

#[test]
fn test_verify_mismatch() {
    let solver = ExpressionSolver::default();
    assert_eq!(
        solver.verify(&Expression::number(4), 5),
        Err(SolverError::VerificationMismatch {
            expected: 5,
            actual: 4,
        })
    );
}

#[test]
fn test_solve_validates_input() {
    assert_eq!(
        solve(3, &[1, -2]).map(|found| found.map(|e| e.to_string())),
        Err(SolverError::InvalidInput(UtilsError::NegativeNumber(-2)))
    );
    assert_eq!(
        solve(3, &[]).map(|found| found.is_some()),
        Err(SolverError::InvalidInput(UtilsError::EmptyNumbers))
    );

    let found = solve(3, &[1, 2]);
    assert!(matches!(&found, Ok(Some(expr)) if expr.value() == 3));
}
