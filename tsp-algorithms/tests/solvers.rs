use rand::{rngs::SmallRng, Rng, SeedableRng};
use tsp_algorithms::{permutations::Permutations, travelling_salesman::*};
use tsp_challenges::{
    generators::*, Coordinates, CostMatrix, CostModel, EdgeMatrix, Tour, TspError,
};

fn reference_matrix() -> CostMatrix<u32> {
    CostMatrix::new(vec![
        vec![0, 2, 9, 10],
        vec![1, 0, 6, 4],
        vec![15, 7, 0, 8],
        vec![6, 3, 12, 0],
    ])
    .unwrap()
}

fn random_matrix(n: usize, rng: &mut SmallRng) -> CostMatrix<u32> {
    CostMatrix::from_fn(n, |_, _| rng.gen_range(1..=100))
}

fn assert_is_tour<C>(tour: &Tour<C>, n: usize) {
    let mut sorted = tour.route.clone();
    sorted.sort();
    assert_eq!(sorted, (0..n).collect::<Vec<_>>());
    if n > 0 {
        assert_eq!(tour.route[0], 0);
    }
}

#[test]
fn test_reference_matrix() {
    let matrix = reference_matrix();
    let exact = exact::solve(&matrix);
    let dp = held_karp::solve(&matrix).unwrap();
    assert_eq!(exact.cost, 21);
    assert_eq!(dp.cost, 21);
    assert_eq!(exact.route, vec![0, 2, 3, 1]);
    assert_eq!(matrix.tour_cost(&dp.route).unwrap(), 21);
    assert_eq!(exact::solve_unanchored(&matrix).cost, 21);
}

#[test]
fn test_exact_and_held_karp_agree() {
    let mut rng = SmallRng::seed_from_u64(2024);
    for n in 0..=8 {
        for _ in 0..5 {
            let matrix = random_matrix(n, &mut rng);
            let exact = exact::solve(&matrix);
            let dp = held_karp::solve(&matrix).unwrap();
            assert_is_tour(&exact, n);
            assert_is_tour(&dp, n);
            assert_eq!(exact.cost, dp.cost, "n={} matrix={:?}", n, matrix);
            assert_eq!(matrix.tour_cost(&dp.route).unwrap(), dp.cost);
            assert_eq!(matrix.tour_cost(&exact.route).unwrap(), exact.cost);
        }
    }
}

#[test]
fn test_exact_is_optimal_against_all_orderings() {
    let mut rng = SmallRng::seed_from_u64(5);
    let matrix = random_matrix(6, &mut rng);
    let best = exact::solve(&matrix);
    for route in Permutations::new(6) {
        assert!(matrix.tour_cost(&route).unwrap() >= best.cost);
    }
    assert_eq!(exact::solve_unanchored(&matrix).cost, best.cost);
}

#[test]
fn test_float_costs() {
    let coordinates = Coordinates::new(vec![(0, 0), (10, 0), (10, 10), (0, 10), (5, 5), (2, 8)]);
    let exact = exact::solve(&coordinates);
    let dp = held_karp::solve(&coordinates).unwrap();
    assert!((exact.cost - dp.cost).abs() < 1e-9);
    let recomputed = coordinates.tour_cost(&dp.route).unwrap();
    assert!((recomputed - dp.cost).abs() < 1e-9);

    let matrix = coordinates.to_matrix();
    let from_matrix = held_karp::solve(&matrix).unwrap();
    assert!((from_matrix.cost - dp.cost).abs() < 1e-9);
}

#[test]
fn test_unit_costs_give_tour_of_length_n() {
    for n in 2..=8 {
        let matrix = generate_best_case_input(n);
        assert_eq!(exact::solve(&matrix).cost, n as u32);
        assert_eq!(held_karp::solve(&matrix).unwrap().cost, n as u32);
        assert_eq!(
            greedy::solve(&EdgeMatrix::from(&matrix)).unwrap().cost,
            n as u32
        );
    }
}

#[test]
fn test_single_city() {
    let matrix = generate_best_case_input(1);
    let expected = Tour {
        route: vec![0],
        cost: 0,
    };
    assert_eq!(exact::solve(&matrix), expected);
    assert_eq!(held_karp::solve(&matrix).unwrap(), expected);
    assert_eq!(
        greedy::solve(&EdgeMatrix::from(&matrix)),
        Some(expected.clone())
    );
    assert_eq!(
        greedy::solve(&EdgeMatrix::from_zero_sentinel(&matrix)),
        Some(expected)
    );
}

#[test]
fn test_no_cities() {
    let matrix = CostMatrix::<u32>::new(vec![]).unwrap();
    assert_eq!(exact::solve(&matrix).route, Vec::<usize>::new());
    assert_eq!(held_karp::solve(&matrix).unwrap().cost, 0);
    assert_eq!(greedy::solve(&EdgeMatrix::from(&matrix)).unwrap().cost, 0);
}

#[test]
fn test_two_cities() {
    let matrix = CostMatrix::new(vec![vec![0, 3], vec![4, 0]]).unwrap();
    let expected = Tour {
        route: vec![0, 1],
        cost: 7,
    };
    assert_eq!(exact::solve(&matrix), expected);
    assert_eq!(held_karp::solve(&matrix).unwrap(), expected);
}

#[test]
fn test_worst_case_avoids_expensive_edges() {
    for n in 5..=8 {
        let matrix = generate_worst_case_input(n);
        let exact = exact::solve(&matrix);
        let dp = held_karp::solve(&matrix).unwrap();
        // With five or more cities a tour avoiding the expensive cycle exists.
        assert_eq!(exact.cost, n as u32 * CHEAP_EDGE);
        assert_eq!(dp.cost, exact.cost);
    }
}

#[test]
fn test_greedy_reports_no_valid_tour() {
    // City 2 can be entered but has no outgoing edges.
    let matrix = CostMatrix::new(vec![
        vec![0u32, 4, 5, 3],
        vec![2, 0, 0, 6],
        vec![0, 0, 0, 0],
        vec![1, 2, 0, 0],
    ])
    .unwrap();
    let edges = EdgeMatrix::from_zero_sentinel(&matrix);
    assert_eq!(greedy::solve(&edges), None);
    // Reading the same zeros as free edges finds a tour.
    assert!(greedy::solve(&EdgeMatrix::from(&matrix)).is_some());
}

#[test]
fn test_greedy_matches_exact_without_missing_edges() {
    let mut rng = SmallRng::seed_from_u64(99);
    for n in 1..=7 {
        let matrix = random_matrix(n, &mut rng);
        let edges = EdgeMatrix::from_zero_sentinel(&matrix);
        assert_eq!(edges.num_missing_edges(), 0);
        let greedy = greedy::solve(&edges).unwrap();
        let exact = exact::solve(&matrix);
        assert_eq!(greedy, exact);
    }
}

#[test]
fn test_greedy_routes_around_missing_edges() {
    let edges = EdgeMatrix::new(vec![
        vec![None, Some(1u32), None, Some(10)],
        vec![Some(1), None, Some(1), None],
        vec![None, Some(1), None, Some(1)],
        vec![Some(10), None, Some(1), None],
    ])
    .unwrap();
    let tour = greedy::solve(&edges).unwrap();
    assert_eq!(tour.route, vec![0, 1, 2, 3]);
    assert_eq!(tour.cost, 13);
}

#[test]
fn test_held_karp_rejects_large_inputs() {
    let matrix = generate_best_case_input(held_karp::MAX_CITIES + 1);
    assert_eq!(
        held_karp::solve(&matrix).unwrap_err(),
        TspError::TooManyCities {
            cities: held_karp::MAX_CITIES + 1,
            limit: held_karp::MAX_CITIES
        }
    );
}

#[test]
fn test_held_karp_scales_past_exact() {
    let mut rng = SmallRng::seed_from_u64(3);
    let matrix = random_matrix(13, &mut rng);
    let tour = held_karp::solve(&matrix).unwrap();
    assert_is_tour(&tour, 13);
    assert_eq!(matrix.tour_cost(&tour.route).unwrap(), tour.cost);
}

#[test]
fn test_registry() {
    for name in ALGORITHMS {
        assert!(algorithm_exists(name));
        assert!(max_cities(name).is_some());
    }
    assert!(!algorithm_exists("simulated_annealing"));
    assert!(get_algorithm("simulated_annealing").is_none());

    let matrix = reference_matrix().map(f64::from);
    for name in ALGORITHMS {
        let solve = get_algorithm(name).unwrap();
        let tour = solve(&matrix).unwrap().unwrap();
        assert_eq!(tour.cost, 21.0, "{}", name);
    }

    let disconnected = CostMatrix::new(vec![
        vec![0.0, 0.0, 1.0],
        vec![0.0, 0.0, 1.0],
        vec![1.0, 1.0, 0.0],
    ])
    .unwrap();
    assert_eq!(greedy::solve_challenge(&disconnected).unwrap(), None);
    let too_large = generate_best_case_input(21).map(f64::from);
    assert!(held_karp::solve_challenge(&too_large).is_err());
}

#[test]
fn test_costs_near_integer_limit() {
    let big = 1u64 << 31;
    let rows = vec![vec![0, 50, big], vec![1, 0, 50], vec![50, big, 0]];
    let narrow: Vec<Vec<u32>> = rows
        .iter()
        .map(|row| row.iter().map(|&cost| cost as u32).collect())
        .collect();
    let narrow = CostMatrix::new(narrow);
    assert!(matches!(narrow, Err(TspError::InvalidMatrix(_))));

    let matrix = CostMatrix::new(rows).unwrap();
    let exact = exact::solve(&matrix);
    let dp = held_karp::solve(&matrix).unwrap();
    assert_eq!(exact.route, vec![0, 1, 2]);
    assert_eq!(exact.cost, 150);
    assert_eq!(dp.route, vec![0, 1, 2]);
    assert_eq!(dp.cost, 150);
    assert_eq!(matrix.tour_cost(&[0, 2, 1]).unwrap(), 2 * big + 1);
}
