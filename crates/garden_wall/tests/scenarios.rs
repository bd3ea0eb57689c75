use garden_wall::{
    Config, Point, Segment, SegmentCatalog, SelectionMode, WallError, convex_hull, min_cost,
    read_problem, solve,
};

fn points(coords: &[(i32, i32)]) -> Vec<Point> {
    coords.iter().copied().map(Point::from).collect()
}

fn catalog(pairs: &[(u32, u32)]) -> SegmentCatalog {
    pairs.iter().copied().map(Segment::from).collect()
}

#[test]
fn square_with_interior_plant() {
    let hull = convex_hull(&points(&[(0, 0), (4, 0), (4, 4), (0, 4), (2, 2)]));

    assert_eq!(hull.vertices, points(&[(0, 0), (4, 0), (4, 4), (0, 4)]));
    assert!((hull.perimeter - 16.0).abs() < 1e-9);
}

#[test]
fn cheapest_cover_of_16() {
    assert_eq!(min_cost(&catalog(&[(5, 3), (7, 4), (10, 9)]), 16.0), Some(13));
}

#[test]
fn single_short_offer_is_infeasible() {
    assert_eq!(min_cost(&catalog(&[(3, 1)]), 10.0), None);
}

#[test]
fn right_triangle() {
    let input = points(&[(0, 0), (10, 0), (0, 10)]);
    let hull = convex_hull(&input);

    assert_eq!(hull.vertices, input);
    assert!((hull.perimeter - (20.0 + 10.0 * 2f64.sqrt())).abs() < 1e-9);
}

#[test]
fn hulls_of_permuted_input_are_rotations() {
    let input = points(&[(1, 7), (-4, 2), (6, -3), (0, 0), (3, 3), (-2, -5), (5, 5)]);
    let base = convex_hull(&input);
    assert!(base.is_strictly_convex());

    let mut permuted = input.clone();
    permuted.swap(0, 6);
    permuted.swap(2, 4);
    permuted.reverse();
    let other = convex_hull(&permuted);

    let n = base.len();
    assert_eq!(other.len(), n);
    let offset = other
        .vertices
        .iter()
        .position(|v| *v == base.vertices[0])
        .expect("same vertex set");
    for i in 0..n {
        assert_eq!(other.vertices[(offset + i) % n], base.vertices[i]);
    }
    assert!((base.perimeter - other.perimeter).abs() < 1e-9);
}

#[test]
fn console_input_end_to_end() {
    let input = "3\n5\n5 3\n7 4\n10 9\n0 0\n4 0\n4 4\n0 4\n2 2\n";
    let problem = read_problem(input.as_bytes()).unwrap();
    problem.validate().unwrap();

    let solution = solve(&problem.points, &problem.catalog, SelectionMode::Bounded);
    assert_eq!(solution.price(), Some(13));
}

#[test]
fn console_input_rejects_collinear_plants() {
    let input = "1\n3\n5 3\n0 0\n1 1\n2 2\n";
    let problem = read_problem(input.as_bytes()).unwrap();

    assert!(matches!(
        problem.validate(),
        Err(WallError::DegeneratePoints(_))
    ));
}

#[test]
fn default_config_is_bounded() {
    assert_eq!(Config::default().solver.mode, SelectionMode::Bounded);
}
