use grid_util::point::Point;
use terrain_pathfinding::*;

fn points(coords: &[(i32, i32)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Map used by the sunshine demo. `^` marks mountains.
const SUNSHINE: &str = "
..^.......
..^.......
..^.^.....
..^.^.....
..^.^.....
..^.^.....
..^.^.....
....^.....
....^.....
....^^....
";

#[test]
fn open_grid_takes_the_diagonal() {
    let grid = TerrainGrid::new(10, TerrainKind::Open);
    let expected = points(&[
        (1, 1),
        (2, 2),
        (3, 3),
        (4, 4),
        (5, 5),
        (6, 6),
        (7, 7),
        (8, 8),
    ]);
    for heuristic in [Heuristic::AxisSum, Heuristic::Euclidean] {
        let route = find_path(&grid, Point::new(1, 1), Point::new(8, 8), heuristic).unwrap();
        assert_eq!(route, expected);
    }
}

#[test]
fn straight_line() {
    let grid = TerrainGrid::new(10, TerrainKind::Open);
    let expected = (0..6).map(|x| Point::new(x, 0)).collect::<Vec<_>>();
    for heuristic in [Heuristic::AxisSum, Heuristic::Euclidean] {
        let route = find_path(&grid, Point::new(0, 0), Point::new(5, 0), heuristic).unwrap();
        assert_eq!(route, expected);
    }
}

/// Both metrics take the same number of steps, but break the ties in a different place.
#[test]
fn heuristics_agree_on_length_not_on_shape() {
    let grid = TerrainGrid::new(10, TerrainKind::Open);
    let (start, goal) = (Point::new(0, 0), Point::new(5, 2));
    let axis_sum = find_path(&grid, start, goal, Heuristic::AxisSum).unwrap();
    let euclidean = find_path(&grid, start, goal, Heuristic::Euclidean).unwrap();
    assert_eq!(
        axis_sum,
        points(&[(0, 0), (1, 1), (2, 2), (3, 2), (4, 2), (5, 2)])
    );
    assert_eq!(
        euclidean,
        points(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)])
    );
}

#[test]
fn walks_around_a_mountain_wall() {
    let mut grid = TerrainGrid::new(10, TerrainKind::Open);
    let wall = grid.costs().most_expensive();
    grid.set_rect(2, 0, 1, 7, wall);
    let (start, goal) = (Point::new(1, 1), Point::new(8, 8));
    for heuristic in [Heuristic::AxisSum, Heuristic::Euclidean] {
        let route = find_path(&grid, start, goal, heuristic).unwrap();
        assert!(is_connected_route(&route, &start, &goal));
        assert!(route.iter().all(|p| !(p.x == 2 && p.y <= 6)), "{route:?}");
    }
    let route = find_path(&grid, start, goal, Heuristic::AxisSum).unwrap();
    assert_eq!(
        route,
        points(&[
            (1, 1),
            (1, 2),
            (1, 3),
            (1, 4),
            (1, 5),
            (1, 6),
            (2, 7),
            (3, 8),
            (4, 8),
            (5, 8),
            (6, 8),
            (7, 8),
            (8, 8),
        ])
    );
}

#[test]
fn sunshine_map_avoids_mountains() {
    let grid: TerrainGrid = SUNSHINE.parse().unwrap();
    let (start, goal) = (Point::new(1, 1), Point::new(8, 8));
    for heuristic in [Heuristic::AxisSum, Heuristic::Euclidean] {
        for movement in [MovementCost::StepDistance, MovementCost::Accumulated] {
            let route = PathFinder::new(heuristic)
                .with_movement(movement)
                .find_path(&grid, start, goal)
                .unwrap();
            assert!(is_connected_route(&route, &start, &goal));
            assert!(route
                .iter()
                .all(|p| grid.terrain_at(p) != TerrainKind::Mountain));
        }
    }
}

#[test]
fn route_changes_when_terrain_changes() {
    let mut grid = TerrainGrid::new(10, TerrainKind::Open);
    let (start, goal) = (Point::new(1, 1), Point::new(8, 8));
    let before = find_path(&grid, start, goal, Heuristic::AxisSum).unwrap();
    grid.set(&Point::new(4, 4), TerrainKind::Mountain);
    let after = find_path(&grid, start, goal, Heuristic::AxisSum).unwrap();
    assert!(before.contains(&Point::new(4, 4)));
    assert!(!after.contains(&Point::new(4, 4)));
    assert!(is_connected_route(&after, &start, &goal));
}

#[test]
fn cost_table_is_part_of_the_grid() {
    // With water made free the straight route through the lake is taken
    let mut grid = TerrainGrid::new(6, TerrainKind::Open);
    grid.set_rect(1, 0, 4, 6, TerrainKind::Water);
    let (start, goal) = (Point::new(0, 0), Point::new(5, 0));
    let solver = PathFinder::new(Heuristic::AxisSum).with_movement(MovementCost::Accumulated);

    let expensive = solver.find_path(&grid, start, goal).unwrap();
    grid.set_costs(CostTable::new([0.0, 10.0, 0.0, 50.0, 100.0]).unwrap());
    let free = solver.find_path(&grid, start, goal).unwrap();

    assert_eq!(free, (0..6).map(|x| Point::new(x, 0)).collect::<Vec<_>>());
    assert_eq!(expensive.len(), 6);
    assert_eq!(solver.route_cost(&grid, &free), 5.0);
}

#[test]
fn invalid_endpoints() {
    let grid = TerrainGrid::new(10, TerrainKind::Open);
    for goal in [Point::new(10, 3), Point::new(3, 10), Point::new(-1, 3)] {
        let err = find_path(&grid, Point::new(1, 1), goal, Heuristic::AxisSum).unwrap_err();
        assert_eq!(
            err,
            PathError::InvalidArgument {
                point: goal,
                side: 10
            }
        );
    }
    let err = find_path(&grid, Point::new(0, 12), Point::new(1, 1), Heuristic::Euclidean)
        .unwrap_err();
    assert!(matches!(err, PathError::InvalidArgument { .. }));
}

#[test]
fn unreachable_goal_is_reported() {
    let table = astar::astar(
        &Point::new(0, 0),
        |_: &Point| Vec::<(Point, f32)>::new(),
        |_| 0.0,
        |p| *p == Point::new(3, 3),
        MovementCost::StepDistance,
    );
    assert!(!table.reached());
    assert!(table.reconstruct(&Point::new(3, 3)).is_none());
}
