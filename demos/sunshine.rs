use grid_util::point::Point;
use terrain_pathfinding::{Heuristic, PathFinder, TerrainGrid};

// Mountain ranges (^) between start S and goal G
const MAP: &str = "
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

fn main() {
    let grid: TerrainGrid = MAP.parse().expect("map is valid");
    let start = Point::new(1, 1);
    let goal = Point::new(8, 8);
    let heuristic = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<Heuristic>().expect("axis-sum or euclidean"))
        .unwrap_or_default();

    let outcome = PathFinder::new(heuristic)
        .search(&grid, start, goal)
        .expect("goal is reachable");
    println!(
        "{} cells with {heuristic}, {} expanded:",
        outcome.route.len(),
        outcome.expanded()
    );
    for y in 0..grid.side() as i32 {
        let row = (0..grid.side() as i32)
            .map(|x| {
                let p = Point::new(x, y);
                if p == start {
                    'S'
                } else if p == goal {
                    'G'
                } else if outcome.route.contains(&p) {
                    '*'
                } else {
                    grid.terrain_at(&p).symbol()
                }
            })
            .collect::<String>();
        println!("{row}");
    }
    println!("\nF per cell:");
    for y in 0..grid.side() as i32 {
        let row = (0..grid.side() as i32)
            .map(|x| match outcome.node(&Point::new(x, y)) {
                Some(node) => format!("{:6.1}", node.f()),
                None => "     -".to_owned(),
            })
            .collect::<String>();
        println!("{row}");
    }
}
