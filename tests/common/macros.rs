/// Asserts that replaying `$route` from its start lands on `$spec`'s end.
#[macro_export]
macro_rules! assert_reaches_end {
    ($route:expr, $spec:expr) => {
        assert_eq!(
            $route.end(),
            $spec.end(),
            "Route {} does not end at {}",
            $route,
            $spec.end()
        );
    };
}

/// Asserts that every cell a route visits, including the last, is open.
#[macro_export]
macro_rules! assert_route_open {
    ($maze:expr, $route:expr) => {
        for cell in $route.coordinates().chain(std::iter::once($route.end())) {
            assert!(
                $maze.is_accessible(&cell),
                "Route {} passes through blocked cell {}",
                $route,
                cell
            );
        }
    };
}

/// Asserts that two pheromone fields agree cell by cell.
#[macro_export]
macro_rules! assert_same_field {
    ($a:expr, $b:expr) => {
        assert_eq!($a.width(), $b.width(), "Maze widths differ");
        assert_eq!($a.length(), $b.length(), "Maze lengths differ");
        for x in 0..$a.width() as i32 {
            for y in 0..$a.length() as i32 {
                let cell = pheromaze_lib::model::Coordinate::new(x, y);
                assert_eq!(
                    $a.pheromone(&cell),
                    $b.pheromone(&cell),
                    "Pheromone differs at {}",
                    cell
                );
            }
        }
    };
}
