use maze_pathfinding::{find_path, find_path_from, trace_path, Cell, Maze, MazeError, Point};

// Every non-barrier cell reachable from the start ends up marked one way or the other,
// while the cut-off part is never touched.
#[test]
fn unreachable_region_is_left_untouched() {
    //  SNXNN
    //  NNXNN
    //  XXXNF
    let mut maze: Maze = "SNXNN\nNNXNN\nXXXNF".parse().unwrap();
    assert!(!find_path(&mut maze));
    assert_eq!(maze.to_string(), "--XNN\n--XNN\nXXXNF\n");
}

#[test]
fn winding_corridor() {
    // S N N N N
    // X X X X N
    // N N N N N
    // N X X X X
    // N N N N F
    let mut maze: Maze = "SNNNN\nXXXXN\nNNNNN\nNXXXX\nNNNNF".parse().unwrap();
    assert!(find_path(&mut maze));
    let path = trace_path(&maze).unwrap();
    assert_eq!(path.len(), 17);
    assert_eq!(path[4], Point::new(4, 0));
    assert_eq!(path[5], Point::new(4, 1));
    assert!(maze.cells().all(|(_, c)| c != Cell::DeadEnd));
}

#[test]
fn editing_between_searches() {
    let mut maze = Maze::new(4, 4);
    for row in 0..3 {
        maze.set(row, 1, Cell::Barrier).unwrap();
    }
    maze.set(3, 1, Cell::Barrier).unwrap();
    assert!(!find_path(&mut maze));

    // Opening the wall afterwards does not help, the start is a dead end now.
    maze.set(3, 1, Cell::Open).unwrap();
    assert!(!find_path(&mut maze));
    assert_eq!(maze.get(0, 0).unwrap(), Cell::DeadEnd);

    let mut fresh = Maze::new(4, 4);
    for row in 0..3 {
        fresh.set(row, 1, Cell::Barrier).unwrap();
    }
    assert!(find_path(&mut fresh));
}

#[test]
fn overwritten_start_blocks_search() {
    let mut maze = Maze::new(3, 3);
    maze.set(0, 0, Cell::Barrier).unwrap();
    assert!(!find_path(&mut maze));
    // Probing from another cell still works
    assert!(find_path_from(&mut maze, 1, 0));
}

#[test]
fn out_of_range_errors_carry_dimensions() {
    let mut maze = Maze::new(1, 5);
    let err = maze.set(5, 0, Cell::Barrier).unwrap_err();
    assert_eq!(
        err,
        MazeError::OutOfBounds {
            row: 5,
            col: 0,
            width: 3,
            height: 5
        }
    );
    assert_eq!(
        err.to_string(),
        "cell (row 5, col 0) out of bounds for maze 3x5"
    );
}
