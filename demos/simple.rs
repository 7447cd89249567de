use maze_pathfinding::{trace_path, MazeEditor, EditorSettings};

// In this example a path is found on a 5x4 maze with shape
// SNNNN
// NXXXN
// NXNXN
// NNNXF
// where
// - X marks a barrier
// - S marks the start
// - F marks the finish
//
// After the search, + marks the path and - the dead ends that were explored.

fn main() {
    let mut editor = MazeEditor::new(EditorSettings::new(5, 4));
    for (x, y) in [(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (3, 3)] {
        editor.place_barrier(x, y).unwrap();
    }
    println!("{}", editor.maze());
    let found = editor.find_path();
    println!("Is there a path: {}", found);
    println!("{}", editor.maze());
    if let Some(path) = trace_path(editor.maze()) {
        println!("Path:");
        for p in path {
            println!("{:?}", p);
        }
    }
}
