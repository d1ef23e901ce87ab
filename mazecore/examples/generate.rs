use std::env;

use mazecore::{dims::Dims, CellWall, Maze};

fn main() {
    let args = env::args()
        .skip(1)
        .take(3)
        .map(|s| s.parse())
        .collect::<Result<Vec<i64>, _>>()
        .expect("Expected 2 or 3 integers");

    assert!(
        args.len() == 2 || args.len() == 3,
        "Expected 2 or 3 integers"
    );

    let size = Dims(args[0] as i32, args[1] as i32);
    let input_seed = args.get(2).map(|&seed| seed as u64);

    let maze = Maze::generate(size, input_seed).expect("Invalid size");
    if input_seed.is_none() {
        println!("Seed: {}", maze.seed());
    }

    let path = maze.solve_default();
    println!("Solution: {} steps", path.edge_count());
    show_maze(&maze, path.cells());
}

fn show_maze(maze: &Maze, path: &[Dims]) {
    let grid = maze.grid();
    let wall = |pos: Dims, wall: CellWall| grid.has_wall(pos, wall).unwrap_or(true);

    println!("+{}", "--+".repeat(maze.width() as usize));
    for y in 0..maze.height() {
        let mut row = String::from("|");
        let mut below = String::from("+");

        for x in 0..maze.width() {
            let pos = Dims(x, y);
            row.push_str(if path.contains(&pos) { "••" } else { "  " });
            row.push(if wall(pos, CellWall::East) { '|' } else { ' ' });
            below.push_str(if wall(pos, CellWall::South) { "--+" } else { "  +" });
        }

        println!("{}", row);
        println!("{}", below);
    }
}
