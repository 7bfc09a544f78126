use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::MoveTo,
    execute,
    style::Stylize,
    terminal::{Clear, ClearType},
};
use log::error;

use grid_pathfinder::{
    BfsContext, BidirectionalContext, Cell, Coord, DfsContext, Error, ObstacleGrid, SearchConfig,
    SearchFrame, SearchMetadata, SearchObserver, Size, UniformCostContext, DEFAULT_DEPTH_LIMIT,
};

const GRID_SIZE: u32 = 10;
const WALL_COLUMN: i32 = 5;
const FRAME_DELAY_MS: u64 = 40;

struct TerminalRenderer<'a> {
    grid: &'a ObstacleGrid,
    start: Coord,
    target: Coord,
}

impl TerminalRenderer<'_> {
    fn draw(&self, frame: &SearchFrame) -> io::Result<()> {
        let mut out = io::stdout();
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        writeln!(out, "{}", frame.algorithm.bold())?;

        for y in 0..self.grid.height() as i32 {
            let mut line = String::new();
            for x in 0..self.grid.width() as i32 {
                let coord = Coord::new(x, y);
                let styled = if coord == self.start {
                    "S".green().bold()
                } else if coord == self.target {
                    "T".red().bold()
                } else if frame.path.map_or(false, |path| path.contains(&coord)) {
                    "*".magenta().bold()
                } else if coord == frame.current {
                    "@".yellow()
                } else if frame.frontier.contains(&coord) {
                    "o".cyan()
                } else if frame.explored.contains(&coord) {
                    "+".dark_yellow()
                } else if self.grid.cell(coord) == Some(Cell::Blocked) {
                    "#".dark_grey()
                } else {
                    ".".grey()
                };
                line.push_str(&styled.to_string());
                line.push(' ');
            }
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }
}

impl SearchObserver for TerminalRenderer<'_> {
    fn frame(&mut self, frame: SearchFrame) {
        if let Err(err) = self.draw(&frame) {
            error!("frame rendering failed: {}", err);
        }
        thread::sleep(Duration::from_millis(FRAME_DELAY_MS));
    }
}

fn report(result: Result<SearchMetadata<usize>, Error>) {
    match result {
        Ok(metadata) => println!(
            "path found: {} moves, {} nodes expanded",
            metadata.length, metadata.num_nodes_visited
        ),
        Err(Error::NoPath) => println!("no path found"),
        Err(err) => println!("search failed: {:?}", err),
    }
}

fn run(choice: &str, grid: &ObstacleGrid, start: Coord, target: Coord) -> bool {
    let config = SearchConfig::default();
    let mut renderer = TerminalRenderer {
        grid,
        start,
        target,
    };
    let mut path = Vec::new();
    match choice {
        "1" => {
            let mut ctx = BfsContext::new(grid.size());
            report(ctx.bfs(grid, start, target, config, &mut renderer, &mut path));
        }
        "2" => {
            let mut ctx = DfsContext::new(grid.size());
            report(ctx.dfs(grid, start, target, config, &mut renderer, &mut path));
        }
        "3" => {
            let mut ctx = UniformCostContext::<usize>::new(grid.size());
            report(ctx.uniform_cost(grid, start, target, config, &mut renderer, &mut path));
        }
        "4" => {
            let mut ctx = DfsContext::new(grid.size());
            report(ctx.depth_limited(
                grid,
                start,
                target,
                DEFAULT_DEPTH_LIMIT,
                config,
                &mut renderer,
                &mut path,
            ));
        }
        "5" => {
            let mut ctx = DfsContext::new(grid.size());
            report(ctx.iterative_deepening(grid, start, target, config, &mut renderer, &mut path));
        }
        "6" => {
            let mut ctx = BidirectionalContext::new(grid.size());
            report(ctx.bidirectional(grid, start, target, config, &mut renderer, &mut path));
        }
        "7" => return false,
        other => println!("unrecognised choice: {:?}", other),
    }
    true
}

fn main() -> io::Result<()> {
    env_logger::init();

    let grid = ObstacleGrid::with_column_wall(Size::new(GRID_SIZE, GRID_SIZE), WALL_COLUMN, 2..=7);
    let start = Coord::new(7, 7);
    let target = Coord::new(1, 8);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!();
        println!("Grid Pathfinder");
        println!("1. BFS  2. DFS  3. UCS  4. DLS  5. IDDFS  6. Bidirectional  7. Exit");
        print!("Select algorithm: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        if !run(line?.trim(), &grid, start, target) {
            break;
        }
    }
    Ok(())
}
