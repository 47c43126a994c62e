//! smallmaze — smallest example for the rust_aco maze pathfinder.
//!
//! Sends 5 walkers per generation through an embedded 7×5 maze for 10
//! generations.  The walls force a 14-step detour and bait the walkers with
//! a long dead-end corridor, so the pheromone trail has real work to do.
//! Swap the embedded text for `load_maze` / `load_path_spec` calls to run a
//! maze from disk.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use aco_colony::{ColonyBuilder, ColonyObserver, GenerationStats};
use aco_core::{ColonyConfig, Generation, Route};
use aco_maze::{parse_maze_reader, parse_path_spec_reader};
use aco_output::{ColonyOutputObserver, CsvWriter, OutputWriter, write_route_file};

// ── Constants ─────────────────────────────────────────────────────────────────

const WALKERS_PER_GENERATION: usize = 5;
const GENERATIONS:            u32   = 10;
const DEPOSIT_TOTAL:          f64   = 100.0;
const EVAPORATION_RATE:       f64   = 0.1;
const SEED:                   u64   = 42;
const STEP_LIMIT:             u64   = 100_000;

// ── Embedded maze ─────────────────────────────────────────────────────────────

// 7 columns × 5 rows; 1 = walkable, 0 = wall.  The geodesic from (0, 0) to
// (6, 4) is 14 steps against a Manhattan distance of 10, and the corridor
// up the right side is a seven-cell dead end.
const MAZE_TEXT: &str = "\
7 5
1 1 1 0 1 1 1
0 0 1 0 1 0 1
1 1 1 1 1 0 1
1 0 0 0 0 0 0
1 1 1 1 1 1 1
";

const PATH_TEXT: &str = "\
0, 0;
6, 4;
";

// ── Observer wrapper to echo progress ─────────────────────────────────────────

struct ProgressObserver<W: OutputWriter> {
    inner:        ColonyOutputObserver<W>,
    summary_rows: usize,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: ColonyOutputObserver<W>) -> Self {
        Self { inner, summary_rows: 0 }
    }
}

impl<W: OutputWriter> ColonyObserver for ProgressObserver<W> {
    fn on_generation_end(&mut self, generation: Generation, stats: &GenerationStats) {
        self.summary_rows += 1;
        println!(
            "{generation}: {} routes, {} failed, shortest {}, best {}",
            stats.routes_completed,
            stats.walks_failed,
            stats
                .shortest_this_generation
                .map(|len| len.to_string())
                .unwrap_or_else(|| "-".into()),
            stats
                .shortest_overall
                .map(|len| len.to_string())
                .unwrap_or_else(|| "-".into()),
        );
        self.inner.on_generation_end(generation, stats);
    }

    fn on_run_end(&mut self, best: Option<&Route>) {
        self.inner.on_run_end(best);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== smallmaze — rust_aco maze pathfinder ===");
    println!(
        "Walkers: {WALKERS_PER_GENERATION}  |  Generations: {GENERATIONS}  |  Seed: {SEED}"
    );
    println!();

    // 1. Parse the embedded maze and path spec.
    let maze = parse_maze_reader(Cursor::new(MAZE_TEXT))?;
    let endpoints = parse_path_spec_reader(Cursor::new(PATH_TEXT))?;
    println!("Maze: {maze}");
    println!("Path: {endpoints}");

    // 2. Colony config.
    let config = ColonyConfig {
        walkers_per_generation: WALKERS_PER_GENERATION,
        generations:            GENERATIONS,
        deposit_total:          DEPOSIT_TOTAL,
        evaporation_rate:       EVAPORATION_RATE,
        seed:                   SEED,
        step_limit:             Some(STEP_LIMIT),
    };

    // 3. Build the colony (validates config and endpoints).
    let mut colony = ColonyBuilder::new(maze, endpoints, config).build()?;

    // 4. Set up output.
    std::fs::create_dir_all("output/smallmaze")?;
    let writer = CsvWriter::new(Path::new("output/smallmaze"))?;
    let mut obs = ProgressObserver::new(ColonyOutputObserver::new(writer));

    // 5. Run.
    let t0 = Instant::now();
    let best = colony.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!();
    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!("  generation_summaries.csv : {} rows", obs.summary_rows);

    let Some(best) = best else {
        println!("No walker reached the end cell.");
        return Ok(());
    };
    println!("  best route               : {best}");

    // 7. Save the route and a manifest describing the run.
    write_route_file(Path::new("output/smallmaze/route.txt"), &best)?;

    let manifest = serde_json::json!({
        "maze": {
            "width":          colony.maze.width(),
            "length":         colony.maze.length(),
            "walkable_cells": colony.maze.walkable_count(),
        },
        "start":                  [endpoints.start.x, endpoints.start.y],
        "end":                    [endpoints.end.x, endpoints.end.y],
        "walkers_per_generation": WALKERS_PER_GENERATION,
        "generations":            GENERATIONS,
        "deposit_total":          DEPOSIT_TOTAL,
        "evaporation_rate":       EVAPORATION_RATE,
        "seed":                   SEED,
        "best_route_steps":       best.len(),
        "elapsed_secs":           elapsed.as_secs_f64(),
    });
    std::fs::write(
        "output/smallmaze/run_manifest.json",
        serde_json::to_string_pretty(&manifest)?,
    )?;
    println!("  route.txt                : {} steps", best.len());
    println!("  run_manifest.json        : written");

    Ok(())
}
