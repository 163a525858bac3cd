//! voxnav CLI - voxel grid pathfinding over obstacle scenes.
//!
//! - `voxnav grid` - build the grid for a scene and summarize it
//! - `voxnav path` - find a path between two world positions
//! - `voxnav wander` - find a path to a random position and walk it

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use voxnav_core::{Aabb, NavConfig, SplitMix64, Vec3};
use voxnav_grid::{NavVolume, PathFollower, WaypointPath};

#[derive(Parser)]
#[command(name = "voxnav")]
#[command(about = "Voxel grid pathfinding over obstacle volumes", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the grid and summarize its dimensions and validity
    Grid {
        /// Scene file (YAML)
        #[arg(long)]
        scene: PathBuf,
    },

    /// Find a path between two world positions
    Path {
        /// Scene file (YAML)
        #[arg(long)]
        scene: PathBuf,

        /// Start position as x,y,z
        #[arg(long, value_parser = parse_vec3)]
        from: Vec3,

        /// Goal position as x,y,z
        #[arg(long, value_parser = parse_vec3)]
        to: Vec3,
    },

    /// Find a path to a random position inside the bounds and walk it
    Wander {
        /// Scene file (YAML)
        #[arg(long)]
        scene: PathBuf,

        /// Start position as x,y,z
        #[arg(long, value_parser = parse_vec3)]
        from: Vec3,

        /// RNG seed for the goal position
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Movement speed in world units per second
        #[arg(long, default_value_t = 5.0)]
        speed: f32,
    },
}

/// Obstacle scene: an optional config block plus a list of boxes.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Scene {
    config: NavConfig,
    obstacles: Vec<ObstacleSpec>,
}

#[derive(Debug, Deserialize)]
struct ObstacleSpec {
    center: Vec3,
    size: Vec3,
}

impl Scene {
    fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene from {}", path.display()))?;
        let scene: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse scene from {}", path.display()))?;
        Ok(scene)
    }

    fn obstacle_bounds(&self) -> Vec<Aabb> {
        self.obstacles
            .iter()
            .map(|o| Aabb::from_center_size(o.center, o.size))
            .collect()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Grid { scene } => grid_summary(&scene),
        Commands::Path { scene, from, to } => find_path(&scene, from, to),
        Commands::Wander {
            scene,
            from,
            seed,
            speed,
        } => wander(&scene, from, seed, speed),
    }
}

fn build_volume(scene_path: &Path) -> Result<NavVolume> {
    let scene = Scene::load(scene_path)?;
    scene
        .config
        .validate()
        .with_context(|| format!("Invalid config in {}", scene_path.display()))?;

    let bounds = scene.obstacle_bounds();
    tracing::debug!(obstacles = bounds.len(), "Building navigation volume");
    Ok(NavVolume::build(&bounds, scene.config))
}

fn grid_summary(scene_path: &Path) -> Result<()> {
    let volume = build_volume(scene_path)?;

    let grid = volume.grid();
    let dims = grid.dims();
    let invalid = grid.nodes().iter().filter(|n| !n.is_valid()).count();
    let bounds = grid.bounds();

    println!("Grid {}x{}x{} ({} nodes)", dims.x, dims.y, dims.z, grid.len());
    println!(
        "Bounds {} to {}",
        fmt_vec3(bounds.min()),
        fmt_vec3(bounds.max())
    );
    println!("Blocked {} / valid {}", invalid, grid.len() - invalid);
    Ok(())
}

fn find_path(scene_path: &Path, from: Vec3, to: Vec3) -> Result<()> {
    let volume = build_volume(scene_path)?;

    let path = volume
        .path_to(from, to)
        .with_context(|| format!("No path from {} to {}", fmt_vec3(from), fmt_vec3(to)))?;
    print_path(&volume, &path, to);
    Ok(())
}

fn wander(scene_path: &Path, from: Vec3, seed: u64, speed: f32) -> Result<()> {
    let volume = build_volume(scene_path)?;

    let mut rng = SplitMix64::new(seed);
    let goal = volume.random_position(&mut rng);
    tracing::info!(goal = %fmt_vec3(goal), "Picked random goal");

    let path = volume
        .path_to(from, goal)
        .with_context(|| format!("No path from {} to {}", fmt_vec3(from), fmt_vec3(goal)))?;
    print_path(&volume, &path, goal);

    // Walk the path in fixed ticks, the way a movement component would.
    let mut follower = PathFollower::new(path, speed);
    let mut position = from;
    let mut ticks = 0u32;
    while !follower.finished() && ticks < 100_000 {
        position = follower.tick(position, 0.1);
        ticks += 1;
    }
    println!("Walked to {} in {} ticks", fmt_vec3(position), ticks);
    Ok(())
}

fn print_path(volume: &NavVolume, path: &WaypointPath, goal: Vec3) {
    // A drained frontier still yields a path; it just stops short of the
    // goal node. Make that visible instead of printing it as a success.
    if let Some(goal_node) = volume.closest_point(goal) {
        if path.points.last() != Some(&goal_node.world_position()) {
            tracing::warn!("Goal unreachable; best-effort path to the last expanded node");
        }
    }

    println!("{} waypoints", path.len());
    for (i, point) in path.points.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, fmt_vec3(*point));
    }
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z (got '{s}')"));
    }
    let mut v = [0.0f32; 3];
    for (slot, part) in v.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse::<f32>()
            .map_err(|e| format!("bad component '{}': {}", part.trim(), e))?;
    }
    Ok(Vec3::new(v[0], v[1], v[2]))
}

fn fmt_vec3(v: Vec3) -> String {
    format!("({:.2}, {:.2}, {:.2})", v.x, v.y, v.z)
}
