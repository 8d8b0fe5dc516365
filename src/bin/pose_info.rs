//! pose-info - inspect binary pose files
//!
//! # Usage
//!
//! ```bash
//! # Summary of components and frames
//! pose-info video.pose
//!
//! # Header as YAML
//! pose-info video.pose --header --format yaml
//!
//! # A single frame as YAML
//! pose-info video.pose --frame 10 --format yaml
//! ```

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use pose_format::Pose;
use std::path::PathBuf;

/// Inspect binary pose files
#[derive(Parser)]
#[command(name = "pose-info")]
#[command(about = "Inspect binary multi-person pose files")]
#[command(version)]
struct Cli {
    /// Pose file to decode
    file: PathBuf,

    /// Print the header instead of the summary
    #[arg(long)]
    header: bool,

    /// Print a single frame by index
    #[arg(long, conflicts_with = "header")]
    frame: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Yaml,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let pose = Pose::read(&cli.file)
        .with_context(|| format!("Decoding {}", cli.file.display()))?;

    if cli.header {
        match cli.format {
            OutputFormat::Yaml => print!("{}", serde_yaml_ng::to_string(&pose.header)?),
            OutputFormat::Text => print_components(&pose),
        }
        return Ok(());
    }

    if let Some(index) = cli.frame {
        let Some(frame) = pose.frame(index) else {
            bail!("Frame {} out of range (0..{})", index, pose.body.frame_count());
        };
        match cli.format {
            OutputFormat::Yaml => print!("{}", serde_yaml_ng::to_string(frame)?),
            OutputFormat::Text => {
                println!("Frame {}: {} people", index, frame.person_count());
                for person in &frame.people {
                    let points: Vec<usize> = person.components.iter().map(|c| c.len()).collect();
                    println!("  id {:>5}  points per component {:?}", person.id, points);
                }
            }
        }
        return Ok(());
    }

    match cli.format {
        OutputFormat::Yaml => print!("{}", serde_yaml_ng::to_string(&Summary::from(&pose))?),
        OutputFormat::Text => {
            print_components(&pose);
            let summary = Summary::from(&pose);
            println!("Frames: {}", summary.frames);
            println!(
                "People: total {}, max per frame {}",
                summary.total_people, summary.max_people
            );
        }
    }
    Ok(())
}

fn print_components(pose: &Pose) {
    let header = &pose.header;
    println!("Version: {}", header.version);
    println!("Dimensions: {}x{}x{}", header.width, header.height, header.depth);
    println!("Components: {}", header.components.len());
    for component in &header.components {
        println!(
            "  {:<28} format={:<5} points={:<4} limbs={:<4} colors={}",
            component.name,
            component.format,
            component.point_count(),
            component.limbs.len(),
            component.colors.len()
        );
    }
}

#[derive(serde::Serialize)]
struct Summary {
    version: f32,
    components: Vec<String>,
    frames: usize,
    total_people: usize,
    max_people: usize,
}

impl From<&Pose> for Summary {
    fn from(pose: &Pose) -> Self {
        Self {
            version: pose.header.version,
            components: pose.header.components.iter().map(|c| c.name.clone()).collect(),
            frames: pose.body.frame_count(),
            total_people: pose.body.people_counts().iter().sum(),
            max_people: pose.body.max_people(),
        }
    }
}
