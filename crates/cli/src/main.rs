#![deny(unsafe_code)]
//! CLI binary for the drift-engine particle animation system.
//!
//! Subcommands:
//! - `render <scene>` — drive a field N frames, write a PNG of the last one
//! - `list` — print available scenes and palettes

mod error;

use burst::BurstSpec;
use clap::{Parser, Subcommand};
use drift_engine_core::{FieldDriver, ManualClock, Palette, Srgb};
use drift_engine_runtime::{build_field, Raster, ScenePreset};
use error::CliError;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "drift-engine", about = "Particle field animation CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Drive a scene for N frames and write a PNG snapshot of the last frame.
    Render {
        /// Scene name (e.g. "arcade").
        scene: String,

        /// Surface width in pixels.
        #[arg(short = 'W', long, default_value_t = 640)]
        width: u32,

        /// Surface height in pixels.
        #[arg(short = 'H', long, default_value_t = 480)]
        height: u32,

        /// Number of frames to run.
        #[arg(short, long, default_value_t = 300)]
        frames: u64,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Palette name override (signal, cyan, ember, mono).
        #[arg(short, long)]
        palette: Option<String>,

        /// Burst spawn as "frame:x,y,count"; repeatable.
        #[arg(short, long)]
        burst: Vec<String>,

        /// Field parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Output file path.
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,
    },
    /// List available scenes and palettes.
    List,
}

/// Burst parsing lives in its own module so the format stays testable.
mod burst {
    use super::CliError;
    use glam::DVec2;

    /// One scheduled click: at `frame`, spawn `count` particles at `origin`.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct BurstSpec {
        pub frame: u64,
        pub origin: DVec2,
        pub count: usize,
    }

    impl BurstSpec {
        /// Parses "frame:x,y,count", e.g. "120:320,240,5".
        pub fn parse(spec: &str) -> Result<Self, CliError> {
            let bad = || CliError::Input(format!("invalid --burst '{spec}', expected frame:x,y,count"));
            let (frame, rest) = spec.split_once(':').ok_or_else(|| bad())?;
            let parts: Vec<&str> = rest.split(',').collect();
            if parts.len() != 3 {
                return Err(bad());
            }
            Ok(Self {
                frame: frame.trim().parse().map_err(|_| bad())?,
                origin: DVec2::new(
                    parts[0].trim().parse().map_err(|_| bad())?,
                    parts[1].trim().parse().map_err(|_| bad())?,
                ),
                count: parts[2].trim().parse().map_err(|_| bad())?,
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn parses_full_spec() {
            let burst = BurstSpec::parse("120:320,240,5").unwrap();
            assert_eq!(burst.frame, 120);
            assert_eq!(burst.origin, DVec2::new(320.0, 240.0));
            assert_eq!(burst.count, 5);
        }

        #[test]
        fn parses_fractional_coordinates() {
            let burst = BurstSpec::parse("0:10.5,20.25,1").unwrap();
            assert_eq!(burst.origin, DVec2::new(10.5, 20.25));
        }

        #[test]
        fn rejects_missing_frame_separator() {
            assert!(BurstSpec::parse("320,240,5").is_err());
        }

        #[test]
        fn rejects_wrong_arity() {
            assert!(BurstSpec::parse("0:320,240").is_err());
            assert!(BurstSpec::parse("0:320,240,5,9").is_err());
        }

        #[test]
        fn rejects_non_numeric_fields() {
            assert!(BurstSpec::parse("abc:320,240,5").is_err());
            assert!(BurstSpec::parse("0:left,240,5").is_err());
            assert!(BurstSpec::parse("0:320,240,many").is_err());
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let scenes = ScenePreset::list_scenes();
            let palettes = Palette::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "scenes": scenes,
                    "palettes": palettes,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Scenes:");
                for name in scenes {
                    println!("  {name}");
                }
                println!("Palettes:");
                println!("  {}", palettes.join(", "));
            }
        }
        Command::Render {
            scene,
            width,
            height,
            frames,
            seed,
            palette,
            burst,
            params,
            output,
        } => {
            let mut params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            if !params.is_object() {
                return Err(CliError::Input("--params must be a JSON object".into()));
            }
            if let Some(name) = palette {
                params["palette"] = serde_json::Value::String(name);
            }

            let mut bursts: Vec<BurstSpec> = burst
                .iter()
                .map(|s| BurstSpec::parse(s))
                .collect::<Result<_, _>>()?;
            bursts.sort_by_key(|b| b.frame);

            let field = build_field(&scene, width as f64, height as f64, seed, &params)?;
            let mut raster = Raster::new(width, height)?;
            raster.clear(Srgb::BLACK);
            let mut clock = ManualClock::new();

            let mut driver = FieldDriver::new(field);
            driver.start();
            let mut pending = bursts.as_slice();
            for frame in 0..frames {
                while let Some((next, rest)) = pending.split_first() {
                    if next.frame > frame {
                        break;
                    }
                    driver.spawn_burst(next.origin, next.count);
                    pending = rest;
                }
                driver.frame(&mut raster, &mut clock)?;
            }
            driver.stop();

            drift_engine_runtime::snapshot::write_png(&raster, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "scene": scene,
                    "width": width,
                    "height": height,
                    "frames": frames,
                    "seed": seed,
                    "population": driver.sim().population(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {scene} ({width}x{height}, {frames} frames, seed {seed}, {} particles) -> {}",
                    driver.sim().population(),
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
