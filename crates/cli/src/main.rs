#![deny(unsafe_code)]
//! CLI binary for the morphogen reaction-diffusion simulator.
//!
//! Subcommands:
//! - `render`: run a simulation N steps, write a PNG frame
//! - `list`: print available presets, color schemes, and seed modes

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use morphogen_core::{preset, ColorScheme, Recipe, SeedMode};
use morphogen_frame::{snapshot, Animator};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "morphogen", about = "Gray-Scott reaction-diffusion simulator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a simulation for N steps and write a PNG frame.
    Render {
        /// Preset name (e.g. "turing-spots").
        #[arg(long, default_value = "turing-spots")]
        preset: String,

        /// Grid width in cells.
        #[arg(short = 'W', long, default_value_t = 256)]
        width: usize,

        /// Grid height in cells.
        #[arg(short = 'H', long, default_value_t = 256)]
        height: usize,

        /// Number of simulation steps.
        #[arg(short, long, default_value_t = 1000)]
        steps: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Seeding mode (center-blob, scatter, organic-radial).
        #[arg(long, default_value = "center-blob")]
        seed_mode: String,

        /// Color scheme name (thermal, ocean, forest, purple).
        #[arg(long, default_value = "thermal")]
        scheme: String,

        /// Enable the advisory flow-field bias.
        #[arg(long)]
        flow: bool,

        /// Step on the rayon row-parallel loop.
        #[arg(long)]
        parallel: bool,

        /// Parameter overrides as a JSON object.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Load the whole run from a recipe JSON file instead of flags.
        #[arg(long)]
        recipe: Option<PathBuf>,

        /// Output file path.
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,
    },
    /// List available presets, color schemes, and seed modes.
    List,
}

#[allow(clippy::too_many_arguments)]
fn build_animator(
    preset: &str,
    width: usize,
    height: usize,
    seed: u64,
    seed_mode: &str,
    scheme: &str,
    flow: bool,
    params: &str,
    recipe: Option<&PathBuf>,
) -> Result<(Animator, usize), CliError> {
    if let Some(path) = recipe {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
        let recipe: Recipe = serde_json::from_str(&text)
            .map_err(|e| CliError::Input(format!("invalid recipe JSON: {e}")))?;
        let animator = Animator::from_recipe(&recipe)?;
        return Ok((animator, recipe.steps));
    }

    let overrides: serde_json::Value = serde_json::from_str(params)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
    let mut p = preset::preset_params(preset)?.with_overrides(&overrides);
    if flow {
        p.use_flow_field = true;
    }
    let scheme = ColorScheme::from_name(scheme)?;
    let mode = SeedMode::from_name(seed_mode)?;
    let animator = Animator::new(width, height, mode, seed, p, scheme)?;
    Ok((animator, 0))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let presets = preset::list_presets();
            let schemes = ColorScheme::list_names();
            let modes = SeedMode::list();
            if cli.json {
                let info = serde_json::json!({
                    "presets": presets,
                    "schemes": schemes,
                    "seed_modes": modes,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Presets:");
                for name in presets {
                    println!("  {name}");
                }
                println!("Schemes:");
                println!("  {}", schemes.join(", "));
                println!("Seed modes:");
                println!("  {}", modes.join(", "));
            }
        }
        Command::Render {
            preset,
            width,
            height,
            steps,
            seed,
            seed_mode,
            scheme,
            flow,
            parallel,
            params,
            recipe,
            output,
        } => {
            let (mut animator, recipe_steps) = build_animator(
                &preset,
                width,
                height,
                seed,
                &seed_mode,
                &scheme,
                flow,
                &params,
                recipe.as_ref(),
            )?;
            animator.set_parallel(parallel);

            let steps = if recipe.is_some() { recipe_steps } else { steps };
            for _ in 0..steps {
                animator.tick()?;
            }

            snapshot::write_png(
                animator.substrate(),
                animator.activator(),
                animator.scheme(),
                &output,
            )?;

            if cli.json {
                let info = serde_json::json!({
                    "width": animator.substrate().width(),
                    "height": animator.substrate().height(),
                    "steps": steps,
                    "params": serde_json::to_value(animator.params())?,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {}x{} ({steps} steps) -> {}",
                    animator.substrate().width(),
                    animator.substrate().height(),
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
