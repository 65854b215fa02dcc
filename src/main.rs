// src/main.rs

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

pub mod config;
pub mod model;
pub mod rendering;
pub mod state;
pub mod utils;

use config::ExportFormat;
use state::AppState;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Png,
    Svg,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Png => ExportFormat::Png,
            FormatArg::Svg => ExportFormat::Svg,
        }
    }
}

/// Bohr atomic model viewer for battery elements
#[derive(Parser, Debug)]
#[command(name = "bohrview", version, about)]
struct Cli {
    /// Element symbol (e.g. Li, Pb)
    element: Option<String>,

    /// List available elements and exit
    #[arg(long)]
    list: bool,

    /// Print the element fact sheet instead of rendering
    #[arg(long)]
    facts: bool,

    /// Number of frames to render (>1 writes an animation sequence)
    #[arg(long, default_value_t = 1)]
    frames: usize,

    /// Animation time of the first frame (radians)
    #[arg(long, default_value_t = 0.0)]
    t0: f64,

    /// Time step between frames (radians)
    #[arg(long, default_value_t = 0.1)]
    dt: f64,

    /// View rotation about X (degrees)
    #[arg(long, default_value_t = 20.0)]
    rot_x: f64,

    /// View rotation about Y (degrees)
    #[arg(long, default_value_t = -30.0)]
    rot_y: f64,

    /// View rotation about Z (degrees)
    #[arg(long, default_value_t = 0.0)]
    rot_z: f64,

    /// Zoom factor
    #[arg(long, default_value_t = 1.0)]
    zoom: f64,

    /// Output file (single frame) or directory (animation)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Output format; defaults to the configured format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Nucleus seed; defaults to the element's atomic number
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective config to the standard OS location and exit
    /// (unless an element is also given)
    #[arg(long)]
    save_config: bool,
}

fn main() -> ExitCode {
    if let Err(e) = utils::logger::init() {
        eprintln!("logger init failed: {}", e);
    }

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    if cli.list {
        for sym in model::elements::available_elements() {
            let p = model::elements::get_profile(sym)
                .ok_or_else(|| format!("registry out of sync for '{}'", sym))?;
            println!("{:3} {} (Z = {})", sym, p.name, p.protons);
        }
        return Ok(());
    }

    if cli.frames == 0 {
        return Err("--frames must be at least 1".to_string());
    }

    let mut state = AppState::new();
    state.load_config();

    if cli.save_config {
        log::info!("{}", state.config.save());
        if cli.element.is_none() {
            return Ok(());
        }
    }

    let symbol = cli
        .element
        .as_deref()
        .ok_or("no element given; try --list to see what is available")?;

    state.rot_x = cli.rot_x;
    state.rot_y = cli.rot_y;
    state.rot_z = cli.rot_z;
    state.zoom = cli.zoom;
    state.select_element(symbol, cli.seed)?;

    let sel = state.selection.as_ref().ok_or("no selection")?;

    if cli.facts {
        println!("{}", sel.profile.fact_sheet());
        return Ok(());
    }

    let format: ExportFormat = cli
        .format
        .map(Into::into)
        .unwrap_or(state.config.default_export_format);
    let ext = match format {
        ExportFormat::Png => "png",
        ExportFormat::Svg => "svg",
    };
    let stem = sel.profile.symbol.to_lowercase();
    let view = (state.rot_x, state.rot_y, state.rot_z);

    if cli.frames <= 1 {
        let path = cli
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.{}", stem, ext)));
        rendering::export_frame(
            &sel.layout,
            &sel.nucleus,
            cli.t0,
            view,
            state.zoom,
            &state.config.style,
            format,
            &path,
        )?;
        log::info!("Wrote {:?}", path);
    } else {
        let dir = cli
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}_frames", stem)));
        let paths = rendering::export_animation(
            &sel.layout,
            &sel.nucleus,
            cli.t0,
            cli.dt,
            cli.frames,
            view,
            state.zoom,
            &state.config.style,
            format,
            &dir,
            &stem,
        )?;
        log::info!("Wrote {} frames to {:?}", paths.len(), dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_frames_rejected() {
        // --frames 0 must fail up front, matching export_animation's contract
        let cli = Cli::parse_from(["bohrview", "Li", "--frames", "0"]);
        let err = run(&cli).unwrap_err();
        assert!(err.contains("frames"));
    }

    #[test]
    fn test_unknown_element_fails() {
        let cli = Cli::parse_from(["bohrview", "Xx", "--facts"]);
        assert!(run(&cli).is_err());
    }

    #[test]
    fn test_missing_element_fails() {
        let cli = Cli::parse_from(["bohrview"]);
        let err = run(&cli).unwrap_err();
        assert!(err.contains("--list"));
    }
}
