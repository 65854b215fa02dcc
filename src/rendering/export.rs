// src/rendering/export.rs

use super::scene::{self, ParticleKind, RenderParticle, ShellLayout};
use crate::config::{ExportFormat, RenderStyle};
use crate::model::nucleus::NucleusLayout;
use plotters::coord::Shift;
use plotters::prelude::*;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

fn to_rgb(c: (f64, f64, f64)) -> RGBColor {
    RGBColor(
        (c.0.clamp(0.0, 1.0) * 255.0) as u8,
        (c.1.clamp(0.0, 1.0) * 255.0) as u8,
        (c.2.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

// --- Helper Function: Draws one frame to ANY backend (PNG or SVG) ---
fn draw_frame<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    particles: &mut [RenderParticle],
    style: &RenderStyle,
) -> Result<(), std::boxed::Box<dyn std::error::Error>>
where
    DB::ErrorType: 'static,
{
    root.fill(&to_rgb(style.background_color))?;

    // Painter's algorithm: back to front on the rotated depth
    particles.sort_by(|a, b| {
        a.screen_pos[2]
            .partial_cmp(&b.screen_pos[2])
            .unwrap_or(Ordering::Equal)
    });

    for p in particles.iter() {
        let (color, radius) = match p.kind {
            ParticleKind::Electron(_) => (style.electron_color, style.electron_radius),
            ParticleKind::Proton => (style.proton_color, style.nucleon_radius),
            ParticleKind::Neutron => (style.neutron_color, style.nucleon_radius),
        };
        root.draw(&Circle::new(
            (p.screen_pos[0] as i32, p.screen_pos[1] as i32),
            radius.max(1.0) as i32,
            to_rgb(color).filled(),
        ))?;
    }

    Ok(())
}

/// Renders one frame of the orbit animation to `path`.
///
/// `view` is (rot_x, rot_y, rot_z) in degrees. The nucleus layout is the
/// fixed per-selection geometry; only `t` moves the electrons.
pub fn export_frame(
    layout: &ShellLayout,
    nucleus: &NucleusLayout,
    t: f64,
    view: (f64, f64, f64),
    zoom: f64,
    style: &RenderStyle,
    format: ExportFormat,
    path: &Path,
) -> Result<(), String> {
    let points = scene::compute_frame(layout, nucleus, t);
    let (mut particles, bounds) = scene::project_scene(
        &points,
        layout,
        view.0,
        view.1,
        view.2,
        zoom,
        style.image_width as f64,
        style.image_height as f64,
    );

    // The backend surface is sized from the projected scene bounds
    let (w, h) = (bounds.width as u32, bounds.height as u32);

    match format {
        ExportFormat::Png => {
            let root = BitMapBackend::new(path, (w, h)).into_drawing_area();
            draw_frame(&root, &mut particles, style).map_err(|e| e.to_string())?;
            root.present().map_err(|e| e.to_string())?;
        }
        ExportFormat::Svg => {
            let path_str = path
                .to_str()
                .ok_or_else(|| format!("non-UTF-8 output path {:?}", path))?;
            let root = SVGBackend::new(path_str, (w, h)).into_drawing_area();
            draw_frame(&root, &mut particles, style).map_err(|e| e.to_string())?;
            root.present().map_err(|e| e.to_string())?;
        }
    }
    Ok(())
}

/// Renders `frames` successive frames (t0, t0+dt, ...) into `dir`, one file
/// per frame, in parallel. All frames share the same fixed nucleus, so the
/// nucleus stays put while the shells advance.
pub fn export_animation(
    layout: &ShellLayout,
    nucleus: &NucleusLayout,
    t0: f64,
    dt: f64,
    frames: usize,
    view: (f64, f64, f64),
    zoom: f64,
    style: &RenderStyle,
    format: ExportFormat,
    dir: &Path,
    stem: &str,
) -> Result<Vec<PathBuf>, String> {
    if frames == 0 {
        return Err("animation needs at least one frame".to_string());
    }
    fs::create_dir_all(dir).map_err(|e| e.to_string())?;

    let ext = match format {
        ExportFormat::Png => "png",
        ExportFormat::Svg => "svg",
    };
    let paths: Vec<PathBuf> = (0..frames)
        .map(|k| dir.join(format!("{}_{:04}.{}", stem, k, ext)))
        .collect();

    paths.par_iter().enumerate().try_for_each(|(k, path)| {
        let t = t0 + k as f64 * dt;
        export_frame(layout, nucleus, t, view, zoom, style, format, path)
    })?;

    Ok(paths)
}
