// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ExportFormat {
  Png,
  Svg,
}

// --- Orbit geometry ---
// The shell radii, tilt and speed parameters the layout generator consumes.
// Defaults reproduce the legacy visuals: shell speed factor i+1, evenly
// spaced tilts so the shells never share one plane.

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrbitParams {
  pub first_shell_radius: f64,
  pub shell_gap: f64,
  pub tilt_step_deg: f64,
  // Shell i rotates with angular factor 1 + i * shell_speed_step
  pub shell_speed_step: f64,
}

impl Default for OrbitParams {
  fn default() -> Self {
    Self {
      first_shell_radius: 10.0,
      shell_gap: 10.0,
      tilt_step_deg: 25.0,
      shell_speed_step: 1.0,
    }
  }
}

impl OrbitParams {
  /// Radii for `count` shells: first_shell_radius, +shell_gap per shell.
  pub fn radii(&self, count: usize) -> Vec<f64> {
    (0..count)
      .map(|i| self.first_shell_radius + i as f64 * self.shell_gap)
      .collect()
  }
}

// --- RenderStyle ---

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RenderStyle {
  pub electron_color: (f64, f64, f64),
  pub proton_color: (f64, f64, f64),
  pub neutron_color: (f64, f64, f64),
  pub background_color: (f64, f64, f64),
  pub electron_radius: f64,
  pub nucleon_radius: f64,
  pub image_width: u32,
  pub image_height: u32,
}

impl Default for RenderStyle {
  fn default() -> Self {
    Self {
      electron_color: (0.20, 0.45, 0.95), // Blue
      proton_color: (0.90, 0.25, 0.20),   // Red
      neutron_color: (0.60, 0.60, 0.62),  // Gray
      background_color: (0.05, 0.05, 0.10),
      electron_radius: 4.0,
      nucleon_radius: 6.0,
      image_width: 800,
      image_height: 800,
    }
  }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
  #[serde(default)]
  pub orbit: OrbitParams,

  #[serde(default)]
  pub style: RenderStyle,
  pub default_export_format: ExportFormat,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      orbit: OrbitParams::default(),
      style: RenderStyle::default(),
      default_export_format: ExportFormat::Png,
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/bohrview/settings.json)
  pub fn load() -> (Self, String) {
    let path = Self::get_path();
    if path.exists() {
      match File::open(&path) {
        Ok(file) => {
          let reader = BufReader::new(file);
          match serde_json::from_reader(reader) {
            Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
            Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
          }
        }
        Err(e) => (Self::default(), format!("Error opening config: {}", e)),
      }
    } else {
      (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      )
    }
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> String {
    let path = Self::get_path();
    if let Some(parent) = path.parent() {
      let _ = fs::create_dir_all(parent);
    }

    match File::create(&path) {
      Ok(file) => {
        let writer = BufWriter::new(file);
        match serde_json::to_writer_pretty(writer, self) {
          Ok(_) => format!("Config saved to {:?}", path),
          Err(e) => format!("Failed to save config: {}", e),
        }
      }
      Err(e) => format!("Could not create config file: {}", e),
    }
  }

  fn get_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("com", "example", "bohrview") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_radii_progression() {
    let orbit = OrbitParams::default();
    let radii = orbit.radii(3);

    assert_eq!(radii.len(), 3);
    assert!((radii[0] - 10.0).abs() < 1e-10);
    assert!((radii[1] - 20.0).abs() < 1e-10);
    assert!((radii[2] - 30.0).abs() < 1e-10);
  }

  #[test]
  fn test_config_json_roundtrip() {
    let cfg = Config::default();
    let json = serde_json::to_string(&cfg).unwrap();
    let back: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(back.default_export_format, ExportFormat::Png);
    assert!((back.orbit.shell_gap - cfg.orbit.shell_gap).abs() < 1e-10);
  }

  #[test]
  fn test_save_then_load_roundtrip() {
    // Keep whatever config this machine already has
    let path = Config::get_path();
    let previous = fs::read(&path).ok();

    let mut cfg = Config::default();
    cfg.orbit.shell_gap = 13.5;
    cfg.default_export_format = ExportFormat::Svg;
    let msg = cfg.save();
    assert!(msg.contains("saved"), "{}", msg);

    let (back, _msg) = Config::load();
    assert_eq!(back.default_export_format, ExportFormat::Svg);
    assert!((back.orbit.shell_gap - 13.5).abs() < 1e-10);

    match previous {
      Some(bytes) => {
        let _ = fs::write(&path, bytes);
      }
      None => {
        let _ = fs::remove_file(&path);
      }
    }
  }

  #[test]
  fn test_partial_config_uses_defaults() {
    // Old config files without the orbit/style sections still parse
    let back: Config =
      serde_json::from_str(r#"{ "default_export_format": "Svg" }"#).unwrap();

    assert_eq!(back.default_export_format, ExportFormat::Svg);
    assert!((back.orbit.first_shell_radius - 10.0).abs() < 1e-10);
  }
}
