// src/state.rs

use crate::config::Config;
use crate::model::elements::{available_elements, get_profile, ElementProfile};
use crate::model::nucleus::NucleusLayout;
use crate::rendering::scene::ShellLayout;

/// One selected element with everything derived from it. The nucleus layout
/// is rolled exactly once here and reused for every frame of the selection.
pub struct Selection {
    pub profile: ElementProfile,
    pub layout: ShellLayout,
    pub nucleus: NucleusLayout,
    pub seed: u64,
}

pub struct AppState {
    pub selection: Option<Selection>,
    pub rot_x: f64,
    pub rot_y: f64,
    pub rot_z: f64,
    pub zoom: f64,
    pub config: Config,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            selection: None,
            rot_x: 20.0,
            rot_y: -30.0,
            rot_z: 0.0,
            zoom: 1.0,
            config: Config::default(),
        }
    }

    pub fn load_config(&mut self) {
        let (cfg, msg) = Config::load();
        log::info!("{}", msg);
        self.config = cfg;
    }

    /// Selects an element by symbol: resolves the profile, derives the shell
    /// layout from the configured orbit parameters, and generates the fixed
    /// nucleus geometry. The seed defaults to the atomic number so repeated
    /// runs draw the same nucleus.
    pub fn select_element(&mut self, symbol: &str, seed: Option<u64>) -> Result<(), String> {
        let profile = get_profile(symbol).ok_or_else(|| {
            format!(
                "unknown element '{}' (available: {})",
                symbol,
                available_elements().join(", ")
            )
        })?;

        let layout = ShellLayout::from_profile(&profile, &self.config.orbit)?;
        let seed = seed.unwrap_or(profile.protons as u64);
        let nucleus = NucleusLayout::generate(profile.protons, profile.neutrons, seed)?;

        log::debug!(
            "Selected {} ({} shells, nucleus seed {})",
            profile.name,
            profile.shells.len(),
            seed
        );

        self.selection = Some(Selection {
            profile,
            layout,
            nucleus,
            seed,
        });
        Ok(())
    }
}
