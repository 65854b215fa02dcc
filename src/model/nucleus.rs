// src/model/nucleus.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Side length of the cube the protons are sampled from, centered at origin.
pub const NUCLEUS_SPREAD: f64 = 4.0;

/// Maximum per-axis offset of a neutron from its anchor proton.
pub const NEUTRON_JITTER: f64 = 0.8;

/// Fixed nucleus geometry for one element selection.
///
/// Generated exactly once per selection and held constant afterwards, so the
/// nucleus stays stationary while the electrons orbit. Re-rolling per frame
/// would make the nucleus jump visibly.
#[derive(Clone, Debug, PartialEq)]
pub struct NucleusLayout {
    pub protons: Vec<[f64; 3]>,
    pub neutrons: Vec<[f64; 3]>,
}

impl NucleusLayout {
    /// Samples proton positions uniformly within the nucleus cube, then
    /// places each neutron at a randomly chosen proton plus a small offset.
    /// Deterministic for a given seed.
    pub fn generate(protons: u32, neutrons: u32, seed: u64) -> Result<Self, String> {
        if protons == 0 {
            return Err("nucleus requires at least one proton".to_string());
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let half = NUCLEUS_SPREAD / 2.0;

        let proton_pts: Vec<[f64; 3]> = (0..protons)
            .map(|_| {
                [
                    rng.gen_range(-half..=half),
                    rng.gen_range(-half..=half),
                    rng.gen_range(-half..=half),
                ]
            })
            .collect();

        let neutron_pts: Vec<[f64; 3]> = (0..neutrons)
            .map(|_| {
                let anchor = proton_pts[rng.gen_range(0..proton_pts.len())];
                [
                    anchor[0] + rng.gen_range(-NEUTRON_JITTER..=NEUTRON_JITTER),
                    anchor[1] + rng.gen_range(-NEUTRON_JITTER..=NEUTRON_JITTER),
                    anchor[2] + rng.gen_range(-NEUTRON_JITTER..=NEUTRON_JITTER),
                ]
            })
            .collect();

        Ok(Self {
            protons: proton_pts,
            neutrons: neutron_pts,
        })
    }
}
