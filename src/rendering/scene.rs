// src/rendering/scene.rs

use crate::config::OrbitParams;
use crate::model::elements::ElementProfile;
use crate::model::nucleus::NucleusLayout;
use crate::utils::geometry::{self, Point3};
use std::f64::consts::TAU;

/// Validated orbit geometry for one element: shell occupancies paired with
/// radii, plus the tilt/speed parameters. Checked once at construction so
/// `compute_frame` is total.
#[derive(Clone, Debug)]
pub struct ShellLayout {
  occupancies: Vec<u32>,
  radii: Vec<f64>,
  // Radians between consecutive shell planes; shell i is tilted (i+1) steps
  tilt_step: f64,
  // Shell i advances with angular factor 1 + i * speed_step
  speed_step: f64,
}

impl ShellLayout {
  pub fn new(
    occupancies: Vec<u32>,
    radii: Vec<f64>,
    tilt_step: f64,
    speed_step: f64,
  ) -> Result<Self, String> {
    if occupancies.is_empty() {
      return Err("shell layout requires at least one shell".to_string());
    }
    if occupancies.len() != radii.len() {
      return Err(format!(
        "{} shell occupancies but {} radii",
        occupancies.len(),
        radii.len()
      ));
    }
    for (i, &n) in occupancies.iter().enumerate() {
      if n == 0 {
        return Err(format!("shell {} has zero electrons", i));
      }
    }
    for (i, &r) in radii.iter().enumerate() {
      if r <= 0.0 {
        return Err(format!("shell {} has non-positive radius {}", i, r));
      }
    }
    Ok(Self {
      occupancies,
      radii,
      tilt_step,
      speed_step,
    })
  }

  /// Layout for a validated element profile, radii derived from `orbit`.
  pub fn from_profile(profile: &ElementProfile, orbit: &OrbitParams) -> Result<Self, String> {
    Self::new(
      profile.shells.clone(),
      orbit.radii(profile.shells.len()),
      orbit.tilt_step_deg.to_radians(),
      orbit.shell_speed_step,
    )
  }

  pub fn occupancies(&self) -> &[u32] {
    &self.occupancies
  }

  pub fn radii(&self) -> &[f64] {
    &self.radii
  }

  /// Radius of the outermost shell.
  pub fn outer_radius(&self) -> f64 {
    self.radii.iter().cloned().fold(0.0, f64::max)
  }
}

/// One frame's worth of particle coordinates. Nucleus lists are copied from
/// the fixed layout and do not vary with `t`.
#[derive(Clone, Debug)]
pub struct PointSet {
  pub shells: Vec<Vec<Point3>>,
  pub protons: Vec<Point3>,
  pub neutrons: Vec<Point3>,
}

/// Computes every electron position for time `t`.
///
/// Electron `j` of shell `i` sits at
/// `angle = t * speed_i + j * 2π / n_i` on a circle of radius `r_i`,
/// tilted out of the xy-plane by the shell's fixed tilt:
/// `(r cos a, r sin a cos tilt, r sin a sin tilt)`.
/// Deterministic: no randomness here, the nucleus was fixed at selection.
pub fn compute_frame(layout: &ShellLayout, nucleus: &NucleusLayout, t: f64) -> PointSet {
  let mut shells = Vec::with_capacity(layout.occupancies.len());

  for (i, &n) in layout.occupancies.iter().enumerate() {
    let r = layout.radii[i];
    let tilt = (i + 1) as f64 * layout.tilt_step;
    let (sin_tilt, cos_tilt) = tilt.sin_cos();
    let speed = 1.0 + i as f64 * layout.speed_step;
    let spacing = TAU / n as f64;

    let mut pts = Vec::with_capacity(n as usize);
    for j in 0..n {
      let angle = t * speed + j as f64 * spacing;
      let (sin_a, cos_a) = angle.sin_cos();
      pts.push([r * cos_a, r * sin_a * cos_tilt, r * sin_a * sin_tilt]);
    }
    shells.push(pts);
  }

  PointSet {
    shells,
    protons: nucleus.protons.clone(),
    neutrons: nucleus.neutrons.clone(),
  }
}

// --- Screen-space projection ---
// Same pipeline as a structure viewer: rotate X -> Y -> Z about the origin,
// orthographic projection, keep z as depth for painter sorting.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParticleKind {
  Electron(usize), // shell index
  Proton,
  Neutron,
}

pub struct RenderParticle {
  pub screen_pos: [f64; 3], // x, y, z (depth)
  pub kind: ParticleKind,
}

pub struct SceneBounds {
  pub scale: f64,
  pub width: f64,
  pub height: f64,
}

pub fn project_scene(
  points: &PointSet,
  layout: &ShellLayout,
  rot_x: f64,
  rot_y: f64,
  rot_z: f64,
  zoom: f64,
  win_w: f64,
  win_h: f64,
) -> (Vec<RenderParticle>, SceneBounds) {
  let rot = geometry::rotation_xyz(rot_x, rot_y, rot_z);

  // Scale against the outer shell, not the per-frame point extents, so an
  // animation sequence keeps one consistent scale across frames.
  let margin = 20.0;
  let extent = layout.outer_radius().max(1.0);
  let scale = (win_w.min(win_h) / 2.0 - margin).max(1.0) / extent * zoom;

  let cx = win_w / 2.0;
  let cy = win_h / 2.0;
  let to_screen = |p: Point3| -> [f64; 3] {
    let r = geometry::apply(&rot, p);
    [cx + r[0] * scale, cy - r[1] * scale, r[2]]
  };

  let mut particles = Vec::new();
  for (i, shell) in points.shells.iter().enumerate() {
    for &p in shell {
      particles.push(RenderParticle {
        screen_pos: to_screen(p),
        kind: ParticleKind::Electron(i),
      });
    }
  }
  for &p in &points.protons {
    particles.push(RenderParticle {
      screen_pos: to_screen(p),
      kind: ParticleKind::Proton,
    });
  }
  for &p in &points.neutrons {
    particles.push(RenderParticle {
      screen_pos: to_screen(p),
      kind: ParticleKind::Neutron,
    });
  }

  (
    particles,
    SceneBounds {
      scale,
      width: win_w,
      height: win_h,
    },
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::elements::get_profile;
  use crate::utils::geometry::len;
  use std::f64::consts::PI;

  fn lithium_layout() -> ShellLayout {
    ShellLayout::new(vec![2, 1], vec![10.0, 20.0], 25f64.to_radians(), 1.0).unwrap()
  }

  fn lithium_nucleus() -> NucleusLayout {
    NucleusLayout::generate(3, 4, 3).unwrap()
  }

  #[test]
  fn test_rejects_length_mismatch() {
    let res = ShellLayout::new(vec![2, 1], vec![10.0], 0.4, 1.0);
    assert!(res.unwrap_err().contains("radii"));
  }

  #[test]
  fn test_rejects_empty() {
    assert!(ShellLayout::new(vec![], vec![], 0.4, 1.0).is_err());
  }

  #[test]
  fn test_rejects_zero_occupancy() {
    assert!(ShellLayout::new(vec![2, 0], vec![10.0, 20.0], 0.4, 1.0).is_err());
  }

  #[test]
  fn test_rejects_non_positive_radius() {
    assert!(ShellLayout::new(vec![2], vec![0.0], 0.4, 1.0).is_err());
    assert!(ShellLayout::new(vec![2], vec![-5.0], 0.4, 1.0).is_err());
  }

  #[test]
  fn test_point_counts_match_occupancies() {
    let layout = lithium_layout();
    let nucleus = lithium_nucleus();
    let frame = compute_frame(&layout, &nucleus, 1.37);

    assert_eq!(frame.shells.len(), 2);
    assert_eq!(frame.shells[0].len(), 2);
    assert_eq!(frame.shells[1].len(), 1);
    assert_eq!(frame.protons.len(), 3);
    assert_eq!(frame.neutrons.len(), 4);
  }

  #[test]
  fn test_points_lie_on_shell_sphere() {
    let layout =
      ShellLayout::new(vec![2, 8, 18, 32, 18, 4], vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0],
        25f64.to_radians(), 1.0)
      .unwrap();
    let nucleus = NucleusLayout::generate(82, 125, 82).unwrap();

    for &t in &[0.0, 0.7, 12.9, -3.4] {
      let frame = compute_frame(&layout, &nucleus, t);
      for (i, shell) in frame.shells.iter().enumerate() {
        for &p in shell {
          assert!((len(p) - layout.radii()[i]).abs() < 1e-9);
        }
      }
    }
  }

  #[test]
  fn test_deterministic() {
    let layout = lithium_layout();
    let nucleus = lithium_nucleus();
    let a = compute_frame(&layout, &nucleus, 2.5);
    let b = compute_frame(&layout, &nucleus, 2.5);

    for (sa, sb) in a.shells.iter().zip(&b.shells) {
      for (pa, pb) in sa.iter().zip(sb) {
        assert_eq!(pa, pb);
      }
    }
    assert_eq!(a.protons, b.protons);
  }

  #[test]
  fn test_periodicity_per_shell() {
    let layout = lithium_layout();
    let nucleus = lithium_nucleus();
    let t = 0.83;
    let base = compute_frame(&layout, &nucleus, t);

    for i in 0..2 {
      // One full revolution of shell i: t advances by 2π / (i+1)
      let adv = compute_frame(&layout, &nucleus, t + TAU / (i + 1) as f64);
      for (pa, pb) in base.shells[i].iter().zip(&adv.shells[i]) {
        for k in 0..3 {
          assert!((pa[k] - pb[k]).abs() < 1e-9);
        }
      }
    }
  }

  #[test]
  fn test_nucleus_unchanged_by_time() {
    let layout = lithium_layout();
    let nucleus = lithium_nucleus();
    let a = compute_frame(&layout, &nucleus, 0.0);
    let b = compute_frame(&layout, &nucleus, 99.5);

    assert_eq!(a.protons, b.protons);
    assert_eq!(a.neutrons, b.neutrons);
  }

  #[test]
  fn test_lithium_golden_frame() {
    // shells [2,1], radii [10,20], t = 0:
    // shell 0 electrons at angles 0 and π, shell 1 electron at angle 0
    let layout = lithium_layout();
    let nucleus = lithium_nucleus();
    let frame = compute_frame(&layout, &nucleus, 0.0);

    let e0 = frame.shells[0][0];
    assert!((e0[0] - 10.0).abs() < 1e-9);
    assert!(e0[1].abs() < 1e-9);
    assert!(e0[2].abs() < 1e-9);

    // sin(π) is ~0, so the tilt terms vanish at angle π as well
    let e1 = frame.shells[0][1];
    assert!((e1[0] + 10.0).abs() < 1e-9);
    assert!(e1[1].abs() < 1e-9);
    assert!(e1[2].abs() < 1e-9);

    let e2 = frame.shells[1][0];
    assert!((e2[0] - 20.0).abs() < 1e-9);
    assert!(e2[1].abs() < 1e-9);
    assert!(e2[2].abs() < 1e-9);
  }

  #[test]
  fn test_single_electron_shell_rotates() {
    // n = 1 keeps 2π/n well-defined; the lone electron still moves with t
    let layout = ShellLayout::new(vec![1], vec![20.0], 0.4, 1.0).unwrap();
    let nucleus = NucleusLayout::generate(1, 0, 1).unwrap();

    let a = compute_frame(&layout, &nucleus, 0.0);
    let b = compute_frame(&layout, &nucleus, PI / 2.0);
    assert!((a.shells[0][0][0] - 20.0).abs() < 1e-9);
    assert!(b.shells[0][0][0].abs() < 1e-9);
  }

  #[test]
  fn test_tilt_separates_shells() {
    // At the same phase angle π/2, two shells with equal radii land on
    // different planes because of the per-shell tilt
    let layout = ShellLayout::new(vec![1, 1], vec![10.0, 10.0], 25f64.to_radians(), 0.0).unwrap();
    let nucleus = NucleusLayout::generate(1, 0, 1).unwrap();
    let frame = compute_frame(&layout, &nucleus, PI / 2.0);

    let z0 = frame.shells[0][0][2];
    let z1 = frame.shells[1][0][2];
    assert!((z0 - z1).abs() > 1.0);
  }

  #[test]
  fn test_from_profile_matches_config() {
    let profile = get_profile("Pb").unwrap();
    let orbit = OrbitParams::default();
    let layout = ShellLayout::from_profile(&profile, &orbit).unwrap();

    assert_eq!(layout.occupancies(), &[2, 8, 18, 32, 18, 4]);
    assert_eq!(layout.radii().len(), 6);
    assert!((layout.outer_radius() - 60.0).abs() < 1e-10);
  }

  #[test]
  fn test_projection_centers_origin() {
    let layout = lithium_layout();
    let nucleus = NucleusLayout::generate(1, 0, 5).unwrap();
    let mut points = compute_frame(&layout, &nucleus, 0.0);
    points.protons = vec![[0.0, 0.0, 0.0]]; // pin one particle at the origin

    let (particles, bounds) =
      project_scene(&points, &layout, 30.0, -45.0, 10.0, 1.0, 800.0, 600.0);

    let origin = particles
      .iter()
      .find(|p| p.kind == ParticleKind::Proton)
      .unwrap();
    assert!((origin.screen_pos[0] - 400.0).abs() < 1e-9);
    assert!((origin.screen_pos[1] - 300.0).abs() < 1e-9);
    assert!(bounds.scale > 0.0);
  }

  #[test]
  fn test_projection_scale_is_frame_independent() {
    let layout = lithium_layout();
    let nucleus = lithium_nucleus();
    let f0 = compute_frame(&layout, &nucleus, 0.0);
    let f1 = compute_frame(&layout, &nucleus, 4.2);

    let (_, b0) = project_scene(&f0, &layout, 0.0, 0.0, 0.0, 1.0, 800.0, 800.0);
    let (_, b1) = project_scene(&f1, &layout, 0.0, 0.0, 0.0, 1.0, 800.0, 800.0);
    assert!((b0.scale - b1.scale).abs() < 1e-12);
  }
}
