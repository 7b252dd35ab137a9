//! Inverted-hull outlines.
//!
//! The shaded mesh is drawn again at a uniformly scaled copy of its model
//! transform with the flat black outline material. Exterior shells (scale > 1)
//! cull front faces so only the rim behind the silhouette shows. Interior
//! shells (scale < 1) keep normal back-face culling and never write depth, so
//! they cannot occlude the primary pass.

use glam::{DMat4, DVec3};

use super::MaterialParams;
use crate::error::{OceanError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    Exterior,
    Interior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullFace {
    Front,
    Back,
}

/// One scaled copy of a mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineShell {
    kind: ShellKind,
    scale: f64,
}

impl OutlineShell {
    /// Silhouette shell; `scale` must be finite and > 1
    pub fn exterior(scale: f64) -> Result<Self> {
        if scale.is_finite() && scale > 1.0 {
            Ok(Self {
                kind: ShellKind::Exterior,
                scale,
            })
        } else {
            Err(OceanError::InvalidOutlineScale {
                kind: "exterior",
                scale,
                expected: "must be > 1",
            })
        }
    }

    /// Interior-line shell; `scale` must lie strictly between 0 and 1
    pub fn interior(scale: f64) -> Result<Self> {
        if scale > 0.0 && scale < 1.0 {
            Ok(Self {
                kind: ShellKind::Interior,
                scale,
            })
        } else {
            Err(OceanError::InvalidOutlineScale {
                kind: "interior",
                scale,
                expected: "must be in (0, 1)",
            })
        }
    }

    pub fn kind(&self) -> ShellKind {
        self.kind
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Scale applied in model space, after the base transform
    pub fn transform(&self, model: DMat4) -> DMat4 {
        model * DMat4::from_scale(DVec3::splat(self.scale))
    }

    pub fn cull_face(&self) -> CullFace {
        match self.kind {
            ShellKind::Exterior => CullFace::Front,
            ShellKind::Interior => CullFace::Back,
        }
    }

    pub fn writes_depth(&self) -> bool {
        self.kind == ShellKind::Exterior
    }
}

/// Render state for one outline draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlinePass {
    pub shell: OutlineShell,
    pub transform: DMat4,
    pub cull_face: CullFace,
    pub depth_write: bool,
    pub material: MaterialParams,
}

/// Which shells to draw around a shaded mesh
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OutlinePolicy {
    exterior: Option<OutlineShell>,
    interior: Option<OutlineShell>,
}

impl OutlinePolicy {
    pub fn new(exterior: Option<f64>, interior: Option<f64>) -> Result<Self> {
        Ok(Self {
            exterior: exterior.map(OutlineShell::exterior).transpose()?,
            interior: interior.map(OutlineShell::interior).transpose()?,
        })
    }

    /// No outline at all (e.g. meshes with inside-out faces)
    pub fn none() -> Self {
        Self::default()
    }

    // Preset scales below are all strictly on the right side of 1.

    pub fn sphere() -> Self {
        Self {
            exterior: Some(OutlineShell {
                kind: ShellKind::Exterior,
                scale: 1.05,
            }),
            interior: None,
        }
    }

    pub fn torus() -> Self {
        Self {
            interior: Some(OutlineShell {
                kind: ShellKind::Interior,
                scale: 0.9,
            }),
            ..Self::sphere()
        }
    }

    pub fn figure() -> Self {
        Self {
            exterior: Some(OutlineShell {
                kind: ShellKind::Exterior,
                scale: 1.02,
            }),
            interior: Some(OutlineShell {
                kind: ShellKind::Interior,
                scale: 0.97,
            }),
        }
    }

    pub fn terrain() -> Self {
        Self {
            interior: None,
            ..Self::figure()
        }
    }

    pub fn shells(&self) -> impl Iterator<Item = OutlineShell> {
        self.exterior.into_iter().chain(self.interior)
    }

    /// Outline draws for a mesh at `model`, exterior first
    pub fn passes(&self, model: DMat4) -> Vec<OutlinePass> {
        let material = MaterialParams::outline();
        self.shells()
            .map(|shell| OutlinePass {
                shell,
                transform: shell.transform(model),
                cull_face: shell.cull_face(),
                depth_write: shell.writes_depth(),
                material,
            })
            .collect()
    }
}

/// Primary shaded draw followed by its outline passes
#[derive(Debug, Clone, PartialEq)]
pub struct DrawPlan {
    pub transform: DMat4,
    pub material: MaterialParams,
    pub outlines: Vec<OutlinePass>,
}

impl DrawPlan {
    pub fn new(model: DMat4, material: MaterialParams, policy: &OutlinePolicy) -> Self {
        Self {
            transform: model,
            material,
            outlines: policy.passes(model),
        }
    }
}
