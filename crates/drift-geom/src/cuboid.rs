//! Cuboids: six-faced (or arbitrary-faced) boxes built from faces.

use indexmap::IndexSet;

use drift_core::{PosKey, Position};

use crate::face::{Face, TextureRef};
use crate::holder::CornerHolder;

/// The eight named corners of a rectangular prism.
///
/// Names read left/right, front/back, top/bottom under the Z-up
/// convention: front is +Y, right is +X, top is +Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrismCorners {
    /// Left front top.
    pub lft: Position,
    /// Right front top.
    pub rft: Position,
    /// Right front bottom.
    pub rfb: Position,
    /// Left front bottom.
    pub lfb: Position,
    /// Left back top.
    pub lbt: Position,
    /// Right back top.
    pub rbt: Position,
    /// Right back bottom.
    pub rbb: Position,
    /// Left back bottom.
    pub lbb: Position,
}

impl PrismCorners {
    /// Corners of the axis-aligned prism spanning `min` to `max`.
    pub fn axis_aligned(min: Position, max: Position) -> Self {
        Self {
            lft: Position::new(min.x, max.y, max.z),
            rft: Position::new(max.x, max.y, max.z),
            rfb: Position::new(max.x, max.y, min.z),
            lfb: Position::new(min.x, max.y, min.z),
            lbt: Position::new(min.x, min.y, max.z),
            rbt: Position::new(max.x, min.y, max.z),
            rbb: Position::new(max.x, min.y, min.z),
            lbb: Position::new(min.x, min.y, min.z),
        }
    }
}

/// Per-side textures for [`Cuboid::rectangular_prism`].
///
/// Sides left `None` fall back to `fallback`, which may itself be
/// `None` for an untextured side.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FaceTextures {
    /// Texture for the +Y face.
    pub front: Option<TextureRef>,
    /// Texture for the -Y face.
    pub back: Option<TextureRef>,
    /// Texture for the -X face.
    pub left: Option<TextureRef>,
    /// Texture for the +X face.
    pub right: Option<TextureRef>,
    /// Texture for the +Z face.
    pub top: Option<TextureRef>,
    /// Texture for the -Z face.
    pub bottom: Option<TextureRef>,
    /// Used for any side without its own texture.
    pub fallback: Option<TextureRef>,
}

impl FaceTextures {
    /// The same texture on every side.
    pub fn uniform(texture: TextureRef) -> Self {
        Self {
            fallback: Some(texture),
            ..Self::default()
        }
    }

    fn resolve(&self, side: &Option<TextureRef>) -> Option<TextureRef> {
        side.clone().or_else(|| self.fallback.clone())
    }
}

/// A box: an ordered list of faces.
///
/// Most cuboids come from [`Cuboid::rectangular_prism`], but nothing
/// requires the faces to form a closed or even rectangular solid;
/// tracing and occlusion produce looser collections.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cuboid {
    faces: Vec<Face>,
}

impl Cuboid {
    /// A cuboid over the given faces.
    pub fn new(faces: Vec<Face>) -> Self {
        Self { faces }
    }

    /// A six-faced rectangular prism with per-side textures.
    ///
    /// Face order is back, top, right, left, bottom, front, with each
    /// face's corners wound from its top-left.
    pub fn rectangular_prism(corners: PrismCorners, textures: FaceTextures) -> Self {
        let PrismCorners {
            lft,
            rft,
            rfb,
            lfb,
            lbt,
            rbt,
            rbb,
            lbb,
        } = corners;
        Self::new(vec![
            Face::textured(vec![lbt, rbt, rbb, lbb], textures.resolve(&textures.back)),
            Face::textured(vec![lbt, rbt, rft, lft], textures.resolve(&textures.top)),
            Face::textured(vec![rft, rbt, rbb, rfb], textures.resolve(&textures.right)),
            Face::textured(vec![lbt, lft, lfb, lbb], textures.resolve(&textures.left)),
            Face::textured(vec![lbb, rbb, rfb, lfb], textures.resolve(&textures.bottom)),
            Face::textured(vec![lft, rft, rfb, lfb], textures.resolve(&textures.front)),
        ])
    }

    /// The face list, in order.
    pub fn face_list(&self) -> &[Face] {
        &self.faces
    }

    /// Mutable access to the face list.
    pub fn face_list_mut(&mut self) -> &mut Vec<Face> {
        &mut self.faces
    }

    /// Whether this cuboid has no faces.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Drop faces that have no corners.
    pub fn remove_empty(&mut self) {
        self.faces.retain(|face| !face.is_empty());
    }

    /// Displace every face in place.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        for face in &mut self.faces {
            face.translate(dx, dy, dz);
        }
    }

    /// A displaced copy.
    pub fn translated(&self, dx: f64, dy: f64, dz: f64) -> Self {
        let mut copy = self.clone();
        copy.translate(dx, dy, dz);
        copy
    }

    /// Discretise this cuboid's frame: every pair of distinct corners
    /// traced at the given resolution, deduplicated, corners first.
    pub fn wireframe_positions(&self, resolution: f64) -> Vec<Position> {
        let corners = self.corners();
        let mut seen: IndexSet<PosKey> = corners.iter().map(|c| c.key()).collect();
        let mut out = corners.clone();
        for (i, &a) in corners.iter().enumerate() {
            for &b in &corners[i + 1..] {
                for pos in a.trace(b, resolution) {
                    if seen.insert(pos.key()) {
                        out.push(pos);
                    }
                }
            }
        }
        out
    }

    /// Discretise this cuboid's volume.
    ///
    /// Wraps every wireframe point in a one-corner face and traces the
    /// result again, so the interior fills in from all the cross-frame
    /// segments.
    pub fn contained_positions(&self, resolution: f64) -> Vec<Position> {
        let shell = Cuboid::new(
            self.wireframe_positions(resolution)
                .into_iter()
                .map(|corner| Face::new(vec![corner]))
                .collect(),
        );
        shell.wireframe_positions(resolution)
    }
}

impl CornerHolder for Cuboid {
    fn faces(&self) -> Vec<&Face> {
        self.faces.iter().collect()
    }
}
