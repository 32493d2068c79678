//! Faces: ordered corner lists with an optional texture and shade.

use std::fmt;
use std::sync::Arc;

use drift_core::Position;

use crate::holder::CornerHolder;

/// Cheap, shareable reference to a texture by path.
///
/// Clones share the underlying string; equality compares the path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureRef(Arc<str>);

impl TextureRef {
    /// A texture reference for the given path.
    pub fn new(path: impl Into<Arc<str>>) -> Self {
        Self(path.into())
    }

    /// The texture path.
    pub fn path(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TextureRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Additive colour shading applied over a face's texture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Shade {
    /// Red component.
    pub red: f32,
    /// Green component.
    pub green: f32,
    /// Blue component.
    pub blue: f32,
    /// Opacity of the shade itself.
    pub alpha: f32,
}

/// One renderable face: an ordered list of corners plus surface
/// attributes.
///
/// The corner order is meaningful; edges run between consecutive
/// corners. Faces with fewer than three corners are legal and arise as
/// intermediate products of tracing and occlusion cutting.
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    corners: Vec<Position>,
    texture: Option<TextureRef>,
    shade: Shade,
}

impl Face {
    /// An untextured face over the given corners.
    pub fn new(corners: Vec<Position>) -> Self {
        Self::textured(corners, None)
    }

    /// A face with the given corners and texture.
    pub fn textured(corners: Vec<Position>, texture: Option<TextureRef>) -> Self {
        Self {
            corners,
            texture,
            shade: Shade::default(),
        }
    }

    /// The corner list, in order.
    pub fn corner_list(&self) -> &[Position] {
        &self.corners
    }

    /// Whether this face has no corners at all.
    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }

    /// The texture, if any.
    pub fn texture(&self) -> Option<&TextureRef> {
        self.texture.as_ref()
    }

    /// Replace the texture.
    pub fn set_texture(&mut self, texture: Option<TextureRef>) {
        self.texture = texture;
    }

    /// The current shade.
    pub fn shade(&self) -> Shade {
        self.shade
    }

    /// Replace the shade.
    pub fn set_shade(&mut self, shade: Shade) {
        self.shade = shade;
    }

    /// Displace every corner in place.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        for corner in &mut self.corners {
            *corner = corner.offset(dx, dy, dz);
        }
    }

    /// A displaced copy.
    pub fn translated(&self, dx: f64, dy: f64, dz: f64) -> Self {
        let mut copy = self.clone();
        copy.translate(dx, dy, dz);
        copy
    }
}

impl CornerHolder for Face {
    fn faces(&self) -> Vec<&Face> {
        vec![self]
    }

    // Raw corner order, duplicates and all; the default would dedup.
    fn corners(&self) -> Vec<Position> {
        self.corners.clone()
    }
}
