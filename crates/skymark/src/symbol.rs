//! Symbol identifiers and the registry of rendering policies.
//!
//! Every [`SymbolId`] has exactly one [`SymbolEntry`] describing how it is
//! rendered: a short classification code used by type resolution, a default
//! color, and either a [`ProceduralShape`] (vector drawing) or nothing, in
//! which case the symbol is sampled from the shared texture atlas at the
//! grid cell implied by its discriminant.

use serde::{Deserialize, Serialize};
use skymark_core::color::Rgba;

/// Identifies a visual marker for an astronomical-object category.
///
/// Discriminants start at 1 and match the glyph ordering inside the shared
/// texture atlas; "no symbol" is expressed as `Option<SymbolId>` rather
/// than a reserved zero value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolId {
    Pointer = 1,
    ArtificialSatellite = 2,
    OpenGalacticCluster = 3,
    GlobularCluster = 4,
    Galaxy = 5,
    InteractingGalaxies = 6,
    PlanetaryNebula = 7,
    InterstellarMatter = 8,
    Unknown = 9,
    BrightNebula = 10,
    ClusterOfStars = 11,
}

/// The vector-drawing routine used for a procedurally rendered symbol.
///
/// This replaces a nullable paint callback with a tagged variant so that
/// the renderer's dispatch stays exhaustive at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProceduralShape {
    /// Dashed ellipse outline.
    OpenCluster,
    /// Ellipse with full-width cross-hair lines.
    GlobularCluster,
    /// Rectangle outline enclosing a dashed ellipse.
    StarCluster,
    /// Plain ellipse.
    Galaxy,
    /// Four radial tick lines plus two concentric ellipses.
    PlanetaryNebula,
    /// Plain ellipse.
    DiffuseNebula,
    /// Rectangle outline.
    BrightNebula,
}

/// Rendering policy for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolEntry {
    short_code: &'static str,
    color: u32,
    shape: Option<ProceduralShape>,
}

impl SymbolEntry {
    const fn new(short_code: &'static str, color: u32, shape: Option<ProceduralShape>) -> Self {
        Self {
            short_code,
            color,
            shape,
        }
    }

    /// Returns the simbad-style classification code matched by type
    /// resolution.
    pub fn short_code(&self) -> &'static str {
        self.short_code
    }

    /// Returns the packed `0xRRGGBBAA` default color.
    pub fn packed_color(&self) -> u32 {
        self.color
    }

    /// Returns the default color unpacked to normalized RGBA.
    pub fn default_color(&self) -> Rgba {
        Rgba::from_packed(self.color)
    }

    /// Returns the procedural drawing routine, or `None` for symbols
    /// sampled from the texture atlas.
    pub fn shape(&self) -> Option<ProceduralShape> {
        self.shape
    }
}

impl SymbolId {
    /// All symbols in atlas order.
    pub const ALL: [SymbolId; 11] = [
        SymbolId::Pointer,
        SymbolId::ArtificialSatellite,
        SymbolId::OpenGalacticCluster,
        SymbolId::GlobularCluster,
        SymbolId::Galaxy,
        SymbolId::InteractingGalaxies,
        SymbolId::PlanetaryNebula,
        SymbolId::InterstellarMatter,
        SymbolId::Unknown,
        SymbolId::BrightNebula,
        SymbolId::ClusterOfStars,
    ];

    /// Returns the zero-based cell index of this symbol inside the shared
    /// texture atlas.
    pub fn atlas_index(self) -> usize {
        self as usize - 1
    }

    /// Returns the registry entry for this symbol in O(1).
    ///
    /// The match is exhaustive, so every variant is guaranteed an entry at
    /// compile time.
    pub fn entry(self) -> &'static SymbolEntry {
        use ProceduralShape::*;

        const POINTER: SymbolEntry = SymbolEntry::new("POIN", 0x4CFF4CFF, None);
        const SATELLITE: SymbolEntry = SymbolEntry::new("Ast", 0xFF00FFFF, None);
        const OPEN_CLUSTER: SymbolEntry = SymbolEntry::new("OpC", 0xF2E9267F, Some(OpenCluster));
        const GLOBULAR: SymbolEntry = SymbolEntry::new("GlC", 0xF2E9267F, Some(GlobularCluster));
        const GALAXY: SymbolEntry = SymbolEntry::new("G", 0xFF930E7F, Some(Galaxy));
        const INTERACTING: SymbolEntry = SymbolEntry::new("IG", 0xFF930E7F, Some(Galaxy));
        const PLANETARY: SymbolEntry = SymbolEntry::new("PN", 0xF2E9267F, Some(PlanetaryNebula));
        const ISM: SymbolEntry = SymbolEntry::new("ISM", 0xF2E9267F, Some(DiffuseNebula));
        const UNKNOWN: SymbolEntry = SymbolEntry::new("?", 0xF2E9267F, Some(DiffuseNebula));
        const BRIGHT_NEBULA: SymbolEntry = SymbolEntry::new("BNe", 0x89FF5F7F, Some(BrightNebula));
        const STAR_CLUSTER: SymbolEntry = SymbolEntry::new("Cl*", 0x89FF5F7F, Some(StarCluster));

        match self {
            SymbolId::Pointer => &POINTER,
            SymbolId::ArtificialSatellite => &SATELLITE,
            SymbolId::OpenGalacticCluster => &OPEN_CLUSTER,
            SymbolId::GlobularCluster => &GLOBULAR,
            SymbolId::Galaxy => &GALAXY,
            SymbolId::InteractingGalaxies => &INTERACTING,
            SymbolId::PlanetaryNebula => &PLANETARY,
            SymbolId::InterstellarMatter => &ISM,
            SymbolId::Unknown => &UNKNOWN,
            SymbolId::BrightNebula => &BRIGHT_NEBULA,
            SymbolId::ClusterOfStars => &STAR_CLUSTER,
        }
    }

    /// Returns the short classification code for this symbol.
    pub fn short_code(self) -> &'static str {
        self.entry().short_code()
    }
}
