//! Engine value-type names.
//!
//! The host engine exposes many plain value structs (vectors, rotators, ranges, asset paths, ...). Each one is
//! bound under a hand-chosen name listed here. The list is open: adding a type means adding an entry and an
//! impl in `typekey_reflect::engine`, never touching the naming mechanism.
//!
//! ## Notes
//! - Math and asset types drop the engine's `F`/`T` prefixes (`Vector`, `SoftObjectPath`).
//! - UI/layout and gameplay types keep their native identifier (`FMargin`, `FHitResult`), which is how
//!   existing binding tables spell them.
//!
//! ## Examples
//! ```rust
//! use typekey_core::lang::engine::{self, EngineTypeGroup, EngineTypeId};
//!
//! assert_eq!(engine::as_str(EngineTypeId::Vector2D), "Vector2D");
//! assert_eq!(engine::from_str("rotator"), Some(EngineTypeId::Rotator));
//! assert_eq!(engine::info_for(EngineTypeId::Guid).group, EngineTypeGroup::Core);
//! ```

use crate::lang::registry::{KeyInfo, key};

/// Stable identifier for engine value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineTypeId {
    Vector,
    Vector2D,
    Vector4,
    Rotator,
    Quat,
    Transform,
    Plane,
    Matrix,
    Box2D,
    Ray,
    Sphere,
    IntPoint,
    IntVector3,
    IntVector4,
    TwoVectors,
    LinearColor,
    Color,
    FloatRange,
    DoubleRange,
    Int32Range,
    FloatRangeBound,
    DoubleRangeBound,
    Int32RangeBound,
    FloatInterval,
    DoubleInterval,
    Int32Interval,
    InterpCurvePointFloat,
    InterpCurvePointVector2D,
    InterpCurvePointVector,
    InterpCurvePointQuat,
    InterpCurvePointTwoVectors,
    InterpCurvePointLinearColor,
    RandomStream,
    Guid,
    FallbackStruct,
    DateTime,
    FrameNumber,
    FrameTime,
    SoftObjectPath,
    SoftClassPath,
    PrimaryAssetType,
    PrimaryAssetId,
    TopLevelAssetPath,
    HitResult,
    ActorSpawnParameters,
    ActorComponentTickFunction,
    SlateFontInfo,
    SlateBrush,
    SlateColor,
    Margin,
    Geometry,
    Anchors,
}

/// Family an engine type belongs to (for listings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineTypeGroup {
    Math,
    Color,
    Range,
    Curve,
    Core,
    Time,
    Asset,
    Gameplay,
    Layout,
}

impl EngineTypeGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            EngineTypeGroup::Math => "math",
            EngineTypeGroup::Color => "color",
            EngineTypeGroup::Range => "range",
            EngineTypeGroup::Curve => "curve",
            EngineTypeGroup::Core => "core",
            EngineTypeGroup::Time => "time",
            EngineTypeGroup::Asset => "asset",
            EngineTypeGroup::Gameplay => "gameplay",
            EngineTypeGroup::Layout => "layout",
        }
    }
}

/// Metadata for an engine value type.
#[derive(Debug, Clone, Copy)]
pub struct EngineTypeInfo {
    pub key: KeyInfo<EngineTypeId>,
    pub group: EngineTypeGroup,
}

use EngineTypeGroup as G;
use EngineTypeId as E;

/// Registry of engine value types.
pub const ENGINE_TYPES: &[EngineTypeInfo] = &[
    info(E::Vector, "Vector", "3D vector of doubles.", G::Math),
    info(E::Vector2D, "Vector2D", "2D vector of doubles.", G::Math),
    info(E::Vector4, "Vector4", "4D vector of doubles.", G::Math),
    info(E::Rotator, "Rotator", "Pitch/yaw/roll rotation in degrees.", G::Math),
    info(E::Quat, "Quat", "Rotation quaternion.", G::Math),
    info(E::Transform, "Transform", "Rotation, translation and scale.", G::Math),
    info(E::Plane, "Plane", "Plane in 3D space.", G::Math),
    info(E::Matrix, "Matrix", "4x4 matrix.", G::Math),
    info(E::Box2D, "Box2D", "Axis-aligned 2D box.", G::Math),
    info(E::Ray, "Ray", "Origin and direction.", G::Math),
    info(E::Sphere, "Sphere", "Center and radius.", G::Math),
    info(E::IntPoint, "IntPoint", "2D integer point.", G::Math),
    info(E::IntVector3, "IntVector3", "3D integer vector.", G::Math),
    info(E::IntVector4, "IntVector4", "4D integer vector.", G::Math),
    info(E::TwoVectors, "TwoVectors", "A pair of vectors.", G::Math),
    info(E::LinearColor, "LinearColor", "Linear-space float color.", G::Color),
    info(E::Color, "Color", "sRGB 8-bit color.", G::Color),
    info(E::FloatRange, "FloatRange", "Range over floats.", G::Range),
    info(E::DoubleRange, "DoubleRange", "Range over doubles.", G::Range),
    info(E::Int32Range, "Int32Range", "Range over 32-bit integers.", G::Range),
    info(E::FloatRangeBound, "FloatRangeBound", "One bound of a float range.", G::Range),
    info(E::DoubleRangeBound, "DoubleRangeBound", "One bound of a double range.", G::Range),
    info(E::Int32RangeBound, "Int32RangeBound", "One bound of an integer range.", G::Range),
    info(E::FloatInterval, "FloatInterval", "Closed float interval.", G::Range),
    info(E::DoubleInterval, "DoubleInterval", "Closed double interval.", G::Range),
    info(E::Int32Interval, "Int32Interval", "Closed integer interval.", G::Range),
    info(E::InterpCurvePointFloat, "InterpCurvePointFloat", "Curve point over floats.", G::Curve),
    info(
        E::InterpCurvePointVector2D,
        "InterpCurvePointVector2D",
        "Curve point over 2D vectors.",
        G::Curve,
    ),
    info(E::InterpCurvePointVector, "InterpCurvePointVector", "Curve point over vectors.", G::Curve),
    info(E::InterpCurvePointQuat, "InterpCurvePointQuat", "Curve point over quaternions.", G::Curve),
    info(
        E::InterpCurvePointTwoVectors,
        "InterpCurvePointTwoVectors",
        "Curve point over vector pairs.",
        G::Curve,
    ),
    info(
        E::InterpCurvePointLinearColor,
        "InterpCurvePointLinearColor",
        "Curve point over linear colors.",
        G::Curve,
    ),
    info(E::RandomStream, "RandomStream", "Seeded random number stream.", G::Core),
    info(E::Guid, "Guid", "128-bit globally unique identifier.", G::Core),
    info(E::FallbackStruct, "FallbackStruct", "Placeholder for unknown struct types.", G::Core),
    info(E::DateTime, "DateTime", "Date and time in ticks.", G::Time),
    info(E::FrameNumber, "FrameNumber", "Integer frame index.", G::Time),
    info(E::FrameTime, "FrameTime", "Frame index plus sub-frame.", G::Time),
    info(E::SoftObjectPath, "SoftObjectPath", "Path to an asset object.", G::Asset),
    info(E::SoftClassPath, "SoftClassPath", "Path to an asset class.", G::Asset),
    info(E::PrimaryAssetType, "PrimaryAssetType", "Primary asset type name.", G::Asset),
    info(E::PrimaryAssetId, "PrimaryAssetId", "Primary asset type plus name.", G::Asset),
    info(E::TopLevelAssetPath, "TopLevelAssetPath", "Package plus asset name.", G::Asset),
    info(E::HitResult, "FHitResult", "Result of a trace or sweep.", G::Gameplay),
    info(
        E::ActorSpawnParameters,
        "FActorSpawnParameters",
        "Options for spawning an actor.",
        G::Gameplay,
    ),
    info(
        E::ActorComponentTickFunction,
        "FActorComponentTickFunction",
        "Tick registration of a component.",
        G::Gameplay,
    ),
    info(E::SlateFontInfo, "FSlateFontInfo", "UI font description.", G::Layout),
    info(E::SlateBrush, "FSlateBrush", "UI brush.", G::Layout),
    info(E::SlateColor, "FSlateColor", "UI color or style reference.", G::Layout),
    info(E::Margin, "FMargin", "UI padding on four sides.", G::Layout),
    info(E::Geometry, "FGeometry", "UI widget geometry.", G::Layout),
    info(E::Anchors, "FAnchors", "UI anchor rectangle.", G::Layout),
];

/// Resolve an engine type spelling (case-insensitive).
pub fn from_str(name: &str) -> Option<EngineTypeId> {
    ENGINE_TYPES.iter().find(|t| t.key.spelled(name)).map(|t| t.key.id)
}

/// Return the canonical spelling of an engine type.
pub fn as_str(id: EngineTypeId) -> &'static str {
    info_for(id).key.canonical
}

/// Return the registry entry of an engine type.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: EngineTypeId) -> &'static EngineTypeInfo {
    ENGINE_TYPES
        .iter()
        .find(|t| t.key.id == id)
        .expect("INVARIANT: every EngineTypeId has a registry entry")
}

/// Iterate the entries of one group, in registry order.
pub fn in_group(group: EngineTypeGroup) -> impl Iterator<Item = &'static EngineTypeInfo> {
    ENGINE_TYPES.iter().filter(move |t| t.group == group)
}

const fn info(
    id: EngineTypeId,
    canonical: &'static str,
    description: &'static str,
    group: EngineTypeGroup,
) -> EngineTypeInfo {
    EngineTypeInfo {
        key: key(id, canonical, description),
        group,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_group_keeps_native_prefix() {
        assert!(in_group(G::Layout).all(|t| t.key.canonical.starts_with('F')));
        assert_eq!(in_group(G::Layout).count(), 6);
    }

    #[test]
    fn curve_points_are_registered_per_instantiation() {
        let names: Vec<_> = in_group(G::Curve).map(|t| t.key.canonical).collect();
        assert_eq!(
            names,
            [
                "InterpCurvePointFloat",
                "InterpCurvePointVector2D",
                "InterpCurvePointVector",
                "InterpCurvePointQuat",
                "InterpCurvePointTwoVectors",
                "InterpCurvePointLinearColor",
            ]
        );
    }
}
