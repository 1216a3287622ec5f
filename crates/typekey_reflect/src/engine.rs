//! Engine value types and their naming-table entries.
//!
//! These are plain data carriers; the engine owns their behavior. Each concrete type binds under exactly one
//! name from [`typekey_core::lang::engine`]. Generic shapes are registered per instantiation, so only the
//! instantiations the engine exposes resolve:
//!
//! ```compile_fail
//! use typekey_reflect::{InterpCurvePoint, name_of};
//!
//! let _ = name_of::<InterpCurvePoint<i32>>();
//! ```

use typekey_core::lang::engine::{self, EngineTypeId};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector4<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

/// Rotation in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotator<T = f64> {
    pub pitch: T,
    pub yaw: T,
    pub roll: T,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Quat<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transform<T = f64> {
    pub rotation: Quat<T>,
    pub translation: Vector<T>,
    pub scale: Vector<T>,
}

/// Plane `x*X + y*Y + z*Z = w`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Plane<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

/// Row-major 4x4 matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Matrix<T = f64> {
    pub m: [[T; 4]; 4],
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Box2<T = f64> {
    pub min: Vector2<T>,
    pub max: Vector2<T>,
    pub is_valid: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ray<T = f64> {
    pub origin: Vector<T>,
    pub direction: Vector<T>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sphere<T = f64> {
    pub center: Vector<T>,
    pub w: T,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IntPoint {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IntVector3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IntVector4 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub w: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TwoVectors {
    pub v1: Vector,
    pub v2: Vector,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// 8-bit sRGB color, stored in the engine's BGRA order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RangeBoundKind {
    Exclusive,
    Inclusive,
    #[default]
    Open,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RangeBound<T> {
    pub kind: RangeBoundKind,
    pub value: T,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Range<T> {
    pub lower: RangeBound<T>,
    pub upper: RangeBound<T>,
}

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Interval<T> {
    pub min: T,
    pub max: T,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InterpCurveMode {
    #[default]
    Linear,
    CurveAuto,
    Constant,
    CurveUser,
    CurveBreak,
    CurveAutoClamped,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InterpCurvePoint<T> {
    pub in_val: f32,
    pub out_val: T,
    pub arrive_tangent: T,
    pub leave_tangent: T,
    pub interp_mode: InterpCurveMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomStream {
    pub initial_seed: i32,
    pub seed: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Guid {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
}

/// Stand-in bound for struct parameters whose real type is not exposed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FallbackStruct;

/// 100-nanosecond ticks since 0001-01-01.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
    pub ticks: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameNumber {
    pub value: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    pub frame: FrameNumber,
    /// In `[0, 1)`.
    pub sub_frame: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TopLevelAssetPath {
    pub package_name: String,
    pub asset_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SoftObjectPath {
    pub asset_path: TopLevelAssetPath,
    pub sub_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SoftClassPath(pub SoftObjectPath);

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PrimaryAssetType {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PrimaryAssetId {
    pub primary_asset_type: PrimaryAssetType,
    pub primary_asset_name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitResult {
    pub blocking_hit: bool,
    pub time: f32,
    pub distance: f32,
    pub location: Vector,
    pub impact_point: Vector,
    pub normal: Vector,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorSpawnParameters {
    pub name: String,
    pub no_fail: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActorComponentTickFunction {
    pub can_ever_tick: bool,
    pub tick_interval: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlateFontInfo {
    pub typeface_font_name: String,
    pub size: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SlateColor {
    pub specified: LinearColor,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SlateBrush {
    pub image_size: Vector2,
    pub tint_color: SlateColor,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Margin {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geometry {
    pub local_size: Vector2,
    pub absolute_position: Vector2,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Anchors {
    pub minimum: Vector2,
    pub maximum: Vector2,
}

macro_rules! engine_names {
    ($($ty:ty => $id:ident),* $(,)?) => {
        $(crate::impl_type_name!($ty => engine::as_str(EngineTypeId::$id));)*
    };
}

engine_names! {
    Vector => Vector,
    Vector2 => Vector2D,
    Vector4 => Vector4,
    Rotator => Rotator,
    Quat => Quat,
    Transform => Transform,
    Plane => Plane,
    Matrix => Matrix,
    Box2 => Box2D,
    Ray => Ray,
    Sphere => Sphere,
    IntPoint => IntPoint,
    IntVector3 => IntVector3,
    IntVector4 => IntVector4,
    TwoVectors => TwoVectors,
    LinearColor => LinearColor,
    Color => Color,
    Range<f32> => FloatRange,
    Range<f64> => DoubleRange,
    Range<i32> => Int32Range,
    RangeBound<f32> => FloatRangeBound,
    RangeBound<f64> => DoubleRangeBound,
    RangeBound<i32> => Int32RangeBound,
    Interval<f32> => FloatInterval,
    Interval<f64> => DoubleInterval,
    Interval<i32> => Int32Interval,
    InterpCurvePoint<f32> => InterpCurvePointFloat,
    InterpCurvePoint<Vector2> => InterpCurvePointVector2D,
    InterpCurvePoint<Vector> => InterpCurvePointVector,
    InterpCurvePoint<Quat> => InterpCurvePointQuat,
    InterpCurvePoint<TwoVectors> => InterpCurvePointTwoVectors,
    InterpCurvePoint<LinearColor> => InterpCurvePointLinearColor,
    RandomStream => RandomStream,
    Guid => Guid,
    FallbackStruct => FallbackStruct,
    DateTime => DateTime,
    FrameNumber => FrameNumber,
    FrameTime => FrameTime,
    SoftObjectPath => SoftObjectPath,
    SoftClassPath => SoftClassPath,
    PrimaryAssetType => PrimaryAssetType,
    PrimaryAssetId => PrimaryAssetId,
    TopLevelAssetPath => TopLevelAssetPath,
    HitResult => HitResult,
    ActorSpawnParameters => ActorSpawnParameters,
    ActorComponentTickFunction => ActorComponentTickFunction,
    SlateFontInfo => SlateFontInfo,
    SlateBrush => SlateBrush,
    SlateColor => SlateColor,
    Margin => Margin,
    Geometry => Geometry,
    Anchors => Anchors,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ParamCategory, TypeName, ValueTag, matches, name_of};

    #[test]
    fn math_types_drop_the_engine_prefix() {
        assert_eq!(name_of::<Vector>(), "Vector");
        assert_eq!(name_of::<Vector2>(), "Vector2D");
        assert_eq!(name_of::<Box2>(), "Box2D");
        assert_eq!(name_of::<&Transform>(), "Transform");
    }

    #[test]
    fn instantiations_get_distinct_names() {
        assert_eq!(name_of::<Range<f32>>(), "FloatRange");
        assert_eq!(name_of::<Range<f64>>(), "DoubleRange");
        assert_eq!(name_of::<Range<i32>>(), "Int32Range");
        assert_eq!(name_of::<RangeBound<i32>>(), "Int32RangeBound");
        assert_eq!(name_of::<Interval<f64>>(), "DoubleInterval");
        assert_eq!(name_of::<InterpCurvePoint<Vector2>>(), "InterpCurvePointVector2D");
        assert_eq!(name_of::<InterpCurvePoint<LinearColor>>(), "InterpCurvePointLinearColor");
    }

    #[test]
    fn layout_types_keep_their_identifier() {
        assert_eq!(name_of::<Margin>(), "FMargin");
        assert_eq!(name_of::<*const Geometry>(), "FGeometry");
        assert_eq!(name_of::<HitResult>(), "FHitResult");
    }

    #[test]
    fn engine_types_compose_inside_wrappers() {
        assert_eq!(name_of::<Vec<SoftObjectPath>>(), "TArray<SoftObjectPath>");
        assert_eq!(name_of::<Vec<Vec<IntPoint>>>(), "TArray<TArray<IntPoint>>");
    }

    #[test]
    fn engine_structs_are_permissive() {
        assert_eq!(Vector::<f64>::CATEGORY, ParamCategory::Permissive);
        assert!(matches::<Rotator>(ValueTag::USERDATA));
        assert!(matches::<Rotator>(ValueTag::TABLE));
        assert!(!matches::<Rotator>(ValueTag::NIL));
    }

    #[test]
    fn defaults_are_zeroed() {
        assert_eq!(Vector::<f64>::default(), Vector { x: 0.0, y: 0.0, z: 0.0 });
        assert_eq!(RangeBound::<i32>::default().kind, RangeBoundKind::Open);
        assert_eq!(InterpCurvePoint::<f32>::default().interp_mode, InterpCurveMode::Linear);
    }
}
