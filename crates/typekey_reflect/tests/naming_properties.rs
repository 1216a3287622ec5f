//! Naming-table properties checked from outside the crate, the way binding code sees them.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::ffi::{CStr, c_void};
use std::sync::Arc;

use typekey_core::lang::engine::{self, EngineTypeId};
use typekey_core::lang::primitives::{self, PrimitiveId};
use typekey_reflect::prelude::*;
use typekey_reflect::{LuaState, category_of};

#[derive(ObjectHandle)]
struct Actor;

#[derive(ObjectHandle)]
struct Pawn;

object_handle!(Widget);
struct Widget;

#[derive(TypeName)]
#[allow(dead_code)]
struct FPlayerSave {
    level: u32,
}

fn qualified_forms_agree<T: TypeName>() {
    let base = name_of::<T>();
    assert_eq!(name_of::<&T>(), base);
    assert_eq!(name_of::<&mut T>(), base);
    assert_eq!(name_of::<*const T>(), base);
    assert_eq!(name_of::<*mut T>(), base);
    assert_eq!(name_of::<&&T>(), base);
}

#[test]
fn qualifier_stripping_preserves_the_key() {
    qualified_forms_agree::<i32>();
    qualified_forms_agree::<String>();
    qualified_forms_agree::<Vector>();
    qualified_forms_agree::<Actor>();
    qualified_forms_agree::<FPlayerSave>();
    qualified_forms_agree::<Vec<Range<f32>>>();
}

#[test]
fn every_handle_shares_one_key() {
    let erased = primitives::as_str(PrimitiveId::Object);
    assert_eq!(name_of::<Actor>(), erased);
    assert_eq!(name_of::<Pawn>(), erased);
    assert_eq!(name_of::<Widget>(), erased);
    assert_eq!(name_of::<Object>(), erased);
    assert_eq!(name_of::<Actor>(), name_of::<Pawn>());
}

#[test]
fn wrapper_keys_compose_from_inner_keys() {
    assert_eq!(name_of::<Vec<i32>>(), "TArray<int32>");
    assert_eq!(name_of::<Arc<Vector>>(), "TSharedPtr<Vector>");
    assert_eq!(name_of::<HashMap<String, &Actor>>(), "TMap<FString,UObject>");
    assert_eq!(name_of::<BTreeMap<i32, Vec<Arc<Vector>>>>(), "TMap<int32,TArray<TSharedPtr<Vector>>>");
    assert_eq!(name_of::<HashSet<Guid>>(), "TSet<Guid>");
    assert_eq!(name_of::<Vec<Arc<Vector>>>(), "TArray<TSharedPtr<Vector>>");
}

#[test]
fn keys_compare_case_insensitively() {
    assert_eq!(name_of::<Vec<i32>>(), "tarray<INT32>");
    assert_eq!(name_of::<Vec<i32>>().key_hash(), IdentName::from("TARRAY<int32>").key_hash());
}

#[test]
fn text_and_pointer_shapes() {
    assert_eq!(name_of::<&str>(), "FString");
    assert_eq!(name_of::<&CStr>(), "char");
    assert_eq!(name_of::<*mut c_void>(), "void");
    assert_eq!(name_of::<*mut LuaState>(), "lua_State");
    assert_eq!(name_of::<Text>(), "FText");
}

#[test]
fn compatibility_examples() {
    assert!(matches::<i32>(ValueTag::NUMBER));
    assert!(!matches::<i32>(ValueTag::STRING));
    assert!(matches::<bool>(ValueTag::BOOLEAN));
    assert!(!matches::<FPlayerSave>(ValueTag::NIL));
    assert!(!matches::<FPlayerSave>(ValueTag::NONE));
    assert!(matches::<FPlayerSave>(ValueTag::NUMBER));
    assert!(matches::<&Actor>(ValueTag::USERDATA));
    assert!(!matches::<&Actor>(ValueTag::STRING));
}

#[test]
fn classifier_strips_exactly_one_level() {
    assert!(is_object_handle::<Actor>());
    assert!(is_object_handle::<*const Pawn>());
    assert!(is_object_handle::<&mut Widget>());
    assert!(!is_object_handle::<&&Actor>());
    assert!(!is_object_handle::<Vector>());
    assert!(!is_object_handle::<Arc<Actor>>());
}

#[test]
fn signature_keys_use_trailing_delimiters() {
    assert_eq!(signature_key::<(), ()>(","), "void,");
    assert_eq!(signature_key::<i32, (&Actor, &str)>(","), "int32,UObject,FString,");
}

/// Pair each engine vocabulary entry with the Rust type registered for it.
fn engine_entries() -> Vec<(EngineTypeId, IdentName)> {
    use EngineTypeId as E;
    vec![
        (E::Vector, name_of::<Vector>()),
        (E::Vector2D, name_of::<Vector2>()),
        (E::Vector4, name_of::<Vector4>()),
        (E::Rotator, name_of::<Rotator>()),
        (E::Quat, name_of::<Quat>()),
        (E::Transform, name_of::<Transform>()),
        (E::Plane, name_of::<Plane>()),
        (E::Matrix, name_of::<Matrix>()),
        (E::Box2D, name_of::<Box2>()),
        (E::Ray, name_of::<Ray>()),
        (E::Sphere, name_of::<Sphere>()),
        (E::IntPoint, name_of::<IntPoint>()),
        (E::IntVector3, name_of::<IntVector3>()),
        (E::IntVector4, name_of::<IntVector4>()),
        (E::TwoVectors, name_of::<TwoVectors>()),
        (E::LinearColor, name_of::<LinearColor>()),
        (E::Color, name_of::<Color>()),
        (E::FloatRange, name_of::<Range<f32>>()),
        (E::DoubleRange, name_of::<Range<f64>>()),
        (E::Int32Range, name_of::<Range<i32>>()),
        (E::FloatRangeBound, name_of::<RangeBound<f32>>()),
        (E::DoubleRangeBound, name_of::<RangeBound<f64>>()),
        (E::Int32RangeBound, name_of::<RangeBound<i32>>()),
        (E::FloatInterval, name_of::<Interval<f32>>()),
        (E::DoubleInterval, name_of::<Interval<f64>>()),
        (E::Int32Interval, name_of::<Interval<i32>>()),
        (E::InterpCurvePointFloat, name_of::<InterpCurvePoint<f32>>()),
        (E::InterpCurvePointVector2D, name_of::<InterpCurvePoint<Vector2>>()),
        (E::InterpCurvePointVector, name_of::<InterpCurvePoint<Vector>>()),
        (E::InterpCurvePointQuat, name_of::<InterpCurvePoint<Quat>>()),
        (E::InterpCurvePointTwoVectors, name_of::<InterpCurvePoint<TwoVectors>>()),
        (E::InterpCurvePointLinearColor, name_of::<InterpCurvePoint<LinearColor>>()),
        (E::RandomStream, name_of::<RandomStream>()),
        (E::Guid, name_of::<Guid>()),
        (E::FallbackStruct, name_of::<FallbackStruct>()),
        (E::DateTime, name_of::<DateTime>()),
        (E::FrameNumber, name_of::<FrameNumber>()),
        (E::FrameTime, name_of::<FrameTime>()),
        (E::SoftObjectPath, name_of::<SoftObjectPath>()),
        (E::SoftClassPath, name_of::<SoftClassPath>()),
        (E::PrimaryAssetType, name_of::<PrimaryAssetType>()),
        (E::PrimaryAssetId, name_of::<PrimaryAssetId>()),
        (E::TopLevelAssetPath, name_of::<TopLevelAssetPath>()),
        (E::HitResult, name_of::<HitResult>()),
        (E::ActorSpawnParameters, name_of::<ActorSpawnParameters>()),
        (E::ActorComponentTickFunction, name_of::<ActorComponentTickFunction>()),
        (E::SlateFontInfo, name_of::<SlateFontInfo>()),
        (E::SlateBrush, name_of::<SlateBrush>()),
        (E::SlateColor, name_of::<SlateColor>()),
        (E::Margin, name_of::<Margin>()),
        (E::Geometry, name_of::<Geometry>()),
        (E::Anchors, name_of::<Anchors>()),
    ]
}

#[test]
fn engine_vocabulary_matches_registered_types() {
    let entries = engine_entries();
    assert_eq!(entries.len(), engine::ENGINE_TYPES.len(), "every engine entry needs a registered type");
    for (id, name) in entries {
        assert_eq!(name.as_str(), engine::as_str(id), "{id:?}");
        assert_eq!(engine::from_str(&name.as_str().to_ascii_lowercase()), Some(id));
    }
}

#[test]
fn primitive_categories_match_the_table() {
    let cases = [
        (PrimitiveId::Void, name_of::<()>(), category_of::<()>()),
        (PrimitiveId::Int8, name_of::<i8>(), category_of::<i8>()),
        (PrimitiveId::UInt8, name_of::<u8>(), category_of::<u8>()),
        (PrimitiveId::Int16, name_of::<i16>(), category_of::<i16>()),
        (PrimitiveId::UInt16, name_of::<u16>(), category_of::<u16>()),
        (PrimitiveId::Int32, name_of::<i32>(), category_of::<i32>()),
        (PrimitiveId::UInt32, name_of::<u32>(), category_of::<u32>()),
        (PrimitiveId::Int64, name_of::<i64>(), category_of::<i64>()),
        (PrimitiveId::UInt64, name_of::<u64>(), category_of::<u64>()),
        (PrimitiveId::Float, name_of::<f32>(), category_of::<f32>()),
        (PrimitiveId::Double, name_of::<f64>(), category_of::<f64>()),
        (PrimitiveId::Bool, name_of::<bool>(), category_of::<bool>()),
        (PrimitiveId::Char, name_of::<char>(), category_of::<char>()),
        (PrimitiveId::String, name_of::<String>(), category_of::<String>()),
        (PrimitiveId::Text, name_of::<Text>(), category_of::<Text>()),
        (PrimitiveId::LuaState, name_of::<LuaState>(), category_of::<LuaState>()),
        (PrimitiveId::Object, name_of::<Object>(), category_of::<Object>()),
    ];
    assert_eq!(cases.len(), primitives::PRIMITIVES.len());
    for (id, name, category) in cases {
        let info = primitives::PRIMITIVES
            .iter()
            .find(|p| p.key.id == id)
            .expect("registry entry");
        assert_eq!(name.as_str(), info.key.canonical, "{id:?}");
        assert_eq!(category, info.category, "{id:?}");
    }
}
