//! Derive macros used from a downstream crate.

use typekey_reflect::{
    CustomTypeName, HandleShape, ObjectHandle, ParamCategory, TypeName, ValueTag, has_custom_type_name,
    is_object_handle, matches, name_of,
};

#[derive(TypeName)]
#[allow(dead_code)]
struct FQuestState {
    step: u16,
}

#[derive(TypeName)]
#[type_name(rename = "EDamageKind")]
#[allow(dead_code)]
enum DamageKind {
    Physical,
    Fire,
}

#[derive(TypeName)]
#[type_name(custom)]
struct ScriptDelegate;

impl CustomTypeName for ScriptDelegate {
    const LUA_TYPENAME: &'static str = "FScriptDelegate";
}

#[derive(ObjectHandle)]
struct Character;

fn assert_handle<T: ObjectHandle + ?Sized>() {}

#[test]
fn struct_derive_uses_the_identifier() {
    assert_eq!(name_of::<FQuestState>(), "FQuestState");
    assert_eq!(<FQuestState as TypeName>::CATEGORY, ParamCategory::Permissive);
    assert!(matches::<FQuestState>(ValueTag::TABLE));
}

#[test]
fn enum_derive_is_numeric_and_renamed() {
    assert_eq!(name_of::<DamageKind>(), "EDamageKind");
    assert!(matches::<DamageKind>(ValueTag::NUMBER));
    assert!(!matches::<DamageKind>(ValueTag::STRING));
}

#[test]
fn custom_derive_reads_the_hook() {
    assert_eq!(name_of::<ScriptDelegate>(), "FScriptDelegate");
    assert_eq!(<ScriptDelegate as TypeName>::CUSTOM_NAME, Some("FScriptDelegate"));
    assert!(has_custom_type_name::<ScriptDelegate>());
    assert!(!has_custom_type_name::<FQuestState>());
}

#[test]
fn handle_derive_erases_the_name() {
    assert_handle::<Character>();
    assert_eq!(name_of::<&Character>(), "UObject");
    assert_eq!(<Character as TypeName>::HANDLE, HandleShape::Direct);
    assert_eq!(<*mut Character as TypeName>::HANDLE, HandleShape::Pointer);
    assert!(is_object_handle::<&Character>());
    assert!(matches::<*const Character>(ValueTag::USERDATA));
}

#[test]
fn derived_types_compose_in_wrappers() {
    assert_eq!(name_of::<Vec<DamageKind>>(), "TArray<EDamageKind>");
    assert_eq!(name_of::<Vec<&Character>>(), "TArray<UObject>");
}
