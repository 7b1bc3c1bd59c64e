use super::*;
use serde_json::json;

#[test]
fn test_static_products() {
    assert!(TargetProduct::StaticFramework.is_static());
    assert!(TargetProduct::StaticLibrary.is_static());
    assert!(!TargetProduct::Framework.is_static());
    assert!(!TargetProduct::App.is_static());
    assert!(!TargetProduct::Bundle.is_static());
}

#[test]
fn test_setting_value_accepts_string_and_list() {
    let settings: Settings = serde_json::from_value(json!({
        "base": {
            "SWIFT_VERSION": "5.9",
            "OTHER_LDFLAGS": ["-ObjC", "-lz"]
        },
        "configurations": {
            "Debug": { "SWIFT_OPTIMIZATION_LEVEL": "-Onone" }
        }
    }))
    .unwrap();

    assert_eq!(settings.base["SWIFT_VERSION"], SettingValue::from("5.9"));
    assert_eq!(
        settings.base["OTHER_LDFLAGS"],
        SettingValue::Array(vec!["-ObjC".to_string(), "-lz".to_string()])
    );
    assert_eq!(settings.configurations["Debug"].len(), 1);
    assert!(!settings.is_empty());
}

#[test]
fn test_empty_settings_serialize_compactly() {
    assert_eq!(serde_json::to_value(Settings::default()).unwrap(), json!({}));
}

#[test]
fn test_remove_bundle_executable_script() {
    let script = TargetScript::remove_bundle_executable();
    assert_eq!(script.name, "Remove Embedded Executable");
    assert_eq!(script.order, ScriptOrder::Post);
    assert!(script.script.contains("${TARGET_NAME}.bundle/${TARGET_NAME}"));
    assert!(script.script.contains("rm \"$FILE\""));
}

#[test]
fn test_info_plist_extending_empty_is_default() {
    assert_eq!(InfoPlist::extending_default(BTreeMap::new()), InfoPlist::Default);

    let mut props = BTreeMap::new();
    props.insert("UIAppFonts".to_string(), json!(["Inter.ttf"]));
    assert!(matches!(
        InfoPlist::extending_default(props),
        InfoPlist::ExtendingDefault(_)
    ));
}

#[test]
fn test_resource_and_package_shapes() {
    let resources: Vec<ResourceFileElement> = serde_json::from_value(json!([
        { "glob": "Shared/Fonts/**" },
        { "folder_reference": "Shared/Sounds" }
    ]))
    .unwrap();
    assert_eq!(
        resources,
        vec![
            ResourceFileElement::Glob("Shared/Fonts/**".to_string()),
            ResourceFileElement::FolderReference("Shared/Sounds".to_string()),
        ]
    );

    let package: Package = serde_json::from_value(json!({
        "remote": { "url": "https://github.com/Alamofire/Alamofire", "version": "5.8.0" }
    }))
    .unwrap();
    assert!(matches!(package, Package::Remote { .. }));
}
