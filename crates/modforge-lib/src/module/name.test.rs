use super::*;

#[test]
fn test_derived_names() {
    let name = ModuleName::new("Core");
    assert_eq!(name.target(), "Core");
    assert_eq!(name.resources(), "CoreResources");
    assert_eq!(name.tests(), "CoreTests");
    assert_eq!(
        name.derived_names(),
        ["Core".to_string(), "CoreResources".to_string(), "CoreTests".to_string()]
    );
}

#[test]
fn test_display_and_conversions() {
    let name: ModuleName = "Feature".into();
    assert_eq!(name.to_string(), "Feature");
    assert_eq!(name, ModuleName::from("Feature".to_string()));
    assert_eq!(name.as_ref(), "Feature");
}

#[test]
fn test_serializes_as_plain_string() {
    let name = ModuleName::new("Core");
    assert_eq!(serde_json::to_string(&name).unwrap(), "\"Core\"");

    let parsed: ModuleName = serde_json::from_str("\"Networking\"").unwrap();
    assert_eq!(parsed.as_str(), "Networking");
}

#[test]
fn test_ordering_is_lexicographic() {
    let mut names = vec![
        ModuleName::new("Feature"),
        ModuleName::new("Core"),
        ModuleName::new("Analytics"),
    ];
    names.sort();
    let ordered: Vec<_> = names.iter().map(ModuleName::as_str).collect();
    assert_eq!(ordered, ["Analytics", "Core", "Feature"]);
}
