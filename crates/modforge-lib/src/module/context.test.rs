use super::*;

fn context(template: &str) -> Result<ProjectContext, ContextError> {
    ProjectContext::new(Platform::Ios, DEFAULT_MODULES_ROOT, template)
}

#[test]
fn test_default_template_renders_target_name() {
    let context = context(DEFAULT_BUNDLE_ID_TEMPLATE).unwrap();
    assert_eq!(context.bundle_id("Core").unwrap(), "com.example.Core");
    assert_eq!(
        context.bundle_id("CoreResources").unwrap(),
        "com.example.CoreResources"
    );
}

#[test]
fn test_template_can_use_platform() {
    let context = context("org.acme.{{platform}}.{{name}}").unwrap();
    assert_eq!(context.bundle_id("Feature").unwrap(), "org.acme.ios.Feature");
}

#[test]
fn test_template_is_not_html_escaped() {
    let context = context("com.example.{{name}}").unwrap();
    assert_eq!(context.bundle_id("A&B").unwrap(), "com.example.A&B");
}

#[test]
fn test_unparseable_template_rejected() {
    assert!(matches!(
        context("com.example.{{name"),
        Err(ContextError::InvalidTemplate { .. })
    ));
}

#[test]
fn test_unknown_variable_rejected() {
    assert!(matches!(
        context("com.example.{{module_name}}"),
        Err(ContextError::InvalidTemplate { .. })
    ));
}

#[test]
fn test_layout_paths() {
    let context = ProjectContext::new(Platform::Ios, "Packages/", DEFAULT_BUNDLE_ID_TEMPLATE).unwrap();
    let core = ModuleName::new("Core");

    assert_eq!(context.modules_root, "Packages");
    assert_eq!(context.module_path(&core), "Packages/Core");
    assert_eq!(context.sources_glob(&core), "Packages/Core/Sources/**");
    assert_eq!(context.resources_glob(&core), "Packages/Core/Resources/**");
    assert_eq!(context.tests_glob(&core), "Packages/Core/Tests/**");
    assert_eq!(
        context.test_resources_glob(&core),
        "Packages/Core/TestResources/**"
    );
    assert_eq!(context.readme(&core), "Packages/Core/README.md");
}
