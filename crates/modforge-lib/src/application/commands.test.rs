use super::*;
use crate::application::session_mocks::*;

const MANIFEST: &str = r#"
project:
  name: Shop
modules:
  - name: Core
  - name: Feature
    dependencies:
      - module: Core
      - module: ThirdPartyWrapper
  - name: ThirdPartyWrapper
    product:
      wrapper:
        - package:
            product: P
"#;

fn session() -> MockCommandSession {
    MockCommandSession::new().with_manifest("modforge.yml", MANIFEST)
}

mod handle_generate_tests {
    use super::*;

    #[test]
    fn it_prints_descriptor_to_stdout() {
        let session = session();
        execute_command_with_session(Commands::Generate { output: None }, &session).unwrap();

        let output = session.display.output();
        let project: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(project["name"], "Shop");
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn it_writes_descriptor_relative_to_workdir() {
        let session = session();
        execute_command_with_session(
            Commands::Generate {
                output: Some(PathBuf::from("build/project.json")),
            },
            &session,
        )
        .unwrap();

        let written = session
            .filesystem
            .file(Path::new("/work/build/project.json"))
            .unwrap();
        assert!(written.contains("\"CoreResources\""));
        assert!(session.display.output().is_empty());
        assert_eq!(session.display.messages().len(), 1);
    }

    #[test]
    fn it_reports_missing_manifest() {
        let session = MockCommandSession::new();
        let err = execute_command_with_session(Commands::Generate { output: None }, &session)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load manifest"));
    }
}

mod handle_check_tests {
    use super::*;

    fn generated() -> String {
        let session = session();
        execute_command_with_session(Commands::Generate { output: None }, &session).unwrap();
        session.display.output()
    }

    #[test]
    fn it_accepts_fresh_output() {
        let session = session().with_file("/work/project.json", &generated());
        execute_command_with_session(
            Commands::Check {
                output: PathBuf::from("project.json"),
            },
            &session,
        )
        .unwrap();
        assert!(session.display.messages()[0].contains("up to date"));
    }

    #[test]
    fn it_rejects_stale_output() {
        let stale = generated().replace("Shop", "OldShop");
        let session = session().with_file("/work/project.json", &stale);
        let err = execute_command_with_session(
            Commands::Check {
                output: PathBuf::from("project.json"),
            },
            &session,
        )
        .unwrap_err();
        assert!(err.to_string().contains("out of date"));
    }

    #[test]
    fn it_rejects_missing_output() {
        let err = execute_command_with_session(
            Commands::Check {
                output: PathBuf::from("project.json"),
            },
            &session(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}

mod handle_resolve_tests {
    use super::*;

    #[test]
    fn it_lists_edges_in_resolution_order() {
        let session = session();
        execute_command_with_session(
            Commands::Resolve {
                module: "Feature".to_string(),
            },
            &session,
        )
        .unwrap();

        assert_eq!(
            session.display.output(),
            "target:Core\ntarget:ThirdPartyWrapper\ntarget:CoreResources\ntarget:FeatureResources\n"
        );
    }

    #[test]
    fn it_prints_nothing_for_wrappers() {
        let session = session();
        execute_command_with_session(
            Commands::Resolve {
                module: "ThirdPartyWrapper".to_string(),
            },
            &session,
        )
        .unwrap();
        assert!(session.display.output().is_empty());
    }

    #[test]
    fn it_rejects_unknown_module() {
        let err = execute_command_with_session(
            Commands::Resolve {
                module: "Nope".to_string(),
            },
            &session(),
        )
        .unwrap_err();
        assert!(err.downcast_ref::<ModuleGraphError>().is_some());
    }
}

mod handle_describe_tests {
    use super::*;

    #[test]
    fn it_prints_module_targets_and_schemes() {
        let session = session();
        execute_command_with_session(
            Commands::Describe {
                module: "Core".to_string(),
            },
            &session,
        )
        .unwrap();

        let description: serde_json::Value =
            serde_json::from_str(&session.display.output()).unwrap();
        let targets: Vec<_> = description["targets"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(targets, ["Core", "CoreResources", "CoreTests"]);
        assert_eq!(description["schemes"].as_array().unwrap().len(), 2);
        assert_eq!(description["dependents"], serde_json::json!(["Feature"]));
    }

    #[test]
    fn it_lists_no_dependents_for_a_leaf_consumer() {
        let session = session();
        execute_command_with_session(
            Commands::Describe {
                module: "Feature".to_string(),
            },
            &session,
        )
        .unwrap();

        let description: serde_json::Value =
            serde_json::from_str(&session.display.output()).unwrap();
        assert_eq!(description["dependents"], serde_json::json!([]));
    }
}

mod handle_validate_tests {
    use super::*;

    #[test]
    fn it_reports_module_count() {
        let session = session();
        execute_command_with_session(Commands::Validate, &session).unwrap();
        assert!(session.display.messages()[0].contains("3 modules"));
    }

    #[test]
    fn it_rejects_cycles() {
        let manifest = r#"
project:
  name: Loop
modules:
  - name: A
    dependencies: [{ module: B }]
  - name: B
    dependencies: [{ module: A }]
"#;
        let session = MockCommandSession::new().with_manifest("modforge.yml", manifest);
        let err = execute_command_with_session(Commands::Validate, &session).unwrap_err();
        assert!(err.to_string().contains("Circular dependency"));
    }

    #[test]
    fn it_rejects_unknown_extension() {
        let session = MockCommandSession::new().with_manifest("modforge.json", "{}");
        let err = execute_command_with_session(Commands::Validate, &session).unwrap_err();
        assert!(err.to_string().contains("Unsupported manifest format"));
    }
}

mod handle_version_tests {
    use super::*;

    #[test]
    fn it_displays_version_information() {
        let session = MockCommandSession::new();
        execute_command_with_session(Commands::Version, &session).unwrap();
        assert_eq!(
            session.display.output(),
            format!("modforge {}\n", env!("CARGO_PKG_VERSION"))
        );
    }
}
