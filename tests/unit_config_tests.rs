//! # Config Module Unit Tests / Config 模块单元测试
//!
//! This module contains unit tests for the `config.rs` module, testing the
//! `BuildSpec` structure, its YAML deserialization and the `load_spec`
//! error paths.
//!
//! 此模块包含 `config.rs` 模块的单元测试，
//! 测试 `BuildSpec` 结构体、其 YAML 反序列化以及 `load_spec` 的错误路径。

use buildspec_runner::core::config::{load_spec, BuildSpec};
use std::fs;
use tempfile::tempdir;

#[cfg(test)]
mod build_spec_tests {
    use super::*;

    #[test]
    fn test_build_spec_basic_deserialization() {
        let yaml = r#"
tests:
  - cargo fmt --check
  - cargo test
"#;

        let spec: BuildSpec = serde_yml::from_str(yaml).unwrap();

        assert_eq!(spec.tests.len(), 2);
        assert_eq!(spec.tests[0], "cargo fmt --check");
        assert_eq!(spec.tests[1], "cargo test");
    }

    #[test]
    fn test_build_spec_preserves_command_order() {
        let yaml = r#"
tests:
  - echo first
  - echo second
  - echo third
"#;

        let spec: BuildSpec = serde_yml::from_str(yaml).unwrap();

        assert_eq!(spec.tests, vec!["echo first", "echo second", "echo third"]);
    }

    #[test]
    fn test_build_spec_shell_operators_survive_parsing() {
        let yaml = r#"
tests:
  - "echo hi && exit 1"
  - "cat missing.txt | wc -l"
"#;

        let spec: BuildSpec = serde_yml::from_str(yaml).unwrap();

        assert_eq!(spec.tests[0], "echo hi && exit 1");
        assert_eq!(spec.tests[1], "cat missing.txt | wc -l");
    }

    #[test]
    fn test_build_spec_absent_tests_key_yields_empty_list() {
        // A buildspec without the recognized key still parses; the runner
        // treats the empty list as the early-exit short circuit.
        let yaml = r#"
version: 0.2
phases:
  build:
    commands:
      - make
"#;

        let spec: BuildSpec = serde_yml::from_str(yaml).unwrap();

        assert!(spec.tests.is_empty());
    }

    #[test]
    fn test_build_spec_unrecognized_keys_are_ignored() {
        let yaml = r#"
version: 0.2
env:
  variables:
    RUST_BACKTRACE: "1"
tests:
  - cargo test
"#;

        let spec: BuildSpec = serde_yml::from_str(yaml).unwrap();

        assert_eq!(spec.tests, vec!["cargo test"]);
    }

    #[test]
    fn test_build_spec_explicit_empty_list() {
        let spec: BuildSpec = serde_yml::from_str("tests: []\n").unwrap();

        assert!(spec.tests.is_empty());
    }

    #[test]
    fn test_build_spec_malformed_yaml_is_an_error() {
        let result: Result<BuildSpec, _> = serde_yml::from_str("tests: [unclosed\n");

        assert!(result.is_err());
    }
}

#[cfg(test)]
mod load_spec_tests {
    use super::*;

    #[test]
    fn test_load_spec_reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("buildspec.yml");
        fs::write(&path, "tests:\n  - cargo test\n").unwrap();

        let spec = load_spec(&path).unwrap();

        assert_eq!(spec.tests, vec!["cargo test"]);
    }

    #[test]
    fn test_load_spec_missing_file_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does-not-exist.yml");

        let result = load_spec(&path);

        assert!(result.is_err());
    }

    #[test]
    fn test_load_spec_malformed_file_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("buildspec.yml");
        fs::write(&path, "tests: [unclosed\n").unwrap();

        let result = load_spec(&path);

        assert!(result.is_err());
    }
}
