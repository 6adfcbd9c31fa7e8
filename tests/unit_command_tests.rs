//! # Command Execution Unit Tests / 命令执行单元测试
//!
//! Unit tests for the execution engine and the subprocess tee plumbing:
//! classification of exit codes, stderr merging, sequential no-fail-fast
//! behavior and spawn failures.
//!
//! 执行引擎和子进程 tee 管道的单元测试：
//! 退出码分类、stderr 合并、顺序执行且无快速失败的行为以及派生失败。

#![cfg(not(windows))]

use buildspec_runner::core::config::BuildSpec;
use buildspec_runner::core::execution::{run_command, run_commands};
use buildspec_runner::core::models::CommandStatus;
use buildspec_runner::infra::command::spawn_and_stream;

#[tokio::test]
async fn test_zero_exit_code_is_passed() {
    let result = run_command("echo hi").await.unwrap();

    assert_eq!(result.status, CommandStatus::Passed);
    assert_eq!(result.command, "echo hi");
    assert!(result.output.contains("hi\n"));
}

#[tokio::test]
async fn test_non_zero_exit_code_is_failed() {
    let result = run_command("echo hi && exit 1").await.unwrap();

    assert_eq!(result.status, CommandStatus::Failed);
    assert!(result.output.contains("hi\n"));
}

#[tokio::test]
async fn test_stderr_is_captured_alongside_stdout() {
    let result = run_command("echo out && echo err 1>&2").await.unwrap();

    assert!(result.output.contains("out"));
    assert!(result.output.contains("err"));
}

#[tokio::test]
async fn test_shell_interprets_operators() {
    // `&&` and `exit` only work when the command goes through a shell.
    let result = run_command("true && exit 3").await.unwrap();

    assert_eq!(result.status, CommandStatus::Failed);
}

#[tokio::test]
async fn test_run_commands_is_sequential_without_fail_fast() {
    let spec = BuildSpec {
        tests: vec![
            "echo first".to_string(),
            "false".to_string(),
            "echo third".to_string(),
        ],
    };

    let results = run_commands(&spec).await.unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].command, "echo first");
    assert_eq!(results[0].status, CommandStatus::Passed);
    assert_eq!(results[1].command, "false");
    assert_eq!(results[1].status, CommandStatus::Failed);
    assert_eq!(results[2].command, "echo third");
    assert_eq!(results[2].status, CommandStatus::Passed);
}

#[tokio::test]
async fn test_run_commands_empty_spec_yields_no_results() {
    let spec = BuildSpec { tests: vec![] };

    let results = run_commands(&spec).await.unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_spawn_failure_is_reported() {
    let cmd = tokio::process::Command::new("definitely-missing-binary-12345");

    let (status, output) = spawn_and_stream(cmd).await;

    assert!(status.is_err());
    assert!(output.is_empty());
}
