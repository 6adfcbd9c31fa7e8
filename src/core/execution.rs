//! # Command Execution Engine Module / 命令执行引擎模块
//!
//! This module provides the core functionality for executing the buildspec
//! test commands. Commands run strictly sequentially, each one through a
//! shell, with the combined output streamed live to the console while being
//! buffered for the report. There is no fail-fast: every configured command
//! always runs, so every check gets a chance to report.
//!
//! 此模块为执行 buildspec 测试命令提供核心功能。
//! 命令严格按顺序运行，每个命令都通过 shell 执行，
//! 合并后的输出实时流式传输到控制台，同时缓冲以供报告使用。
//! 没有快速失败：每个配置的命令总是会运行，因此每项检查都有机会被报告。

use anyhow::{Context, Result};
use colored::*;
use std::time::Instant;

use crate::{
    core::{
        config::BuildSpec,
        models::{CommandResult, CommandStatus},
    },
    infra::command,
    t,
};

/// Runs every test command of the buildspec in order and collects the
/// results. A prior failure never skips a later command.
///
/// # Arguments
/// * `spec` - The parsed build specification
///
/// # Returns
/// The ordered sequence of command results, one per configured command.
///
/// 按顺序运行 buildspec 中的每个测试命令并收集结果。
/// 先前的失败不会跳过后续命令。
pub async fn run_commands(spec: &BuildSpec) -> Result<Vec<CommandResult>> {
    let mut results = Vec::with_capacity(spec.tests.len());

    for test_command in &spec.tests {
        results.push(run_command(test_command).await?);
    }

    Ok(results)
}

/// Executes a single test command through the platform shell, teeing its
/// combined output to the console while buffering it, and classifies the
/// exit status. A spawn failure (e.g. no shell available) is a fatal error,
/// not a command failure.
///
/// 通过平台 shell 执行单个测试命令，将其合并输出实时打印到控制台的同时
/// 进行缓冲，并对退出状态进行分类。派生失败（例如没有可用的 shell）
/// 属于致命错误，而不是命令失败。
pub async fn run_command(test_command: &str) -> Result<CommandResult> {
    println!("{}", t!("running_command", command = test_command).blue());

    let start_time = Instant::now();
    let cmd = shell_command(test_command);

    let (status_res, output) = command::spawn_and_stream(cmd).await;
    let status = status_res
        .with_context(|| format!("Failed to get process status for `{test_command}`"))?;
    let duration = start_time.elapsed();

    if status.success() {
        println!(
            "{}",
            t!(
                "command_passed",
                command = test_command,
                duration = format!("{:.2}", duration.as_secs_f64())
            )
            .green()
        );
    } else {
        println!(
            "{}",
            t!(
                "command_failed",
                command = test_command,
                duration = format!("{:.2}", duration.as_secs_f64())
            )
            .red()
        );
    }

    Ok(CommandResult {
        command: test_command.to_string(),
        status: CommandStatus::from_success(status.success()),
        output,
    })
}

/// Builds the shell invocation for a command string, matching the
/// `shell=True` semantics the buildspec format expects (`&&`, pipes and
/// redirections are interpreted by the shell, not by this tool).
///
/// 为命令字符串构建 shell 调用，匹配 buildspec 格式所期望的
/// `shell=True` 语义（`&&`、管道和重定向由 shell 解释，而不是由本工具解释）。
fn shell_command(test_command: &str) -> tokio::process::Command {
    #[cfg(windows)]
    let (shell, flag) = ("cmd", "/C");
    #[cfg(not(windows))]
    let (shell, flag) = ("sh", "-c");

    let mut cmd = tokio::process::Command::new(shell);
    cmd.arg(flag).arg(test_command).kill_on_drop(true);
    cmd
}
