//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the post-run summary of command results to the console,
//! using color coding to highlight pass/fail status.
//!
//! 此模块在控制台打印运行后的命令结果摘要，
//! 使用颜色编码突出显示通过/失败状态。

use colored::*;

use crate::core::models::{CommandResult, CommandStatus};
use crate::t;

/// Prints a formatted summary of command results to the console.
/// Results appear in execution order, one line per command.
///
/// 在控制台打印格式化的命令结果摘要。
/// 结果按执行顺序显示，每个命令一行。
///
/// # Output Format / 输出格式
/// ```text
/// --- Test Summary ---
///   - Passed | cargo fmt --check
///   - Failed | cargo test
/// ```
pub fn print_summary(results: &[CommandResult]) {
    println!("\n{}", t!("test_summary_banner").bold());

    for result in results {
        let status_colored = match result.status {
            CommandStatus::Passed => t!("status_passed").green(),
            CommandStatus::Failed => t!("status_failed").red(),
        };

        println!("  - {:<6} | {}", status_colored, result.command);
    }
}
