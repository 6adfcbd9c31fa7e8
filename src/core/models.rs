//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the runner:
//! the outcome of a single executed test command and its pass/fail status.
//!
//! 此模块定义了整个运行器中使用的核心数据结构：
//! 单个已执行测试命令的结果及其通过/失败状态。

use serde::{Deserialize, Serialize};

/// The pass/fail classification of one executed command.
/// A zero exit code maps to `Passed`, any non-zero exit code to `Failed`.
///
/// 单个已执行命令的通过/失败分类。
/// 退出码为零映射为 `Passed`，任何非零退出码映射为 `Failed`。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandStatus {
    /// The command exited with code zero.
    /// 命令以退出码零结束。
    Passed,
    /// The command exited with a non-zero code.
    /// 命令以非零退出码结束。
    Failed,
}

impl CommandStatus {
    /// Classifies a process outcome: `true` (success) maps to `Passed`.
    pub fn from_success(success: bool) -> Self {
        if success {
            CommandStatus::Passed
        } else {
            CommandStatus::Failed
        }
    }
}

/// The outcome record for one executed test command.
/// Results are created in buildspec order and are immutable once created;
/// the reporter renders them in exactly that order.
///
/// 单个已执行测试命令的结果记录。
/// 结果按 buildspec 顺序创建，创建后不可变；
/// 报告器严格按该顺序渲染它们。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResult {
    /// The literal shell command string that was executed.
    /// 被执行的字面 shell 命令字符串。
    pub command: String,
    /// Whether the command passed or failed.
    /// 命令是通过还是失败。
    pub status: CommandStatus,
    /// The complete captured combined stdout/stderr text.
    /// 捕获到的完整 stdout/stderr 合并文本。
    pub output: String,
}

impl CommandResult {
    /// Checks if the result is a failure.
    pub fn is_failure(&self) -> bool {
        self.status == CommandStatus::Failed
    }
}
