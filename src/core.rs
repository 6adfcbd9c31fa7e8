//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Buildspec Runner,
//! including data models, buildspec parsing, and command execution logic.
//!
//! 此模块包含 Buildspec Runner 的核心功能，
//! 包括数据模型、buildspec 解析和命令执行逻辑。

pub mod models;
pub mod config;
pub mod execution;

// Re-exports
pub use models::CommandResult;
pub use config::BuildSpec;
pub use execution::run_commands;
