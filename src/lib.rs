//! # Buildspec Runner Library / Buildspec Runner 库
//!
//! This library provides the core functionality for the Buildspec Runner tool,
//! a configuration-driven CI test runner that executes the test commands from
//! a buildspec and reviews the originating pull request with the results.
//!
//! 此库为 Buildspec Runner 工具提供核心功能，
//! 这是一个配置驱动的 CI 测试运行器，执行 buildspec 中的测试命令
//! 并将结果作为评审提交到对应的 Pull Request。
//!
//! ## Modules / 模块
//!
//! - `core` - Core data models, buildspec parsing and command execution
//! - `infra` - Infrastructure services like subprocess spawning and output capture
//! - `reporting` - Console summaries and pull request review submission
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 核心数据模型、buildspec 解析和命令执行
//! - `infra` - 基础设施服务，如子进程派生和输出捕获
//! - `reporting` - 控制台摘要和 Pull Request 评审提交
//! - `cli` - 命令行接口和命令

pub mod core;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items
pub use core::models;
pub use core::config;
pub use core::execution;

pub use rust_i18n::t;

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
