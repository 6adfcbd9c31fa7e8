//! # Reporting Module / 报告模块
//!
//! This module handles the reporting of test command results: a colored
//! console summary for whoever is watching the run, and a Markdown review
//! submitted to the originating pull request when one exists.
//!
//! 此模块处理测试命令结果的报告：为观察运行的人提供彩色控制台摘要，
//! 并在存在 Pull Request 时向其提交 Markdown 评审。

pub mod console;
pub mod review;

// Re-export common reporting functions
pub use console::print_summary;
pub use review::{compose_review, Review, ReviewEvent, RunContext};
