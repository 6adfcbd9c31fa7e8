//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Buildspec Runner,
//! including subprocess spawning with live output streaming.
//!
//! 此模块为 Buildspec Runner 提供基础设施服务，
//! 包括带实时输出流的子进程派生。

pub mod command;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
