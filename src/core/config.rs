//! # Buildspec Configuration Module / Buildspec 配置模块
//!
//! Loading and parsing of the `buildspec.yml` file. Only the `tests` key is
//! recognized; everything else in the document is ignored.
//!
//! 加载和解析 `buildspec.yml` 文件。仅识别 `tests` 键；
//! 文档中的其他内容将被忽略。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::t;

/// The build specification, loaded from a YAML file.
/// Unrecognized keys are ignored; an absent `tests` key yields an empty
/// command list, which triggers the early-exit short circuit in the runner.
///
/// 从 YAML 文件加载的构建规范。
/// 无法识别的键会被忽略；缺少 `tests` 键会产生一个空的命令列表，
/// 从而触发运行器中的提前退出短路。
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BuildSpec {
    /// The ordered sequence of shell command strings to execute.
    /// 要执行的 shell 命令字符串的有序序列。
    pub tests: Vec<String>,
}

/// Reads and parses the buildspec at the given path.
/// Missing or malformed files are fatal setup errors: they propagate to the
/// process boundary and no report is posted.
///
/// 读取并解析给定路径的 buildspec。
/// 文件缺失或格式错误属于致命的设置错误：
/// 它们会传播到进程边界，并且不会发布任何报告。
pub fn load_spec(path: &Path) -> Result<BuildSpec> {
    let content = fs::read_to_string(path)
        .with_context(|| t!("config_read_failed", path = path.display().to_string()))?;

    let spec: BuildSpec = serde_yml::from_str(&content)
        .with_context(|| t!("config_parse_failed", path = path.display().to_string()))?;

    Ok(spec)
}
