// src/cli/commands/run.rs

use anyhow::Result;
use colored::*;
use std::{path::PathBuf, time::Instant};

use crate::{
    core::{config, execution},
    reporting::{
        console,
        review::{self, RunContext},
    },
    t,
};

/// Runs the whole pipeline: parse the buildspec, execute every test command
/// in order, print a summary and submit the review when the run belongs to a
/// pull request. Terminates with an error (exit code 1) if any command failed.
///
/// 运行整个流水线：解析 buildspec，按顺序执行每个测试命令，
/// 打印摘要，并在本次运行属于 Pull Request 时提交评审。
/// 如果任何命令失败，则以错误终止（退出码 1）。
pub async fn execute(config_path: PathBuf) -> Result<()> {
    let start_time = Instant::now();

    let spec = config::load_spec(&config_path)?;

    // An empty command list is a deliberate short-circuit:
    // nothing to validate, nothing to report.
    if spec.tests.is_empty() {
        return Ok(());
    }

    let results = execution::run_commands(&spec).await?;

    console::print_summary(&results);

    let review = review::compose_review(&results);
    let has_failed = results.iter().any(|r| r.is_failure());

    // The submission outcome is kept as a value so the exit decision below
    // always runs, even when the network step fails. A network error must not
    // mask a local test failure that is already known.
    let submission = match RunContext::from_env() {
        Ok(RunContext::Standalone) => {
            println!("{}", t!("standalone_skip").dimmed());
            Ok(())
        }
        Ok(RunContext::PullRequest(ctx)) => review::publish_review(&ctx, &review).await,
        Err(e) => Err(e),
    };

    if has_failed {
        if let Err(e) = &submission {
            eprintln!("{}", t!("review_submit_failed", error = e.to_string()).red());
        }
        println!("{}", t!("tests_failed").red().bold());
        anyhow::bail!("{}", t!("tests_failed_error"));
    }

    submission?;

    println!(
        "{}",
        t!(
            "time_taken",
            seconds = format!("{:.2}", start_time.elapsed().as_secs_f64())
        )
    );

    Ok(())
}
