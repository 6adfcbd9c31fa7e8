//! # Pull Request Review Module / Pull Request 评审模块
//!
//! This module renders the Markdown review body from the command results and
//! submits it to the GitHub API as an approve-or-request-changes review on
//! the originating pull request. Whether a pull request exists at all is
//! resolved once, up front, from the build environment variables.
//!
//! 此模块根据命令结果渲染 Markdown 评审正文，并将其作为
//! 批准或请求更改的评审提交到 GitHub API 上对应的 Pull Request。
//! 是否存在 Pull Request 会预先从构建环境变量中一次性解析。

use anyhow::{Context, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::env;

use crate::core::models::{CommandResult, CommandStatus};
use crate::t;

/// Environment variable carrying the source repository URL.
/// 携带源仓库 URL 的环境变量。
pub const SOURCE_REPO_URL_VAR: &str = "CODEBUILD_SOURCE_REPO_URL";
/// Environment variable carrying the resolved source commit SHA.
/// 携带已解析源提交 SHA 的环境变量。
pub const SOURCE_COMMIT_VAR: &str = "CODEBUILD_RESOLVED_SOURCE_VERSION";
/// Environment variable carrying the webhook pull request number.
/// 携带 webhook Pull Request 编号的环境变量。
pub const WEBHOOK_PR_VAR: &str = "CODEBUILD_WEBHOOK_PR";
/// Environment variable carrying the GitHub API bearer token.
/// 携带 GitHub API 令牌的环境变量。
pub const API_TOKEN_VAR: &str = "GITHUB_API_TOKEN";
/// Optional override for the GitHub API base URL (GitHub Enterprise).
/// GitHub API 基础 URL 的可选覆盖（GitHub Enterprise）。
pub const API_URL_VAR: &str = "GITHUB_API_URL";

const DEFAULT_API_URL: &str = "https://api.github.com";

/// The review action submitted alongside the report body.
/// 随报告正文一起提交的评审动作。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewEvent {
    /// Every command passed.
    /// 所有命令都通过了。
    Approve,
    /// At least one command failed.
    /// 至少一个命令失败了。
    RequestChanges,
}

impl ReviewEvent {
    /// The event string the GitHub reviews API expects.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            ReviewEvent::Approve => "APPROVE",
            ReviewEvent::RequestChanges => "REQUEST_CHANGES",
        }
    }
}

/// A fully composed review: the Markdown body and the action to take.
/// 一个完整组合的评审：Markdown 正文和要执行的动作。
#[derive(Debug, Clone)]
pub struct Review {
    pub body: String,
    pub event: ReviewEvent,
}

/// Renders the review from the ordered command results. The rendering is
/// deterministic: identical results produce a byte-identical body.
///
/// For a passed command a check-mark line with the literal command is
/// emitted; for a failed command a cross line followed by a fenced block
/// with the full captured output. The per-command lines are wrapped in a
/// collapsible details section under an overall pass/fail lead sentence.
///
/// 根据有序的命令结果渲染评审。渲染是确定性的：
/// 相同的结果会产生字节级一致的正文。
///
/// 对于通过的命令，输出一行带有字面命令的对勾标记；
/// 对于失败的命令，输出一行叉号标记，后跟包含完整捕获输出的围栏代码块。
/// 每个命令的行被包裹在整体通过/失败引导句下的可折叠详情区域中。
pub fn compose_review(results: &[CommandResult]) -> Review {
    let mut tests_info_body = String::new();
    let mut has_failed = false;

    for result in results {
        match result.status {
            CommandStatus::Passed => {
                tests_info_body.push_str(&format!(":white_check_mark: `{}`\n", result.command));
            }
            CommandStatus::Failed => {
                has_failed = true;
                tests_info_body.push_str(&format!(
                    ":x: `{}`\n```{}```\n<br>",
                    result.command, result.output
                ));
            }
        }
    }

    let lead = if has_failed {
        "Whoopsie. Looks like there are some issues with this PR. :space_invader:"
    } else {
        "This PR is good to go ! :tada:"
    };

    let body = format!(
        "{lead}\n\n<details><summary><strong>Tests</strong></summary><p>\n\n{tests_info_body}\n</p></details>"
    );

    let event = if has_failed {
        ReviewEvent::RequestChanges
    } else {
        ReviewEvent::Approve
    };

    Review { body, event }
}

/// The pull request coordinates of the current run.
/// 当前运行的 Pull Request 坐标。
#[derive(Debug, Clone)]
pub struct PullRequestContext {
    /// The `owner/repo` slug derived from the source repository URL.
    /// 从源仓库 URL 派生的 `owner/repo` 标识。
    pub repo: String,
    /// The commit SHA the review is attached to.
    /// 评审所附加的提交 SHA。
    pub commit: String,
    /// The pull request number.
    /// Pull Request 编号。
    pub number: u64,
    /// The API token. An unset variable falls back to the empty string and
    /// the request is still attempted; the hosting API rejects it itself.
    /// API 令牌。未设置的变量会回退为空字符串，请求仍会被尝试；
    /// 由托管 API 自行拒绝。
    pub token: String,
}

/// Whether this run belongs to a pull request. Resolved once at the top of
/// the reporting step instead of scattering presence checks.
///
/// 本次运行是否属于某个 Pull Request。
/// 在报告步骤开始时一次性解析，而不是分散的存在性检查。
#[derive(Debug, Clone)]
pub enum RunContext {
    /// Not associated with any pull request; no review is posted.
    /// 不与任何 Pull Request 关联；不发布评审。
    Standalone,
    /// Triggered by a pull request webhook.
    /// 由 Pull Request webhook 触发。
    PullRequest(PullRequestContext),
}

impl RunContext {
    /// Resolves the run context from the build environment variables.
    /// 从构建环境变量解析运行上下文。
    pub fn from_env() -> Result<Self> {
        Self::resolve(
            env::var(SOURCE_REPO_URL_VAR).ok(),
            env::var(SOURCE_COMMIT_VAR).ok(),
            env::var(WEBHOOK_PR_VAR).ok(),
            env::var(API_TOKEN_VAR).unwrap_or_default(),
        )
    }

    /// Resolves the run context from its raw parts. A missing or zero pull
    /// request number means a standalone run; a present one requires the
    /// repository URL and the commit SHA to be usable.
    ///
    /// 从原始部分解析运行上下文。Pull Request 编号缺失或为零表示独立运行；
    /// 编号存在时则要求仓库 URL 和提交 SHA 可用。
    pub fn resolve(
        repo_url: Option<String>,
        commit: Option<String>,
        pr_number: Option<String>,
        token: String,
    ) -> Result<Self> {
        let number: u64 = match pr_number {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid pull request number: {raw}"))?,
            _ => 0,
        };

        if number == 0 {
            return Ok(RunContext::Standalone);
        }

        let repo_url =
            repo_url.with_context(|| format!("{SOURCE_REPO_URL_VAR} is not set"))?;
        let repo = parse_repo_slug(&repo_url)?;
        let commit = commit.with_context(|| format!("{SOURCE_COMMIT_VAR} is not set"))?;

        Ok(RunContext::PullRequest(PullRequestContext {
            repo,
            commit,
            number,
            token,
        }))
    }
}

/// Derives the `owner/repo` slug from a repository URL: the last two path
/// segments after stripping a trailing `.git` suffix.
///
/// 从仓库 URL 派生 `owner/repo` 标识：去掉尾部 `.git` 后缀后的
/// 最后两个路径段。
pub fn parse_repo_slug(url: &str) -> Result<String> {
    let trimmed = url.trim_end_matches(".git");
    let mut segments = trimmed.rsplit('/');
    let repo = segments.next().filter(|s| !s.is_empty());
    let owner = segments.next().filter(|s| !s.is_empty());

    match (owner, repo) {
        (Some(owner), Some(repo)) => Ok(format!("{owner}/{repo}")),
        _ => anyhow::bail!("Cannot derive owner/repo from repository URL: {url}"),
    }
}

/// Title subset of the pull request payload returned by the GitHub API.
/// GitHub API 返回的 Pull Request 负载中的标题子集。
#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub title: String,
}

#[derive(Debug, Serialize)]
struct ReviewRequest<'a> {
    commit_id: &'a str,
    body: &'a str,
    event: &'a str,
}

/// A thin client for the GitHub REST API, covering only the two calls this
/// tool makes: fetching a pull request and creating a review on it.
///
/// GitHub REST API 的轻量客户端，仅覆盖本工具发出的两个调用：
/// 获取 Pull Request 和在其上创建评审。
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl GithubClient {
    /// Creates a client against the default API endpoint, honoring the
    /// `GITHUB_API_URL` override when set.
    pub fn new(token: &str) -> Self {
        let base_url = env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::with_base_url(base_url, token)
    }

    /// Creates a client against an explicit API base URL.
    pub fn with_base_url(base_url: impl Into<String>, token: &str) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            http: reqwest::Client::new(),
            base_url,
            token: token.to_string(),
        }
    }

    fn create_request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .header("Accept", "application/vnd.github+json")
            .header("Authorization", format!("token {}", self.token))
            .header(
                "User-Agent",
                concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
            )
    }

    /// Fetches a pull request.
    /// 获取一个 Pull Request。
    pub async fn get_pull(&self, repo: &str, number: u64) -> Result<PullRequest> {
        let response = self
            .create_request(Method::GET, &format!("/repos/{repo}/pulls/{number}"))
            .send()
            .await
            .with_context(|| format!("Failed to fetch pull request #{number} of {repo}"))?;

        let pull = response
            .error_for_status()
            .with_context(|| format!("GitHub rejected the pull request lookup for {repo}"))?
            .json::<PullRequest>()
            .await
            .context("Failed to deserialize the pull request payload")?;

        Ok(pull)
    }

    /// Submits a review on a pull request, attached to a specific commit.
    /// 在 Pull Request 上提交一个评审，附加到特定的提交。
    pub async fn create_review(
        &self,
        repo: &str,
        number: u64,
        commit: &str,
        review: &Review,
    ) -> Result<()> {
        let payload = ReviewRequest {
            commit_id: commit,
            body: &review.body,
            event: review.event.as_api_str(),
        };

        let response = self
            .create_request(Method::POST, &format!("/repos/{repo}/pulls/{number}/reviews"))
            .json(&payload)
            .send()
            .await
            .with_context(|| format!("Failed to submit the review for {repo}#{number}"))?;

        response
            .error_for_status()
            .with_context(|| format!("GitHub rejected the review for {repo}#{number}"))?;

        Ok(())
    }
}

/// Resolves the pull request, logs what is about to happen and submits the
/// review against the run's commit.
///
/// 解析 Pull Request，记录即将发生的操作，并针对本次运行的提交提交评审。
pub async fn publish_review(ctx: &PullRequestContext, review: &Review) -> Result<()> {
    let client = GithubClient::new(&ctx.token);

    let pull = client.get_pull(&ctx.repo, ctx.number).await?;

    println!(
        "{}",
        t!(
            "creating_review",
            title = pull.title,
            commit = ctx.commit,
            failed = (review.event == ReviewEvent::RequestChanges).to_string()
        )
    );

    client
        .create_review(&ctx.repo, ctx.number, &ctx.commit, review)
        .await
}
