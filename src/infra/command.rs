use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::t;

/// Spawns a command and tees its output: every line read from stdout or
/// stderr is written to the controlling process's stdout immediately (so a
/// human watching the run sees live output) and appended to an in-memory
/// buffer in the same step, preserving arrival order within each stream.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
///
/// # Returns
/// A tuple containing:
/// - The `ExitStatus` of the process wrapped in an `io::Result`.
/// - The combined stdout and stderr as a `String`.
///
/// 派生一个命令并对其输出进行 tee 处理：从 stdout 或 stderr 读取的每一行
/// 都会立即写入控制进程的 stdout（使观察运行的人能看到实时输出），
/// 并在同一步骤中追加到内存缓冲区，保留每个流内的到达顺序。
///
/// # Arguments
/// * `cmd` - 要执行的 `tokio::process::Command`。
///
/// # Returns
/// 一个元组，包含：
/// - 进程的 `ExitStatus`（包装在 `io::Result` 中）。
/// - 合并的 stdout 和 stderr，为一个 `String`。
pub async fn spawn_and_stream(
    mut cmd: tokio::process::Command,
) -> (std::io::Result<std::process::ExitStatus>, String) {
    // Configure the command to capture stdout and stderr.
    // 配置命令以捕获 stdout 和 stderr。
    let mut child = match cmd
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            // If spawning fails, we return the error and an empty string for the output.
            // 如果派生失败，我们返回错误和空字符串作为输出。
            return (Err(e), String::new());
        }
    };

    let stdout = match child.stdout.take() {
        Some(stdout) => stdout,
        None => {
            return (
                Err(std::io::Error::other(
                    t!("capture_stdout_failed").to_string(),
                )),
                String::new(),
            );
        }
    };
    let stderr = match child.stderr.take() {
        Some(stderr) => stderr,
        None => {
            return (
                Err(std::io::Error::other(
                    t!("capture_stderr_failed").to_string(),
                )),
                String::new(),
            );
        }
    };

    // Use an Arc<Mutex<String>> to allow concurrent writes from stdout and stderr tasks.
    // 使用 Arc<Mutex<String>> 来允许多个任务（stdout 和 stderr）并发写入。
    let output = Arc::new(tokio::sync::Mutex::new(String::new()));

    // Spawn a task that tees stdout line by line.
    // 派生一个任务来逐行 tee 处理 stdout。
    let stdout_output = Arc::clone(&output);
    let stdout_handle = tokio::spawn(async move {
        let reader = BufReader::new(stdout);
        let mut lines = reader.lines();
        while let Ok(Some(line)) = lines.next_line().await {
            println!("{}", line);
            let mut output = stdout_output.lock().await;
            output.push_str(&line);
            output.push('\n');
        }
    });

    // Spawn a task that tees stderr line by line into the same buffer,
    // merging it with stdout as the buildspec contract requires.
    // 派生一个任务来逐行 tee 处理 stderr，将其与 stdout 合并到同一个缓冲区，
    // 正如 buildspec 契约所要求的那样。
    let stderr_output = Arc::clone(&output);
    let stderr_handle = tokio::spawn(async move {
        let reader = BufReader::new(stderr);
        let mut lines = reader.lines();
        while let Ok(Some(line)) = lines.next_line().await {
            println!("{}", line);
            let mut output = stderr_output.lock().await;
            output.push_str(&line);
            output.push('\n');
        }
    });

    // Wait for the process to exit.
    // 等待进程退出。
    let status = child.wait().await;

    // Wait for the reading tasks to complete to ensure all output is captured.
    // 等待读取任务完成，以确保所有输出都被捕获。
    if let Err(e) = stdout_handle.await {
        eprintln!("Failed to join stdout task: {}", e);
    }
    if let Err(e) = stderr_handle.await {
        eprintln!("Failed to join stderr task: {}", e);
    }

    (status, output.lock().await.clone())
}
