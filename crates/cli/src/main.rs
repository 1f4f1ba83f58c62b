use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bianyi_code_core::domain::{find_target, targets};
use judge_workflow::{NoticeKind, WorkflowConfig, WorkflowController, WorkflowEvent};

#[derive(Parser)]
#[command(name = "bianyi-code", about = "Submit source code to a judge0 service and print the result")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit a source file and wait for the execution result
    Run {
        /// Path to the source file to execute
        #[arg(long)]
        file: PathBuf,
        /// Execution target id (see `targets`)
        #[arg(long, default_value_t = 63)]
        target: u32,
        /// Optional file whose contents are passed as stdin
        #[arg(long)]
        stdin_file: Option<PathBuf>,
        /// Workflow configuration file
        #[arg(long, default_value = "judge.toml")]
        config: PathBuf,
    },
    /// List the supported execution targets
    Targets,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let cli = Cli::parse();
    match cli.command {
        Command::Targets => {
            list_targets();
            Ok(())
        }
        Command::Run {
            file,
            target,
            stdin_file,
            config,
        } => run(file, target, stdin_file, config).await,
    }
}

fn list_targets() {
    println!("{:<6} {:<32} {}", "id", "name", "editor language");
    for target in targets() {
        println!(
            "{:<6} {:<32} {}",
            target.id, target.name, target.editor_language
        );
    }
}

async fn run(
    file: PathBuf,
    target: u32,
    stdin_file: Option<PathBuf>,
    config: PathBuf,
) -> anyhow::Result<()> {
    let Some(target_info) = find_target(target) else {
        bail!("unsupported execution target id: {target} (see `bianyi-code targets`)");
    };

    let config = WorkflowConfig::from_file(&config)
        .with_context(|| format!("failed to load workflow config from {}", config.display()))?;

    let source_code = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read source file: {}", file.display()))?;
    let stdin = match &stdin_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read stdin file: {}", path.display()))?,
        None => String::new(),
    };

    info!(
        file = %file.display(),
        target_id = target,
        target_name = target_info.name,
        "submitting source file"
    );

    let controller = WorkflowController::with_judge0(&config);
    let mut events = controller.subscribe_events();
    let listener = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                WorkflowEvent::Notice {
                    kind,
                    message,
                    duration_ms: _,
                } => {
                    let label = match kind {
                        NoticeKind::Success => "ok",
                        NoticeKind::Error => "error",
                    };
                    eprintln!("[{label}] {message}");
                }
                WorkflowEvent::StatusPolled {
                    attempt, status, ..
                } => {
                    eprintln!("[poll {attempt}] {status}");
                }
                _ => {}
            }
        }
    });

    let outcome = controller.submit(&source_code, target, &stdin).await;
    drop(controller);
    let _ = listener.await;

    let result = outcome.context("submission workflow failed")?;

    println!("Status: {}", result.status.description());
    let output = result.display_output();
    if !output.is_empty() {
        println!("{output}");
    }
    if let Some(memory_kb) = result.memory_kb {
        println!("Memory: {memory_kb} KB");
    }
    if let Some(time_sec) = result.time_sec {
        println!("Time: {time_sec} s");
    }

    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}
