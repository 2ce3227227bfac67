use bookboard::cli::Cli;
use bookboard::{Config, run};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    config.validate()?;

    let runtime = build_runtime(config.general.worker_threads)?;
    runtime.block_on(run(cli, config))
}

/// Multi-threaded runtime; `0` keeps tokio's one-worker-per-core default.
fn build_runtime(worker_threads: usize) -> std::io::Result<tokio::runtime::Runtime> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if worker_threads > 0 {
        builder.worker_threads(worker_threads);
    }
    builder.thread_name("bookboard-worker").build()
}
