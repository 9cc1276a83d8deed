use clap::Parser;
use drawbench_engine::logging::init_logging;
use drawbench_engine::window::Runtime;

mod app;
mod cli;
mod controls;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_logging(cli.logging_config());

    let config = cli.bench_config();
    log::info!(
        "drawbench: {} draw calls/frame, {} mode, gradient {} -> {}, report every {:?}",
        config.draw_count,
        config.mode,
        config.top,
        config.bottom,
        config.report_period
    );
    log::info!("keys: up/down x10 /10, right/left +/-100, 0 zero, I mode, T/B colors, Esc quit");

    Runtime::run(cli.runtime_config(), cli.gpu_init(), app::DrawBench::new(config))
}
