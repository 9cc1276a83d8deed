use std::time::Duration;

use clap::{Parser, ValueEnum};
use drawbench_engine::device::GpuInit;
use drawbench_engine::logging::LoggingConfig;
use drawbench_engine::paint::Rgb;
use drawbench_engine::render::DrawMode;
use drawbench_engine::timing::MAX_DRAW_COUNT;
use drawbench_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

use crate::app::BenchConfig;

#[derive(Debug, Parser)]
#[command(
    name = "drawbench",
    version,
    about = "Measures the per-frame cost of issuing many draw calls, direct vs. indirect"
)]
pub struct Cli {
    /// Draw calls issued per frame.
    #[arg(
        long,
        short = 'n',
        default_value_t = 1000,
        value_parser = clap::value_parser!(u32).range(0..=MAX_DRAW_COUNT as i64)
    )]
    pub draw_count: u32,

    /// Issue draws with draw_indirect instead of inline arguments.
    #[arg(long)]
    pub indirect: bool,

    /// Top gradient stop (#rrggbb).
    #[arg(long, default_value = "#ff8800")]
    pub top: Rgb,

    /// Bottom gradient stop (#rrggbb).
    #[arg(long, default_value = "#0044ff")]
    pub bottom: Rgb,

    /// Length of a reporting window in milliseconds.
    #[arg(
        long,
        default_value_t = 1000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub report_interval_ms: u64,

    /// Surface present mode.
    #[arg(long, value_enum, default_value_t = PresentModeArg::AutoNoVsync)]
    pub present_mode: PresentModeArg,

    /// Window size as WIDTHxHEIGHT in logical pixels.
    #[arg(long, default_value = "1280x720", value_parser = parse_size)]
    pub size: (f64, f64),

    /// Log filter (env_logger syntax); falls back to RUST_LOG.
    #[arg(long, env = "DRAWBENCH_LOG")]
    pub log: Option<String>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum PresentModeArg {
    Fifo,
    Mailbox,
    Immediate,
    AutoVsync,
    AutoNoVsync,
}

impl From<PresentModeArg> for wgpu::PresentMode {
    fn from(mode: PresentModeArg) -> Self {
        match mode {
            PresentModeArg::Fifo => wgpu::PresentMode::Fifo,
            PresentModeArg::Mailbox => wgpu::PresentMode::Mailbox,
            PresentModeArg::Immediate => wgpu::PresentMode::Immediate,
            PresentModeArg::AutoVsync => wgpu::PresentMode::AutoVsync,
            PresentModeArg::AutoNoVsync => wgpu::PresentMode::AutoNoVsync,
        }
    }
}

fn parse_size(s: &str) -> Result<(f64, f64), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
    let dim = |v: &str| match v.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 1.0 => Ok(n),
        _ => Err(format!("invalid dimension {v:?} in {s:?}")),
    };
    Ok((dim(w)?, dim(h)?))
}

impl Cli {
    pub fn bench_config(&self) -> BenchConfig {
        BenchConfig {
            draw_count: self.draw_count,
            mode: if self.indirect {
                DrawMode::Indirect
            } else {
                DrawMode::Direct
            },
            top: self.top,
            bottom: self.bottom,
            report_period: Duration::from_millis(self.report_interval_ms),
        }
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: "drawbench".to_string(),
            initial_size: LogicalSize::new(self.size.0, self.size.1),
        }
    }

    pub fn gpu_init(&self) -> GpuInit {
        GpuInit::default().with_present_mode(self.present_mode.into())
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            env_filter: self.log.clone(),
            ..LoggingConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("drawbench").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]).unwrap();
        let config = cli.bench_config();

        assert_eq!(config.draw_count, 1000);
        assert_eq!(config.mode, DrawMode::Direct);
        assert_eq!(config.report_period, Duration::from_secs(1));
        assert_eq!(cli.gpu_init().present_mode, wgpu::PresentMode::AutoNoVsync);
        assert_eq!(cli.size, (1280.0, 720.0));
    }

    #[test]
    fn explicit_options() {
        let cli = parse(&[
            "-n",
            "5000",
            "--indirect",
            "--top",
            "#ff0000",
            "--bottom",
            "00ff00",
            "--report-interval-ms",
            "250",
            "--present-mode",
            "immediate",
            "--size",
            "640x480",
        ])
        .unwrap();
        let config = cli.bench_config();

        assert_eq!(config.draw_count, 5000);
        assert_eq!(config.mode, DrawMode::Indirect);
        assert_eq!(config.top, Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(config.bottom, Rgb::new(0.0, 1.0, 0.0));
        assert_eq!(config.report_period, Duration::from_millis(250));
        assert_eq!(cli.gpu_init().present_mode, wgpu::PresentMode::Immediate);
        assert_eq!(cli.runtime_config().initial_size, LogicalSize::new(640.0, 480.0));
    }

    #[test]
    fn draw_count_range_is_enforced() {
        assert!(parse(&["--draw-count", "1000000"]).is_ok());
        assert!(parse(&["--draw-count", "1000001"]).is_err());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse(&["--top", "red"]).is_err());
        assert!(parse(&["--report-interval-ms", "0"]).is_err());
        assert!(parse(&["--size", "640"]).is_err());
        assert!(parse(&["--size", "0x480"]).is_err());
    }
}
