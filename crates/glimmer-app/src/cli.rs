use clap::Parser;
use std::path::PathBuf;

/// Glimmer — a glow post-processing pipeline for retro pixel-art displays.
#[derive(Parser, Debug)]
#[command(name = "glimmer", version, about)]
pub struct Args {
    /// Input screen frame (PNG) to process.
    pub input: PathBuf,

    /// Output path for the processed frame.
    #[arg(short = 'o', long, default_value = "glow.png")]
    pub output: PathBuf,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Upscale factor override.
    #[arg(long)]
    pub scale: Option<f32>,

    /// Rendering backend.
    #[arg(long, value_enum, default_value_t = Backend::Cpu)]
    pub backend: Backend,

    /// Log level override (e.g. "glimmer=debug").
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    /// Software filter, parallelized across rows.
    Cpu,
    /// Offscreen wgpu pass with readback.
    Gpu,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_to_cpu_backend() {
        let args = Args::parse_from(["glimmer", "frame.png"]);
        assert_eq!(args.backend, Backend::Cpu);
        assert_eq!(args.output, PathBuf::from("glow.png"));
        assert!(args.scale.is_none());
    }

    #[test]
    fn parses_overrides() {
        let args = Args::parse_from([
            "glimmer",
            "frame.png",
            "-o",
            "out.png",
            "--scale",
            "3.5",
            "--backend",
            "gpu",
        ]);
        assert_eq!(args.output, PathBuf::from("out.png"));
        assert_eq!(args.backend, Backend::Gpu);
        assert!((args.scale.unwrap() - 3.5).abs() < f32::EPSILON);
    }
}
