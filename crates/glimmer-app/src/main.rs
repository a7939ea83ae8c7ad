mod cli;

use glimmer_common::{Color, GlimmerError, Rgba};
use glimmer_config::GlimmerConfig;
use glimmer_render::{GlowFilter, GlowSettings, ImageSource, ScreenGeometry};
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config before logging so the configured level can apply
    let config = load_config(&args);

    // Initialize logging (CLI override wins over the config level)
    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.as_directive().to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "glimmer=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Glimmer v{} starting...", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Config loaded (screen: {}x{}, scale: {})",
        config.display.width,
        config.display.height,
        config.display.scale
    );

    if let Err(e) = run(&args, &config) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn load_config(args: &cli::Args) -> GlimmerConfig {
    match &args.config {
        Some(path) => glimmer_config::load_from_path(path).unwrap_or_else(|e| {
            eprintln!("Config load failed, using defaults: {e}");
            GlimmerConfig::default()
        }),
        None => glimmer_config::load_config().unwrap_or_else(|e| {
            eprintln!("Config load failed, using defaults: {e}");
            GlimmerConfig::default()
        }),
    }
}

fn run(args: &cli::Args, config: &GlimmerConfig) -> glimmer_common::Result<()> {
    let frame = image::open(&args.input)
        .map_err(|e| GlimmerError::Image(format!("{}: {e}", args.input.display())))?
        .to_rgba8();
    let (width, height) = frame.dimensions();
    if (width, height) != (config.display.width, config.display.height) {
        tracing::warn!(
            "input frame is {width}x{height}, configured screen is {}x{}",
            config.display.width,
            config.display.height
        );
    }

    let scale = args.scale.unwrap_or(config.display.scale);
    let geometry = ScreenGeometry::new(width, height, scale);
    let background: Rgba = Color::from_hex(&config.display.background)
        .ok_or_else(|| {
            GlimmerError::Other(format!(
                "invalid background color {:?}",
                config.display.background
            ))
        })?
        .into();
    let settings = GlowSettings::from_config(config);

    let output = match args.backend {
        cli::Backend::Gpu if settings.enabled => {
            tracing::info!("rendering glow on the GPU");
            glimmer_render::headless::render_glow(&frame, &geometry, background, settings)
                .map_err(|e| GlimmerError::Render(e.to_string()))?
        }
        backend => {
            if backend == cli::Backend::Gpu {
                tracing::info!("glow disabled, using software pass-through");
            } else {
                tracing::info!("rendering glow in software");
            }
            let source = ImageSource::new(&frame);
            GlowFilter::new(&source, geometry, background, settings).render()
        }
    };

    output
        .save(&args.output)
        .map_err(|e| GlimmerError::Image(format!("{}: {e}", args.output.display())))?;
    tracing::info!(
        "wrote {} ({}x{})",
        args.output.display(),
        output.width(),
        output.height()
    );
    Ok(())
}
