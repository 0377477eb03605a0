use anyhow::{Context, Result};
use clap::Parser;
use lumen_renderer::{RenderConfig, Renderer};
use std::path::Path;
use std::time::Instant;

mod cli;
mod output;
mod scenes;

use cli::Args;
use scenes::DemoScene;

/// Read a JSON render config; missing fields keep their defaults.
fn load_config(path: &Path) -> Result<RenderConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("Invalid config {}", path.display()))
}

fn parse_config(text: &str) -> Result<RenderConfig> {
    Ok(serde_json::from_str(text)?)
}

/// Config file values first, then command line overrides.
fn resolve_config(args: &Args) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => RenderConfig::default(),
    };

    if let Some(lighting) = args.lighting {
        config.lighting_mode = lighting.into();
    }
    if args.no_shadows {
        config.shadows_enabled = false;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    log::info!("Starting lumen");

    let config = resolve_config(&args)?;
    log::debug!("Render config: {:?}", config);

    let mut demo = DemoScene::build(args.scene, args.obj.as_deref())?;
    let mut renderer = Renderer::new(args.width, args.height, config);

    let start = Instant::now();
    for frame in 0..args.frames {
        demo.animate(frame as f32 * args.frame_step);

        let image = renderer.render(&mut demo.scene);
        output::save_png(image, &output::frame_path(&args.output, frame, args.frames))?;
    }

    log::info!("Rendered {} frame(s) in {:.2?}", args.frames, start.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_renderer::LightingMode;

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config(r#"{ "shadows_enabled": false }"#).unwrap();

        assert!(!config.shadows_enabled);
        assert_eq!(config.lighting_mode, LightingMode::Combined);
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        assert!(parse_config(r#"{ "lighting_mode": "ambient" }"#).is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from(["lumen", "--lighting", "brdf", "--no-shadows"]).unwrap();
        let config = resolve_config(&args).unwrap();

        assert_eq!(config.lighting_mode, LightingMode::Brdf);
        assert!(!config.shadows_enabled);
    }
}
