//! SkillForge client - Entry Point

use clap::Parser;
use skillforge::model::MemberId;
use skillforge::service::{parse_base_url, HttpRecommendationService};
use skillforge::view::ColorConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// SkillForge - terminal client for training recommendations
#[derive(Parser, Debug)]
#[command(name = "skillforge")]
#[command(version)]
#[command(about = "Look up recommended trainings for a member of the SkillForge service")]
pub struct Args {
    /// Base URL of the recommendation service
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Look this member up on startup (must be positive)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub member: Option<u64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = skillforge::config::load_config_with_precedence(args.config.clone())?;
        let merged = skillforge::config::merge_config(config_file);
        let with_env = skillforge::config::apply_env_overrides(merged);
        skillforge::config::apply_cli_overrides(with_env, args.server.clone())
    };

    skillforge::logging::init(&config.log_file_path)?;

    let base_url = parse_base_url(&config.base_url)?;
    let service = HttpRecommendationService::new(base_url, config.request_timeout)?;
    skillforge::logging::log_session_start(service.base_url(), &config);
    let initial_member = args.member.map(MemberId::new).transpose()?;
    let colors = ColorConfig::from_env_and_args(args.no_color);

    skillforge::view::run_tui(Arc::new(service), &config, colors, initial_member).await?;

    info!("SkillForge client exited");
    Ok(())
}
