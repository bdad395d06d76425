use anyhow::Result;
use git_pick::config::Config;
use git_pick::vcs::{GitCli, VcsBackend};
use git_pick::{logger, ui};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init(&config.logging)?;

    let backend = GitCli::with_program(config.vcs.git_program.clone());
    if let Err(e) = backend.repository_root().await {
        eprintln!("❌ Error: {}", e);
        eprintln!("\n💡 Run git-pick from inside a git working tree.");
        std::process::exit(1);
    }

    let outcome = ui::run_app(&config, Arc::new(backend)).await?;
    if let Some(branch) = &outcome.switched_to {
        println!("Switched to branch '{}'", branch.short_name);
    }

    std::process::exit(outcome.exit_code);
}
