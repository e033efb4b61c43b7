use anyhow::{anyhow, Result};
use clap::Parser;

use yaml_editor::cli::CliArgs;
use yaml_editor::config::EditorConfig;
use yaml_editor::runtime::App;

fn main() -> Result<()> {
    let startup = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;

    yaml_editor::tracing::init();

    let mut config = EditorConfig::load();
    startup.apply_to(&mut config);
    tracing::info!(mode = ?startup.mode, download_dir = %config.resolved_download_dir().display(), "starting");

    let mut app = App::new(config);
    app.start(&startup.mode);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    app.run(stdin.lock(), &mut stdout)
}
