use clap::Parser;

use salshomar::app::App;
use salshomar::config::{CliConfig, Settings};
use salshomar::ui::render;
use salshomar::utils::{logger, validation::Validate};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match Settings::load(cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("configuration load failed: {}", e);
            eprintln!("✖ {}", e);
            std::process::exit(2);
        }
    };
    if let Err(e) = settings.validate() {
        tracing::error!("configuration validation failed: {}", e);
        eprintln!("✖ {}", e);
        std::process::exit(2);
    }

    render::init_colors(settings.color);

    let mut app = App::new(settings)?;
    app.run().await?;
    Ok(())
}
