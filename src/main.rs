mod app;
mod cli;
mod taunts;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use cli::Cli;
use std::io;
use taunts::Taunts;
use ui::render::Renderer;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.engine_config()?;
    log::info!("search depth {}", config.max_depth);

    let mut app = App::new(config, Taunts::new(cli.rng()), Renderer::new(!cli.no_color));
    app.run(&mut io::stdin().lock(), &mut io::stdout().lock())
}
