use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use credfolio::app;

/// Credfolio - credential showcase
#[derive(Parser, Debug)]
#[command(name = "credfolio-desktop")]
#[command(about = "Expandable credential card gallery")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 700.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    tracing::info!(width = args.width, height = args.height, "starting credfolio");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Credfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
