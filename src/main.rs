use clap::Parser;

use xscriber::backend;
use xscriber::config::{Config, DEFAULT_STROKE_WIDTH};
use xscriber::draw::parse_color_value;

#[derive(Parser, Debug)]
#[command(name = "xscriber")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("XSCRIBER_GIT_HASH"), ")"),
    about = "Screen annotation overlay for X11 displays"
)]
struct Cli {
    /// Side length of each drawn square, in pixels
    #[arg(
        long,
        value_name = "PIXELS",
        default_value_t = DEFAULT_STROKE_WIDTH,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    stroke_width: u16,

    /// Color of drawn squares (0xRRGGBB, #RRGGBB, decimal, or a name such as "red")
    #[arg(
        long,
        value_name = "COLOR",
        default_value = "0xDC143C",
        value_parser = parse_color_value
    )]
    color: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::new(cli.stroke_width, cli.color);

    log::info!("Starting annotation overlay...");
    log::info!("Controls:");
    log::info!("  - Draw: hold the left button and drag");
    log::info!("  - Clear marks: C");
    log::info!("  - Exit: Q");

    backend::run_x11(&config)?;

    log::info!("Annotation overlay closed.");
    Ok(())
}
