use anyhow::Result;
use clap::Parser;
use tui_snake::app::App;

#[derive(Parser)]
#[command(name = "tui_snake")]
#[command(version, about = "Classic snake with wrap-around edges, in the terminal")]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();

    let mut app = App::new();
    app.run().await
}
