use anyhow::Result;
use icon_gen::{Config, Generator};

fn main() -> Result<()> {
    icon_gen::init_logger();

    log::info!("Generating layered app icons...");
    let summary = Generator::new(Config::default()).run()?;

    if summary.resolutions.iter().any(|r| !r.text_drawn) {
        log::info!("Some front layers were rendered without text");
    }

    println!("\n{}", icon_gen::next_steps(&summary));
    Ok(())
}
