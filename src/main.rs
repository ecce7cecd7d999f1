use anyhow::Result;
use figdroid::cli;

fn main() -> Result<()> {
    cli::run()
}
