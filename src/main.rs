use anyhow::Result;

fn main() -> Result<()> {
    kindle_clippings::cli::commands::run()
}
