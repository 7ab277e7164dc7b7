use anyhow::Result;

fn main() -> Result<()> {
    lemon_merger::cli::run()
}
