use anyhow::Result;

fn main() -> Result<()> {
    let cli = nosync::cli::parse();
    nosync::app::run(cli)
}
