use anyhow::Result;

fn main() -> Result<()> {
    eclipsed_sun::cli::run_cli()
}
