use clap::Parser;

use folio::catalog;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Personal portfolio, rendered as a desktop app")]
struct Cli {
    /// Print the project catalog as JSON and exit
    #[arg(long)]
    catalog: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if args.catalog {
        println!("{}", serde_json::to_string_pretty(catalog::projects())?);
        return Ok(());
    }

    if args.verbose {
        println!("Loaded {} projects", catalog::projects().len());
        println!("Keyboard navigation:");
        println!("  Arrow Up/Down or PageUp/PageDown: move between sections");
        println!("  Home: go to top");
        println!("  End: go to bottom");
    }

    #[cfg(feature = "gui")]
    {
        folio::gui::run()?;
        Ok(())
    }

    #[cfg(not(feature = "gui"))]
    anyhow::bail!("folio was built without the `gui` feature")
}
