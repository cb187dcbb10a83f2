use std::fs;

use anyhow::{Context, Result, bail};
use prosemd_config::{self as cli, CONFIG_FILE_NAME, INIT_TEMPLATE};

pub(crate) fn handle(args: cli::InitArgs) -> Result<()> {
    if args.print {
        print!("{INIT_TEMPLATE}");
        return Ok(());
    }

    let path = args.dir.join(CONFIG_FILE_NAME);
    if path.exists() && !args.force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    fs::create_dir_all(&args.dir)
        .with_context(|| format!("Failed to create {}", args.dir.display()))?;
    fs::write(&path, INIT_TEMPLATE)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    eprintln!("Created {}", path.display());
    Ok(())
}
