//! cmakegen's main application entry point.
//! Loads the configuration, selects modules and writes their descriptors.

use cmakegen::{
    cli::{get_args, Args},
    config::{find_config_file, Configuration},
    error::{default_error_handler, Error, Result},
    fs::LocalFileSystem,
    modules::{builtin_modules, generate_selected, select_modules},
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the project root and the configuration file
/// 2. Loads the configuration
/// 3. Selects the requested modules
/// 4. Generates each module, stopping at the first failure unless `--keep-going`
fn run(args: Args) -> Result<()> {
    if args.list {
        for module in builtin_modules() {
            println!("{}\t{}", module.name(), module.project_name());
        }
        return Ok(());
    }

    let root = std::fs::canonicalize(&args.root)
        .map_err(|e| Error::Filesystem { path: args.root.clone(), source: e })?;
    let config_path = match args.config {
        Some(path) => path,
        None => find_config_file(&root)?,
    };
    let config = Configuration::load(&config_path)?;
    let modules = select_modules(&args.modules)?;

    let fs = LocalFileSystem::new();
    let renderer = MiniJinjaRenderer::new();

    let written =
        generate_selected(&config, &fs, &renderer, &modules, &root, args.keep_going)?;

    println!(
        "Generation completed successfully in {}: {} descriptors written.",
        root.display(),
        written.len()
    );
    Ok(())
}
