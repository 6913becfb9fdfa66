//! CLI definitions and entry point

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;

use crate::adapters::memory::InMemoryInventory;
use crate::config::SourceConfig;
use crate::core::ports::InventorySource as _;
use crate::output::{self, InventoryOutput};
use crate::plugin::ServiceMappingPlugin;

/// svcmap - Ansible dynamic inventory from a service mapping document
#[derive(Parser, Debug)]
#[command(
    name = "svcmap",
    version,
    about = "Builds Ansible inventory groups from a service mapping document",
    long_about = "Reads a service mapping document and emits Ansible dynamic-inventory JSON.\n\n\
                  Each service becomes a {service}_servers group containing its host,\n\
                  with ansible_host set to the service's IPv6 address."
)]
pub struct Cli {
    /// Path to the inventory source file
    #[arg(short, long, default_value = "service_mapping.yml")]
    pub inventory: PathBuf,

    /// Print the full inventory as JSON (the default)
    #[arg(long)]
    pub list: bool,

    /// Print one host's variables as JSON
    #[arg(long, value_name = "HOST", conflicts_with = "list")]
    pub host: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let source_path = fs::canonicalize(&cli.inventory)
        .with_context(|| format!("inventory source not found: {}", cli.inventory.display()))?;

    let base_dir = source_path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
    let plugin = ServiceMappingPlugin::new(base_dir);

    anyhow::ensure!(
        plugin.verify_source(&source_path),
        "not a service_mapping source: {}",
        source_path.display()
    );

    let config = SourceConfig::load(&source_path)?;

    let mut inventory = InMemoryInventory::new();
    let report = plugin.build(&config, &mut inventory)?;

    for warning in &report.warnings {
        log::warn!("{warning}");
    }
    log::debug!("built {} entries, {} skipped", report.entries, report.warnings.len());

    if let Some(host) = &cli.host {
        let vars = output::host_vars(&inventory, host);
        println!("{}", serde_json::to_string_pretty(&vars)?);
    } else {
        // No flag behaves like --list; ansible always passes one of the two
        let document = InventoryOutput::from_inventory(&inventory);
        println!("{}", document.to_json()?);
    }

    Ok(())
}
