//! # Version Command
//!
//! Prints the GEL banner and the installed version.

use tracing::debug;

use gel_core::{
    register_command, Arguments, CommandConfig, CommandEntry, CommandOutput, Config, Registry,
};

/// Command id
pub const VERSION_COMMAND: &str = "version";

const BANNER: &str = r"
   ____ _____ _
  / ___| ____| |
 | |  _|  _| | |
 | |_| | |___| |___
  \____|_____|_____|
";

/// Banner followed by the package version
pub fn banner() -> String {
    format!(
        "{}\n  Gabriel's Everything Library v{}",
        BANNER.trim_start_matches('\n').trim_end(),
        env!("CARGO_PKG_VERSION")
    )
}

/// Parser configuration of the `version` command
pub fn version_config() -> Box<dyn Config> {
    Box::new(CommandConfig::new(VERSION_COMMAND, "Display version information."))
}

/// Main process of the `version` command
pub fn version_entry_point(_arguments: &Arguments) -> anyhow::Result<CommandOutput> {
    Ok(CommandOutput::Message(banner()))
}

/// Module load function registering the `version` command
pub fn load(registry: &mut Registry<CommandEntry>) -> anyhow::Result<()> {
    register_command(registry, VERSION_COMMAND, version_config, version_entry_point)?;
    debug!(command = VERSION_COMMAND, "Command registered");
    Ok(())
}
