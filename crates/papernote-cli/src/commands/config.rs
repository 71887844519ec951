//! Module for reading and changing the persisted [`Settings`].

use super::*;

/// The set of settings operations.
#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
  /// Print every setting, with the API key masked
  Show,

  /// Change one setting and save it immediately
  Set {
    /// Setting name, e.g. `download_path` or `target_language`
    key:   String,
    /// New value
    value: String,
  },

  /// Print where the settings file lives
  Path,
}

/// Function for the [`Commands::Config`] in the CLI.
pub fn config<I: UserInteraction>(
  interaction: &I,
  settings_path: &Path,
  cmd: ConfigCommands,
) -> Result<()> {
  match cmd {
    ConfigCommands::Show => {
      let settings = Settings::load(settings_path)?;
      interaction.reply(ResponseContent::Settings(&settings.entries()))
    },
    ConfigCommands::Set { key, value } => {
      let mut settings = Settings::load(settings_path)?;
      settings.set(&key, &value)?;
      settings.save(settings_path)?;
      interaction.reply(ResponseContent::Success(&format!("Saved {key}")))
    },
    ConfigCommands::Path => {
      println!("{}", settings_path.display());
      Ok(())
    },
  }
}
