use dialoguer::theme::ColorfulTheme;

use crate::{config::Config, currency::FormatOptions, ledger::Ledger};

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub ledger: Ledger,
    pub theme: ColorfulTheme,
    pub config: Config,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn format_options(&self) -> FormatOptions {
        self.config.format_options()
    }

    pub fn status(&self) -> String {
        format!(
            "ShellContext {{ running: {}, last_command: {:?}, owner: {:?} }}",
            self.running,
            self.last_command,
            self.ledger.owner_name()
        )
    }
}
