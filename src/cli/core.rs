//! Core CLI loop, dispatch, and shell context helpers.

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;

use crate::{config::Config, ledger::Ledger};

pub use crate::errors::{CliError, CommandError};

use super::commands;
use super::io as cli_io;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};
pub use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

impl ShellContext {
    pub fn new(mode: CliMode, config: Config) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let ledger = match &config.default_owner {
            Some(owner) => Ledger::with_owner(owner.clone()),
            None => Ledger::new(),
        };

        ShellContext {
            mode,
            registry,
            ledger,
            theme: ColorfulTheme::default(),
            config,
            last_command: None,
            running: true,
        }
    }

    pub(crate) fn can_prompt(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.resolve(name)
    }

    /// Name and description of every registered command.
    pub(crate) fn command_catalog(&self) -> Vec<(&'static str, &'static str)> {
        self.registry
            .list()
            .into_iter()
            .map(|entry| (entry.name, entry.description))
            .collect()
    }

    /// Asks for the owner's name unless one is configured, then greets them.
    pub(crate) fn welcome(&mut self) -> CommandResult {
        if self.can_prompt() && self.ledger.owner_name().is_empty() {
            let name = cli_io::prompt_text(
                &self.theme,
                "Enter your name to start the Budget Tracker",
            )?;
            self.ledger.set_owner_name(name.trim());
        }
        if self.ledger.owner_name().is_empty() && !self.can_prompt() {
            return Ok(());
        }
        cli_io::print_success(format!("Welcome, {}!", self.ledger.owner_name()));
        Ok(())
    }

    pub(crate) fn print_menu(&self) {
        output::section("Personal Budget Tracker");
        cli_io::print_info("Select from one of the following options:");
        for entry in self.registry.menu() {
            cli_io::print_info(format!(
                "{}. {}",
                entry.menu_key.unwrap_or("-"),
                entry.description
            ));
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let handler = self.registry.resolve(command).map(|entry| entry.handler);
        if let Some(handler) = handler {
            tracing::debug!(command, "dispatching command");
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &needle), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(cli_io::confirm_action(&self.theme, "Exit Budget Tracker?", true)?)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                cli_io::print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Io(err) => Err(CliError::Io(err)),
            other => {
                self.print_error(&other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_error(&self, message: &str) {
        cli_io::print_error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }

    /// Amount from the first argument, or prompted for in interactive mode.
    pub(crate) fn amount_arg(&self, args: &[&str], prompt: &str) -> Result<f64, CommandError> {
        match args.first() {
            Some(raw) => parse_amount(raw),
            None if self.can_prompt() => {
                let raw = cli_io::prompt_text(&self.theme, prompt)?;
                parse_amount(&raw)
            }
            None => Err(CommandError::InvalidArguments(format!(
                "{prompt} is required."
            ))),
        }
    }
}

/// Parses a user-entered amount. A leading currency symbol is tolerated.
pub fn parse_amount(input: &str) -> Result<f64, CommandError> {
    let trimmed = input.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let rest = rest.strip_prefix('$').unwrap_or(rest);
    if rest.is_empty() {
        return Err(CommandError::InvalidArguments(
            "Amount cannot be empty.".into(),
        ));
    }
    let digits = format!("{sign}{rest}");
    let value: f64 = digits.parse().map_err(|_| {
        CommandError::InvalidArguments(format!("`{}` is not a valid amount.", input.trim()))
    })?;
    if !value.is_finite() {
        return Err(CommandError::InvalidArguments(format!(
            "`{}` is not a valid amount.",
            input.trim()
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::shell::handle_line;

    #[test]
    fn parses_plain_and_symbol_prefixed_amounts() {
        assert_eq!(parse_amount("12.5").unwrap(), 12.5);
        assert_eq!(parse_amount(" $40 ").unwrap(), 40.0);
        assert_eq!(parse_amount("-$3.25").unwrap(), -3.25);
        assert_eq!(parse_amount("-7").unwrap(), -7.0);
    }

    #[test]
    fn rejects_bad_amounts() {
        assert!(matches!(
            parse_amount(""),
            Err(CommandError::InvalidArguments(_))
        ));
        assert!(parse_amount("$").is_err());
        assert!(parse_amount("ten").is_err());
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("NaN").is_err());
    }

    #[test]
    fn script_context_dispatches_menu_numbers() {
        let mut context = ShellContext::new(CliMode::Script, Config::default());
        assert_eq!(
            handle_line(&mut context, "1 5000").unwrap(),
            LoopControl::Continue
        );
        handle_line(&mut context, "expense 1000").unwrap();
        assert_eq!(context.ledger.total_income(), 5000.0);
        assert_eq!(context.ledger.total_expenses(), 1000.0);
        assert_eq!(handle_line(&mut context, "exit").unwrap(), LoopControl::Exit);
    }

    #[test]
    fn exit_stops_the_loop_and_records_the_line() {
        let mut context = ShellContext::new(CliMode::Script, Config::default());
        handle_line(&mut context, "  deposit 20 ").unwrap();
        assert_eq!(context.last_command.as_deref(), Some("deposit 20"));
        assert!(context.running);

        assert_eq!(handle_line(&mut context, "8").unwrap(), LoopControl::Exit);
        assert!(!context.running);
        assert_eq!(context.last_command.as_deref(), Some("8"));
    }

    #[test]
    fn blank_and_unbalanced_lines_are_skipped() {
        let mut context = ShellContext::new(CliMode::Script, Config::default());
        assert_eq!(handle_line(&mut context, "   ").unwrap(), LoopControl::Continue);
        assert_eq!(
            handle_line(&mut context, "name 'open").unwrap(),
            LoopControl::Continue
        );
        assert_eq!(context.ledger.owner_name(), "");
        assert!(context.last_command.is_none());
    }

    #[test]
    fn missing_amount_in_script_mode_is_an_error() {
        let mut context = ShellContext::new(CliMode::Script, Config::default());
        assert!(matches!(
            handle_line(&mut context, "deposit"),
            Err(CommandError::InvalidArguments(_))
        ));
    }

    #[test]
    fn unknown_commands_continue() {
        let mut context = ShellContext::new(CliMode::Script, Config::default());
        assert_eq!(
            handle_line(&mut context, "deposti 5").unwrap(),
            LoopControl::Continue
        );
        assert!(context.ledger.transaction_log().is_empty());
    }

    #[test]
    fn default_owner_comes_from_config() {
        let config = Config {
            default_owner: Some("Ada".into()),
            ..Config::default()
        };
        let context = ShellContext::new(CliMode::Script, config);
        assert_eq!(context.ledger.owner_name(), "Ada");
        assert_eq!(context.mode, CliMode::Script);
    }
}
