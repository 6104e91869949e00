use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::io;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("exit", "Exit", "exit", cmd_exit).with_menu_key("8"),
        CommandEntry::new("menu", "Show the main menu", "menu", cmd_menu),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
    ]
}

fn cmd_menu(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.print_menu();
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(command) = args.first().map(|name| name.to_lowercase()) {
        if let Some(command) = context.command(&command) {
            help::print_command(command);
        } else {
            context.suggest_command(args[0]);
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    io::print_info("Exiting Budget Tracker. Goodbye!");
    tracing::debug!(status = %context.status(), "exit requested");
    Err(CommandError::ExitRequested)
}
