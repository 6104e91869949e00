use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    output_section("Available commands");
    for entry in registry.list() {
        let key = entry.menu_key.map(|key| format!("[{key}]")).unwrap_or_default();
        io::print_info(format!("  {:<4} {:<10} {}", key, entry.name, entry.description));
    }
    io::print_info("Use `help <command>` for details.");
    io::print_info("Type a menu number or a command name; amounts may follow the command.");
}

pub fn print_command(entry: &CommandEntry) {
    output_section(format!("Help: {}", entry.name));
    io::print_info(format!("  Description: {}", entry.description));
    io::print_info(format!("  Usage: {}", entry.usage));
    if let Some(key) = entry.menu_key {
        io::print_info(format!("  Menu number: {key}"));
    }
}
