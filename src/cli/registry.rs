use std::collections::HashMap;

use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    /// Number shown in the main menu, if the command is listed there.
    pub menu_key: Option<&'static str>,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            menu_key: None,
            handler,
        }
    }

    pub fn with_menu_key(mut self, key: &'static str) -> Self {
        self.menu_key = Some(key);
        self
    }
}

pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    menu_keys: HashMap<&'static str, &'static str>,
    order: Vec<&'static str>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            menu_keys: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn register(&mut self, entry: CommandEntry) {
        let name = entry.name;
        if let Some(key) = entry.menu_key {
            self.menu_keys.insert(key, name);
        }
        if self.commands.insert(name, entry).is_none() {
            self.order.push(name);
        }
    }

    /// Looks up a command by name or by its menu number.
    pub fn resolve(&self, input: &str) -> Option<&CommandEntry> {
        self.commands.get(input).or_else(|| {
            self.menu_keys
                .get(input)
                .and_then(|name| self.commands.get(name))
        })
    }

    pub fn list(&self) -> Vec<&CommandEntry> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name))
            .collect()
    }

    /// Entries shown in the main menu, in menu order.
    pub fn menu(&self) -> Vec<&CommandEntry> {
        let mut entries: Vec<_> = self
            .list()
            .into_iter()
            .filter(|entry| entry.menu_key.is_some())
            .collect();
        entries.sort_by_key(|entry| entry.menu_key.and_then(|key| key.parse::<u32>().ok()));
        entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }
}
