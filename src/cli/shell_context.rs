use dialoguer::theme::ColorfulTheme;

use crate::{
    config::{Config, ConfigManager},
    core::IntakeSession,
};

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub session: IntakeSession,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn prompt(&self) -> String {
        format!("intake [{}]> ", self.session.language())
    }

    pub fn can_prompt(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.all_names()
    }

}
