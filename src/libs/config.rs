//! Configuration management for the allio application.
//!
//! Settings live in a JSON file in the platform application-data directory
//! and are grouped into optional modules, each with an interactive setup
//! step. Absent modules fall back to their defaults, so a missing or empty
//! configuration file is always valid.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::theme::ThemePalette;
use crate::msg_warning;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module shown in the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Identifier used for configuration routing
    pub key: String,
    /// Display name shown during interactive setup
    pub name: String,
}

/// Cosmetic theme settings.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ThemeConfig {
    pub palette: ThemePalette,
}

/// Water-intake settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WaterConfig {
    /// Glasses per day to aim for.
    pub daily_goal_glasses: i64,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self { daily_goal_glasses: 8 }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water: Option<WaterConfig>,
}

impl Config {
    /// Loads the saved configuration, or the default one when no file
    /// exists yet.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let file = File::open(&path)?;
        Ok(serde_json::from_reader(file)?)
    }

    /// Like `read`, but a broken configuration file only costs a warning
    /// and the defaults, it never takes a command down with it.
    pub fn read_or_default() -> Self {
        match Self::read() {
            Ok(config) => config,
            Err(error) => {
                msg_warning!(Message::ConfigUnreadable(error.to_string()));
                Config::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(&path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Removes the configuration file. Missing file is not an error.
    pub fn delete() -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    /// Interactive setup wizard. Starts from the saved configuration so a
    /// re-run keeps previous answers as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Config::read_or_default();
        let modules = Self::modules();
        let names: Vec<String> = modules.iter().map(|module| module.name.clone()).collect();
        let selection = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&names)
            .interact()?;

        for index in selection {
            match modules[index].key.as_str() {
                "theme" => config.theme = Some(Self::init_theme(config.theme.take())?),
                "water" => config.water = Some(Self::init_water(config.water.take())?),
                _ => {}
            }
        }

        Ok(config)
    }

    fn modules() -> Vec<ConfigModule> {
        vec![
            ConfigModule {
                key: "theme".to_string(),
                name: "Theme".to_string(),
            },
            ConfigModule {
                key: "water".to_string(),
                name: "Water intake".to_string(),
            },
        ]
    }

    fn init_theme(current: Option<ThemeConfig>) -> Result<ThemeConfig> {
        let current = current.unwrap_or_default();
        let names: Vec<&str> = ThemePalette::ALL.iter().map(|palette| palette.name()).collect();
        let default_index = ThemePalette::ALL.iter().position(|palette| *palette == current.palette).unwrap_or(0);
        let index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptThemePalette.to_string())
            .items(&names)
            .default(default_index)
            .interact()?;
        Ok(ThemeConfig {
            palette: ThemePalette::ALL[index],
        })
    }

    fn init_water(current: Option<WaterConfig>) -> Result<WaterConfig> {
        let current = current.unwrap_or_default();
        let daily_goal_glasses: i64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDailyGoal.to_string())
            .default(current.daily_goal_glasses)
            .interact_text()?;
        Ok(WaterConfig { daily_goal_glasses })
    }

    /// Active palette, defaulting when the theme module is unconfigured.
    pub fn theme_palette(&self) -> ThemePalette {
        self.theme.as_ref().map(|theme| theme.palette).unwrap_or_default()
    }

    /// Daily goal in glasses, defaulting when the water module is
    /// unconfigured.
    pub fn daily_goal(&self) -> i64 {
        self.water
            .as_ref()
            .map(|water| water.daily_goal_glasses)
            .unwrap_or_else(|| WaterConfig::default().daily_goal_glasses)
    }
}
