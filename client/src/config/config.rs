use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::TicTacToeConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub tictactoe: TicTacToeConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::games::tictactoe::{FirstPlayerMode, Mark};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_client_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_round_trips_through_file_manager() {
        let config = Config {
            tictactoe: TicTacToeConfig {
                human_mark: Mark::O,
                first_player: FirstPlayerMode::Random,
                computer_delay_ms: 0,
            },
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.as_path()));

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh_manager = get_config_manager(Some(file_path.as_path()));
        assert_eq!(fresh_manager.get_config().unwrap(), config);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(Path::new("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer
            .deserialize("tictactoe:\n  first_player: computer\n")
            .unwrap();
        assert_eq!(config.tictactoe.first_player, FirstPlayerMode::Computer);
        assert_eq!(config.tictactoe.human_mark, Mark::X);
        assert_eq!(config.tictactoe.computer_delay_ms, common::DEFAULT_COMPUTER_DELAY_MS);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            tictactoe:
              human_mark: Empty
              first_player: human
              computer_delay_ms: 500
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_excessive_delay_is_rejected() {
        let config = Config {
            tictactoe: TicTacToeConfig {
                computer_delay_ms: common::MAX_COMPUTER_DELAY_MS + 1,
                ..TicTacToeConfig::default()
            },
        };
        assert!(config.validate().is_err());
    }
}
