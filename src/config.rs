use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ls8_lib::MachineConfig;

/// Load and validate a YAML machine configuration. An empty file gives the
/// default machine.
pub fn load_config(path: &Path) -> Result<MachineConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    if contents.trim().is_empty() {
        return Ok(MachineConfig::default());
    }
    let config: MachineConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid machine configuration in {}", path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ls8_lib::{RegisterWidth, StorePolicy};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();

        file
    }

    #[test]
    fn test_load_full_config() {
        let file = config_file(
            "register_width: wrapping\nmemory_size: 256\nstore_policy: encoded\n",
        );
        let config = load_config(file.path()).unwrap();

        assert_eq!(RegisterWidth::Wrapping, config.register_width);
        assert_eq!(256, config.memory_size);
        assert_eq!(StorePolicy::Encoded, config.store_policy);
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let file = config_file("store_policy: fault\n");
        let config = load_config(file.path()).unwrap();

        assert_eq!(
            MachineConfig {
                store_policy: StorePolicy::Fault,
                ..MachineConfig::default()
            },
            config
        );
    }

    #[test]
    fn test_empty_file() {
        let file = config_file("\n");

        assert_eq!(MachineConfig::default(), load_config(file.path()).unwrap());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let file = config_file("register_size: 8\n");

        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        let file = config_file("register_width: sixteen\n");

        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_small_memory_is_rejected() {
        let file = config_file("memory_size: 16\n");
        let message = format!("{:#}", load_config(file.path()).unwrap_err());

        assert!(message.contains("Invalid machine configuration"));
    }

    #[test]
    fn test_missing_file() {
        let message = format!(
            "{:#}",
            load_config(Path::new("/does/not/exist.yaml")).unwrap_err()
        );

        assert!(message.starts_with("Failed to read config file"));
    }
}
