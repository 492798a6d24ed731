use serde::{Deserialize, Serialize};
use std::any::type_name;

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize {}: {}", short_type_name::<TConfig>(), e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to deserialize {}: {}", short_type_name::<TConfig>(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::SnakeSettings;

    #[test]
    fn test_errors_name_the_document_type() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<SnakeSettings, String> = serializer.deserialize("grid_size: [not, a, number]");
        let message = result.unwrap_err();
        assert!(message.starts_with("Failed to deserialize SnakeSettings:"), "{}", message);
    }
}
