use rbac_editor_domain::security::role_binding::{CLUSTER_ROLE_KIND, RBAC_API_GROUP};
use rbac_editor_service::BindingTemplate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const CONFIG_FILE: &str = "rbac-editor";
const ENV_PREFIX: &str = "RBAC_EDITOR";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// EnvFilter语法，例如 `info` 或 `rbac_editor_service=debug`
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// 角色分配的种子文件（JSON或YAML）
    pub seed_file: Option<PathBuf>,
    /// 要载入编辑器的绑定文件（JSON或YAML）
    pub binding_file: Option<PathBuf>,
    pub role_kind: String,
    pub api_group: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            binding_file: None,
            role_kind: CLUSTER_ROLE_KIND.to_string(),
            api_group: RBAC_API_GROUP.to_string(),
        }
    }
}

impl EditorConfig {
    pub fn template(&self) -> BindingTemplate {
        BindingTemplate {
            role_kind: self.role_kind.clone(),
            api_group: self.api_group.clone(),
        }
    }
}

impl Config {
    /// 依次读取 `rbac-editor.toml`（可选）和 `RBAC_EDITOR__` 前缀的环境变量
    pub fn load() -> Result<Self, ::config::ConfigError> {
        // .env不存在时忽略
        dotenv::dotenv().ok();

        let builder = ::config::Config::builder()
            .add_source(::config::File::with_name(CONFIG_FILE).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            );

        builder.build()?.try_deserialize()
    }

    #[cfg(test)]
    fn from_toml(content: &str) -> Result<Self, ::config::ConfigError> {
        ::config::Config::builder()
            .add_source(::config::File::from_str(content, ::config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
