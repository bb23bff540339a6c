use std::path::Path;

use config::{Config, ConfigError, Environment, File, Map};
use meigara_core::config::AppConfig;

/// 环境变量前缀，如 `MEIGARA_SERVER__PORT=9000`
const ENV_PREFIX: &str = "MEIGARA";

/// # Summary
/// 从配置文件与进程环境变量加载配置。
///
/// # Logic
/// 1. 未出现的字段取 `AppConfig::default()`。
/// 2. 文件可缺省，存在时按扩展名解析。
/// 3. `MEIGARA_` 前缀的环境变量最后覆盖，`__` 分隔嵌套层级。
pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    load_with_env(path, None)
}

/// 同 `load`，但可以注入一组环境变量代替进程环境。
fn load_with_env(
    path: &Path,
    env: Option<Map<String, String>>,
) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        )
        .build()?;

    settings.try_deserialize()
}
