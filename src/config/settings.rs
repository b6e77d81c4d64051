// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 默认浏览器标识
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
(KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// DuckDuckGo HTML 搜索入口
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// 应用程序配置设置
///
/// 包含HTTP抓取、搜索后端和结果输出等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// HTTP抓取配置
    pub http: HttpSettings,
    /// 搜索配置
    pub search: SearchSettings,
    /// 输出配置
    pub output: OutputSettings,
}

/// HTTP抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// 单次请求超时时间（秒）
    pub timeout_secs: u64,
    /// 请求使用的浏览器标识
    pub user_agent: String,
}

/// 搜索配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    /// 搜索后端入口URL
    pub endpoint: String,
    /// 区域参数 (DuckDuckGo `kl`)
    pub region: String,
    /// 每个查询请求的结果数
    pub results_per_query: u32,
    /// 查询之间的停顿（毫秒）
    pub query_delay_ms: u64,
}

/// 输出配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    /// 结果文件目录
    pub dir: String,
}

impl HttpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl SearchSettings {
    pub fn query_delay(&self) -> Duration {
        Duration::from_millis(self.query_delay_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            http: HttpSettings {
                timeout_secs: 10,
                user_agent: DEFAULT_USER_AGENT.to_string(),
            },
            search: SearchSettings {
                endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
                region: "wt-wt".to_string(),
                results_per_query: 10,
                query_delay_ms: 1500,
            },
            output: OutputSettings {
                dir: ".".to_string(),
            },
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加内置默认值、`config/default`、`config/{APP_ENVIRONMENT}`
    /// 以及 `HARVESTRS__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let defaults = Settings::default();
        let builder = Config::builder()
            // Default HTTP settings
            .set_default("http.timeout_secs", defaults.http.timeout_secs as i64)?
            .set_default("http.user_agent", defaults.http.user_agent)?
            // Default search settings
            .set_default("search.endpoint", defaults.search.endpoint)?
            .set_default("search.region", defaults.search.region)?
            .set_default("search.results_per_query", i64::from(defaults.search.results_per_query))?
            .set_default("search.query_delay_ms", defaults.search.query_delay_ms as i64)?
            // Default output settings
            .set_default("output.dir", defaults.output.dir)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("HARVESTRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
