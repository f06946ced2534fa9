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

use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 抓取配置
    pub crawl: CrawlSettings,
}

/// 抓取配置设置
///
/// 覆盖输入输出文件路径、URL模板以及节奏和重试策略。
/// 延时和重试上限属于运行配置，不在任何接口上暴露
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlSettings {
    /// 目标标识符输入文件路径
    pub input_path: String,
    /// 持久化输出文件路径
    pub output_path: String,
    /// 由裸标识符构建档案URL时使用的基础地址
    pub profile_base_url: String,
    /// 追加到每个档案URL末尾的查询后缀
    pub url_suffix: String,
    /// 请求间基础延时（毫秒），实际等待会乘以随机系数
    pub download_delay_ms: u64,
    /// 单个URL的最大重试次数
    pub max_retries: u32,
    /// 单个URL允许跟随的最大重定向次数
    pub max_redirects: u32,
    /// 重试退避的初始间隔（毫秒）
    pub retry_backoff_ms: u64,
    /// 单次请求的超时时间（秒）
    pub fetch_timeout_secs: u64,
    /// 请求使用的User-Agent
    pub user_agent: String,
}

impl CrawlSettings {
    /// 请求间基础延时
    pub fn download_delay(&self) -> Duration {
        Duration::from_millis(self.download_delay_ms)
    }

    /// 重试退避初始间隔
    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    /// 单次请求超时
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从配置文件和环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings, mirroring the reference deployment
            .set_default("crawl.input_path", "company_names.json")?
            .set_default("crawl.output_path", "company_profile_data.json")?
            .set_default("crawl.profile_base_url", "https://www.linkedin.com/company/")?
            .set_default("crawl.url_suffix", "/?trk=companies_directory")?
            .set_default("crawl.download_delay_ms", 700)?
            .set_default("crawl.max_retries", 10)?
            .set_default("crawl.max_redirects", 5)?
            .set_default("crawl.retry_backoff_ms", 1000)?
            .set_default("crawl.fetch_timeout_secs", 30)?
            .set_default(
                "crawl.user_agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36",
            )?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("COMPANYRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}
