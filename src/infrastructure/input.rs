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

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use crate::config::settings::CrawlSettings;
use crate::utils::errors::InputError;
use crate::utils::url_utils;

/// 标识符加载器
///
/// 读取目标标识符文件并规范化为抓取用的档案URL列表。
/// 支持两种格式：
/// * JSON对象：名称到URL的映射，取其中的URL值
/// * 纯文本：每行一个裸标识符，按模板构建URL
///
/// 批内去重，保留首次出现的顺序以保证调度确定性
pub fn load_profile_urls(path: &Path, settings: &CrawlSettings) -> Result<Vec<String>, InputError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| InputError::Missing(format!("{}: {}", path.display(), e)))?;

    let raw_urls = if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        urls_from_json_map(&content, path, settings)?
    } else {
        urls_from_id_lines(&content, settings)
    };

    let mut seen = HashSet::new();
    let urls: Vec<String> = raw_urls
        .into_iter()
        .filter(|url| seen.insert(url.clone()))
        .collect();

    if urls.is_empty() {
        warn!("input file {} yielded no urls, nothing to do", path.display());
        return Err(InputError::Empty);
    }

    info!("loaded {} profile urls from {}", urls.len(), path.display());
    Ok(urls)
}

/// 从名称到URL的JSON映射中取URL值并规范化
fn urls_from_json_map(
    content: &str,
    path: &Path,
    settings: &CrawlSettings,
) -> Result<Vec<String>, InputError> {
    let data: Value = serde_json::from_str(content)
        .map_err(|e| InputError::Missing(format!("{}: invalid json: {}", path.display(), e)))?;

    let map = data
        .as_object()
        .ok_or_else(|| InputError::Missing(format!("{}: expected a json object", path.display())))?;

    Ok(map
        .values()
        .filter_map(|v| v.as_str())
        .map(|url| url_utils::canonicalize_profile_url(url, &settings.url_suffix))
        .collect())
}

/// 从每行一个裸标识符的文本构建URL
///
/// 跳过空行和`#`注释行
fn urls_from_id_lines(content: &str, settings: &CrawlSettings) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|id| {
            url_utils::profile_url_from_id(&settings.profile_base_url, id, &settings.url_suffix)
        })
        .collect()
}
