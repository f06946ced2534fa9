// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 将已有的档案URL规范化为抓取用的标准形式
///
/// 去掉末尾的路径分隔符后追加固定的查询后缀
pub fn canonicalize_profile_url(raw: &str, suffix: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    format!("{}{}", trimmed, suffix)
}

/// 根据裸标识符构建档案URL
///
/// 模板为 `base + id + suffix`
pub fn profile_url_from_id(base: &str, id: &str, suffix: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{}/{}{}", base, id.trim(), suffix)
}

/// 将重定向Location（可能为相对路径）解析为绝对URL
pub fn resolve_location(request_url: &str, location: &str) -> Result<Url, ParseError> {
    let base = Url::parse(request_url)?;
    base.join(location)
}
