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

use async_trait::async_trait;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 超时
    #[error("Timeout")]
    Timeout,
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

impl EngineError {
    /// 判断错误是否可重试
    ///
    /// # 返回值
    ///
    /// 如果错误是可重试的则返回true，否则返回false
    pub fn is_retryable(&self) -> bool {
        match self {
            EngineError::RequestFailed(e) => {
                e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
            }
            EngineError::Timeout => true,
            EngineError::Other(_) => false,
        }
    }
}

/// 抓取响应
///
/// 重定向不会被引擎自动跟随，3xx状态和Location头
/// 原样返回给调度器处理
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// HTTP状态码
    pub status_code: u16,
    /// 响应内容
    pub body: String,
    /// 重定向目标（仅3xx响应携带）
    pub location: Option<String>,
}

impl FetchResponse {
    /// 是否为重定向响应
    pub fn is_redirect(&self) -> bool {
        matches!(self.status_code, 301 | 302 | 303 | 307 | 308)
    }

    /// 是否为未找到响应
    pub fn is_not_found(&self) -> bool {
        self.status_code == 404
    }
}

/// 档案抓取引擎特质
///
/// 调度器通过该接口发起抓取，与具体传输实现解耦
#[async_trait]
pub trait ProfileFetcher: Send + Sync {
    /// 抓取单个URL
    async fn fetch(&self, url: &str) -> Result<FetchResponse, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_statuses() {
        for status in [301u16, 302, 303, 307, 308] {
            let resp = FetchResponse {
                status_code: status,
                body: String::new(),
                location: Some("/next".into()),
            };
            assert!(resp.is_redirect());
        }

        let ok = FetchResponse {
            status_code: 200,
            body: String::new(),
            location: None,
        };
        assert!(!ok.is_redirect());
    }

    #[test]
    fn test_other_errors_are_not_retryable() {
        assert!(!EngineError::Other("bad".into()).is_retryable());
        assert!(EngineError::Timeout.is_retryable());
    }
}
