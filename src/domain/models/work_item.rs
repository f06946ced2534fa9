// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

use crate::domain::models::company::CompanyRecord;

/// 工作项
///
/// 单个URL处理过程中的临时状态，携带类型化的重定向/重试
/// 计数器。从队列弹出时创建，到达终态（完成或丢弃）时销毁
#[derive(Debug, Clone)]
pub struct WorkItem {
    /// 原始请求的档案URL，作为记录主键
    pub url: String,
    /// 已经历的重定向次数
    pub redirect_count: u32,
    /// 已经历的重试次数
    pub retry_count: u32,
}

impl WorkItem {
    pub fn new(url: String) -> Self {
        Self {
            url,
            redirect_count: 0,
            retry_count: 0,
        }
    }
}

/// 丢弃原因
///
/// 工作项在本次运行中被放弃且不再重试的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// 超过最大重定向次数
    RedirectLoop,
    /// 超过最大重试次数
    MaxRetriesExceeded,
    /// 页面可以访问但没有可用的公司名称
    MissingName,
    /// 请求失败且错误不可重试
    FetchFailed,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DropReason::RedirectLoop => write!(f, "redirect_loop"),
            DropReason::MaxRetriesExceeded => write!(f, "max_retries_exceeded"),
            DropReason::MissingName => write!(f, "missing_name"),
            DropReason::FetchFailed => write!(f, "fetch_failed"),
        }
    }
}

/// 工作项终态
#[derive(Debug, Clone)]
pub enum ItemOutcome {
    /// 成功提取出记录
    Done(CompanyRecord),
    /// 放弃，不产出记录
    Dropped(DropReason),
}
