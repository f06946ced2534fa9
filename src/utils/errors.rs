// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 输入层错误类型
///
/// 仅在启动阶段出现，两种情况都会终止本次运行
#[derive(Error, Debug)]
pub enum InputError {
    /// 输入文件缺失或无法解析
    #[error("input file missing or unreadable: {0}")]
    Missing(String),

    /// 输入文件解析成功但没有任何URL
    #[error("input file yielded no profile urls")]
    Empty,
}
