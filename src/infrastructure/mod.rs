// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施模块
///
/// 提供外部资源访问：目标标识符输入文件和持久化记录存储
pub mod input;
pub mod store;
