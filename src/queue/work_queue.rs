// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::VecDeque;

use tracing::info;

use crate::infrastructure::store::RecordStore;

/// 工作队列
///
/// 本次运行中仍待处理的URL集合，已按规范化和批内去重
/// 处理过，并过滤掉了存储中已完成的URL。出队顺序与输入
/// 顺序一致，保证调度确定性
pub struct WorkQueue {
    pending: VecDeque<String>,
    skipped: usize,
}

impl WorkQueue {
    /// 构建工作队列
    ///
    /// # 参数
    ///
    /// * `urls` - 规范化并去重后的URL列表
    /// * `store` - 记录存储，用于过滤已完成的URL
    pub fn build(urls: Vec<String>, store: &RecordStore) -> Self {
        let total = urls.len();
        let pending: VecDeque<String> =
            urls.into_iter().filter(|url| !store.is_done(url)).collect();
        let skipped = total - pending.len();

        info!(
            "work queue built: {} pending, {} already completed",
            pending.len(),
            skipped
        );

        Self { pending, skipped }
    }

    /// 弹出下一个待处理URL
    pub fn pop(&mut self) -> Option<String> {
        self.pending.pop_front()
    }

    /// 剩余待处理数量
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// 因已完成而被跳过的URL数量
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
