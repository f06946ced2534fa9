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
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::models::company::CompanyRecord;

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 序列化错误
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 记录存储
///
/// 同时承担去重索引和持久化汇聚两个职责：内存中持有
/// 完整的输出集合（启动时从磁盘加载），并维护已完成URL
/// 的集合。整个运行过程只有一个写入者，顺序处理保证了
/// 无需并发保护。记录一旦追加便不可修改，已完成集合在
/// 运行内只增不减
pub struct RecordStore {
    path: PathBuf,
    records: Vec<CompanyRecord>,
    done: HashSet<String>,
}

impl RecordStore {
    /// 加载已持久化的记录集合
    ///
    /// 文件不存在时从空集合开始；文件存在但无法解析时
    /// 按空集合处理并告警，绝不让历史损坏阻止本次运行
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let records: Vec<CompanyRecord> = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(records) => records,
                Err(e) => {
                    warn!(
                        "malformed persisted state in {}, starting from empty: {}",
                        path.display(),
                        e
                    );
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(StoreError::Io(e)),
        };

        let done = records.iter().map(|r| r.url.clone()).collect();
        info!(
            "loaded {} previously persisted records from {}",
            records.len(),
            path.display()
        );

        Ok(Self {
            path: path.to_path_buf(),
            records,
            done,
        })
    }

    /// 查询URL是否已完成
    pub fn is_done(&self, url: &str) -> bool {
        self.done.contains(url)
    }

    /// 追加一条完成的记录并标记其URL为已完成
    ///
    /// 调用方保证该URL尚未存在；先追加记录再标记完成，
    /// 每条成功持久化的记录恰好调用一次
    pub fn append(&mut self, record: CompanyRecord) {
        let url = record.url.clone();
        self.records.push(record);
        self.done.insert(url);
    }

    /// 当前持有的记录数
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 全部记录（按追加顺序，历史记录在前）
    pub fn records(&self) -> &[CompanyRecord] {
        &self.records
    }

    /// 将完整集合写回磁盘
    ///
    /// 单个JSON数组，缩进格式。先写临时文件再原子重命名，
    /// 写入失败不会破坏既有文件
    pub fn flush(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.records)?;

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.path)?;

        info!("flushed {} records to {}", self.records.len(), self.path.display());
        Ok(())
    }
}
