// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 公司档案记录
///
/// 每个成功抓取的URL对应一条记录。`url`是唯一主键，
/// `name`是唯一的必填字段，缺失即视为整条记录不可用。
/// 记录一旦写入持久化集合便不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    /// 原始请求的档案URL（主键，即使经过重定向也保持不变）
    pub url: String,
    /// 公司名称，必填
    pub name: String,
    /// 公司Logo地址
    pub logo_url: Option<String>,
    /// 简介文本
    pub about_text: Option<String>,
    /// 关注者数量
    pub follower_count: Option<u64>,
    /// 员工数量
    pub employee_count: Option<u64>,
    /// 官网地址
    #[serde(default)]
    pub website: String,
    /// 所属行业
    #[serde(default)]
    pub industry: String,
    /// 公司规模（区间下限）
    #[serde(default)]
    pub size_approx: String,
    /// 总部所在地
    #[serde(default)]
    pub headquarters: String,
    /// 公司类型（输出字段名为`type`）
    #[serde(default, rename = "type")]
    pub company_type: String,
    /// 成立年份
    #[serde(default)]
    pub founded: String,
    /// 专业领域
    #[serde(default)]
    pub specialties: String,
}

impl CompanyRecord {
    /// 创建只有必填字段的空白记录，其余字段取默认值
    pub fn new(url: String, name: String) -> Self {
        Self {
            url,
            name,
            logo_url: None,
            about_text: None,
            follower_count: None,
            employee_count: None,
            website: String::new(),
            industry: String::new(),
            size_approx: String::new(),
            headquarters: String::new(),
            company_type: String::new(),
            founded: String::new(),
            specialties: String::new(),
        }
    }
}
