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

use scraper::{ElementRef, Html, Selector};

use crate::domain::models::company::CompanyRecord;

/// 页面结构选择器
///
/// 与目标站点的档案页布局绑定，布局变更时只需调整这里
const NAME_SELECTOR: &str = ".top-card-layout__entity-info h1";
const LOGO_SELECTOR: &str = "div.top-card-layout__entity-image-container img";
const LOGO_ATTR: &str = "data-delayed-url";
const ABOUT_SELECTOR: &str = ".core-section-container__content p";
const FOLLOWERS_SELECTOR: &str = "h3.top-card-layout__first-subline";
const EMPLOYEES_SELECTOR: &str = "a.face-pile__cta";
const DETAIL_BLOCK_SELECTOR: &str = ".core-section-container__content .mb-2";
const DETAIL_TEXT_SELECTOR: &str = ".text-md";
const DETAIL_LINK_SELECTOR: &str = "a";

/// 提取服务
///
/// 负责从抓取到的档案页HTML中提取结构化记录。
/// 每个可选字段的查找都有独立的回退，单个字段缺失
/// 不会影响其余字段；唯一的例外是公司名称，缺失时
/// 整条记录不可用
pub struct ExtractionService;

impl ExtractionService {
    /// 提取公司档案记录
    ///
    /// # 参数
    ///
    /// * `url` - 原始请求的档案URL（记录主键）
    /// * `html` - 抓取到的页面内容
    ///
    /// # 返回值
    ///
    /// * `Some(CompanyRecord)` - 提取成功
    /// * `None` - 页面没有可用的公司名称，记录不可用
    pub fn extract(url: &str, html: &str) -> Option<CompanyRecord> {
        let document = Html::parse_document(html);

        let name = first_text(&document, NAME_SELECTOR)?;
        if name.is_empty() {
            return None;
        }

        let mut record = CompanyRecord::new(url.to_string(), name);

        record.logo_url = first_attr(&document, LOGO_SELECTOR, LOGO_ATTR);
        record.about_text = first_text(&document, ABOUT_SELECTOR);
        record.follower_count =
            first_text(&document, FOLLOWERS_SELECTOR).and_then(|t| parse_count(&t));
        record.employee_count =
            first_text(&document, EMPLOYEES_SELECTOR).and_then(|t| parse_count(&t));

        Self::assign_details(&document, &mut record);

        Some(record)
    }

    /// 按标签匹配详情区块
    ///
    /// 详情区是一组有序的标签/值对，具体位置随档案拥有的
    /// 可选属性而变化，因此只能按标签文本匹配，不能按下标
    fn assign_details(document: &Html, record: &mut CompanyRecord) {
        let block_selector = Selector::parse(DETAIL_BLOCK_SELECTOR).unwrap();
        let text_selector = Selector::parse(DETAIL_TEXT_SELECTOR).unwrap();
        let link_selector = Selector::parse(DETAIL_LINK_SELECTOR).unwrap();

        for block in document.select(&block_selector) {
            let mut texts = block.select(&text_selector);
            let label = match texts.next() {
                Some(el) => element_text(el).to_lowercase(),
                None => continue,
            };
            let value = texts.next().map(element_text).unwrap_or_default();

            match label.as_str() {
                "website" => {
                    // The website value is the anchor text inside the block
                    record.website = block
                        .select(&link_selector)
                        .next()
                        .map(element_text)
                        .unwrap_or(value);
                }
                "industry" => record.industry = value,
                "company size" => {
                    // Keep only the range, e.g. "51-200 employees" -> "51-200"
                    record.size_approx = value
                        .split_whitespace()
                        .next()
                        .unwrap_or_default()
                        .to_string();
                }
                "headquarters" => record.headquarters = value,
                "type" => record.company_type = value,
                "founded" => record.founded = value,
                "specialties" => record.specialties = value,
                _ => {} // Unknown label, ignore
            }
        }
    }
}

/// 取第一个匹配元素的文本，去除首尾空白；无匹配或为空时返回None
fn first_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();
    let text = element_text(document.select(&selector).next()?);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// 取第一个匹配元素的属性值
fn first_attr(document: &Html, selector: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(|s| s.trim().to_string())
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ").trim().to_string()
}

/// 从自由文本中解析计数
///
/// 提取第一段带千位分隔符的数字并去除分隔符，
/// 解析失败时返回None而不是报错
pub fn parse_count(text: &str) -> Option<u64> {
    use std::sync::OnceLock;

    static COUNT_RE: OnceLock<regex::Regex> = OnceLock::new();
    let re = COUNT_RE.get_or_init(|| regex::Regex::new(r"\d{1,3}(?:,\d{3})+|\d+").unwrap());

    let matched = re.find(text)?;
    matched.as_str().replace(',', "").parse().ok()
}
