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

use tokio::time::sleep;
use tracing::{error, info, instrument, warn};

use crate::config::settings::CrawlSettings;
use crate::domain::models::work_item::{DropReason, ItemOutcome, WorkItem};
use crate::domain::services::extraction_service::ExtractionService;
use crate::engines::traits::ProfileFetcher;
use crate::infrastructure::store::RecordStore;
use crate::queue::work_queue::WorkQueue;
use crate::utils::retry_policy::{PacingPolicy, RetryPolicy};
use crate::utils::url_utils;

/// 运行汇总
#[derive(Debug, Default, Clone, Copy)]
pub struct CrawlReport {
    /// 成功产出记录的URL数
    pub completed: usize,
    /// 被丢弃的URL数
    pub dropped: usize,
    /// 因先前已完成而跳过的URL数
    pub skipped: usize,
    /// 是否被外部中断
    pub interrupted: bool,
}

/// 抓取调度器
///
/// 严格顺序地处理工作队列：每次只有一个请求在途，
/// 前一项到达终态后才派发下一项。每个URL的重定向/重试
/// 状态机由本调度器驱动，工作项生命周期归其独占
pub struct CrawlWorker<F: ProfileFetcher> {
    fetcher: F,
    retry_policy: RetryPolicy,
    pacing: PacingPolicy,
    max_redirects: u32,
}

impl<F: ProfileFetcher> CrawlWorker<F> {
    /// 创建新的抓取调度器实例
    pub fn new(fetcher: F, settings: &CrawlSettings) -> Self {
        Self {
            fetcher,
            retry_policy: RetryPolicy::new(settings.max_retries, settings.retry_backoff()),
            pacing: PacingPolicy::new(settings.download_delay()),
            max_redirects: settings.max_redirects,
        }
    }

    /// 运行一次完整的抓取
    ///
    /// 按队列顺序逐项处理直到队列耗尽或被中断。中断时
    /// 当前工作项被放弃（未标记完成，下次运行会重试），
    /// 已累积的记录由调用方负责刷盘
    pub async fn run(&self, mut queue: WorkQueue, store: &mut RecordStore) -> CrawlReport {
        let total = queue.len();
        let mut report = CrawlReport {
            skipped: queue.skipped(),
            ..CrawlReport::default()
        };

        info!("crawl worker started, {} urls pending", total);

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        let mut position = 0usize;
        while let Some(url) = queue.pop() {
            position += 1;
            info!("scraping page {} of {}", position, total);

            tokio::select! {
                outcome = self.process_item(WorkItem::new(url)) => match outcome {
                    ItemOutcome::Done(record) => {
                        store.append(record);
                        report.completed += 1;
                    }
                    ItemOutcome::Dropped(reason) => {
                        report.dropped += 1;
                        warn!("item dropped: {}", reason);
                    }
                },
                _ = &mut ctrl_c => {
                    warn!("interrupt received, abandoning current item");
                    report.interrupted = true;
                    break;
                }
            }
        }

        info!(
            "crawl worker finished: {} completed, {} dropped, {} skipped",
            report.completed, report.dropped, report.skipped
        );
        report
    }

    /// 驱动单个工作项到终态
    ///
    /// 重定向针对解析出的目标地址重新派发，但记录始终
    /// 以原始URL为主键；重试则总是回到原始URL重新派发
    #[instrument(skip(self, item), fields(url = %item.url))]
    async fn process_item(&self, mut item: WorkItem) -> ItemOutcome {
        let mut target = item.url.clone();

        loop {
            // Human-paced access: wait before every dispatch,
            // regardless of the previous outcome
            sleep(self.pacing.next_delay()).await;

            let response = match self.fetcher.fetch(&target).await {
                Ok(response) => response,
                Err(e) if e.is_retryable() => {
                    warn!("fetch error ({}), treating as transient", e);
                    if !self.backoff_before_retry(&mut item).await {
                        return ItemOutcome::Dropped(DropReason::MaxRetriesExceeded);
                    }
                    target = item.url.clone();
                    continue;
                }
                Err(e) => {
                    error!("fetch failed without retry: {}", e);
                    return ItemOutcome::Dropped(DropReason::FetchFailed);
                }
            };

            if response.is_redirect() {
                item.redirect_count += 1;
                if item.redirect_count > self.max_redirects {
                    warn!("redirect limit of {} exceeded", self.max_redirects);
                    return ItemOutcome::Dropped(DropReason::RedirectLoop);
                }

                let resolved = response
                    .location
                    .as_deref()
                    .and_then(|loc| url_utils::resolve_location(&target, loc).ok());
                match resolved {
                    Some(next) => {
                        info!("redirect {} -> {}", target, next);
                        target = next.to_string();
                        continue;
                    }
                    None => {
                        warn!("redirect response without usable location");
                        return ItemOutcome::Dropped(DropReason::RedirectLoop);
                    }
                }
            }

            if response.is_not_found() {
                if !self.backoff_before_retry(&mut item).await {
                    return ItemOutcome::Dropped(DropReason::MaxRetriesExceeded);
                }
                target = item.url.clone();
                continue;
            }

            // Any remaining status is handed to the extractor; pages
            // without a usable profile fall out as MissingName
            return match ExtractionService::extract(&item.url, &response.body) {
                Some(record) => {
                    info!("extracted record for {}", record.name);
                    ItemOutcome::Done(record)
                }
                None => ItemOutcome::Dropped(DropReason::MissingName),
            };
        }
    }

    /// 为下一次重试做退避等待
    ///
    /// 达到重试上限时返回false
    async fn backoff_before_retry(&self, item: &mut WorkItem) -> bool {
        if !self.retry_policy.should_retry(item.retry_count) {
            warn!("giving up after {} retries", item.retry_count);
            return false;
        }

        item.retry_count += 1;
        let backoff = self.retry_policy.calculate_backoff(item.retry_count);
        info!(
            "retry {}/{} in {:?}",
            item.retry_count, self.retry_policy.max_retries, backoff
        );
        sleep(backoff).await;
        true
    }
}
