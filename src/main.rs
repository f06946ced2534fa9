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

use std::path::Path;

use companyrs::config::settings::Settings;
use companyrs::engines::reqwest_engine::ReqwestEngine;
use companyrs::infrastructure::input;
use companyrs::infrastructure::store::RecordStore;
use companyrs::queue::work_queue::WorkQueue;
use companyrs::utils::telemetry;
use companyrs::workers::crawl_worker::CrawlWorker;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点：执行一次完整的抓取并退出。
/// 启动阶段的输入错误导致非零退出码；单项丢弃不影响退出码
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting companyrs...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Load target identifiers; missing or empty input aborts the run
    let urls = input::load_profile_urls(Path::new(&settings.crawl.input_path), &settings.crawl)?;

    // 4. Load persisted records and build the pending queue
    let mut store = RecordStore::load(Path::new(&settings.crawl.output_path))?;
    let queue = WorkQueue::build(urls, &store);

    if queue.is_empty() {
        info!("all urls already completed, nothing to crawl");
        return Ok(());
    }

    // 5. Run the sequential crawl
    let engine = ReqwestEngine::new(&settings.crawl.user_agent, settings.crawl.fetch_timeout())?;
    let worker = CrawlWorker::new(engine, &settings.crawl);
    let report = worker.run(queue, &mut store).await;

    // 6. Flush everything accumulated so far, interrupted or not
    store.flush()?;

    if report.interrupted {
        warn!(
            "run interrupted: {} completed, {} dropped; remaining urls will be retried next run",
            report.completed, report.dropped
        );
    } else {
        info!(
            "run finished: {} completed, {} dropped, {} skipped, {} records persisted",
            report.completed,
            report.dropped,
            report.skipped,
            store.len()
        );
    }

    Ok(())
}
