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

use clap::Parser;
use harvestrs::application::use_cases::harvest_batch::{resolve_target, HarvestBatch};
use harvestrs::config::settings::Settings;
use harvestrs::domain::services::harvest_service::HarvestService;
use harvestrs::engines::reqwest_engine::ReqwestEngine;
use harvestrs::infrastructure::search::DuckDuckGoSearchEngine;
use harvestrs::infrastructure::storage::LocalStorage;
use harvestrs::utils::telemetry;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "harvestrs",
    about = "Harvest email addresses for a domain using DuckDuckGo + direct scraping"
)]
struct Cli {
    /// Target domain (e.g. example.com) or path to a text file with one domain per line
    target: String,

    /// Directory to save output files (created if needed)
    output_dir: Option<String>,

    /// Number of search results to fetch per query
    #[arg(short = 'n', long = "results", value_name = "N")]
    results: Option<u32>,
}

/// 主函数
///
/// 解析命令行，加载配置，按顺序采集每个目标域名
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Initialize logging
    telemetry::init_telemetry();

    // 2. Load configuration, CLI arguments take precedence
    let mut settings = Settings::new()?;
    if let Some(results) = cli.results {
        settings.search.results_per_query = results;
    }
    if let Some(dir) = cli.output_dir {
        settings.output.dir = dir;
    }

    // 3. Prepare output directory
    let storage = Arc::new(LocalStorage::new(&settings.output.dir));
    if storage.ensure_base_dir().await? {
        info!("Created output directory: {}", storage.base_path().display());
    }

    // 4. Resolve domain list
    let domains = resolve_target(&cli.target)?;

    // 5. Initialize components
    let fetcher = Arc::new(ReqwestEngine::new(&settings.http)?);
    let engine = Arc::new(DuckDuckGoSearchEngine::new(&settings.search, &settings.http)?);
    let service = HarvestService::new(fetcher, engine, settings.search.query_delay());
    let batch = HarvestBatch::new(service, storage);

    // 6. Run
    batch
        .run(&domains, settings.search.results_per_query)
        .await;

    Ok(())
}
