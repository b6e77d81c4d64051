// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::harvest_report::HarvestReport;
use crate::domain::models::target_domain::TargetDomain;
use crate::domain::search::engine::SearchEngine;
use crate::domain::services::common_path_scanner::CommonPathScanner;
use crate::domain::services::email_extractor::extract_emails;
use crate::domain::services::query_builder::build_queries;
use crate::domain::services::search_client::SearchClient;
use crate::engines::traits::PageFetcher;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// 采集服务
///
/// 编排单个域名的完整采集流程：
/// 1. 扫描站点上的常见联系页面
/// 2. 依次执行每个搜索查询，挖掘摘要并抓取每个新出现的结果页面
/// 3. 汇总为去重后的邮箱集合
///
/// 任何单个页面或查询的失败都只会让该来源贡献为空，不会中断流程。
pub struct HarvestService {
    fetcher: Arc<dyn PageFetcher>,
    scanner: CommonPathScanner,
    search: SearchClient,
    query_delay: Duration,
}

impl HarvestService {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        engine: Arc<dyn SearchEngine>,
        query_delay: Duration,
    ) -> Self {
        Self {
            scanner: CommonPathScanner::new(fetcher.clone()),
            search: SearchClient::new(engine),
            fetcher,
            query_delay,
        }
    }

    /// 采集目标域名的邮箱地址
    ///
    /// # 参数
    ///
    /// * `domain` - 目标域名
    /// * `max_results_per_query` - 每个查询请求的搜索结果数
    ///
    /// # 返回值
    ///
    /// 该域名的采集报告；没有任何来源找到地址时邮箱集合为空
    pub async fn harvest(&self, domain: &TargetDomain, max_results_per_query: u32) -> HarvestReport {
        let start = Instant::now();
        let mut report = HarvestReport::new(domain.clone());

        // Phase 1: on-site pages, no search backend needed
        let scan = self.scanner.scan(domain).await;
        report.stats.pages_fetched += scan.pages_fetched;
        report.stats.pages_failed += scan.pages_failed;
        report.merge(scan.emails);
        let mut seen_urls: HashSet<String> = scan.visited;

        // Phase 2: search, mine snippets, fetch each result page once
        let queries = build_queries(domain);
        let query_count = queries.len();

        for (index, query) in queries.iter().enumerate() {
            info!("Querying: {}", query);
            let results = self.search.search(query, max_results_per_query).await;
            info!("{} results returned", results.len());

            report.stats.queries_run += 1;
            if results.is_empty() {
                report.stats.queries_empty += 1;
            }

            for result in &results {
                report.stats.results_seen += 1;

                let found = extract_emails(&result.snippet_text(), domain);
                if !found.is_empty() {
                    info!("Found in snippet: {:?}", found);
                    report.stats.snippet_hits += 1;
                    report.merge(found);
                }

                let Some(url) = result.url() else {
                    continue;
                };
                if !seen_urls.insert(url.to_string()) {
                    debug!("Skipping already fetched {}", url);
                    continue;
                }

                match self.fetcher.fetch(url).await {
                    Ok(page) => {
                        report.stats.pages_fetched += 1;
                        let found = extract_emails(&page.content, domain);
                        if !found.is_empty() {
                            info!("Found on {}: {:?}", url, found);
                            report.merge(found);
                        }
                    }
                    Err(e) => {
                        report.stats.pages_failed += 1;
                        if e.is_expected_miss() {
                            debug!("Result page {} unavailable: {}", url, e);
                        } else {
                            info!("Failed to fetch {}: {}", url, e);
                        }
                    }
                }
            }

            // Courtesy pause toward the search backend; none after the last query
            if index + 1 < query_count && !self.query_delay.is_zero() {
                tokio::time::sleep(self.query_delay).await;
            }
        }

        info!(
            domain = %domain,
            emails = report.emails.len(),
            pages_fetched = report.stats.pages_fetched,
            pages_failed = report.stats.pages_failed,
            queries_empty = report.stats.queries_empty,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Harvest finished"
        );

        report
    }
}

#[cfg(test)]
#[path = "harvest_service_test.rs"]
mod tests;
