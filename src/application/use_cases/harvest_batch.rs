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

use crate::domain::{
    models::{harvest_report::HarvestReport, target_domain::TargetDomain},
    repositories::storage_repository::StorageRepository,
    services::harvest_service::HarvestService,
};
use chrono::{DateTime, Local};
use std::path::{Path, MAIN_SEPARATOR};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Error, Debug)]
pub enum TargetError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("File '{0}' is empty or contains no valid domains")]
    EmptyFile(String),
    #[error("Failed to read target file: {0}")]
    Io(#[from] std::io::Error),
}

/// 解析命令行目标
///
/// * 已存在的文件：每个非空行是一个域名
/// * 看起来像路径但不存在：`FileNotFound`
/// * 其他：目标本身就是单个域名
pub fn resolve_target(target: &str) -> Result<Vec<String>, TargetError> {
    let path = Path::new(target);
    if path.is_file() {
        let content = std::fs::read_to_string(path)?;
        let domains: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        if domains.is_empty() {
            return Err(TargetError::EmptyFile(target.to_string()));
        }
        return Ok(domains);
    }

    let looks_like_path =
        target.contains('/') || target.contains(MAIN_SEPARATOR) || target.ends_with(".txt");
    if looks_like_path {
        return Err(TargetError::FileNotFound(target.to_string()));
    }

    Ok(vec![target.to_string()])
}

/// 结果文件名：`{domain}_{YYYYMMDD_HHMMSS}.txt`
pub fn result_file_name(domain: &TargetDomain, at: DateTime<Local>) -> String {
    format!("{}_{}.txt", domain, at.format("%Y%m%d_%H%M%S"))
}

/// 结果文件内容：排序后每行一个地址，以换行结尾
pub fn render_emails(report: &HarvestReport) -> String {
    let mut content = report.sorted_emails().join("\n");
    content.push('\n');
    content
}

/// 标准输出上的结果清单
pub fn render_listing(report: &HarvestReport) -> String {
    format!(
        "[+] Found {} unique email address(es) for {}:\n{}",
        report.emails.len(),
        report.domain,
        render_emails(report)
    )
}

/// 批处理汇总
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub domains_processed: usize,
    pub domains_with_emails: usize,
    pub total_emails: usize,
    pub files_written: Vec<String>,
}

/// 批量采集用例
///
/// 按顺序处理每个域名；单个域名的失败（包括结果写入失败）不会中断后续域名。
pub struct HarvestBatch {
    service: HarvestService,
    storage: Arc<dyn StorageRepository>,
}

impl HarvestBatch {
    pub fn new(service: HarvestService, storage: Arc<dyn StorageRepository>) -> Self {
        Self { service, storage }
    }

    pub async fn run(&self, raw_domains: &[String], max_results_per_query: u32) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for raw in raw_domains {
            let domain = match TargetDomain::parse(raw) {
                Ok(domain) => domain,
                Err(e) => {
                    warn!("Skipping entry: {}", e);
                    continue;
                }
            };

            info!("Harvesting emails for: {}", domain);
            let report = self.service.harvest(&domain, max_results_per_query).await;
            summary.domains_processed += 1;

            if report.is_empty() {
                info!("No email addresses found for {}", domain);
                continue;
            }

            summary.domains_with_emails += 1;
            summary.total_emails += report.emails.len();
            print!("{}", render_listing(&report));

            let key = result_file_name(&domain, Local::now());
            match self.storage.save(&key, render_emails(&report).as_bytes()).await {
                Ok(location) => {
                    info!("Results saved to: {}", location);
                    summary.files_written.push(location);
                }
                Err(e) => error!("Failed to save results for {}: {}", domain, e),
            }
        }

        info!(
            domains = summary.domains_processed,
            with_emails = summary.domains_with_emails,
            emails = summary.total_emails,
            "Batch finished"
        );

        summary
    }
}

#[cfg(test)]
#[path = "harvest_batch_test.rs"]
mod tests;
