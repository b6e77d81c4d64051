// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::target_domain::TargetDomain;
use crate::domain::services::email_extractor::extract_emails;
use crate::engines::traits::PageFetcher;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// 常见的联系方式页面路径，按扫描顺序排列
pub const COMMON_PATHS: [&str; 14] = [
    "/contact",
    "/contact-us",
    "/about",
    "/about-us",
    "/support",
    "/help",
    "/info",
    "/team",
    "/staff",
    "/press",
    "/media",
    "/legal",
    "/privacy",
    "/careers",
];

/// 先 https 后 http
const SCHEMES: [&str; 2] = ["https", "http"];

/// 常见路径扫描结果
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// 找到的邮箱地址
    pub emails: HashSet<String>,
    /// 已请求过的URL
    pub visited: HashSet<String>,
    /// 成功返回内容的页面数
    pub pages_fetched: usize,
    /// 请求失败的页面数
    pub pages_failed: usize,
}

/// 常见路径扫描器
///
/// 直接抓取目标站点上的联系/关于/法律等页面，不依赖搜索后端。
pub struct CommonPathScanner {
    fetcher: Arc<dyn PageFetcher>,
}

impl CommonPathScanner {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// 扫描目标域名的所有常见路径
    ///
    /// 对每个路径先尝试 https；只要 https 页面找到了地址就跳过 http，
    /// 否则再尝试 http。
    pub async fn scan(&self, domain: &TargetDomain) -> ScanOutcome {
        info!("Scraping common pages on {}", domain);
        let mut outcome = ScanOutcome::default();

        for path in COMMON_PATHS {
            for scheme in SCHEMES {
                let url = format!("{}://{}{}", scheme, domain, path);
                outcome.visited.insert(url.clone());

                let found = match self.fetcher.fetch(&url).await {
                    Ok(page) => {
                        outcome.pages_fetched += 1;
                        extract_emails(&page.content, domain)
                    }
                    Err(e) => {
                        outcome.pages_failed += 1;
                        if e.is_expected_miss() {
                            debug!("Common page {} unavailable: {}", url, e);
                        } else {
                            info!("Failed to fetch {}: {}", url, e);
                        }
                        HashSet::new()
                    }
                };

                if !found.is_empty() {
                    info!("Found on {}: {:?}", url, found);
                    outcome.emails.extend(found);
                    break;
                }
            }
        }

        outcome
    }
}
