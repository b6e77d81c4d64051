// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::target_domain::TargetDomain;
use std::collections::HashSet;

/// 采集过程的诊断计数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestStats {
    /// 成功获取的页面数
    pub pages_fetched: usize,
    /// 获取失败的页面数
    pub pages_failed: usize,
    /// 已执行的查询数
    pub queries_run: usize,
    /// 返回空结果的查询数（含后端失败）
    pub queries_empty: usize,
    /// 处理过的搜索结果数
    pub results_seen: usize,
    /// 摘要中命中邮箱的结果数
    pub snippet_hits: usize,
}

/// 单个域名的采集结果
#[derive(Debug, Clone)]
pub struct HarvestReport {
    pub domain: TargetDomain,
    pub emails: HashSet<String>,
    pub stats: HarvestStats,
}

impl HarvestReport {
    pub fn new(domain: TargetDomain) -> Self {
        Self {
            domain,
            emails: HashSet::new(),
            stats: HarvestStats::default(),
        }
    }

    /// 合并新发现的地址，返回其中此前未见过的数量
    pub fn merge<I>(&mut self, found: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        found
            .into_iter()
            .filter(|email| self.emails.insert(email.clone()))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    /// 按字典序排列的地址，仅在输出时使用
    pub fn sorted_emails(&self) -> Vec<String> {
        let mut emails: Vec<String> = self.emails.iter().cloned().collect();
        emails.sort();
        emails
    }
}
