// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::target_domain::TargetDomain;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}").expect("email pattern is valid")
});

/// 从任意文本中提取属于目标域名的邮箱地址
///
/// 所有匹配先转为小写，只保留以 `@{domain}` 结尾的地址，
/// 因此子域名和其他域名上的地址都会被丢弃。纯函数，不会失败。
pub fn extract_emails(text: &str, domain: &TargetDomain) -> HashSet<String> {
    let suffix = domain.email_suffix();

    EMAIL_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .filter(|email| email.ends_with(&suffix))
        .collect()
}
