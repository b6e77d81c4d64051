use harvestrs::config::settings::Settings;
use harvestrs::infrastructure::search::DuckDuckGoSearchEngine;

/// 构造一个 DuckDuckGo HTML 结果页
///
/// 每个元素为 `(title, href, snippet)`
pub fn results_page(results: &[(&str, &str, &str)]) -> String {
    let items: String = results
        .iter()
        .map(|(title, href, snippet)| {
            format!(
                r#"<div class="result results_links web-result">
  <h2 class="result__title"><a rel="nofollow" class="result__a" href="{}">{}</a></h2>
  <a class="result__snippet" href="{}">{}</a>
</div>"#,
                href, title, href, snippet
            )
        })
        .collect();
    format!(
        r#"<!DOCTYPE html><html><body><div class="results">{}</div></body></html>"#,
        items
    )
}

/// 指向模拟服务器的搜索引擎
pub fn engine_for(mock_base: &str) -> DuckDuckGoSearchEngine {
    let mut settings = Settings::default();
    settings.search.endpoint = format!("{}/html/", mock_base);
    settings.http.timeout_secs = 5;
    DuckDuckGoSearchEngine::new(&settings.search, &settings.http).unwrap()
}
