use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` 優先；否則只看本 crate 與 CLI，verbose 時連 HTTP 層一起輸出
pub fn default_filter_directive(verbose: bool) -> &'static str {
    if verbose {
        "taxcloud_client=debug,taxcloud=debug,reqwest=debug,warn"
    } else {
        "taxcloud_client=info,taxcloud=info,warn"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter_directive(verbose)))
}

/// 日誌寫到 stderr，stdout 只留給稅額等結果
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .without_time()
                .compact(),
        )
        .init();
}

/// 每個事件一行 JSON，欄位攤平在最上層
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();
}
