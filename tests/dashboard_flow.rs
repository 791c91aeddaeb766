use dexboard::application::sections::TRENDING_MIN_VOLUME_USD;
use dexboard::application::{Dashboard, DashboardSettings, Section, SectionOutcome};
use dexboard::domain::errors::ProviderError;
use dexboard::domain::market::TradingPairRecord;
use dexboard::domain::slots::DisplaySlot;
use dexboard::infrastructure::mock::sample_pair;
use dexboard::infrastructure::observability::Metrics;
use dexboard::infrastructure::{InMemoryRenderTarget, MockMarketDataProvider};
use std::sync::Arc;
use std::time::Duration;

const USDC: (&str, &str) = ("USD Coin", "USDC");

fn listing(count: usize) -> Vec<TradingPairRecord> {
    (0..count)
        .map(|i| {
            let name = format!("Token {i}");
            let symbol = format!("T{i}");
            // Liquidity and buys deliberately out of provider order
            let liquidity = ((i * 7919) % 97) as f64 * 1_000.0;
            let volume = if i % 2 == 0 { 250_000.0 } else { 40_000.0 };
            let buys = ((i * 31) % 17) as u64;
            sample_pair((&name, &symbol), USDC, "1.25", liquidity, volume, buys)
        })
        .collect()
}

fn full_provider() -> MockMarketDataProvider {
    MockMarketDataProvider::new()
        .with_search("solana", listing(12))
        .with_search("trending", listing(12))
        .with_search("top", listing(12))
        .with_search("volume", listing(12))
}

fn dashboard(provider: MockMarketDataProvider, target: &InMemoryRenderTarget) -> Dashboard {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    Dashboard::new(
        Arc::new(provider),
        Arc::new(target.clone()),
        DashboardSettings::default(),
    )
}

fn items(fragment: &str) -> Vec<&str> {
    fragment
        .split("<li>")
        .skip(1)
        .filter_map(|s| s.split("</li>").next())
        .collect()
}

/// Test: initialize renders every section into its own slot, each bounded by its cap
#[tokio::test]
async fn test_initialize_renders_all_sections() {
    let target = InMemoryRenderTarget::new();
    let provider = full_provider();
    let report = dashboard(provider.clone(), &target).initialize().await;

    assert!(report.failed().is_empty());
    for section in Section::ALL {
        let fragment = target
            .content(section.slot())
            .unwrap_or_else(|| panic!("{section} not rendered"));
        assert!(items(&fragment).len() <= section.cap(), "{section}");
        assert_eq!(target.write_count(section.slot()), 1);
    }
    assert_eq!(target.content(DisplaySlot::DcaResult), None);

    let mut calls = provider.calls();
    calls.sort();
    assert_eq!(
        calls,
        vec!["search:solana", "search:top", "search:trending", "search:volume"]
    );
}

/// Test: Top Tokens is ordered by liquidity, highest first
#[tokio::test]
async fn test_top_tokens_sorted_by_liquidity() {
    let target = InMemoryRenderTarget::new();
    let pairs = listing(20);
    let mut expected: Vec<f64> = pairs.iter().map(|p| p.liquidity_usd()).collect();
    expected.sort_by(|a, b| b.total_cmp(a));
    expected.truncate(5);

    let board = dashboard(MockMarketDataProvider::new().with_search("top", pairs), &target);
    assert_eq!(
        board.load_top_tokens().await,
        SectionOutcome::Rendered { items: 5 }
    );

    let fragment = target.content(DisplaySlot::Tokens).unwrap();
    let rendered: Vec<f64> = items(&fragment)
        .iter()
        .map(|item| {
            let liquidity = item.split("Liquidity: $").nth(1).unwrap().trim_end_matches(')');
            liquidity.replace(',', "").parse::<f64>().unwrap()
        })
        .collect();

    assert_eq!(rendered, expected);
    assert!(rendered.windows(2).all(|w| w[0] >= w[1]));
}

/// Test: Daily Trends only shows pairs above the volume threshold
#[tokio::test]
async fn test_daily_trends_volume_filter() {
    let target = InMemoryRenderTarget::new();
    let pairs = vec![
        sample_pair(("Quiet", "QT"), USDC, "0.1", 1.0, 99_000.0, 0),
        sample_pair(("Edge", "EDG"), USDC, "0.2", 1.0, TRENDING_MIN_VOLUME_USD, 0),
        sample_pair(("Busy", "BSY"), USDC, "0.3", 1.0, 100_000.01, 0),
        sample_pair(("Hot", "HOT"), USDC, "0.4", 1.0, 5_500_000.0, 0),
    ];

    let board = dashboard(
        MockMarketDataProvider::new().with_search("trending", pairs),
        &target,
    );
    board.load_daily_trends().await;

    assert_eq!(
        target.content(DisplaySlot::Trends).unwrap(),
        "<ul><li>Busy: $0.3 (100,000.01 24h vol)</li><li>Hot: $0.4 (5,500,000 24h vol)</li></ul>"
    );
}

/// Test: Smart Money ranks by 24h buy count and keeps three
#[tokio::test]
async fn test_smart_money_top_buyers() {
    let target = InMemoryRenderTarget::new();
    let pairs = vec![
        sample_pair(("A", "A"), USDC, "1", 0.0, 0.0, 5),
        sample_pair(("B", "B"), USDC, "1", 0.0, 0.0, 50),
        sample_pair(("C", "C"), USDC, "1", 0.0, 0.0, 500),
        sample_pair(("D", "D"), USDC, "1", 0.0, 0.0, 1),
        sample_pair(("E", "E"), USDC, "1", 0.0, 0.0, 5000),
    ];

    let board = dashboard(MockMarketDataProvider::new().with_search("volume", pairs), &target);
    assert_eq!(
        board.load_smart_money().await,
        SectionOutcome::Rendered { items: 3 }
    );

    let fragment = target.content(DisplaySlot::SmartMoney).unwrap();
    assert_eq!(
        items(&fragment),
        vec!["E: 5000 buys (24h)", "C: 500 buys (24h)", "B: 50 buys (24h)"]
    );
}

/// Test: a provider with no pairs renders an empty list, not an error
#[tokio::test]
async fn test_missing_results_render_empty_list() {
    let target = InMemoryRenderTarget::new();
    let report = dashboard(MockMarketDataProvider::new(), &target)
        .initialize()
        .await;

    assert!(report.failed().is_empty());
    assert_eq!(
        report.outcome(Section::TopTokens),
        Some(&SectionOutcome::Rendered { items: 0 })
    );
    assert_eq!(target.content(DisplaySlot::Tokens).unwrap(), "<ul></ul>");
    assert_eq!(
        target.content(DisplaySlot::Overview).unwrap(),
        "<p>Top Solana Pairs:</p><ul></ul>"
    );
}

/// Test: a transport failure in one section leaves every other section intact
#[tokio::test]
async fn test_failure_is_isolated_per_section() {
    let healthy_target = InMemoryRenderTarget::new();
    dashboard(full_provider(), &healthy_target).initialize().await;

    let target = InMemoryRenderTarget::new();
    let metrics = Metrics::new().unwrap();
    let provider = full_provider().with_search_error(
        "top",
        ProviderError::Transport {
            endpoint: "/latest/dex/search?q=top".to_string(),
            reason: "connection reset by peer".to_string(),
        },
    );
    let report = dashboard(provider, &target)
        .with_metrics(metrics.clone())
        .initialize()
        .await;

    assert_eq!(report.failed(), vec![Section::TopTokens]);

    let tokens = target.content(DisplaySlot::Tokens).unwrap();
    assert!(tokens.starts_with("<p class=\"error\">Unable to load Top Tokens:"));
    assert!(tokens.contains("connection reset by peer"));

    for section in Section::ALL {
        if section != Section::TopTokens {
            assert_eq!(
                target.content(section.slot()),
                healthy_target.content(section.slot()),
                "{section}"
            );
        }
    }

    let exposition = metrics.render();
    assert!(exposition.contains("kind=\"transport\""));
    assert!(exposition.contains("outcome=\"failed\",section=\"Top Tokens\"} 1"));
}

/// Test: a stalled provider call is cut off by the request timeout and reported in the slot
#[tokio::test]
async fn test_slow_section_times_out() {
    let target = InMemoryRenderTarget::new();
    let provider = full_provider().with_delay("solana", Duration::from_secs(5));
    let board = Dashboard::new(
        Arc::new(provider),
        Arc::new(target.clone()),
        DashboardSettings {
            request_timeout: Duration::from_millis(50),
            ..Default::default()
        },
    );

    let report = board.initialize().await;

    assert_eq!(report.failed(), vec![Section::Overview]);
    assert_eq!(
        target.content(DisplaySlot::Overview).unwrap(),
        "<p class=\"error\">Unable to load Overview: Service timeout after 50ms</p>"
    );
    assert!(target.content(DisplaySlot::Tokens).unwrap().contains("<li>"));
}

/// Test: malformed provider payloads are reported per section
#[tokio::test]
async fn test_malformed_response_is_reported() {
    let target = InMemoryRenderTarget::new();
    let provider = MockMarketDataProvider::new().with_search_error(
        "solana",
        ProviderError::Malformed {
            endpoint: "/latest/dex/search?q=solana".to_string(),
            reason: "expected value at line 1 column 1".to_string(),
        },
    );

    let outcome = dashboard(provider, &target).load_overview().await;

    assert!(matches!(outcome, SectionOutcome::Failed { ref reason } if reason.contains("Malformed")));
    assert!(
        target
            .content(DisplaySlot::Overview)
            .unwrap()
            .contains("class=\"error\"")
    );
}

/// Test: a record with null fields renders with defaults and does not hide its neighbours
#[tokio::test]
async fn test_null_fields_do_not_drop_the_section() {
    let target = InMemoryRenderTarget::new();
    let pairs: Vec<TradingPairRecord> = serde_json::from_str(
        r#"[
            {"baseToken": {"name": "Wrapped SOL", "symbol": "SOL"},
             "quoteToken": {"name": "USD Coin", "symbol": "USDC"},
             "priceUsd": "142.37",
             "liquidity": {"usd": 18000000}},
            {"baseToken": {"name": null, "symbol": "BONK"},
             "quoteToken": {"name": "Wrapped SOL", "symbol": "SOL"},
             "priceUsd": "0.00002",
             "liquidity": {"usd": 3900000},
             "txns": {"h24": null}},
            {"baseToken": {"name": "Jupiter", "symbol": "JUP"},
             "quoteToken": null,
             "priceUsd": "0.81",
             "liquidity": {"usd": 6100000},
             "txns": {"h24": {"buys": null, "sells": 4}}}
        ]"#,
    )
    .unwrap();

    let board = dashboard(MockMarketDataProvider::new().with_search("top", pairs), &target);
    assert_eq!(
        board.load_top_tokens().await,
        SectionOutcome::Rendered { items: 3 }
    );

    let fragment = target.content(DisplaySlot::Tokens).unwrap();
    assert_eq!(
        items(&fragment),
        vec![
            "Wrapped SOL: $142.37 (Liquidity: $18,000,000)",
            "Jupiter: $0.81 (Liquidity: $6,100,000)",
            ": $0.00002 (Liquidity: $3,900,000)",
        ]
    );
}
