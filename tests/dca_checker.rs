use dexboard::application::dashboard::PAIR_NOT_FOUND_MESSAGE;
use dexboard::application::{Dashboard, DashboardSettings, DcaOutcome};
use dexboard::domain::dca::DcaPlan;
use dexboard::domain::errors::ProviderError;
use dexboard::domain::slots::DisplaySlot;
use dexboard::infrastructure::mock::{DEMO_PAIR_ADDRESS, sample_pair};
use dexboard::infrastructure::{InMemoryRenderTarget, MockMarketDataProvider};
use dexboard::interfaces::HtmlPageTarget;
use std::sync::Arc;

const ADDRESS: &str = "8sLbNZoA1cfnvMJLPfp98ZLAnFSYCFApfJKMbiXNLwxj";

fn board(provider: MockMarketDataProvider, target: &InMemoryRenderTarget) -> Dashboard {
    Dashboard::new(
        Arc::new(provider),
        Arc::new(target.clone()),
        DashboardSettings::default(),
    )
}

/// Test: a found pair at $100 produces the reference simulation
#[tokio::test]
async fn test_dca_simulation_for_found_pair() {
    let target = InMemoryRenderTarget::new();
    let provider = MockMarketDataProvider::new().with_pair(
        ADDRESS,
        sample_pair(("Wrapped SOL", "SOL"), ("USD Coin", "USDC"), "100", 1.0, 1.0, 1),
    );

    let outcome = board(provider.clone(), &target).check_dca(ADDRESS).await;

    let DcaOutcome::Simulated(result) = outcome else {
        panic!("expected a simulation, got {outcome:?}");
    };
    assert_eq!(result.total_invested, 1200.0);
    assert!((result.total_tokens - 17.5976502857).abs() < 1e-9);
    assert!((result.avg_price - 68.1909221127).abs() < 1e-9);

    assert_eq!(
        target.content(DisplaySlot::DcaResult).unwrap(),
        "<p>Total Invested: $1200</p><p>Total Tokens: 17.5977</p><p>Avg Buy Price: $68.19</p><p>Current Price: $100.00</p>"
    );
    assert_eq!(provider.calls(), vec![format!("pair:solana/{ADDRESS}")]);
}

/// Test: unknown pair renders the not-found message and nothing else
#[tokio::test]
async fn test_dca_not_found() {
    let target = InMemoryRenderTarget::new();
    let outcome = board(MockMarketDataProvider::new(), &target)
        .check_dca("DoesNotExist111")
        .await;

    assert_eq!(outcome, DcaOutcome::NotFound);
    assert_eq!(
        target.content(DisplaySlot::DcaResult).unwrap(),
        "Pair not found! Enter a valid Solana pair address."
    );
    assert_eq!(target.writes().len(), 1);
    assert_eq!(PAIR_NOT_FOUND_MESSAGE, "Pair not found! Enter a valid Solana pair address.");
}

/// Test: lookup failures are rendered as an error in the DCA slot
#[tokio::test]
async fn test_dca_lookup_failure() {
    let target = InMemoryRenderTarget::new();
    let provider = MockMarketDataProvider::new().with_pair_error(
        ADDRESS,
        ProviderError::Status {
            endpoint: format!("/latest/dex/pairs/solana/{ADDRESS}"),
            status: 502,
        },
    );

    let outcome = board(provider, &target).check_dca(ADDRESS).await;

    assert!(matches!(outcome, DcaOutcome::Failed { ref reason } if reason.contains("502")));
    assert!(
        target
            .content(DisplaySlot::DcaResult)
            .unwrap()
            .starts_with("<p class=\"error\">Unable to load DCA Checker:")
    );
}

/// Test: the configured chain and plan are used for the lookup and simulation
#[tokio::test]
async fn test_dca_uses_configured_chain_and_plan() {
    let target = InMemoryRenderTarget::new();
    let provider = MockMarketDataProvider::new().with_pair(
        ADDRESS,
        sample_pair(("Ether", "ETH"), ("USD Coin", "USDC"), "2000", 1.0, 1.0, 1),
    );
    let board = Dashboard::new(
        Arc::new(provider.clone()),
        Arc::new(target.clone()),
        DashboardSettings {
            chain: "base".to_string(),
            dca_plan: DcaPlan {
                monthly_investment: 250.0,
                months: 3,
                monthly_decay: 0.0,
            },
            ..Default::default()
        },
    );

    let DcaOutcome::Simulated(result) = board.check_dca(ADDRESS).await else {
        panic!("expected a simulation");
    };

    assert_eq!(result.total_invested, 750.0);
    assert!((result.total_tokens - 0.375).abs() < 1e-12);
    assert!((result.avg_price - 2000.0).abs() < 1e-9);
    assert_eq!(provider.calls(), vec![format!("pair:base/{ADDRESS}")]);
}

/// Test: a plan long enough to drive synthetic prices to zero is refused
#[tokio::test]
async fn test_dca_refuses_non_positive_synthetic_price() {
    let target = InMemoryRenderTarget::new();
    let provider = MockMarketDataProvider::demo();
    let board = Dashboard::new(
        Arc::new(provider),
        Arc::new(target.clone()),
        DashboardSettings {
            dca_plan: DcaPlan {
                months: 36,
                ..Default::default()
            },
            ..Default::default()
        },
    );

    let outcome = board.check_dca(DEMO_PAIR_ADDRESS).await;

    assert!(matches!(outcome, DcaOutcome::Failed { ref reason } if reason.contains("month 20")));
    assert!(
        target
            .content(DisplaySlot::DcaResult)
            .unwrap()
            .starts_with("<p>Cannot simulate DCA:")
    );
}

/// Test: full page pass with the demo provider, the way the binary runs in mock mode
#[test]
fn test_demo_page_end_to_end() {
    let page = Arc::new(HtmlPageTarget::new().with_pair_input(DEMO_PAIR_ADDRESS));
    let board = Dashboard::new(
        Arc::new(MockMarketDataProvider::demo()),
        page.clone(),
        DashboardSettings::default(),
    );

    let (report, dca) = tokio_test::block_on(async {
        let report = board.initialize().await;
        let dca = board.check_dca(DEMO_PAIR_ADDRESS).await;
        (report, dca)
    });

    assert!(report.failed().is_empty());
    assert!(matches!(dca, DcaOutcome::Simulated(_)));

    let html = page.document();
    assert!(html.contains("<div id=\"overview-data\"><p>Top Solana Pairs:</p><ul><li>SOL/USDC: $142.37</li>"));
    assert!(html.contains("<div id=\"tx-data\"><ul><li>SOL/USDC: 10 SOL ($2,000)</li>"));
    assert!(html.contains("<p>Current Price: $142.37</p>"));
}
