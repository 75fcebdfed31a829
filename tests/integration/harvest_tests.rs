//! Integration tests for the harvester
//!
//! These tests use wiremock to stand in for the shop and tempfile for the
//! export directory, and drive full harvest runs end-to-end.

use rand::rngs::StdRng;
use rand::SeedableRng;
use shop_harvest::config::{Config, ExportPolicy, SamplingStrategy};
use shop_harvest::crawler::Harvester;
use shop_harvest::output::{ExportOutcome, LINE_ENDING};
use shop_harvest::HarvestError;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PRODUCTS_PER_PAGE: usize = 2;

/// Creates a test configuration pointing at the mock shop
fn create_test_config(base_url: &str, directory: &Path, policy: ExportPolicy) -> Config {
    let mut config = Config::default();
    config.site.base_url = base_url.to_string();
    config.output.directory = directory.to_string_lossy().into_owned();
    config.output.export_policy = policy;
    config
}

fn export_dir(temp: &TempDir) -> PathBuf {
    temp.path().join("export-data")
}

fn product_card(page: u32, index: usize) -> String {
    format!(
        r#"<li class="product">
            <a href="https://shop.test/product/p{page}-{index}/" class="woocommerce-LoopProduct-link woocommerce-loop-product__link">
                <img src="https://shop.test/img/p{page}-{index}.png">
                <h2 class="woocommerce-loop-product__title">P{page}-{index}</h2>
                <span class="price"><span class="woocommerce-Price-currencySymbol">£</span>{page}.0{index}</span>
            </a>
        </li>"#
    )
}

fn listing_page(page: u32, total_pages: u32) -> String {
    let cards: String = (0..PRODUCTS_PER_PAGE).map(|i| product_card(page, i)).collect();
    format!(
        r#"<html><body>
            <ul class="products">{cards}</ul>
            <nav class="woocommerce-pagination"><ul class="page-numbers">
                <li><span aria-current="page" class="page-numbers current">{page}</span></li>
                <li><a class="page-numbers" href="/shop/page/{total_pages}/">{total_pages}</a></li>
                <li><a class="next page-numbers" href="/shop/page/2/">&rarr;</a></li>
            </ul></nav>
        </body></html>"#
    )
}

/// Mounts the discovery page and every numbered page, each expected once
async fn mount_shop(server: &MockServer, total_pages: u32) {
    Mock::given(method("GET"))
        .and(path("/shop/page/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(1, total_pages)))
        .expect(1)
        .mount(server)
        .await;

    for page in 1..=total_pages {
        Mock::given(method("GET"))
            .and(path(format!("/shop/page/{}", page)))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(listing_page(page, total_pages)),
            )
            .expect(1)
            .mount(server)
            .await;
    }
}

fn harvester(config: Config, format: Option<&str>) -> Harvester<StdRng> {
    Harvester::with_rng(
        config,
        format.map(str::to_string),
        StdRng::seed_from_u64(2024),
    )
    .expect("Failed to create harvester")
}

#[tokio::test]
async fn test_full_harvest_json_export() {
    let server = MockServer::start().await;
    mount_shop(&server, 4).await;
    let temp = TempDir::new().unwrap();

    let config = create_test_config(&server.uri(), &export_dir(&temp), ExportPolicy::EveryPage);
    let mut harvester = harvester(config, Some("json"));
    let summary = harvester.run().await.expect("Harvest failed");

    assert_eq!(summary.total_pages, 4);
    assert_eq!(summary.pages_visited, 4);
    assert_eq!(summary.pages_failed, 0);
    assert_eq!(summary.products, 4 * PRODUCTS_PER_PAGE);
    assert!(summary.draws >= 4);

    let contents = std::fs::read_to_string(export_dir(&temp).join("product.json")).unwrap();
    let records: Vec<serde_json::Value> = serde_json::from_str(&contents).unwrap();
    assert_eq!(records.len(), 4 * PRODUCTS_PER_PAGE);

    let mut names: Vec<_> = records
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    names.sort();
    let mut expected: Vec<_> = (1..=4)
        .flat_map(|page| (0..PRODUCTS_PER_PAGE).map(move |i| format!("P{}-{}", page, i)))
        .collect();
    expected.sort();
    assert_eq!(names, expected);

    let first = records
        .iter()
        .find(|r| r["name"] == "P3-1")
        .expect("P3-1 missing");
    assert_eq!(first["image"], "https://shop.test/img/p3-1.png");
    assert_eq!(first["url"], "https://shop.test/product/p3-1/");
    assert_eq!(first["price"], "£3.01");
}

#[tokio::test]
async fn test_full_harvest_csv_export_at_run_end() {
    let server = MockServer::start().await;
    mount_shop(&server, 3).await;
    let temp = TempDir::new().unwrap();

    let mut config = create_test_config(&server.uri(), &export_dir(&temp), ExportPolicy::RunEnd);
    config.output.sampling = SamplingStrategy::Shuffled;
    let mut harvester = harvester(config, Some("CSV"));
    let summary = harvester.run().await.expect("Harvest failed");

    assert_eq!(summary.draws, 3);

    let contents = std::fs::read_to_string(export_dir(&temp).join("product.csv")).unwrap();
    let lines: Vec<_> = contents.split(LINE_ENDING).collect();
    assert_eq!(lines[0], "name,image,url,price");
    assert_eq!(lines.len(), 1 + 3 * PRODUCTS_PER_PAGE);
    assert!(lines.contains(
        &"P2-0,https://shop.test/img/p2-0.png,https://shop.test/product/p2-0/,£2.00"
    ));
}

#[tokio::test]
async fn test_failed_page_does_not_stop_harvest() {
    let server = MockServer::start().await;
    let total_pages = 3;

    Mock::given(method("GET"))
        .and(path("/shop/page/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(1, total_pages)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/shop/page/2"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    for page in [1, 3] {
        Mock::given(method("GET"))
            .and(path(format!("/shop/page/{}", page)))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(listing_page(page, total_pages)),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let temp = TempDir::new().unwrap();
    let config = create_test_config(&server.uri(), &export_dir(&temp), ExportPolicy::EveryPage);
    let mut harvester = harvester(config, Some("json"));
    let summary = harvester.run().await.expect("Harvest failed");

    assert_eq!(summary.pages_visited, 3);
    assert_eq!(summary.pages_failed, 1);
    assert_eq!(summary.products, 2 * PRODUCTS_PER_PAGE);
    assert!(harvester
        .store()
        .products()
        .iter()
        .all(|p| !p.name.starts_with("P2-")));
}

#[tokio::test]
async fn test_page_count_failure_aborts_run() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shop/page/1/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let config = create_test_config(&server.uri(), &export_dir(&temp), ExportPolicy::EveryPage);
    let result = harvester(config, Some("json")).run().await;

    assert!(matches!(
        result,
        Err(HarvestError::HttpStatus { status: 404, .. })
    ));
    assert!(!export_dir(&temp).exists());
}

#[tokio::test]
async fn test_missing_pagination_aborts_run() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shop/page/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let config = create_test_config(&server.uri(), &export_dir(&temp), ExportPolicy::EveryPage);
    let result = harvester(config, Some("json")).run().await;

    assert!(matches!(result, Err(HarvestError::NoPagination { .. })));
}

#[tokio::test]
async fn test_negative_page_count_visits_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shop/page/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body><ul class="page-numbers"><li><span class="page-numbers">-3</span></li></ul></body></html>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let config = create_test_config(&server.uri(), &export_dir(&temp), ExportPolicy::EveryPage);
    let summary = harvester(config, Some("json"))
        .run()
        .await
        .expect("Harvest failed");

    assert_eq!(summary.total_pages, 0);
    assert_eq!(summary.pages_visited, 0);
    assert_eq!(summary.draws, 0);
    assert_eq!(summary.products, 0);
    assert!(!export_dir(&temp).exists());
}

#[tokio::test]
async fn test_harvest_without_format_writes_nothing() {
    let server = MockServer::start().await;
    mount_shop(&server, 2).await;
    let temp = TempDir::new().unwrap();

    let config = create_test_config(&server.uri(), &export_dir(&temp), ExportPolicy::EveryPage);
    let mut harvester = harvester(config, None);
    let summary = harvester.run().await.expect("Harvest failed");

    assert_eq!(summary.products, 2 * PRODUCTS_PER_PAGE);
    assert!(!export_dir(&temp).exists());
}

#[tokio::test]
async fn test_harvest_with_invalid_format_writes_nothing() {
    let server = MockServer::start().await;
    mount_shop(&server, 2).await;
    let temp = TempDir::new().unwrap();

    let config = create_test_config(&server.uri(), &export_dir(&temp), ExportPolicy::EveryPage);
    let mut harvester = harvester(config, Some("xml"));
    harvester.run().await.expect("Harvest failed");

    assert_eq!(
        harvester.export().await,
        ExportOutcome::InvalidFormat("xml".to_string())
    );
    assert!(!export_dir(&temp).exists());
}

#[tokio::test]
async fn test_every_page_policy_exports_after_each_page() {
    let server = MockServer::start().await;
    for page in [1, 2] {
        Mock::given(method("GET"))
            .and(path(format!("/shop/page/{}", page)))
            .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(page, 2)))
            .mount(&server)
            .await;
    }
    let temp = TempDir::new().unwrap();
    let json_path = export_dir(&temp).join("product.json");

    let config = create_test_config(&server.uri(), &export_dir(&temp), ExportPolicy::EveryPage);
    let mut harvester = harvester(config, Some("json"));

    assert!(harvester.process_page(2).await);
    let snapshot: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(snapshot.len(), PRODUCTS_PER_PAGE);
    assert_eq!(snapshot[0]["name"], "P2-0");

    assert!(harvester.process_page(1).await);
    let snapshot: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(snapshot.len(), 2 * PRODUCTS_PER_PAGE);
    assert_eq!(snapshot[PRODUCTS_PER_PAGE]["name"], "P1-0");
}

#[tokio::test]
async fn test_run_end_policy_defers_export() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shop/page/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(1, 1)))
        .mount(&server)
        .await;
    let temp = TempDir::new().unwrap();

    let config = create_test_config(&server.uri(), &export_dir(&temp), ExportPolicy::RunEnd);
    let mut harvester = harvester(config, Some("json"));

    assert!(harvester.process_page(1).await);
    assert_eq!(harvester.store().len(), PRODUCTS_PER_PAGE);
    assert!(!export_dir(&temp).exists());
}
