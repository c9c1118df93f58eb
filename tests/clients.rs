use serde_json::{Value, json};
use vacancy_stats::clients::{HeadHunterConfig, SuperJobConfig};
use vacancy_stats::{Error, HeadHunterClient, PaginatedSource, StatsPipeline, SuperJobClient};
use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const APP_KEY: &str = "v3.test.key";

fn headhunter(base_url: String, max_pages: usize) -> HeadHunterClient {
    HeadHunterClient::new(HeadHunterConfig {
        base_url,
        max_pages,
        ..Default::default()
    })
    .expect("build HeadHunter client")
}

fn superjob(base_url: String) -> SuperJobClient {
    SuperJobClient::new(SuperJobConfig {
        base_url,
        app_key: APP_KEY.to_string(),
        ..Default::default()
    })
    .expect("build SuperJob client")
}

fn hh_item(from: Value, to: Value, currency: &str) -> Value {
    json!({
        "id": "93535146",
        "name": "Backend developer",
        "salary": { "from": from, "to": to, "currency": currency, "gross": false }
    })
}

fn sj_object(payment_from: u64, payment_to: u64) -> Value {
    json!({
        "id": 46731221,
        "profession": "Python-разработчик",
        "payment_from": payment_from,
        "payment_to": payment_to,
        "currency": "rub"
    })
}

#[tokio::test]
async fn headhunter_walks_pages_until_last() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vacancies"))
        .and(header("user-agent", concat!("vacancy-stats/", env!("CARGO_PKG_VERSION"))))
        .and(query_param("text", "rust"))
        .and(query_param("page", "0"))
        .and(query_param("per_page", "100"))
        .and(query_param("area", "113"))
        .and(query_param("only_with_salary", "true"))
        .and(query_param("period", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "found": 3,
            "pages": 2,
            "page": 0,
            "per_page": 100,
            "items": [
                hh_item(json!(100000), json!(200000), "RUR"),
                hh_item(json!(null), json!(null), "RUR")
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/vacancies"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "found": 4,
            "pages": 2,
            "page": 1,
            "per_page": 100,
            "items": [ { "id": "1", "name": "Intern", "salary": null } ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = server.uri();
    let result = tokio::task::spawn_blocking(move || headhunter(base_url, 25).fetch_all("rust"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result.found, 3);
    assert_eq!(result.items.len(), 3);
    assert!(result.items[2].salary.is_none());
}

#[tokio::test]
async fn headhunter_respects_page_cap() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vacancies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "found": 5000,
            "pages": 20,
            "items": [ hh_item(json!(150000), json!(null), "RUR") ]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let base_url = server.uri();
    let result = tokio::task::spawn_blocking(move || headhunter(base_url, 2).fetch_all("java"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result.found, 5000);
    assert_eq!(result.items.len(), 2);
}

#[tokio::test]
async fn headhunter_stops_on_empty_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vacancies"))
        .and(header_exists("user-agent"))
        .and(query_param("text", "cobol"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "found": 0,
            "pages": 0,
            "items": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = server.uri();
    let result = tokio::task::spawn_blocking(move || headhunter(base_url, 25).fetch_all("cobol"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result.found, 0);
    assert!(result.items.is_empty());
}

#[tokio::test]
async fn headhunter_rejects_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vacancies"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = server.uri();
    let err = tokio::task::spawn_blocking(move || headhunter(base_url, 25).fetch_all("java"))
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, Error::Http(_)), "expected decode error, got {err:?}");
}

#[tokio::test]
async fn superjob_sends_app_key_and_follows_more_flag() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2.0/vacancies/"))
        .and(header("X-Api-App-Id", APP_KEY))
        .and(query_param("keyword", "python"))
        .and(query_param("catalogues", "Разработка, программирование"))
        .and(query_param("town", "4"))
        .and(query_param("count", "50"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 3,
            "more": true,
            "objects": [ sj_object(100000, 200000), sj_object(0, 0) ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/2.0/vacancies/"))
        .and(header("X-Api-App-Id", APP_KEY))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 3,
            "more": false,
            "objects": [ sj_object(0, 250000) ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = server.uri();
    let result = tokio::task::spawn_blocking(move || superjob(base_url).fetch_all("python"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result.found, 3);
    assert_eq!(result.items.len(), 3);
    assert_eq!(result.items[2].payment_to, Some(250000.0));
}

#[tokio::test]
async fn http_errors_are_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2.0/vacancies/"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "Invalid app_key" }
        })))
        .mount(&server)
        .await;

    let base_url = server.uri();
    let err = tokio::task::spawn_blocking(move || superjob(base_url).fetch_all("java"))
        .await
        .unwrap()
        .unwrap_err();

    match err {
        Error::Status { status, url } => {
            assert_eq!(status.as_u16(), 403);
            assert!(url.contains("/2.0/vacancies/"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn superjob_pipeline_renders_table() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2.0/vacancies/"))
        .and(query_param("keyword", "python"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 42,
            "more": false,
            "objects": [ sj_object(100000, 200000), sj_object(0, 0), sj_object(0, 250000) ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/2.0/vacancies/"))
        .and(query_param("keyword", "go"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 0,
            "more": false,
            "objects": []
        })))
        .mount(&server)
        .await;

    let base_url = server.uri();
    let table = tokio::task::spawn_blocking(move || {
        StatsPipeline::new(["python", "go"])
            .collect(&superjob(base_url), "SuperJob Moscow")
            .map(|stats| stats.render())
    })
    .await
    .unwrap()
    .unwrap();

    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("+SuperJob Moscow-"));
    assert!(lines[1].contains("Вакансий обработано"));
    assert_eq!(
        lines[3],
        "| python                | 42               | 2                   | 175000           |"
    );
    assert_eq!(
        lines[4],
        "| go                    | 0                | 0                   | 0                |"
    );
}
