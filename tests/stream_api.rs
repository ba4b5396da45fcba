//! Streaming contract: the feed itself, the relayed filter, and failure
//! mapping, over real sockets.

mod common;

use std::time::{Duration, Instant};

fn employee_line(id: u64, age: u8) -> String {
    format!(
        "{{\"id\":{id},\"name\":\"员工{id}\",\"age\":{age},\"salary\":3000,\"phoneNumber\":\"13800000000\",\"address\":\"建国路\"}}"
    )
}

#[tokio::test]
async fn test_feed_streams_numbered_records() {
    let service = common::spawn_service(|config| {
        config.feed.interval_ms = 25;
    })
    .await;

    let response = reqwest::get(service.url("/server")).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"],
        "application/stream+json"
    );

    let records = common::read_json_lines(response, 3).await;
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record["id"], i as u64);

        let age = record["age"].as_u64().unwrap();
        assert!((20..50).contains(&age), "age out of bounds: {age}");

        let salary = record["salary"].as_u64().unwrap();
        assert_eq!(salary % 1000, 0);

        assert!(record["name"].is_string());
        assert!(record["phoneNumber"].is_string());
        assert!(record["address"].is_string());
    }

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_feed_emits_the_first_record_without_waiting() {
    let service = common::spawn_service(|config| {
        config.feed.interval_ms = 60_000;
    })
    .await;

    let start = Instant::now();
    let response = reqwest::get(service.url("/server")).await.unwrap();
    let records = common::read_json_lines(response, 1).await;

    assert_eq!(records[0]["id"], 0);
    assert!(start.elapsed() < Duration::from_secs(5));

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_relay_drops_records_at_or_above_the_age_limit() {
    let feed_addr = common::start_scripted_feed(vec![
        employee_line(0, 21),
        employee_line(1, 40),
        employee_line(2, 24),
        employee_line(3, 25),
        employee_line(4, 22),
    ])
    .await;

    let service = common::spawn_service(|config| {
        config.upstream.base_url = format!("http://{}/server", feed_addr);
    })
    .await;

    let response = reqwest::get(service.url("/client")).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"],
        "application/stream+json"
    );

    let body = response.text().await.unwrap();
    let survivors: Vec<serde_json::Value> = body
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let ids: Vec<u64> = survivors.iter().map(|r| r["id"].as_u64().unwrap()).collect();
    let ages: Vec<u64> = survivors.iter().map(|r| r["age"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![0, 2, 4]);
    assert_eq!(ages, vec![21, 24, 22]);

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_relay_honors_a_configured_age_limit() {
    let feed_addr = common::start_scripted_feed(vec![
        employee_line(0, 21),
        employee_line(1, 40),
        employee_line(2, 24),
    ])
    .await;

    let service = common::spawn_service(|config| {
        config.upstream.base_url = format!("http://{}/server", feed_addr);
        config.upstream.age_limit = 30;
    })
    .await;

    let body = reqwest::get(service.url("/client"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    let ids: Vec<u64> = body
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap()["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![0, 2]);

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_relay_stream_aborts_after_a_malformed_upstream_record() {
    use futures_util::StreamExt;

    let feed_addr = common::start_scripted_feed(vec![
        employee_line(0, 21),
        employee_line(1, 22),
        "{\"id\":2,\"age\":".to_string(),
        employee_line(3, 23),
    ])
    .await;

    let service = common::spawn_service(|config| {
        config.upstream.base_url = format!("http://{}/server", feed_addr);
    })
    .await;

    let response = reqwest::get(service.url("/client")).await.unwrap();
    assert_eq!(response.status(), 200);

    let mut stream = response.bytes_stream();
    let mut delivered = Vec::new();
    let mut aborted = false;
    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(bytes) => delivered.extend_from_slice(&bytes),
            Err(_) => {
                aborted = true;
                break;
            }
        }
    }
    assert!(aborted, "body should end in a transport error, not a clean close");

    // Records before the bad line were already forwarded; the record after
    // it never is.
    let ids: Vec<u64> = String::from_utf8(delivered)
        .unwrap()
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap()["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![0, 1]);

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_relay_stream_maps_a_dead_upstream_to_bad_gateway() {
    let dead = common::unused_addr().await;
    let service = common::spawn_service(|config| {
        config.upstream.base_url = format!("http://{}/server", dead);
    })
    .await;

    let response = reqwest::get(service.url("/client")).await.unwrap();

    assert_eq!(response.status(), 502);
    assert_eq!(response.text().await.unwrap(), "upstream request failed");

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_relay_end_to_end_against_its_own_feed() {
    let service = common::spawn_service(|config| {
        config.feed.interval_ms = 10;
    })
    .await;

    let response = reqwest::get(service.url("/client")).await.unwrap();
    assert_eq!(response.status(), 200);

    let records = common::read_json_lines(response, 2).await;
    let limit = employee_relay::config::UpstreamConfig::default().age_limit as u64;
    for record in &records {
        assert!(record["age"].as_u64().unwrap() < limit);
    }
    assert!(records[0]["id"].as_u64().unwrap() < records[1]["id"].as_u64().unwrap());

    service.shutdown.trigger();
}
