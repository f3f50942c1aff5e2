//! Resolver behavior against mock time endpoints: local clock preference,
//! endpoint ordering, and the fixed fallback.

use std::time::Duration;

use chrono::NaiveDate;
use httpmock::prelude::*;
use salshomar::core::today::CurrentDateResolver;
use salshomar::{Clock, DateResolver, DateSource};

struct FixedClock(NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

fn pre_epoch_clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(1969, 7, 20).unwrap())
}

fn resolver(clock: FixedClock, endpoints: Vec<String>) -> CurrentDateResolver<FixedClock> {
    CurrentDateResolver::new(clock, endpoints, Duration::from_secs(3), false).unwrap()
}

#[tokio::test]
async fn test_plausible_clock_never_touches_the_network() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/ip");
        then.status(200)
            .json_body(serde_json::json!({"datetime": "2031-01-01T00:00:00+00:00"}));
    });

    let today = NaiveDate::from_ymd_opt(2025, 10, 18).unwrap();
    let resolved = resolver(FixedClock(today), vec![server.url("/api/ip")])
        .resolve()
        .await;

    mock.assert_hits(0);
    assert_eq!(resolved.date, today);
    assert_eq!(resolved.source, DateSource::Local);
}

#[tokio::test]
async fn test_implausible_clock_with_dead_network_yields_fallback() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/ip");
        then.status(500);
    });

    let resolved = resolver(pre_epoch_clock(), vec![server.url("/api/ip")])
        .resolve()
        .await;

    assert_eq!(resolved.date, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    assert_eq!(resolved.source, DateSource::Fallback);
}

#[tokio::test]
async fn test_second_endpoint_wins_when_the_first_fails() {
    let server = MockServer::start();
    let broken = server.mock(|when, then| {
        when.method(GET).path("/broken");
        then.status(503);
    });
    let working = server.mock(|when, then| {
        when.method(GET).path("/working");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "datetime": "2025-10-18T12:34:56.789012+00:00"
            }));
    });

    let resolved = resolver(
        pre_epoch_clock(),
        vec![server.url("/broken"), server.url("/working")],
    )
    .resolve()
    .await;

    broken.assert();
    working.assert();
    assert_eq!(resolved.date, NaiveDate::from_ymd_opt(2025, 10, 18).unwrap());
    assert_eq!(resolved.source, DateSource::Online);
}

#[tokio::test]
async fn test_online_date_is_taken_from_the_first_ten_characters() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/ip");
        then.status(200)
            .json_body(serde_json::json!({"datetime": "2099-12-31T23:59:59.999999-05:00"}));
    });

    let resolved = resolver(pre_epoch_clock(), vec![server.url("/api/ip")])
        .resolve()
        .await;

    assert_eq!(resolved.date, NaiveDate::from_ymd_opt(2099, 12, 31).unwrap());
    assert_eq!(resolved.source, DateSource::Online);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_swallowed() {
    // Nothing listens on this port; the connection error must not escape.
    let resolved = resolver(
        pre_epoch_clock(),
        vec!["http://127.0.0.1:9/api/ip".to_string()],
    )
    .resolve()
    .await;

    assert_eq!(resolved.source, DateSource::Fallback);
}
