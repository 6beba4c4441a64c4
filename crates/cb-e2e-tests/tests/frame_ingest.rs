//! E2E tests for single-frame ingestion and batch decode.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use cb_emissions::{FuelTable, estimate_for_reading};
use helpers::{TestHarness, assert_close};

/// Every supported Mode 01 PID decodes through the HTTP path to the same
/// reading as a direct decoder call.
#[tokio::test]
async fn e2e_supported_pids_match_decoder() {
    let h = TestHarness::new();
    let frames = [
        "41 04 80",
        "41 0B 64",
        "41 0C 1A F8",
        "41 0D 28",
        "41 10 00 64",
        "41 2F FF",
        "41 5E 02 1C",
    ];

    for frame in frames {
        let (status, json) = h.ingest_frame(frame).await;
        assert_eq!(status, StatusCode::OK, "{frame}");

        let direct = cb_obd::decode(frame).unwrap();
        let parsed = &json["parsed"];
        assert_eq!(parsed["pidCode"], direct.pid_code.as_str(), "{frame}");
        assert_eq!(parsed["label"], direct.label.as_str(), "{frame}");
        assert_eq!(parsed["unit"], direct.unit.as_str(), "{frame}");
        assert_close(&parsed["value"], direct.value.unwrap());
    }
}

#[tokio::test]
async fn e2e_reference_frames() {
    let h = TestHarness::new();

    let (_, rpm) = h.ingest_frame("41 0C 1A F8").await;
    assert_eq!(rpm["parsed"]["value"], 1726.0);

    let (_, speed) = h.ingest_frame("41 0D 28").await;
    assert_eq!(speed["parsed"]["value"], 40.0);
    assert_eq!(speed["parsed"]["unit"], "km/h");

    let (_, maf) = h.ingest_frame("41 10 00 64").await;
    assert_eq!(maf["parsed"]["value"], 1.0);
}

/// Fuel-rate frames come back with an estimate equal to calling the
/// estimator on the decoded reading.
#[tokio::test]
async fn e2e_fuel_rate_frame_estimate() {
    let h = TestHarness::new();
    let (status, json) = h
        .post(
            "/api/v1/obd-data",
            json!({"hex_data": "41 5E 02 1C", "fuel_type": "ethanol"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let reading = cb_obd::decode("41 5E 02 1C").unwrap();
    let expected = estimate_for_reading(&FuelTable::default(), &reading, "ethanol").unwrap();
    assert_close(&json["emissions"]["fuel_L_per_hour"], expected.fuel_l_per_hour);
    assert_close(&json["emissions"]["co2_kg_per_hour"], expected.co2_kg_per_hour);
}

#[tokio::test]
async fn e2e_vin_frame() {
    let h = TestHarness::new();
    let (status, json) = h
        .ingest_frame("49 02 01 31 46 41 48 50 33 46 32 38 43 52 31 30 34 36 33 32")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["parsed"]["pidCode"], "0902");
    assert_eq!(json["parsed"]["label"], "VIN");
    assert!(json["parsed"]["value"].is_null());
    assert_eq!(json["parsed"]["text"], "1FAHP3F28CR104632");
    assert!(json["emissions"].is_null());
}

#[tokio::test]
async fn e2e_unsupported_mode_and_pid() {
    let h = TestHarness::new();

    let (status, json) = h.ingest_frame("41 FF 00").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["parsed"]["pidCode"], "01FF");
    assert!(json["parsed"]["value"].is_null());

    let (status, json) = h.ingest_frame("42 0C 1A F8").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["parsed"]["pidCode"], "020C");
    assert!(json["parsed"]["value"].is_null());
}

#[tokio::test]
async fn e2e_batch_decode_is_idempotent() {
    let h = TestHarness::new();
    let body = json!({"frames": ["41 0C 1A F8", "41 0C 1A F8", "41 FF 00", "41 0C"]});

    let (status, first) = h.post("/api/v1/decode", body.clone()).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = h.post("/api/v1/decode", body).await;
    assert_eq!(first, second);

    let outcomes = first.as_array().unwrap();
    assert_eq!(outcomes[0], outcomes[1]);
    assert_eq!(outcomes[2]["ok"], true);
    assert!(outcomes[2]["reading"]["value"].is_null());
    assert_eq!(outcomes[3]["ok"], false);
}
