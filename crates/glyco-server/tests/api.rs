mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::bundled_screening;
use glyco_core::measurement::MeasurementSet;
use glyco_server::state::AppState;

fn router() -> Router {
    glyco_server::app(AppState::new(bundled_screening()))
}

async fn send(req: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = router().oneshot(req).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    (status, headers, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn form_defaults() -> Value {
    serde_json::to_value(MeasurementSet::default()).unwrap()
}

fn submission(name: &str) -> Value {
    json!({ "patient_name": name, "measurements": form_defaults() })
}

async fn assert_bad_request(body: Value) {
    let (status, _, body) = send(post_json("/predict", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let v: Value = serde_json::from_slice(&body).unwrap();
    assert!(v["error"].is_string());
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_reports_classifier() {
    let (status, _, body) = send(get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["status"], "ok");
    assert_eq!(v["classifier"], "logistic");
}

#[tokio::test]
async fn fields_list_all_inputs_in_order() {
    let (status, _, body) = send(get("/fields")).await;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_slice(&body).unwrap();
    let fields = v["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 8);
    assert_eq!(fields[0]["feature"], "pregnancies");
    assert_eq!(fields[1]["spec"]["max"], 300.0);
    assert_eq!(fields[7]["spec"]["min"], 1.0);
    assert_eq!(v["reference"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn guide_has_features_and_tips() {
    let (status, _, body) = send(get("/guide")).await;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["features"].as_array().unwrap().len(), 8);
    assert!(!v["tips"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn predict_high_risk() {
    let (status, _, body) = send(post_json(
        "/predict",
        json!({
            "patient_name": "Jane Doe",
            "measurements": {
                "pregnancies": 6, "glucose": 190, "blood_pressure": 72,
                "skin_thickness": 35, "insulin": 80, "bmi": 40,
                "diabetes_pedigree": 1.2, "age": 55
            }
        }),
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["label"], "positive");
    assert_eq!(v["risk_level"], "HIGH RISK");
    assert_eq!(v["headline"], "Jane Doe is at HIGH RISK for Diabetes");
    assert!(v["warning"].is_string());
    assert_eq!(v["report_filename"], "Jane_Doe_diabetes_report.pdf");

    let comparison = v["comparison"].as_array().unwrap();
    let metrics: Vec<_> = comparison.iter().map(|r| r["metric"].as_str().unwrap()).collect();
    assert_eq!(metrics, ["Glucose", "Blood Pressure", "BMI", "Insulin"]);
    assert_eq!(comparison[0]["your_value"], 190.0);
    assert_eq!(comparison[0]["optimal_value"], 85.0);
}

#[tokio::test]
async fn predict_defaults_are_low_risk() {
    let (status, _, body) = send(post_json("/predict", submission("Sam"))).await;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["label"], "negative");
    assert!(v["warning"].is_null());
}

#[tokio::test]
async fn predict_rejects_empty_name() {
    let (status, _, body) = send(post_json("/predict", submission("  "))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let v: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["error"], "Please enter patient name");
}

#[tokio::test]
async fn report_download_is_pdf_attachment() {
    let (status, headers, body) =
        send(post_json("/report", submission("Jane Doe"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"Jane_Doe_diabetes_report.pdf\""
    );
    assert_eq!(&body[0..4], b"%PDF");
}

#[tokio::test]
async fn report_download_as_docx() {
    let (status, headers, body) = send(post_json(
        "/report?format=docx",
        submission("Jane Doe"),
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"Jane_Doe_diabetes_report.docx\""
    );
    assert_eq!(&body[0..2], b"PK");
}

#[tokio::test]
async fn report_rejects_empty_name() {
    let (status, _, _) = send(post_json("/report", submission(""))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn bmi_calculator() {
    let (status, _, body) = send(post_json(
        "/calculators/bmi",
        json!({ "weight_kg": 70.0, "height_cm": 170.0 }),
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["display"], "24.2");
    assert_eq!(v["category"], "normal_weight");
    assert_eq!(v["category_label"], "Normal Weight");
}

#[tokio::test]
async fn bmi_calculator_rejects_out_of_range() {
    let (status, _, _) = send(post_json(
        "/calculators/bmi",
        json!({ "weight_kg": 0.0, "height_cm": 170.0 }),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn pedigree_calculator() {
    let (status, _, body) = send(post_json(
        "/calculators/pedigree",
        json!({ "parents": "both_parents", "siblings": 10, "grandparents": "two_or_more" }),
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["score"], 2.5);
    assert_eq!(v["display"], "2.50");
    assert_eq!(v["risk"], "high");
}

#[tokio::test]
async fn pedigree_rejects_unknown_choice() {
    let (status, _, _) = send(post_json(
        "/calculators/pedigree",
        json!({ "parents": "three", "siblings": 0, "grandparents": "none" }),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn predict_requires_measurements() {
    assert_bad_request(json!({ "patient_name": "Jane" })).await;
}

#[tokio::test]
async fn predict_rejects_omitted_field() {
    let mut measurements = form_defaults();
    measurements.as_object_mut().unwrap().remove("glucose");
    assert_bad_request(json!({ "patient_name": "Jane", "measurements": measurements })).await;
}

#[tokio::test]
async fn predict_rejects_misspelled_field() {
    let mut measurements = form_defaults();
    let obj = measurements.as_object_mut().unwrap();
    obj.remove("glucose");
    obj.insert("gluclose".to_string(), json!(190));
    assert_bad_request(json!({ "patient_name": "Jane", "measurements": measurements })).await;
}

#[tokio::test]
async fn predict_rejects_non_numeric_value() {
    let mut measurements = form_defaults();
    measurements["glucose"] = json!("abc");
    assert_bad_request(json!({ "patient_name": "Jane", "measurements": measurements })).await;
}

#[tokio::test]
async fn report_rejects_malformed_body_with_json_error() {
    let req = Request::builder()
        .method("POST")
        .uri("/report")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let (status, headers, body) = send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    let v: Value = serde_json::from_slice(&body).unwrap();
    assert!(v["error"].is_string());
}
