//! End-to-end application intake over the in-memory app.

mod support;

use actix_web::test;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use support::{build_app, in_memory_state, read_response};

#[fixture]
fn application() -> Value {
    json!({
        "amount": 75000.25,
        "purpose": "Working capital",
        "companyName": "Acme Ltd",
        "ownerName": "Ada Lovelace",
        "yearsInOperation": 4,
        "annualRevenue": 480000,
        "contactNumber": "+44 113 496 0000",
        "businessType": "Manufacturing",
        "location": "Leeds"
    })
}

fn with(mut body: Value, key: &str, value: Value) -> Value {
    body[key] = value;
    body
}

#[rstest]
#[actix_web::test]
async fn submitted_application_is_stored_with_defaults(application: Value) {
    let app = test::init_service(build_app(in_memory_state())).await;

    let req = test::TestRequest::post()
        .uri("/api/applications")
        .set_json(application)
        .to_request();
    let (status, trace_id, created) = read_response(test::call_service(&app, req).await).await;
    assert_eq!(status, 201);
    assert!(trace_id.is_some());
    assert_eq!(created["status"], "Under Review");
    assert_eq!(created["amount"].to_string(), "75000.25");
    assert_eq!(created["annualRevenue"].to_string(), "480000");
    assert_eq!(created["yearsInOperation"], 4);
    assert_eq!(created["createdAt"], "2026-01-05T09:00:00Z");

    let id = created["id"].as_str().expect("id string");
    let req = test::TestRequest::get()
        .uri(&format!("/api/applications/{id}"))
        .to_request();
    let (status, _, fetched) = read_response(test::call_service(&app, req).await).await;
    assert_eq!(status, 200);
    assert_eq!(fetched, created);
}

#[rstest]
#[actix_web::test]
async fn listing_is_newest_first(application: Value) {
    let app = test::init_service(build_app(in_memory_state())).await;
    for name in ["A", "B", "C"] {
        let req = test::TestRequest::post()
            .uri("/api/applications")
            .set_json(with(application.clone(), "companyName", json!(name)))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status().as_u16(), 201);
    }

    let req = test::TestRequest::get().uri("/api/applications").to_request();
    let (status, _, body) = read_response(test::call_service(&app, req).await).await;
    assert_eq!(status, 200);
    let names: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|item| item["companyName"].as_str())
        .collect();
    assert_eq!(names, ["C", "B", "A"]);
}

#[rstest]
#[actix_web::test]
async fn explicit_status_is_kept(application: Value) {
    let app = test::init_service(build_app(in_memory_state())).await;
    let req = test::TestRequest::post()
        .uri("/api/applications")
        .set_json(with(application, "status", json!("Approved")))
        .to_request();
    let (status, _, body) = read_response(test::call_service(&app, req).await).await;
    assert_eq!(status, 201);
    assert_eq!(body["status"], "Approved");
}

#[rstest]
#[case("amount", json!(-1))]
#[case("annualRevenue", json!(-0.01))]
#[case("yearsInOperation", json!(-2))]
#[case("amount", json!("lots"))]
#[case("yearsInOperation", json!(3_000_000_000_u64))]
#[actix_web::test]
async fn invalid_values_are_rejected(
    application: Value,
    #[case] field: &str,
    #[case] value: Value,
) {
    let app = test::init_service(build_app(in_memory_state())).await;
    let req = test::TestRequest::post()
        .uri("/api/applications")
        .set_json(with(application, field, value))
        .to_request();
    let (status, _, body) = read_response(test::call_service(&app, req).await).await;
    assert_eq!(status, 400);
    assert!(body["message"].is_string());

    let req = test::TestRequest::get().uri("/api/applications").to_request();
    let (_, _, listed) = read_response(test::call_service(&app, req).await).await;
    assert_eq!(listed, json!([]));
}

#[rstest]
#[case("1234567890123.456789")]
#[case("0.125")]
#[case("79228162514264337593543950335")]
#[actix_web::test]
async fn monetary_values_keep_every_digit(application: Value, #[case] exact: &str) {
    let app = test::init_service(build_app(in_memory_state())).await;
    let amount = Value::Number(exact.parse().expect("decimal literal"));
    let req = test::TestRequest::post()
        .uri("/api/applications")
        .set_json(with(with(application, "amount", amount.clone()), "annualRevenue", amount))
        .to_request();
    let (status, _, created) = read_response(test::call_service(&app, req).await).await;
    assert_eq!(status, 201);
    assert_eq!(created["amount"].to_string(), exact);
    assert_eq!(created["annualRevenue"].to_string(), exact);

    let req = test::TestRequest::get().uri("/api/applications").to_request();
    let (_, _, listed) = read_response(test::call_service(&app, req).await).await;
    assert_eq!(listed[0]["amount"].to_string(), exact);
    assert_eq!(listed[0]["annualRevenue"].to_string(), exact);
}

#[rstest]
#[actix_web::test]
async fn partial_bodies_store_empty_free_text(application: Value) {
    let app = test::init_service(build_app(in_memory_state())).await;
    let mut body = application;
    let fields = body.as_object_mut().expect("object");
    for field in ["location", "purpose", "contactNumber"] {
        fields.remove(field);
    }
    fields.insert("ownerName".to_owned(), Value::Null);
    let req = test::TestRequest::post()
        .uri("/api/applications")
        .set_json(body)
        .to_request();
    let (status, _, created) = read_response(test::call_service(&app, req).await).await;
    assert_eq!(status, 201);
    assert_eq!(created["location"], "");
    assert_eq!(created["ownerName"], "");
    assert_eq!(created["companyName"], "Acme Ltd");
}

#[rstest]
#[actix_web::test]
async fn long_status_is_kept(application: Value) {
    let app = test::init_service(build_app(in_memory_state())).await;
    let status_text = "Awaiting documents from the applicant ".repeat(8);
    let req = test::TestRequest::post()
        .uri("/api/applications")
        .set_json(with(application, "status", json!(status_text.clone())))
        .to_request();
    let (status, _, body) = read_response(test::call_service(&app, req).await).await;
    assert_eq!(status, 201);
    assert_eq!(body["status"], status_text.trim());
}

#[rstest]
#[case("3fa85f64-5717-4562-b3fc-2c963f66afa6", 404)]
#[case("not-a-uuid", 400)]
#[actix_web::test]
async fn unknown_or_malformed_ids(#[case] id: &str, #[case] expected: u16) {
    let app = test::init_service(build_app(in_memory_state())).await;
    let req = test::TestRequest::get()
        .uri(&format!("/api/applications/{id}"))
        .to_request();
    let (status, trace_id, body) = read_response(test::call_service(&app, req).await).await;
    assert_eq!(status, expected);
    assert!(trace_id.is_some());
    assert!(body["message"].is_string());
}
