mod test_utils;

use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::*;

fn education(institution: &str, start_year: &str) -> Value {
    json!({
        "institution": institution,
        "degree": "BSc",
        "fieldOfStudy": "Computer Science",
        "startYear": start_year,
    })
}

#[actix_rt::test]
async fn create_education_returns_envelope() {
    let app = TestApp::spawn().await;

    let mut body = education("MIT", "2019");
    body["endYear"] = json!("2023");
    body["gpa"] = json!("4.5");

    let res = app.post_json("/api/education/create", &body).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Education added successfully");
    assert_eq!(body["education"]["institution"], "MIT");
    assert_eq!(body["education"]["fieldOfStudy"], "Computer Science");
    assert_eq!(body["education"]["startYear"], "2019");
    assert_eq!(body["education"]["endYear"], "2023");
    assert_eq!(body["education"]["gpa"], "4.5");
}

#[actix_rt::test]
async fn education_list_is_latest_start_year_first() {
    let app = TestApp::spawn().await;

    for (institution, year) in [("Middle", "2020"), ("Oldest", "2019"), ("Newest", "2021")] {
        let res = app.post_json("/api/education/create", &education(institution, year)).await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = app.get("/api/education/get").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    let years: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["startYear"].as_str().unwrap())
        .collect();
    assert_eq!(years, vec!["2021", "2020", "2019"]);
}

#[actix_rt::test]
async fn education_requires_numeric_start_year() {
    let app = TestApp::spawn().await;

    let res = app.post_json("/api/education/create", &education("MIT", "autumn")).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["details"][0]["field"], "startYear");

    let res = app.post_json("/api/education/create", &json!({ "institution": "MIT" })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["degree", "fieldOfStudy", "startYear"]);
}

#[actix_rt::test]
async fn delete_education() {
    let app = TestApp::spawn().await;

    let created: Value = app
        .post_json("/api/education/create", &education("MIT", "2019"))
        .await
        .json()
        .await
        .unwrap();
    let id = created["education"]["_id"].as_str().unwrap();

    let res = app.delete(&format!("/api/education/delete/{}", id)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Education deleted successfully");

    let body: Value = app.get("/api/education/get").await.json().await.unwrap();
    assert_eq!(body, json!([]));

    let res = app.delete(&format!("/api/education/delete/{}", id)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
