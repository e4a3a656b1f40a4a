//! Integration tests for meal logging, history, summary, and export

mod common;

use axum::http::StatusCode;
use common::TestApp;

async fn log_oatmeal(app: &TestApp, user_id: i64) {
    let body = format!(
        r#"{{"user_id":{},"meal_name":"Oatmeal","category":"Breakfast","calories":350,"protein":12.0,"carbs":60.0,"fats":6.5}}"#,
        user_id
    );
    let (status, _) = app.post("/log_meal", &body).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn logged_meal_appears_in_history() {
    let app = TestApp::new().await;
    let user_id = app.signup_alice().await;
    log_oatmeal(&app, user_id).await;

    let (status, body) = app.get(&format!("/meals/{}", user_id)).await;
    assert_eq!(status, StatusCode::OK);

    let meals: serde_json::Value = serde_json::from_str(&body).unwrap();
    let meals = meals.as_array().unwrap();
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0]["meal_name"], "Oatmeal");
    assert_eq!(meals[0]["category"], "Breakfast");
    assert_eq!(meals[0]["calories"], 350);
    assert_eq!(meals[0]["protein"], 12.0);
}

#[tokio::test]
async fn history_filters_by_category() {
    let app = TestApp::new().await;
    let user_id = app.signup_alice().await;
    log_oatmeal(&app, user_id).await;
    let body = format!(
        r#"{{"user_id":{},"meal_name":"Pasta","category":"Dinner","calories":600,"protein":20.0,"carbs":80.0,"fats":10.0}}"#,
        user_id
    );
    app.post("/log_meal", &body).await;

    let (status, body) = app
        .get(&format!("/meals/{}?category=Dinner", user_id))
        .await;
    assert_eq!(status, StatusCode::OK);

    let meals: serde_json::Value = serde_json::from_str(&body).unwrap();
    let meals = meals.as_array().unwrap();
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0]["meal_name"], "Pasta");
}

#[tokio::test]
async fn negative_calories_are_rejected() {
    let app = TestApp::new().await;
    let user_id = app.signup_alice().await;

    let body = format!(
        r#"{{"user_id":{},"meal_name":"Bad","category":"Snack","calories":-5,"protein":null,"carbs":null,"fats":null}}"#,
        user_id
    );
    let (status, _) = app.post("/log_meal", &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn updating_a_meal_changes_it() {
    let app = TestApp::new().await;
    let user_id = app.signup_alice().await;
    log_oatmeal(&app, user_id).await;

    let (_, body) = app.get(&format!("/meals/{}", user_id)).await;
    let meals: serde_json::Value = serde_json::from_str(&body).unwrap();
    let meal_id = meals[0]["id"].as_i64().unwrap();

    let (status, _) = app
        .put(
            &format!("/update_meal/{}", meal_id),
            r#"{"meal_name":"Porridge","category":"Breakfast","calories":400,"protein":14.0,"carbs":62.0,"fats":7.0}"#,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get(&format!("/meals/{}", user_id)).await;
    let meals: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(meals[0]["meal_name"], "Porridge");
    assert_eq!(meals[0]["calories"], 400);
}

#[tokio::test]
async fn updating_a_nonexistent_meal_is_a_silent_noop() {
    let app = TestApp::new().await;
    let user_id = app.signup_alice().await;
    log_oatmeal(&app, user_id).await;

    let (_, before) = app.get(&format!("/meals/{}", user_id)).await;

    let (status, body) = app
        .put(
            "/update_meal/9999",
            r#"{"meal_name":"Ghost","category":"Snack","calories":1,"protein":null,"carbs":null,"fats":null}"#,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["message"], "Meal updated successfully!");

    // Round-trip: the history is unchanged.
    let (_, after) = app.get(&format!("/meals/{}", user_id)).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn weekly_summary_has_one_row_per_logged_date() {
    let app = TestApp::new().await;
    let user_id = app.signup_alice().await;

    // Two meals today plus one three days ago, inserted directly so
    // the date can be controlled.
    log_oatmeal(&app, user_id).await;
    log_oatmeal(&app, user_id).await;
    sqlx::query(
        "INSERT INTO meals (user_id, meal_name, category, calories, protein, carbs, fats, date_logged) \
         VALUES (?, 'Soup', 'Lunch', 200, 8.0, 20.0, 4.0, DATE('now', '-3 days'))",
    )
    .bind(user_id)
    .execute(&app.pool)
    .await
    .unwrap();

    let (status, body) = app.get(&format!("/weekly_summary/{}", user_id)).await;
    assert_eq!(status, StatusCode::OK);

    let summary: serde_json::Value = serde_json::from_str(&body).unwrap();
    let rows = summary.as_array().unwrap();
    // Meals exist on exactly two dates; no zero-filled rows in between.
    assert_eq!(rows.len(), 2);

    let today_row = rows
        .iter()
        .find(|r| r["total_calories"] == 700)
        .expect("today's totals present");
    assert_eq!(today_row["total_protein"], 24.0);
}

#[tokio::test]
async fn weekly_summary_is_empty_without_meals() {
    let app = TestApp::new().await;
    let user_id = app.signup_alice().await;

    let (status, body) = app.get(&format!("/weekly_summary/{}", user_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn download_meals_returns_csv_with_fixed_header() {
    let app = TestApp::new().await;
    let user_id = app.signup_alice().await;
    log_oatmeal(&app, user_id).await;

    let (status, body) = app.get(&format!("/download_meals/{}", user_id)).await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    let csv = json["csv"].as_str().unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Meal Name,Calories,Protein,Carbs,Fats,Date Logged");
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("Oatmeal,350,"));
}
