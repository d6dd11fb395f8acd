// Web Integration Tests
//
// Drive the full router: pages, htmx fragments, simulated fetches and JSON.
// Run with: cargo test --test web_integration_tests

#[cfg(feature = "api")]
mod web_tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use kisan_sahay::{create_router, AppConfig, AppState};
    use serde_json::Value;
    use std::time::Duration;
    use tower::ServiceExt; // for oneshot

    const FETCH_DELAY: Duration = Duration::from_millis(20);
    const SETTLE: Duration = Duration::from_millis(200);

    // Helper: app with short simulated delays
    fn create_test_app() -> Router {
        let config = AppConfig {
            soil_weather_delay: FETCH_DELAY,
            prediction_delay: FETCH_DELAY,
            ..AppConfig::default()
        };
        create_router(AppState::new(config))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        String::from_utf8(body.to_vec()).expect("Body is not UTF-8")
    }

    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    async fn get(app: &Router, uri: &str) -> axum::response::Response {
        app.clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn htmx_get(app: &Router, uri: &str) -> axum::response::Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header("HX-Request", "true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn post_form(app: &Router, uri: &str, form: &str) -> axum::response::Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("HX-Request", "true")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(form.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    // Helper: multipart upload of a single "file" field
    async fn upload_file(app: &Router, id: &str, filename: &str, contents: &[u8]) -> axum::response::Response {
        let boundary = "X-KISAN-BOUNDARY";
        let mut body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{f}\"\r\n\
             Content-Type: text/csv\r\n\r\n",
            b = boundary,
            f = filename
        )
        .into_bytes();
        body.extend_from_slice(contents);
        body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/prediction/{}/upload", id))
                    .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={}", boundary))
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    // Helper: mount a page and return its view id
    async fn mount(app: &Router, uri: &str) -> String {
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        let start = html.find("data-view-id=\"").expect("page has no view id") + "data-view-id=\"".len();
        let end = start + html[start..].find('"').unwrap();
        html[start..end].to_string()
    }

    // =========================================================================
    // Section 1: Pages and navigation
    // =========================================================================

    #[tokio::test]
    async fn test_every_page_renders() {
        let app = create_test_app();
        for (uri, heading) in [
            ("/", "Comprehensive Agricultural Intelligence"),
            ("/prediction", "AI Crop Yield Prediction"),
            ("/soil-weather", "Soil &amp; Weather Analysis"),
            ("/recommendations", "Crop Recommendation System"),
            ("/optimization", "AI-Powered Optimization"),
            ("/dashboard", "Analytics Dashboard"),
            ("/resources", "Resource Management"),
            ("/market", "Market Insights &amp; Pricing"),
        ] {
            let response = get(&app, uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
            let html = body_text(response).await;
            assert!(html.contains(heading), "{} missing {}", uri, heading);
            assert!(html.contains("KisanSahay"));
        }
    }

    #[tokio::test]
    async fn test_active_nav_entry() {
        let app = create_test_app();
        let html = body_text(get(&app, "/dashboard").await).await;
        assert!(html.contains("<a href=\"/dashboard\" class=\"active\">"));
        assert!(!html.contains("<a href=\"/\" class=\"active\">"));
        assert_eq!(html.matches("class=\"active\"").count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let app = create_test_app();
        let response = get(&app, "/unknown-xyz").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let html = body_text(response).await;
        assert!(html.contains("Oops! Page not found"));
        assert!(html.contains("/unknown-xyz"));
        assert!(!html.contains("class=\"active\""));
        assert!(!html.contains("Comprehensive Agricultural Intelligence"));
    }

    #[tokio::test]
    async fn test_trailing_slash_is_not_found() {
        let app = create_test_app();
        let response = get(&app, "/market/").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = body_text(response).await;
        assert!(html.contains("Oops! Page not found"));
        assert!(!html.contains("class=\"active\""));
    }

    #[tokio::test]
    async fn test_recommendations_tabs_and_soil() {
        let app = create_test_app();
        let html = body_text(get(&app, "/recommendations?soil=clay&tab=fruits").await).await;
        assert!(html.contains("Strawberries"));
        assert!(html.contains("₹2,08,750/ton"));
        assert!(!html.contains("<h3>Wheat</h3>"));
        assert!(html.contains("value=\"clay\" checked"));

        let default_html = body_text(get(&app, "/recommendations").await).await;
        assert!(default_html.contains("<h3>Wheat</h3>"));
        assert!(default_html.contains("value=\"loamy\" checked"));
    }

    #[tokio::test]
    async fn test_market_tabs() {
        let app = create_test_app();
        let html = body_text(get(&app, "/market?tab=demand").await).await;
        assert!(html.contains("High Demand"));
        assert!(html.contains("Balanced"));

        let html = body_text(get(&app, "/market?tab=exports").await).await;
        assert!(html.contains("Soybeans"));
        assert!(html.contains("Opportunity"));
    }

    // =========================================================================
    // Section 2: Soil & Weather
    // =========================================================================

    #[tokio::test]
    async fn test_blank_location_shows_validation_toast() {
        let app = create_test_app();
        let id = mount(&app, "/soil-weather").await;

        let response = post_form(&app, &format!("/soil-weather/{}/analyze", id), "location=+++").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Location required"));
        assert!(!html.contains("Analyzing..."));
        assert!(!html.contains("Current Weather"));
    }

    #[tokio::test]
    async fn test_soil_weather_fetch_resolves() {
        let app = create_test_app();
        let id = mount(&app, "/soil-weather").await;

        let html = body_text(
            post_form(&app, &format!("/soil-weather/{}/analyze", id), "location=Pune%2C+India").await,
        )
        .await;
        assert!(html.contains("Analyzing..."));
        assert!(html.contains("hx-trigger=\"load delay:400ms\""));

        tokio::time::sleep(SETTLE).await;
        let html = body_text(htmx_get(&app, &format!("/soil-weather/{}/panel", id)).await).await;
        assert!(html.contains("Current Weather"));
        assert!(html.contains("Pune, India"));
        assert!(html.contains("24°C"));
        assert!(html.contains("Data fetched successfully"));
        assert!(!html.contains("hx-trigger=\"load"));
    }

    #[tokio::test]
    async fn test_panel_outside_htmx_redirects() {
        let app = create_test_app();
        let id = mount(&app, "/soil-weather").await;
        let response = get(&app, &format!("/soil-weather/{}/panel", id)).await;
        assert!(response.status().is_redirection());
        assert_eq!(response.headers()[header::LOCATION], "/soil-weather");
    }

    #[tokio::test]
    async fn test_unmount_cancels_fetch_and_expires_view() {
        let app = create_test_app();
        let id = mount(&app, "/soil-weather").await;
        post_form(&app, &format!("/soil-weather/{}/analyze", id), "location=Nashik").await;

        let response = post_form(&app, &format!("/views/{}/unmount", id), "").await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        tokio::time::sleep(SETTLE).await;
        let response = htmx_get(&app, &format!("/soil-weather/{}/panel", id)).await;
        assert_eq!(response.status(), StatusCode::GONE);
        assert_eq!(response.headers()["HX-Refresh"], "true");
    }

    #[tokio::test]
    async fn test_unknown_view_is_gone() {
        let app = create_test_app();
        let response = post_form(&app, "/soil-weather/deadbeef/analyze", "location=Pune").await;
        assert_eq!(response.status(), StatusCode::GONE);
        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("deadbeef"));
    }

    // =========================================================================
    // Section 3: Yield Prediction
    // =========================================================================

    #[tokio::test]
    async fn test_run_without_file_shows_toast() {
        let app = create_test_app();
        let id = mount(&app, "/prediction").await;

        let html = body_text(post_form(&app, &format!("/prediction/{}/run", id), "").await).await;
        assert!(html.contains("No file selected"));
        assert!(!html.contains("Analyzing Data..."));

        tokio::time::sleep(SETTLE).await;
        let html = body_text(htmx_get(&app, &format!("/prediction/{}/panel", id)).await).await;
        assert!(!html.contains("Prediction Results"));
    }

    #[tokio::test]
    async fn test_upload_then_predict() {
        let app = create_test_app();
        let id = mount(&app, "/prediction").await;

        let response = upload_file(&app, &id, "field.csv", b"crop,yield\nwheat,4.2\n").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("field.csv ready for analysis"));
        assert!(html.contains("0.0 KB"));

        let html = body_text(post_form(&app, &format!("/prediction/{}/run", id), "").await).await;
        assert!(html.contains("Analyzing Data..."));

        tokio::time::sleep(SETTLE).await;
        let html = body_text(htmx_get(&app, &format!("/prediction/{}/panel", id)).await).await;
        assert!(html.contains("Prediction Results"));
        assert!(html.contains("4.2 tons/hectare"));
        assert!(html.contains("87% confidence"));
        assert!(html.contains("Prediction Complete"));
    }

    #[tokio::test]
    async fn test_upload_larger_than_default_body_limit() {
        let app = create_test_app();
        let id = mount(&app, "/prediction").await;

        let contents = vec![b'7'; 3 * 1024 * 1024];
        let response = upload_file(&app, &id, "season.csv", &contents).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("season.csv ready for analysis"));
        assert!(html.contains("3072.0 KB"));
    }

    // =========================================================================
    // Section 4: Resources
    // =========================================================================

    #[tokio::test]
    async fn test_calculator_totals() {
        let app = create_test_app();
        let id = mount(&app, "/resources?tab=calculator").await;

        let html = body_text(
            post_form(
                &app,
                &format!("/resources/{}/calculator", id),
                "seeds=100&fertilizer=200&water=&labor=&equipment=",
            )
            .await,
        )
        .await;
        assert!(html.contains("<strong>₹300</strong>"));
        assert!(html.contains("<td>₹30</td>"));
        assert!(html.contains("-100.0%"));
        assert!(!html.contains("counted as ₹0"));
    }

    #[tokio::test]
    async fn test_calculator_flags_non_numeric_input() {
        let app = create_test_app();
        let id = mount(&app, "/resources?tab=calculator").await;

        let html = body_text(
            post_form(&app, &format!("/resources/{}/calculator", id), "seeds=abc&water=50").await,
        )
        .await;
        assert!(html.contains("<strong>₹50</strong>"));
        assert!(html.contains("counted as ₹0"));
        assert!(html.contains("Seeds Cost (₹)"));
    }

    #[tokio::test]
    async fn test_calculator_total_stays_displayable() {
        let app = create_test_app();
        let id = mount(&app, "/resources?tab=calculator").await;

        let response = post_form(
            &app,
            &format!("/resources/{}/calculator", id),
            "seeds=1e308&fertilizer=1e308",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<strong>₹10,00,"));
        assert!(html.contains("Fertilizer Cost (₹) counted as ₹0"));
    }

    #[tokio::test]
    async fn test_zero_cost_roi_not_available() {
        let app = create_test_app();
        let html = body_text(get(&app, "/resources?tab=calculator").await).await;
        assert!(html.contains("<td>N/A</td>"));
    }

    #[tokio::test]
    async fn test_add_resource_toast() {
        let app = create_test_app();
        let id = mount(&app, "/resources").await;

        let response = post_form(&app, &format!("/resources/{}/add/fertilizers", id), "").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("hx-swap-oob"));
        assert!(html.contains("Resource Added"));
        assert!(html.contains("New fertilizers resource has been added to your inventory"));

        let response = post_form(&app, &format!("/resources/{}/add/tractors", id), "").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // =========================================================================
    // Section 5: JSON endpoints
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let app = create_test_app();
        let response = get(&app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_chart_series() {
        let app = create_test_app();
        let response = get(&app, "/api/charts/distribution").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["rows"], 4);
        assert_eq!(body["data"][0]["label"], "Wheat 35%");

        let response = get(&app, "/api/charts/rainfall").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
