//! Integration scenarios for scoring, what-if planning and draw forecasting.
//!
//! Scenarios drive the public service facade and HTTP router only, so they exercise the
//! same paths the API binary uses.

mod common {
    use chrono::{Duration, NaiveDate};

    use visa_pathways::config::PathwayConfig;
    use visa_pathways::draws::{DrawHistory, HistoricalDrawRecord};
    use visa_pathways::scoring::{
        ApplicantProfile, EducationLevel, Finances, LanguageScores, LanguageTest, MaritalStatus,
        OfficialLanguage,
    };
    use visa_pathways::PathwayService;

    pub(super) fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid date")
    }

    pub(super) fn profile() -> ApplicantProfile {
        ApplicantProfile {
            age: 29,
            marital_status: MaritalStatus::Single,
            spouse: None,
            first_language: LanguageTest {
                language: OfficialLanguage::English,
                scores: LanguageScores::uniform(9),
            },
            second_language: None,
            education: EducationLevel::Bachelors,
            domestic_experience_years: 1,
            foreign_experience_years: 3,
            domestic_education: None,
            job_offer: None,
            nomination: None,
            trade_certificate: false,
            sibling_in_country: false,
            specialist_education: false,
            professional_year: false,
            community_language: false,
            regional_study: false,
            has_accommodation: false,
            has_health_insurance: false,
            has_business_plan: false,
            portuguese_level: None,
            finances: Finances::default(),
        }
    }

    pub(super) fn history() -> DrawHistory {
        let latest = date("2024-06-05");
        let express_entry = [520, 519, 522, 518, 515]
            .iter()
            .enumerate()
            .map(|(index, cutoff)| {
                HistoricalDrawRecord::new(
                    latest - Duration::days(14 * index as i64),
                    "Express Entry",
                    *cutoff,
                    2000,
                )
            });
        let pnp = [(date("2024-06-04"), 720), (date("2024-05-21"), 710)]
            .into_iter()
            .map(|(day, cutoff)| HistoricalDrawRecord::new(day, "PNP", cutoff, 800));

        DrawHistory::new(express_entry.chain(pnp).collect())
    }

    pub(super) fn service() -> PathwayService {
        PathwayService::new(PathwayConfig::default(), history())
    }
}

mod scoring {
    use super::common::*;
    use visa_pathways::scoring::{PortugalVisa, Program, ScoringError};

    #[test]
    fn service_scores_each_program() {
        let service = service();

        let crs = service.score(&profile(), Program::Crs).expect("crs scores");
        let australia = service
            .score(&profile(), Program::Australia)
            .expect("australia scores");
        let portugal = service
            .score(&profile(), Program::Portugal(PortugalVisa::D8DigitalNomad))
            .expect("portugal scores");

        assert_eq!(crs.total_score, 482);
        assert_eq!(australia.total_score, 75);
        assert!(portugal.total_score <= portugal.max_score);
        assert_eq!(
            portugal.total_score,
            portugal.breakdown.values().sum::<u32>()
        );
    }

    #[test]
    fn out_of_range_age_is_a_validation_error() {
        let mut profile = profile();
        profile.age = 140;

        let error = service()
            .score(&profile, Program::Crs)
            .expect_err("age rejected");

        assert!(error.is_validation());
        assert!(matches!(error, ScoringError::InvalidProfile(_)));
    }
}

mod what_if {
    use super::common::*;
    use visa_pathways::config::PathwayConfig;
    use visa_pathways::draws::DrawHistory;
    use visa_pathways::scoring::Program;
    use visa_pathways::PathwayService;

    #[test]
    fn report_uses_configured_target_by_default() {
        let config = PathwayConfig {
            target_score: 550,
            ..PathwayConfig::default()
        };
        let service = PathwayService::new(config, DrawHistory::default());

        let report = service
            .what_if(&profile(), Program::Crs, None)
            .expect("what-if evaluates");

        assert_eq!(report.target_score, 550);
        assert_eq!(report.result.current_score, 482);
        assert!(report.recommendations.len() <= 5);
        assert!(report.result.combined_max_score >= report.result.current_score);
    }

    #[test]
    fn explicit_target_overrides_configuration() {
        let report = service()
            .what_if(&profile(), Program::Australia, Some(90))
            .expect("what-if evaluates");

        assert_eq!(report.target_score, 90);
        assert!(report
            .recommendations
            .windows(2)
            .all(|pair| pair[0].efficiency >= pair[1].efficiency));
    }
}

mod draws {
    use std::io::Write;

    use super::common::*;
    use visa_pathways::config::PathwayConfig;
    use visa_pathways::draws::{AlertKind, DrawHistory, TrendDirection};
    use visa_pathways::PathwayService;

    #[test]
    fn analysis_and_prediction_follow_category_filter() {
        let service = service();

        let all = service.draw_analysis(None);
        let express_entry = service.draw_analysis(Some("express entry"));
        let prediction = service.draw_prediction(Some("Express Entry"), Some(date("2024-06-10")));

        assert_eq!(all.record_count, 7);
        assert_eq!(express_entry.record_count, 5);
        assert_eq!(express_entry.trend_direction, TrendDirection::Stable);
        assert_eq!(prediction.predicted_cutoff, 520);
        assert_eq!(prediction.predicted_date, date("2024-06-19"));
    }

    #[test]
    fn comparison_and_alerts_use_the_current_snapshot() {
        let service = service();

        let comparison = service.draw_comparison(510, Some("Express Entry"));
        let alerts = service.draw_alerts(510, Some("Express Entry"), Some(date("2024-06-10")));

        assert!(!comparison.would_qualify_now);
        assert_eq!(comparison.matching_records.len(), 5);
        assert_eq!(alerts[0].kind, AlertKind::AlmostQualifying);
        assert_eq!(alerts.last().map(|alert| alert.kind), Some(AlertKind::NextDraw));
    }

    #[test]
    fn replacing_draws_changes_later_reads_only() {
        let service = service();
        let before = service.draw_history();

        service.replace_draws(DrawHistory::default());

        assert_eq!(before.len(), 7);
        assert!(service.draw_history().is_empty());
        assert_eq!(service.draw_analysis(None).record_count, 0);
    }

    #[test]
    fn configured_csv_is_imported_at_startup() {
        let path = std::env::temp_dir().join(format!(
            "visa-pathways-draws-{}.csv",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).expect("temp file");
        writeln!(file, "date,program,cutoff,invitations").expect("write header");
        writeln!(file, "2024-06-05,CEC,515,3000").expect("write row");
        writeln!(file, "2024-05-22,CEC,522,2500").expect("write row");
        drop(file);

        let config = PathwayConfig {
            draws_csv: Some(path.clone()),
            ..PathwayConfig::default()
        };
        let service = PathwayService::from_config(config).expect("service builds");
        let reloaded = service.reload_draws(&path).expect("reload succeeds");
        std::fs::remove_file(&path).ok();

        assert_eq!(service.draw_history().len(), 2);
        assert_eq!(reloaded, 2);
        assert_eq!(service.draw_analysis(Some("cec")).lowest_cutoff, 515);
    }

    #[test]
    fn missing_csv_fails_service_startup() {
        let config = PathwayConfig {
            draws_csv: Some("/nonexistent/draws.csv".into()),
            ..PathwayConfig::default()
        };

        assert!(PathwayService::from_config(config).is_err());
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;
    use visa_pathways::pathway_router;

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let router = pathway_router(Arc::new(service()));
        let response = router.oneshot(request).await.expect("router responds");
        let status = response.status();
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body readable");
        let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, value)
    }

    fn post_json(uri: &str, payload: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request builds")
    }

    #[tokio::test]
    async fn score_endpoint_returns_breakdown() {
        let payload = json!({ "profile": profile(), "program": "crs" });

        let (status, body) = send(post_json("/api/v1/score", payload)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_score"], 482);
        assert_eq!(body["table_version"], "CRS-2024.1");
        assert_eq!(body["breakdown"]["age"], 110);
    }

    #[tokio::test]
    async fn score_endpoint_rejects_invalid_profile() {
        let mut profile = profile();
        profile.first_language.scores.writing = 13;
        let payload = json!({ "profile": profile, "program": "australia" });

        let (status, body) = send(post_json("/api/v1/score", payload)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"]
            .as_str()
            .expect("error message")
            .starts_with("invalid profile"));
    }

    #[tokio::test]
    async fn what_if_endpoint_returns_result_and_recommendations() {
        let payload = json!({
            "profile": profile(),
            "program": { "portugal": "d7_passive_income" },
            "target_score": 60,
        });

        let (status, body) = send(post_json("/api/v1/what-if", payload)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["target_score"], 60);
        assert!(body["result"]["scenarios"].as_array().is_some());
        assert!(body["recommendations"].as_array().is_some());
    }

    #[tokio::test]
    async fn analysis_endpoint_filters_by_category() {
        let request = Request::builder()
            .uri("/api/v1/draws/analysis?category=PNP")
            .body(Body::empty())
            .expect("request builds");

        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["record_count"], 2);
        assert_eq!(body["highest_cutoff"], 720);
    }

    #[tokio::test]
    async fn prediction_endpoint_accepts_today_override() {
        let request = Request::builder()
            .uri("/api/v1/draws/prediction?category=Express%20Entry&today=2024-06-10")
            .body(Body::empty())
            .expect("request builds");

        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["predicted_cutoff"], 520);
        assert_eq!(body["predicted_date"], "2024-06-19");
        assert_eq!(body["confidence_level"], "high");
    }

    #[tokio::test]
    async fn comparison_endpoint_reports_percentile() {
        let payload = json!({ "user_score": 520, "category": "Express Entry" });

        let (status, body) = send(post_json("/api/v1/draws/comparison", payload)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["qualifying_count"], 4);
        assert_eq!(body["percentile"], 80.0);
    }

    #[tokio::test]
    async fn alerts_endpoint_always_includes_next_draw() {
        let payload = json!({ "user_score": 300, "today": "2024-06-10" });

        let (status, body) = send(post_json("/api/v1/draws/alerts", payload)).await;

        assert_eq!(status, StatusCode::OK);
        let alerts = body.as_array().expect("alert list");
        assert_eq!(
            alerts.last().map(|alert| alert["kind"].clone()),
            Some(json!("next_draw"))
        );
    }
}
