mod common;

mod client_store {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::common;
    use crate::common::GatewayOptions;
    use swot_explorer::client::store::{
        GenerateStatus,
        InsightError,
        InsightStore,
        ESTIMATED_COST_PER_REQUEST,
    };
    use swot_explorer::llm::mock::MockProvider;

    #[tokio::test]
    async fn regenerating_a_pair_replaces_the_previous_entry() {
        common::setup_logger("error");
        let provider = Arc::new(MockProvider::new());
        let gateway = common::build_gateway(Some(provider), GatewayOptions::default());
        let addr = common::spawn_app(gateway, false).await;

        let store = InsightStore::new(format!("http://{}", addr), 10);
        let product = common::product("coffee", "Coffee");
        let objective = common::objective("increase-sales", "Increase Sales");
        let segment = common::segment("gen-z-creators", "Gen Z Creators");

        store
            .generate(&product, &objective, &segment, "strengths", "first prompt").await
            .unwrap();
        store
            .generate(&product, &objective, &segment, "strengths", "second prompt").await
            .unwrap();

        assert_eq!(store.response_count(), 1);
        let entry = store.response_by_keys("gen-z-creators", "strengths").unwrap();
        assert_eq!(entry.content, "Mock insight for prompt: second prompt");
    }

    #[tokio::test]
    async fn a_second_generation_while_one_is_in_flight_is_dropped() {
        common::setup_logger("error");
        let provider = Arc::new(MockProvider::with_latency(Duration::from_millis(300)));
        let gateway = common::build_gateway(Some(provider.clone()), GatewayOptions::default());
        let addr = common::spawn_app(gateway, false).await;

        let store = InsightStore::new(format!("http://{}", addr), 10);
        let product = common::product("coffee", "Coffee");
        let objective = common::objective("increase-sales", "Increase Sales");
        let segment = common::segment("gen-z-creators", "Gen Z Creators");

        let (first, second) = tokio::join!(
            store.generate(&product, &objective, &segment, "strengths", "slow prompt"),
            async {
                tokio::time::sleep(Duration::from_millis(100)).await;
                store.generate(&product, &objective, &segment, "weaknesses", "dropped prompt").await
            }
        );

        assert_eq!(first.unwrap(), GenerateStatus::Completed);
        assert_eq!(second.unwrap(), GenerateStatus::Skipped);
        assert_eq!(store.response_count(), 1);
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn rate_limited_generation_stores_a_countdown_message() {
        common::setup_logger("error");
        let provider = Arc::new(MockProvider::new());
        let gateway = common::build_gateway(Some(provider), GatewayOptions {
            limit: 1,
            ..GatewayOptions::default()
        });
        let addr = common::spawn_app(gateway, false).await;

        let store = InsightStore::new(format!("http://{}", addr), 10);
        let product = common::product("coffee", "Coffee");
        let objective = common::objective("increase-sales", "Increase Sales");
        let segment = common::segment("gen-z-creators", "Gen Z Creators");

        store.generate(&product, &objective, &segment, "strengths", "first").await.unwrap();
        let err = store
            .generate(&product, &objective, &segment, "weaknesses", "second").await
            .unwrap_err();

        assert!(matches!(err, InsightError::RateLimited { .. }));
        let message = store.last_error().unwrap();
        assert!(message.starts_with("Rate limit exceeded. Please wait"));
        assert!(message.ends_with("seconds before trying again."));
        assert_eq!(store.response_count(), 1);
    }

    #[tokio::test]
    async fn failed_generation_leaves_the_collection_untouched() {
        common::setup_logger("error");
        let provider = Arc::new(MockProvider::failing_on("doomed"));
        let gateway = common::build_gateway(Some(provider), GatewayOptions::default());
        let addr = common::spawn_app(gateway, false).await;

        let store = InsightStore::new(format!("http://{}", addr), 10);
        let product = common::product("coffee", "Coffee");
        let objective = common::objective("increase-sales", "Increase Sales");
        let segment = common::segment("gen-z-creators", "Gen Z Creators");

        let err = store
            .generate(&product, &objective, &segment, "strengths", "doomed prompt").await
            .unwrap_err();

        assert!(matches!(err, InsightError::Server { .. }));
        assert_eq!(
            store.last_error().unwrap(),
            "Failed to generate insight. Check configuration and retry."
        );
        assert_eq!(store.response_count(), 0);

        store.clear_error();
        assert!(store.last_error().is_none());
    }

    #[tokio::test]
    async fn clearing_responses_keeps_the_usage_counters() {
        common::setup_logger("error");
        let provider = Arc::new(MockProvider::new());
        let gateway = common::build_gateway(Some(provider), GatewayOptions::default());
        let addr = common::spawn_app(gateway, false).await;

        let store = InsightStore::new(format!("http://{}", addr), 10);
        let product = common::product("coffee", "Coffee");
        let objective = common::objective("increase-sales", "Increase Sales");
        let segment = common::segment("gen-z-creators", "Gen Z Creators");

        store.generate(&product, &objective, &segment, "strengths", "prompt").await.unwrap();
        store.clear_responses();

        assert_eq!(store.response_count(), 0);
        assert!(store.last_error().is_none());
        assert_eq!(store.usage().total_requests, 1);
    }

    #[tokio::test]
    async fn usage_counters_track_successful_generations() {
        common::setup_logger("error");
        let provider = Arc::new(MockProvider::new());
        let gateway = common::build_gateway(Some(provider), GatewayOptions::default());
        let addr = common::spawn_app(gateway, false).await;

        let store = InsightStore::new(format!("http://{}", addr), 10);
        let product = common::product("coffee", "Coffee");
        let objective = common::objective("increase-sales", "Increase Sales");
        let segment = common::segment("gen-z-creators", "Gen Z Creators");

        for prompt_type in ["strengths", "weaknesses", "opportunities"] {
            store.generate(&product, &objective, &segment, prompt_type, "prompt").await.unwrap();
        }

        let usage = store.usage();
        assert_eq!(usage.total_requests, 3);
        assert_eq!(usage.remaining_requests, 7);
        assert!((usage.estimated_cost - 3.0 * ESTIMATED_COST_PER_REQUEST).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn server_config_exposes_the_demo_flag() {
        common::setup_logger("error");
        let provider = Arc::new(MockProvider::new());
        let gateway = common::build_gateway(Some(provider), GatewayOptions::default());
        let addr = common::spawn_app(gateway, true).await;

        let store = InsightStore::new(format!("http://{}", addr), 10);
        assert!(store.fetch_server_config().await.unwrap());
    }
}
