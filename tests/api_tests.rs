//! Integration tests for checkout-sdk
//!
//! Every test runs the client against a local wiremock server, so no
//! credentials or network access are needed.
//!
//! Set `RUST_LOG=checkout_sdk=debug` to see request spans.

mod common;

use common::*;

use checkout_sdk::auth::{scopes, Credentials};
use checkout_sdk::models::*;
use checkout_sdk::{AuthorizationType, CheckoutClient, ClientConfig, Environment, Error};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

// ============================================================================
// BALANCES SERVICE TESTS
// ============================================================================

mod balances_tests {
    use super::*;

    fn balances_body() -> serde_json::Value {
        json!({
            "data": [{
                "descriptor": "Revenue Account 1",
                "holding_currency": "USD",
                "balances": {"pending": 100, "available": 5000, "payable": 0, "collateral": 0}
            }],
            "_links": {"self": {"href": "https://balances.sandbox.checkout.com/balances/ent_123"}}
        })
    }

    #[tokio::test]
    async fn test_retrieve_entity_balances() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/balances/ent_123"))
            .and(query_param("query", "currency:USD"))
            .and(header("authorization", bearer(SECRET_KEY).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(balances_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = secret_key_client(&server);
        let response = client
            .balances()
            .retrieve_entity_balances("ent_123", &BalancesQuery::new().currency("USD"))
            .await
            .expect("balances should be returned");

        assert_eq!(response.http_metadata.status_code, 200);
        assert_eq!(response.http_metadata.status, "200 OK");
        assert_eq!(response.data[0].descriptor, "Revenue Account 1");
        assert_eq!(response.data[0].balances.available, 5000);
        assert!(response.links.contains_key("self"));
    }

    #[tokio::test]
    async fn test_balances_accept_oauth() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/balances/ent_123"))
            .and(header("authorization", bearer(OAUTH_TOKEN).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(balances_body()))
            .expect(1)
            .mount(&server)
            .await;

        let response = oauth_client(&server)
            .balances()
            .retrieve_entity_balances("ent_123", &BalancesQuery::new())
            .await
            .expect("OAuth should be accepted");
        assert_eq!(response.data.len(), 1);
    }

    #[tokio::test]
    async fn test_balances_prefer_secret_key() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/balances/ent_123"))
            .and(header("authorization", bearer(SECRET_KEY).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(balances_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_with(
            &server,
            Credentials::new()
                .with_secret_key(SECRET_KEY)
                .with_oauth_token(OAUTH_TOKEN),
        );
        let result = client
            .balances()
            .retrieve_entity_balances("ent_123", &BalancesQuery::new())
            .await;
        assert!(result.is_ok(), "Should use the secret key: {:?}", result);
    }

    #[tokio::test]
    async fn test_balances_without_credentials() {
        let server = setup_mock_server().await;
        let client = client_with(&server, Credentials::new());

        let err = client
            .balances()
            .retrieve_entity_balances("ent_123", &BalancesQuery::new())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Authorization {
                required: AuthorizationType::SecretKeyOrOAuth
            }
        ));
        assert_eq!(received_count(&server).await, 0);
    }

    #[tokio::test]
    async fn test_balances_not_found() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/balances/ent_missing"))
            .respond_with(
                ResponseTemplate::new(404).insert_header("cko-request-id", "req_404"),
            )
            .mount(&server)
            .await;

        let err = secret_key_client(&server)
            .balances()
            .retrieve_entity_balances("ent_missing", &BalancesQuery::new())
            .await
            .unwrap_err();

        match err {
            Error::Api {
                http_metadata,
                details,
            } => {
                assert_eq!(http_metadata.status_code, 404);
                assert_eq!(http_metadata.status, "404 Not Found");
                assert_eq!(http_metadata.request_id.as_deref(), Some("req_404"));
                assert!(details.is_none());
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }
}

// ============================================================================
// EVENTS SERVICE TESTS
// ============================================================================

mod events_tests {
    use super::*;

    #[tokio::test]
    async fn test_event_types_without_version() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/event-types"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"version": "1.0", "event_types": ["charge.succeeded"]},
                {"version": "2.0", "event_types": ["payment_approved"]}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let response = secret_key_client(&server)
            .events()
            .retrieve_all_event_types(None)
            .await
            .unwrap();
        assert_eq!(response.event_types.len(), 2);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_event_types_with_version() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/event-types"))
            .and(query_param("version", "2.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"version": "2.0", "event_types": ["payment_approved", "payment_declined"]}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let response = secret_key_client(&server)
            .events()
            .retrieve_all_event_types(Some("2.0"))
            .await
            .unwrap();
        assert_eq!(response.event_types[0].version, "2.0");
        assert_eq!(response.event_types[0].event_types.len(), 2);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("version=2.0"));
    }

    #[tokio::test]
    async fn test_event_types_require_secret_key() {
        let server = setup_mock_server().await;

        let err = oauth_client(&server)
            .events()
            .retrieve_all_event_types(None)
            .await
            .unwrap_err();
        assert!(err.is_auth_error());
        assert!(!err.reached_server());
        assert_eq!(received_count(&server).await, 0);
    }

    #[tokio::test]
    async fn test_retrieve_events_page() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/events"))
            .and(query_param("payment_id", "pay_123"))
            .and(query_param("limit", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_count": 1,
                "limit": 10,
                "skip": 0,
                "data": [{"id": "evt_1", "type": "payment_approved", "created_on": "2019-08-24T14:15:22Z"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let query = EventsQuery {
            payment_id: Some("pay_123".into()),
            limit: Some(10),
            ..Default::default()
        };
        let page = secret_key_client(&server)
            .events()
            .retrieve_events(&query)
            .await
            .unwrap();

        assert_eq!(page.total_count, 1);
        assert_eq!(page.data[0].event_type, "payment_approved");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("limit=10&payment_id=pay_123"));
    }

    #[tokio::test]
    async fn test_retrieve_event_and_notification() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/events/evt_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "evt_1",
                "type": "payment_captured",
                "data": {"id": "pay_123"},
                "notifications": [{"id": "ntf_1", "url": "https://example.com/webhooks", "success": true}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/events/evt_1/notifications/ntf_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "ntf_1",
                "url": "https://example.com/webhooks",
                "success": true,
                "content_type": "json",
                "attempts": [{"status_code": 200, "response_body": "OK", "retry_mode": "automatic"}]
            })))
            .mount(&server)
            .await;

        let client = secret_key_client(&server);
        let event = client.events().retrieve_event("evt_1").await.unwrap();
        assert_eq!(event.data["id"], "pay_123");

        let notification = client
            .events()
            .retrieve_event_notification("evt_1", &event.notifications[0].id)
            .await
            .unwrap();
        assert_eq!(notification.attempts[0].status_code, 200);
    }

    #[tokio::test]
    async fn test_retry_webhooks() {
        let server = setup_mock_server().await;
        Mock::given(method("POST"))
            .and(path("/events/evt_1/webhooks/wh_1/retry"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/events/evt_1/webhooks/retry"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let client = secret_key_client(&server);
        let single = client.events().retry_webhook("evt_1", "wh_1").await.unwrap();
        assert_eq!(single.http_metadata.status_code, 202);

        let all = client.events().retry_all_webhooks("evt_1").await.unwrap();
        assert_eq!(all.http_metadata.status_code, 202);
    }
}

// ============================================================================
// FILES SERVICE TESTS
// ============================================================================

mod files_tests {
    use super::*;

    #[tokio::test]
    async fn test_upload_file_multipart() {
        let server = setup_mock_server().await;
        Mock::given(method("POST"))
            .and(path("/files"))
            .and(header("authorization", bearer(SECRET_KEY).as_str()))
            .and(body_string_contains("dispute_evidence"))
            .and(body_string_contains("filename=\"evidence.pdf\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "file_6lbss42ezvoufcb2beo76rvwly",
                "_links": {"self": {"href": "https://api.sandbox.checkout.com/files/file_6lbss42ezvoufcb2beo76rvwly"}}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = FileRequest::new(
            "evidence.pdf",
            b"%PDF-1.4 test".to_vec(),
            FilePurpose::DisputeEvidence,
        );
        let response = secret_key_client(&server)
            .files()
            .upload_file(request)
            .await
            .unwrap();
        assert_eq!(response.id, "file_6lbss42ezvoufcb2beo76rvwly");

        let requests = server.received_requests().await.unwrap();
        let content_types: Vec<_> = requests[0].headers.get_all("content-type").iter().collect();
        assert_eq!(content_types.len(), 1, "Exactly one Content-Type header");
        let content_type = content_types[0].to_str().unwrap();
        assert!(content_type.starts_with("multipart/form-data; boundary="));

        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(body.contains("name=\"purpose\""));
        assert!(body.contains("%PDF-1.4 test"));
    }

    #[tokio::test]
    async fn test_retrieve_file() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/files/file_123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "file_123",
                "filename": "evidence.pdf",
                "purpose": "dispute_evidence",
                "size": 13,
                "uploaded_on": "2024-05-17T16:48:52Z"
            })))
            .mount(&server)
            .await;

        let file = secret_key_client(&server)
            .files()
            .retrieve_file("file_123")
            .await
            .unwrap();
        assert_eq!(file.filename, "evidence.pdf");
        assert_eq!(file.size, 13);
        assert!(file.uploaded_on.is_some());
    }

    #[tokio::test]
    async fn test_files_without_secret_key() {
        let server = setup_mock_server().await;
        let client = oauth_client(&server);

        let request = FileRequest::new("evidence.pdf", b"%PDF".to_vec(), FilePurpose::DisputeEvidence);
        let err = client.files().upload_file(request).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Authorization {
                required: AuthorizationType::SecretKey
            }
        ));

        let err = client.files().retrieve_file("file_123").await.unwrap_err();
        assert!(matches!(err, Error::Authorization { .. }));

        assert_eq!(received_count(&server).await, 0);
    }
}

// ============================================================================
// INSTRUMENTS SERVICE TESTS
// ============================================================================

mod instruments_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_token_instrument() {
        let server = setup_mock_server().await;
        Mock::given(method("POST"))
            .and(path("/instruments"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "type": "token",
                "token": "tok_asoto22g2sfu3v2ut6v7ldqobe",
                "customer": {"email": "jane@example.com", "default": true}
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "type": "card",
                "id": "src_wmlfc3zyhqzehihu7giusaaawu",
                "fingerprint": "vnsdrvikkvre3dtrjjvlm5du4q",
                "expiry_month": 6,
                "expiry_year": 2030,
                "last4": "4242"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = CreateInstrumentRequest::Token(TokenInstrument {
            token: "tok_asoto22g2sfu3v2ut6v7ldqobe".into(),
            account_holder: None,
            customer: Some(InstrumentCustomer {
                email: Some("jane@example.com".into()),
                default: Some(true),
                ..Default::default()
            }),
        });
        let created = secret_key_client(&server)
            .instruments()
            .create(&request)
            .await
            .unwrap();

        assert_eq!(created.http_metadata.status_code, 201);
        assert_eq!(created.id, "src_wmlfc3zyhqzehihu7giusaaawu");
        assert_eq!(created.last4.as_deref(), Some("4242"));
    }

    #[tokio::test]
    async fn test_get_update_delete_instrument() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/instruments/src_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "type": "bank_account",
                "id": "src_1",
                "iban": "GB33BUKB20201555555555",
                "currency": "GBP",
                "country": "GB"
            })))
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/instruments/src_1"))
            .and(body_json(json!({"type": "card", "expiry_year": 2031})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "type": "card",
                "fingerprint": "smoiomdnbelfzo7ypobuzpkd7e"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/instruments/src_1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = secret_key_client(&server);

        let instrument = client.instruments().get("src_1").await.unwrap();
        assert_eq!(instrument.instrument_type, "bank_account");
        assert_eq!(instrument.iban.as_deref(), Some("GB33BUKB20201555555555"));

        let updated = client
            .instruments()
            .update(
                "src_1",
                &UpdateInstrumentRequest::Card(CardUpdate {
                    expiry_year: Some(2031),
                    ..Default::default()
                }),
            )
            .await
            .unwrap();
        assert_eq!(updated.fingerprint.as_deref(), Some("smoiomdnbelfzo7ypobuzpkd7e"));

        let deleted = client.instruments().delete("src_1").await.unwrap();
        assert_eq!(deleted.http_metadata.status_code, 204);
    }

    #[tokio::test]
    async fn test_bank_account_field_formatting_requires_oauth() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/validation/bank-accounts/GB/GBP"))
            .and(header("authorization", bearer(OAUTH_TOKEN).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sections": [{"name": "Account", "fields": [{"id": "iban", "required": true}]}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let query = BankAccountFieldQuery {
            account_holder_type: Some(AccountHolderType::Individual),
            payment_network: Some(PaymentNetwork::Local),
        };

        let err = secret_key_client(&server)
            .instruments()
            .bank_account_field_formatting("GB", "GBP", &query)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Authorization {
                required: AuthorizationType::OAuth
            }
        ));

        let response = oauth_client(&server)
            .instruments()
            .bank_account_field_formatting("GB", "GBP", &query)
            .await
            .unwrap();
        assert_eq!(response.sections[0].fields[0].id, "iban");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url.query(),
            Some("account-holder-type=individual&payment-network=local")
        );
    }
}

// ============================================================================
// REPORTS SERVICE TESTS
// ============================================================================

mod reports_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_all_reports_omits_unset_filters() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/reports"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 1,
                "limit": 5,
                "data": [{"id": "rpt_1", "type": "FinancialActions", "files": [{"id": "file_1", "format": "CSV"}]}],
                "_links": {"self": {"href": "https://api.sandbox.checkout.com/reports?entity_id=ent_123"}}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let query = ReportsQuery {
            entity_id: Some("ent_123".into()),
            ..Default::default()
        };
        let reports = secret_key_client(&server)
            .reports()
            .get_all_reports(&query)
            .await
            .unwrap();
        assert_eq!(reports.count, 1);
        assert_eq!(reports.data[0].files[0].id, "file_1");
        assert!(reports.next_link().is_none());

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("entity_id=ent_123"));
    }

    #[tokio::test]
    async fn test_get_report_details() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/reports/rpt_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "rpt_1",
                "description": "Monthly statement",
                "account": {"client_id": "cli_1", "entity_id": "ent_123"}
            })))
            .mount(&server)
            .await;

        let report = oauth_client(&server)
            .reports()
            .get_report_details("rpt_1")
            .await
            .unwrap();
        assert_eq!(report.report.description.as_deref(), Some("Monthly statement"));
        assert_eq!(
            report.report.account.unwrap().entity_id.as_deref(),
            Some("ent_123")
        );
    }

    #[tokio::test]
    async fn test_get_report_file_raw_content() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/reports/rpt_1/files/file_1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("id,amount\npay_1,100\n", "text/csv"),
            )
            .mount(&server)
            .await;

        let file = secret_key_client(&server)
            .reports()
            .get_report_file("rpt_1", "file_1")
            .await
            .unwrap();
        assert_eq!(file.http_metadata.status_code, 200);
        assert_eq!(file.content_type.as_deref(), Some("text/csv"));
        assert_eq!(file.text().unwrap(), "id,amount\npay_1,100\n");
    }

    #[tokio::test]
    async fn test_report_unauthorized() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/reports/rpt_1"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = secret_key_client(&server)
            .reports()
            .get_report_details("rpt_1")
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), Some(401));
        assert!(err.is_auth_error());
        assert!(err.reached_server());
    }

    #[tokio::test]
    async fn test_reports_without_credentials() {
        let server = setup_mock_server().await;
        let client = client_with(&server, Credentials::new());

        let err = client
            .reports()
            .get_all_reports(&ReportsQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Authorization {
                required: AuthorizationType::SecretKeyOrOAuth
            }
        ));

        let err = client
            .reports()
            .get_report_file("rpt_1", "file_1")
            .await
            .unwrap_err();
        assert!(!err.reached_server());

        assert_eq!(received_count(&server).await, 0);
    }
}

// ============================================================================
// WEBHOOKS SERVICE TESTS
// ============================================================================

mod webhooks_tests {
    use super::*;

    fn register_request() -> WebhookRequest {
        WebhookRequest::new("https://example.com/webhooks")
            .active(true)
            .header("authorization", "1234")
            .content_type(WebhookContentType::Json)
            .event_types(["payment_approved", "payment_captured"])
    }

    #[tokio::test]
    async fn test_register_webhook_created() {
        let server = setup_mock_server().await;
        Mock::given(method("POST"))
            .and(path("/webhooks"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "url": "https://example.com/webhooks",
                "active": true,
                "headers": {"authorization": "1234"},
                "content_type": "json",
                "event_types": ["payment_approved", "payment_captured"]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(webhook_json("wh_1")))
            .expect(1)
            .mount(&server)
            .await;

        let response = secret_key_client(&server)
            .webhooks()
            .register_webhook(&register_request())
            .await
            .unwrap();

        assert_eq!(response.http_metadata.status_code, 201);
        assert_eq!(response.webhook.id, "wh_1");
        assert!(response.webhook.active);
        assert_eq!(response.webhook.event_types.len(), 2);
        assert_eq!(response.webhook.headers["authorization"], "1234");
    }

    #[tokio::test]
    async fn test_register_webhook_server_error() {
        let server = setup_mock_server().await;
        Mock::given(method("POST"))
            .and(path("/webhooks"))
            .respond_with(ResponseTemplate::new(500).set_body_json(webhook_json("wh_1")))
            .mount(&server)
            .await;

        let err = secret_key_client(&server)
            .webhooks()
            .register_webhook(&register_request())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(500));
        assert!(err.is_server_error());
        assert!(err.details().is_none());
    }

    #[tokio::test]
    async fn test_register_webhook_validation_error() {
        let server = setup_mock_server().await;
        Mock::given(method("POST"))
            .and(path("/webhooks"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "request_id": "0HL80RJLS76I7",
                "error_type": "request_invalid",
                "error_codes": ["url_invalid"]
            })))
            .mount(&server)
            .await;

        let err = secret_key_client(&server)
            .webhooks()
            .register_webhook(&WebhookRequest::new("not a url"))
            .await
            .unwrap_err();

        assert!(err.is_client_error());
        let details = err.details().expect("422 should carry details");
        assert_eq!(details.error_type.as_deref(), Some("request_invalid"));
        assert_eq!(details.error_codes, vec!["url_invalid"]);
    }

    #[tokio::test]
    async fn test_retrieve_webhooks() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/webhooks"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([webhook_json("wh_1"), webhook_json("wh_2")])),
            )
            .mount(&server)
            .await;

        let response = secret_key_client(&server)
            .webhooks()
            .retrieve_webhooks()
            .await
            .unwrap();
        assert_eq!(response.webhooks.len(), 2);
        assert_eq!(response.webhooks[1].id, "wh_2");
    }

    #[tokio::test]
    async fn test_retrieve_webhooks_no_content() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/webhooks"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let response = secret_key_client(&server)
            .webhooks()
            .retrieve_webhooks()
            .await
            .unwrap();
        assert_eq!(response.http_metadata.status_code, 204);
        assert!(response.webhooks.is_empty());
    }

    #[tokio::test]
    async fn test_webhook_lifecycle() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/webhooks/wh_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(webhook_json("wh_1")))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/webhooks/wh_1"))
            .and(body_string_contains("\"url\":\"https://example.com/webhooks\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(webhook_json("wh_1")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/webhooks/wh_1"))
            .and(body_json(json!({"active": false})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "wh_1",
                "url": "https://example.com/webhooks",
                "active": false
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/webhooks/wh_1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = secret_key_client(&server);

        let webhook = client.webhooks().retrieve_webhook("wh_1").await.unwrap();
        assert_eq!(webhook.webhook.url, "https://example.com/webhooks");

        let updated = client
            .webhooks()
            .update_webhook("wh_1", &register_request())
            .await
            .unwrap();
        assert_eq!(updated.webhook.id, "wh_1");

        let paused = client
            .webhooks()
            .partially_update_webhook("wh_1", &WebhookRequest::default().active(false))
            .await
            .unwrap();
        assert!(!paused.webhook.active);

        let removed = client.webhooks().remove_webhook("wh_1").await.unwrap();
        assert_eq!(removed.http_metadata.status_code, 200);
    }

    #[tokio::test]
    async fn test_webhooks_without_secret_key() {
        let server = setup_mock_server().await;
        let client = oauth_client(&server);

        let err = client
            .webhooks()
            .register_webhook(&register_request())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Authorization { .. }));

        let err = client.webhooks().remove_webhook("wh_1").await.unwrap_err();
        assert!(matches!(err, Error::Authorization { .. }));

        assert_eq!(received_count(&server).await, 0);
    }
}

// ============================================================================
// TRANSPORT TESTS
// ============================================================================

mod transport_tests {
    use super::*;

    #[tokio::test]
    async fn test_user_agent_and_metadata_headers() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/files/file_1"))
            .and(header(
                "user-agent",
                format!("checkout-sdk/{}", env!("CARGO_PKG_VERSION")).as_str(),
            ))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("cko-request-id", "req_abc")
                    .insert_header("cko-version", "1.2.3")
                    .set_body_json(json!({"id": "file_1", "filename": "a.pdf"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let file = secret_key_client(&server)
            .files()
            .retrieve_file("file_1")
            .await
            .unwrap();
        assert_eq!(file.http_metadata.request_id.as_deref(), Some("req_abc"));
        assert_eq!(file.http_metadata.version.as_deref(), Some("1.2.3"));
    }

    #[tokio::test]
    async fn test_custom_user_agent() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/webhooks"))
            .and(header("user-agent", "my-platform/2.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = CheckoutClient::new(
            Credentials::new().with_secret_key(SECRET_KEY),
            ClientConfig::default()
                .with_environment(Environment::custom(server.uri()))
                .with_user_agent("my-platform/2.0"),
        )
        .unwrap();
        assert!(client.webhooks().retrieve_webhooks().await.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/webhooks/wh_1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = secret_key_client(&server)
            .webhooks()
            .retrieve_webhook("wh_1")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.status_code().is_none());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_http_error() {
        init_logging();
        let client = CheckoutClient::new(
            Credentials::new().with_secret_key(SECRET_KEY),
            ClientConfig::default().with_environment(Environment::custom("http://127.0.0.1:1")),
        )
        .unwrap();

        let err = client.webhooks().retrieve_webhooks().await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
        assert!(!err.reached_server());
    }

    #[tokio::test]
    async fn test_path_segments_are_encoded() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/instruments/src%201"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "src 1"})))
            .expect(1)
            .mount(&server)
            .await;

        let instrument = secret_key_client(&server)
            .instruments()
            .get("src 1")
            .await
            .unwrap();
        assert_eq!(instrument.id, "src 1");
    }

    #[tokio::test]
    async fn test_clients_share_nothing_mutable() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/webhooks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(4)
            .mount(&server)
            .await;

        let client = secret_key_client(&server);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let client = client.clone();
                tokio::spawn(async move { client.webhooks().retrieve_webhooks().await })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }
    }

    #[tokio::test]
    async fn test_not_modified_is_not_an_error() {
        let server = setup_mock_server().await;
        Mock::given(method("GET"))
            .and(path("/webhooks/wh_1"))
            .respond_with(ResponseTemplate::new(304))
            .mount(&server)
            .await;

        let response = secret_key_client(&server)
            .webhooks()
            .retrieve_webhook("wh_1")
            .await
            .expect("304 should not be an API error");
        assert_eq!(response.http_metadata.status_code, 304);
        assert!(response.webhook.id.is_empty());
    }
}

// ============================================================================
// OAUTH TESTS
// ============================================================================

mod oauth_tests {
    use super::*;

    #[tokio::test]
    async fn test_from_oauth_exchanges_client_credentials() {
        let server = setup_mock_server().await;
        Mock::given(method("POST"))
            .and(path("/connect/token"))
            .and(body_string_contains("grant_type=client_credentials"))
            .and(body_string_contains("client_id=ack_client"))
            .and(body_string_contains("scope=balances%3Aview+reports%3Aview"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "issued_token",
                "token_type": "Bearer",
                "expires_in": 3600
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/balances/ent_123"))
            .and(header("authorization", "Bearer issued_token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = CheckoutClient::from_oauth(
            "ack_client",
            "client_secret",
            &[scopes::BALANCES_VIEW, scopes::REPORTS_VIEW],
            Environment::custom(server.uri()),
        )
        .await
        .unwrap();

        assert!(client.credentials().has_oauth_token());
        assert!(!client.credentials().has_secret_key());
        let token = client.oauth_token().unwrap();
        assert!(!token.is_expired());
        assert_eq!(token.token_type(), Some("Bearer"));

        let balances = client
            .balances()
            .retrieve_entity_balances("ent_123", &BalancesQuery::new())
            .await
            .unwrap();
        assert!(balances.data.is_empty());
    }

    #[tokio::test]
    async fn test_from_oauth_rejected() {
        let server = setup_mock_server().await;
        Mock::given(method("POST"))
            .and(path("/connect/token"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"error": "invalid_client"})),
            )
            .mount(&server)
            .await;

        let err = CheckoutClient::from_oauth(
            "ack_client",
            "wrong_secret",
            &[scopes::FILES],
            Environment::custom(server.uri()),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::Authentication(_)));
        assert!(err.to_string().contains("invalid_client"));
    }

    #[tokio::test]
    async fn test_from_oauth_rejects_unrepresentable_expiry() {
        let server = setup_mock_server().await;
        Mock::given(method("POST"))
            .and(path("/connect/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "issued_token",
                "token_type": "Bearer",
                "expires_in": i64::MAX
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = CheckoutClient::from_oauth(
            "ack_client",
            "client_secret",
            &[scopes::BALANCES_VIEW],
            Environment::custom(server.uri()),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::Authentication(_)));
        assert!(err.to_string().contains("expires_in"));
    }
}
