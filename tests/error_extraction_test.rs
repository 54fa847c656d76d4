#[cfg(test)]
mod error_extraction {

    use serde_json::json;

    use vimeo_net::http_client::http_client::HttpClient;
    use vimeo_net::http_client::reqwest_http_client::ReqwestHttpClient;
    use vimeo_net::http_client::request::Request;
    use vimeo_net::{JsonCodec, extract_error};

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn fetch(mock_server: &MockServer, endpoint: &str) -> vimeo_net::http_client::response::Response {
        ReqwestHttpClient::default()
            .execute(Request::get(format!("{}{}", mock_server.uri(), endpoint)))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn should_not_report_an_error_for_a_successful_call() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "Staff" })))
            .mount(&mock_server)
            .await;

        let response = fetch(&mock_server, "/me").await;

        assert!(extract_error(&JsonCodec::default(), Some(&response)).is_none());
    }

    #[tokio::test]
    async fn should_decode_the_error_body_of_a_failed_call() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/videos/404"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": "The requested video couldn't be found.",
                "link": null,
                "developer_message": "The requested video couldn't be found.",
                "error_code": 5000
            })))
            .mount(&mock_server)
            .await;

        let response = fetch(&mock_server, "/videos/404").await;
        let api_error = extract_error(&JsonCodec::default(), Some(&response)).unwrap();

        assert_eq!(api_error.http_status_code(), 404);
        assert_eq!(api_error.error_code, Some(5000));
        assert_eq!(api_error.error_message(), "The requested video couldn't be found.");
        assert_eq!(api_error.response(), Some(&response));
    }

    #[tokio::test]
    async fn should_fall_back_to_a_default_error_for_a_non_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&mock_server)
            .await;

        let response = fetch(&mock_server, "/me").await;
        let api_error = extract_error(&JsonCodec::default(), Some(&response)).unwrap();

        assert!(api_error.is_service_unavailable());
        assert_eq!(api_error.error_message, None);
        assert_eq!(api_error.error_code, None);
        assert_eq!(api_error.response(), Some(&response));
    }
}
