use crate::config::ApiConfig;
use manga_ui::{Genre, Manga};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Why a recommendation request failed
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be sent, or the body could not be read
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Server error: {0}")]
    Status(StatusCode),
    /// Body is not a JSON array of manga records
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Body of `POST /recommend/`
#[derive(Serialize)]
struct RecommendRequest {
    genre: Genre,
    top_n: u32,
}

/// One entry of the service response
#[derive(Deserialize)]
struct MangaRecord {
    name: String,
    genre: String,
    rating: f64,
}

impl From<MangaRecord> for Manga {
    fn from(record: MangaRecord) -> Self {
        Manga {
            name: record.name,
            genre: record.genre,
            rating: record.rating,
        }
    }
}

/// HTTP client for the recommendation service
///
/// Cheap to clone; provided to the component tree through context.
#[derive(Clone, Debug)]
pub struct RecommendationsClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl RecommendationsClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Build the POST for a genre. The JSON body also sets the content type.
    pub fn build_request(&self, genre: Genre) -> Result<reqwest::Request, ApiError> {
        let body = RecommendRequest {
            genre,
            top_n: self.config.top_n,
        };
        let request = self.http.post(&self.config.endpoint).json(&body).build()?;
        Ok(request)
    }

    /// Fetch recommendations for a genre, in service order
    pub async fn fetch_recommendations(&self, genre: Genre) -> Result<Vec<Manga>, ApiError> {
        let request = self.build_request(genre)?;
        debug!(%genre, endpoint = %self.config.endpoint, "POST recommendation request");
        let resp = self.http.execute(request).await?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%status, %genre, "Recommendation service returned an error status");
            return Err(ApiError::Status(status));
        }

        let body = resp.bytes().await?;
        decode_recommendations(&body)
    }
}

/// Decode a response body into display records, keeping order
pub fn decode_recommendations(body: &[u8]) -> Result<Vec<Manga>, ApiError> {
    let records: Vec<MangaRecord> = serde_json::from_slice(body)?;
    Ok(records.into_iter().map(Manga::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use manga_ui::stores::{RecommendationsState, FETCH_ERROR_MESSAGE};
    use manga_ui::format_rating;
    use axum::http::HeaderMap;
    use axum::routing::post;
    use axum::Router;
    use reqwest::header::CONTENT_TYPE;
    use reqwest::Method;
    use std::sync::{Arc, Mutex};

    fn client() -> RecommendationsClient {
        RecommendationsClient::new(ApiConfig::default())
    }

    #[test]
    fn request_is_a_single_json_post() {
        let request = client().build_request(Genre::Action).unwrap();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.url().as_str(), "http://localhost:8000/recommend/");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, br#"{"genre":"Action","top_n":6}"#);
    }

    #[test]
    fn request_uses_genre_label() {
        let request = client().build_request(Genre::SliceOfLife).unwrap();
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, br#"{"genre":"Slice of Life","top_n":6}"#);
    }

    #[test]
    fn request_follows_config() {
        let config = ApiConfig {
            endpoint: "https://manga.example/recommend/".to_string(),
            top_n: 3,
        };
        let request = RecommendationsClient::new(config)
            .build_request(Genre::Horror)
            .unwrap();

        assert_eq!(request.url().as_str(), "https://manga.example/recommend/");
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, br#"{"genre":"Horror","top_n":3}"#);
    }

    #[test]
    fn invalid_endpoint_is_an_error() {
        let client = RecommendationsClient::new(ApiConfig::default().with_endpoint("not a url"));
        assert!(matches!(
            client.build_request(Genre::Action),
            Err(ApiError::Network(_))
        ));
    }

    #[test]
    fn decode_keeps_service_order() {
        let body = br#"[
            {"name": "Vagabond", "genre": "Action, Drama", "rating": 9.1},
            {"name": "One Piece", "genre": "Adventure", "rating": 9.2}
        ]"#;
        let manga = decode_recommendations(body).unwrap();

        let names: Vec<&str> = manga.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Vagabond", "One Piece"]);
        assert_eq!(manga[0].genre, "Action, Drama");
    }

    #[test]
    fn decode_accepts_integer_rating() {
        let manga = decode_recommendations(br#"[{"name":"A","genre":"Drama","rating":8}]"#).unwrap();
        assert_eq!(manga[0].rating, 8.0);
    }

    #[test]
    fn decode_empty_array() {
        assert!(decode_recommendations(b"[]").unwrap().is_empty());
    }

    #[test]
    fn decode_rejects_malformed_bodies() {
        let bodies: [&[u8]; 4] = [
            br#"{"detail":"Anime not found!"}"#,
            br#"[{"name":"A","genre":"Drama"}]"#,
            br#"[{"name":"A","genre":"Drama","rating":"high"}]"#,
            b"<html>oops</html>",
        ];
        for body in bodies {
            assert!(matches!(
                decode_recommendations(body),
                Err(ApiError::Parse(_))
            ));
        }
    }

    #[test]
    fn success_response_populates_state() {
        let mut state = RecommendationsState::default();
        state.select_genre(Genre::Adventure);
        assert_eq!(state.begin_fetch(), Some(Genre::Adventure));

        let body = br#"[{"name":"One Piece","genre":"Adventure","rating":9.2}]"#;
        state.finish_fetch(decode_recommendations(body));

        assert!(!state.is_loading);
        assert_eq!(state.error, None);
        assert_eq!(state.recommendations.len(), 1);
        assert_eq!(format_rating(state.recommendations[0].rating), "9.20");
    }

    #[test]
    fn server_error_sets_user_message() {
        let mut state = RecommendationsState::default();
        state.select_genre(Genre::Action);
        state.begin_fetch();

        state.finish_fetch::<ApiError>(Err(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR)));

        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
    }

    #[test]
    fn parse_error_sets_user_message() {
        let mut state = RecommendationsState::default();
        state.select_genre(Genre::Action);
        state.begin_fetch();

        state.finish_fetch(decode_recommendations(b"not json"));

        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
        assert!(state.recommendations.is_empty());
    }

    #[test]
    fn status_error_message_names_status() {
        let err = ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Server error: 500 Internal Server Error");
    }

    /// What the local recommendation server saw
    #[derive(Clone, Debug, PartialEq)]
    struct ReceivedPost {
        content_type: Option<String>,
        body: String,
    }

    type Received = Arc<Mutex<Vec<ReceivedPost>>>;

    /// Serve `POST /recommend/` on an ephemeral port with a canned reply.
    /// Returns the endpoint URL and the log of received requests.
    async fn serve_recommend(status: StatusCode, reply: &'static str) -> (String, Received) {
        let received: Received = Arc::default();
        let log = received.clone();
        let app = Router::new().route(
            "/recommend/",
            post(move |headers: HeaderMap, body: String| {
                let log = log.clone();
                async move {
                    log.lock().unwrap().push(ReceivedPost {
                        content_type: headers
                            .get(CONTENT_TYPE)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string),
                        body,
                    });
                    (status, reply)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        (format!("http://{addr}/recommend/"), received)
    }

    fn client_for(endpoint: &str) -> RecommendationsClient {
        RecommendationsClient::new(ApiConfig::default().with_endpoint(endpoint))
    }

    fn action_post() -> ReceivedPost {
        ReceivedPost {
            content_type: Some("application/json".to_string()),
            body: r#"{"genre":"Action","top_n":6}"#.to_string(),
        }
    }

    #[tokio::test]
    async fn fetch_success_sends_one_post_and_decodes() {
        let (endpoint, received) = serve_recommend(
            StatusCode::OK,
            r#"[{"name":"One Piece","genre":"Adventure","rating":9.2}]"#,
        )
        .await;

        let mut state = RecommendationsState::default();
        state.select_genre(Genre::Action);
        let genre = state.begin_fetch().unwrap();
        state.finish_fetch(client_for(&endpoint).fetch_recommendations(genre).await);

        assert_eq!(*received.lock().unwrap(), vec![action_post()]);
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
        assert_eq!(state.recommendations.len(), 1);
        assert_eq!(state.recommendations[0].name, "One Piece");
        assert_eq!(format_rating(state.recommendations[0].rating), "9.20");
    }

    #[tokio::test]
    async fn fetch_server_error_maps_to_status() {
        let (endpoint, received) =
            serve_recommend(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").await;

        let result = client_for(&endpoint)
            .fetch_recommendations(Genre::Action)
            .await;

        assert!(matches!(
            result,
            Err(ApiError::Status(status)) if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
        assert_eq!(*received.lock().unwrap(), vec![action_post()]);

        let mut state = RecommendationsState::default();
        state.select_genre(Genre::Action);
        state.begin_fetch();
        state.finish_fetch(result);

        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn fetch_malformed_body_is_parse_error() {
        let (endpoint, _received) =
            serve_recommend(StatusCode::OK, r#"{"detail":"Anime not found!"}"#).await;

        let result = client_for(&endpoint)
            .fetch_recommendations(Genre::Drama)
            .await;

        assert!(matches!(result, Err(ApiError::Parse(_))));
    }

    #[tokio::test]
    async fn fetch_unreachable_service_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = client_for(&format!("http://{addr}/recommend/"))
            .fetch_recommendations(Genre::Action)
            .await;

        assert!(matches!(result, Err(ApiError::Network(_))));
    }
}
