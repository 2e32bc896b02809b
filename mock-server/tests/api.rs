use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Post};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

const VALID_BODY: &str = r#"{"title":"First","content":"Hello","author":"Ann"}"#;

// --- list ---

#[tokio::test]
async fn list_posts_empty() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/blogs").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    assert!(posts.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_post_returns_201_with_assigned_fields() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/blogs", VALID_BODY))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let post: Post = body_json(resp).await;
    assert_eq!(post.title, "First");
    assert_eq!(post.author, "Ann");
    assert!(!post.id.is_nil());
}

#[tokio::test]
async fn create_post_empty_field_returns_422_with_error_text() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/blogs",
            r#"{"title":"","content":"Hello","author":"Ann"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_text(resp).await, "title must not be empty");
}

#[tokio::test]
async fn create_post_malformed_json_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/blogs", r#"{"not_title":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- update ---

#[tokio::test]
async fn update_post_not_found() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "PUT",
            "/blogs/00000000-0000-0000-0000-000000000000",
            VALID_BODY,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_post_bad_uuid_returns_400() {
    let app = app();
    let resp = app
        .oneshot(json_request("PUT", "/blogs/not-a-uuid", VALID_BODY))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_post_empty_field_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "PUT",
            "/blogs/00000000-0000-0000-0000-000000000000",
            r#"{"title":"T","content":"C","author":""}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_text(resp).await, "author must not be empty");
}

// --- delete ---

#[tokio::test]
async fn delete_post_not_found() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/blogs/00000000-0000-0000-0000-000000000000")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create two posts
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/blogs", VALID_BODY))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let first: Post = body_json(resp).await;

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/blogs",
            r#"{"title":"Second","content":"More","author":"Bea"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let second: Post = body_json(resp).await;

    // list preserves insertion order
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(Request::builder().uri("/blogs").body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, first.id);
    assert_eq!(posts[1].id, second.id);

    // update is a full replacement acknowledged with an empty 204
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/blogs/{}", first.id),
            r#"{"title":"Renamed","content":"Hello","author":"Ann"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_text(resp).await.is_empty());

    // the list reflects the update; createdAt and id are untouched
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(Request::builder().uri("/blogs").body(String::new()).unwrap())
        .await
        .unwrap();
    let posts: Vec<Post> = body_json(resp).await;
    assert_eq!(posts[0].title, "Renamed");
    assert_eq!(posts[0].id, first.id);
    assert_eq!(posts[0].created_at, first.created_at);

    // delete the first post
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri(&format!("/blogs/{}", first.id))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // delete again — gone
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri(&format!("/blogs/{}", first.id))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // only the second post remains
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(Request::builder().uri("/blogs").body(String::new()).unwrap())
        .await
        .unwrap();
    let posts: Vec<Post> = body_json(resp).await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, second.id);
}
