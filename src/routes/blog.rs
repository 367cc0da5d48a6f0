/**
 * Blog Routes
 * Read endpoints for blog posts
 */
use axum::{
    extract::{Path, State},
    Json,
};

use crate::routes::ApiError;
use crate::schema::BlogPost;
use crate::AppState;

/// GET /api/blog - all posts, most recently published first
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let posts = state.storage.get_blog_posts().await?;
    Ok(Json(posts))
}

/// GET /api/blog/{slug} - single post looked up by slug
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, ApiError> {
    let post = state
        .storage
        .get_blog_post(&slug)
        .await?
        .ok_or(ApiError::NotFound("Blog post not found"))?;
    Ok(Json(post))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::{get_json, test_app};

    #[tokio::test]
    async fn test_list_posts_returns_seeded_posts_newest_first() {
        let (status, body) = get_json(test_app(), "/api/blog").await;

        assert_eq!(status, StatusCode::OK);
        let posts = body.as_array().unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(
            posts[0]["slug"],
            "digital-transformation-construction-bim-drone"
        );
        assert_eq!(posts[2]["slug"], "smart-infrastructure-iot-integration");
        assert!(posts[0]["publishedAt"].is_string());
        assert!(posts[0]["imageUrl"].is_string());
    }

    #[tokio::test]
    async fn test_get_post_by_slug() {
        let (status, body) = get_json(test_app(), "/api/blog/sustainable-design-principles").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["author"], "Sarah Thompson");
        assert_eq!(body["category"], "Sustainability");
    }

    #[tokio::test]
    async fn test_get_post_unknown_slug_is_404() {
        let (status, body) = get_json(test_app(), "/api/blog/does-not-exist").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Blog post not found");
    }
}
