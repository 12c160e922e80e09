pub mod catalog;
pub mod feed;
pub mod generator;
pub mod models;
pub mod routes;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{routing::get, Router};
use serde_json::json;
use voyage_kernel::settings::GeneratorSettings;
use voyage_kernel::{InitCtx, Module};

use generator::PostGenerator;
use routes::PostsState;

/// Travel posts: seed catalog, feed projection and the mock generator
pub struct PostsModule {
    state: Arc<PostsState>,
}

impl PostsModule {
    pub fn new(generator: PostGenerator) -> Self {
        Self {
            state: Arc::new(PostsState {
                generator,
                catalog: catalog::seed_posts(),
            }),
        }
    }
}

#[async_trait]
impl Module for PostsModule {
    fn name(&self) -> &'static str {
        "posts"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let (read_min, read_max) = self.state.generator.read_time_range();
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            seed_posts = self.state.catalog.len(),
            read_min,
            read_max,
            "posts module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(routes::list_feed))
            .route("/tags", get(routes::list_tags))
            .route(
                "/generate",
                get(routes::describe_generation).post(routes::generate_post),
            )
            .route("/health", get(routes::health_check))
            .with_state(self.state.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let error_response = json!({
            "description": "Internal server error",
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                }
            }
        });

        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "Feed of travel posts, optionally filtered by tag",
                        "tags": ["Posts"],
                        "parameters": [{
                            "name": "tag",
                            "in": "query",
                            "required": false,
                            "description": "Exact, case-sensitive tag to filter by",
                            "schema": { "type": "string" }
                        }],
                        "responses": {
                            "200": {
                                "description": "Feed view",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/FeedView" }
                                    }
                                }
                            },
                            "400": {
                                "description": "Malformed query",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/tags": {
                    "get": {
                        "summary": "Tag vocabulary of the catalog",
                        "tags": ["Posts"],
                        "responses": {
                            "200": {
                                "description": "Distinct tags in first-seen order",
                                "content": {
                                    "application/json": {
                                        "schema": { "type": "array", "items": { "type": "string" } }
                                    }
                                }
                            }
                        }
                    }
                },
                "/generate": {
                    "get": {
                        "summary": "Describe the generation endpoint",
                        "tags": ["Posts"],
                        "responses": {
                            "200": {
                                "description": "Static capability description",
                                "content": {
                                    "application/json": {
                                        "schema": { "type": "object" }
                                    }
                                }
                            }
                        }
                    },
                    "post": {
                        "summary": "Generate a new AI travel post",
                        "tags": ["Posts"],
                        "responses": {
                            "200": {
                                "description": "Generated post",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/GenerateResponse" }
                                    }
                                }
                            },
                            "500": error_response
                        }
                    }
                },
                "/health": {
                    "get": {
                        "summary": "Posts health check",
                        "tags": ["Posts"],
                        "responses": {
                            "200": {
                                "description": "OK",
                                "content": {
                                    "text/plain": { "schema": { "type": "string" } }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "TravelPost": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "title": { "type": "string" },
                            "excerpt": { "type": "string" },
                            "content": { "type": "string" },
                            "destination": { "type": "string" },
                            "country": { "type": "string" },
                            "imageUrl": { "type": "string", "format": "uri" },
                            "publishedAt": { "type": "string", "format": "date-time" },
                            "readTime": { "type": "integer", "minimum": 1 },
                            "tags": { "type": "array", "items": { "type": "string" } },
                            "aiGenerated": { "type": "boolean" }
                        },
                        "required": [
                            "id", "title", "excerpt", "content", "destination", "country",
                            "imageUrl", "publishedAt", "readTime", "tags", "aiGenerated"
                        ]
                    },
                    "GenerateResponse": {
                        "type": "object",
                        "properties": {
                            "success": { "type": "boolean" },
                            "post": { "$ref": "#/components/schemas/TravelPost" },
                            "message": { "type": "string" }
                        },
                        "required": ["success", "post", "message"]
                    },
                    "FeedView": {
                        "type": "object",
                        "properties": {
                            "posts": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/TravelPost" }
                            },
                            "tags": { "type": "array", "items": { "type": "string" } },
                            "selectedTag": { "type": "string" },
                            "total": { "type": "integer" }
                        },
                        "required": ["posts", "tags", "total"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "posts module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "posts module stopped");
        Ok(())
    }
}

/// Create the posts module from generator settings
pub fn create_module(settings: &GeneratorSettings) -> anyhow::Result<Arc<dyn Module>> {
    let generator = PostGenerator::new(settings)?;
    Ok(Arc::new(PostsModule::new(generator)))
}
