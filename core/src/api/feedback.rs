//! Goods feedback and seller comments on it.

use serde_json::Value;

use crate::args::Args;
use crate::client::MarketClient;
use crate::endpoint::Endpoint;
use crate::validate;

pub const LIST: Endpoint = Endpoint::post("feedback.list", "businesses/{business_id}/goods-feedback")
    .query(&["limit", "page_token"])
    .any_body();
pub const COMMENTS: Endpoint =
    Endpoint::post("feedback.comments", "businesses/{business_id}/goods-feedback/comments")
        .query(&["page_token"])
        .body(&["feedbackId"]);
pub const UPDATE_COMMENT: Endpoint = Endpoint::post(
    "feedback.update_comment",
    "businesses/{business_id}/goods-feedback/comments/update",
)
.body(&["feedbackId", "text", "commentId"]);
pub const DELETE_COMMENT: Endpoint = Endpoint::post(
    "feedback.delete_comment",
    "businesses/{business_id}/goods-feedback/comments/delete",
)
.body(&["id"]);
pub const SKIP_REACTION: Endpoint = Endpoint::post(
    "feedback.skip_reaction",
    "businesses/{business_id}/goods-feedback/skip-reaction",
)
.body(&["feedbackIds"]);

pub(crate) const ENDPOINTS: &[Endpoint] =
    &[LIST, COMMENTS, UPDATE_COMMENT, DELETE_COMMENT, SKIP_REACTION];

#[derive(Debug, Clone, Copy)]
pub struct Feedback<'a> {
    client: &'a MarketClient,
}

impl<'a> Feedback<'a> {
    pub(crate) fn new(client: &'a MarketClient) -> Self {
        Self { client }
    }

    pub fn list(
        &self,
        business_id: u64,
        limit: Option<u32>,
        page_token: Option<&str>,
        body: Option<Value>,
    ) -> Option<Value> {
        self.client.call(
            &LIST,
            Args::new()
                .path("business_id", business_id)
                .query("limit", limit)
                .query("page_token", page_token)
                .body(body),
        )
    }

    pub fn comments(
        &self,
        business_id: u64,
        feedback_id: u64,
        page_token: Option<&str>,
    ) -> Option<Value> {
        self.client.call(
            &COMMENTS,
            Args::new()
                .path("business_id", business_id)
                .query("page_token", page_token)
                .field("feedbackId", feedback_id),
        )
    }

    /// Add a comment, or edit `comment_id` when given.
    pub fn update_comment(
        &self,
        business_id: u64,
        feedback_id: u64,
        text: &str,
        comment_id: Option<u64>,
    ) -> Option<Value> {
        self.client.call_checked(&UPDATE_COMMENT, || {
            validate::not_blank("text", text)?;
            Ok(Args::new()
                .path("business_id", business_id)
                .field("feedbackId", feedback_id)
                .field("text", text)
                .opt_field("commentId", comment_id))
        })
    }

    pub fn delete_comment(&self, business_id: u64, comment_id: u64) -> Option<Value> {
        self.client.call(
            &DELETE_COMMENT,
            Args::new()
                .path("business_id", business_id)
                .field("id", comment_id),
        )
    }

    /// Mark feedback as not needing an answer.
    pub fn skip_reaction(&self, business_id: u64, feedback_ids: &[u64]) -> Option<Value> {
        self.client.call_checked(&SKIP_REACTION, || {
            validate::non_empty("feedback_ids", feedback_ids)?;
            Ok(Args::new()
                .path("business_id", business_id)
                .field("feedbackIds", feedback_ids))
        })
    }
}
