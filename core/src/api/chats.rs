//! Buyer chats of a business.

use serde_json::{json, Map, Value};

use crate::args::Args;
use crate::client::MarketClient;
use crate::endpoint::Endpoint;
use crate::validate;

pub const LIST: Endpoint = Endpoint::post("chats.list", "businesses/{business_id}/chats")
    .any_query()
    .any_body();
pub const CREATE: Endpoint =
    Endpoint::post("chats.create", "businesses/{business_id}/chats/new").body(&["orderId"]);
pub const SEND_MESSAGE: Endpoint =
    Endpoint::post("chats.send_message", "businesses/{business_id}/chats/message")
        .query(&["chatId"])
        .body(&["message"]);
pub const SEND_FILE: Endpoint =
    Endpoint::post("chats.send_file", "businesses/{business_id}/chats/file/send")
        .query(&["chatId", "filePath"]);
pub const HISTORY: Endpoint =
    Endpoint::post("chats.history", "businesses/{business_id}/chats/history")
        .query(&["chatId", "limit", "page_token"])
        .body(&["messageIdFrom"]);

pub(crate) const ENDPOINTS: &[Endpoint] = &[LIST, CREATE, SEND_MESSAGE, SEND_FILE, HISTORY];

#[derive(Debug, Clone, Copy)]
pub struct Chats<'a> {
    client: &'a MarketClient,
}

impl<'a> Chats<'a> {
    pub(crate) fn new(client: &'a MarketClient) -> Self {
        Self { client }
    }

    /// Chats of the business. An empty filter `{}` is sent when `body` is
    /// `None`; the vendor rejects a bodyless request here.
    pub fn list(
        &self,
        business_id: u64,
        params: Option<&Map<String, Value>>,
        body: Option<Value>,
    ) -> Option<Value> {
        self.client.call(
            &LIST,
            Args::new()
                .path("business_id", business_id)
                .query_map(params)
                .body(Some(body.filter(|b| !b.is_null()).unwrap_or_else(|| json!({})))),
        )
    }

    /// Open a chat about an order.
    pub fn create(&self, business_id: u64, order_id: u64) -> Option<Value> {
        self.client.call(
            &CREATE,
            Args::new()
                .path("business_id", business_id)
                .field("orderId", order_id),
        )
    }

    pub fn send_message(&self, business_id: u64, chat_id: u64, message: &str) -> Option<Value> {
        self.client.call_checked(&SEND_MESSAGE, || {
            validate::not_blank("message", message)?;
            Ok(Args::new()
                .path("business_id", business_id)
                .query("chatId", chat_id)
                .field("message", message))
        })
    }

    /// Attach a file to a chat. The vendor takes the path as the
    /// `filePath` query parameter.
    pub fn send_file(&self, business_id: u64, chat_id: u64, file_path: &str) -> Option<Value> {
        self.client.call_checked(&SEND_FILE, || {
            validate::not_blank("file_path", file_path)?;
            Ok(Args::new()
                .path("business_id", business_id)
                .query("chatId", chat_id)
                .query("filePath", file_path))
        })
    }

    /// Messages of a chat, optionally starting at `message_id_from`.
    pub fn history(
        &self,
        business_id: u64,
        chat_id: u64,
        message_id_from: Option<u64>,
        limit: Option<u32>,
        page_token: Option<&str>,
    ) -> Option<Value> {
        self.client.call(
            &HISTORY,
            Args::new()
                .path("business_id", business_id)
                .query("chatId", chat_id)
                .query("limit", limit)
                .query("page_token", page_token)
                .opt_field("messageIdFrom", message_id_from),
        )
    }
}
