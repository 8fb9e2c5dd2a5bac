//! Shared test doubles: a scripted chat provider and a scripted user-data
//! store.

// Each test binary uses a subset of these helpers
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;

use fowazz::llm::{
    ChatProvider, ChatRequest, FinishReason, LlmError, StreamChatFuture, StreamEvent,
};
use fowazz::supabase::{SupabaseError, UserDataStore};

/// One scripted upstream event
#[derive(Debug, Clone)]
pub enum ScriptItem {
    Content(&'static str),
    Reasoning(&'static str),
    Finish(FinishReason),
    Error(&'static str),
}

/// Chat provider that replays a fixed script instead of calling a real API
pub struct ScriptedProvider {
    script: Vec<ScriptItem>,
    /// When set, `stream_chat` fails before yielding anything
    fail_open: Option<String>,
    /// Last request passed to `stream_chat`, for assertions
    pub last_request: Mutex<Option<ChatRequest>>,
}

impl ScriptedProvider {
    pub fn new(script: Vec<ScriptItem>) -> Self {
        Self {
            script,
            fail_open: None,
            last_request: Mutex::new(None),
        }
    }

    pub fn failing_to_open(message: &str) -> Self {
        Self {
            script: Vec::new(),
            fail_open: Some(message.to_string()),
            last_request: Mutex::new(None),
        }
    }
}

impl ChatProvider for ScriptedProvider {
    fn stream_chat(&self, request: ChatRequest) -> StreamChatFuture<'_> {
        Box::pin(async move {
            *self.last_request.lock().unwrap() = Some(request);

            if let Some(message) = &self.fail_open {
                return Err(LlmError::StreamError(message.clone()));
            }

            let events: Vec<Result<StreamEvent, LlmError>> = self
                .script
                .iter()
                .cloned()
                .map(|item| match item {
                    ScriptItem::Content(text) => Ok(StreamEvent::ContentDelta {
                        text: text.to_string(),
                    }),
                    ScriptItem::Reasoning(text) => Ok(StreamEvent::ReasoningDelta {
                        text: text.to_string(),
                    }),
                    ScriptItem::Finish(reason) => Ok(StreamEvent::Finished { reason }),
                    ScriptItem::Error(message) => Err(LlmError::StreamError(message.to_string())),
                })
                .collect();

            Ok(Box::pin(futures::stream::iter(events)) as _)
        })
    }
}

/// User-data store that records calls and fails where told to
pub struct ScriptedStore {
    /// Tables whose row deletion should fail
    pub failing_tables: Vec<&'static str>,
    /// Whether deleting the identity record should fail
    pub fail_auth_delete: bool,
    /// Every call made, in order
    pub calls: Mutex<Vec<String>>,
}

impl ScriptedStore {
    pub fn succeeding() -> Self {
        Self {
            failing_tables: Vec::new(),
            fail_auth_delete: false,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl UserDataStore for ScriptedStore {
    async fn delete_rows(&self, table: &str, user_id: &str) -> Result<(), SupabaseError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("rows:{}:{}", table, user_id));
        if self.failing_tables.contains(&table) {
            Err(SupabaseError::Api {
                status: 500,
                body: format!("cannot delete from {}", table),
            })
        } else {
            Ok(())
        }
    }

    async fn delete_auth_user(&self, user_id: &str) -> Result<(), SupabaseError> {
        self.calls.lock().unwrap().push(format!("auth:{}", user_id));
        if self.fail_auth_delete {
            Err(SupabaseError::Api {
                status: 500,
                body: "admin delete failed".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
