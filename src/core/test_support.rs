use crate::core::{
    ConfirmationProvider, ListPage, SuppressedDestination, SuppressionApi, SuppressionReason,
};
use crate::utils::error::{Result, SuppressError};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

pub fn destination(email: &str, reason: SuppressionReason) -> SuppressedDestination {
    SuppressedDestination::new(
        email,
        reason,
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
    )
}

#[derive(Debug, Clone, Copy)]
pub enum DeleteStep {
    Ok,
    Throttle,
    Fail,
}

#[derive(Default)]
pub struct MockApi {
    pages: Vec<ListPage>,
    fail_list_from: Option<usize>,
    list_tokens: Mutex<Vec<Option<String>>>,
    delete_script: Mutex<HashMap<String, VecDeque<DeleteStep>>>,
    delete_calls: Mutex<Vec<String>>,
}

impl MockApi {
    pub fn with_pages(pages: Vec<ListPage>) -> Self {
        Self {
            pages,
            ..Default::default()
        }
    }

    pub fn failing_list_after(mut self, pages_served: usize) -> Self {
        self.fail_list_from = Some(pages_served);
        self
    }

    /// 指定某個地址每次刪除呼叫的結果，用完之後一律成功
    pub fn script_delete(self, email: &str, steps: Vec<DeleteStep>) -> Self {
        self.delete_script
            .lock()
            .unwrap()
            .insert(email.to_string(), steps.into());
        self
    }

    pub fn list_tokens(&self) -> Vec<Option<String>> {
        self.list_tokens.lock().unwrap().clone()
    }

    pub fn delete_calls(&self) -> Vec<String> {
        self.delete_calls.lock().unwrap().clone()
    }

    pub fn delete_calls_for(&self, email: &str) -> usize {
        self.delete_calls().iter().filter(|e| *e == email).count()
    }
}

#[async_trait]
impl SuppressionApi for MockApi {
    async fn list_page(&self, next_token: Option<String>) -> Result<ListPage> {
        let index = {
            let mut tokens = self.list_tokens.lock().unwrap();
            tokens.push(next_token);
            tokens.len() - 1
        };

        if matches!(self.fail_list_from, Some(limit) if index >= limit) {
            return Err(SuppressError::ListError {
                message: "BadRequestException: simulated".to_string(),
            });
        }

        Ok(self.pages.get(index).cloned().unwrap_or_default())
    }

    async fn delete_destination(&self, email_address: &str) -> Result<()> {
        self.delete_calls
            .lock()
            .unwrap()
            .push(email_address.to_string());

        let step = self
            .delete_script
            .lock()
            .unwrap()
            .get_mut(email_address)
            .and_then(|steps| steps.pop_front())
            .unwrap_or(DeleteStep::Ok);

        match step {
            DeleteStep::Ok => Ok(()),
            DeleteStep::Throttle => Err(SuppressError::Throttled {
                message: "TooManyRequestsException: Rate exceeded".to_string(),
            }),
            DeleteStep::Fail => Err(SuppressError::DeleteError {
                email_address: email_address.to_string(),
                message: "NotFoundException: simulated".to_string(),
            }),
        }
    }
}

/// Replays a fixed answer and records the prompts it was shown.
pub struct CannedConfirmation {
    answer: String,
    pub prompts: Vec<String>,
}

impl CannedConfirmation {
    pub fn new(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            prompts: Vec::new(),
        }
    }
}

impl ConfirmationProvider for CannedConfirmation {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        Ok(self.answer.clone())
    }
}
