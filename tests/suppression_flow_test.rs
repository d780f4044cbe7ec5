use anyhow::Result;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use ses_suppress::{
    Command, CommandOutcome, ConfirmationProvider, ListFormat, ListPage, RetryPolicy,
    SuppressError, SuppressedDestination, SuppressionApi, SuppressionEngine, SuppressionReason,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// 以 token 串接多頁的假 SES
struct PagedSes {
    pages: HashMap<Option<String>, ListPage>,
    throttles_left: Mutex<HashMap<String, usize>>,
    fatal_for: Option<String>,
    deleted: Mutex<Vec<String>>,
}

impl PagedSes {
    fn new(pages: Vec<(Option<&str>, ListPage)>) -> Self {
        Self {
            pages: pages
                .into_iter()
                .map(|(token, page)| (token.map(str::to_string), page))
                .collect(),
            throttles_left: Mutex::new(HashMap::new()),
            fatal_for: None,
            deleted: Mutex::new(Vec::new()),
        }
    }

    fn throttle(self, email: &str, times: usize) -> Self {
        self.throttles_left
            .lock()
            .unwrap()
            .insert(email.to_string(), times);
        self
    }

    fn fatal(mut self, email: &str) -> Self {
        self.fatal_for = Some(email.to_string());
        self
    }

    fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl SuppressionApi for PagedSes {
    async fn list_page(&self, next_token: Option<String>) -> ses_suppress::Result<ListPage> {
        self.pages
            .get(&next_token)
            .cloned()
            .ok_or_else(|| SuppressError::ListError {
                message: format!("InvalidNextTokenException: {:?}", next_token),
            })
    }

    async fn delete_destination(&self, email_address: &str) -> ses_suppress::Result<()> {
        self.deleted.lock().unwrap().push(email_address.to_string());

        if self.fatal_for.as_deref() == Some(email_address) {
            return Err(SuppressError::DeleteError {
                email_address: email_address.to_string(),
                message: "BadRequestException".to_string(),
            });
        }

        let mut throttles = self.throttles_left.lock().unwrap();
        if let Some(left) = throttles.get_mut(email_address) {
            if *left > 0 {
                *left -= 1;
                return Err(SuppressError::Throttled {
                    message: "TooManyRequestsException".to_string(),
                });
            }
        }
        Ok(())
    }
}

struct Answer(&'static str);

impl ConfirmationProvider for Answer {
    fn ask(&mut self, _prompt: &str) -> ses_suppress::Result<String> {
        Ok(self.0.to_string())
    }
}

fn dest(email: &str, reason: &str) -> SuppressedDestination {
    SuppressedDestination::new(
        email,
        SuppressionReason::from(reason),
        Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
    )
}

fn three_page_ses() -> PagedSes {
    PagedSes::new(vec![
        (
            None,
            ListPage {
                destinations: vec![dest("a@x.com", "BOUNCE")],
                next_token: Some("p2".to_string()),
            },
        ),
        (
            Some("p2"),
            ListPage {
                destinations: vec![dest("b@x.com", "COMPLAINT")],
                next_token: Some("p3".to_string()),
            },
        ),
        (
            Some("p3"),
            ListPage {
                destinations: vec![dest("c@x.com", "BOUNCE")],
                next_token: None,
            },
        ),
    ])
}

fn fast_engine(ses: PagedSes) -> SuppressionEngine<PagedSes> {
    SuppressionEngine::with_policy(ses, RetryPolicy::new(3, Duration::ZERO))
}

#[tokio::test]
async fn test_summary_end_to_end() -> Result<()> {
    let engine = fast_engine(three_page_ses());
    let mut out = Vec::new();

    engine
        .run(&Command::Summary, &mut Answer(""), &mut out)
        .await?;

    let text = String::from_utf8(out)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Reason, Count");
    assert!(lines.contains(&"BOUNCE, 2"));
    assert!(lines.contains(&"COMPLAINT, 1"));
    assert_eq!(lines.last(), Some(&"TOTAL, 3"));
    Ok(())
}

#[tokio::test]
async fn test_list_all_follows_tokens_in_order() -> Result<()> {
    let engine = fast_engine(three_page_ses());
    let mut out = Vec::new();

    let outcome = engine
        .run(
            &Command::ListAll {
                format: ListFormat::Csv,
            },
            &mut Answer(""),
            &mut out,
        )
        .await?;

    assert_eq!(outcome, CommandOutcome::Listed { count: 3 });
    let text = String::from_utf8(out)?;
    let emails: Vec<&str> = text
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap_or_default())
        .collect();
    assert_eq!(emails, vec!["a@x.com", "b@x.com", "c@x.com"]);
    Ok(())
}

#[tokio::test]
async fn test_delete_all_declined_variants() -> Result<()> {
    for answer in ["n", "  no  ", "DELETE ME", "yes"] {
        let engine = fast_engine(three_page_ses());
        let mut out = Vec::new();

        let result = engine
            .run(&Command::DeleteAll, &mut Answer(answer), &mut out)
            .await;

        assert!(matches!(result, Err(SuppressError::Cancelled)));
        assert!(engine.api().deleted().is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn test_delete_all_retries_throttled_record() -> Result<()> {
    let engine = fast_engine(three_page_ses().throttle("b@x.com", 2));
    let mut out = Vec::new();

    engine
        .run(&Command::DeleteAll, &mut Answer("DELETE\n"), &mut out)
        .await?;

    let deleted = engine.api().deleted();
    assert_eq!(deleted.iter().filter(|e| *e == "b@x.com").count(), 3);
    assert_eq!(deleted.len(), 5);

    let text = String::from_utf8(out)?;
    assert!(text.contains("Progress: 3/3"));
    assert!(text.ends_with("Deletion complete.\n"));
    Ok(())
}

#[tokio::test]
async fn test_delete_all_fatal_error_halts_batch() -> Result<()> {
    let engine = fast_engine(three_page_ses().fatal("a@x.com"));
    let mut out = Vec::new();

    let result = engine
        .run(&Command::DeleteAll, &mut Answer("delete"), &mut out)
        .await;

    assert!(matches!(result, Err(SuppressError::DeleteError { .. })));
    assert_eq!(engine.api().deleted(), vec!["a@x.com"]);
    assert!(!String::from_utf8(out)?.contains("Deletion complete."));
    Ok(())
}

#[tokio::test]
async fn test_bad_token_surfaces_listing_error() -> Result<()> {
    let ses = PagedSes::new(vec![(
        None,
        ListPage {
            destinations: vec![dest("a@x.com", "BOUNCE")],
            next_token: Some("missing".to_string()),
        },
    )]);
    let engine = fast_engine(ses);
    let mut out = Vec::new();

    let result = engine
        .run(&Command::Summary, &mut Answer(""), &mut out)
        .await;

    assert!(matches!(result, Err(SuppressError::ListError { .. })));
    assert!(out.is_empty());
    Ok(())
}
