//! In-memory storage backend (process-local, no external dependency)

use async_trait::async_trait;
use cdao_core::{CdaoError, ContactMessageStore, DashboardStore, Result, SubscriberStore};
use cdao_types::{Activity, ContactMessage, Deal, Metric, NewContactMessage, Subscriber};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::demo;

/// Storage backend holding everything in process memory.
///
/// State lives exactly as long as the process; nothing survives a restart.
/// A single mutex serializes map-and-counter mutation, which also makes the
/// duplicate-email check-then-insert atomic under concurrent requests.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    subscribers: HashMap<i64, Subscriber>,
    contact_messages: HashMap<i64, ContactMessage>,
    next_subscriber_id: i64,
    next_message_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock means a panic mid-mutation; recover the inner state
        // rather than wedging every request after it.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubscriberStore for MemoryStore {
    async fn create_subscriber(&self, email: &str) -> Result<Subscriber> {
        let mut inner = self.lock();

        // Linear scan is fine at this scale; the uniqueness invariant is
        // what matters.
        if inner.subscribers.values().any(|s| s.email == email) {
            return Err(CdaoError::DuplicateEmail(email.to_string()));
        }

        inner.next_subscriber_id += 1;
        let subscriber = Subscriber {
            id: inner.next_subscriber_id,
            email: email.to_string(),
            created_at: Utc::now(),
        };
        inner.subscribers.insert(subscriber.id, subscriber.clone());

        Ok(subscriber)
    }

    async fn list_subscribers(&self) -> Result<Vec<Subscriber>> {
        let inner = self.lock();
        let mut subscribers: Vec<Subscriber> = inner.subscribers.values().cloned().collect();
        subscribers.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(subscribers)
    }
}

#[async_trait]
impl ContactMessageStore for MemoryStore {
    async fn create_contact_message(&self, new: NewContactMessage) -> Result<ContactMessage> {
        let mut inner = self.lock();

        inner.next_message_id += 1;
        let message = ContactMessage {
            id: inner.next_message_id,
            name: new.name,
            email: new.email,
            subject: new.subject,
            message: new.message,
            organization: new.organization,
            phone: new.phone,
            privacy_agreed: new.privacy_agreed,
            created_at: Utc::now(),
        };
        inner.contact_messages.insert(message.id, message.clone());

        Ok(message)
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>> {
        let inner = self.lock();
        let mut messages: Vec<ContactMessage> =
            inner.contact_messages.values().cloned().collect();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(messages)
    }
}

#[async_trait]
impl DashboardStore for MemoryStore {
    async fn list_deals(&self) -> Result<Vec<Deal>> {
        Ok(demo::deals())
    }

    async fn list_metrics(&self) -> Result<Vec<Metric>> {
        Ok(demo::metrics())
    }

    async fn list_activities(&self) -> Result<Vec<Activity>> {
        Ok(demo::activities())
    }
}
