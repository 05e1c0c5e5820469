//! Storage traits for persistence

use crate::Result;
use async_trait::async_trait;
use cdao_types::{Activity, ContactMessage, Deal, Metric, NewContactMessage, Subscriber};

/// Subscriber store
///
/// Emails are unique; a duplicate create fails with
/// [`CdaoError::DuplicateEmail`](crate::CdaoError::DuplicateEmail) and leaves
/// the stored set unchanged.
#[async_trait]
pub trait SubscriberStore: Send + Sync {
    /// Insert a subscriber, assigning an ascending id and the current time.
    async fn create_subscriber(&self, email: &str) -> Result<Subscriber>;
    /// All subscribers, newest first.
    async fn list_subscribers(&self) -> Result<Vec<Subscriber>>;
}

/// Contact message store
#[async_trait]
pub trait ContactMessageStore: Send + Sync {
    /// Insert a contact message, assigning an ascending id and the current
    /// time. Does not deduplicate.
    async fn create_contact_message(&self, new: NewContactMessage) -> Result<ContactMessage>;
    /// All contact messages, newest first.
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>>;
}

/// Read-only demo data for the sales dashboard
#[async_trait]
pub trait DashboardStore: Send + Sync {
    async fn list_deals(&self) -> Result<Vec<Deal>>;
    async fn list_metrics(&self) -> Result<Vec<Metric>>;
    async fn list_activities(&self) -> Result<Vec<Activity>>;
}

/// Combined contract every storage backend satisfies.
pub trait Storage: SubscriberStore + ContactMessageStore + DashboardStore {}

impl<T: SubscriberStore + ContactMessageStore + DashboardStore> Storage for T {}
