use tokio::sync::RwLock;
use tracing::debug;

use models::Resource;

use crate::metrics::RECORDS_CREATED_TOTAL;

/// Append-only, in-memory collection of one resource kind.
///
/// Records are listed in insertion order and are never updated or removed.
/// `create` holds the write lock across reading the current length and
/// pushing the new record, so concurrent creates cannot allocate the same
/// identifier, and readers only ever see fully built records.
pub struct ResourceStore<R> {
    records: RwLock<Vec<R>>,
}

impl<R: Resource> ResourceStore<R> {
    pub fn new() -> Self {
        Self { records: RwLock::new(Vec::new()) }
    }

    /// All stored records, oldest first.
    pub async fn list(&self) -> Vec<R> {
        let records = self.records.read().await;
        records.clone()
    }

    /// Append a record built from `input` and return the stored copy.
    ///
    /// Identified kinds receive `id = count_before_insert + 1`.
    pub async fn create(&self, input: R::Input) -> R {
        let mut records = self.records.write().await;
        let next_id = records.len() as u64 + 1;
        let record = R::from_input(input, next_id);
        records.push(record.clone());
        drop(records);

        RECORDS_CREATED_TOTAL.with_label_values(&[R::KIND]).inc();
        match record.id() {
            Some(id) => debug!(resource = R::KIND, id, "record created"),
            None => debug!(resource = R::KIND, "record created"),
        }
        record
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl<R: Resource> Default for ResourceStore<R> {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc};

    use models::{Campaign, CampaignCreate, Feedback, ForumPost, User, UserCreate};

    use super::*;

    fn user(name: &str) -> UserCreate {
        UserCreate { name: name.into(), email: format!("{}@example.com", name.to_lowercase()) }
    }

    #[tokio::test]
    async fn fresh_store_lists_nothing() {
        let store = ResourceStore::<User>::new();
        assert!(store.list().await.is_empty());
        assert!(store.is_empty().await);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn ids_are_sequential_from_one() {
        let store = ResourceStore::<Campaign>::new();
        for expected in 1..=25u64 {
            let created = store.create(CampaignCreate { name: format!("c{expected}") }).await;
            assert_eq!(created.id, expected);
        }
        let ids: Vec<u64> = store.list().await.iter().map(|c| c.id).collect();
        assert_eq!(ids, (1..=25).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn list_returns_records_in_creation_order() {
        let store = ResourceStore::<User>::new();
        let names = ["Ada", "Lin", "Grace", "Alan"];
        for n in names {
            store.create(user(n)).await;
        }

        let listed = store.list().await;
        assert_eq!(listed.len(), names.len());
        for (i, (u, n)) in listed.iter().zip(names).enumerate() {
            assert_eq!(u.id, i as u64 + 1);
            assert_eq!(u.name, n);
            assert_eq!(u.email, format!("{}@example.com", n.to_lowercase()));
        }
    }

    #[tokio::test]
    async fn create_leaves_earlier_records_untouched() {
        let store = ResourceStore::<User>::new();
        store.create(user("Ada")).await;
        store.create(user("Lin")).await;
        let before = store.list().await;

        store.create(user("Grace")).await;
        let after = store.list().await;

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], &before[..]);
    }

    #[tokio::test]
    async fn users_round_trip_ada_and_lin() {
        let store = ResourceStore::<User>::new();

        let ada = store.create(user("Ada")).await;
        assert_eq!(ada, User { id: 1, name: "Ada".into(), email: "ada@example.com".into() });

        let lin = store.create(user("Lin")).await;
        assert_eq!(lin.id, 2);

        assert_eq!(store.list().await, vec![ada, lin]);
    }

    #[tokio::test]
    async fn forum_posts_are_stored_unchanged_without_id() {
        let store = ResourceStore::<ForumPost>::new();
        let post = ForumPost { user: "Bob".into(), text: "hi".into() };

        let stored = store.create(post.clone()).await;
        assert_eq!(stored, post);

        let listed = store.list().await;
        assert_eq!(listed, vec![post]);
        let json = serde_json::to_value(&listed).unwrap();
        assert_eq!(json, serde_json::json!([{"user": "Bob", "text": "hi"}]));
    }

    #[tokio::test]
    async fn only_identified_kinds_report_an_id() {
        let users = ResourceStore::<User>::new();
        let campaigns = ResourceStore::<Campaign>::new();
        let forum = ResourceStore::<ForumPost>::new();
        let feedback = ResourceStore::<Feedback>::new();

        users.create(user("Ada")).await;
        assert_eq!(users.create(user("Lin")).await.id(), Some(2));
        assert_eq!(campaigns.create(CampaignCreate { name: "launch".into() }).await.id(), Some(1));

        // unidentified kinds stay None however many records precede them
        forum.create(ForumPost { user: "Bob".into(), text: "hi".into() }).await;
        assert_eq!(forum.create(ForumPost { user: "Bob".into(), text: "again".into() }).await.id(), None);
        assert_eq!(feedback.create(Feedback { text: "ok".into() }).await.id(), None);
    }

    #[tokio::test]
    async fn stores_of_different_kinds_are_independent() {
        let users = ResourceStore::<User>::new();
        let campaigns = ResourceStore::<Campaign>::new();
        let feedback = ResourceStore::<Feedback>::new();

        users.create(user("Ada")).await;
        users.create(user("Lin")).await;
        let first_campaign = campaigns.create(CampaignCreate { name: "launch".into() }).await;

        assert_eq!(first_campaign.id, 1);
        assert_eq!(users.len().await, 2);
        assert!(feedback.is_empty().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_allocate_unique_ids() {
        const M: u64 = 200;
        let store = Arc::new(ResourceStore::<User>::new());

        let handles: Vec<_> = (0..M)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.create(user(&format!("u{i}"))).await.id })
            })
            .collect();

        let mut ids = HashSet::new();
        for h in handles {
            assert!(ids.insert(h.await.unwrap()), "duplicate id allocated");
        }
        assert_eq!(ids, (1..=M).collect::<HashSet<_>>());

        // Listing order matches the id each record was given.
        let listed = store.list().await;
        assert_eq!(listed.len() as u64, M);
        for (i, u) in listed.iter().enumerate() {
            assert_eq!(u.id, i as u64 + 1);
        }
    }

    #[tokio::test]
    async fn create_increments_created_counter() {
        let store = ResourceStore::<Feedback>::new();
        let before = RECORDS_CREATED_TOTAL.with_label_values(&["feedback"]).get();
        store.create(Feedback { text: "more dark mode".into() }).await;
        let after = RECORDS_CREATED_TOTAL.with_label_values(&["feedback"]).get();
        assert!(after > before);
    }
}
