//! In-process event collection and account list.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use super::{AuthService, EventRepository};
use crate::error::{ProximoError, ProximoResult};
use crate::event::{Event, EventDraft, EventType};
use crate::session::{LoginRequest, Role, Session, SignupProfile, SignupRequest};

struct Account {
    password: String,
    session: Session,
}

/// Events in insertion order plus registered accounts.
///
/// Passwords are compared as plain strings; this store is a stand-in, not an
/// identity provider.
#[derive(Default)]
pub struct MemoryStore {
    events: Vec<Event>,
    accounts: Vec<Account>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store with sample accounts and events. Every demo password is "demo".
    pub fn demo() -> Self {
        let mut store = MemoryStore::new();

        let accounts = [
            ("demo@proximo.dev", SignupProfile::Organizer {
                organization: "Proximo Demo Club".into(),
            }),
            ("robotics@uni.edu", SignupProfile::Organizer {
                organization: "Robotics Society".into(),
            }),
            ("student@uni.edu", SignupProfile::Student {
                name: "Sam Student".into(),
                age: "20".into(),
                gender: String::new(),
                college: "Engineering".into(),
            }),
        ];
        for (identity, profile) in accounts {
            let seeded = store.signup(SignupRequest {
                identity: identity.into(),
                password: "demo".into(),
                phone: "555-0100".into(),
                profile,
            });
            debug_assert!(seeded.is_ok(), "demo account {identity}: {seeded:?}");
        }

        let events = [
            ("Campus Hack 24h", EventType::Hackathon, "Innovation Lab", (2025, 11, 14), "09:00 - 09:00 (+1d)", "demo@proximo.dev", "Proximo Demo Club"),
            ("Careers in Open Source", EventType::Seminar, "Auditorium B", (2025, 11, 20), "16:00 - 17:30", "demo@proximo.dev", "Proximo Demo Club"),
            ("Build a Line Follower", EventType::Workshop, "Robotics Lab", (2025, 11, 22), "10:00 - 13:00", "robotics@uni.edu", "Robotics Society"),
            ("Intro to ROS", EventType::Webinar, "Online", (2025, 12, 2), "18:00 - 19:00", "robotics@uni.edu", "Robotics Society"),
            ("Robot Sumo Night", EventType::Hackathon, "Sports Hall", (2025, 12, 5), "19:00 - 23:00", "robotics@uni.edu", "Robotics Society"),
        ];
        for (title, event_type, location, (y, m, d), timing, owner, organization) in events {
            let seeded = store.create(EventDraft {
                title: title.into(),
                event_type,
                location: location.into(),
                date: NaiveDate::from_ymd_opt(y, m, d),
                timing: timing.into(),
                organization: organization.into(),
                description: format!("{title}, hosted by {organization}."),
                link: None,
                owner_identity: owner.into(),
            });
            debug_assert!(seeded.is_ok(), "demo event {title}: {seeded:?}");
        }

        store
    }

    pub fn list_all(&self) -> Vec<Event> {
        self.events.clone()
    }

    pub fn list_by_owner(&self, identity: &str) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| e.is_owned_by(identity))
            .cloned()
            .collect()
    }

    pub fn create(&mut self, draft: EventDraft) -> ProximoResult<Event> {
        let draft = validate_draft(draft)?;
        let event = Event::from_draft(Uuid::new_v4().to_string(), draft);

        self.events.push(event.clone());
        Ok(event)
    }

    pub fn update(&mut self, id: &str, draft: EventDraft) -> ProximoResult<Event> {
        let draft = validate_draft(draft)?;
        let existing = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ProximoError::event_not_found(id))?;

        if !existing.is_owned_by(&draft.owner_identity) {
            return Err(ProximoError::Auth(
                "Only the organizer who posted this event can edit it".into(),
            ));
        }

        *existing = Event::from_draft(id, draft);
        Ok(existing.clone())
    }

    pub fn delete(&mut self, id: &str) -> ProximoResult<Event> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ProximoError::event_not_found(id))?;

        Ok(self.events.remove(index))
    }

    pub fn login(&self, request: &LoginRequest) -> ProximoResult<Session> {
        let account = self
            .find_account(&request.identity)
            .filter(|a| a.password == request.password)
            .ok_or_else(|| ProximoError::Auth("Invalid email or password".into()))?;

        if account.session.role != request.role {
            return Err(ProximoError::Auth(format!(
                "This account is not registered as {}",
                with_article(request.role)
            )));
        }

        Ok(account.session.clone())
    }

    pub fn signup(&mut self, request: SignupRequest) -> ProximoResult<Session> {
        let request = request.trimmed();

        if request.identity.is_empty() || request.password.is_empty() {
            return Err(ProximoError::Validation(
                "Email and password are required".into(),
            ));
        }
        if request.phone.is_empty() {
            return Err(ProximoError::Validation("Phone number is required".into()));
        }
        if self.find_account(&request.identity).is_some() {
            return Err(ProximoError::Validation(
                "An account with this email already exists".into(),
            ));
        }

        let session = request.session();
        self.accounts.push(Account {
            password: request.password,
            session: session.clone(),
        });

        Ok(session)
    }

    fn find_account(&self, identity: &str) -> Option<&Account> {
        let identity = identity.trim();
        self.accounts
            .iter()
            .find(|a| a.session.identity.eq_ignore_ascii_case(identity))
    }
}

fn validate_draft(draft: EventDraft) -> ProximoResult<EventDraft> {
    let draft = draft.trimmed();

    if draft.title.is_empty() {
        return Err(ProximoError::Validation("Event title is required".into()));
    }
    if draft.owner_identity.is_empty() {
        return Err(ProximoError::Validation(
            "Events must belong to an organizer".into(),
        ));
    }

    Ok(draft)
}

fn with_article(role: Role) -> &'static str {
    match role {
        Role::Student => "a student",
        Role::Organizer => "an organizer",
    }
}

/// A [`MemoryStore`] shared behind a mutex, usable wherever a repository is.
#[derive(Clone, Default)]
pub struct MemoryRepository {
    store: Arc<Mutex<MemoryStore>>,
}

impl MemoryRepository {
    pub fn new(store: MemoryStore) -> Self {
        MemoryRepository {
            store: Arc::new(Mutex::new(store)),
        }
    }

    pub fn demo() -> Self {
        Self::new(MemoryStore::demo())
    }

    // Every mutation is a single push, replace or remove; a poisoned lock still holds a whole store.
    fn store(&self) -> MutexGuard<'_, MemoryStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl EventRepository for MemoryRepository {
    async fn list_all(&self) -> ProximoResult<Vec<Event>> {
        Ok(self.store().list_all())
    }

    async fn list_by_owner(&self, identity: &str) -> ProximoResult<Vec<Event>> {
        Ok(self.store().list_by_owner(identity))
    }

    async fn create(&self, draft: EventDraft) -> ProximoResult<Event> {
        self.store().create(draft)
    }

    async fn update(&self, id: &str, draft: EventDraft) -> ProximoResult<Event> {
        self.store().update(id, draft)
    }

    async fn delete(&self, id: &str) -> ProximoResult<()> {
        self.store().delete(id).map(|_| ())
    }
}

#[async_trait]
impl AuthService for MemoryRepository {
    async fn login(&self, request: LoginRequest) -> ProximoResult<Session> {
        self.store().login(&request)
    }

    async fn signup(&self, request: SignupRequest) -> ProximoResult<Session> {
        self.store().signup(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, owner: &str) -> EventDraft {
        EventDraft {
            title: title.into(),
            event_type: EventType::Workshop,
            location: "Room 1".into(),
            date: None,
            timing: "noon".into(),
            organization: "Org".into(),
            description: String::new(),
            link: None,
            owner_identity: owner.into(),
        }
    }

    fn organizer_signup(identity: &str) -> SignupRequest {
        SignupRequest {
            identity: identity.into(),
            password: "pw".into(),
            phone: "123".into(),
            profile: SignupProfile::Organizer {
                organization: "Chess Club".into(),
            },
        }
    }

    #[test]
    fn test_demo_seed_is_complete() {
        let store = MemoryStore::demo();
        assert_eq!(store.list_all().len(), 5);
        assert_eq!(store.list_by_owner("demo@proximo.dev").len(), 2);
        assert_eq!(store.list_by_owner("robotics@uni.edu").len(), 3);

        for (identity, role) in [
            ("demo@proximo.dev", Role::Organizer),
            ("robotics@uni.edu", Role::Organizer),
            ("student@uni.edu", Role::Student),
        ] {
            let login = LoginRequest::new(identity, "demo", role);
            assert!(store.login(&login).is_ok(), "{identity} should sign in");
        }
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let mut store = MemoryStore::new();
        let a = store.create(draft("A", "o@x.com")).unwrap();
        let b = store.create(draft("A", "o@x.com")).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.list_all().len(), 2);
    }

    #[test]
    fn test_create_requires_title() {
        let mut store = MemoryStore::new();
        let err = store.create(draft("   ", "o@x.com")).unwrap_err();
        assert_eq!(err, ProximoError::Validation("Event title is required".into()));
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_update_replaces_fields() {
        let mut store = MemoryStore::new();
        let created = store.create(draft("Old", "o@x.com")).unwrap();

        let updated = store.update(&created.id, draft("New", "o@x.com")).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(store.list_all()[0].title, "New");
    }

    #[test]
    fn test_update_missing_and_foreign() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            store.update("nope", draft("X", "o@x.com")),
            Err(ProximoError::NotFound(_))
        ));

        let created = store.create(draft("Mine", "o@x.com")).unwrap();
        assert!(matches!(
            store.update(&created.id, draft("Theirs", "intruder@x.com")),
            Err(ProximoError::Auth(_))
        ));
        assert_eq!(store.list_all()[0].title, "Mine");
    }

    #[test]
    fn test_second_delete_is_not_found() {
        let mut store = MemoryStore::new();
        let created = store.create(draft("Gone", "o@x.com")).unwrap();

        store.delete(&created.id).unwrap();
        assert!(store.list_all().is_empty());
        assert_eq!(
            store.delete(&created.id),
            Err(ProximoError::event_not_found(&created.id))
        );
    }

    #[test]
    fn test_list_by_owner() {
        let store = MemoryStore::demo();
        let mine = store.list_by_owner("demo@proximo.dev");
        assert_eq!(mine.len(), 2);
        assert_eq!(store.list_all().len(), 5);
    }

    #[test]
    fn test_signup_then_login() {
        let mut store = MemoryStore::new();
        let session = store.signup(organizer_signup("chess@uni.edu")).unwrap();
        assert_eq!(session.display_name, "Chess Club");
        assert_eq!(session.organization.as_deref(), Some("Chess Club"));

        let login = store
            .login(&LoginRequest::new(" Chess@uni.edu ", "pw", Role::Organizer))
            .unwrap();
        assert_eq!(login, session);
    }

    #[test]
    fn test_login_failures() {
        let mut store = MemoryStore::new();
        store.signup(organizer_signup("chess@uni.edu")).unwrap();

        assert_eq!(
            store.login(&LoginRequest::new("chess@uni.edu", "wrong", Role::Organizer)),
            Err(ProximoError::Auth("Invalid email or password".into()))
        );
        assert_eq!(
            store.login(&LoginRequest::new("chess@uni.edu", "pw", Role::Student)),
            Err(ProximoError::Auth("This account is not registered as a student".into()))
        );
    }

    #[test]
    fn test_duplicate_signup_rejected() {
        let mut store = MemoryStore::new();
        store.signup(organizer_signup("chess@uni.edu")).unwrap();
        assert!(matches!(
            store.signup(organizer_signup("CHESS@uni.edu")),
            Err(ProximoError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_repository_shares_one_store() {
        let repo = MemoryRepository::default();
        let other_handle = repo.clone();

        let created = repo.create(draft("Shared", "o@x.com")).await.unwrap();
        let seen = other_handle.list_all().await.unwrap();
        assert_eq!(seen, vec![created.clone()]);

        other_handle.delete(&created.id).await.unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());
    }
}
