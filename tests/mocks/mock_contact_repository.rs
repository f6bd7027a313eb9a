use async_trait::async_trait;
use contacts_api::error::{ApiError, ApiResult};
use contacts_api::models::Contact;
use contacts_api::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// easily configured with test data and tracks method calls for
/// verification. Mirrors the store's aggregate semantics: phone
/// back-references are overwritten with the owning contact id, reads are
/// ordered by contact id then phone id.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<HashMap<i64, Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(HashMap::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Seed a contact without going through `create`.
    pub fn add_contact(&self, contact: Contact) {
        let mut contacts = self.contacts.lock().unwrap();
        contacts.insert(contact.id, Self::normalize(contact));
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn record_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    /// Apply the store's write normalization: every phone carries the
    /// owning contact's id.
    fn normalize(mut contact: Contact) -> Contact {
        for phone in &mut contact.phones {
            phone.contact_id = contact.id;
        }
        contact
    }

    fn sorted_phones(mut contact: Contact) -> Contact {
        contact.phones.sort_by_key(|p| p.id);
        contact
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn create(&self, contact: &Contact) -> ApiResult<()> {
        self.record_call("create");
        let mut contacts = self.contacts.lock().unwrap();
        if contacts.contains_key(&contact.id) {
            return Err(ApiError::AlreadyExists(contact.id));
        }
        contacts.insert(contact.id, Self::normalize(contact.clone()));
        Ok(())
    }

    async fn find_all(&self) -> ApiResult<Vec<Contact>> {
        self.find_with_filters("", "").await
    }

    async fn find_with_filters(&self, name: &str, number: &str) -> ApiResult<Vec<Contact>> {
        self.record_call("find_with_filters");
        let contacts = self.contacts.lock().unwrap();
        let name_lower = name.to_lowercase();

        let mut matches: Vec<Contact> = contacts
            .values()
            .filter(|c| name.is_empty() || c.name.to_lowercase().contains(&name_lower))
            .filter(|c| number.is_empty() || c.phones.iter().any(|p| p.number.contains(number)))
            .cloned()
            .map(Self::sorted_phones)
            .collect();
        matches.sort_by_key(|c| c.id);
        Ok(matches)
    }

    async fn find_by_id(&self, id: i64) -> ApiResult<Contact> {
        self.record_call("find_by_id");
        let contacts = self.contacts.lock().unwrap();
        contacts
            .get(&id)
            .cloned()
            .map(Self::sorted_phones)
            .ok_or(ApiError::NotFound(id))
    }

    async fn update(&self, contact: &Contact) -> ApiResult<()> {
        self.record_call("update");
        let mut contacts = self.contacts.lock().unwrap();
        if !contacts.contains_key(&contact.id) {
            return Err(ApiError::NotFound(contact.id));
        }
        contacts.insert(contact.id, Self::normalize(contact.clone()));
        Ok(())
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.record_call("delete");
        let mut contacts = self.contacts.lock().unwrap();
        if contacts.remove(&id).is_none() {
            return Err(ApiError::NotFound(id));
        }
        Ok(())
    }
}
