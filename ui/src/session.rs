//! Client-side session state backed by browser local storage.
//!
//! The session holds an authenticated flag plus the signed-in email. Both are
//! persisted under fixed storage keys so a reload restores the session, and
//! restoration re-checks the email against the staff domain rule before
//! trusting the persisted flag.

pub const AUTH_KEY: &str = "isAuthenticated";
pub const EMAIL_KEY: &str = "userEmail";

const STAFF_DOMAIN_SUFFIX: &str = "@tendrils.io";

/// Durable key/value storage the session persists into. Abstracted so tests
/// can substitute an in-memory fake for the browser's localStorage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// localStorage-backed store. Storage access is best-effort: a missing or
/// inaccessible store behaves like an empty one.
pub struct BrowserStore;

impl BrowserStore {
    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(s) = self.storage() {
            let _ = s.set_item(key, value);
        }
    }

    fn delete(&self, key: &str) {
        if let Some(s) = self.storage() {
            let _ = s.remove_item(key);
        }
    }
}

/// True when `email` is a staff address: a non-empty local part with no
/// whitespace or extra `@`, followed by exactly `@tendrils.io`
/// (case-sensitive).
pub fn is_staff_email(email: &str) -> bool {
    match email.strip_suffix(STAFF_DOMAIN_SUFFIX) {
        Some(local) => {
            !local.is_empty() && !local.contains('@') && !local.contains(|c: char| c.is_whitespace())
        }
        None => false,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub email: String,
}

impl Session {
    /// Rebuild the session from persisted state. The persisted flag is only
    /// trusted when the stored email still passes the domain rule.
    pub fn restore(store: &impl KeyValueStore) -> Self {
        let flagged = store.get(AUTH_KEY).is_some_and(|v| v == "true");
        let email = store.get(EMAIL_KEY).unwrap_or_default();
        if flagged && is_staff_email(&email) {
            Session {
                authenticated: true,
                email,
            }
        } else {
            Session::default()
        }
    }

    /// Mark the session authenticated and persist it. Callers are expected to
    /// have validated the credentials already; no re-validation happens here.
    pub fn login(store: &impl KeyValueStore, email: &str) -> Self {
        store.set(AUTH_KEY, "true");
        store.set(EMAIL_KEY, email);
        Session {
            authenticated: true,
            email: email.to_string(),
        }
    }

    /// Clear persisted session state.
    pub fn logout(store: &impl KeyValueStore) {
        store.delete(AUTH_KEY);
        store.delete(EMAIL_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn delete(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }

    #[test]
    fn staff_email_rule() {
        assert!(is_staff_email("ops@tendrils.io"));
        assert!(is_staff_email("first.last+tag@tendrils.io"));
        assert!(!is_staff_email("@tendrils.io"));
        assert!(!is_staff_email("ops@example.com"));
        assert!(!is_staff_email("ops @tendrils.io"));
        assert!(!is_staff_email("a@b@tendrils.io"));
        assert!(!is_staff_email("ops@tendrils.io "));
        // Case-sensitive domain match.
        assert!(!is_staff_email("ops@Tendrils.io"));
    }

    #[test]
    fn restore_without_persisted_state_is_unauthenticated() {
        let store = MemoryStore::default();
        assert_eq!(Session::restore(&store), Session::default());
    }

    #[test]
    fn restore_trusts_valid_flag_and_email() {
        let store = MemoryStore::default();
        store.set(AUTH_KEY, "true");
        store.set(EMAIL_KEY, "ops@tendrils.io");
        let session = Session::restore(&store);
        assert!(session.authenticated);
        assert_eq!(session.email, "ops@tendrils.io");
    }

    #[test]
    fn restore_rejects_foreign_domain_email() {
        let store = MemoryStore::default();
        store.set(AUTH_KEY, "true");
        store.set(EMAIL_KEY, "ops@example.com");
        assert!(!Session::restore(&store).authenticated);
    }

    #[test]
    fn restore_rejects_flag_without_email() {
        let store = MemoryStore::default();
        store.set(AUTH_KEY, "true");
        assert!(!Session::restore(&store).authenticated);
    }

    #[test]
    fn restore_requires_exact_true_flag() {
        let store = MemoryStore::default();
        store.set(AUTH_KEY, "1");
        store.set(EMAIL_KEY, "ops@tendrils.io");
        assert!(!Session::restore(&store).authenticated);
    }

    #[test]
    fn login_persists_and_logout_erases() {
        let store = MemoryStore::default();
        let session = Session::login(&store, "ops@tendrils.io");
        assert!(session.authenticated);
        assert_eq!(store.get(AUTH_KEY).as_deref(), Some("true"));
        assert_eq!(store.get(EMAIL_KEY).as_deref(), Some("ops@tendrils.io"));

        Session::logout(&store);
        assert_eq!(store.get(AUTH_KEY), None);
        assert_eq!(store.get(EMAIL_KEY), None);
        assert!(!Session::restore(&store).authenticated);
    }
}
