//! Per-backend verb tables.

/// Literal command names a backend uses for the generic key operations.
///
/// A backend without key expiry leaves the TTL verbs empty; translating a
/// TTL operation for it fails instead of producing a command the store
/// would reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandVerbs {
    /// Reads a key's value
    pub get_key: &'static str,
    /// Writes a key's value
    pub set_key: &'static str,
    /// Removes a key
    pub delete_key: &'static str,
    /// Moves a value to a new key
    pub rename_key: &'static str,
    /// Sets a key's time to live, if the store has expiry
    pub set_ttl: Option<&'static str>,
    /// Reads a key's time to live, if the store has expiry
    pub get_ttl: Option<&'static str>,
}

impl CommandVerbs {
    /// Verbs for a store with key expiry.
    ///
    /// ```
    /// use polykv::translator::CommandVerbs;
    ///
    /// let verbs = CommandVerbs::new("get", "set", "del", "rename", "expire", "ttl");
    /// assert_eq!(verbs.set_ttl, Some("expire"));
    /// assert!(verbs.supports_ttl());
    /// ```
    pub const fn new(
        get_key: &'static str,
        set_key: &'static str,
        delete_key: &'static str,
        rename_key: &'static str,
        set_ttl: &'static str,
        get_ttl: &'static str,
    ) -> Self {
        Self {
            get_key,
            set_key,
            delete_key,
            rename_key,
            set_ttl: Some(set_ttl),
            get_ttl: Some(get_ttl),
        }
    }

    /// Verbs for a store that has no key expiry.
    pub const fn without_ttl(
        get_key: &'static str,
        set_key: &'static str,
        delete_key: &'static str,
        rename_key: &'static str,
    ) -> Self {
        Self {
            get_key,
            set_key,
            delete_key,
            rename_key,
            set_ttl: None,
            get_ttl: None,
        }
    }

    /// True when both TTL verbs are present.
    pub fn supports_ttl(&self) -> bool {
        self.set_ttl.is_some() && self.get_ttl.is_some()
    }
}
