//! Alias-keyed directory of shared instances with a current selection.
//!
//! A [`NamedRegistry`] stores a few shared instances (mappers, scales) and
//! any number of case-sensitive aliases for each. One instance is always
//! selected as current. The registry can never be empty: it is constructed
//! with its first entry, and instances are never removed.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{ConfigError, Error, Result};

/// Shared instances addressed by alias, plus a current selection.
///
/// # Examples
///
/// ```
/// use glyphmap::NamedRegistry;
///
/// let mut registry = NamedRegistry::<&str>::new(["dots", "default"], "....").unwrap();
/// registry.register(["hashes"], "####").unwrap();
///
/// assert_eq!(*registry.current(), "....");
/// registry.select_current("hashes").unwrap();
/// assert_eq!(*registry.current(), "####");
///
/// assert!(registry.select_current("Hashes").is_err());
/// assert_eq!(registry.current_alias(), "hashes");
/// ```
#[derive(Debug, Clone)]
pub struct NamedRegistry<T> {
    instances: Vec<Arc<T>>,
    aliases: IndexMap<String, usize>,
    current: usize,
}

impl<T> NamedRegistry<T> {
    /// Creates a registry whose first instance is also the current one.
    ///
    /// # Errors
    ///
    /// [`InvalidConfiguration`](Error::InvalidConfiguration) if `aliases` is
    /// empty.
    pub fn new<I, S>(aliases: I, instance: impl Into<Arc<T>>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let aliases = collect_aliases(aliases)?;
        debug!(?aliases, "creating registry");

        Ok(Self {
            instances: vec![instance.into()],
            aliases: aliases.into_iter().map(|alias| (alias, 0)).collect(),
            current: 0,
        })
    }

    /// Registers `instance` under every alias in `aliases`.
    ///
    /// An instance that is already registered (the same `Arc`) gains the new
    /// aliases instead of being stored twice. Aliases that already point at
    /// this instance are accepted. Either every alias is added or, on error,
    /// none is.
    ///
    /// # Errors
    ///
    /// - [`DuplicateAlias`](Error::DuplicateAlias) if an alias points at a
    ///   different instance
    /// - [`InvalidConfiguration`](Error::InvalidConfiguration) if `aliases` is
    ///   empty
    pub fn register<I, S>(&mut self, aliases: I, instance: impl Into<Arc<T>>) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let aliases = collect_aliases(aliases)?;
        let instance = instance.into();
        let known = self
            .instances
            .iter()
            .position(|existing| Arc::ptr_eq(existing, &instance));

        if let Some(taken) = aliases
            .iter()
            .find(|alias| matches!(self.aliases.get(*alias), Some(&slot) if Some(slot) != known))
        {
            return Err(Error::DuplicateAlias(taken.clone()));
        }

        let slot = match known {
            Some(slot) => slot,
            None => {
                self.instances.push(instance);
                self.instances.len() - 1
            }
        };
        debug!(?aliases, slot, "registering aliases");

        for alias in aliases {
            self.aliases.insert(alias, slot);
        }
        Ok(())
    }

    /// Returns the instance registered under `alias`.
    pub fn resolve(&self, alias: &str) -> Result<Arc<T>> {
        self.get(alias)
            .cloned()
            .ok_or_else(|| Error::UnknownAlias(alias.to_owned()))
    }

    /// Borrows the instance registered under `alias`, if any.
    pub fn get(&self, alias: &str) -> Option<&Arc<T>> {
        self.aliases.get(alias).map(|&slot| &self.instances[slot])
    }

    /// Returns true if `alias` is registered.
    pub fn contains(&self, alias: &str) -> bool {
        self.aliases.contains_key(alias)
    }

    /// The currently selected instance.
    pub fn current(&self) -> Arc<T> {
        Arc::clone(&self.instances[self.current])
    }

    /// The first alias of the current instance.
    pub fn current_alias(&self) -> &str {
        self.aliases
            .iter()
            .find(|&(_, &slot)| slot == self.current)
            .map(|(alias, _)| alias.as_str())
            .unwrap_or_default()
    }

    /// Selects the instance registered under `alias` as current.
    ///
    /// On an unknown alias the previous selection stays in place.
    pub fn select_current(&mut self, alias: &str) -> Result<()> {
        let &slot = self
            .aliases
            .get(alias)
            .ok_or_else(|| Error::UnknownAlias(alias.to_owned()))?;

        if slot != self.current {
            debug!(alias, "selecting registry entry");
        }
        self.current = slot;
        Ok(())
    }

    /// Aliases of `instance` in registration order; empty if it is not
    /// registered here.
    pub fn aliases_of(&self, instance: &Arc<T>) -> Vec<&str> {
        let Some(slot) = self
            .instances
            .iter()
            .position(|existing| Arc::ptr_eq(existing, instance))
        else {
            return Vec::new();
        };

        self.aliases
            .iter()
            .filter(|&(_, &known)| known == slot)
            .map(|(alias, _)| alias.as_str())
            .collect()
    }

    /// Every alias in registration order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.aliases.keys().map(String::as_str)
    }

    /// Number of distinct instances; always at least one.
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }
}

fn collect_aliases<I, S>(aliases: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let aliases: Vec<String> = aliases.into_iter().map(Into::into).collect();
    if aliases.is_empty() {
        return Err(ConfigError::NoAliases.into());
    }
    Ok(aliases)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> NamedRegistry<&'static str> {
        NamedRegistry::new(["linear", "identity"], "linear").unwrap()
    }

    #[test]
    fn test_new_registry_has_current() {
        let registry = registry();

        assert_eq!(registry.instance_count(), 1);
        assert_eq!(*registry.current(), "linear");
        assert_eq!(registry.current_alias(), "linear");
        assert_eq!(*registry.resolve("identity").unwrap(), "linear");
    }

    #[test]
    fn test_new_registry_needs_an_alias() {
        let result = NamedRegistry::<i32>::new(Vec::<String>::new(), 1);

        assert_eq!(
            result.unwrap_err(),
            Error::InvalidConfiguration(ConfigError::NoAliases)
        );
    }

    #[test]
    fn test_register_keeps_existing_aliases() {
        let mut registry = registry();
        registry.register(["log", "logarithmic"], "log").unwrap();

        assert_eq!(registry.instance_count(), 2);
        assert_eq!(*registry.resolve("log").unwrap(), "log");
        assert_eq!(*registry.resolve("logarithmic").unwrap(), "log");
        assert_eq!(*registry.resolve("linear").unwrap(), "linear");
        assert_eq!(*registry.current(), "linear");
        assert_eq!(
            registry.aliases().collect::<Vec<_>>(),
            vec!["linear", "identity", "log", "logarithmic"]
        );
    }

    #[test]
    fn test_register_shared_instance_adds_aliases() {
        let mut registry = registry();
        let shared = registry.resolve("linear").unwrap();

        registry.register(["lin", "identity"], Arc::clone(&shared)).unwrap();

        assert_eq!(registry.instance_count(), 1);
        assert_eq!(registry.aliases_of(&shared), vec!["linear", "identity", "lin"]);
    }

    #[test]
    fn test_register_rejects_taken_alias() {
        let mut registry = registry();

        let err = registry.register(["sqrt", "identity"], "sqrt").unwrap_err();

        assert_eq!(err, Error::DuplicateAlias("identity".to_owned()));
        // Nothing from the failed call was added
        assert!(!registry.contains("sqrt"));
        assert_eq!(registry.instance_count(), 1);
    }

    #[test]
    fn test_aliases_are_case_sensitive() {
        let registry = registry();

        assert_eq!(
            registry.resolve("Linear").unwrap_err(),
            Error::UnknownAlias("Linear".to_owned())
        );
    }

    #[test]
    fn test_select_current() {
        let mut registry = registry();
        registry.register(["sqrt"], "sqrt").unwrap();

        registry.select_current("sqrt").unwrap();
        assert_eq!(*registry.current(), "sqrt");
        assert_eq!(registry.current_alias(), "sqrt");

        let err = registry.select_current("cubic").unwrap_err();
        assert_eq!(err, Error::UnknownAlias("cubic".to_owned()));
        assert_eq!(*registry.current(), "sqrt");
    }

    #[test]
    fn test_aliases_of_unknown_instance() {
        let registry = registry();
        let stranger = Arc::new("linear");

        assert!(registry.aliases_of(&stranger).is_empty());
    }

    #[test]
    fn test_registry_is_shareable_across_threads() {
        let registry = Arc::new(registry());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || *registry.resolve("identity").unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "linear");
        }
    }
}
