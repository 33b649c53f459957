//! Domain registry: immutable lookup from domain id to profile.

use super::catalog::builtin_profiles;
use super::entities::DomainProfile;
use crate::core::error::DomainError;
use std::collections::BTreeMap;

/// Read-only table of domain profiles.
///
/// Built once and shared (typically behind an `Arc`); there are no mutating
/// methods, so concurrent reads need no locking.
#[derive(Debug, Clone)]
pub struct DomainRegistry {
    profiles: BTreeMap<String, DomainProfile>,
}

impl DomainRegistry {
    /// Registry populated with the built-in catalog.
    pub fn builtin() -> Self {
        // The static catalog always passes `check()`; see `test_builtin_profiles_are_valid`.
        Self::from_profiles(builtin_profiles()).expect("built-in catalog is valid")
    }

    /// Build a registry, rejecting invalid or duplicate profiles.
    pub fn from_profiles(
        profiles: impl IntoIterator<Item = DomainProfile>,
    ) -> Result<Self, DomainError> {
        let mut table = BTreeMap::new();
        for profile in profiles {
            profile.check()?;
            if table.contains_key(&profile.domain_id) {
                return Err(DomainError::InvalidProfile {
                    domain_id: profile.domain_id,
                    reason: "duplicate domain id".to_string(),
                });
            }
            table.insert(profile.domain_id.clone(), profile);
        }
        Ok(Self { profiles: table })
    }

    pub fn lookup(&self, domain_id: &str) -> Result<&DomainProfile, DomainError> {
        self.profiles
            .get(domain_id)
            .ok_or_else(|| DomainError::UnknownDomain(domain_id.to_string()))
    }

    /// Snapshot of every profile, ordered by domain id.
    pub fn list_all(&self) -> &BTreeMap<String, DomainProfile> {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for DomainRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
