use crate::core::error::DirectoryError;
use crate::models::user::User;
use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// How `create` picks the id of a new record
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdAllocation {
    /// `current record count + 1`. An id can be handed out twice once a
    /// record below the tail has been deleted.
    #[default]
    Length,
    /// `highest id ever assigned + 1`. Ids are never reused.
    Monotonic,
}

struct Records {
    users: Vec<User>,
    highest_id: u32,
}

/// In-memory ordered collection of users
///
/// Reads share the lock, writes take it exclusively, so at most one
/// mutation is in flight at any time.
pub struct UserDirectory {
    records: RwLock<Records>,
    allocation: IdAllocation,
}

impl UserDirectory {
    /// Create an empty directory
    pub fn new(allocation: IdAllocation) -> Self {
        Self {
            records: RwLock::new(Records {
                users: Vec::new(),
                highest_id: 0,
            }),
            allocation,
        }
    }

    pub fn allocation(&self) -> IdAllocation {
        self.allocation
    }

    // The guarded Vec holds no cross-field invariant a panicking writer could
    // break, so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Records> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Records> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All users in insertion order
    pub fn list(&self) -> Vec<User> {
        self.read().users.clone()
    }

    /// First user whose id matches
    pub fn get(&self, id: u32) -> Result<User, DirectoryError> {
        self.read()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(DirectoryError::NotFound(id))
    }

    /// Append a new user and return it with its assigned id
    pub fn create(&self, name: String, email: String) -> User {
        let mut records = self.write();

        let id = match self.allocation {
            IdAllocation::Length => (records.users.len() as u32).saturating_add(1),
            IdAllocation::Monotonic => records.highest_id.saturating_add(1),
        };
        records.highest_id = records.highest_id.max(id);

        let user = User { id, name, email };
        records.users.push(user.clone());
        user
    }

    /// Overwrite name and email of the first user matching `id`
    pub fn update(&self, id: u32, name: String, email: String) -> Result<User, DirectoryError> {
        let mut records = self.write();

        let user = records
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(DirectoryError::NotFound(id))?;

        user.name = name;
        user.email = email;
        Ok(user.clone())
    }

    /// Remove the first user matching `id`, returning it
    pub fn delete(&self, id: u32) -> Result<User, DirectoryError> {
        let mut records = self.write();

        let index = records
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(DirectoryError::NotFound(id))?;

        Ok(records.users.remove(index))
    }

    pub fn len(&self) -> usize {
        self.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().users.is_empty()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new(IdAllocation::default())
    }
}
