//! Serializable permission definitions.
//!
//! Permissions are usually assembled at bootstrap from configuration. A
//! [`PermissionDef`] is the plain-data form of a [`Permission`]; in JSON it
//! reads as
//!
//! ```json
//! { "any_of": [ { "has_role": "admin" }, { "all_of": [ "is_authenticated", { "has_role": "team-{id}" } ] } ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{PermsError, Result};
use crate::factory::{all_of, any_of, has_role, IS_AUTHENTICATED, OPEN};
use crate::permission::Permission;

/// Plain-data description of a permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionDef {
    Open,
    IsAuthenticated,
    HasRole(String),
    AnyOf(Vec<PermissionDef>),
    AllOf(Vec<PermissionDef>),
}

impl PermissionDef {
    /// Serialize to CBOR bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(self, &mut buf)
            .map_err(|e| PermsError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize from CBOR bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        ciborium::from_reader(bytes).map_err(|e| PermsError::InvalidDefinition(e.to_string()))
    }
}

impl From<PermissionDef> for Permission {
    fn from(def: PermissionDef) -> Self {
        match def {
            PermissionDef::Open => OPEN,
            PermissionDef::IsAuthenticated => IS_AUTHENTICATED,
            PermissionDef::HasRole(role) => has_role(role),
            PermissionDef::AnyOf(defs) => any_of(defs.into_iter().map(Permission::from)),
            PermissionDef::AllOf(defs) => all_of(defs.into_iter().map(Permission::from)),
        }
    }
}

impl From<&Permission> for PermissionDef {
    fn from(permission: &Permission) -> Self {
        match permission {
            Permission::Open => PermissionDef::Open,
            Permission::IsAuthenticated => PermissionDef::IsAuthenticated,
            Permission::HasRole(pattern) => PermissionDef::HasRole(pattern.as_str().to_string()),
            Permission::AnyOf(children) => {
                PermissionDef::AnyOf(children.iter().map(PermissionDef::from).collect())
            }
            Permission::AllOf(children) => {
                PermissionDef::AllOf(children.iter().map(PermissionDef::from).collect())
            }
        }
    }
}
