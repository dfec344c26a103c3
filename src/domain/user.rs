use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{AgencyId, UserId};

/// Closed role enumeration spanning internal platform roles and agency-scoped
/// roles. Codes added server-side before this build ships deserialize as
/// [`UserRole::Unknown`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    PlatformManager,
    PlatformAdmin,
    LegalAuditor,
    SalesRep,
    Support,
    AgencyOwner,
    AgencyAdmin,
    AgencyManager,
    Agent,
    Inspector,
    Financial,
    #[serde(other)]
    Unknown,
}

impl UserRole {
    pub const ALL: [UserRole; 12] = [
        UserRole::PlatformManager,
        UserRole::PlatformAdmin,
        UserRole::LegalAuditor,
        UserRole::SalesRep,
        UserRole::Support,
        UserRole::AgencyOwner,
        UserRole::AgencyAdmin,
        UserRole::AgencyManager,
        UserRole::Agent,
        UserRole::Inspector,
        UserRole::Financial,
        UserRole::Unknown,
    ];

    /// Whether the role is scoped to a single agency rather than the platform.
    pub fn is_agency_scoped(self) -> bool {
        matches!(
            self,
            UserRole::AgencyOwner
                | UserRole::AgencyAdmin
                | UserRole::AgencyManager
                | UserRole::Agent
                | UserRole::Inspector
                | UserRole::Financial
        )
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Suspended,
    #[serde(other)]
    Unknown,
}

impl UserStatus {
    pub const ALL: [UserStatus; 3] =
        [UserStatus::Active, UserStatus::Suspended, UserStatus::Unknown];
}

/// A platform or agency user account.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub agency_id: Option<AgencyId>,
    pub agency_name: Option<String>,
    pub last_seen_at: Option<DateTime<Utc>>,
}
