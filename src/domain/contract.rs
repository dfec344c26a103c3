use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::document::DocumentStatus;
use crate::domain::types::{AgencyId, ContractId, PropertyId};

/// A rental contract. Shares the document status lifecycle
/// (draft/active/signed/archived) with the documents endpoints.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Contract {
    pub id: ContractId,
    pub agency_id: Option<AgencyId>,
    pub property_id: Option<PropertyId>,
    pub tenant_name: Option<String>,
    pub status: DocumentStatus,
    pub monthly_rent: Option<f64>,
    pub starts_at: Option<NaiveDate>,
    pub ends_at: Option<NaiveDate>,
}
