//! Small related-party and approval leaf objects

use serde::{Deserialize, Serialize};

/// Business partner on the distribution side.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub partner_name: Option<String>,
}

/// One office-approval record attached to a quotation.
///
/// The wire names keep the all-caps `OA` prefix of the source system.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Oa {
    #[serde(rename = "OALink")]
    pub oa_link: Option<String>,
    #[serde(rename = "OACode")]
    pub oa_code: Option<String>,
    #[serde(rename = "OAName")]
    pub oa_name: Option<String>,
}

/// Credit-line related project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedProject {
    pub project_name: Option<String>,
    pub project_code: Option<String>,
}

/// Credit-line obligated debtor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debtor {
    pub participant_name: Option<String>,
    pub cert_no: Option<String>,
}
