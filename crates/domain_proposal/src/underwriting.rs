//! Underwriting outcome attached to a quotation

use core_kernel::WireDateTime;
use serde::{Deserialize, Serialize};

/// Underwriting decision summary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnderWriting {
    pub underwriting_no: Option<String>,
    pub underwriting_status_cd: Option<String>,
    pub underwriting_opinion: Option<String>,
    pub underwriter_emp_no: Option<String>,
    pub underwriter_name: Option<String>,
    pub underwriting_complete_dt: Option<WireDateTime>,
}
