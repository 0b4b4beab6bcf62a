//! Insured-subject and location leaf objects
//!
//! Location granularity varies by product line: household lines carry a
//! geocoded street address, agricultural lines carry a full administrative
//! hierarchy.

use serde::{Deserialize, Serialize};

/// One subject group on a proposal.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectGroup {
    pub sequence_no: Option<i32>,
    pub subject_small_category_code: Option<String>,
}

/// Agricultural-line subject address, administrative hierarchy plus names.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectAddress {
    /// Continent code
    pub ihg_code: Option<String>,
    pub country_code: Option<String>,
    pub province_code: Option<String>,
    pub city_code: Option<String>,
    pub county_code: Option<String>,
    pub village_code: Option<String>,
    pub town_code: Option<String>,
    pub postal_code: Option<String>,
    pub street_address: Option<String>,
    pub country_name: Option<String>,
    pub province_name: Option<String>,
    pub city_name: Option<String>,
    pub county_name: Option<String>,
    pub town_name: Option<String>,
    pub village_name: Option<String>,
    pub detail_address: Option<String>,
    pub subject_detail_address: Option<String>,
}

/// Household-line house location with geocode.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseHold {
    pub house_dtl_addr: Option<String>,
    pub house_num: Option<String>,
    /// Longitude; the truncated wire name is historical
    pub longt: Option<String>,
    pub lat: Option<String>,
}

/// Proposal organizer on agricultural lines.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalOrganizer {
    pub organizer_name: Option<String>,
    pub organizer_type_cd: Option<String>,
    pub cert_type_cd: Option<String>,
    pub cert_no: Option<String>,
    pub contact_telephone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_household_wire_names() {
        let house = HouseHold {
            house_dtl_addr: Some("幸福路1号".into()),
            longt: Some("121.47".into()),
            lat: Some("31.23".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&house).unwrap();
        assert_eq!(value["houseDtlAddr"], "幸福路1号");
        assert_eq!(value["longt"], "121.47");
        assert_eq!(value["lat"], "31.23");
    }
}
