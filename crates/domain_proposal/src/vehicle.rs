//! Conveyance leaf objects: vehicle, hull, and aircraft lines
//!
//! These sub-documents are attached to a quotation only when the product
//! line insures the matching conveyance; on every other line the fields are
//! `None`, meaning "not applicable", never "unknown".

use core_kernel::{Money, WireDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The insured vehicle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInfo {
    pub vin: Option<String>,
    pub license_no: Option<String>,
    pub engine_no: Option<String>,
    /// Vehicle class code, industry scheme
    pub china_veh_class_cd: Option<String>,
    /// Usage nature code, industry scheme
    pub china_usage_code: Option<String>,
    pub vehicle_model_cate: Option<String>,
    pub industry_is_new_energy_vehicle: Option<String>,
    pub series_name: Option<String>,
    pub series_code: Option<String>,
    pub brand_name_cn: Option<String>,
    pub brand_code: Option<String>,
    pub vehicle_age: Option<Decimal>,
    /// New-vehicle purchase price
    pub purchase_price: Option<Money>,
    /// Machinery plate number (agricultural lines)
    pub manufacturing_code: Option<String>,
}

/// The registered vehicle owner.
///
/// `certNo` and `vehicleOwnerName` are sensitive; see the projection
/// module's masking table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleOwner {
    /// Customer-domain uid
    pub uid: Option<String>,
    pub cert_type_cd: Option<String>,
    pub cert_no: Option<String>,
    pub vehicle_owner_name: Option<String>,
}

/// Vehicle-line underwriting inputs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInsure {
    /// No-claims-discount level
    pub ncd_level_cd: Option<Decimal>,
    pub customer_risk_level: Option<String>,
    /// Whether the price sits inside the regulatory band
    pub regulatory_upper_and_lower_limits: Option<String>,
    /// Serial returned by the price-and-fee rules
    pub price_and_fee_business_no: Option<String>,
    /// Industry-platform transaction number
    pub circ_payment_no: Option<String>,
    /// "1" for policy-supported agricultural machinery
    pub is_policy_agricultural: Option<String>,
    pub delay_issue_dt: Option<WireDateTime>,
}

/// Truck tranche score returned by the telematics scorer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruckTrancheScore {
    /// Third-party-liability tranche prediction
    pub three_tranche: Option<String>,
    /// Combined third-party + own-damage tranche prediction
    pub total_tranche: Option<String>,
}

/// Marine hull entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hull {
    #[serde(rename = "hullGroupID")]
    pub hull_group_id: Option<String>,
    pub hull_name: Option<String>,
    pub hull_identification_no: Option<String>,
    #[serde(rename = "hullIMONo")]
    pub hull_imo_no: Option<String>,
}

/// Aviation entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aircraft {
    pub subject_id: Option<String>,
}
