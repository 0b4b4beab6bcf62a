//! Installment plan entries

use core_kernel::WireDateTime;
use serde::{Deserialize, Serialize};

/// One period of an installment payment plan.
///
/// The wire name `paymentEndDT` (capital T) is historical and preserved.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    /// Amount due for this period, opaque string
    pub payment_amount: Option<String>,
    pub payment_start_dt: Option<WireDateTime>,
    #[serde(rename = "paymentEndDT")]
    pub payment_end_dt: Option<WireDateTime>,
    /// 1-based period number
    pub sequence_no: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let entry = Installment {
            payment_amount: Some("1200.00".into()),
            payment_start_dt: WireDateTime::from_wire_parts(2024, 1, 1, 0, 0, 0),
            payment_end_dt: WireDateTime::from_wire_parts(2024, 1, 31, 23, 59, 59),
            sequence_no: Some(1),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["paymentStartDt"], "2024-01-01 00:00:00");
        assert_eq!(value["paymentEndDT"], "2024-01-31 23:59:59");
        assert_eq!(value["sequenceNo"], 1);
    }
}
