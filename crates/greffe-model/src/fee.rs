//! # Court Fees and Payments
//!
//! [`Fee`] tracks an amount owed on a dossier and how much of it has been
//! settled. Amounts are exact decimals; float arithmetic never touches
//! money here.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use greffe_core::{DossierId, FeeId, Timestamp};

use crate::record::impl_record;

/// The kind of amount owed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeKind {
    /// Clerk-office filing fee (droit de greffe).
    #[serde(rename = "DROIT_GREFFE")]
    CourtFee,
    /// Fiscal stamp duty.
    #[serde(rename = "TIMBRE_FISCAL")]
    StampDuty,
    /// Deposit held by the court (consignation).
    #[serde(rename = "CONSIGNATION")]
    Deposit,
    #[serde(rename = "EXPERTISE")]
    ExpertFee,
    /// Service-of-process fee (signification).
    #[serde(rename = "SIGNIFICATION")]
    ServiceFee,
    #[serde(rename = "AMENDE")]
    Fine,
    #[serde(rename = "DOMMAGES_INTERETS")]
    Damages,
    /// Taxed costs (dépens).
    #[serde(rename = "DEPENS")]
    Costs,
    #[serde(rename = "AUTRE")]
    Other,
}

impl FeeKind {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::CourtFee => "DROIT_GREFFE",
            Self::StampDuty => "TIMBRE_FISCAL",
            Self::Deposit => "CONSIGNATION",
            Self::ExpertFee => "EXPERTISE",
            Self::ServiceFee => "SIGNIFICATION",
            Self::Fine => "AMENDE",
            Self::Damages => "DOMMAGES_INTERETS",
            Self::Costs => "DEPENS",
            Self::Other => "AUTRE",
        }
    }
}

impl std::fmt::Display for FeeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Settlement state of a fee. Set by direct write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[serde(rename = "A_PAYER")]
    Due,
    #[serde(rename = "PAYE")]
    Paid,
    #[serde(rename = "PARTIEL")]
    Partial,
    #[serde(rename = "EN_RETARD")]
    Overdue,
    /// Fee waived (exonéré).
    #[serde(rename = "EXONERE")]
    Exempt,
}

impl PaymentStatus {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Due => "A_PAYER",
            Self::Paid => "PAYE",
            Self::Partial => "PARTIEL",
            Self::Overdue => "EN_RETARD",
            Self::Exempt => "EXONERE",
        }
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        Self::Due
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// An amount owed on a dossier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fee {
    /// Unique identifier, assigned at creation.
    pub id: FeeId,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub modified_at: Timestamp,
    /// Soft-delete convention flag.
    pub active: bool,
    pub dossier: DossierId,
    pub kind: FeeKind,
    /// Amount owed.
    pub amount_due: Decimal,
    /// Amount settled so far.
    pub amount_paid: Decimal,
    pub due_on: NaiveDate,
    #[serde(default)]
    pub paid_on: Option<NaiveDate>,
    pub status: PaymentStatus,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub receipt_number: Option<String>,
}

impl Fee {
    /// Amount still outstanding. Never negative; overpayment clamps to
    /// zero.
    pub fn outstanding(&self) -> Decimal {
        (self.amount_due - self.amount_paid).max(Decimal::ZERO)
    }
}

impl_record!(Fee, FeeId, "fee");

/// Write payload for creating or replacing a [`Fee`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFee {
    pub dossier: DossierId,
    pub kind: FeeKind,
    pub amount_due: Decimal,
    #[serde(default)]
    pub amount_paid: Decimal,
    pub due_on: NaiveDate,
    #[serde(default)]
    pub paid_on: Option<NaiveDate>,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub receipt_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fee_kind_codes() {
        assert_eq!(FeeKind::CourtFee.as_code(), "DROIT_GREFFE");
        assert_eq!(FeeKind::Costs.as_code(), "DEPENS");
        let parsed: FeeKind = serde_json::from_str("\"CONSIGNATION\"").unwrap();
        assert_eq!(parsed, FeeKind::Deposit);
    }

    #[test]
    fn test_payment_status_defaults_due() {
        assert_eq!(PaymentStatus::default(), PaymentStatus::Due);
    }

    #[test]
    fn test_outstanding_clamps_at_zero() {
        let mut fee = sample_fee(dec!(150.00), dec!(40.00));
        assert_eq!(fee.outstanding(), dec!(110.00));
        fee.amount_paid = dec!(200.00);
        assert_eq!(fee.outstanding(), Decimal::ZERO);
    }

    fn sample_fee(due: Decimal, paid: Decimal) -> Fee {
        Fee {
            id: FeeId::new(),
            created_at: Timestamp::now(),
            modified_at: Timestamp::now(),
            active: true,
            dossier: DossierId::new(),
            kind: FeeKind::CourtFee,
            amount_due: due,
            amount_paid: paid,
            due_on: chrono::NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            paid_on: None,
            status: PaymentStatus::Partial,
            payment_method: None,
            receipt_number: None,
        }
    }
}
