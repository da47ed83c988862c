//! The contract record edited by the editor view.
//!
//! Every leaf is a `String`. Nothing here enforces numeric, date, or
//! cross-field consistency: `total_amount` is never derived from
//! `hourly_rate`, and `end_date` is never compared to `start_date`.

use serde::Deserialize;
use serde::Serialize;

use crate::field::DateField;
use crate::field::Field;
use crate::field::LocationField;
use crate::field::MiscField;
use crate::field::PartyField;
use crate::field::PaymentField;
use crate::field::RateField;

/// Contract identifier of the seed record.
pub const SEED_CONTRACT_ID: &str = "CID-E3E1780F83";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    pub contract_identifier: String,
    pub contract_status: String,
    pub contract_type: String,
    pub sender: Party,
    pub receiver: Party,
    pub location: Location,
    pub dates: ContractDates,
    pub rates: Rates,
    pub payment: PaymentPlan,
    pub misc: Misc,
}

/// Sender or receiver of a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Calendar dates, kept as `YYYY-MM-DD` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDates {
    pub start_date: String,
    pub end_date: String,
    pub signed_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rates {
    pub hourly_rate: String,
    pub total_amount: String,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPlan {
    pub payment_method: String,
    pub payment_schedule: String,
    pub account_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Misc {
    pub notes: String,
    pub terms: String,
}

impl ContractRecord {
    /// The fixed sample record every editor session starts from.
    pub fn seed() -> Self {
        Self {
            contract_identifier: SEED_CONTRACT_ID.to_string(),
            contract_status: "Completed".to_string(),
            contract_type: "Basic".to_string(),
            sender: Party {
                first_name: "JamesCameron".to_string(),
                last_name: "V".to_string(),
                email: "cameron@gmail.com".to_string(),
            },
            receiver: Party {
                first_name: "Sai Teja".to_string(),
                last_name: "Kotagiri".to_string(),
                email: "samjose@gmail.com".to_string(),
            },
            location: Location {
                address: "123 Main Street".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                zip_code: "94102".to_string(),
            },
            dates: ContractDates {
                start_date: "2024-01-01".to_string(),
                end_date: "2024-12-31".to_string(),
                signed_date: "2024-01-01".to_string(),
            },
            rates: Rates {
                hourly_rate: "75".to_string(),
                total_amount: "150000".to_string(),
                currency: "USD".to_string(),
            },
            payment: PaymentPlan {
                payment_method: "Bank Transfer".to_string(),
                payment_schedule: "Monthly".to_string(),
                account_number: "****1234".to_string(),
            },
            misc: Misc {
                notes: "Standard contract terms apply".to_string(),
                terms: "Net 30 payment terms".to_string(),
            },
        }
    }

    /// Current value of one editable field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Sender(f) => self.sender.value(f),
            Field::Receiver(f) => self.receiver.value(f),
            Field::Location(f) => match f {
                LocationField::Address => &self.location.address,
                LocationField::City => &self.location.city,
                LocationField::State => &self.location.state,
                LocationField::ZipCode => &self.location.zip_code,
            },
            Field::Dates(f) => match f {
                DateField::StartDate => &self.dates.start_date,
                DateField::EndDate => &self.dates.end_date,
                DateField::SignedDate => &self.dates.signed_date,
            },
            Field::Rates(f) => match f {
                RateField::HourlyRate => &self.rates.hourly_rate,
                RateField::TotalAmount => &self.rates.total_amount,
                RateField::Currency => &self.rates.currency,
            },
            Field::Payment(f) => match f {
                PaymentField::PaymentMethod => &self.payment.payment_method,
                PaymentField::PaymentSchedule => &self.payment.payment_schedule,
                PaymentField::AccountNumber => &self.payment.account_number,
            },
            Field::Misc(f) => match f {
                MiscField::Notes => &self.misc.notes,
                MiscField::Terms => &self.misc.terms,
            },
        }
    }

    /// Mutable slot backing one editable field. Only the editor state
    /// writes through this so every edit goes through `update_field`.
    pub(crate) fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Sender(f) => self.sender.slot_mut(f),
            Field::Receiver(f) => self.receiver.slot_mut(f),
            Field::Location(f) => match f {
                LocationField::Address => &mut self.location.address,
                LocationField::City => &mut self.location.city,
                LocationField::State => &mut self.location.state,
                LocationField::ZipCode => &mut self.location.zip_code,
            },
            Field::Dates(f) => match f {
                DateField::StartDate => &mut self.dates.start_date,
                DateField::EndDate => &mut self.dates.end_date,
                DateField::SignedDate => &mut self.dates.signed_date,
            },
            Field::Rates(f) => match f {
                RateField::HourlyRate => &mut self.rates.hourly_rate,
                RateField::TotalAmount => &mut self.rates.total_amount,
                RateField::Currency => &mut self.rates.currency,
            },
            Field::Payment(f) => match f {
                PaymentField::PaymentMethod => &mut self.payment.payment_method,
                PaymentField::PaymentSchedule => &mut self.payment.payment_schedule,
                PaymentField::AccountNumber => &mut self.payment.account_number,
            },
            Field::Misc(f) => match f {
                MiscField::Notes => &mut self.misc.notes,
                MiscField::Terms => &mut self.misc.terms,
            },
        }
    }
}

impl Party {
    fn value(&self, field: PartyField) -> &str {
        match field {
            PartyField::FirstName => &self.first_name,
            PartyField::LastName => &self.last_name,
            PartyField::Email => &self.email,
        }
    }

    fn slot_mut(&mut self, field: PartyField) -> &mut String {
        match field {
            PartyField::FirstName => &mut self.first_name,
            PartyField::LastName => &mut self.last_name,
            PartyField::Email => &mut self.email,
        }
    }
}
