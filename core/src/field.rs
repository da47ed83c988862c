//! Typed addresses for every editable leaf of a [`crate::ContractRecord`].
//!
//! A [`Field`] names a record section and a key inside it, so an edit can
//! only ever target a leaf that exists. String lookups are only needed for
//! input that arrives from outside the program (the `--set` flag).

use strum::IntoEnumIterator;
use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::EnumString;
use strum_macros::IntoStaticStr;

/// The sub-records of a contract that hold editable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum RecordSection {
    Sender,
    Receiver,
    Location,
    Dates,
    Rates,
    Payment,
    Misc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum PartyField {
    FirstName,
    LastName,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum LocationField {
    Address,
    City,
    State,
    ZipCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum DateField {
    StartDate,
    EndDate,
    SignedDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum RateField {
    HourlyRate,
    TotalAmount,
    Currency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum PaymentField {
    PaymentMethod,
    PaymentSchedule,
    AccountNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum MiscField {
    Notes,
    Terms,
}

/// One editable leaf: a record section plus the key inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Sender(PartyField),
    Receiver(PartyField),
    Location(LocationField),
    Dates(DateField),
    Rates(RateField),
    Payment(PaymentField),
    Misc(MiscField),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldLookupError {
    #[error("unknown section '{0}'")]
    UnknownSection(String),

    #[error("section '{section}' has no field '{key}'")]
    UnknownField { section: RecordSection, key: String },

    #[error("expected <section>.<field>, got '{0}'")]
    MalformedPath(String),
}

impl Field {
    pub fn section(self) -> RecordSection {
        match self {
            Field::Sender(_) => RecordSection::Sender,
            Field::Receiver(_) => RecordSection::Receiver,
            Field::Location(_) => RecordSection::Location,
            Field::Dates(_) => RecordSection::Dates,
            Field::Rates(_) => RecordSection::Rates,
            Field::Payment(_) => RecordSection::Payment,
            Field::Misc(_) => RecordSection::Misc,
        }
    }

    /// Key of the field inside its section, e.g. `firstName` or `zipCode`.
    pub fn key(self) -> &'static str {
        match self {
            Field::Sender(f) | Field::Receiver(f) => f.into(),
            Field::Location(f) => f.into(),
            Field::Dates(f) => f.into(),
            Field::Rates(f) => f.into(),
            Field::Payment(f) => f.into(),
            Field::Misc(f) => f.into(),
        }
    }

    /// Input id, unique across the whole form. Party fields carry their
    /// section as a prefix since sender and receiver share keys.
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Sender(PartyField::FirstName) => "senderFirstName",
            Field::Sender(PartyField::LastName) => "senderLastName",
            Field::Sender(PartyField::Email) => "senderEmail",
            Field::Receiver(PartyField::FirstName) => "receiverFirstName",
            Field::Receiver(PartyField::LastName) => "receiverLastName",
            Field::Receiver(PartyField::Email) => "receiverEmail",
            other => other.key(),
        }
    }

    /// Dotted path such as `rates.hourlyRate`.
    pub fn path(self) -> String {
        format!("{}.{}", self.section(), self.key())
    }

    /// All fields of one record section in declaration order.
    pub fn in_section(section: RecordSection) -> Vec<Field> {
        match section {
            RecordSection::Sender => PartyField::iter().map(Field::Sender).collect(),
            RecordSection::Receiver => PartyField::iter().map(Field::Receiver).collect(),
            RecordSection::Location => LocationField::iter().map(Field::Location).collect(),
            RecordSection::Dates => DateField::iter().map(Field::Dates).collect(),
            RecordSection::Rates => RateField::iter().map(Field::Rates).collect(),
            RecordSection::Payment => PaymentField::iter().map(Field::Payment).collect(),
            RecordSection::Misc => MiscField::iter().map(Field::Misc).collect(),
        }
    }

    pub fn all() -> impl Iterator<Item = Field> {
        RecordSection::iter().flat_map(Field::in_section)
    }

    pub fn lookup(section: &str, key: &str) -> Result<Field, FieldLookupError> {
        let section: RecordSection = section
            .parse()
            .map_err(|_| FieldLookupError::UnknownSection(section.to_string()))?;
        Field::in_section(section)
            .into_iter()
            .find(|field| field.key() == key)
            .ok_or_else(|| FieldLookupError::UnknownField {
                section,
                key: key.to_string(),
            })
    }

    /// Parse a dotted `<section>.<field>` path.
    pub fn parse_path(path: &str) -> Result<Field, FieldLookupError> {
        let Some((section, key)) = path.split_once('.') else {
            return Err(FieldLookupError::MalformedPath(path.to_string()));
        };
        Field::lookup(section, key)
    }
}

/// How an input behaves when typed into, mirroring native form input types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum InputKind {
    Text,
    Email,
    Date,
    Number,
}

impl InputKind {
    /// Whether a typed character is admitted. This is keystroke filtering,
    /// not validation: a partially typed date is still accepted.
    pub fn accepts(self, c: char) -> bool {
        match self {
            InputKind::Text | InputKind::Email => !c.is_control(),
            InputKind::Date => c.is_ascii_digit() || c == '-',
            InputKind::Number => c.is_ascii_digit() || c == '.' || c == '-',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn record_sections_cover_twenty_fields() {
        assert_eq!(Field::all().count(), 20);
    }

    #[test]
    fn input_ids_are_unique() {
        let ids: HashSet<&str> = Field::all().map(Field::input_id).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn keys_are_camel_case() {
        assert_eq!(Field::Location(LocationField::ZipCode).key(), "zipCode");
        assert_eq!(Field::Receiver(PartyField::FirstName).key(), "firstName");
        assert_eq!(Field::Rates(RateField::HourlyRate).path(), "rates.hourlyRate");
    }

    #[test]
    fn lookup_resolves_known_pairs() {
        assert_eq!(
            Field::lookup("payment", "accountNumber"),
            Ok(Field::Payment(PaymentField::AccountNumber))
        );
        assert_eq!(
            Field::parse_path("misc.notes"),
            Ok(Field::Misc(MiscField::Notes))
        );
    }

    #[test]
    fn lookup_rejects_unknown_pairs() {
        assert_eq!(
            Field::lookup("parties", "firstName"),
            Err(FieldLookupError::UnknownSection("parties".to_string()))
        );
        assert_eq!(
            Field::lookup("dates", "notes"),
            Err(FieldLookupError::UnknownField {
                section: RecordSection::Dates,
                key: "notes".to_string(),
            })
        );
        assert!(matches!(
            Field::parse_path("hourlyRate"),
            Err(FieldLookupError::MalformedPath(_))
        ));
    }

    #[test]
    fn every_field_round_trips_through_its_path() {
        for field in Field::all() {
            assert_eq!(Field::parse_path(&field.path()), Ok(field));
        }
    }

    #[test]
    fn input_kinds_filter_keystrokes() {
        assert!(InputKind::Number.accepts('7'));
        assert!(InputKind::Number.accepts('.'));
        assert!(!InputKind::Number.accepts('x'));
        assert!(InputKind::Date.accepts('-'));
        assert!(!InputKind::Date.accepts('/'));
        assert!(InputKind::Email.accepts('@'));
        assert!(InputKind::Text.accepts(' '));
        assert!(!InputKind::Text.accepts('\u{7}'));
    }
}
