//! Section layout of the editor form.
//!
//! Six sections, each a fixed list of [`BoundField`]s. The layout tables are
//! `const` so the renderer and the tests read the same schema.

use strum::IntoEnumIterator;
use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::EnumString;
use strum_macros::IntoStaticStr;

use crate::field::DateField;
use crate::field::Field;
use crate::field::InputKind;
use crate::field::LocationField;
use crate::field::MiscField;
use crate::field::PartyField;
use crate::field::PaymentField;
use crate::field::RateField;

/// Which card of fields the editor shows.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum SectionId {
    #[default]
    Parties,
    Location,
    Dates,
    Rates,
    Payment,
    Misc,
}

/// A labeled input bound to one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundField {
    pub field: Field,
    pub label: &'static str,
    pub kind: InputKind,
    /// Spans the full card width instead of sharing a row.
    pub wide: bool,
}

/// Fields rendered together under an optional sub-heading.
#[derive(Debug, Clone, Copy)]
pub struct FieldGroup {
    pub heading: Option<&'static str>,
    pub fields: &'static [BoundField],
}

const fn text(field: Field, label: &'static str) -> BoundField {
    BoundField {
        field,
        label,
        kind: InputKind::Text,
        wide: false,
    }
}

const fn input(field: Field, label: &'static str, kind: InputKind, wide: bool) -> BoundField {
    BoundField {
        field,
        label,
        kind,
        wide,
    }
}

const SENDER: &[BoundField] = &[
    text(Field::Sender(PartyField::FirstName), "First Name"),
    text(Field::Sender(PartyField::LastName), "Last Name"),
    input(Field::Sender(PartyField::Email), "Email", InputKind::Email, true),
];

const RECEIVER: &[BoundField] = &[
    text(Field::Receiver(PartyField::FirstName), "First Name"),
    text(Field::Receiver(PartyField::LastName), "Last Name"),
    input(Field::Receiver(PartyField::Email), "Email", InputKind::Email, true),
];

const LOCATION: &[BoundField] = &[
    input(Field::Location(LocationField::Address), "Address", InputKind::Text, true),
    text(Field::Location(LocationField::City), "City"),
    text(Field::Location(LocationField::State), "State"),
    text(Field::Location(LocationField::ZipCode), "ZIP Code"),
];

const DATES: &[BoundField] = &[
    input(Field::Dates(DateField::StartDate), "Start Date", InputKind::Date, false),
    input(Field::Dates(DateField::EndDate), "End Date", InputKind::Date, false),
    input(Field::Dates(DateField::SignedDate), "Signed Date", InputKind::Date, false),
];

const RATES: &[BoundField] = &[
    input(Field::Rates(RateField::HourlyRate), "Hourly Rate", InputKind::Number, false),
    input(Field::Rates(RateField::TotalAmount), "Total Amount", InputKind::Number, false),
    text(Field::Rates(RateField::Currency), "Currency"),
];

const PAYMENT: &[BoundField] = &[
    text(Field::Payment(PaymentField::PaymentMethod), "Payment Method"),
    text(Field::Payment(PaymentField::PaymentSchedule), "Payment Schedule"),
    input(Field::Payment(PaymentField::AccountNumber), "Account Number", InputKind::Text, true),
];

const MISC: &[BoundField] = &[
    input(Field::Misc(MiscField::Notes), "Notes", InputKind::Text, true),
    input(Field::Misc(MiscField::Terms), "Terms", InputKind::Text, true),
];

const PARTIES_GROUPS: &[FieldGroup] = &[
    FieldGroup {
        heading: Some("Sender"),
        fields: SENDER,
    },
    FieldGroup {
        heading: Some("Receiver"),
        fields: RECEIVER,
    },
];
const LOCATION_GROUPS: &[FieldGroup] = &[FieldGroup {
    heading: None,
    fields: LOCATION,
}];
const DATES_GROUPS: &[FieldGroup] = &[FieldGroup {
    heading: None,
    fields: DATES,
}];
const RATES_GROUPS: &[FieldGroup] = &[FieldGroup {
    heading: None,
    fields: RATES,
}];
const PAYMENT_GROUPS: &[FieldGroup] = &[FieldGroup {
    heading: None,
    fields: PAYMENT,
}];
const MISC_GROUPS: &[FieldGroup] = &[FieldGroup {
    heading: None,
    fields: MISC,
}];

impl SectionId {
    /// Entry in the sidebar.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Parties => "Parties",
            SectionId::Location => "Location & Place",
            SectionId::Dates => "Contract Dates",
            SectionId::Rates => "Rates & Amounts",
            SectionId::Payment => "Payment Plan",
            SectionId::Misc => "Miscellaneous",
        }
    }

    /// Title of the section card.
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Parties => "Contract Parties",
            other => other.label(),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SectionId::Parties => "Manage sender and receiver information",
            SectionId::Location => "Contract location and address details",
            SectionId::Dates => "Important contract dates and timeline",
            SectionId::Rates => "Financial details and pricing information",
            SectionId::Payment => "Payment method and schedule details",
            SectionId::Misc => "Additional notes and terms",
        }
    }

    pub fn groups(self) -> &'static [FieldGroup] {
        match self {
            SectionId::Parties => PARTIES_GROUPS,
            SectionId::Location => LOCATION_GROUPS,
            SectionId::Dates => DATES_GROUPS,
            SectionId::Rates => RATES_GROUPS,
            SectionId::Payment => PAYMENT_GROUPS,
            SectionId::Misc => MISC_GROUPS,
        }
    }

    /// Columns a row of regular (non-wide) inputs spans.
    pub fn columns(self) -> usize {
        match self {
            SectionId::Dates | SectionId::Rates => 3,
            SectionId::Misc => 1,
            SectionId::Parties | SectionId::Location | SectionId::Payment => 2,
        }
    }

    /// Fields of this section in display order, flattened across groups.
    pub fn fields(self) -> impl Iterator<Item = &'static BoundField> {
        self.groups().iter().flat_map(|group| group.fields.iter())
    }

    pub fn field_count(self) -> usize {
        self.groups().iter().map(|group| group.fields.len()).sum()
    }

    /// Sidebar position, 0-based.
    pub fn index(self) -> usize {
        SectionId::iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(self) -> SectionId {
        SectionId::iter().nth(self.index() + 1).unwrap_or(self)
    }

    pub fn prev(self) -> SectionId {
        match self.index() {
            0 => self,
            i => SectionId::iter().nth(i - 1).unwrap_or(self),
        }
    }
}
