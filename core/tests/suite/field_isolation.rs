//! Editing one field changes that field and nothing else.

use contract_core::ContractRecord;
use contract_core::EditorState;
use contract_core::Field;
use contract_core::SectionId;
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn all_fields() -> Vec<Field> {
    Field::all().collect()
}

proptest! {
    #[test]
    fn update_field_touches_only_its_leaf(index in 0usize..20, value in "\\PC*") {
        let fields = all_fields();
        let target = fields[index];
        let seed = ContractRecord::seed();

        let mut state = EditorState::new();
        state.update_field(target, value.clone());

        prop_assert_eq!(state.value(target), value.as_str());
        for other in fields.iter().copied().filter(|f| *f != target) {
            prop_assert_eq!(state.value(other), seed.value(other), "{} changed", other.path());
        }
        prop_assert_eq!(&state.record().contract_identifier, &seed.contract_identifier);
        prop_assert_eq!(&state.record().contract_status, &seed.contract_status);
        prop_assert_eq!(&state.record().contract_type, &seed.contract_type);
    }

    #[test]
    fn section_switches_never_touch_the_record(picks in prop::collection::vec(0usize..6, 0..12)) {
        let sections: Vec<SectionId> = SectionId::iter().collect();
        let mut state = EditorState::new();
        for pick in picks {
            state.select_section(sections[pick]);
            prop_assert_eq!(state.active_section(), sections[pick]);
        }
        prop_assert_eq!(state.record(), &ContractRecord::seed());
    }

    #[test]
    fn last_write_wins(index in 0usize..20, first in "\\PC*", second in "\\PC*") {
        let target = all_fields()[index];
        let mut state = EditorState::new();
        state.update_field(target, first);
        state.update_field(target, second.clone());
        prop_assert_eq!(state.value(target), second.as_str());
    }
}

#[test]
fn seed_matches_the_documented_sample() {
    let state = EditorState::new();
    let record = state.record();
    assert_eq!(record.contract_identifier, "CID-E3E1780F83");
    assert_eq!(record.contract_status, "Completed");
    assert_eq!(record.contract_type, "Basic");
    assert_eq!(
        format!("{} {}", record.sender.first_name, record.sender.last_name),
        "JamesCameron V"
    );
    assert_eq!(
        format!("{} {}", record.receiver.first_name, record.receiver.last_name),
        "Sai Teja Kotagiri"
    );
    assert_eq!(record.rates.total_amount, "150000");
}
