use giftcard_form::{
    domain::{GiftCard, GiftCardTag, MetadataItem},
    form::{
        FieldKind, FieldValue, FormCommand, FormError, FormField, FormSnapshot, FormState,
        GiftCardFormData, apply_command,
    },
};

fn card(tags: &[&str]) -> GiftCard {
    GiftCard {
        id: "card-1".into(),
        tags: tags.iter().map(|tag| GiftCardTag::new(*tag)).collect(),
        expiry_date: Some("2030-06-30".into()),
        metadata: vec![MetadataItem::new("source", "import")],
        private_metadata: Vec::new(),
    }
}

fn clean_state(tags: &[&str]) -> FormState {
    FormState::from_snapshot(&FormSnapshot::from_gift_card(Some(&card(tags)), "USD"))
}

#[test]
fn starts_clean_with_snapshot_values() {
    let state = clean_state(&["vip"]);
    assert!(!state.has_changed());
    assert_eq!(state.value(FormField::Tags), FieldValue::tags(["vip"]));
}

#[test]
fn touching_a_field_with_the_same_value_marks_dirty() {
    let state = clean_state(&[]);
    let state = apply_command(&state, FormCommand::change(FormField::Tag, FieldValue::text("x")))
        .unwrap();
    let state = apply_command(&state, FormCommand::change(FormField::Tag, FieldValue::text("x")))
        .unwrap();
    assert!(state.has_changed());
    assert_eq!(state.data().tag, "x");
}

#[test]
fn equal_value_still_counts_as_a_change() {
    let state = clean_state(&["vip"]);
    let state = apply_command(
        &state,
        FormCommand::change(FormField::Tags, FieldValue::tags(["vip"])),
    )
    .unwrap();
    assert!(state.has_changed());
}

#[test]
fn mark_clean_keeps_values() {
    let state = clean_state(&["vip"]);
    let dirty = apply_command(
        &state,
        FormCommand::change(FormField::Tags, FieldValue::tags(["vip", "new"])),
    )
    .unwrap();
    let clean = apply_command(&dirty, FormCommand::MarkClean).unwrap();
    assert!(!clean.has_changed());
    assert_eq!(clean.data().tags, vec!["vip", "new"]);
}

#[test]
fn reinitialize_discards_unsaved_edits() {
    let state = clean_state(&["vip"]);
    let dirty = apply_command(
        &state,
        FormCommand::change(FormField::Tags, FieldValue::tags(["other"])),
    )
    .unwrap();
    let reloaded = FormSnapshot::from_gift_card(Some(&card(&["fresh"])), "USD");
    let state = apply_command(&dirty, FormCommand::Reinitialize(reloaded)).unwrap();
    assert!(!state.has_changed());
    assert_eq!(state.data().tags, vec!["fresh"]);
}

#[test]
fn kind_mismatch_is_rejected_and_state_is_unchanged() {
    let state = clean_state(&["vip"]);
    let err = apply_command(
        &state,
        FormCommand::change(FormField::Tags, FieldValue::text("vip,new")),
    )
    .unwrap_err();
    assert_eq!(
        err,
        FormError::KindMismatch {
            field: FormField::Tags,
            expected: FieldKind::TagSet,
            found: FieldKind::Text,
        }
    );
    assert!(!state.has_changed());
}

#[test]
fn metadata_changes_are_tracked_per_list() {
    let state = clean_state(&[]);
    let state = apply_command(
        &state,
        FormCommand::change(
            FormField::PrivateMetadata,
            FieldValue::Metadata(vec![MetadataItem::new("batch", "9")]),
        ),
    )
    .unwrap();
    assert!(state.is_private_metadata_touched());
    assert!(!state.is_metadata_touched());
}

#[test]
fn snapshot_is_not_affected_by_state_edits() {
    let snapshot = FormSnapshot::new(GiftCardFormData::default());
    let state = FormState::from_snapshot(&snapshot);
    let _ = apply_command(
        &state,
        FormCommand::change(FormField::BalanceAmount, FieldValue::Amount(50.0)),
    )
    .unwrap();
    assert_eq!(snapshot.data().balance_amount, 0.0);
}
