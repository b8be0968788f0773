use engagement_layout::LayoutError;
use engagement_layout::model::*;

fn records(json: &str) -> Vec<EventRecord> {
    serde_json::from_str(json).unwrap()
}

#[test]
fn ingests_loader_rows() {
    let table = EventTable::from_records(records(
        r#"[
            {"date": "2024-03-04", "category": "Mil-Mil (US)", "location": "Casey", "engagement": "Staff talks"},
            {"date": "2024-03-05", "category": "Civ-Mil", "label": "Town hall", "status": 2, "band": "8A", "color": "green"}
        ]"#,
    ))
    .unwrap();
    assert_eq!(table.len(), 2);
    let first = table.get(0).unwrap();
    assert_eq!(first.category, Category::MilMilUs);
    assert_eq!(first.location.as_deref(), Some("Casey"));
    assert_eq!(first.label, "Staff talks");
    let second = table.get(1).unwrap();
    assert_eq!(second.status, Some(Status::Approved));
    assert_eq!(second.band, Some(Band::EighthArmy));
    assert_eq!(second.color.as_deref(), Some("green"));
}

#[test]
fn unknown_category_is_reported_with_its_row() {
    let err = EventTable::from_records(records(
        r#"[
            {"date": "2024-03-04", "category": "Civ-Mil", "label": "ok"},
            {"date": "2024-03-04", "category": "Mil-Mil (JP)", "label": "bad"}
        ]"#,
    ))
    .unwrap_err();
    assert_eq!(
        err,
        LayoutError::UnknownCategory { index: 1, value: "Mil-Mil (JP)".into() }
    );
}

#[test]
fn unknown_status_and_band_are_rejected() {
    let err = EventTable::from_records(records(
        r#"[{"date": "2024-03-04", "category": "Civ-Mil", "label": "x", "status": 7}]"#,
    ))
    .unwrap_err();
    assert_eq!(err, LayoutError::UnknownStatus { index: 0, ordinal: 7 });

    for ordinal in [300, -1] {
        let json = format!(
            r#"[{{"date": "2024-03-04", "category": "Civ-Mil", "label": "x", "status": {ordinal}}}]"#
        );
        let err = EventTable::from_records(records(&json)).unwrap_err();
        assert_eq!(err, LayoutError::UnknownStatus { index: 0, ordinal });
    }

    let err = EventTable::from_records(records(
        r#"[{"date": "2024-03-04", "category": "Civ-Mil", "label": "x", "band": "Navy"}]"#,
    ))
    .unwrap_err();
    assert_eq!(err, LayoutError::UnknownBand { index: 0, value: "Navy".into() });
}

#[test]
fn categories_map_to_shapes() {
    assert_eq!("Mil-Mil (ROK)".parse::<Category>(), Ok(Category::MilMilRok));
    assert_eq!(Category::MilMilRok.shape(), Shape::Circle);
    assert_eq!(Category::CivMil.to_string(), "Civ-Mil");
    assert_eq!(Status::from_ordinal(1), Some(Status::ForApproval));
}
