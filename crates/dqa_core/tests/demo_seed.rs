use dqa_core::demo::seed_demo_library;

#[test]
fn demo_seed_is_deterministic() {
    let a = seed_demo_library().expect("seed a");
    let b = seed_demo_library().expect("seed b");

    let ids_a: Vec<&str> = a.documents().iter().map(|d| d.id.as_str()).collect();
    let ids_b: Vec<&str> = b.documents().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids_a, ids_b);

    for (da, db) in a.documents().iter().zip(b.documents()) {
        assert_eq!(da.content_sha256, db.content_sha256);
    }
}

#[test]
fn demo_seed_membership_is_consistent() {
    let lib = seed_demo_library().expect("seed");
    assert!(lib.audit_membership().is_empty());

    let q3 = lib.documents_in("col-1").expect("col-1 members");
    assert_eq!(q3.len(), 2);
    let intel = lib.documents_in("col-2").expect("col-2 members");
    assert_eq!(intel.len(), 1);
    assert_eq!(lib.unassigned_documents().len(), 1);
}

#[test]
fn demo_seed_timestamps_are_rfc3339() {
    let lib = seed_demo_library().expect("seed");
    for doc in lib.documents() {
        assert!(
            time::OffsetDateTime::parse(
                &doc.added,
                &time::format_description::well_known::Rfc3339
            )
            .is_ok(),
            "doc {} has non-RFC3339 added timestamp",
            doc.id
        );
    }
}
