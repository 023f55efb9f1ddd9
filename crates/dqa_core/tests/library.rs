use pretty_assertions::assert_eq;

use dqa_core::library::{Library, NewDocument};

fn new_doc(id: &str, name: &str, content: &str, collection_id: Option<&str>) -> NewDocument {
    NewDocument {
        id: id.to_string(),
        name: name.to_string(),
        content: content.to_string(),
        doc_type: "TXT".to_string(),
        size: content.len() as u64,
        added: "2026-01-01T00:00:00Z".to_string(),
        collection_id: collection_id.map(str::to_string),
    }
}

#[test]
fn add_document_into_collection_updates_both_sides() {
    let mut lib = Library::new();
    lib.create_collection("col-1", "Reports").expect("create");

    let outcome = lib
        .add_document(new_doc("doc-1", "Report.pdf", "report body", Some("col-1")))
        .expect("add");
    assert!(outcome.warnings.is_empty());

    let col = lib.get_collection("col-1").expect("collection");
    assert_eq!(col.document_ids, vec!["doc-1".to_string()]);
    assert_eq!(
        lib.get_document("doc-1").expect("doc").collection_id,
        Some("col-1".to_string())
    );
    assert!(lib.audit_membership().is_empty());
}

#[test]
fn add_document_rejects_blank_fields_and_duplicate_ids() {
    let mut lib = Library::new();

    let err = lib
        .add_document(new_doc("", "a.txt", "text", None))
        .expect_err("blank id");
    assert_eq!(err.code, "LIBRARY_DOC_INVALID");

    let err = lib
        .add_document(new_doc("doc-1", "a.txt", "   ", None))
        .expect_err("blank content");
    assert_eq!(err.code, "LIBRARY_DOC_INVALID");

    lib.add_document(new_doc("doc-1", "a.txt", "text", None))
        .expect("first add");
    let err = lib
        .add_document(new_doc("doc-1", "b.txt", "other", None))
        .expect_err("duplicate id");
    assert_eq!(err.code, "LIBRARY_DUPLICATE_ID");
}

#[test]
fn add_document_rejects_unknown_collection() {
    let mut lib = Library::new();
    let err = lib
        .add_document(new_doc("doc-1", "a.txt", "text", Some("col-404")))
        .expect_err("missing collection");
    assert_eq!(err.code, "LIBRARY_COLLECTION_NOT_FOUND");
    assert!(lib.documents().is_empty());
}

#[test]
fn add_document_warns_on_bad_timestamp_and_duplicate_content() {
    let mut lib = Library::new();
    lib.add_document(new_doc("doc-1", "a.txt", "same body", None))
        .expect("first");

    let mut input = new_doc("doc-2", "b.txt", "same body", None);
    input.added = "last tuesday".to_string();
    let outcome = lib.add_document(input).expect("second");

    let codes: Vec<&str> = outcome.warnings.iter().map(|w| w.code.as_str()).collect();
    assert!(codes.contains(&"LIBRARY_TS_PARSE_FAILED"));
    assert!(codes.contains(&"LIBRARY_DUPLICATE_CONTENT"));
}

#[test]
fn content_line_endings_are_normalized_on_entry() {
    let mut lib = Library::new();
    let outcome = lib
        .add_document(new_doc("doc-1", "a.txt", "line one\r\nline two\rline three", None))
        .expect("add");
    assert_eq!(outcome.document.content, "line one\nline two\nline three");
}

#[test]
fn move_document_between_collections_is_atomic() {
    let mut lib = Library::new();
    lib.create_collection("col-1", "One").expect("create one");
    lib.create_collection("col-2", "Two").expect("create two");
    lib.add_document(new_doc("doc-1", "a.txt", "text", Some("col-1")))
        .expect("add");

    lib.move_document("doc-1", Some("col-2")).expect("move");

    assert!(lib
        .get_collection("col-1")
        .expect("col-1")
        .document_ids
        .is_empty());
    assert_eq!(
        lib.get_collection("col-2").expect("col-2").document_ids,
        vec!["doc-1".to_string()]
    );
    assert!(lib.audit_membership().is_empty());

    lib.move_document("doc-1", None).expect("unassign");
    assert_eq!(lib.get_document("doc-1").expect("doc").collection_id, None);
    assert_eq!(lib.unassigned_documents().len(), 1);
    assert!(lib.audit_membership().is_empty());
}

#[test]
fn move_document_to_unknown_collection_leaves_state_untouched() {
    let mut lib = Library::new();
    lib.create_collection("col-1", "One").expect("create");
    lib.add_document(new_doc("doc-1", "a.txt", "text", Some("col-1")))
        .expect("add");

    let err = lib
        .move_document("doc-1", Some("col-404"))
        .expect_err("unknown target");
    assert_eq!(err.code, "LIBRARY_COLLECTION_NOT_FOUND");

    assert_eq!(
        lib.get_document("doc-1").expect("doc").collection_id,
        Some("col-1".to_string())
    );
    assert_eq!(
        lib.get_collection("col-1").expect("col").document_ids,
        vec!["doc-1".to_string()]
    );
}

#[test]
fn remove_document_strips_collection_membership() {
    let mut lib = Library::new();
    lib.create_collection("col-1", "One").expect("create");
    lib.add_document(new_doc("doc-1", "a.txt", "text", Some("col-1")))
        .expect("add");

    let removed = lib.remove_document("doc-1").expect("remove");
    assert_eq!(removed.id, "doc-1");
    assert!(lib.get_document("doc-1").is_none());
    assert!(lib
        .get_collection("col-1")
        .expect("col")
        .document_ids
        .is_empty());
    assert!(lib.audit_membership().is_empty());
}

#[test]
fn delete_collection_keeps_documents_but_unassigns_them() {
    let mut lib = Library::new();
    lib.create_collection("col-1", "One").expect("create");
    lib.add_document(new_doc("doc-1", "a.txt", "text", Some("col-1")))
        .expect("add a");
    lib.add_document(new_doc("doc-2", "b.txt", "more text", Some("col-1")))
        .expect("add b");

    lib.delete_collection("col-1").expect("delete");

    assert!(lib.get_collection("col-1").is_none());
    assert_eq!(lib.documents().len(), 2);
    assert!(lib.documents().iter().all(|d| d.collection_id.is_none()));
    assert!(lib.audit_membership().is_empty());
}

#[test]
fn create_collection_rejects_duplicate_names() {
    let mut lib = Library::new();
    lib.create_collection("col-1", "Reports").expect("first");
    let err = lib
        .create_collection("col-2", "Reports")
        .expect_err("duplicate name");
    assert_eq!(err.code, "LIBRARY_COLLECTION_INVALID");
}

#[test]
fn documents_in_preserves_member_order() {
    let mut lib = Library::new();
    lib.create_collection("col-1", "One").expect("create");
    lib.add_document(new_doc("doc-2", "b.txt", "second", Some("col-1")))
        .expect("add b");
    lib.add_document(new_doc("doc-1", "a.txt", "first", Some("col-1")))
        .expect("add a");

    let members = lib.documents_in("col-1").expect("members");
    let ids: Vec<&str> = members.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["doc-2", "doc-1"]);
}
