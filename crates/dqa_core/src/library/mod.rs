use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::domain::{Collection, Document, ValidationWarning};
use crate::error::AppError;

/// Caller-supplied record for a document entering the library.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub id: String,
    pub name: String,
    pub content: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub size: u64,
    pub added: String,
    pub collection_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddOutcome {
    pub document: Document,
    pub warnings: Vec<ValidationWarning>,
}

/// Single owner of documents and collections for one session.
///
/// Collection membership is mutated only through this type, so
/// `Collection.document_ids` and `Document.collection_id` can never diverge:
/// every operation updates both sides before returning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Library {
    documents: Vec<Document>,
    collections: Vec<Collection>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn get_document(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn get_collection(&self, id: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == id)
    }

    /// Documents of one collection, in the collection's member order.
    pub fn documents_in(&self, collection_id: &str) -> Result<Vec<&Document>, AppError> {
        let col = self.get_collection(collection_id).ok_or_else(|| {
            AppError::new("LIBRARY_COLLECTION_NOT_FOUND", "Collection not found")
                .with_details(format!("collection_id={collection_id}"))
        })?;
        Ok(col
            .document_ids
            .iter()
            .filter_map(|id| self.documents.iter().find(|d| &d.id == id))
            .collect())
    }

    pub fn unassigned_documents(&self) -> Vec<&Document> {
        self.documents
            .iter()
            .filter(|d| d.collection_id.is_none())
            .collect()
    }

    pub fn add_document(&mut self, input: NewDocument) -> Result<AddOutcome, AppError> {
        if input.id.trim().is_empty() {
            return Err(AppError::new(
                "LIBRARY_DOC_INVALID",
                "Document id is required",
            ));
        }
        if input.name.trim().is_empty() {
            return Err(AppError::new(
                "LIBRARY_DOC_INVALID",
                "Document name is required",
            ));
        }
        if input.content.trim().is_empty() {
            return Err(AppError::new(
                "LIBRARY_DOC_INVALID",
                "Document content is required",
            )
            .with_details(format!("id={}", input.id)));
        }
        if self.get_document(&input.id).is_some() {
            return Err(AppError::new(
                "LIBRARY_DUPLICATE_ID",
                "A document with this id already exists",
            )
            .with_details(format!("id={}", input.id)));
        }
        if let Some(cid) = input.collection_id.as_deref() {
            if self.get_collection(cid).is_none() {
                return Err(AppError::new(
                    "LIBRARY_COLLECTION_NOT_FOUND",
                    "Target collection does not exist",
                )
                .with_details(format!("collection_id={cid}")));
            }
        }

        let mut warnings = Vec::new();
        if OffsetDateTime::parse(&input.added, &Rfc3339).is_err() {
            warnings.push(
                ValidationWarning::new(
                    "LIBRARY_TS_PARSE_FAILED",
                    "Document added timestamp is not RFC3339",
                )
                .with_details(format!("id={}; added={}", input.id, input.added)),
            );
        }

        let content = normalize_text(&input.content);
        let content_sha256 = sha256_hex(content.as_bytes());
        if let Some(dup) = self
            .documents
            .iter()
            .find(|d| d.content_sha256 == content_sha256)
        {
            warnings.push(
                ValidationWarning::new(
                    "LIBRARY_DUPLICATE_CONTENT",
                    "Another document has identical content",
                )
                .with_details(format!("id={}; existing_id={}", input.id, dup.id)),
            );
        }

        let document = Document {
            id: input.id,
            name: input.name,
            content,
            collection_id: input.collection_id.clone(),
            doc_type: input.doc_type,
            size: input.size,
            added: input.added,
            content_sha256,
        };

        if let Some(cid) = input.collection_id.as_deref() {
            if let Some(col) = self.collections.iter_mut().find(|c| c.id == cid) {
                col.document_ids.push(document.id.clone());
            }
        }
        self.documents.push(document.clone());

        Ok(AddOutcome {
            document,
            warnings,
        })
    }

    pub fn create_collection(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Collection, AppError> {
        let id = id.into();
        let name = name.into();
        if id.trim().is_empty() || name.trim().is_empty() {
            return Err(AppError::new(
                "LIBRARY_COLLECTION_INVALID",
                "Collection id and name are required",
            ));
        }
        if self.get_collection(&id).is_some() {
            return Err(AppError::new(
                "LIBRARY_DUPLICATE_ID",
                "A collection with this id already exists",
            )
            .with_details(format!("id={id}")));
        }
        if self.collections.iter().any(|c| c.name == name) {
            return Err(AppError::new(
                "LIBRARY_COLLECTION_INVALID",
                "A collection with this name already exists",
            )
            .with_details(format!("name={name}")));
        }

        let collection = Collection {
            id,
            name,
            document_ids: Vec::new(),
        };
        self.collections.push(collection.clone());
        Ok(collection)
    }

    /// Move a document into a collection (or out of any, with `None`).
    ///
    /// Both sides of the membership invariant are updated before returning;
    /// on any error no mutation is visible.
    pub fn move_document(
        &mut self,
        doc_id: &str,
        target_collection_id: Option<&str>,
    ) -> Result<(), AppError> {
        let doc_pos = self
            .documents
            .iter()
            .position(|d| d.id == doc_id)
            .ok_or_else(|| {
                AppError::new("LIBRARY_DOC_NOT_FOUND", "Document not found")
                    .with_details(format!("doc_id={doc_id}"))
            })?;
        if let Some(cid) = target_collection_id {
            if self.get_collection(cid).is_none() {
                return Err(AppError::new(
                    "LIBRARY_COLLECTION_NOT_FOUND",
                    "Target collection does not exist",
                )
                .with_details(format!("collection_id={cid}")));
            }
        }

        let previous = self.documents[doc_pos].collection_id.clone();
        if previous.as_deref() == target_collection_id {
            return Ok(());
        }

        if let Some(old) = previous.as_deref() {
            if let Some(col) = self.collections.iter_mut().find(|c| c.id == old) {
                col.document_ids.retain(|id| id != doc_id);
            }
        }
        if let Some(new) = target_collection_id {
            if let Some(col) = self.collections.iter_mut().find(|c| c.id == new) {
                col.document_ids.push(doc_id.to_string());
            }
        }
        self.documents[doc_pos].collection_id = target_collection_id.map(str::to_string);
        Ok(())
    }

    /// Delete a document and strip it from its collection, if any.
    pub fn remove_document(&mut self, doc_id: &str) -> Result<Document, AppError> {
        let pos = self
            .documents
            .iter()
            .position(|d| d.id == doc_id)
            .ok_or_else(|| {
                AppError::new("LIBRARY_DOC_NOT_FOUND", "Document not found")
                    .with_details(format!("doc_id={doc_id}"))
            })?;
        let doc = self.documents.remove(pos);
        if let Some(cid) = doc.collection_id.as_deref() {
            if let Some(col) = self.collections.iter_mut().find(|c| c.id == cid) {
                col.document_ids.retain(|id| id != doc_id);
            }
        }
        Ok(doc)
    }

    /// Delete a collection. Member documents survive and become unassigned.
    pub fn delete_collection(&mut self, collection_id: &str) -> Result<Collection, AppError> {
        let pos = self
            .collections
            .iter()
            .position(|c| c.id == collection_id)
            .ok_or_else(|| {
                AppError::new("LIBRARY_COLLECTION_NOT_FOUND", "Collection not found")
                    .with_details(format!("collection_id={collection_id}"))
            })?;
        let col = self.collections.remove(pos);
        for doc in self.documents.iter_mut() {
            if doc.collection_id.as_deref() == Some(collection_id) {
                doc.collection_id = None;
            }
        }
        Ok(col)
    }

    /// Diagnostic check of the membership invariant. Unreachable through the
    /// public API; exists so hosts can assert on imported/deserialized state.
    pub fn audit_membership(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        for doc in &self.documents {
            if let Some(cid) = doc.collection_id.as_deref() {
                match self.get_collection(cid) {
                    None => warnings.push(
                        ValidationWarning::new(
                            "LIBRARY_MEMBERSHIP_DANGLING",
                            "Document references a collection that does not exist",
                        )
                        .with_details(format!("doc_id={}; collection_id={cid}", doc.id)),
                    ),
                    Some(col) if !col.document_ids.iter().any(|id| id == &doc.id) => warnings
                        .push(
                            ValidationWarning::new(
                                "LIBRARY_MEMBERSHIP_MISSING",
                                "Document's collection does not list it as a member",
                            )
                            .with_details(format!("doc_id={}; collection_id={cid}", doc.id)),
                        ),
                    Some(_) => {}
                }
            }
        }

        for col in &self.collections {
            for id in &col.document_ids {
                match self.get_document(id) {
                    None => warnings.push(
                        ValidationWarning::new(
                            "LIBRARY_MEMBERSHIP_DANGLING",
                            "Collection lists a document that does not exist",
                        )
                        .with_details(format!("collection_id={}; doc_id={id}", col.id)),
                    ),
                    Some(doc) if doc.collection_id.as_deref() != Some(col.id.as_str()) => {
                        warnings.push(
                            ValidationWarning::new(
                                "LIBRARY_MEMBERSHIP_MISMATCH",
                                "Member document does not point back at the collection",
                            )
                            .with_details(format!("collection_id={}; doc_id={id}", col.id)),
                        )
                    }
                    Some(_) => {}
                }
            }
        }

        warnings
    }
}

pub(crate) fn normalize_text(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    hex::encode(digest)
}
