//! # Gateway Ports
//!
//! Traits the out-of-scope collaborators implement: persistence, image
//! resolution, and the print/share/email backend. The core owns only the
//! contracts; the host app owns the implementations.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Gateway Boundaries                                │
//! │                                                                         │
//! │   billforge-core / billforge-render          Host application           │
//! │                                                                         │
//! │   DocumentStore  ◄──────────────────────  SQLite / key-value / cloud    │
//! │   ImageResolver  ◄──────────────────────  device storage / camera roll  │
//! │   OutputSink     ◄──────────────────────  print / share / email         │
//! │                                                                         │
//! │   Simple CRUD, keyed by opaque id, last-write-wins. No transactions.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`MemoryStore`] is the in-process reference implementation, used by tests
//! and as the offline fallback inside [`FallbackStore`].

use std::collections::HashMap;

use thiserror::Error;

use crate::types::{DocumentType, ImageRef, InvoiceRecord, PartyInfo, Product};

// =============================================================================
// Gateway Errors
// =============================================================================

/// Failures at a persistence/output boundary.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The backing store cannot be reached (device storage error, cloud
    /// outage). Non-fatal by policy: callers fall back to a simpler store.
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    /// The keyed entity does not exist.
    #[error("not found: {id}")]
    NotFound { id: String },
}

/// Failures resolving an image reference.
///
/// Always local to the image slot: a missing logo must never prevent the
/// rest of the document from rendering.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),

    #[error("asset unreadable: {0}")]
    Unreadable(String),
}

/// Convenience alias for gateway results.
pub type GatewayResult<T> = Result<T, GatewayError>;

// =============================================================================
// Document Store
// =============================================================================

/// CRUD over saved documents, catalog products, customers, and the two
/// document-number counters.
///
/// Counters deserve a note: [`counter`](DocumentStore::counter) returns the
/// value to format the *next* number from, and callers persist the
/// incremented value via [`set_counter`](DocumentStore::set_counter) only
/// after `save_invoice` succeeds. Abandoned drafts burn nothing.
pub trait DocumentStore {
    fn list_invoices(&self) -> GatewayResult<Vec<InvoiceRecord>>;
    fn get_invoice(&self, id: &str) -> GatewayResult<Option<InvoiceRecord>>;
    fn save_invoice(&mut self, record: &InvoiceRecord) -> GatewayResult<()>;
    fn delete_invoice(&mut self, id: &str) -> GatewayResult<()>;

    fn list_products(&self) -> GatewayResult<Vec<Product>>;
    fn save_product(&mut self, product: &Product) -> GatewayResult<()>;
    fn delete_product(&mut self, id: &str) -> GatewayResult<()>;

    fn list_customers(&self) -> GatewayResult<Vec<PartyInfo>>;
    fn save_customer(&mut self, customer: &PartyInfo) -> GatewayResult<()>;

    fn counter(&self, document_type: DocumentType) -> GatewayResult<u32>;
    fn set_counter(&mut self, document_type: DocumentType, value: u32) -> GatewayResult<()>;
}

// =============================================================================
// Image Resolver
// =============================================================================

/// Resolves an opaque image reference to raw bytes.
pub trait ImageResolver {
    fn resolve(&self, image: &ImageRef) -> Result<Vec<u8>, AssetError>;
}

// =============================================================================
// Output Sink
// =============================================================================

/// A finished document handed to a print/share/email backend.
///
/// The render crate produces these; the core does not need to know the
/// backend's protocol.
#[derive(Debug, Clone)]
pub struct DocumentPayload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Handle returned by the backend (share sheet token, print job id, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputHandle(pub String);

/// Print/share/email boundary.
pub trait OutputSink {
    fn emit(&mut self, document: &DocumentPayload) -> GatewayResult<OutputHandle>;
}

// =============================================================================
// Memory Store
// =============================================================================

/// In-memory [`DocumentStore`]: the reference implementation, test double,
/// and offline fallback target.
#[derive(Debug, Default)]
pub struct MemoryStore {
    invoices: HashMap<String, InvoiceRecord>,
    products: HashMap<String, Product>,
    customers: HashMap<String, PartyInfo>,
    invoice_counter: u32,
    receipt_counter: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            invoice_counter: 1,
            receipt_counter: 1,
            ..Default::default()
        }
    }
}

impl DocumentStore for MemoryStore {
    fn list_invoices(&self) -> GatewayResult<Vec<InvoiceRecord>> {
        let mut records: Vec<_> = self.invoices.values().cloned().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    fn get_invoice(&self, id: &str) -> GatewayResult<Option<InvoiceRecord>> {
        Ok(self.invoices.get(id).cloned())
    }

    fn save_invoice(&mut self, record: &InvoiceRecord) -> GatewayResult<()> {
        // last-write-wins by id
        self.invoices.insert(record.id.clone(), record.clone());
        Ok(())
    }

    fn delete_invoice(&mut self, id: &str) -> GatewayResult<()> {
        self.invoices
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| GatewayError::NotFound { id: id.to_string() })
    }

    fn list_products(&self) -> GatewayResult<Vec<Product>> {
        let mut products: Vec<_> = self.products.values().cloned().collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    fn save_product(&mut self, product: &Product) -> GatewayResult<()> {
        self.products.insert(product.id.clone(), product.clone());
        Ok(())
    }

    fn delete_product(&mut self, id: &str) -> GatewayResult<()> {
        self.products
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| GatewayError::NotFound { id: id.to_string() })
    }

    fn list_customers(&self) -> GatewayResult<Vec<PartyInfo>> {
        let mut customers: Vec<_> = self.customers.values().cloned().collect();
        customers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(customers)
    }

    fn save_customer(&mut self, customer: &PartyInfo) -> GatewayResult<()> {
        self.customers
            .insert(customer.name.clone(), customer.clone());
        Ok(())
    }

    fn counter(&self, document_type: DocumentType) -> GatewayResult<u32> {
        Ok(match document_type {
            DocumentType::Invoice => self.invoice_counter,
            DocumentType::Receipt => self.receipt_counter,
        })
    }

    fn set_counter(&mut self, document_type: DocumentType, value: u32) -> GatewayResult<()> {
        match document_type {
            DocumentType::Invoice => self.invoice_counter = value,
            DocumentType::Receipt => self.receipt_counter = value,
        }
        Ok(())
    }
}

// =============================================================================
// Fallback Store
// =============================================================================

/// Try-primary-then-fallback wrapper: reads and writes go to the primary
/// store; when it reports [`GatewayError::Unavailable`] the operation is
/// retried against the fallback and the failure is recorded for the host app
/// to surface as a non-fatal notification.
///
/// This is the offline/local-only mode: cloud down, keep invoicing.
pub struct FallbackStore<P, F> {
    primary: P,
    fallback: F,
    /// Last primary failure, cleared on the next primary success.
    last_error: Option<String>,
}

impl<P: DocumentStore, F: DocumentStore> FallbackStore<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        FallbackStore {
            primary,
            fallback,
            last_error: None,
        }
    }

    /// The most recent primary failure, if the store is degraded.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn write<T>(
        &mut self,
        primary_op: impl FnOnce(&mut P) -> GatewayResult<T>,
        fallback_op: impl FnOnce(&mut F) -> GatewayResult<T>,
    ) -> GatewayResult<T> {
        match primary_op(&mut self.primary) {
            Ok(value) => {
                self.last_error = None;
                Ok(value)
            }
            Err(GatewayError::Unavailable { reason }) => {
                self.last_error = Some(reason);
                fallback_op(&mut self.fallback)
            }
            Err(other) => Err(other),
        }
    }
}

impl<P: DocumentStore, F: DocumentStore> DocumentStore for FallbackStore<P, F> {
    fn list_invoices(&self) -> GatewayResult<Vec<InvoiceRecord>> {
        self.primary
            .list_invoices()
            .or_else(|_| self.fallback.list_invoices())
    }

    fn get_invoice(&self, id: &str) -> GatewayResult<Option<InvoiceRecord>> {
        self.primary
            .get_invoice(id)
            .or_else(|_| self.fallback.get_invoice(id))
    }

    fn save_invoice(&mut self, record: &InvoiceRecord) -> GatewayResult<()> {
        self.write(|p| p.save_invoice(record), |f| f.save_invoice(record))
    }

    fn delete_invoice(&mut self, id: &str) -> GatewayResult<()> {
        self.write(|p| p.delete_invoice(id), |f| f.delete_invoice(id))
    }

    fn list_products(&self) -> GatewayResult<Vec<Product>> {
        self.primary
            .list_products()
            .or_else(|_| self.fallback.list_products())
    }

    fn save_product(&mut self, product: &Product) -> GatewayResult<()> {
        self.write(|p| p.save_product(product), |f| f.save_product(product))
    }

    fn delete_product(&mut self, id: &str) -> GatewayResult<()> {
        self.write(|p| p.delete_product(id), |f| f.delete_product(id))
    }

    fn list_customers(&self) -> GatewayResult<Vec<PartyInfo>> {
        self.primary
            .list_customers()
            .or_else(|_| self.fallback.list_customers())
    }

    fn save_customer(&mut self, customer: &PartyInfo) -> GatewayResult<()> {
        self.write(|p| p.save_customer(customer), |f| f.save_customer(customer))
    }

    fn counter(&self, document_type: DocumentType) -> GatewayResult<u32> {
        self.primary
            .counter(document_type)
            .or_else(|_| self.fallback.counter(document_type))
    }

    fn set_counter(&mut self, document_type: DocumentType, value: u32) -> GatewayResult<()> {
        self.write(
            |p| p.set_counter(document_type, value),
            |f| f.set_counter(document_type, value),
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
