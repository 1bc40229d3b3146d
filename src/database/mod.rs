pub mod manager;
pub mod memory;
pub mod postgres;
pub mod record_id;
pub mod search;
pub mod store;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryBeneficioStore;
pub use postgres::PgBeneficioStore;
pub use record_id::RecordId;
pub use store::{
    BeneficioStore, DeleteResult, Document, InsertResult, ListOptions, StoredBeneficio,
    UpdateResult,
};
