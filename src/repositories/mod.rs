mod pg_contact_repository;
mod traits;

pub use pg_contact_repository::PgContactRepository;
pub use traits::ContactRepository;
