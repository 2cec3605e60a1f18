pub mod cart;
pub mod catalog;
pub mod invoice;
pub mod responder;
pub mod session;

pub use cart::CartLedger;
pub use catalog::Catalog;
pub use invoice::Invoice;
pub use session::StoreSession;
