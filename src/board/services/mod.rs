//! Application services for accounts, boards, and description enhancement.

mod enhancement;
mod mutation;
pub mod persistence;
mod session;
mod store;

pub use enhancement::DescriptionEnhancementService;
pub use mutation::{BoardService, BoardServiceError, BoardServiceResult};
pub use persistence::{
    CURRENT_SESSION_KEY, PersistenceError, PersistenceResult, USERS_COLLECTION_KEY,
    UserCollectionStore,
};
pub use session::{SessionError, SessionResult, SessionService};
pub use store::BoardStore;
