pub mod revenue;
pub mod server;
pub mod session;

pub use revenue::{RevenueRequest, RevenueService};
pub use session::{RevenueSession, SelectionTicket};
