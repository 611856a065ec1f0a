mod account;
mod balance;
mod equity;
mod trading;

pub use account::{Account, AccountSummary};
pub use balance::{Balance, CurrencyAsset};
pub use equity::{EquityCurve, EquityPoint};
pub use trading::{Bill, ClosedPosition, Order, Paginated, PendingOrder, Position};
