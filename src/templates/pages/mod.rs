pub mod deliveries;
pub mod home;
pub mod orders;

pub use deliveries::{deliveries_page, DeliveriesPageVm};
pub use home::{home_page, HomeVm};
pub use orders::{orders_page, OrdersPageVm};
