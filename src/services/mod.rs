//! Service layer: observable state holders and the load controller.

pub mod observable;
pub mod overview;

pub use observable::{ObservableValue, Observer, SubscriptionHandle};
pub use overview::OverviewController;
