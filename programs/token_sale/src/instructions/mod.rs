pub mod buy;
pub mod claim;
pub mod end_sale;
pub mod fund_vault;
pub mod initialize_sale;
pub mod pause;
pub mod unpause;
pub mod update_price;
pub mod withdraw_treasury;

pub use buy::*;
pub use claim::*;
pub use end_sale::*;
pub use fund_vault::*;
pub use initialize_sale::*;
pub use pause::*;
pub use unpause::*;
pub use update_price::*;
pub use withdraw_treasury::*;
