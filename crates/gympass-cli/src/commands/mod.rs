pub mod check_in;
pub mod dispatch;
pub mod gym;
pub mod history;
pub mod schema;
pub mod validate;
