pub mod range;
pub mod site;
