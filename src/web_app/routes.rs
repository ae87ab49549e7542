// web_app/routes.rs - Paths used by links and redirects

use crate::web_app::forms::NEW_ENTITY_PARAM;

pub const CUSTOMERS: &str = "/customers";
pub const INVOICES: &str = "/invoices";

pub fn customer(id: i32) -> String {
    format!("{}/{}", CUSTOMERS, id)
}

pub fn new_customer() -> String {
    format!("{}/{}", CUSTOMERS, NEW_ENTITY_PARAM)
}

pub fn invoice(id: i32) -> String {
    format!("{}/{}", INVOICES, id)
}

pub fn new_invoice() -> String {
    format!("{}/{}", INVOICES, NEW_ENTITY_PARAM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_paths() {
        assert_eq!(customer(12), "/customers/12");
        assert_eq!(new_customer(), "/customers/new");
        assert_eq!(invoice(3), "/invoices/3");
        assert_eq!(new_invoice(), "/invoices/new");
    }
}
