// Standardized error codes for MediCart

pub mod validation {
    pub const EMPTY_CART: &str = "VALIDATION_1001";
    pub const MISSING_ADDRESS: &str = "VALIDATION_1002";
    pub const MISSING_SELECTION: &str = "VALIDATION_1003";
    pub const INVALID_INPUT: &str = "VALIDATION_1004";
}

pub mod catalog {
    pub const MEDICINE_NOT_FOUND: &str = "CATALOG_2001";
    pub const UNKNOWN_CATEGORY: &str = "CATALOG_2002";
}

pub mod transport {
    pub const SERVICE_UNAVAILABLE: &str = "TRANSPORT_3001";
}

pub mod storage {
    pub const READ_FAILED: &str = "STORAGE_4001";
    pub const WRITE_FAILED: &str = "STORAGE_4002";
    pub const CORRUPT_STATE: &str = "STORAGE_4003";
}

pub mod config {
    pub const LOAD_FAILED: &str = "CONFIG_5001";
    pub const INVALID_VALUE: &str = "CONFIG_5002";
}

pub mod internal {
    pub const UNEXPECTED: &str = "INTERNAL_9001";
}
