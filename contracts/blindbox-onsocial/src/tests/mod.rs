
// --- Unit Tests ---
pub mod unit {
    pub mod admin_test;
    pub mod allocation_test;
    pub mod guards_test;
    pub mod metadata_test;
    pub mod phase_test;
    pub mod purchase_test;
    pub mod registry_test;
    pub mod reveal_test;
    pub mod validation_test;
    pub mod withdraw_test;
}
