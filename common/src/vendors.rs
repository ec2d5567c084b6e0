/// Defines the contract for resolving device manufacturers from hardware addresses.
pub trait VendorRepository {
    /// Retrieves the vendor name for a hardware address.
    ///
    /// # Arguments
    /// * `mac_addr` - The hardware address as printed by the neighbor table,
    ///   any separator style.
    ///
    /// # Returns
    /// * `Some(String)` - The name of the vendor if found.
    /// * `None` - If the OUI is unknown or the address is malformed.
    fn get_vendor(&self, mac_addr: &str) -> Option<String>;
}
