//! Products command - list accepted product identifiers.

use filezilla_url::PRODUCTS;

/// Run the products command.
pub fn run() {
    for (name, channel) in PRODUCTS {
        println!("{:<20} {}", name, channel);
    }
}
