use kernel::prelude::entity::{RentalRecord, Vehicle, VehicleStatus};

use crate::service::RentalSystem;

const VEHICLE_RULE: usize = 92;
const HISTORY_RULE: usize = 79;

impl<Store> RentalSystem<Store> {
    /// Vehicle table, optionally limited to one status. Ends with a blank line.
    pub fn display_vehicles(&self, status: Option<VehicleStatus>) -> String {
        let mut out = match status {
            None => "\n=== All Vehicles ===\n".to_string(),
            Some(status) => format!("\n=== {status} Vehicles ===\n"),
        };
        out.push_str(&format!(
            "|{:<16} | {:<12} | {:<12} | {:<12} | {:<6} | {:<18} |\n",
            " Type", "Plate", "Make", "Model", "Year", "Status"
        ));
        out.push_str(&rule(VEHICLE_RULE));

        let shown = self
            .vehicles()
            .iter()
            .filter(|vehicle| status.map_or(true, |wanted| vehicle.status() == wanted))
            .map(vehicle_row)
            .collect::<Vec<_>>();
        if shown.is_empty() {
            match status {
                None => out.push_str("  No Vehicles found.\n"),
                Some(status) => out.push_str(&format!("  No vehicles with Status: {status}\n")),
            }
        }
        shown.iter().for_each(|row| out.push_str(row));
        out.push('\n');
        out
    }

    pub fn display_all_customers(&self) -> String {
        self.customers()
            .iter()
            .map(|customer| format!("  {customer}\n"))
            .collect()
    }

    /// History table in insertion order. The customer column shows the
    /// registered name, or the raw id when the customer is unknown.
    pub fn display_rental_history(&self) -> String {
        if self.history().is_empty() {
            return "  No rental history found.\n".to_string();
        }
        let mut out = format!(
            "|{:<10} | {:<12} | {:<20} | {:<12} | {:<12} |\n",
            " Type", "Plate", "Customer", "Date", "Amount"
        );
        out.push_str(&rule(HISTORY_RULE));
        for record in self.history().iter() {
            out.push_str(&self.history_row(record));
        }
        out.push('\n');
        out
    }

    fn history_row(&self, record: &RentalRecord) -> String {
        let customer = self
            .find_customer_by_id(*record.customer_id())
            .map(|customer| customer.customer_name().to_string())
            .unwrap_or_else(|| record.customer_id().to_string());
        format!(
            "| {:<9} | {:<12} | {:<20} | {:<12} | ${:<11.2} |\n",
            record.record_type(),
            record.license_plate(),
            customer,
            record.record_date(),
            record.total_amount().value()
        )
    }
}

fn vehicle_row(vehicle: &Vehicle) -> String {
    format!(
        "| {:<15} | {:<12} | {:<12} | {:<12} | {:<6} | {:<18} |\n",
        vehicle.kind().display_name(),
        vehicle.plate_label(),
        vehicle.make(),
        vehicle.model(),
        vehicle.year().as_ref(),
        vehicle.status()
    )
}

fn rule(width: usize) -> String {
    format!("|{}|\n", "-".repeat(width))
}
