//! Derived feature ratios
//!
//! Two ratios the trained model expects but the user never enters. Both guard
//! a zero denominator by yielding zero: they feed straight into inference and
//! must never be undefined.

/// Bootspace per seat in liters
pub fn bootspace_per_seat(bootspace: f64, seating_capacity: f64) -> f64 {
    if seating_capacity == 0.0 {
        0.0
    } else {
        bootspace / seating_capacity
    }
}

/// Mileage per cc of displacement
pub fn mileage_per_cc(mileage: f64, displacement: f64) -> f64 {
    if displacement == 0.0 {
        0.0
    } else {
        mileage / displacement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootspace_per_seat() {
        assert!((bootspace_per_seat(300.0, 5.0) - 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_bootspace_per_seat_zero_seats() {
        assert_eq!(bootspace_per_seat(300.0, 0.0), 0.0);
    }

    #[test]
    fn test_mileage_per_cc() {
        assert!((mileage_per_cc(18.0, 1200.0) - 0.015).abs() < 1e-12);
    }

    #[test]
    fn test_mileage_per_cc_zero_displacement() {
        assert_eq!(mileage_per_cc(18.0, 0.0), 0.0);
    }
}
