//! Unit tests for gs-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CustomerId, RegisterId};

    #[test]
    fn index_roundtrip() {
        let id = RegisterId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(RegisterId::try_from(3usize).unwrap(), id);
    }

    #[test]
    fn register_numbers_are_one_based() {
        assert_eq!(RegisterId(0).number(), 1);
        assert_eq!(RegisterId(0).to_string(), "register 1");
        assert_eq!(CustomerId(7).to_string(), "customer #7");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn checked_since() {
        assert_eq!(Tick(10).checked_since(Tick(3)), Some(7));
        assert_eq!(Tick(3).checked_since(Tick(3)), Some(0));
        assert_eq!(Tick(3).checked_since(Tick(10)), None);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(6).to_string(), "t=6");
    }
}

#[cfg(test)]
mod customer {
    use crate::{Customer, CustomerId, CustomerKind, Tick};

    fn customer(items: u64) -> Customer {
        Customer::new(CustomerId(0), CustomerKind::A, Tick(0), items)
    }

    #[test]
    fn consume_partial_leaves_no_capacity() {
        let mut c = customer(10);
        assert_eq!(c.consume(4.0), 0.0);
        assert_eq!(c.remaining_items(), 6.0);
        assert!(!c.is_done());
    }

    #[test]
    fn consume_exact_finishes_customer() {
        let mut c = customer(5);
        assert_eq!(c.consume(5.0), 0.0);
        assert_eq!(c.remaining_items(), 0.0);
        assert!(c.is_done());
    }

    #[test]
    fn consume_excess_returns_unused_capacity() {
        let mut c = customer(3);
        assert_eq!(c.consume(7.5), 4.5);
        assert_eq!(c.remaining_items(), 0.0);
    }

    #[test]
    fn fractional_capacity() {
        let mut c = customer(2);
        assert_eq!(c.consume(0.5), 0.0);
        assert_eq!(c.consume(0.5), 0.0);
        assert_eq!(c.remaining_items(), 1.0);
    }

    #[test]
    fn consumed_total_equals_initial_items() {
        let mut c = customer(9);
        let mut used = 0.0;
        for cap in [2.0, 0.5, 3.5, 10.0] {
            used += cap - c.consume(cap);
        }
        assert_eq!(used, 9.0);
        assert!(c.remaining_items() >= 0.0);
    }

    #[test]
    fn kind_parse() {
        assert_eq!("A".parse::<CustomerKind>().unwrap(), CustomerKind::A);
        assert_eq!("B".parse::<CustomerKind>().unwrap(), CustomerKind::B);
        assert!("C".parse::<CustomerKind>().is_err());
        assert!("a".parse::<CustomerKind>().is_err());
    }

    #[test]
    fn kind_a_orders_before_b() {
        assert!(CustomerKind::A < CustomerKind::B);
    }
}

#[cfg(test)]
mod config {
    use crate::StoreConfig;

    #[test]
    fn last_register_is_training() {
        let cfg = StoreConfig::new(3);
        assert_eq!(cfg.rate_for(0), 1.0);
        assert_eq!(cfg.rate_for(1), 1.0);
        assert_eq!(cfg.rate_for(2), 0.5);
    }

    #[test]
    fn single_register_is_training() {
        assert_eq!(StoreConfig::new(1).rate_for(0), 0.5);
    }

    #[test]
    fn validate_rejects_zero_registers() {
        assert!(StoreConfig::new(0).validate().is_err());
        assert!(StoreConfig::new(1).validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_rates() {
        let mut cfg = StoreConfig::new(2);
        cfg.base_rate = 0.0;
        assert!(cfg.validate().is_err());
        cfg.base_rate = 1.0;
        cfg.training_slowdown = f64::NAN;
        assert!(cfg.validate().is_err());
    }
}
