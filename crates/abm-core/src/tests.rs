//! Unit tests for abm-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, HelperId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(usize::from(id), 42);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(HelperId(3) > HelperId(2));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(HelperId(0).to_string(), "HelperId(0)");
    }
}

#[cfg(test)]
mod time {
    use crate::{CoreError, Epoch, SimConfig};

    #[test]
    fn epoch_next_and_display() {
        assert_eq!(Epoch::ZERO.next(), Epoch(1));
        assert_eq!(Epoch(12).to_string(), "E12");
    }

    #[test]
    fn epoch_multiple_of() {
        assert!(Epoch(0).is_multiple_of(3));
        assert!(Epoch(6).is_multiple_of(3));
        assert!(!Epoch(7).is_multiple_of(3));
        assert!(!Epoch(4).is_multiple_of(0));
    }

    #[test]
    fn config_end_epoch() {
        assert_eq!(SimConfig::new(5).end_epoch(), Epoch(5));
    }

    #[test]
    fn zero_epochs_rejected() {
        let err = SimConfig::new(0).validate().unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
        assert!(SimConfig::new(1).validate().is_ok());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..16 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SimRng::new(1);
        let mut v: Vec<u32> = (0..26).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort();
        assert_eq!(sorted, (0..26).collect::<Vec<_>>());
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(1);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn gen_bool_clamps() {
        let mut rng = SimRng::new(5);
        assert!(rng.gen_bool(2.0));
        assert!(!rng.gen_bool(-1.0));
    }
}

#[cfg(test)]
mod properties {
    use crate::{CoreError, PropertyBag};

    #[test]
    fn insert_and_get_typed() {
        let mut props = PropertyBag::new();
        assert!(!props.insert("rate", 0.5_f64));
        assert_eq!(props.get::<f64>("rate"), Some(&0.5));
        assert!(props.get::<i32>("rate").is_none());
    }

    #[test]
    fn replace_reports_previous() {
        let mut props = PropertyBag::new().with("n", 1_u32);
        assert!(props.insert("n", "now a string"));
        assert_eq!(props.get::<&str>("n"), Some(&"now a string"));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn require_distinguishes_errors() {
        let props = PropertyBag::new().with("n", 1_u32);
        assert_eq!(*props.require::<u32>("n").unwrap(), 1);
        assert!(matches!(
            props.require::<u32>("missing"),
            Err(CoreError::MissingProperty(k)) if k == "missing"
        ));
        assert!(matches!(
            props.require::<f64>("n"),
            Err(CoreError::PropertyType { .. })
        ));
    }

    #[test]
    fn get_or_insert_with_counter() {
        let mut props = PropertyBag::new();
        for _ in 0..3 {
            *props.get_or_insert_with("visits", || 0_u64).unwrap() += 1;
        }
        assert_eq!(props.get::<u64>("visits"), Some(&3));
        // Wrong type leaves the stored value alone.
        assert!(props.get_or_insert_with("visits", || 0_i8).is_none());
        assert_eq!(props.get::<u64>("visits"), Some(&3));
    }

    #[test]
    fn remove_only_matching_type() {
        let mut props = PropertyBag::new().with("v", vec![1, 2, 3]);
        assert!(props.remove::<String>("v").is_none());
        assert!(props.contains("v"));
        assert_eq!(props.remove::<Vec<i32>>("v"), Some(vec![1, 2, 3]));
        assert!(props.is_empty());
    }
}
