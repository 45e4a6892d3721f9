//! Property-based tests for levelgate using proptest

use proptest::prelude::*;

use levelgate::prelude::*;

fn any_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Fatal),
        Just(Level::Error),
        Just(Level::Warn),
        Just(Level::Msg),
        Just(Level::Info),
        Just(Level::Verbose),
        Just(Level::Debug),
        Just(Level::Trace),
    ]
}

proptest! {
    /// Clamping twice never changes the result of clamping once.
    #[test]
    fn clamp_is_idempotent(raw in any::<i8>()) {
        let once = LevelFilter::from_raw(raw).clamped();
        prop_assert_eq!(once.clamped(), once);
    }

    /// Clamping is the identity on values already within the range.
    #[test]
    fn clamp_is_identity_within_range(
        raw in DYNAMIC_LEVEL_MIN.raw()..=DYNAMIC_LEVEL_MAX.raw()
    ) {
        let filter = LevelFilter::from_raw(raw);
        prop_assert_eq!(filter.clamped(), filter);
    }

    /// Clamped values always land inside the configured range.
    #[test]
    fn clamp_lands_in_range(raw in any::<i8>()) {
        let clamped = LevelFilter::from_raw(raw).clamped();
        prop_assert!(clamped.raw() >= DYNAMIC_LEVEL_MIN.raw());
        prop_assert!(clamped.raw() <= DYNAMIC_LEVEL_MAX.raw());
    }

    /// Values beyond either bound clamp to exactly that bound.
    #[test]
    fn clamp_saturates_at_the_bounds(raw in any::<i8>()) {
        let clamped = LevelFilter::from_raw(raw).clamped();
        if raw > DYNAMIC_LEVEL_MAX.raw() {
            prop_assert_eq!(clamped, DYNAMIC_LEVEL_MAX);
        } else if raw < DYNAMIC_LEVEL_MIN.raw() {
            prop_assert_eq!(clamped, DYNAMIC_LEVEL_MIN);
        } else {
            prop_assert_eq!(clamped.raw(), raw);
        }
    }

    /// A system stores exactly the clamped form of whatever it is given.
    #[cfg(feature = "dynamic-level")]
    #[test]
    fn set_level_stores_clamped_value(raw in any::<i8>()) {
        let system = LogSystem::new("prop_store", Level::Info);
        system.set_level(LevelFilter::from_raw(raw));
        prop_assert_eq!(system.level(), LevelFilter::from_raw(raw).clamped());
    }

    /// Level ordering is consistent with the raw contract values.
    #[test]
    fn level_ordering_matches_raw(level1 in any_level(), level2 in any_level()) {
        prop_assert_eq!(level1 <= level2, level1.as_i8() <= level2.as_i8());
        prop_assert_eq!(level1 < level2, level1.as_i8() < level2.as_i8());
    }

    /// The threshold comparison is exactly a raw-value comparison.
    #[test]
    fn permits_matches_raw_comparison(raw in any::<i8>(), level in any_level()) {
        prop_assert_eq!(
            LevelFilter::from_raw(raw).permits(level),
            raw >= level.as_i8()
        );
    }

    /// Level string conversions round-trip.
    #[test]
    fn level_str_roundtrip(level in any_level()) {
        let parsed: Level = level.to_str().parse().unwrap();
        prop_assert_eq!(parsed, level);
    }

    /// Display matches to_str.
    #[test]
    fn level_display_matches_to_str(level in any_level()) {
        prop_assert_eq!(format!("{}", level), level.to_str());
    }

    /// Parsing accepts case-insensitive input.
    #[test]
    fn level_parse_case_insensitive(level in any_level(), use_lower in any::<bool>()) {
        let input = if use_lower {
            level.to_str().to_lowercase()
        } else {
            level.to_str().to_string()
        };
        prop_assert_eq!(input.parse::<Level>().unwrap(), level);
    }

    /// Raw round-trip through Level::from_raw.
    #[test]
    fn level_raw_roundtrip(level in any_level()) {
        prop_assert_eq!(Level::from_raw(level.as_i8()), Some(level));
    }

    /// Every tier assignment is exhaustive and exclusive.
    #[test]
    fn tiers_partition_the_levels(level in any_level()) {
        let tiers = [
            level.is_hardwired(),
            level.is_dynamic(),
            level.is_compiled_out(),
        ];
        prop_assert_eq!(tiers.iter().filter(|&&t| t).count(), 1);
    }
}
