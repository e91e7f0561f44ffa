use dash_chart::core::{SeriesEntry, project_bars};
use proptest::prelude::*;

proptest! {
    #[test]
    fn bar_widths_are_proportional_and_max_is_full(
        values in proptest::collection::vec((0u32..1_000_000).prop_map(f64::from), 1..48)
    ) {
        let series: Vec<SeriesEntry> = values
            .iter()
            .map(|value| SeriesEntry::new("x", *value))
            .collect();
        let bars = project_bars(&series);
        prop_assert_eq!(bars.len(), values.len());

        let max = values.iter().copied().fold(0.0f64, f64::max);
        for (i, a) in bars.iter().enumerate() {
            prop_assert!((0.0..=100.0).contains(&a.width_pct));
            if max > 0.0 && values[i] == max {
                prop_assert_eq!(a.width_pct, 100.0);
            }
            for (j, b) in bars.iter().enumerate() {
                if values[i] > values[j] {
                    prop_assert!(a.width_pct > b.width_pct);
                }
            }
        }
    }
}
