use dash_chart::core::{SeriesEntry, project_line_chart};
use proptest::prelude::*;

proptest! {
    #[test]
    fn line_points_stay_inside_percent_grid(
        values in proptest::collection::vec(-1_000.0f64..1_000.0, 1..64)
    ) {
        let series: Vec<SeriesEntry> = values
            .iter()
            .map(|value| SeriesEntry::new("p", *value))
            .collect();
        let geometry = project_line_chart(&series);
        prop_assert_eq!(geometry.points.len(), values.len());

        for pair in geometry.points.windows(2) {
            prop_assert!(pair[0].x_pct < pair[1].x_pct);
        }
        for point in &geometry.points {
            prop_assert!((0.0..=100.0).contains(&point.x_pct));
            prop_assert!((0.0..=100.0).contains(&point.y_pct));
        }
    }

    #[test]
    fn constant_series_is_centered_vertically(value in -1_000.0f64..1_000.0, len in 1usize..32) {
        let series = vec![SeriesEntry::new("c", value); len];
        let geometry = project_line_chart(&series);
        prop_assert!(geometry.points.iter().all(|point| point.y_pct == 50.0));
    }
}
