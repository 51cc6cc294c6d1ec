use fintrack_core::{
    build_allocation, top_slices, AllocationItem, AllocationOptions, Category, PALETTE,
};

const EPSILON: f64 = 1e-9;

fn items(pairs: &[(&str, f64)]) -> Vec<AllocationItem> {
    pairs
        .iter()
        .map(|(label, value)| AllocationItem::new(*label, *value))
        .collect()
}

#[test]
fn empty_and_zero_total_inputs_produce_no_slices() {
    let options = AllocationOptions::default();
    assert!(build_allocation(&[], &options).slices.is_empty());

    let zero = build_allocation(&items(&[("X", 0.0)]), &options);
    assert!(zero.slices.is_empty());
    assert!(zero.is_empty());
    assert_eq!(zero.total_value, 0.0);
}

#[test]
fn sixty_forty_split_matches_expected_angles() {
    let allocation = build_allocation(
        &items(&[("A", 60.0), ("B", 40.0)]),
        &AllocationOptions::default(),
    );
    assert_eq!(allocation.total_value, 100.0);

    let a = &allocation.slices[0];
    assert_eq!(a.label, "A");
    assert!((a.percentage - 60.0).abs() < EPSILON);
    assert_eq!(a.start_angle, 0.0);
    assert!((a.end_angle - 216.0).abs() < EPSILON);
    assert_eq!(
        a.path,
        "M 100.00 100.00 L 200.00 100.00 A 100.00 100.00 0 1 1 19.10 41.22 Z"
    );

    let b = &allocation.slices[1];
    assert!((b.percentage - 40.0).abs() < EPSILON);
    assert!((b.start_angle - 216.0).abs() < EPSILON);
    assert_eq!(b.end_angle, 360.0);
    assert!(b.path.contains(" 0 0 1 "));
}

#[test]
fn many_small_slices_stay_contiguous_and_close_the_circle() {
    let input = (0..37)
        .map(|index| AllocationItem::new(format!("asset-{index}"), 0.1 + index as f64 * 0.37))
        .collect::<Vec<_>>();
    let allocation = build_allocation(&input, &AllocationOptions::default());

    assert_eq!(allocation.slices.len(), input.len());
    assert_eq!(allocation.slices[0].start_angle, 0.0);
    for pair in allocation.slices.windows(2) {
        assert_eq!(pair[1].start_angle, pair[0].end_angle);
    }
    assert_eq!(allocation.slices.last().map(|slice| slice.end_angle), Some(360.0));

    let percent_sum: f64 = allocation.slices.iter().map(|slice| slice.percentage).sum();
    assert!((percent_sum - 100.0).abs() < 1e-6);
    let span_sum: f64 = allocation.slices.iter().map(|slice| slice.span()).sum();
    assert!((span_sum - 360.0).abs() < 1e-6);
}

#[test]
fn slices_keep_input_order() {
    let allocation = build_allocation(
        &items(&[("small", 1.0), ("large", 9.0), ("mid", 5.0)]),
        &AllocationOptions::default(),
    );
    let labels = allocation
        .slices
        .iter()
        .map(|slice| slice.label.as_str())
        .collect::<Vec<_>>();
    assert_eq!(labels, vec!["small", "large", "mid"]);
}

#[test]
fn single_item_is_a_full_circle() {
    let allocation = build_allocation(&items(&[("Stocks", 250.0)]), &AllocationOptions::default());
    let slice = &allocation.slices[0];
    assert_eq!(slice.percentage, 100.0);
    assert_eq!(slice.span(), 360.0);
    assert_eq!(slice.path.matches(" A ").count(), 2);
}

#[test]
fn custom_circle_options_shape_the_path() {
    let options = AllocationOptions {
        center_x: 50.0,
        center_y: 50.0,
        radius: 40.0,
    };
    let allocation = build_allocation(&items(&[("A", 1.0), ("B", 3.0)]), &options);
    assert_eq!(
        allocation.slices[0].path,
        "M 50.00 50.00 L 90.00 50.00 A 40.00 40.00 0 0 1 50.00 90.00 Z"
    );
}

#[test]
fn colors_are_stable_per_label_and_fall_back_to_palette() {
    let options = AllocationOptions::default();
    let first = build_allocation(&items(&[("Food", 10.0), ("Vacation", 5.0)]), &options);
    let second = build_allocation(
        &items(&[("Hobbies", 1.0), ("Vacation", 5.0), ("Food", 10.0)]),
        &options,
    );

    assert_eq!(first.slices[0].color, Category::Food.color().unwrap());
    assert_eq!(second.slices[2].color, Category::Food.color().unwrap());
    assert_eq!(first.slices[1].color, PALETTE[1]);
    assert_eq!(second.slices[0].color, PALETTE[0]);
}

#[test]
fn top_slices_ranks_by_value_and_counts_others() {
    let allocation = build_allocation(
        &items(&[
            ("Cash", 5.0),
            ("Stocks", 50.0),
            ("Crypto", 10.0),
            ("Bonds", 20.0),
            ("Gold", 15.0),
        ]),
        &AllocationOptions::default(),
    );
    let top = top_slices(&allocation.slices, 3);

    let ranked = top
        .ranked
        .iter()
        .map(|entry| (entry.rank, entry.slice.label.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(ranked, vec![(1, "Stocks"), (2, "Bonds"), (3, "Gold")]);
    assert_eq!(top.others_count, 2);
    assert!((top.others_value - 15.0).abs() < EPSILON);
    assert!((top.others_percentage - 15.0).abs() < EPSILON);
}

#[test]
fn top_slices_with_fewer_items_than_n_has_no_others() {
    let allocation = build_allocation(
        &items(&[("A", 1.0), ("B", 1.0)]),
        &AllocationOptions::default(),
    );
    let top = top_slices(&allocation.slices, 3);
    assert_eq!(top.ranked.len(), 2);
    assert_eq!(top.ranked[0].slice.label, "A");
    assert_eq!(top.others_count, 0);
    assert_eq!(top.others_value, 0.0);
}

#[test]
fn allocation_serializes_with_snake_case_fields() {
    let allocation = build_allocation(&items(&[("A", 1.0)]), &AllocationOptions::default());
    let json = serde_json::to_value(&allocation).unwrap();
    assert_eq!(json["total_value"], 1.0);
    assert_eq!(json["slices"][0]["start_angle"], 0.0);
    assert_eq!(json["slices"][0]["end_angle"], 360.0);
}
