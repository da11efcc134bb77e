use pdf_forms::{ChoiceField, CosName};
use proptest::prelude::*;

fn pairs() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-z]{1,4}", "[A-C]{0,2}"), 1..12)
}

proptest! {
    #[test]
    fn sorted_write_keeps_pairs_together_and_is_stable(pairs in pairs()) {
        let export: Vec<String> = pairs.iter().map(|(e, _)| e.clone()).collect();
        let display: Vec<String> = pairs.iter().map(|(_, d)| d.clone()).collect();

        let mut field = ChoiceField::list_box("p");
        field.set_sort(true);
        field.set_options_with_display(Some(&export), Some(&display)).unwrap();

        let got: Vec<(String, String)> = field
            .options_export_values()
            .into_iter()
            .zip(field.options_display_values())
            .collect();

        let mut expected = pairs.clone();
        expected.sort_by(|a, b| a.1.cmp(&b.1));
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn unsorted_write_round_trips(pairs in pairs()) {
        let export: Vec<String> = pairs.iter().map(|(e, _)| e.clone()).collect();
        let display: Vec<String> = pairs.iter().map(|(_, d)| d.clone()).collect();

        let mut field = ChoiceField::list_box("p");
        field.set_options_with_display(Some(&export), Some(&display)).unwrap();
        prop_assert_eq!(field.options_export_values(), export);
        prop_assert_eq!(field.options_display_values(), display);
    }

    #[test]
    fn mismatched_lengths_never_mutate(
        export in prop::collection::vec("[a-z]{1,3}", 0..6),
        display in prop::collection::vec("[a-z]{1,3}", 0..6),
    ) {
        prop_assume!(export.len() != display.len());
        let mut field = ChoiceField::combo_box("p");
        field.set_options(Some(&["keep".to_string()]));
        let before = field.dictionary().clone();

        prop_assert!(field.set_options_with_display(Some(&export), Some(&display)).is_err());
        prop_assert_eq!(field.dictionary(), &before);
        prop_assert!(field.dictionary().contains_key(CosName::OPT));
    }
}
